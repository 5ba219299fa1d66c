// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::asn1::{AlgorithmIdentifier, Tlv};
use crate::error::X509Error;
use sha1::Sha1;
use sha2::{Digest as _, Sha224, Sha256, Sha384, Sha512};

pub const OID_SHA1: &str = "1.3.14.3.2.26";
pub const OID_SHA224: &str = "2.16.840.1.101.3.4.2.4";
pub const OID_SHA256: &str = "2.16.840.1.101.3.4.2.1";
pub const OID_SHA384: &str = "2.16.840.1.101.3.4.2.2";
pub const OID_SHA512: &str = "2.16.840.1.101.3.4.2.3";

pub const OID_RSASSA_PSS: &str = "1.2.840.113549.1.1.10";
const OID_MGF1: &str = "1.2.840.113549.1.1.8";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    pub fn from_oid(oid: &str) -> Option<Self> {
        match oid {
            OID_SHA1 => Some(Self::Sha1),
            OID_SHA224 => Some(Self::Sha224),
            OID_SHA256 => Some(Self::Sha256),
            OID_SHA384 => Some(Self::Sha384),
            OID_SHA512 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Reads a hash AlgorithmIdentifier (parameters, if any, are ignored).
    pub fn from_algorithm_identifier(tlv: Tlv<'_>) -> Result<Self, X509Error> {
        let id = AlgorithmIdentifier::from_tlv(tlv)?;
        let oid = id.oid.to_string();
        Self::from_oid(&oid).ok_or(X509Error::UnsupportedAlgorithm(oid))
    }

    pub fn oid(self) -> &'static str {
        match self {
            Self::Sha1 => OID_SHA1,
            Self::Sha224 => OID_SHA224,
            Self::Sha256 => OID_SHA256,
            Self::Sha384 => OID_SHA384,
            Self::Sha512 => OID_SHA512,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }

    /// Digest size in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => Sha1::digest(data).to_vec(),
            Self::Sha224 => Sha224::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

/// Signature scheme of a certificate or revocation response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    RsaPkcs1 {
        digest: DigestAlgorithm,
    },
    /// RSASSA-PSS with the parameters carried by the AlgorithmIdentifier.
    RsaPss {
        digest: DigestAlgorithm,
        mgf_digest: DigestAlgorithm,
        salt_length: usize,
    },
    Ecdsa {
        digest: DigestAlgorithm,
    },
}

impl SignatureAlgorithm {
    pub fn from_algorithm_identifier(tlv: Tlv<'_>) -> Result<Self, X509Error> {
        let id = AlgorithmIdentifier::from_tlv(tlv)?;
        Self::from_parts(&id.oid.to_string(), id.non_null_parameters())
    }

    pub fn from_parts(oid: &str, parameters: Option<Tlv<'_>>) -> Result<Self, X509Error> {
        use DigestAlgorithm as D;

        let algorithm = match oid {
            "1.2.840.113549.1.1.5" => Self::RsaPkcs1 { digest: D::Sha1 },
            "1.2.840.113549.1.1.14" => Self::RsaPkcs1 { digest: D::Sha224 },
            "1.2.840.113549.1.1.11" => Self::RsaPkcs1 { digest: D::Sha256 },
            "1.2.840.113549.1.1.12" => Self::RsaPkcs1 { digest: D::Sha384 },
            "1.2.840.113549.1.1.13" => Self::RsaPkcs1 { digest: D::Sha512 },
            OID_RSASSA_PSS => Self::pss_from_parameters(parameters)?,
            "1.2.840.10045.4.1" => Self::Ecdsa { digest: D::Sha1 },
            "1.2.840.10045.4.3.1" => Self::Ecdsa { digest: D::Sha224 },
            "1.2.840.10045.4.3.2" => Self::Ecdsa { digest: D::Sha256 },
            "1.2.840.10045.4.3.3" => Self::Ecdsa { digest: D::Sha384 },
            "1.2.840.10045.4.3.4" => Self::Ecdsa { digest: D::Sha512 },
            other => return Err(X509Error::UnsupportedAlgorithm(other.to_string())),
        };
        Ok(algorithm)
    }

    // RSASSA-PSS-params ::= SEQUENCE {
    //   hashAlgorithm    [0] HashAlgorithm    DEFAULT sha1,
    //   maskGenAlgorithm [1] MaskGenAlgorithm DEFAULT mgf1SHA1,
    //   saltLength       [2] INTEGER          DEFAULT 20,
    //   trailerField     [3] TrailerField     DEFAULT trailerFieldBC }
    fn pss_from_parameters(parameters: Option<Tlv<'_>>) -> Result<Self, X509Error> {
        let mut digest = DigestAlgorithm::Sha1;
        let mut mgf_digest = DigestAlgorithm::Sha1;
        let mut salt_length = 20usize;

        if let Some(parameters) = parameters {
            let mut seq = parameters.sequence()?;

            if let Some(hash) = seq.next_if_context(0)? {
                digest = DigestAlgorithm::from_algorithm_identifier(hash.explicit()?)?;
            }
            if let Some(mgf) = seq.next_if_context(1)? {
                let mgf = AlgorithmIdentifier::from_tlv(mgf.explicit()?)?;
                if mgf.oid.to_string() != OID_MGF1 {
                    return Err(X509Error::UnsupportedAlgorithm(format!("mask generation {}", mgf.oid)));
                }
                let hash = mgf
                    .parameters
                    .ok_or_else(|| X509Error::Der("MGF1 without hash parameters".to_string()))?;
                mgf_digest = DigestAlgorithm::from_algorithm_identifier(hash)?;
            }
            if let Some(salt) = seq.next_if_context(2)? {
                salt_length = usize::try_from(salt.explicit()?.small_uint()?)
                    .map_err(|_| X509Error::Der("salt length out of range".to_string()))?;
            }
            if let Some(trailer) = seq.next_if_context(3)? {
                if trailer.explicit()?.small_uint()? != 1 {
                    return Err(X509Error::UnsupportedAlgorithm("PSS trailer field".to_string()));
                }
            }
            seq.finish()?;
        }

        Ok(Self::RsaPss {
            digest,
            mgf_digest,
            salt_length,
        })
    }

    pub fn digest(&self) -> DigestAlgorithm {
        match self {
            Self::RsaPkcs1 { digest } | Self::RsaPss { digest, .. } | Self::Ecdsa { digest } => *digest,
        }
    }

    /// Stable identifier, e.g. `RSA_SHA256`, `RSA_SSA_PSS_SHA256_MGF1`, `ECDSA_SHA384`.
    pub fn name(&self) -> String {
        match self {
            Self::RsaPkcs1 { digest } => format!("RSA_{}", digest.name()),
            Self::RsaPss { digest, .. } => format!("RSA_SSA_PSS_{}_MGF1", digest.name()),
            Self::Ecdsa { digest } => format!("ECDSA_{}", digest.name()),
        }
    }
}
