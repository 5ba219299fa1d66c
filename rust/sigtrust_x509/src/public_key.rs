// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Subject public keys and signature verification.
//!
//! The primitives come from RustCrypto (`rsa`, `p256`, `p384`, `p521`); this
//! module only maps a [`SignatureAlgorithm`] onto them. Every failure surfaces
//! as an [`X509Error`]: a malformed key or signature never panics.

use crate::algorithm::{DigestAlgorithm, SignatureAlgorithm};
use crate::asn1::{AlgorithmIdentifier, Tlv};
use crate::error::X509Error;
use rsa::pkcs1::DecodeRsaPublicKey as _;
use rsa::traits::PublicKeyParts as _;
use rsa::{Pkcs1v15Sign, Pss, RsaPublicKey};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use signature::hazmat::PrehashVerifier as _;
use signature::Verifier as _;

const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    P256,
    P384,
    P521,
}

impl EcCurve {
    fn from_oid(oid: &str) -> Option<Self> {
        match oid {
            "1.2.840.10045.3.1.7" => Some(Self::P256),
            "1.3.132.0.34" => Some(Self::P384),
            "1.3.132.0.35" => Some(Self::P521),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// rsaEncryption, or an RSASSA-PSS restricted key.
    Rsa,
    Ec(EcCurve),
    Other(String),
}

/// A decoded SubjectPublicKeyInfo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyInfo {
    kind: KeyKind,
    algorithm_oid: String,
    key_bits: Vec<u8>,
}

impl PublicKeyInfo {
    pub fn from_spki_der(spki: &[u8]) -> Result<Self, X509Error> {
        let mut seq = Tlv::parse(spki)?.sequence()?;
        let algorithm = AlgorithmIdentifier::from_tlv(seq.next()?)?;
        let key_bits = seq.next()?.bit_string()?.to_vec();
        seq.finish()?;

        let algorithm_oid = algorithm.oid.to_string();
        let kind = match algorithm_oid.as_str() {
            OID_RSA_ENCRYPTION | crate::algorithm::OID_RSASSA_PSS => KeyKind::Rsa,
            OID_EC_PUBLIC_KEY => {
                let curve = algorithm
                    .non_null_parameters()
                    .ok_or_else(|| X509Error::Certificate("EC key without named curve".to_string()))?
                    .oid()?
                    .to_string();
                match EcCurve::from_oid(&curve) {
                    Some(curve) => KeyKind::Ec(curve),
                    None => KeyKind::Other(format!("{algorithm_oid} on {curve}")),
                }
            }
            other => KeyKind::Other(other.to_string()),
        };

        Ok(Self {
            kind,
            algorithm_oid,
            key_bits,
        })
    }

    pub fn kind(&self) -> &KeyKind {
        &self.kind
    }

    pub fn algorithm_oid(&self) -> &str {
        &self.algorithm_oid
    }

    /// Content of the subjectPublicKey BIT STRING (what CertID key hashes cover).
    pub fn key_bits(&self) -> &[u8] {
        &self.key_bits
    }

    pub fn verify(
        &self,
        algorithm: &SignatureAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), X509Error> {
        match (&self.kind, algorithm) {
            (KeyKind::Rsa, SignatureAlgorithm::RsaPkcs1 { digest }) => {
                let key = self.rsa_key()?;
                let hashed = digest.digest(message);
                key.verify(pkcs1v15_scheme(*digest), &hashed, signature)
                    .map_err(|e| X509Error::Signature(format!("RSA PKCS#1 v1.5: {e}")))
            }
            (
                KeyKind::Rsa,
                SignatureAlgorithm::RsaPss {
                    digest,
                    mgf_digest,
                    salt_length,
                },
            ) => {
                if digest != mgf_digest {
                    return Err(X509Error::UnsupportedAlgorithm(format!(
                        "RSASSA-PSS with {} and MGF1-{}",
                        digest.name(),
                        mgf_digest.name()
                    )));
                }
                let key = self.rsa_key()?;
                // The salt must fit in the encoded message next to the hash.
                let room = key.size().saturating_sub(digest.output_len() + 2);
                if *salt_length > room {
                    return Err(X509Error::Signature(format!(
                        "RSASSA-PSS salt length {salt_length} exceeds {room} bytes for this key"
                    )));
                }
                let hashed = digest.digest(message);
                key.verify(pss_scheme(*digest, *salt_length), &hashed, signature)
                    .map_err(|e| X509Error::Signature(format!("RSASSA-PSS: {e}")))
            }
            (KeyKind::Ec(curve), SignatureAlgorithm::Ecdsa { digest }) => {
                verify_ecdsa(*curve, *digest, &self.key_bits, message, signature)
            }
            (kind, algorithm) => Err(X509Error::UnsupportedAlgorithm(format!(
                "{} signature with {kind:?} key",
                algorithm.name()
            ))),
        }
    }

    fn rsa_key(&self) -> Result<RsaPublicKey, X509Error> {
        RsaPublicKey::from_pkcs1_der(&self.key_bits)
            .map_err(|e| X509Error::Certificate(format!("bad RSA public key: {e}")))
    }
}

fn pkcs1v15_scheme(digest: DigestAlgorithm) -> Pkcs1v15Sign {
    match digest {
        DigestAlgorithm::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
        DigestAlgorithm::Sha224 => Pkcs1v15Sign::new::<Sha224>(),
        DigestAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        DigestAlgorithm::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
        DigestAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
    }
}

fn pss_scheme(digest: DigestAlgorithm, salt_length: usize) -> Pss {
    match digest {
        DigestAlgorithm::Sha1 => Pss::new_with_salt::<Sha1>(salt_length),
        DigestAlgorithm::Sha224 => Pss::new_with_salt::<Sha224>(salt_length),
        DigestAlgorithm::Sha256 => Pss::new_with_salt::<Sha256>(salt_length),
        DigestAlgorithm::Sha384 => Pss::new_with_salt::<Sha384>(salt_length),
        DigestAlgorithm::Sha512 => Pss::new_with_salt::<Sha512>(salt_length),
    }
}

fn verify_ecdsa(
    curve: EcCurve,
    digest: DigestAlgorithm,
    point: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<(), X509Error> {
    let failed = |_: signature::Error| X509Error::Signature("ECDSA signature verification failed".to_string());

    match curve {
        EcCurve::P256 => {
            let vk = p256::ecdsa::VerifyingKey::from_sec1_bytes(point)
                .map_err(|e| X509Error::Certificate(format!("bad P-256 public key: {e}")))?;
            let sig = p256::ecdsa::Signature::from_der(signature)
                .map_err(|e| X509Error::Signature(format!("bad ECDSA signature bytes: {e}")))?;
            vk.verify_prehash(&digest.digest(message), &sig).map_err(failed)
        }
        EcCurve::P384 => {
            let vk = p384::ecdsa::VerifyingKey::from_sec1_bytes(point)
                .map_err(|e| X509Error::Certificate(format!("bad P-384 public key: {e}")))?;
            let sig = p384::ecdsa::Signature::from_der(signature)
                .map_err(|e| X509Error::Signature(format!("bad ECDSA signature bytes: {e}")))?;
            vk.verify_prehash(&digest.digest(message), &sig).map_err(failed)
        }
        EcCurve::P521 => {
            // P-521 keys are only paired with SHA-512 here.
            if digest != DigestAlgorithm::Sha512 {
                return Err(X509Error::UnsupportedAlgorithm(format!(
                    "ECDSA P-521 with {}",
                    digest.name()
                )));
            }
            let vk = p521::ecdsa::VerifyingKey::from_sec1_bytes(point)
                .map_err(|e| X509Error::Certificate(format!("bad P-521 public key: {e}")))?;
            let sig = p521::ecdsa::Signature::from_der(signature)
                .map_err(|e| X509Error::Signature(format!("bad ECDSA signature bytes: {e}")))?;
            vk.verify(message, &sig).map_err(failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs1::EncodeRsaPublicKey as _;
    use rsa::BigUint;

    fn rsa_1024() -> PublicKeyInfo {
        let key = RsaPublicKey::new(BigUint::from_bytes_be(&[0xC1; 128]), BigUint::from(65_537u32)).unwrap();
        PublicKeyInfo {
            kind: KeyKind::Rsa,
            algorithm_oid: OID_RSA_ENCRYPTION.to_string(),
            key_bits: key.to_pkcs1_der().unwrap().as_bytes().to_vec(),
        }
    }

    fn pss(salt_length: usize) -> SignatureAlgorithm {
        SignatureAlgorithm::RsaPss {
            digest: DigestAlgorithm::Sha256,
            mgf_digest: DigestAlgorithm::Sha256,
            salt_length,
        }
    }

    #[test]
    fn oversized_pss_salt_is_a_signature_failure() {
        let key = rsa_1024();
        for salt_length in [usize::MAX, usize::MAX - 33, 1 << 20, 128 - 32 - 1] {
            assert!(
                matches!(key.verify(&pss(salt_length), b"msg", &[1; 128]), Err(X509Error::Signature(_))),
                "salt length {salt_length}"
            );
        }
    }

    #[test]
    fn bogus_pss_signature_fails_without_panicking() {
        let key = rsa_1024();
        assert!(key.verify(&pss(32), b"msg", &[1; 128]).is_err());
        assert!(key.verify(&pss(0), b"msg", &[]).is_err());
    }

    #[test]
    fn mismatched_key_and_algorithm_is_unsupported() {
        let key = rsa_1024();
        assert!(matches!(
            key.verify(&SignatureAlgorithm::Ecdsa { digest: DigestAlgorithm::Sha256 }, b"msg", &[0; 64]),
            Err(X509Error::UnsupportedAlgorithm(_))
        ));
    }
}
