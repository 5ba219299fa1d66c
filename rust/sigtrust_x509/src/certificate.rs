// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::algorithm::{DigestAlgorithm, SignatureAlgorithm};
use crate::asn1::{strip_leading_zeros, Tlv};
use crate::error::X509Error;
use crate::public_key::PublicKeyInfo;
use crate::trust_service::TrustServiceRecord;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;
use x509_parser::prelude::{FromDer, ParsedExtension, X509Certificate, X509Name};

const OID_CERTIFICATE_POLICIES: &str = "2.5.29.32";

/// Bits of the KeyUsage extension, named as policies refer to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyUsageBit {
    DigitalSignature,
    NonRepudiation,
    KeyEncipherment,
    DataEncipherment,
    KeyAgreement,
    KeyCertSign,
    CrlSign,
    EncipherOnly,
    DecipherOnly,
}

impl KeyUsageBit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DigitalSignature => "digitalSignature",
            Self::NonRepudiation => "nonRepudiation",
            Self::KeyEncipherment => "keyEncipherment",
            Self::DataEncipherment => "dataEncipherment",
            Self::KeyAgreement => "keyAgreement",
            Self::KeyCertSign => "keyCertSign",
            Self::CrlSign => "crlSign",
            Self::EncipherOnly => "encipherOnly",
            Self::DecipherOnly => "decipherOnly",
        }
    }
}

/// Parts of a DER certificate needed to recompute hashes and verify signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Encoded {
    der: Arc<Vec<u8>>,
    subject_name_der: Vec<u8>,
    issuer_name_der: Vec<u8>,
    public_key: Option<PublicKeyInfo>,
    tbs_der: Vec<u8>,
    signature_algorithm: Result<SignatureAlgorithm, String>,
    signature: Vec<u8>,
}

impl Encoded {
    fn verify_issued_by(&self, issuer: &Encoded) -> Result<(), X509Error> {
        let algorithm = self
            .signature_algorithm
            .as_ref()
            .map_err(|oid| X509Error::UnsupportedAlgorithm(oid.clone()))?;
        let key = issuer
            .public_key
            .as_ref()
            .ok_or_else(|| X509Error::UnsupportedAlgorithm("issuer public key".to_string()))?;
        key.verify(algorithm, &self.tbs_der, &self.signature)
    }
}

/// Read-only view of one certificate in a validation graph.
///
/// Built once through [`CertificateWrapperBuilder`] and shared behind `Arc`.
/// The ancestor chain is ordered from the issuer upwards and never contains
/// the certificate itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateWrapper {
    id: String,
    subject: String,
    issuer: String,
    serial_number: Vec<u8>,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
    trusted: bool,
    trusted_chain: bool,
    chain: Vec<Arc<CertificateWrapper>>,
    trust_services: Vec<TrustServiceRecord>,
    key_usages: Vec<KeyUsageBit>,
    extended_key_usages: Vec<String>,
    policy_ids: Vec<String>,
    ca: bool,
    signature_valid: bool,
    encoded: Option<Encoded>,
}

impl CertificateWrapper {
    pub fn builder(id: impl Into<String>) -> CertificateWrapperBuilder {
        CertificateWrapperBuilder::new(id)
    }

    /// Parses DER with default flags: untrusted, no chain, signature not verified.
    pub fn from_der(der: &[u8]) -> Result<Self, X509Error> {
        CertificateWrapperBuilder::from_der(der)?.build()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Serial number magnitude, big-endian, without leading zero octets.
    pub fn serial_number(&self) -> &[u8] {
        &self.serial_number
    }

    pub fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    pub fn not_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    /// Whether `date` lies within `[not_before, not_after]`.
    pub fn is_valid_at(&self, date: DateTime<Utc>) -> bool {
        self.not_before <= date && date <= self.not_after
    }

    /// Explicitly configured as a trust anchor.
    pub fn is_trusted(&self) -> bool {
        self.trusted
    }

    /// Trusted itself or chains to a trusted ancestor.
    pub fn is_trusted_chain(&self) -> bool {
        self.trusted_chain
    }

    pub fn chain(&self) -> &[Arc<CertificateWrapper>] {
        &self.chain
    }

    pub fn trust_services(&self) -> &[TrustServiceRecord] {
        &self.trust_services
    }

    pub fn key_usages(&self) -> &[KeyUsageBit] {
        &self.key_usages
    }

    pub fn has_key_usage(&self, bit: KeyUsageBit) -> bool {
        self.key_usages.contains(&bit)
    }

    pub fn extended_key_usages(&self) -> &[String] {
        &self.extended_key_usages
    }

    pub fn has_extended_key_usage(&self, oid: &str) -> bool {
        self.extended_key_usages.iter().any(|e| e == oid)
    }

    pub fn policy_ids(&self) -> &[String] {
        &self.policy_ids
    }

    /// BasicConstraints cA flag.
    pub fn is_ca(&self) -> bool {
        self.ca
    }

    /// Whether the issuer's signature over this certificate verified.
    pub fn is_signature_valid(&self) -> bool {
        self.signature_valid
    }

    pub fn is_self_issued(&self) -> bool {
        match &self.encoded {
            Some(e) => e.subject_name_der == e.issuer_name_der,
            None => self.subject == self.issuer,
        }
    }

    pub fn der(&self) -> Option<&[u8]> {
        self.encoded.as_ref().map(|e| e.der.as_slice())
    }

    pub fn subject_name_der(&self) -> Option<&[u8]> {
        self.encoded.as_ref().map(|e| e.subject_name_der.as_slice())
    }

    pub fn issuer_name_der(&self) -> Option<&[u8]> {
        self.encoded.as_ref().map(|e| e.issuer_name_der.as_slice())
    }

    pub fn public_key(&self) -> Option<&PublicKeyInfo> {
        self.encoded.as_ref().and_then(|e| e.public_key.as_ref())
    }

    pub fn signature_algorithm(&self) -> Option<SignatureAlgorithm> {
        self.encoded
            .as_ref()
            .and_then(|e| e.signature_algorithm.as_ref().ok().copied())
    }

    /// Digest of the full DER encoding.
    pub fn digest(&self, algorithm: DigestAlgorithm) -> Option<Vec<u8>> {
        self.der().map(|der| algorithm.digest(der))
    }

    /// Verifies `issuer`'s signature over this certificate.
    ///
    /// Requires both certificates to carry their encoding; synthetic wrappers
    /// report [`X509Error::Certificate`].
    pub fn verify_issued_by(&self, issuer: &CertificateWrapper) -> Result<(), X509Error> {
        match (&self.encoded, &issuer.encoded) {
            (Some(subject), Some(issuer)) => subject.verify_issued_by(issuer),
            _ => Err(X509Error::Certificate(
                "signature check needs encoded certificates".to_string(),
            )),
        }
    }

    /// Whether `name_der` (a full Name encoding) designates this certificate's subject.
    ///
    /// Encodings are compared first; a name re-encoded with other string types
    /// still matches on its rendered form.
    pub fn has_subject_name(&self, name_der: &[u8]) -> bool {
        if self.subject_name_der() == Some(name_der) {
            return true;
        }
        match X509Name::from_der(name_der) {
            Ok((rest, name)) if rest.is_empty() => name.to_string() == self.subject,
            _ => false,
        }
    }

    /// Name chaining plus a verifying signature.
    pub fn is_issued_by(&self, issuer: &CertificateWrapper) -> bool {
        let names_chain = match (self.issuer_name_der(), issuer.subject_name_der()) {
            (Some(a), Some(b)) => a == b,
            _ => self.issuer == issuer.subject,
        };
        names_chain && self.verify_issued_by(issuer).is_ok()
    }
}

/// Consuming builder for [`CertificateWrapper`].
#[derive(Debug, Clone)]
pub struct CertificateWrapperBuilder {
    id: String,
    subject: String,
    issuer: String,
    serial_number: Vec<u8>,
    not_before: Option<DateTime<Utc>>,
    not_after: Option<DateTime<Utc>>,
    trusted: bool,
    trusted_chain: Option<bool>,
    chain: Vec<Arc<CertificateWrapper>>,
    trust_services: Vec<TrustServiceRecord>,
    key_usages: Vec<KeyUsageBit>,
    extended_key_usages: Vec<String>,
    policy_ids: Vec<String>,
    ca: bool,
    signature_valid: bool,
    encoded: Option<Encoded>,
}

impl CertificateWrapperBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: String::new(),
            issuer: String::new(),
            serial_number: Vec::new(),
            not_before: None,
            not_after: None,
            trusted: false,
            trusted_chain: None,
            chain: Vec::new(),
            trust_services: Vec::new(),
            key_usages: Vec::new(),
            extended_key_usages: Vec::new(),
            policy_ids: Vec::new(),
            ca: false,
            signature_valid: false,
            encoded: None,
        }
    }

    /// Extracts identity, validity, extensions and the signed envelope from DER.
    ///
    /// The id is `C-` followed by the upper-case hex SHA-256 of the encoding.
    pub fn from_der(der: &[u8]) -> Result<Self, X509Error> {
        let (rest, cert) = X509Certificate::from_der(der)
            .map_err(|e| X509Error::Certificate(format!("x509 parse failed: {e:?}")))?;
        if !rest.is_empty() {
            return Err(X509Error::Certificate("trailing data after certificate".to_string()));
        }

        let id = format!("C-{}", hex::encode_upper(DigestAlgorithm::Sha256.digest(der)));
        let timestamp = |ts: i64| {
            DateTime::<Utc>::from_timestamp(ts, 0)
                .ok_or_else(|| X509Error::Certificate(format!("validity time {ts} out of range")))
        };

        let mut builder = Self::new(id)
            .subject(cert.subject().to_string())
            .issuer(cert.issuer().to_string())
            .serial_number(cert.raw_serial())
            .validity(
                timestamp(cert.validity().not_before.timestamp())?,
                timestamp(cert.validity().not_after.timestamp())?,
            );

        for ext in cert.extensions() {
            match ext.parsed_extension() {
                ParsedExtension::KeyUsage(ku) => {
                    let bits = [
                        (ku.digital_signature(), KeyUsageBit::DigitalSignature),
                        (ku.non_repudiation(), KeyUsageBit::NonRepudiation),
                        (ku.key_encipherment(), KeyUsageBit::KeyEncipherment),
                        (ku.data_encipherment(), KeyUsageBit::DataEncipherment),
                        (ku.key_agreement(), KeyUsageBit::KeyAgreement),
                        (ku.key_cert_sign(), KeyUsageBit::KeyCertSign),
                        (ku.crl_sign(), KeyUsageBit::CrlSign),
                        (ku.encipher_only(), KeyUsageBit::EncipherOnly),
                        (ku.decipher_only(), KeyUsageBit::DecipherOnly),
                    ];
                    builder.key_usages = bits.iter().filter(|(set, _)| *set).map(|(_, b)| *b).collect();
                }
                ParsedExtension::ExtendedKeyUsage(eku) => {
                    // x509-parser folds well-known purposes into booleans.
                    let known = [
                        (eku.any, "2.5.29.37.0"),
                        (eku.server_auth, "1.3.6.1.5.5.7.3.1"),
                        (eku.client_auth, "1.3.6.1.5.5.7.3.2"),
                        (eku.code_signing, "1.3.6.1.5.5.7.3.3"),
                        (eku.email_protection, "1.3.6.1.5.5.7.3.4"),
                        (eku.time_stamping, crate::EKU_TIME_STAMPING),
                        (eku.ocsp_signing, crate::EKU_OCSP_SIGNING),
                    ];
                    let mut oids: Vec<String> = known
                        .iter()
                        .filter(|(set, _)| *set)
                        .map(|(_, oid)| oid.to_string())
                        .collect();
                    oids.extend(eku.other.iter().map(|oid| oid.to_id_string()));
                    builder.extended_key_usages = oids;
                }
                ParsedExtension::BasicConstraints(bc) => {
                    builder.ca = bc.ca;
                }
                _ => {
                    if ext.oid.to_id_string() == OID_CERTIFICATE_POLICIES {
                        builder.policy_ids = parse_policy_ids(ext.value)?;
                    }
                }
            }
        }

        let public_key = match PublicKeyInfo::from_spki_der(cert.public_key().raw) {
            Ok(key) => Some(key),
            Err(e) => {
                debug!(error = %e, "certificate public key not usable for verification");
                None
            }
        };

        builder.encoded = Some(encoded_parts(der, &cert, public_key)?);
        Ok(builder)
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    pub fn serial_number(mut self, serial: &[u8]) -> Self {
        self.serial_number = strip_leading_zeros(serial).to_vec();
        self
    }

    pub fn validity(mut self, not_before: DateTime<Utc>, not_after: DateTime<Utc>) -> Self {
        self.not_before = Some(not_before);
        self.not_after = Some(not_after);
        self
    }

    pub fn trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }

    /// Overrides the trusted-chain flag otherwise derived from the ancestors.
    pub fn trusted_chain(mut self, trusted_chain: bool) -> Self {
        self.trusted_chain = Some(trusted_chain);
        self
    }

    /// Ancestors ordered from the direct issuer upwards.
    pub fn chain(mut self, ancestors: Vec<Arc<CertificateWrapper>>) -> Self {
        self.chain = ancestors;
        self
    }

    pub fn trust_service(mut self, record: TrustServiceRecord) -> Self {
        self.trust_services.push(record);
        self
    }

    pub fn key_usages(mut self, usages: impl IntoIterator<Item = KeyUsageBit>) -> Self {
        self.key_usages = usages.into_iter().collect();
        self
    }

    pub fn extended_key_usages<I, S>(mut self, oids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extended_key_usages = oids.into_iter().map(Into::into).collect();
        self
    }

    pub fn policy_ids<I, S>(mut self, oids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy_ids = oids.into_iter().map(Into::into).collect();
        self
    }

    pub fn ca(mut self, ca: bool) -> Self {
        self.ca = ca;
        self
    }

    pub fn signature_valid(mut self, valid: bool) -> Self {
        self.signature_valid = valid;
        self
    }

    /// Verifies `issuer`'s signature over the encoded certificate and records the result.
    pub fn verify_signature_with(mut self, issuer: &CertificateWrapperBuilder) -> Self {
        self.signature_valid = match (&self.encoded, &issuer.encoded) {
            (Some(subject), Some(issuer)) => match subject.verify_issued_by(issuer) {
                Ok(()) => true,
                Err(e) => {
                    debug!(certificate = %self.id, error = %e, "certificate signature did not verify");
                    false
                }
            },
            _ => false,
        };
        self
    }

    pub(crate) fn subject_name_der(&self) -> Option<&[u8]> {
        self.encoded.as_ref().map(|e| e.subject_name_der.as_slice())
    }

    pub(crate) fn issuer_name_der(&self) -> Option<&[u8]> {
        self.encoded.as_ref().map(|e| e.issuer_name_der.as_slice())
    }

    pub fn build(self) -> Result<CertificateWrapper, X509Error> {
        if self.id.is_empty() {
            return Err(X509Error::InvalidGraph("certificate without id".to_string()));
        }
        let (not_before, not_after) = match (self.not_before, self.not_after) {
            (Some(nb), Some(na)) => (nb, na),
            _ => {
                return Err(X509Error::InvalidGraph(format!(
                    "certificate {} has no validity period",
                    self.id
                )))
            }
        };
        if not_after < not_before {
            return Err(X509Error::InvalidGraph(format!(
                "certificate {} expires before it becomes valid",
                self.id
            )));
        }
        if self.chain.iter().any(|a| a.id == self.id) {
            return Err(X509Error::InvalidGraph(format!(
                "certificate {} lists itself as an ancestor",
                self.id
            )));
        }

        let trusted_chain = self
            .trusted_chain
            .unwrap_or_else(|| self.trusted || self.chain.iter().any(|a| a.is_trusted()));

        Ok(CertificateWrapper {
            id: self.id,
            subject: self.subject,
            issuer: self.issuer,
            serial_number: self.serial_number,
            not_before,
            not_after,
            trusted: self.trusted,
            trusted_chain,
            chain: self.chain,
            trust_services: self.trust_services,
            key_usages: self.key_usages,
            extended_key_usages: self.extended_key_usages,
            policy_ids: self.policy_ids,
            ca: self.ca,
            signature_valid: self.signature_valid,
            encoded: self.encoded,
        })
    }
}

// Certificate ::= SEQUENCE { tbsCertificate, signatureAlgorithm, signatureValue BIT STRING }
fn encoded_parts(
    der: &[u8],
    cert: &X509Certificate<'_>,
    public_key: Option<PublicKeyInfo>,
) -> Result<Encoded, X509Error> {
    let mut outer = Tlv::parse(der)?.sequence()?;
    let tbs = outer.next()?;
    let algorithm = outer.next()?;
    let signature = outer.next()?.bit_string()?;
    outer.finish()?;

    let signature_algorithm = SignatureAlgorithm::from_algorithm_identifier(algorithm)
        .map_err(|_| cert.signature_algorithm.algorithm.to_id_string());

    Ok(Encoded {
        der: Arc::new(der.to_vec()),
        subject_name_der: cert.subject().as_raw().to_vec(),
        issuer_name_der: cert.issuer().as_raw().to_vec(),
        public_key,
        tbs_der: tbs.raw.to_vec(),
        signature_algorithm,
        signature: signature.to_vec(),
    })
}

// certificatePolicies ::= SEQUENCE OF SEQUENCE { policyIdentifier OID, qualifiers ... }
fn parse_policy_ids(value: &[u8]) -> Result<Vec<String>, X509Error> {
    let mut ids = Vec::new();
    for info in Tlv::parse(value)?.sequence()? {
        let mut info = info?.sequence()?;
        ids.push(info.next()?.oid()?.to_string());
    }
    Ok(ids)
}
