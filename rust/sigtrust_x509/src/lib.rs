// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Certificate model for trust validation.
//!
//! [`CertificateWrapper`] is the read-only view of a certificate that the
//! validation chains consume: identity, validity period, trust flags, the
//! ordered ancestor chain and the trust-service records attached to it.
//! Wrappers can be assembled by hand (synthetic graphs) or extracted from DER
//! with `x509-parser`.
//!
//! The crate also hosts the DER reading helpers and the signature-algorithm
//! model shared with the revocation crate.

pub mod algorithm;
pub mod asn1;
pub mod certificate;
pub mod error;
pub mod graph;
pub mod public_key;
pub mod trust_service;

pub use algorithm::{DigestAlgorithm, SignatureAlgorithm};
pub use certificate::{CertificateWrapper, CertificateWrapperBuilder, KeyUsageBit};
pub use error::X509Error;
pub use graph::build_chain;
pub use public_key::PublicKeyInfo;
pub use trust_service::TrustServiceRecord;

/// id-kp-OCSPSigning.
pub const EKU_OCSP_SIGNING: &str = "1.3.6.1.5.5.7.3.9";
/// id-kp-timeStamping.
pub const EKU_TIME_STAMPING: &str = "1.3.6.1.5.5.7.3.8";
