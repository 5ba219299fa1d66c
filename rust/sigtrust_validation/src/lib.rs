// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Certificate path validation.
//!
//! [`CertificateValidation`] walks a leaf's chain under the policy's trust
//! model and folds one [`SubCertificateValidation`] result per certificate
//! into a path result. Revocation evidence reaches the per-certificate checks
//! through a [`RevocationIndex`].

pub mod certificate_validation;
pub mod error;
pub mod keys;
pub mod revocation_index;
pub mod sub_certificate;

pub use certificate_validation::{
    evaluation_dates, CertificateValidation, CertificateValidationResult, PathUnit, SubCertificateResult,
};
pub use error::ValidationError;
pub use revocation_index::RevocationIndex;
pub use sub_certificate::{is_consistent, is_fresh, CertificateUnit, SubCertificateValidation};
