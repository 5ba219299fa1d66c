// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! OCSP revocation data.
//!
//! Responses are decoded structurally ([`response`]), matched to a
//! certificate through their CertID ([`cert_id`]) and turned into
//! [`RevocationToken`]s that record status, freshness dates and the outcome
//! of the responder checks ([`validator`]). [`OfflineOcspSource`] holds
//! responses gathered ahead of time.

pub mod cert_id;
pub mod error;
pub mod response;
pub mod source;
pub mod token;
pub mod validator;

pub use cert_id::CertId;
pub use error::OcspError;
pub use response::{BasicOcspResponse, Extension, ResponderId, SingleResponse};
pub use source::OfflineOcspSource;
pub use token::{CertHashStatus, CertStatus, ResponderInfo, RevocationReason, RevocationToken};
pub use validator::{token_from_response, validate_ocsp_response, OcspValidationOptions, TokenLookup};
