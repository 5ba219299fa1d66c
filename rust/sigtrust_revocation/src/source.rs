// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::token::RevocationToken;
use crate::validator::{validate_ocsp_response, OcspValidationOptions};
use sigtrust_x509::CertificateWrapper;
use std::sync::Arc;
use tracing::warn;

/// OCSP responses collected ahead of validation (for example, embedded in a
/// signature), queried per certificate.
#[derive(Debug, Clone, Default)]
pub struct OfflineOcspSource {
    responses: Vec<Arc<Vec<u8>>>,
    options: OcspValidationOptions,
}

impl OfflineOcspSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: OcspValidationOptions) -> Self {
        Self {
            responses: Vec::new(),
            options,
        }
    }

    pub fn add(&mut self, response: impl Into<Vec<u8>>) {
        self.responses.push(Arc::new(response.into()));
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Every token answering for `subject`, in insertion order.
    ///
    /// Responses that cannot be decoded are logged and skipped.
    pub fn revocation_tokens(
        &self,
        subject: &CertificateWrapper,
        issuer: &CertificateWrapper,
    ) -> Vec<RevocationToken> {
        self.responses
            .iter()
            .filter_map(
                |response| match validate_ocsp_response(response, subject, issuer, &self.options) {
                    Ok(lookup) => lookup.into_token(),
                    Err(e) => {
                        warn!(certificate = subject.id(), error = %e, "skipping unusable OCSP response");
                        None
                    }
                },
            )
            .collect()
    }

    /// First token answering for `subject`.
    pub fn revocation_token(
        &self,
        subject: &CertificateWrapper,
        issuer: &CertificateWrapper,
    ) -> Option<RevocationToken> {
        self.revocation_tokens(subject, issuer).into_iter().next()
    }
}
