// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use sigtrust_x509::X509Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcspError {
    #[error("malformed OCSP response: {0}")]
    Malformed(String),

    #[error("OCSP responder returned status {0}")]
    Unsuccessful(u64),

    #[error("unsupported OCSP response type {0}")]
    UnsupportedResponseType(String),

    #[error("certificate lacks data needed for OCSP matching: {0}")]
    IncompleteCertificate(String),
}

impl From<X509Error> for OcspError {
    fn from(e: X509Error) -> Self {
        OcspError::Malformed(e.to_string())
    }
}
