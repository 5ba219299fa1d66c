// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum X509Error {
    #[error("malformed DER: {0}")]
    Der(String),

    #[error("invalid certificate: {0}")]
    Certificate(String),

    #[error("invalid certificate graph: {0}")]
    InvalidGraph(String),

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("signature verification failed: {0}")]
    Signature(String),
}

impl From<der::Error> for X509Error {
    fn from(e: der::Error) -> Self {
        X509Error::Der(e.to_string())
    }
}
