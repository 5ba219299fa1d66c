// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// The certificate graph handed to the validator breaks its contract.
    #[error("invalid certificate graph: {0}")]
    InvalidGraph(String),
}
