// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("policy document is not valid JSON: {0}")]
    PolicyFormat(#[from] serde_json::Error),

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}
