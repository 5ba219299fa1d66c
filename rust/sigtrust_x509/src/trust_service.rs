// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a trusted list asserts about the CA behind a certificate over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustServiceRecord {
    /// Service type identifier URI.
    pub service_type: String,
    /// Service status URI.
    pub status: String,
    pub start_date: DateTime<Utc>,
    /// `None` while the status is still current.
    pub end_date: Option<DateTime<Utc>>,
}

impl TrustServiceRecord {
    pub fn new(
        service_type: impl Into<String>,
        status: impl Into<String>,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            service_type: service_type.into(),
            status: status.into(),
            start_date,
            end_date: None,
        }
    }

    pub fn ending(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Whether the record's status applied at `date` (end date exclusive).
    pub fn is_active_at(&self, date: DateTime<Utc>) -> bool {
        self.start_date <= date && self.end_date.map_or(true, |end| date < end)
    }
}
