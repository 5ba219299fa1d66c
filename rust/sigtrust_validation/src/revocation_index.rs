// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use sigtrust_revocation::{OfflineOcspSource, RevocationToken};
use sigtrust_x509::CertificateWrapper;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Revocation tokens available for each certificate, keyed by certificate id.
#[derive(Debug, Clone, Default)]
pub struct RevocationIndex {
    tokens: HashMap<String, Vec<Arc<RevocationToken>>>,
}

impl RevocationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `token` under the certificate it answers for.
    pub fn insert(&mut self, token: RevocationToken) {
        self.tokens
            .entry(token.subject_id.clone())
            .or_default()
            .push(Arc::new(token));
    }

    pub fn tokens_for(&self, certificate_id: &str) -> &[Arc<RevocationToken>] {
        self.tokens.get(certificate_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The token with the most recent thisUpdate; the first one inserted wins a tie.
    pub fn latest_for(&self, certificate_id: &str) -> Option<&Arc<RevocationToken>> {
        self.tokens_for(certificate_id)
            .iter()
            .fold(None, |best: Option<&Arc<RevocationToken>>, token| match best {
                Some(best) if best.this_update >= token.this_update => Some(best),
                _ => Some(token),
            })
    }

    pub fn len(&self) -> usize {
        self.tokens.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queries `source` for every (certificate, issuer) pair along the
    /// leaf's chain.
    pub fn from_source(source: &OfflineOcspSource, leaf: &CertificateWrapper) -> Self {
        let path: Vec<&CertificateWrapper> = std::iter::once(leaf)
            .chain(leaf.chain().iter().map(Arc::as_ref))
            .collect();

        let mut index = Self::new();
        for pair in path.windows(2) {
            let (subject, issuer) = (pair[0], pair[1]);
            let tokens = source.revocation_tokens(subject, issuer);
            debug!(certificate = subject.id(), tokens = tokens.len(), "revocation tokens collected");
            for token in tokens {
                index.insert(token);
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sigtrust_revocation::CertStatus;

    #[test]
    fn latest_token_prefers_first_on_ties() {
        let early = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();

        let mut index = RevocationIndex::new();
        assert!(index.latest_for("a").is_none());

        index.insert(RevocationToken::new("a", CertStatus::Good, early));
        index.insert(RevocationToken::new("a", CertStatus::Unknown, late));
        index.insert(RevocationToken::new("a", CertStatus::Good, late));
        index.insert(RevocationToken::new("b", CertStatus::Good, early));

        assert_eq!(index.len(), 4);
        assert_eq!(index.tokens_for("a").len(), 3);
        assert_eq!(index.latest_for("a").unwrap().status, CertStatus::Unknown);
        assert!(index.tokens_for("c").is_empty());
    }
}
