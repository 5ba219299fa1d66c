// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::certificate::{CertificateWrapper, CertificateWrapperBuilder};
use crate::error::X509Error;
use std::sync::Arc;
use tracing::debug;

/// Builds the wrapper graph for an ordered DER chain (leaf first).
///
/// Every certificate gets its own ancestor list, its issuer signature is
/// verified against the next certificate (a self-issued last element is
/// checked against itself), and certificates whose encoding equals one of
/// `trust_anchors_der` are marked trusted. Names must chain; a break is an
/// [`X509Error::InvalidGraph`].
pub fn build_chain(
    chain_der: &[Vec<u8>],
    trust_anchors_der: &[Vec<u8>],
) -> Result<Arc<CertificateWrapper>, X509Error> {
    if chain_der.is_empty() {
        return Err(X509Error::InvalidGraph("empty certificate chain".to_string()));
    }

    let builders = chain_der
        .iter()
        .map(|der| CertificateWrapperBuilder::from_der(der))
        .collect::<Result<Vec<_>, _>>()?;

    for (i, pair) in builders.windows(2).enumerate() {
        if pair[0].issuer_name_der() != pair[1].subject_name_der() {
            return Err(X509Error::InvalidGraph(format!(
                "certificate {i} is not issued by certificate {}",
                i + 1
            )));
        }
    }

    let last = builders.len() - 1;
    let verified: Vec<CertificateWrapperBuilder> = builders
        .iter()
        .enumerate()
        .map(|(i, builder)| {
            let issuer = if i < last {
                &builders[i + 1]
            } else if builder.issuer_name_der() == builder.subject_name_der() {
                builder
            } else {
                return builder.clone();
            };
            builder.clone().verify_signature_with(issuer)
        })
        .collect();

    let mut ancestors: Vec<Arc<CertificateWrapper>> = Vec::new();
    for (i, builder) in verified.into_iter().enumerate().rev() {
        let trusted = trust_anchors_der.iter().any(|a| a == &chain_der[i]);
        let wrapper = builder.trusted(trusted).chain(ancestors.clone()).build()?;
        debug!(
            certificate = wrapper.id(),
            subject = wrapper.subject(),
            trusted,
            signature_valid = wrapper.is_signature_valid(),
            "certificate added to chain"
        );
        ancestors.insert(0, Arc::new(wrapper));
    }

    ancestors
        .into_iter()
        .next()
        .ok_or_else(|| X509Error::InvalidGraph("empty certificate chain".to_string()))
}
