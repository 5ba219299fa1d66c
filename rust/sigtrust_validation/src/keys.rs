// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Message keys emitted in results. Rendering them is the reporting layer's job.

pub const TITLE_CERTIFICATE_VALIDATION: &str = "X509_CERTIFICATE_VALIDATION";
pub const TITLE_SIGNING_CERTIFICATE: &str = "SUB_X509_SIGNING_CERTIFICATE";
pub const TITLE_CA_CERTIFICATE: &str = "SUB_X509_CA_CERTIFICATE";

pub const PROSPECTIVE_CHAIN: &str = "BBB_XCV_CCCBB";
pub const PROSPECTIVE_CHAIN_ANS: &str = "BBB_XCV_CCCBB_ANS";
pub const TRUSTED_SERVICE_TYPE: &str = "BBB_XCV_TSL_ETIP";
pub const TRUSTED_SERVICE_TYPE_ANS: &str = "BBB_XCV_TSL_ETIP_ANS";
pub const TRUSTED_SERVICE_STATUS: &str = "BBB_XCV_TSL_ESP";
pub const TRUSTED_SERVICE_STATUS_ANS: &str = "BBB_XCV_TSL_ESP_ANS";
pub const SUB_RESULT: &str = "BBB_XCV_SUB";
pub const SUB_RESULT_ANS: &str = "BBB_XCV_SUB_ANS";

pub const CERTIFICATE_SIGNATURE: &str = "BBB_XCV_ICSI";
pub const CERTIFICATE_SIGNATURE_ANS: &str = "BBB_XCV_ICSI_ANS";
pub const VALIDITY_RANGE: &str = "BBB_XCV_ICTIVRSC";
pub const VALIDITY_RANGE_ANS: &str = "BBB_XCV_ICTIVRSC_ANS";
pub const KEY_USAGE: &str = "BBB_XCV_ISCGKU";
pub const KEY_USAGE_ANS: &str = "BBB_XCV_ISCGKU_ANS";
pub const EXTENDED_KEY_USAGE: &str = "BBB_XCV_ISCGEKU";
pub const EXTENDED_KEY_USAGE_ANS: &str = "BBB_XCV_ISCGEKU_ANS";
pub const POLICY_IDS: &str = "BBB_XCV_ISCGCP";
pub const POLICY_IDS_ANS: &str = "BBB_XCV_ISCGCP_ANS";
pub const CA_BASIC_CONSTRAINTS: &str = "BBB_XCV_ISCBCCA";
pub const CA_BASIC_CONSTRAINTS_ANS: &str = "BBB_XCV_ISCBCCA_ANS";
pub const REVOCATION_AVAILABLE: &str = "BBB_XCV_IRDPFC";
pub const REVOCATION_AVAILABLE_ANS: &str = "BBB_XCV_IRDPFC_ANS";
pub const REVOCATION_CONSISTENT: &str = "BBB_XCV_IRDC";
pub const REVOCATION_CONSISTENT_ANS: &str = "BBB_XCV_IRDC_ANS";
pub const REVOCATION_FRESH: &str = "BBB_XCV_RFC";
pub const REVOCATION_FRESH_ANS: &str = "BBB_XCV_RFC_ANS";
pub const REVOCATION_VALID: &str = "BBB_XCV_IRDV";
pub const REVOCATION_VALID_ANS: &str = "BBB_XCV_IRDV_ANS";
pub const NOT_REVOKED: &str = "BBB_XCV_ISCR";
pub const NOT_REVOKED_ANS: &str = "BBB_XCV_ISCR_ANS";
pub const NOT_ON_HOLD: &str = "BBB_XCV_ISCOH";
pub const NOT_ON_HOLD_ANS: &str = "BBB_XCV_ISCOH_ANS";
