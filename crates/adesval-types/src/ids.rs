//! Stable identifiers for checks.
//!
//! `check_id` is a dotted namespace: `<block>.<property>`. Policy documents key constraint
//! levels by these strings, so they never change once published.

// Format checking
pub const CHECK_FC_FORMAT_ACCEPTED: &str = "fc.format_accepted";
pub const CHECK_FC_STRUCTURE_VALID: &str = "fc.structure_valid";

// Identification of the signing certificate
pub const CHECK_ISC_SIGNING_CERTIFICATE_IDENTIFIED: &str = "isc.signing_certificate_identified";
pub const CHECK_ISC_SIGNING_CERTIFICATE_REFERENCE_PRESENT: &str =
    "isc.signing_certificate_reference_present";
pub const CHECK_ISC_SIGNING_CERTIFICATE_DIGEST_MATCH: &str = "isc.signing_certificate_digest_match";
pub const CHECK_ISC_ISSUER_SERIAL_MATCH: &str = "isc.issuer_serial_match";

// X.509 certificate validation
pub const CHECK_XCV_CHAIN_PRESENT: &str = "xcv.chain_present";
pub const CHECK_XCV_TRUST_ANCHOR_REACHED: &str = "xcv.trust_anchor_reached";
pub const CHECK_XCV_CERTIFICATE_VALID: &str = "xcv.certificate_valid";

// Per-certificate sub-validation
pub const CHECK_SUB_XCV_SIGNATURE_INTACT: &str = "sub_xcv.signature_intact";
pub const CHECK_SUB_XCV_VALIDITY_RANGE: &str = "sub_xcv.validity_range";
pub const CHECK_SUB_XCV_REVOCATION_DATA_PRESENT: &str = "sub_xcv.revocation_data_present";
pub const CHECK_SUB_XCV_REVOCATION_FRESH: &str = "sub_xcv.revocation_fresh";
pub const CHECK_SUB_XCV_NOT_REVOKED: &str = "sub_xcv.not_revoked";
pub const CHECK_SUB_XCV_CRYPTO_CONSTRAINTS: &str = "sub_xcv.crypto_constraints";
pub const CHECK_SUB_XCV_KEY_USAGE: &str = "sub_xcv.key_usage";
pub const CHECK_SUB_XCV_TIMESTAMPING_EKU: &str = "sub_xcv.timestamping_eku";

// Revocation freshness
pub const CHECK_RFC_REVOCATION_SIGNATURE_INTACT: &str = "rfc.revocation_signature_intact";
pub const CHECK_RFC_NEXT_UPDATE_PRESENT: &str = "rfc.next_update_present";
pub const CHECK_RFC_REVOCATION_FRESH: &str = "rfc.revocation_fresh";

// Cryptographic verification
pub const CHECK_CV_REFERENCE_DATA_FOUND: &str = "cv.reference_data_found";
pub const CHECK_CV_REFERENCE_DATA_INTACT: &str = "cv.reference_data_intact";
pub const CHECK_CV_SIGNATURE_INTACT: &str = "cv.signature_intact";

// Signature acceptance validation
pub const CHECK_SAV_SIGNING_TIME_PRESENT: &str = "sav.signing_time_present";
pub const CHECK_SAV_MESSAGE_DIGEST_OR_SIGNED_PROPERTIES_PRESENT: &str =
    "sav.message_digest_or_signed_properties_present";
pub const CHECK_SAV_CONTENT_TYPE_PRESENT: &str = "sav.content_type_present";
pub const CHECK_SAV_CRYPTO_CONSTRAINTS: &str = "sav.crypto_constraints";

// Archive-timestamp chain
pub const CHECK_ERV_ARCHIVE_TIMESTAMP_VALID: &str = "erv.archive_timestamp_valid";
pub const CHECK_ERV_ARCHIVE_TIMESTAMPS_COVER_EACH_OTHER: &str =
    "erv.archive_timestamps_cover_each_other";
pub const CHECK_ERV_FIRST_ARCHIVE_TIMESTAMP_COVERS_SIGNATURE: &str =
    "erv.first_archive_timestamp_covers_signature";

// Timestamp coherence
pub const CHECK_TSC_TIMESTAMP_ORDER: &str = "tsc.timestamp_order";
pub const CHECK_TSC_SIGNING_TIME_BEFORE_BEST_SIGNATURE_TIME: &str =
    "tsc.signing_time_before_best_signature_time";
pub const CHECK_TSC_TIMESTAMP_DELAY: &str = "tsc.timestamp_delay";

// Qualification
pub const CHECK_QUAL_TRUSTED_LIST_REACHED: &str = "qual.trusted_list_reached";
pub const CHECK_QUAL_SERVICE_GRANTED_AT_TIME: &str = "qual.service_granted_at_time";
pub const CHECK_QUAL_QC_COMPLIANCE: &str = "qual.qc_compliance";
pub const CHECK_QUAL_FOR_ESIG: &str = "qual.for_esig";
pub const CHECK_QUAL_QSCD: &str = "qual.qscd";
pub const CHECK_QUAL_IS_ADES: &str = "qual.is_ades";
pub const CHECK_QUAL_QUALIFIED_AT_BEST_SIGNATURE_TIME: &str =
    "qual.qualified_at_best_signature_time";
pub const CHECK_QUAL_QUALIFICATION_CONSISTENT: &str = "qual.qualification_consistent";
