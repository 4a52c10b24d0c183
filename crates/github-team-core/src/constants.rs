//! Constants shared by the version codec and diagnostics.

/// Separator between the fingerprint and the disambiguator in a version token.
///
/// Fingerprints are lowercase hex, so the first occurrence always marks the
/// boundary.
pub const VERSION_SEPARATOR: char = '-';

/// Number of leading hex characters shown when a fingerprint appears in a
/// diagnostic message.
pub const SHORT_FINGERPRINT_LEN: usize = 8;
