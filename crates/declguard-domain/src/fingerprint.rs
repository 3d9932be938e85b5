use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a declaration finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - source path (normalized)
/// - declaration kind
/// - declaration name
pub fn fingerprint_for_declaration(
    check_id: &str,
    code: &str,
    path: &str,
    kind: &str,
    name: &str,
) -> String {
    let canonical = [check_id, code, path, kind, name].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
