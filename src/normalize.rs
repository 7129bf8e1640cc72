//! Pure normalization of raw certificate-transparency name records.
//!
//! One `name_value` record can encode several names separated by line
//! breaks, and names may carry a leading `*.` wildcard marker. The canonical
//! form used for deduplication is lowercased with the marker stripped.

/// A single normalized name extracted from a raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Canonical subdomain with any `*.` marker removed.
    pub name: String,
    pub is_wildcard: bool,
}

/// Normalize one raw record into zero or more candidates.
///
/// Entries that are empty after trimming, or that are not `domain` itself or
/// a name under it, are dropped as garbage payload.
pub fn normalize_record(raw: &str, domain: &str) -> Vec<Candidate> {
    let mut out = Vec::new();
    for line in raw.lines() {
        let name = line.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        let (name, is_wildcard) = match name.strip_prefix("*.") {
            Some(base) => (base.to_string(), true),
            None => (name, false),
        };
        // Suffix match on a dot boundary, so sibling registrations like
        // evilexample.com do not slip through for example.com.
        if name != domain && !name.ends_with(&format!(".{domain}")) {
            continue;
        }
        out.push(Candidate { name, is_wildcard });
    }
    out
}

/// Extension filter predicate: does `name` end in one of the configured
/// extension tokens? Comparison is an exact suffix match on the token behind
/// a dot boundary, never a substring match. An empty filter admits
/// everything.
pub fn matches_extension(name: &str, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    let name = name.to_lowercase();
    extensions.iter().any(|ext| name.ends_with(&format!(".{ext}")))
}
