//! Identifier normalization shared by literals, lookups, and completion.
//!
//! Commands, literal arguments, and domain-object names are all matched
//! case-insensitively with whitespace, underscores, and hyphens treated as
//! interchangeable separators.

/// Normalizes an identifier: trimmed, lowercased, with runs of whitespace,
/// `_`, and `-` folded into a single `-` separator.
#[must_use]
pub fn normalize(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut pending_separator = false;
    for ch in identifier.trim().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = !out.is_empty();
        } else {
            if pending_separator {
                out.push('-');
                pending_separator = false;
            }
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Removes the `-` separators from an already-normalized identifier.
#[must_use]
pub fn strip_separators(normalized: &str) -> String {
    normalized.chars().filter(|&c| c != '-').collect()
}

/// Returns true if `token` names the same identifier as `recognized`.
///
/// Two identifiers match if they normalize to the same string, or if they
/// are still equal (and non-empty) once separators are stripped as well —
/// so `re-move` and `re_move` both match `remove`, while the bare `-`
/// literal still only matches separator tokens.
#[must_use]
pub fn matches_identifier(token: &str, recognized: &str) -> bool {
    // A blank token names nothing, even though it normalizes like a bare
    // separator does.
    if token.trim().is_empty() {
        return false;
    }
    let token = normalize(token);
    let recognized = normalize(recognized);
    if token == recognized {
        return true;
    }
    let token = strip_separators(&token);
    !token.is_empty() && token == strip_separators(&recognized)
}

/// Returns true if `candidate` is a plausible completion of the partial
/// token `partial`. An empty partial completes to anything.
#[must_use]
pub fn completes_to(partial: &str, candidate: &str) -> bool {
    let partial = normalize(partial);
    let candidate = normalize(candidate);
    candidate.starts_with(&partial)
        || strip_separators(&candidate).starts_with(&strip_separators(&partial))
}
