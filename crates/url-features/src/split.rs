/// Components of a URL split with generic-URL rules.
///
/// Splitting never fails: anything that does not look like a URL simply ends
/// up in `path` with the other components left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub authority: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

pub fn split_url(url: &str) -> UrlParts {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let mut rest = cleaned.as_str();
    let mut parts = UrlParts::default();

    if let Some(index) = rest.find(':') {
        let candidate = &rest[..index];
        if is_scheme(candidate) {
            parts.scheme = candidate.to_ascii_lowercase();
            rest = &rest[index + 1..];
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
        parts.authority = after[..end].to_string();
        rest = &after[end..];
    }

    if let Some(index) = rest.find('#') {
        parts.fragment = rest[index + 1..].to_string();
        rest = &rest[..index];
    }
    if let Some(index) = rest.find('?') {
        parts.query = rest[index + 1..].to_string();
        rest = &rest[..index];
    }
    parts.path = rest.to_string();
    parts
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
