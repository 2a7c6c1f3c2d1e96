//! Header stripping for inlined filters.
//!
//! A property filter rendered as `x => x.trim()` can be spliced onto the
//! accessor it filters: `a.name.trim()`. This only works when the filter
//! has exactly one parameter and its body is that parameter followed by a
//! member access or nothing. Every other shape is rejected and the caller
//! falls back to an explicit call.

/// The body tail after a single-parameter header and its parameter.
///
/// Accepts `x => x…` and `(x) => x…` where `…` is empty or starts with
/// `.` or `[`. Returns `…`.
pub fn strip_param_header(source: &str) -> Option<&str> {
    let source = source.trim_start();
    let (param, rest) = match source.strip_prefix('(') {
        Some(inner) => {
            let (param, rest) = split_ident(inner.trim_start())?;
            (param, rest.trim_start().strip_prefix(')')?)
        }
        None => split_ident(source)?,
    };
    let body = rest.trim_start().strip_prefix("=>")?.trim_start();
    let tail = body.strip_prefix(param)?;
    match tail.chars().next() {
        None | Some('.' | '[') => Some(tail),
        Some(_) => None,
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Split a leading identifier off `s`.
fn split_ident(s: &str) -> Option<(&str, &str)> {
    if !s.chars().next().is_some_and(is_ident_start) {
        return None;
    }
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    Some(s.split_at(end))
}
