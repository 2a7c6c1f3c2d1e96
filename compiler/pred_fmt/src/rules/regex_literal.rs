//! Pattern text inside `/…/` delimiters.
//!
//! A stored pattern may contain a bare `/` or a raw line terminator, and
//! neither can appear unescaped in a literal. Existing escapes are copied
//! through untouched, so `a\/b` stays `a\/b` while `a/b` becomes `a\/b`.

/// `source` escaped for use between regex literal slashes.
///
/// An empty pattern renders as `(?:)` since `//` would open a comment.
pub fn escape_regex_source(source: &str) -> String {
    if source.is_empty() {
        return "(?:)".to_string();
    }
    let mut out = String::with_capacity(source.len() + 2);
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                // `\` before a line terminator already matches that terminator.
                Some(next) => match line_escape(next) {
                    Some(escaped) => out.push_str(escaped),
                    None => {
                        out.push('\\');
                        out.push(next);
                    }
                },
                None => out.push('\\'),
            },
            '/' => out.push_str("\\/"),
            c => match line_escape(c) {
                Some(escaped) => out.push_str(escaped),
                None => out.push(c),
            },
        }
    }
    out
}

fn line_escape(c: char) -> Option<&'static str> {
    match c {
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\u{2028}' => Some("\\u2028"),
        '\u{2029}' => Some("\\u2029"),
        _ => None,
    }
}
