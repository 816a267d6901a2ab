//! Key and string formatting shared by the inspector and the diff renderer.

/// Substitute HTML-unsafe characters with their entity equivalents.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a payload in a JSON-style double-quoted string literal, escaping
/// quotes, backslashes, and control characters. The payload is expected to be
/// HTML-escaped already when the output is embedded as markup.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Format a property key for display: HTML-escape it, then emit it bare when
/// it is a plain identifier or an array index, quoted otherwise.
pub fn format_key(key: &str) -> String {
    let escaped = escape_html(key);
    if is_bare_key(&escaped) {
        escaped
    } else {
        quote_string(&escaped)
    }
}

/// Bare keys are ASCII identifiers (`[A-Za-z_$][A-Za-z0-9_$]*`) or all-digit
/// array indices. Anything else renders quoted, so the key `2b` appears as
/// `"2b"` while `a` and `0` stay bare.
fn is_bare_key(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    if key.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    let mut bytes = key.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' || b == b'$' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
}
