/// Longest physical line content, in octets, before a continuation.
pub const MAX_LINE_OCTETS: usize = 75;

/// Line break followed by the single space that marks a continuation line.
pub const CONTINUATION: &str = "\r\n ";

/// Splits `line` into chunks of at most `limit` UTF-8 octets joined by [`CONTINUATION`].
///
/// Chunks always end on a character boundary, so a multi-byte character is moved
/// whole to the next chunk. A character wider than `limit` gets a chunk of its own.
pub fn fold_line(line: &str, limit: usize) -> String {
    if line.len() <= limit {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / limit.max(1) * CONTINUATION.len());
    let mut chunk_len = 0;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if chunk_len > 0 && chunk_len + width > limit {
            out.push_str(CONTINUATION);
            chunk_len = 0;
        }
        out.push(ch);
        chunk_len += width;
    }
    out
}

/// Reverses [`fold_line`].
pub fn unfold(folded: &str) -> String {
    folded.replace(CONTINUATION, "")
}

/// Escapes a TEXT property value.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}
