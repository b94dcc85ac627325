/// Slice the text around a match: `before` characters ahead of `start` and
/// `after` characters past `end`, clipped to the text.
///
/// `start` and `end` are byte offsets of the match (as returned by `regex`)
/// and must fall on character boundaries. The window is counted in
/// characters so multi-byte symbols like `°` never split.
pub fn context_window(text: &str, start: usize, end: usize, before: usize, after: usize) -> &str {
    let from = if before == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(before - 1)
            .map_or(0, |(i, _)| i)
    };
    let to = text[end..]
        .char_indices()
        .nth(after)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}
