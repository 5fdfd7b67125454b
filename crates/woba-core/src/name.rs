// Batter name extraction from Statcast play descriptions.
//
// Descriptions lead with the batter's name ("Aaron Judge walks.", "Juan Soto
// singles on a line drive ..."). The name is taken to be the first two
// space-separated tokens, each starting with an ASCII uppercase letter and at
// least two characters long. Anything else resolves to "Unknown".

/// Sentinel returned when no player name can be extracted.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Extract the leading "First Last" name from a play description.
///
/// Returns `None` for a missing description, lowercase-leading text, a single
/// token, or a capitalized word followed by a lowercase one. Trailing text
/// after the second token is ignored.
pub fn extract_player_name(description: Option<&str>) -> Option<&str> {
    let text = description?;
    let first = capitalized_token_len(text)?;
    let rest = text[first..].strip_prefix(' ')?;
    let second = capitalized_token_len(rest)?;
    Some(&text[..first + 1 + second])
}

/// Like [`extract_player_name`], falling back to [`UNKNOWN_PLAYER`].
pub fn player_name_or_unknown(description: Option<&str>) -> &str {
    extract_player_name(description).unwrap_or(UNKNOWN_PLAYER)
}

/// Byte length of a leading token that starts with an ASCII uppercase letter
/// and runs up to the next space. Single-letter tokens do not count.
fn capitalized_token_len(text: &str) -> Option<usize> {
    if !text.chars().next()?.is_ascii_uppercase() {
        return None;
    }
    let len = text.find(' ').unwrap_or(text.len());
    (len > 1).then_some(len)
}
