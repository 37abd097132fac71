//! Greedy caption line wrapping for meme text.
//!
//! Meme captions render as short centered lines over the still, so quote text
//! has to be broken into lines of roughly [`DEFAULT_MAX_LINE_LENGTH`]
//! characters before it is base64-encoded into the meme URL.
//!
//! # Wrapping rules
//! - Words are whatever sits between single spaces. Consecutive spaces yield
//!   zero-length words that still occupy a slot; no trimming or collapsing
//!   happens before packing.
//! - Packing is greedy: each line is filled as far as the limit allows, then
//!   the next word opens a new line. No lookahead, no rebalancing.
//! - A word is never split. A single word longer than the limit still gets a
//!   line of its own, unsplit.
//!
//! Joining all output lines back with spaces reproduces the input's word
//! sequence exactly — nothing is duplicated, dropped, or reordered.

/// Conventional meme-caption line width, in characters.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 25;

/// Wraps `text` into lines of at most `max_line_length` characters.
///
/// Implemented as a fold over the word sequence: each step either appends the
/// word to the last line or pushes a fresh line holding just that word. A
/// word is appended only when the line is non-empty and the word plus its
/// joining space still fits.
///
/// Total over any input: the empty string wraps to a single empty line (one
/// zero-length word).
pub fn wrap(text: &str, max_line_length: usize) -> Vec<String> {
    let lines: Vec<Vec<&str>> = text.split(' ').fold(Vec::new(), |mut lines, word| {
        // +1 reserves the space that would join the word onto the line.
        let word_length = word.chars().count() + 1;
        let current_length = lines.last().map_or(0, |line| joined_length(line));

        match lines.last_mut() {
            Some(line)
                if current_length > 0 && current_length + word_length <= max_line_length =>
            {
                line.push(word);
            }
            _ => lines.push(vec![word]),
        }
        lines
    });

    lines.into_iter().map(|line| line.join(" ")).collect()
}

/// Wraps `text` and joins the lines with newlines — the form the meme
/// endpoint base64-encodes into its `b64lines` query parameter.
pub fn wrap_joined(text: &str, max_line_length: usize) -> String {
    wrap(text, max_line_length).join("\n")
}

/// Character length of the line's words joined by single spaces.
fn joined_length(line: &[&str]) -> usize {
    let chars: usize = line.iter().map(|word| word.chars().count()).sum();
    chars + line.len().saturating_sub(1)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
