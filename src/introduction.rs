//! Short introductions
//!
//! Cuts a text down to a character budget without splitting words. Lengths
//! are counted in `char`s, so multi-byte punctuation such as `‘` counts once.
//!
//! Two contracts are available through [`WhitespacePolicy`]:
//!
//! - `Preserve` looks at the first `max_characters + 1` characters and cuts at
//!   the rightmost space or newline in that window. Everything before the cut
//!   is returned verbatim, including runs of spaces and newlines.
//! - `Collapse` splits on any whitespace and greedily rejoins tokens with a
//!   single space while the result still fits.
//!
//! # Example
//!
//! ```
//! use articlekit::introduction::short_introduction;
//! use articlekit::WhitespacePolicy;
//!
//! let text = "There was   once a queen";
//! assert_eq!(short_introduction(text, 20, WhitespacePolicy::Preserve), "There was   once a");
//! assert_eq!(short_introduction(text, 20, WhitespacePolicy::Collapse), "There was once a");
//! ```

use tracing::trace;

use crate::config::WhitespacePolicy;

/// Characters `Preserve` may cut at
const CUT_POINTS: [char; 2] = [' ', '\n'];

/// Return the longest word-aligned prefix of `text` that fits in `max_characters`
///
/// Text that already fits is returned unchanged. When no cut point fits the
/// budget the result is empty.
pub fn short_introduction(text: &str, max_characters: usize, policy: WhitespacePolicy) -> String {
    if text.chars().count() <= max_characters {
        return text.to_string();
    }

    let intro = match policy {
        WhitespacePolicy::Preserve => cut_preserving(text, max_characters).to_string(),
        WhitespacePolicy::Collapse => join_collapsing(text, max_characters),
    };
    trace!(
        ?policy,
        max_characters,
        kept = intro.chars().count(),
        "built short introduction"
    );
    intro
}

fn cut_preserving(text: &str, max_characters: usize) -> &str {
    // The extra character lets a separator sitting right after the budget
    // keep a full-length prefix.
    let window_end = text
        .char_indices()
        .nth(max_characters.saturating_add(1))
        .map_or(text.len(), |(offset, _)| offset);

    match text[..window_end].rfind(CUT_POINTS) {
        Some(cut) => &text[..cut],
        None => "",
    }
}

fn join_collapsing(text: &str, max_characters: usize) -> String {
    let mut intro = String::new();
    let mut used = 0;

    for token in text.split_whitespace() {
        let token_len = token.chars().count();
        let needed = if intro.is_empty() {
            token_len
        } else {
            used + 1 + token_len
        };
        if needed > max_characters {
            break;
        }
        if !intro.is_empty() {
            intro.push(' ');
        }
        intro.push_str(token);
        used = needed;
    }

    intro
}
