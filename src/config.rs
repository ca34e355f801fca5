//! Text analysis configuration

/// How [`short_introduction`](crate::introduction::short_introduction) treats
/// whitespace inside the retained prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WhitespacePolicy {
    /// Cut at the rightmost space or newline and keep the prefix verbatim
    ///
    /// Only `' '` and `'\n'` are cut points; tabs and form feeds stay inside
    /// words.
    #[default]
    Preserve,

    /// Split on any whitespace and rejoin the kept tokens with single spaces
    Collapse,
}

/// Which characters [`most_common_words`](crate::words::most_common_words)
/// treats as part of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WordPattern {
    /// ASCII letters only; `"8PM"` counts as `"pm"`
    #[default]
    Alphabetic,

    /// ASCII letters, digits and underscore; `"8PM"` counts as `"8pm"`
    Alphanumeric,
}

/// Text analysis configuration
///
/// # Example
///
/// ```
/// use articlekit::{TextConfig, WhitespacePolicy, WordPattern};
///
/// let config = TextConfig::default();
/// assert_eq!(config.whitespace, WhitespacePolicy::Preserve);
/// assert_eq!(config.words, WordPattern::Alphabetic);
///
/// let collapsing = TextConfig::collapsing();
/// assert_eq!(collapsing.whitespace, WhitespacePolicy::Collapse);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextConfig {
    /// Truncation contract for short introductions
    #[cfg_attr(feature = "serde", serde(default))]
    pub whitespace: WhitespacePolicy,

    /// Tokenizer used for word counting
    #[cfg_attr(feature = "serde", serde(default))]
    pub words: WordPattern,
}

impl TextConfig {
    /// Create a configuration from its two policies
    pub fn new(whitespace: WhitespacePolicy, words: WordPattern) -> Self {
        Self { whitespace, words }
    }

    /// Whitespace-preserving truncation and alphabetic words (the default)
    pub fn strict() -> Self {
        Self::new(WhitespacePolicy::Preserve, WordPattern::Alphabetic)
    }

    /// Whitespace-collapsing truncation and alphanumeric words
    pub fn collapsing() -> Self {
        Self::new(WhitespacePolicy::Collapse, WordPattern::Alphanumeric)
    }
}
