//! Article type definitions

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::TextConfig;
use crate::field::{FieldOwner, InstanceKey};
use crate::ids::{self, ArticleIds};
use crate::introduction::short_introduction;
use crate::words::{WordCounts, most_common_words};

/// Format used for `publication_date` in the display string
const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// An article with a title, author, publication date and editable content
///
/// The id is assigned once at construction. `last_edited` starts as `None`
/// and is stamped every time the content is replaced through
/// [`set_content`](Article::set_content), even with an identical value.
/// No other setter touches it.
///
/// `Article` is not `Clone`: ids are never reused, and every article has its
/// own [`InstanceKey`] for [`ArticleField`](crate::ArticleField) storage.
///
/// # Examples
///
/// ```
/// use articlekit::Article;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(1812, 12, 20)
///     .unwrap()
///     .and_hms_opt(11, 11, 9)
///     .unwrap();
/// let mut article = Article::new(
///     "Rapunzel",
///     "The Brothers Grimm",
///     date,
///     "There were once a man and a woman who had long in vain wished for a child.",
/// );
///
/// assert_eq!(
///     article.to_string(),
///     "<Article title='Rapunzel' author='The Brothers Grimm' \
///      publication_date='1812-12-20T11:11:09'>"
/// );
/// assert_eq!(article.short_introduction(20), "There were once a");
/// assert!(article.last_edited().is_none());
///
/// article.set_content("Let down your hair.");
/// assert!(article.last_edited().is_some());
/// ```
#[derive(Debug)]
pub struct Article {
    id: u64,
    key: InstanceKey,
    title: String,
    author: String,
    publication_date: NaiveDateTime,
    content: String,
    last_edited: Option<NaiveDateTime>,
}

impl Article {
    /// Create an article, taking its id from the process-wide counter
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: NaiveDateTime,
        content: impl Into<String>,
    ) -> Self {
        Self::with_ids(ids::global(), title, author, publication_date, content)
    }

    /// Create an article, taking its id from `ids`
    pub fn with_ids(
        ids: &ArticleIds,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: NaiveDateTime,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            key: InstanceKey::new(),
            title: title.into(),
            author: author.into(),
            publication_date,
            content: content.into(),
            last_edited: None,
        }
    }

    /// Id assigned at construction
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Article title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Article author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Replace the author
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// Publication date, used for ordering
    pub fn publication_date(&self) -> NaiveDateTime {
        self.publication_date
    }

    /// Replace the publication date
    pub fn set_publication_date(&mut self, publication_date: NaiveDateTime) {
        self.publication_date = publication_date;
    }

    /// Current content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content and stamp `last_edited` with the local time
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.set_content_with_clock(content, &SystemClock);
    }

    /// Replace the content and stamp `last_edited` with `clock`'s time
    pub fn set_content_with_clock(&mut self, content: impl Into<String>, clock: &impl Clock) {
        let edited_at = clock.now();
        self.content = content.into();
        self.last_edited = Some(edited_at);
        debug!(
            id = self.id,
            chars = self.len(),
            %edited_at,
            "replaced article content"
        );
    }

    /// When the content was last replaced, `None` if never
    pub fn last_edited(&self) -> Option<NaiveDateTime> {
        self.last_edited
    }

    /// Length of the content in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// True when the content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Order two articles by publication date only
    ///
    /// Pair with a stable sort (`sort_by`) so articles sharing a date keep
    /// their relative order.
    ///
    /// ```
    /// use articlekit::Article;
    /// use chrono::NaiveDate;
    ///
    /// let day = |d| {
    ///     NaiveDate::from_ymd_opt(1812, 12, d)
    ///         .unwrap()
    ///         .and_hms_opt(0, 0, 0)
    ///         .unwrap()
    /// };
    /// let mut articles = vec![
    ///     Article::new("Later", "Grimm", day(21), ""),
    ///     Article::new("Earlier", "Grimm", day(20), ""),
    /// ];
    /// articles.sort_by(Article::compare);
    /// assert_eq!(articles[0].title(), "Earlier");
    /// ```
    pub fn compare(a: &Article, b: &Article) -> Ordering {
        a.publication_date.cmp(&b.publication_date)
    }

    /// Introduction of at most `max_characters` using the default [`TextConfig`]
    pub fn short_introduction(&self, max_characters: usize) -> String {
        self.short_introduction_with(max_characters, &TextConfig::default())
    }

    /// Introduction of at most `max_characters` using `config`'s whitespace policy
    pub fn short_introduction_with(&self, max_characters: usize, config: &TextConfig) -> String {
        short_introduction(&self.content, max_characters, config.whitespace)
    }

    /// The `n` most common words using the default [`TextConfig`]
    pub fn most_common_words(&self, n: usize) -> WordCounts {
        self.most_common_words_with(n, &TextConfig::default())
    }

    /// The `n` most common words using `config`'s word pattern
    pub fn most_common_words_with(&self, n: usize, config: &TextConfig) -> WordCounts {
        most_common_words(&self.content, n, config.words)
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Article title='{}' author='{}' publication_date='{}'>",
            self.title,
            self.author,
            self.publication_date.format(DISPLAY_DATE_FORMAT)
        )
    }
}

impl FieldOwner for Article {
    fn instance_key(&self) -> &InstanceKey {
        &self.key
    }
}
