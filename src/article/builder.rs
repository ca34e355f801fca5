//! Article builder
//!
//! Builds an [`Article`] from named parts. Title and author are required;
//! content defaults to empty and the publication date defaults to the
//! builder clock's current time.

use chrono::NaiveDateTime;

use super::types::Article;
use crate::clock::{Clock, SystemClock};
use crate::ids::{self, ArticleIds};
use crate::{ArticleError, Result};

/// Builder for [`Article`]
///
/// # Example
///
/// ```
/// use articlekit::{ArticleBuilder, ArticleIds};
///
/// let ids = ArticleIds::new();
/// let article = ArticleBuilder::new()
///     .title("Rapunzel")
///     .author("The Brothers Grimm")
///     .content("There were once a man and a woman")
///     .ids(&ids)
///     .build()
///     .unwrap();
///
/// assert_eq!(article.id(), 0);
/// assert_eq!(article.short_introduction(10), "There were");
/// ```
#[must_use]
pub struct ArticleBuilder<'a> {
    title: Option<String>,
    author: Option<String>,
    publication_date: Option<NaiveDateTime>,
    content: String,
    ids: Option<&'a ArticleIds>,
    clock: Option<&'a dyn Clock>,
}

impl Default for ArticleBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ArticleBuilder<'a> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            title: None,
            author: None,
            publication_date: None,
            content: String::new(),
            ids: None,
            clock: None,
        }
    }

    /// Set the title (required)
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author (required)
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the publication date (defaults to now)
    pub fn publication_date(mut self, publication_date: NaiveDateTime) -> Self {
        self.publication_date = Some(publication_date);
        self
    }

    /// Set the initial content; this does not stamp `last_edited`
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Draw the id from `ids` instead of the process-wide counter
    pub fn ids(mut self, ids: &'a ArticleIds) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Use `clock` for the default publication date
    pub fn clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the article
    ///
    /// Validation happens before an id is taken, so a failed build never
    /// consumes an id.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::MissingField`] when the title or author is missing.
    pub fn build(self) -> Result<Article> {
        let title = self.title.ok_or(ArticleError::MissingField("title"))?;
        let author = self.author.ok_or(ArticleError::MissingField("author"))?;

        let publication_date = self.publication_date.unwrap_or_else(|| match self.clock {
            Some(clock) => clock.now(),
            None => SystemClock.now(),
        });
        let ids = self.ids.unwrap_or_else(|| ids::global());

        Ok(Article::with_ids(
            ids,
            title,
            author,
            publication_date,
            self.content,
        ))
    }
}
