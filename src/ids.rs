//! Article id assignment
//!
//! Ids come from an [`ArticleIds`] counter. [`Article::new`](crate::Article::new)
//! draws from a process-wide counter; pass your own counter through
//! [`Article::with_ids`](crate::Article::with_ids) or
//! [`ArticleBuilder::ids`](crate::ArticleBuilder::ids) to get an independent sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

static GLOBAL_IDS: ArticleIds = ArticleIds::new();

/// Monotonic id counter
///
/// `next_id` is a single atomic fetch-add, so ids stay unique when articles
/// are created from several threads. Ids from one counter never repeat and
/// have no gaps.
///
/// # Example
///
/// ```
/// use articlekit::ArticleIds;
///
/// let ids = ArticleIds::new();
/// assert_eq!(ids.next_id(), 0);
/// assert_eq!(ids.next_id(), 1);
/// assert_eq!(ids.peek(), 2);
/// ```
#[derive(Debug)]
pub struct ArticleIds {
    next: AtomicU64,
}

impl ArticleIds {
    /// Create a counter whose first id is 0
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a counter whose first id is `first`
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Take the next id
    pub fn next_id(&self) -> u64 {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        trace!(id, "assigned article id");
        id
    }

    /// Id the next call to `next_id` will return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for ArticleIds {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide counter used by `Article::new`
pub(crate) fn global() -> &'static ArticleIds {
    &GLOBAL_IDS
}
