#![doc = include_str!("../README.md")]

/// Article records and the article builder
pub mod article;
/// Time source for edit timestamps
pub mod clock;
mod config;
mod error;
/// Type-checked per-instance fields
pub mod field;
/// Article id assignment
pub mod ids;
/// Word-aligned short introductions
pub mod introduction;
/// Word frequency counting
pub mod words;

pub use article::{Article, ArticleBuilder};
pub use clock::{Clock, SystemClock};
pub use config::{TextConfig, WhitespacePolicy, WordPattern};
pub use error::{ArticleError, Result};
pub use field::{ArticleField, FieldOwner, InstanceKey};
pub use ids::ArticleIds;
pub use words::WordCounts;
