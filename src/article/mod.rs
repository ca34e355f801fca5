//! Article records
//!
//! This module is organized into:
//! - `types`: the [`Article`] record and its text helpers
//! - `builder`: [`ArticleBuilder`] for constructing articles from named parts

mod builder;
mod types;

pub use self::builder::ArticleBuilder;
pub use self::types::Article;
