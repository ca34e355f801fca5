//! Article construction and edit-tracking tests

use std::cell::RefCell;

use articlekit::{Article, ArticleIds, Clock};
use chrono::{NaiveDate, NaiveDateTime};

const TITLE: &str = "Rapunzel";
const AUTHOR: &str = "The Brothers Grimm";
const CONTENT: &str = "There were once a man and a woman who had long in vain wished for a child.";

/// Clock that hands out a scripted sequence of timestamps
struct ScriptedClock {
    times: RefCell<Vec<NaiveDateTime>>,
}

impl ScriptedClock {
    fn new(mut times: Vec<NaiveDateTime>) -> Self {
        times.reverse();
        Self {
            times: RefCell::new(times),
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> NaiveDateTime {
        self.times
            .borrow_mut()
            .pop()
            .expect("scripted clock ran out of timestamps")
    }
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(11, 11, 9)
        .unwrap()
}

fn rapunzel(ids: &ArticleIds) -> Article {
    Article::with_ids(ids, TITLE, AUTHOR, at(1812, 12, 20), CONTENT)
}

#[test]
fn test_instantiation_keeps_fields() {
    let article = rapunzel(&ArticleIds::new());
    assert_eq!(article.title(), TITLE);
    assert_eq!(article.author(), AUTHOR);
    assert_eq!(article.content(), CONTENT);
    assert_eq!(article.publication_date(), at(1812, 12, 20));
}

#[test]
fn test_display_format() {
    let article = rapunzel(&ArticleIds::new());
    assert_eq!(
        article.to_string(),
        "<Article title='Rapunzel' author='The Brothers Grimm' \
         publication_date='1812-12-20T11:11:09'>"
    );
}

#[test]
fn test_len_tracks_content() {
    let mut article = rapunzel(&ArticleIds::new());
    assert_eq!(article.len(), CONTENT.len());

    article.set_content("Rapunzel, Rapunzel");
    assert_eq!(article.len(), 18);
}

#[test]
fn test_ids_start_at_zero_and_increase() {
    let ids = ArticleIds::new();
    let articles: Vec<_> = (0..10).map(|_| rapunzel(&ids)).collect();

    // Read in reverse so ids cannot depend on access order.
    for (expected, article) in articles.iter().enumerate().rev() {
        assert_eq!(article.id(), expected as u64);
    }
}

#[test]
fn test_global_ids_are_strictly_increasing() {
    let first = Article::new(TITLE, AUTHOR, at(1812, 12, 20), CONTENT);
    let second = Article::new(TITLE, AUTHOR, at(1812, 12, 20), CONTENT);
    let third = Article::new(TITLE, AUTHOR, at(1812, 12, 20), CONTENT);
    assert!(first.id() < second.id());
    assert!(second.id() < third.id());
}

#[test]
fn test_last_edited_follows_content_edits() {
    let clock = ScriptedClock::new(vec![at(2020, 7, 1), at(2020, 7, 2)]);
    let mut article = rapunzel(&ArticleIds::new());
    assert_eq!(article.last_edited(), None);

    article.set_content_with_clock("Rapunzel, Rapunzel", &clock);
    assert_eq!(article.last_edited(), Some(at(2020, 7, 1)));

    // Same value still counts as a replacement.
    article.set_content_with_clock("Rapunzel, Rapunzel", &clock);
    assert_eq!(article.last_edited(), Some(at(2020, 7, 2)));
}

#[test]
fn test_last_edited_uses_system_clock() {
    let mut article = rapunzel(&ArticleIds::new());
    article.set_content("Let down your hair to me.");
    let edited = article.last_edited().expect("content edit should stamp last_edited");
    assert!(edited > at(1812, 12, 20));
}

#[test]
fn test_other_fields_never_touch_last_edited() {
    let clock = ScriptedClock::new(vec![at(2020, 7, 1)]);
    let mut article = rapunzel(&ArticleIds::new());

    article.set_title("Hansel and Gretel");
    article.set_author("Jacob Grimm");
    article.set_publication_date(at(1812, 12, 21));
    assert_eq!(article.last_edited(), None);

    article.set_content_with_clock("Hard by a great forest", &clock);
    article.set_title("Rapunzel");
    article.set_author("Wilhelm Grimm");
    article.set_publication_date(at(1857, 1, 1));
    assert_eq!(article.last_edited(), Some(at(2020, 7, 1)));
}

#[test]
fn test_last_edited_is_per_article() {
    let clock = ScriptedClock::new(vec![at(2020, 7, 1), at(2020, 7, 2)]);
    let ids = ArticleIds::new();
    let mut one = rapunzel(&ids);
    let mut two = rapunzel(&ids);

    one.set_content_with_clock("first edit", &clock);
    assert_eq!(one.last_edited(), Some(at(2020, 7, 1)));
    assert_eq!(two.last_edited(), None);

    two.set_content_with_clock("second edit", &clock);
    assert_eq!(one.last_edited(), Some(at(2020, 7, 1)));
    assert_eq!(two.last_edited(), Some(at(2020, 7, 2)));
}

#[test]
fn test_content_edits_emit_debug_events() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("articlekit=trace")
        .with_test_writer()
        .try_init();

    let mut article = rapunzel(&ArticleIds::new());
    article.set_content("logged edit");
    assert!(article.last_edited().is_some());
}
