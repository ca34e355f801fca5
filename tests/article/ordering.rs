//! Article ordering tests

use articlekit::{Article, ArticleIds};
use chrono::{NaiveDate, NaiveDateTime};

fn year(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_sort_by_publication_date() {
    let ids = ArticleIds::new();
    let mut articles = vec![
        Article::with_ids(&ids, "Sleeping Beauty", "Grimm", year(1812), ""),
        Article::with_ids(&ids, "Cinderella", "Perrault", year(1697), ""),
        Article::with_ids(&ids, "The Little Mermaid", "Andersen", year(1837), ""),
        Article::with_ids(&ids, "Beauty and the Beast", "Villeneuve", year(1740), ""),
    ];

    articles.sort_by(Article::compare);

    let titles: Vec<_> = articles.iter().map(Article::title).collect();
    assert_eq!(
        titles,
        vec![
            "Cinderella",
            "Beauty and the Beast",
            "Sleeping Beauty",
            "The Little Mermaid"
        ]
    );
}

#[test]
fn test_sort_keeps_order_of_equal_dates() {
    let ids = ArticleIds::new();
    let mut articles = vec![
        Article::with_ids(&ids, "b", "Grimm", year(1812), ""),
        Article::with_ids(&ids, "a", "Grimm", year(1700), ""),
        Article::with_ids(&ids, "c", "Grimm", year(1812), ""),
        Article::with_ids(&ids, "d", "Grimm", year(1812), ""),
    ];

    articles.sort_by(Article::compare);

    let titles: Vec<_> = articles.iter().map(Article::title).collect();
    assert_eq!(titles, vec!["a", "b", "c", "d"]);
}
