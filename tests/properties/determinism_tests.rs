use chrono::NaiveDate;

use lexwatch::analyze::analyze;
use lexwatch::bulletin::{SearchOptions, search};
use lexwatch::catalog::Catalog;
use lexwatch::test_utils::sample_bulletin;

#[test]
fn analyze_is_deterministic() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let text = "Bajar el IVA de la luz y ampliar las becas de educación pública";
    let first = analyze(text, 6, catalog.laws());
    for _ in 0..5 {
        assert_eq!(analyze(text, 6, catalog.laws()), first);
    }
}

#[test]
fn search_is_deterministic_with_fixed_date() {
    let corpus = sample_bulletin();
    let options = SearchOptions {
        today: NaiveDate::from_ymd_opt(2024, 6, 30),
        ..SearchOptions::default()
    };
    let first = search("iva", &corpus, &options);
    for _ in 0..5 {
        assert_eq!(search("iva", &corpus, &options), first);
    }
}

#[test]
fn equal_scores_keep_corpus_order() {
    let corpus = sample_bulletin();
    let hits = search("xyzzy", &corpus, &SearchOptions::default());
    let ids: Vec<&str> = hits.iter().map(|h| h.document_id.as_str()).collect();
    assert_eq!(
        ids,
        ["BOE-A-2024-0001", "BOE-A-2024-0002", "BOE-A-2024-0003", "BOE-A-2024-0004", "BOE-A-2024-0005"]
    );
    assert!(hits.iter().all(|h| h.score.abs() < f64::EPSILON));
}
