//! End-to-end matcher scenarios over the library API.

use chrono::NaiveDate;

use lexwatch::analyze::analyze;
use lexwatch::bulletin::{SearchOptions, search};
use lexwatch::catalog::Catalog;
use lexwatch::matcher::{Document, KeywordOverlap, Query, ScoringPolicy, WeightedField, rank};
use lexwatch::test_utils::{TestCase, run_table_tests, sample_bulletin};

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| id(item).to_string()).collect()
}

#[test]
fn iva_under_both_policies() {
    let corpus = vec![
        Document::new("pesca", "Orden sobre pesca marítima").with_keywords(["pesca", "mar"]),
        Document::new("iva", "Ley de IVA").with_keywords(["iva"]),
    ];

    let hits = search("IVA", &corpus, &SearchOptions::default());
    assert_eq!(hits[0].document_id, "iva");
    assert!(hits[0].score >= 100.0);

    let matches = analyze("IVA", 6, &corpus);
    assert_eq!(ids(&matches, |m| m.document_id.as_str()), ["iva"]);
}

#[test]
fn bulletin_ranking_with_recency() {
    let corpus = sample_bulletin();
    let options = SearchOptions {
        today: NaiveDate::from_ymd_opt(2024, 6, 30),
        ..SearchOptions::default()
    };
    let hits = search("ley de iva", &corpus, &options);
    assert_eq!(hits.len(), 5);
    assert_eq!(hits[0].document_id, "BOE-A-2024-0003");
    assert_eq!(hits[1].document_id, "BOE-A-2024-0002");
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(hits[0].web_url.is_some() && hits[0].pdf_url.is_some());
}

#[test]
fn builtin_catalog_topics() -> Result<(), String> {
    let catalog = Catalog::builtin().map_err(|e| e.to_string())?;
    let cases = vec![
        TestCase {
            name: "pensions",
            input: "Subir las pensiones de jubilación con el IPC",
            expected: Some("rdleg-8-2015-seguridad-social".to_string()),
        },
        TestCase {
            name: "climate",
            input: "Plan de energías renovables contra el cambio climático",
            expected: Some("ley-7-2021-cambio-climatico".to_string()),
        },
        TestCase {
            name: "privacy",
            input: "Proteger la privacidad y los datos personales en internet",
            expected: Some("lo-3-2018-proteccion-datos".to_string()),
        },
        TestCase {
            name: "stopwords",
            input: "de la el",
            expected: None,
        },
        TestCase {
            name: "unrelated",
            input: "xyzzy plugh",
            expected: None,
        },
    ];

    run_table_tests(cases, |text| {
        analyze(text, 6, catalog.laws())
            .first()
            .map(|m| m.document_id.clone())
    })
}

#[test]
fn policy_selected_by_caller() {
    let corpus = sample_bulletin();
    let query = Query::parse("iva");

    let overlap = ScoringPolicy::KeywordOverlap(KeywordOverlap::default());
    let ranked = rank(&overlap, &query, &corpus, 10);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].document.id, "BOE-A-2024-0003");

    let weighted = ScoringPolicy::WeightedField(WeightedField::default());
    let ranked = rank(&weighted, &query, &corpus, 10);
    assert_eq!(ranked.len(), corpus.len());
}
