use std::fs;
use std::path::PathBuf;

use lexwatch::config::Config;
use lexwatch::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn parse_fixture(relative: &str) -> Config {
    let content = fs::read_to_string(fixture_path(relative)).expect("read fixture");
    toml::from_str(&content).expect("parse config")
}

#[test]
fn config_analyze_and_search_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: (6usize, 0.1f64, 0.25f64, 3.0f64, 8usize, true),
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: (3usize, 0.2f64, 0.25f64, 3.0f64, 5usize, false),
        },
    ];

    run_table_tests(cases, |relative_path| {
        let config = parse_fixture(relative_path);
        (
            config.analyze.limit,
            config.analyze.threshold,
            config.analyze.phrase_boost,
            config.analyze.min_divisor,
            config.search.limit,
            config.search.recency,
        )
    })
}

#[test]
fn config_weights_paths_and_output_from_fixture() -> Result<(), String> {
    let cases = vec![TestCase {
        name: "custom",
        input: "tests/fixtures/configs/custom.toml",
        expected: (
            200.0f64,
            50.0f64,
            0.0f64,
            4.0f64,
            Some(PathBuf::from("laws/custom.json")),
            vec!["laws/regional.jsonl".to_string()],
            Some(PathBuf::from("/var/cache/lexwatch/boe-today.json")),
            "json".to_string(),
        ),
    }];

    run_table_tests(cases, |relative_path| {
        let config = parse_fixture(relative_path);
        (
            config.search.weights.exact_title,
            config.search.weights.title_phrase,
            config.search.weights.recent_month,
            config.search.weights.recent_year,
            config.catalog.path,
            config.catalog.extra,
            config.bulletin.corpus,
            config.output.format,
        )
    })
}

#[test]
fn config_load_explicit_fixture_applies_patch() {
    let path = fixture_path("tests/fixtures/configs/custom.toml");
    let config = Config::load(Some(path.as_path()), &fixture_path("tests")).expect("load config");
    let params = config.overlap_params();
    assert!((params.threshold - 0.2).abs() < f64::EPSILON);
    assert!((params.phrase_boost - 0.25).abs() < f64::EPSILON);
}
