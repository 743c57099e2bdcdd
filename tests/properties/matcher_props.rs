use proptest::prelude::*;

use lexwatch::analyze::analyze;
use lexwatch::catalog::Catalog;
use lexwatch::matcher::tokenizer::is_stopword;
use lexwatch::matcher::{normalize, tokenize};

const VOCAB: &[&str] = &[
    "iva", "alquiler", "vivienda", "pensión", "jubilación", "renta", "educación", "beca",
    "sanidad", "hospital", "energía", "renovables", "datos", "privacidad", "transparencia",
    "salario", "contrato", "de", "la", "el", "para", "con", "ley", "reforma", "xyzzy",
];

fn proposal_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn tokens_are_non_empty_and_not_stopwords(text in "[a-zA-ZáéíóúñÁÉÍÓÚÑü ,.;%0-9]{0,64}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!is_stopword(&token));
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn tokenize_is_stable_under_normalization(text in "[a-zA-ZáéíóúñÁÉÍÓÚÑü ]{0,64}") {
        prop_assert_eq!(tokenize(&text), tokenize(&normalize(&text)));
    }

    #[test]
    fn analyze_is_bounded_and_sorted(text in proposal_text(), max in 0usize..8) {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let matches = analyze(&text, max, catalog.laws());

        prop_assert!(matches.len() <= max);
        for m in &matches {
            prop_assert!(m.score > 0.1 && m.score <= 1.0);
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
