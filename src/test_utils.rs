//! Shared test helpers: table-driven cases and sample corpora.

use crate::matcher::Document;

/// Table-driven test case.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

/// Run every case through `test_fn`, stopping at the first mismatch.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F) -> Result<(), String>
where
    I: std::fmt::Debug + Clone,
    E: std::fmt::Debug + PartialEq,
    F: Fn(I) -> E,
{
    for case in cases {
        println!("[CASE] {} input={:?}", case.name, case.input);
        let actual = test_fn(case.input.clone());
        if actual != case.expected {
            return Err(format!(
                "case '{}' failed: expected {:?}, got {:?}",
                case.name, case.expected, actual
            ));
        }
    }
    Ok(())
}

/// A small bulletin summary covering exact, partial, summary-only and dated
/// items.
pub fn sample_bulletin() -> Vec<Document> {
    let mut items = vec![
        Document::new("BOE-A-2024-0001", "Orden sobre pesca marítima de recreo")
            .with_summary("Regula las licencias de pesca")
            .with_date("20240102"),
        Document::new("BOE-A-2024-0002", "Reforma de la Ley de IVA")
            .with_summary("Modifica los tipos reducidos del impuesto")
            .with_date("20240301"),
        Document::new("BOE-A-2024-0003", "Ley de IVA")
            .with_keywords(["iva"])
            .with_date("20230115"),
        Document::new("BOE-A-2024-0004", "Real Decreto de becas universitarias")
            .with_summary("Umbrales de renta y cuantías de las becas para el curso 2024-2025")
            .with_date("20240620"),
        Document::new("BOE-A-2024-0005", "Resolución de la Secretaría de Estado de Hacienda")
            .with_summary("Modelos de declaración del IVA")
            .with_date("20240610"),
    ];
    for item in &mut items {
        item.web_url = Some(format!("https://www.boe.es/diario_boe/txt.php?id={}", item.id));
        item.pdf_url = Some(format!("https://www.boe.es/boe/dias/{}.pdf", item.id));
    }
    items
}
