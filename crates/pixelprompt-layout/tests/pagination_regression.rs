use pixelprompt::estimate_image_tokens;
use pixelprompt_layout::{
    page_size, paginate, wrap_text, FixedCellMeasurer, LayoutConfig, LayoutEngine, Sizing,
};

fn default_engine() -> LayoutEngine {
    LayoutEngine::new(&FixedCellMeasurer::new(6, 9), LayoutConfig::default())
}

fn numbered_lines(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Line {:04}: some content", i)).collect()
}

#[test]
fn pages_concatenate_back_to_the_wrapped_rows() {
    for n in [0usize, 1, 9, 10, 11, 155, 156, 1000] {
        let lines = numbered_lines(n);
        let pages = paginate(lines.clone(), 10);
        let rebuilt: Vec<String> = pages.into_iter().flat_map(|page| page.lines).collect();
        assert_eq!(rebuilt, lines, "n = {}", n);
    }
}

#[test]
fn page_count_is_ceiling_with_a_floor_of_one() {
    for (n, max_lines, expected) in [
        (0usize, 10usize, 1usize),
        (1, 10, 1),
        (10, 10, 1),
        (11, 10, 2),
        (1000, 155, 7),
        (7, 1, 7),
    ] {
        assert_eq!(paginate(numbered_lines(n), max_lines).len(), expected);
    }
}

#[test]
fn wrapped_rows_stay_within_engine_budget() {
    let engine = default_engine();
    let limit = engine.metrics().max_chars_per_line;
    let text = format!(
        "{}\n\n{}\n{}",
        "alpha beta gamma delta ".repeat(60),
        "z".repeat(limit * 3 + 7),
        "short"
    );
    let rows = engine.wrap(&text);
    assert!(rows.iter().all(|row| row.chars().count() <= limit));
    assert!(rows.contains(&String::new()));
    assert_eq!(rows.last().map(String::as_str), Some("short"));
}

#[test]
fn default_budgets_for_six_by_nine_cell() {
    let metrics = *default_engine().metrics();
    assert_eq!(metrics.max_chars_per_line, 259);
    assert_eq!(metrics.max_lines_per_page, 155);
}

#[test]
fn dynamic_sizing_is_cheaper_than_fixed_for_small_content() {
    let engine = default_engine();
    let pages = engine.layout("Hello, World!");
    assert_eq!(pages.len(), 1);
    let dynamic = page_size(&pages[0], engine.metrics(), engine.config(), Sizing::default());
    let fixed = page_size(&pages[0], engine.metrics(), engine.config(), Sizing::FIXED);
    assert!(estimate_image_tokens(dynamic.0, dynamic.1) < estimate_image_tokens(fixed.0, fixed.1));
}

#[test]
fn explicit_empty_lines_are_preserved_as_rows() {
    assert_eq!(wrap_text("a\n\n\nb", 80), vec!["a", "", "", "b"]);
}
