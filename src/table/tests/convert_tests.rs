//! End-to-end conversion tests

use crate::config::ConvertOptions;
use crate::error::ConvertError;
use crate::models::TransposeOutcome;
use crate::table::{convert, convert_with_report};

const SAMPLE: &str = "Column 1 Header,Column 2 Header\nRow 1-1,Row 1-2\nRow 2-1,Row 2-2";

#[test]
fn test_convert_sample_with_defaults() {
    let markdown = convert(SAMPLE, &ConvertOptions::default()).unwrap();

    let expected = "\
| Column 1 Header | Column 2 Header |
| --------------- | --------------- |
| Row 1-1         | Row 1-2         |
| Row 2-1         | Row 2-2         |
";
    assert_eq!(markdown, expected);
}

#[test]
fn test_trailing_newline_does_not_collapse_columns() {
    let with_newline = format!("{}\n", SAMPLE);
    let conversion = convert_with_report(&with_newline, &ConvertOptions::default()).unwrap();

    assert_eq!(conversion.report.columns, 2);
    assert_eq!(conversion.report.trailing_blank_rows, 1);
    assert_eq!(
        conversion.markdown,
        convert(SAMPLE, &ConvertOptions::default()).unwrap()
    );
}

#[test]
fn test_interior_blank_line_constrains_columns() {
    let conversion =
        convert_with_report("a,b\n\nc,d", &ConvertOptions::default()).unwrap();

    assert_eq!(conversion.report.columns, 1);
    assert_eq!(conversion.report.dropped_cells, 2);
    assert_eq!(conversion.markdown, "| a |\n| - |\n|   |\n| c |\n");
}

#[test]
fn test_ragged_rows_truncate_to_shortest() {
    let conversion = convert_with_report("a,b,c\nd,e", &ConvertOptions::default()).unwrap();

    assert_eq!(conversion.report.columns, 2);
    assert_eq!(conversion.report.dropped_cells, 1);
    assert!(conversion.report.has_dropped_cells());
    assert_eq!(conversion.markdown, "| a | b |\n| - | - |\n| d | e |\n");
}

#[test]
fn test_transpose_two_rows() {
    let options = ConvertOptions::default().with_transpose(true);
    let conversion = convert_with_report("h1,h2,h3\nv1,v2,v3", &options).unwrap();

    let expected = "\
| code | value |
| ---- | ----- |
| h1   | v1    |
| h2   | v2    |
| h3   | v3    |
";
    assert_eq!(conversion.markdown, expected);
    assert_eq!(conversion.report.transpose, TransposeOutcome::Applied);
    assert_eq!(conversion.report.rows_rendered, 3);
}

#[test]
fn test_transpose_applies_after_trailing_newline() {
    let options = ConvertOptions::default().with_transpose(true);
    let conversion = convert_with_report("h1,h2\nv1,v2\n", &options).unwrap();

    assert!(conversion.report.transpose.was_applied());
    assert_eq!(conversion.report.rows_rendered, 2);
}

#[test]
fn test_transpose_skipped_for_three_rows() {
    let options = ConvertOptions::default().with_transpose(true);
    let conversion = convert_with_report(SAMPLE, &options).unwrap();

    assert_eq!(conversion.report.transpose, TransposeOutcome::Skipped { rows: 3 });
    assert_eq!(
        conversion.markdown,
        convert(SAMPLE, &ConvertOptions::default()).unwrap()
    );
}

#[test]
fn test_quoted_field_survives_conversion() {
    let markdown = convert("name,city\n\"Doe, Jane\",Paris", &ConvertOptions::default()).unwrap();

    let expected = "\
| name      | city  |
| --------- | ----- |
| Doe, Jane | Paris |
";
    assert_eq!(markdown, expected);
}

#[test]
fn test_semicolon_without_enclosure() {
    let options = ConvertOptions::default()
        .with_delimiter(';')
        .without_enclosure();
    let markdown = convert("a;\"b\"\n1;2", &options).unwrap();

    assert_eq!(markdown, "| a | \"b\" |\n| - | --- |\n| 1 | 2   |\n");
}

#[test]
fn test_empty_input_is_an_error() {
    for text in ["", "\n", "\n\n", "  \n"] {
        let result = convert(text, &ConvertOptions::default());
        assert!(
            matches!(result, Err(ConvertError::EmptyInput)),
            "expected EmptyInput for {:?}",
            text
        );
    }
}

#[test]
fn test_trailing_empty_record_is_rendered() {
    let conversion =
        convert_with_report("name,age\nJane,42\n,\n", &ConvertOptions::default()).unwrap();

    assert_eq!(conversion.report.rows_rendered, 2);
    assert_eq!(conversion.report.trailing_blank_rows, 1);
    assert!(conversion.markdown.ends_with("| Jane | 42  |\n|      |     |\n"));
}

#[test]
fn test_blank_header_record_is_not_empty_input() {
    let markdown = convert("  ,  \n", &ConvertOptions::default()).unwrap();
    assert_eq!(markdown, "|  |  |\n|  |  |\n");
}

#[test]
fn test_no_break_space_is_not_trimmed() {
    let conversion = convert_with_report("\u{a0}x\u{a0}, y \n1,2", &ConvertOptions::default()).unwrap();

    assert_eq!(conversion.report.widths, vec![3, 1]);
    assert!(conversion.markdown.starts_with("| \u{a0}x\u{a0} | y |\n"));
}

#[test]
fn test_non_ascii_enclosure_is_rejected() {
    let options = ConvertOptions::default().with_enclosure('«');
    let result = convert("«a»,b", &options);
    assert!(matches!(result, Err(ConvertError::InvalidOption { .. })));
}

#[test]
fn test_invalid_options_are_rejected_before_parsing() {
    let options = ConvertOptions::default().with_table_separator("");
    let result = convert("a,b", &options);
    assert!(matches!(result, Err(ConvertError::InvalidOption { .. })));
}

#[test]
fn test_report_widths_match_rendered_table() {
    let conversion = convert_with_report(SAMPLE, &ConvertOptions::default()).unwrap();

    assert_eq!(conversion.report.widths, vec![15, 15]);
    assert_eq!(conversion.report.rows_rendered, 2);
    assert_eq!(
        conversion.markdown.lines().count(),
        conversion.report.line_count()
    );
}

#[test]
fn test_convert_is_deterministic() {
    let options = ConvertOptions::default();
    assert_eq!(
        convert(SAMPLE, &options).unwrap(),
        convert(SAMPLE, &options).unwrap()
    );
}
