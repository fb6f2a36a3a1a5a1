//! Table row content for the validate and variants commands.

use vforge_cli::summary::{diagnostic_rows, variant_rows};
use vforge_model::templates;
use vforge_validate::validate;

#[test]
fn variant_rows_list_active_states() {
    let rows = variant_rows(&templates::input_field());
    let text = rows
        .iter()
        .map(|row| row.join(" | "))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(text, @r"
    1 | state=default | -
    2 | state=focus | focus
    3 | state=error | error
    ");
}

#[test]
fn blank_template_has_single_default_row() {
    let rows = variant_rows(&templates::blank("Card"));
    assert_eq!(
        rows,
        vec![["1".to_string(), "Default".to_string(), "-".to_string()]]
    );
}

#[test]
fn errors_are_listed_before_warnings() {
    let spec = templates::button().edit(|spec| {
        spec.variants[0].values.push("x=y".to_string());
        spec.variants[1].values = vec!["sm".into(), "sm".into(), "lg".into()];
    });
    let rows = diagnostic_rows(&validate(&spec));
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        [
            "Error".to_string(),
            "variant.value.duplicate".to_string(),
            "variants[1].values".to_string(),
            "Variant group 'size' repeats value(s): sm".to_string(),
        ]
    );
    assert_eq!(rows[1][0], "Warning");
    assert_eq!(rows[1][1], "variant.value.format");
    assert_eq!(rows[1][2], "variants[0].values[4]");
}

#[test]
fn clean_report_has_no_rows() {
    assert!(diagnostic_rows(&validate(&templates::button())).is_empty());
}
