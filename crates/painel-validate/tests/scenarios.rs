//! End-to-end validation scenarios on small in-memory panels.

use painel_common::string_values;
use painel_model::{ColumnConfig, ColumnRole, FINAL_STATUS, LOOKUP_VALIDATION, VALIDATION_STATUS};
use painel_validate::{ValidateError, validate};
use polars::prelude::*;

fn panel(rows: &[(Option<&str>, Option<&str>, Option<&str>)]) -> DataFrame {
    let states: Vec<Option<&str>> = rows.iter().map(|r| r.0).collect();
    let statuses: Vec<Option<&str>> = rows.iter().map(|r| r.1).collect();
    let keys: Vec<Option<&str>> = rows.iter().map(|r| r.2).collect();
    df! {
        "NOME" => vec![Some("aluno"); rows.len()],
        "C" => statuses,
        "H" => keys,
        "L" => states,
    }
    .unwrap()
}

fn reference(keys: &[&str]) -> DataFrame {
    df! { "E" => keys }.unwrap()
}

fn column(df: &DataFrame, name: &str) -> Vec<String> {
    string_values(df, name)
        .unwrap()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect()
}

#[test]
fn test_sao_paulo_key_in_educapi() {
    let panel = panel(&[(Some("São Paulo"), Some("Matricula Liberada SP"), Some("111"))]);
    let educapi = reference(&["111"]);
    let comercial = reference(&[]);

    let outcome = validate(&panel, Some(&educapi), Some(&comercial), &ColumnConfig::default()).unwrap();

    assert_eq!(column(&outcome.annotated, "VALIDATION_STATE_STATUS"), ["Matricula Liberada SP"]);
    assert_eq!(column(&outcome.annotated, VALIDATION_STATUS), ["OK"]);
    assert_eq!(column(&outcome.annotated, LOOKUP_VALIDATION), ["Matricula Liberada EDUCAPI"]);
    assert_eq!(column(&outcome.annotated, FINAL_STATUS), ["VERIFICAR"]);
    assert_eq!(outcome.missing_key_rows.height(), 0);
    assert!(outcome.missing_key_summary.iter().all(|s| s.count == 0));
}

#[test]
fn test_key_only_in_comercial() {
    let panel = panel(&[(Some("Bahia"), Some("Matricula Liberada"), Some("222"))]);
    let outcome = validate(
        &panel,
        Some(&reference(&["111"])),
        Some(&reference(&["222"])),
        &ColumnConfig::default(),
    )
    .unwrap();

    assert_eq!(column(&outcome.annotated, "VALIDATION_STATE_STATUS"), ["Matricula Liberada"]);
    assert_eq!(column(&outcome.annotated, VALIDATION_STATUS), ["OK"]);
    assert_eq!(column(&outcome.annotated, LOOKUP_VALIDATION), ["Matricula Liberada SPE"]);
    assert_eq!(column(&outcome.annotated, FINAL_STATUS), ["VERIFICAR"]);
}

#[test]
fn test_recorded_lookup_label_is_not_ok() {
    let panel = panel(&[(Some("Bahia"), Some("Matricula Liberada EDUCAPI"), Some("111"))]);
    let outcome = validate(&panel, Some(&reference(&["111"])), None, &ColumnConfig::default()).unwrap();

    assert_eq!(column(&outcome.annotated, VALIDATION_STATUS), ["CORRIGIR"]);
    assert_eq!(column(&outcome.annotated, FINAL_STATUS), ["VERIFICAR"]);
}

#[test]
fn test_unknown_key() {
    let panel = panel(&[(Some("Bahia"), Some("Matricula Liberada"), Some("999"))]);
    let outcome = validate(
        &panel,
        Some(&reference(&["111"])),
        Some(&reference(&["222"])),
        &ColumnConfig::default(),
    )
    .unwrap();

    assert_eq!(column(&outcome.annotated, LOOKUP_VALIDATION), [""]);
    assert_eq!(column(&outcome.annotated, FINAL_STATUS), ["VERIFICAR"]);
}

#[test]
fn test_blank_key_lands_in_both_outputs() {
    let panel = panel(&[
        (Some("Bahia"), Some("Matricula Liberada"), Some("111")),
        (Some("Bahia"), Some("Matricula Liberada"), Some("   ")),
        (Some("São Paulo"), None, None),
    ]);
    let outcome = validate(&panel, Some(&reference(&["111"])), None, &ColumnConfig::default()).unwrap();

    assert_eq!(outcome.annotated.height(), 3);
    assert_eq!(outcome.missing_key_rows.height(), 2);
    assert_eq!(
        outcome.missing_key_rows.get_column_names(),
        outcome.annotated.get_column_names()
    );
    assert_eq!(column(&outcome.missing_key_rows, "L"), ["Bahia", "São Paulo"]);
    assert_eq!(column(&outcome.missing_key_rows, LOOKUP_VALIDATION), ["", ""]);

    let key_summary = outcome
        .missing_key_summary
        .iter()
        .find(|s| s.column == "H")
        .unwrap();
    assert_eq!(key_summary.count, 1);
    assert!(key_summary.numeric.is_none());
    assert_eq!(key_summary.text.as_ref().unwrap().top.as_deref(), Some("   "));
}

#[test]
fn test_missing_reference_tables_are_empty_sets() {
    let panel = panel(&[(Some("Bahia"), Some("Matricula Liberada"), Some("111"))]);
    let outcome = validate(&panel, None, None, &ColumnConfig::default()).unwrap();

    assert_eq!(outcome.reference_sizes.educapi, 0);
    assert_eq!(outcome.reference_sizes.comercial, 0);
    assert_eq!(column(&outcome.annotated, LOOKUP_VALIDATION), [""]);
}

#[test]
fn test_reference_without_key_column_is_ignored() {
    let panel = panel(&[(Some("Bahia"), Some("Matricula Liberada"), Some("111"))]);
    let educapi = df! { "CPF" => &["111"] }.unwrap();
    let outcome = validate(&panel, Some(&educapi), None, &ColumnConfig::default()).unwrap();

    assert_eq!(outcome.reference_sizes.educapi, 0);
    assert_eq!(column(&outcome.annotated, LOOKUP_VALIDATION), [""]);
}

#[test]
fn test_missing_columns_abort_before_rows() {
    let panel = df! { "NOME" => &["aluno"], "H" => &["1"] }.unwrap();
    let err = validate(&panel, None, None, &ColumnConfig::default()).unwrap_err();

    let schema = match err {
        ValidateError::Schema(schema) => schema,
        other => panic!("expected schema error, got {other:?}"),
    };
    let roles: Vec<ColumnRole> = schema.missing.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![ColumnRole::State, ColumnRole::Status]);
    insta::assert_snapshot!(
        schema.to_string(),
        @"panel is missing required column(s): 'L' (state), 'C' (recorded status)"
    );
}

#[test]
fn test_configured_column_names() {
    let panel = df! {
        "UF" => &["são paulo"],
        "STATUS" => &["Matricula Liberada SP"],
        "CPF" => &["123"],
    }
    .unwrap();
    let educapi = df! { "cpf" => &["123"] }.unwrap();
    let columns = ColumnConfig {
        state: "UF".to_string(),
        status: "STATUS".to_string(),
        key: "CPF".to_string(),
        reference_key: "CPF".to_string(),
    };

    let outcome = validate(&panel, Some(&educapi), None, &columns).unwrap();

    assert_eq!(column(&outcome.annotated, VALIDATION_STATUS), ["OK"]);
    assert_eq!(column(&outcome.annotated, LOOKUP_VALIDATION), ["Matricula Liberada EDUCAPI"]);
    assert_eq!(outcome.counts.total(), 1);
    assert_eq!(outcome.counts.final_status.get("VERIFICAR"), Some(&1));
}

#[test]
fn test_source_columns_untouched() {
    let panel = panel(&[(Some(" Bahia "), Some(" x "), Some(" 111 "))]);
    let outcome = validate(&panel, Some(&reference(&["111"])), None, &ColumnConfig::default()).unwrap();

    assert_eq!(column(&outcome.annotated, "L"), [" Bahia "]);
    assert_eq!(column(&outcome.annotated, "C"), [" x "]);
    assert_eq!(column(&outcome.annotated, "H"), [" 111 "]);
    assert_eq!(column(&outcome.annotated, LOOKUP_VALIDATION), ["Matricula Liberada EDUCAPI"]);
}
