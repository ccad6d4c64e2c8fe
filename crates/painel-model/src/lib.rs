pub mod columns;
pub mod report;
pub mod status;

pub use columns::{
    ColumnConfig, ColumnRole, DERIVED_COLUMNS, FINAL_STATUS, LOOKUP_VALIDATION, VALIDATION_STATE_STATUS,
    VALIDATION_STATUS,
};
pub use report::{OutputPaths, ReferenceSizes, RunReport, StatusCounts};
pub use status::{FinalStatus, LookupStatus, StateStatus, ValidationStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_counts_tally_by_label() {
        let mut counts = StatusCounts::default();
        counts.record(
            StateStatus::Default,
            ValidationStatus::Ok,
            LookupStatus::Educapi,
            FinalStatus::Verificar,
        );
        counts.record(
            StateStatus::SaoPaulo,
            ValidationStatus::Corrigir,
            LookupStatus::Unmatched,
            FinalStatus::Verificar,
        );
        assert_eq!(counts.final_status.get("VERIFICAR"), Some(&2));
        assert_eq!(counts.validation_status.get("OK"), Some(&1));
        assert_eq!(counts.validation_status.get("CORRIGIR"), Some(&1));
        assert_eq!(counts.lookup.get("Matricula Liberada EDUCAPI"), Some(&1));
        assert_eq!(counts.lookup.get(""), Some(&1));
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn run_report_serializes() {
        let report = RunReport {
            panel: "painel.xlsx".into(),
            rows: 3,
            missing_key_rows: 1,
            reference_sizes: ReferenceSizes {
                educapi: 10,
                comercial: 0,
            },
            counts: StatusCounts::default(),
            outputs: OutputPaths::default(),
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        assert!(json.contains("\"missing_key_rows\":1"));
        assert!(json.contains("\"educapi\":10"));
    }
}
