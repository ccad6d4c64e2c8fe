//! Per-row status rules.
//!
//! Each rule is a pure function of the row's cells and, for the lookup,
//! the reference sets built before the row pass.

use painel_model::{FinalStatus, LookupStatus, StateStatus, ValidationStatus};

use crate::reference::ReferenceSets;

/// Lowercased state name that receives its own enrolment label.
pub const SAO_PAULO: &str = "são paulo";

pub fn state_status(state: Option<&str>) -> StateStatus {
    match state {
        Some(state) if state.trim().to_lowercase() == SAO_PAULO => StateStatus::SaoPaulo,
        _ => StateStatus::Default,
    }
}

/// Compares the state-derived label with the recorded status.
pub fn validation_status(state: StateStatus, recorded: Option<&str>) -> ValidationStatus {
    if state.as_str() == recorded.unwrap_or_default().trim() {
        ValidationStatus::Ok
    } else {
        ValidationStatus::Corrigir
    }
}

/// EDUCAPI membership wins over COMERCIAL.
pub fn lookup_validation(key: Option<&str>, references: &ReferenceSets) -> LookupStatus {
    let key = key.unwrap_or_default().trim();
    if key.is_empty() {
        LookupStatus::Unmatched
    } else if references.educapi.contains(key) {
        LookupStatus::Educapi
    } else if references.comercial.contains(key) {
        LookupStatus::Comercial
    } else {
        LookupStatus::Unmatched
    }
}

/// Reconciles recorded status `c`, state status `m` and lookup `o`.
///
/// Strict three-way comparison on trimmed text:
/// - `o` empty: `VERIFICAR`
/// - `c == m == o`: `OK`
/// - `m == o` and `c != m`: `STATUS CADASTRADO DE FORMA INCORRETA`
/// - otherwise `VERIFICAR`
pub fn reconcile(c: &str, m: &str, o: &str) -> FinalStatus {
    let (c, m, o) = (c.trim(), m.trim(), o.trim());
    if o.is_empty() {
        FinalStatus::Verificar
    } else if c == m && m == o {
        FinalStatus::Ok
    } else if m == o {
        FinalStatus::StatusIncorreto
    } else {
        FinalStatus::Verificar
    }
}

pub fn final_status(
    recorded: Option<&str>,
    state: StateStatus,
    lookup: LookupStatus,
) -> FinalStatus {
    reconcile(recorded.unwrap_or_default(), state.as_str(), lookup.as_str())
}

/// The four derived values of one panel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowVerdict {
    pub state_status: StateStatus,
    pub validation_status: ValidationStatus,
    pub lookup: LookupStatus,
    pub final_status: FinalStatus,
}

pub fn evaluate_row(
    state: Option<&str>,
    recorded: Option<&str>,
    key: Option<&str>,
    references: &ReferenceSets,
) -> RowVerdict {
    let state_status = state_status(state);
    let validation_status = validation_status(state_status, recorded);
    let lookup = lookup_validation(key, references);
    let final_status = final_status(recorded, state_status, lookup);
    RowVerdict {
        state_status,
        validation_status,
        lookup,
        final_status,
    }
}
