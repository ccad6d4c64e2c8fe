//! Status labels written into the derived columns.
//!
//! The labels are part of the output contract: operators filter the result
//! workbook on these exact strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of `VALIDATION_STATE_STATUS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateStatus {
    #[serde(rename = "Matricula Liberada SP")]
    SaoPaulo,
    #[serde(rename = "Matricula Liberada")]
    Default,
}

impl StateStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StateStatus::SaoPaulo => "Matricula Liberada SP",
            StateStatus::Default => "Matricula Liberada",
        }
    }
}

/// Value of `VALIDATION_STATUS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationStatus {
    #[serde(rename = "OK")]
    Ok,
    /// The recorded status needs correction.
    #[serde(rename = "CORRIGIR")]
    Corrigir,
}

impl ValidationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Ok => "OK",
            ValidationStatus::Corrigir => "CORRIGIR",
        }
    }
}

/// Value of `LOOKUP_VALIDATION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupStatus {
    #[serde(rename = "Matricula Liberada EDUCAPI")]
    Educapi,
    #[serde(rename = "Matricula Liberada SPE")]
    Comercial,
    /// Key not found in either reference list; written as an empty cell value.
    #[serde(rename = "")]
    Unmatched,
}

impl LookupStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LookupStatus::Educapi => "Matricula Liberada EDUCAPI",
            LookupStatus::Comercial => "Matricula Liberada SPE",
            LookupStatus::Unmatched => "",
        }
    }

    pub fn is_match(self) -> bool {
        !matches!(self, LookupStatus::Unmatched)
    }
}

/// Value of `FINAL_STATUS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalStatus {
    #[serde(rename = "OK")]
    Ok,
    /// Needs manual review.
    #[serde(rename = "VERIFICAR")]
    Verificar,
    /// The computed statuses agree with each other but not with the recorded one.
    #[serde(rename = "STATUS CADASTRADO DE FORMA INCORRETA")]
    StatusIncorreto,
}

impl FinalStatus {
    pub const ALL: [FinalStatus; 3] = [
        FinalStatus::Ok,
        FinalStatus::Verificar,
        FinalStatus::StatusIncorreto,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FinalStatus::Ok => "OK",
            FinalStatus::Verificar => "VERIFICAR",
            FinalStatus::StatusIncorreto => "STATUS CADASTRADO DE FORMA INCORRETA",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(StateStatus, ValidationStatus, LookupStatus, FinalStatus);
