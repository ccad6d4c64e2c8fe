//! Report generation for the validated panel.
//!
//! Two workbooks are produced:
//!
//! - **Annotated panel** (`PAINEL_Processado_Final.xlsx`): every panel row
//!   with the derived status columns
//! - **Missing-key report** (`Relatorio_Linhas_Sem_PK.xlsx`): rows without a
//!   primary key plus a column summary, only when such rows exist

mod common;
mod outputs;
mod workbook;

pub use common::{
    ANNOTATED_FILE, ANNOTATED_SHEET, MISSING_KEY_FILE, MISSING_KEY_SHEET, SUMMARY_HEADERS,
    SUMMARY_SHEET,
};
pub use outputs::write_outputs;
pub use workbook::{write_annotated_workbook, write_missing_key_workbook};
