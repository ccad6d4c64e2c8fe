//! Delimited-text fallback: delimiter sniffing, permissive decoding and a
//! tokenizer that skips malformed records instead of failing.

use std::borrow::Cow;

use tracing::debug;

use crate::error::StrategyFailure;
use crate::spreadsheet::RawTable;

/// Number of leading bytes inspected when choosing the delimiter.
pub const SNIFF_SAMPLE_BYTES: usize = 2048;

/// Picks `;` when it occurs more often than `,` in the leading sample,
/// otherwise `,`.
pub fn sniff_delimiter(bytes: &[u8]) -> u8 {
    let sample = &bytes[..bytes.len().min(SNIFF_SAMPLE_BYTES)];
    let (text, _) = decode_permissive(sample);
    let semicolons = text.matches(';').count();
    let commas = text.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}

/// Decodes bytes without ever failing.
///
/// Valid UTF-8 is taken as is; anything else is read as Windows-1252, a
/// single-byte encoding that maps every byte. A byte-order mark selects its
/// encoding and is removed. Returns the text and the encoding name.
pub fn decode_permissive(bytes: &[u8]) -> (Cow<'_, str>, &'static str) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (
            Cow::Borrowed(text.strip_prefix('\u{feff}').unwrap_or(text)),
            encoding_rs::UTF_8.name(),
        ),
        Err(_) => {
            let (decoded, encoding, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            (decoded, encoding.name())
        }
    }
}

/// Control characters other than tab and line breaks do not occur in text exports.
fn is_binary_char(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n' | '\r')
}

/// Result of tokenizing a delimited file.
#[derive(Debug)]
pub(crate) struct DelimitedTable {
    pub(crate) table: RawTable,
    pub(crate) delimiter: u8,
    pub(crate) encoding: &'static str,
    pub(crate) skipped_records: usize,
}

pub(crate) fn read_delimited(bytes: &[u8]) -> Result<DelimitedTable, StrategyFailure> {
    let delimiter = sniff_delimiter(bytes);
    let (text, encoding) = decode_permissive(bytes);
    if text.trim().is_empty() {
        return Err(StrategyFailure::Empty);
    }
    if text.chars().any(is_binary_char) {
        return Err(StrategyFailure::Binary);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut skipped_records = 0usize;

    for (record_idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                skipped_records += 1;
                debug!(record = record_idx, %error, "skipping unreadable record");
                continue;
            }
        };
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let Some(header) = headers.as_ref() else {
            headers = Some(record.iter().map(str::to_string).collect());
            continue;
        };
        if record.len() != header.len() {
            skipped_records += 1;
            debug!(
                record = record_idx,
                expected = header.len(),
                found = record.len(),
                "skipping record with wrong field count"
            );
            continue;
        }
        rows.push(
            record
                .iter()
                .map(|field| (!field.is_empty()).then(|| field.to_string()))
                .collect(),
        );
    }

    let headers = headers.ok_or(StrategyFailure::NoHeader)?;
    Ok(DelimitedTable {
        table: RawTable { headers, rows },
        delimiter,
        encoding,
        skipped_records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_prefers_semicolon_only_when_more_frequent() {
        assert_eq!(sniff_delimiter(b"A;B;C\n1;2;3\n"), b';');
        assert_eq!(sniff_delimiter(b"A,B,C\n1,2,3\n"), b',');
        assert_eq!(sniff_delimiter(b"A;B,C\n"), b',');
        assert_eq!(sniff_delimiter(b""), b',');
    }

    #[test]
    fn test_sniff_only_looks_at_leading_sample() {
        let mut bytes = vec![b'x'; SNIFF_SAMPLE_BYTES];
        bytes.extend_from_slice(b";;;;");
        assert_eq!(sniff_delimiter(&bytes), b',');
    }

    #[test]
    fn test_decode_utf8_strips_bom() {
        let (text, encoding) = decode_permissive("\u{feff}São Paulo".as_bytes());
        assert_eq!(text, "São Paulo");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_decode_falls_back_to_single_byte() {
        // "São" in Latin-1 / Windows-1252
        let (text, encoding) = decode_permissive(&[0x53, 0xE3, 0x6F]);
        assert_eq!(text, "São");
        assert_eq!(encoding, "windows-1252");
    }

    #[test]
    fn test_read_skips_records_with_wrong_field_count() {
        let parsed = read_delimited(b"L;C;H\nBahia;ok;1\nbroken;row\nSP;ok;2;extra\nMG;ok;3\n")
            .unwrap();
        assert_eq!(parsed.delimiter, b';');
        assert_eq!(parsed.skipped_records, 2);
        assert_eq!(parsed.table.headers, vec!["L", "C", "H"]);
        assert_eq!(parsed.table.rows.len(), 2);
        assert_eq!(parsed.table.rows[1][0].as_deref(), Some("MG"));
    }

    #[test]
    fn test_read_keeps_empty_fields_as_missing() {
        let parsed = read_delimited(b"A,B\n1,\n,2\n").unwrap();
        assert_eq!(parsed.table.rows[0], vec![Some("1".to_string()), None]);
        assert_eq!(parsed.table.rows[1], vec![None, Some("2".to_string())]);
    }

    #[test]
    fn test_read_keeps_leading_zeros_and_whitespace() {
        let parsed = read_delimited(b"H\n 00123 \n").unwrap();
        assert_eq!(parsed.table.rows[0][0].as_deref(), Some(" 00123 "));
    }

    #[test]
    fn test_read_rejects_empty_and_binary() {
        assert_eq!(read_delimited(b"").unwrap_err(), StrategyFailure::Empty);
        assert_eq!(read_delimited(b" \n\n").unwrap_err(), StrategyFailure::Empty);
        assert_eq!(
            read_delimited(b"PK\x03\x04\x00\x00junk").unwrap_err(),
            StrategyFailure::Binary
        );
        assert_eq!(read_delimited(b",,\n , \n").unwrap_err(), StrategyFailure::NoHeader);
    }

    #[test]
    fn test_read_rejects_control_characters_without_nul() {
        assert_eq!(
            read_delimited(b"\x89\xab\xcd\xef\x10\x20\x7f\xfe\xfdgarbage\x05\x06").unwrap_err(),
            StrategyFailure::Binary
        );
        let parsed = read_delimited(b"E\tNOME\r\n111\tAna\r\n").unwrap();
        assert_eq!(parsed.table.headers, vec!["E\tNOME".to_string()]);
    }
}
