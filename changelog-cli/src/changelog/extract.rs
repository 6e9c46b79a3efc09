//! Sheet validation and code-record extraction
//!
//! A convertible sheet has the lookup-code name in cell B1, the column
//! headers on row 2 (in any column order), and one code row per line
//! from row 3 on. Each validation failure maps to a distinct
//! [`SkipReason`].

use calamine::{Data, Range};

use super::types::{CodeRecord, CodeTable, SkipReason};

/// Expected header names on the second row
mod headers {
    pub const CODE_VALUE: &str = "code_value";
    pub const CODE_DESCRIPTION: &str = "code_description";
    pub const CODE_VALUE_MM: &str = "code_value_mm";
}

/// Column indices resolved from the header row
struct HeaderColumns {
    code_value: u32,
    code_description: u32,
    code_value_mm: u32,
}

/// Validate a sheet and extract its code records.
///
/// Returns the code name from B1 together with the ordered records, or
/// the reason the sheet must be skipped. All-or-nothing: a sheet either
/// yields every surviving row or nothing at all.
pub fn extract_code_table(range: &Range<Data>) -> Result<CodeTable, SkipReason> {
    let Some(end) = range.end() else {
        return Err(SkipReason::NotEnoughRows);
    };
    if end.0 < 2 {
        return Err(SkipReason::NotEnoughRows);
    }

    let code_name = cell_string(range, 0, 1);
    let code_name = code_name.trim();
    if code_name.is_empty() {
        return Err(SkipReason::MissingCodeName);
    }

    let columns = resolve_header_columns(range, end.1)?;

    let mut records = Vec::new();
    for row in 2..=end.0 {
        if row_is_blank(range, row, end.1) {
            continue;
        }
        records.push(CodeRecord {
            code_value: cell_string(range, row, columns.code_value),
            code_description: cell_string(range, row, columns.code_description),
            code_value_mm: cell_string(range, row, columns.code_value_mm),
        });
    }

    if records.is_empty() {
        return Err(SkipReason::NoDataRows);
    }

    Ok(CodeTable {
        code_name: code_name.to_string(),
        records,
    })
}

/// Scan the header row left to right; the first occurrence of each
/// expected name wins, duplicates and unknown headers are ignored
fn resolve_header_columns(
    range: &Range<Data>,
    last_col: u32,
) -> Result<HeaderColumns, SkipReason> {
    let mut code_value = None;
    let mut code_description = None;
    let mut code_value_mm = None;

    for col in 0..=last_col {
        let text = cell_string(range, 1, col);
        match text.trim() {
            headers::CODE_VALUE if code_value.is_none() => code_value = Some(col),
            headers::CODE_DESCRIPTION if code_description.is_none() => {
                code_description = Some(col)
            }
            headers::CODE_VALUE_MM if code_value_mm.is_none() => code_value_mm = Some(col),
            _ => {}
        }
    }

    Ok(HeaderColumns {
        code_value: code_value.ok_or(SkipReason::MissingHeader(headers::CODE_VALUE))?,
        code_description: code_description
            .ok_or(SkipReason::MissingHeader(headers::CODE_DESCRIPTION))?,
        code_value_mm: code_value_mm.ok_or(SkipReason::MissingHeader(headers::CODE_VALUE_MM))?,
    })
}

fn row_is_blank(range: &Range<Data>, row: u32, last_col: u32) -> bool {
    (0..=last_col).all(|col| cell_string(range, row, col).trim().is_empty())
}

fn cell_string(range: &Range<Data>, row: u32, col: u32) -> String {
    range
        .get_value((row, col))
        .map(|cell| match cell {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                // Whole-number floats print without the fraction
                if f.fract() == 0.0 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Data::Bool(b) => b.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[&[&str]]) -> Range<Data> {
        let height = rows.len().max(1) as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(1).max(1) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    range.set_value((r as u32, c as u32), Data::String((*value).to_string()));
                }
            }
        }
        range
    }

    const HEADERS: &[&str] = &["code_value", "code_description", "code_value_mm"];

    #[test]
    fn test_minimal_sheet_extracts() {
        let range = sheet(&[
            &["", "Gender"],
            HEADERS,
            &["Male", "Male Gender", "ကျား"],
        ]);
        let table = extract_code_table(&range).unwrap();
        assert_eq!(table.code_name, "Gender");
        assert_eq!(
            table.records,
            vec![CodeRecord {
                code_value: "Male".to_string(),
                code_description: "Male Gender".to_string(),
                code_value_mm: "ကျား".to_string(),
            }]
        );
    }

    #[test]
    fn test_too_few_rows() {
        let range = sheet(&[&["", "Gender"], HEADERS]);
        assert_eq!(extract_code_table(&range), Err(SkipReason::NotEnoughRows));
    }

    #[test]
    fn test_missing_code_name() {
        let range = sheet(&[&[""], HEADERS, &["Male", "Male Gender", ""]]);
        assert_eq!(extract_code_table(&range), Err(SkipReason::MissingCodeName));
    }

    #[test]
    fn test_whitespace_code_name_is_missing() {
        let range = sheet(&[&["", "   "], HEADERS, &["Male", "Male Gender", ""]]);
        assert_eq!(extract_code_table(&range), Err(SkipReason::MissingCodeName));
    }

    #[test]
    fn test_missing_header_names_the_header() {
        let range = sheet(&[
            &["", "Gender"],
            &["code_value", "code_description"],
            &["Male", "Male Gender"],
        ]);
        assert_eq!(
            extract_code_table(&range),
            Err(SkipReason::MissingHeader("code_value_mm"))
        );
    }

    #[test]
    fn test_header_order_does_not_matter() {
        let range = sheet(&[
            &["", "Gender"],
            &["code_description", "code_value_mm", "code_value"],
            &["Male Gender", "ကျား", "Male"],
        ]);
        let table = extract_code_table(&range).unwrap();
        assert_eq!(table.records[0].code_value, "Male");
        assert_eq!(table.records[0].code_description, "Male Gender");
        assert_eq!(table.records[0].code_value_mm, "ကျား");
    }

    #[test]
    fn test_duplicate_header_first_occurrence_wins() {
        let range = sheet(&[
            &["", "Gender"],
            &["code_value", "code_description", "code_value_mm", "code_value"],
            &["first", "desc", "mm", "second"],
        ]);
        let table = extract_code_table(&range).unwrap();
        assert_eq!(table.records[0].code_value, "first");
    }

    #[test]
    fn test_unknown_headers_are_ignored() {
        let range = sheet(&[
            &["", "Gender"],
            &["id", "code_value", "code_description", "code_value_mm"],
            &["7", "Male", "Male Gender", "ကျား"],
        ]);
        let table = extract_code_table(&range).unwrap();
        assert_eq!(table.records[0].code_value, "Male");
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let range = sheet(&[
            &["", "Gender"],
            HEADERS,
            &["a", "A", ""],
            &["b", "B", ""],
            &["", "", ""],
            &["c", "C", ""],
            &["d", "D", ""],
        ]);
        let table = extract_code_table(&range).unwrap();
        assert_eq!(table.records.len(), 4);
        assert_eq!(table.records[2].code_value, "c");
    }

    #[test]
    fn test_partially_filled_row_coerces_missing_cells() {
        let range = sheet(&[&["", "Gender"], HEADERS, &["Male"]]);
        let table = extract_code_table(&range).unwrap();
        assert_eq!(table.records[0].code_value, "Male");
        assert_eq!(table.records[0].code_description, "");
        assert_eq!(table.records[0].code_value_mm, "");
    }

    #[test]
    fn test_all_rows_blank_is_a_skip() {
        let range = sheet(&[&["", "Gender"], HEADERS, &["", "", ""]]);
        assert_eq!(extract_code_table(&range), Err(SkipReason::NoDataRows));
    }

    #[test]
    fn test_numeric_cells_coerce_to_strings() {
        let mut range = Range::new((0, 0), (2, 2));
        range.set_value((0, 1), Data::String("Priority".to_string()));
        range.set_value((1, 0), Data::String("code_value".to_string()));
        range.set_value((1, 1), Data::String("code_description".to_string()));
        range.set_value((1, 2), Data::String("code_value_mm".to_string()));
        range.set_value((2, 0), Data::Float(1.0));
        range.set_value((2, 1), Data::Float(2.5));
        range.set_value((2, 2), Data::Bool(true));
        let table = extract_code_table(&range).unwrap();
        assert_eq!(table.records[0].code_value, "1");
        assert_eq!(table.records[0].code_description, "2.5");
        assert_eq!(table.records[0].code_value_mm, "true");
    }
}
