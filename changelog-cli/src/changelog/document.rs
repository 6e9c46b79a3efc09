//! Workbook decoding and changelog document assembly

use std::io::Cursor;

use calamine::{Reader, open_workbook_auto_from_rs};

use super::emit::render_changeset;
use super::extract::extract_code_table;
use super::types::SkipReason;

/// Changeset author used when neither the caller nor the config file
/// provides one
pub const DEFAULT_AUTHOR: &str = "thant htoo aung";

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<databaseChangeLog xmlns="http://www.liquibase.org/xml/ns/dbchangelog"
                   xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                   xsi:schemaLocation="http://www.liquibase.org/xml/ns/dbchangelog
                   https://www.liquibase.org/xml/ns/dbchangelog/dbchangelog-4.4.xsd">
"#;
const XML_FOOTER: &str = "\n</databaseChangeLog>\n";

/// Options for a single conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Author recorded on every generated changeset
    pub author: String,
    /// Sheets to process, in order; empty means every sheet in workbook
    /// order
    pub sheets: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            sheets: Vec::new(),
        }
    }
}

/// Result of a successful conversion
#[derive(Debug)]
pub struct Conversion {
    /// The assembled changelog document
    pub xml: String,
    /// Sheets that contributed a changeset, in request order
    pub processed_sheets: Vec<String>,
}

/// Fatal conversion failures
#[derive(Debug)]
pub enum ConvertError {
    /// The input bytes are not a recognizable spreadsheet container
    Decode(calamine::Error),
    /// Every requested sheet failed validation
    NoValidSheets,
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::Decode(e) => write!(f, "failed to decode workbook: {}", e),
            ConvertError::NoValidSheets => write!(f, "no sheet passed validation"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Decode(e) => Some(e),
            ConvertError::NoValidSheets => None,
        }
    }
}

/// Convert workbook bytes into a Liquibase changelog document.
///
/// Each requested sheet is validated and rendered independently; sheets
/// that fail validation are logged and skipped without affecting the
/// rest. The run only fails when the bytes do not decode at all or when
/// no sheet survives.
pub fn convert(bytes: &[u8], options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(ConvertError::Decode)?;

    let available = workbook.sheet_names();
    let requested = if options.sheets.is_empty() {
        available.clone()
    } else {
        options.sheets.clone()
    };

    let mut xml = String::from(XML_HEADER);
    let mut processed_sheets = Vec::new();

    for name in &requested {
        if !available.contains(name) {
            log::warn!("skipping sheet '{}': {}", name, SkipReason::SheetNotFound);
            continue;
        }
        let range = match workbook.worksheet_range(name) {
            Ok(range) => range,
            Err(e) => {
                log::warn!(
                    "skipping sheet '{}': {}",
                    name,
                    SkipReason::Unreadable(e.to_string())
                );
                continue;
            }
        };
        match extract_code_table(&range) {
            Ok(table) => {
                log::info!(
                    "sheet '{}': {} records for code '{}'",
                    name,
                    table.records.len(),
                    table.code_name
                );
                xml.push_str(&render_changeset(&table, &options.author));
                processed_sheets.push(name.clone());
            }
            Err(reason) => log::warn!("skipping sheet '{}': {}", name, reason),
        }
    }

    if processed_sheets.is_empty() {
        return Err(ConvertError::NoValidSheets);
    }

    xml.push_str(XML_FOOTER);
    Ok(Conversion {
        xml,
        processed_sheets,
    })
}
