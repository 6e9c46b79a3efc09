//! Core types for the changelog pipeline

/// One extracted lookup-code row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecord {
    pub code_value: String,
    pub code_description: String,
    /// Myanmar-language value, empty when the cell is blank
    pub code_value_mm: String,
}

/// A fully extracted sheet: the lookup-code name and its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    pub code_name: String,
    /// Never empty; a sheet without data rows is skipped instead
    pub records: Vec<CodeRecord>,
}

/// Why a sheet was left out of the generated changelog
///
/// Skips are reported, not raised; a skipped sheet simply contributes
/// nothing to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than three rows (code name, headers, at least one data row)
    NotEnoughRows,
    /// Cell B1 is empty or absent
    MissingCodeName,
    /// One of the expected column headers never appears on row 2
    MissingHeader(&'static str),
    /// Every data row was blank
    NoDataRows,
    /// The requested sheet name is not in the workbook
    SheetNotFound,
    /// The sheet exists but its cells could not be read
    Unreadable(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotEnoughRows => write!(f, "not enough rows"),
            SkipReason::MissingCodeName => write!(f, "CodeName not found"),
            SkipReason::MissingHeader(header) => {
                write!(f, "required header '{}' not found", header)
            }
            SkipReason::NoDataRows => write!(f, "no data rows found"),
            SkipReason::SheetNotFound => write!(f, "sheet not found in workbook"),
            SkipReason::Unreadable(e) => write!(f, "sheet could not be read: {}", e),
        }
    }
}
