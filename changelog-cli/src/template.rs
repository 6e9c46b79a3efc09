//! Starter workbook generation
//!
//! Writes a workbook demonstrating the expected sheet layout: B1 holds
//! the lookup-code name, row 2 the column headers, rows 3+ the data.
//! Ships with pre-filled sample sheets for common lookup codes.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Sample rows: (code_value, code_description, code_value_mm)
type SampleRow = (&'static str, &'static str, &'static str);

const GENDER_ROWS: &[SampleRow] = &[
    ("Male", "Male Gender", "ကျား"),
    ("Female", "Female Gender", "မ"),
];

const RELATIONSHIP_ROWS: &[SampleRow] = &[
    ("Father", "Father of the client", "ဖခင်"),
    ("Mother", "Mother of the client", "မိခင်"),
    ("Spouse", "Spouse of the client", "အိမ်ထောင်ဖက်"),
    ("Son", "Son of the client", "သား"),
    ("Daughter", "Daughter of the client", "သမီး"),
];

const CLIENT_TYPE_ROWS: &[SampleRow] = &[
    ("Individual", "Individual client", "တစ်ဦးချင်း"),
    ("Group", "Group client", "အဖွဲ့"),
];

const CLIENT_CLASSIFICATION_ROWS: &[SampleRow] = &[
    ("Farmer", "Client working in agriculture", "လယ်သမား"),
    ("Trader", "Client running a trading business", "ကုန်သည်"),
    ("Employee", "Salaried client", "ဝန်ထမ်း"),
];

/// Write the template workbook to `path`
pub fn write_template(path: &Path) -> Result<()> {
    let mut workbook = build_template_workbook()?;
    workbook
        .save(path)
        .with_context(|| format!("Failed to save template workbook: {}", path.display()))?;
    Ok(())
}

/// Build the template workbook in memory
pub fn build_template_workbook() -> Result<Workbook> {
    let mut workbook = Workbook::new();

    create_template_sheet(&mut workbook)?;
    create_sample_sheet(&mut workbook, "Gender", GENDER_ROWS)?;
    create_sample_sheet(&mut workbook, "RELATIONSHIP", RELATIONSHIP_ROWS)?;
    create_sample_sheet(&mut workbook, "ClientType", CLIENT_TYPE_ROWS)?;
    create_sample_sheet(&mut workbook, "ClientClassification", CLIENT_CLASSIFICATION_ROWS)?;

    Ok(workbook)
}

/// Blank layout demonstration with placeholder values
fn create_template_sheet(workbook: &mut Workbook) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Template")?;

    let label_format = Format::new().set_bold();
    sheet.write_string_with_format(0, 0, "Code Name", &label_format)?;
    sheet.write_string(0, 1, "MyCodeName")?;
    write_header_row(sheet)?;
    sheet.write_string(2, 0, "Value1")?;
    sheet.write_string(2, 1, "Description of Value1")?;
    sheet.write_string(2, 2, "တန်ဖိုး၁")?;
    sheet.write_string(3, 0, "Value2")?;
    sheet.write_string(3, 1, "Description of Value2")?;
    sheet.write_string(3, 2, "တန်ဖိုး၂")?;
    sheet.autofit();

    Ok(())
}

/// One pre-filled, directly convertible sheet per sample code
fn create_sample_sheet(
    workbook: &mut Workbook,
    code_name: &str,
    rows: &[SampleRow],
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(code_name)?;
    sheet.write_string(0, 1, code_name)?;
    write_header_row(sheet)?;

    for (i, (value, description, value_mm)) in rows.iter().enumerate() {
        let row = i as u32 + 2;
        sheet.write_string(row, 0, *value)?;
        sheet.write_string(row, 1, *description)?;
        sheet.write_string(row, 2, *value_mm)?;
    }
    sheet.autofit();

    Ok(())
}

fn write_header_row(sheet: &mut Worksheet) -> Result<()> {
    let header_format = Format::new().set_bold();
    // Must match the headers the extractor expects
    let headers = ["code_value", "code_description", "code_value_mm"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(1, col as u16, *header, &header_format)?;
    }
    Ok(())
}
