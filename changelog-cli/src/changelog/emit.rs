//! Changeset rendering for extracted code tables

use quick_xml::escape::escape;

use super::types::CodeTable;

/// Table receiving the generated inserts
const TARGET_TABLE: &str = "m_code_value";
/// Lookup table resolving code names to ids
const LOOKUP_TABLE: &str = "m_code";
/// Name column of the lookup table
const LOOKUP_NAME_COLUMN: &str = "code_name";
const CHANGESET_ID_PREFIX: &str = "001_insert_";

/// Render one `<changeSet>` fragment for a code table.
///
/// Pure rendering, no failure modes. Every interpolated value is
/// XML-escaped. The changeset id is derived from the lowercased code
/// name, so two tables sharing a code name produce colliding ids.
pub fn render_changeset(table: &CodeTable, author: &str) -> String {
    let code_name = escape(table.code_name.as_str());
    let lowered = table.code_name.to_lowercase();
    let author = escape(author);

    let mut out = String::new();
    out.push_str(&format!("\n    <!-- Insert {} Data -->\n", code_name));
    out.push_str(&format!(
        "    <changeSet id=\"{}{}_data\" author=\"{}\">\n",
        CHANGESET_ID_PREFIX,
        escape(lowered.as_str()),
        author
    ));
    for record in &table.records {
        out.push_str(&format!(
            "        <insert tableName=\"{}\">\n",
            TARGET_TABLE
        ));
        out.push_str(&format!(
            "            <column name=\"code_id\" valueComputed=\"(SELECT id FROM {} WHERE {} = '{}')\"/>\n",
            LOOKUP_TABLE, LOOKUP_NAME_COLUMN, code_name
        ));
        out.push_str(&format!(
            "            <column name=\"code_value\" value=\"{}\"/>\n",
            escape(record.code_value.as_str())
        ));
        out.push_str(&format!(
            "            <column name=\"code_description\" value=\"{}\"/>\n",
            escape(record.code_description.as_str())
        ));
        out.push_str(&format!(
            "            <column name=\"code_value_mm\" value=\"{}\"/>\n",
            escape(record.code_value_mm.as_str())
        ));
        out.push_str("        </insert>\n");
    }
    out.push_str("    </changeSet>\n");
    out
}
