//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use serde::Serialize;

/// One value with its spelled-out forms.
#[derive(Debug, Serialize)]
pub struct NumeralRow {
    /// The value being spelled.
    pub value: i64,
    /// Cardinal numeral.
    pub cardinal: String,
    /// Ordinal numeral, absent when the value does not fit 32 bits.
    pub ordinal: Option<String>,
    /// Agreement class label of the value as a count.
    pub agreement: &'static str,
}

/// Format numeral rows as a table.
pub fn format_numeral_table(rows: &[NumeralRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Value", "Cardinal", "Ordinal", "Agreement"]);

    for row in rows {
        table.add_row(vec![
            row.value.to_string(),
            row.cardinal.clone(),
            row.ordinal.clone().unwrap_or_default(),
            row.agreement.to_string(),
        ]);
    }

    table
}
