//! Single table-row rendering

use std::fmt::Write;

use crate::config::consts::DEFAULT_SPACER;

/// Visual style of one popup table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowVariant {
    /// Even positions: bold label, no row class
    Primary,
    /// Odd positions: bold label, `class='alt'`
    Alternate,
    /// Identifier/coordinate fields: plain label, `class='coord'`, never indexed
    Coordinate,
}

impl RowVariant {
    /// CSS class placed on the `<tr>` element
    pub fn class(self) -> Option<&'static str> {
        match self {
            RowVariant::Primary => None,
            RowVariant::Alternate => Some("alt"),
            RowVariant::Coordinate => Some("coord"),
        }
    }
}

/// Options shared by every row of a fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOptions {
    /// Print the row position in the leading cell
    pub include_index: bool,
    /// Entity appended after label and value text
    pub spacer: String,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            include_index: false,
            spacer: DEFAULT_SPACER.to_string(),
        }
    }
}

impl RowOptions {
    pub fn with_index(include_index: bool) -> Self {
        Self {
            include_index,
            ..Self::default()
        }
    }
}

/// Format one label/value pair as a `<tr>` fragment.
///
/// Values are written exactly as given; no escaping or numeric reformatting
/// takes place.
pub fn format_row(
    variant: RowVariant,
    index: usize,
    label: &str,
    value: &str,
    options: &RowOptions,
) -> String {
    let mut out = String::with_capacity(64 + label.len() + value.len());
    write_row(&mut out, variant, index, label, value, options);
    out
}

/// Append a formatted row to `out`.
pub(crate) fn write_row(
    out: &mut String,
    variant: RowVariant,
    index: usize,
    label: &str,
    value: &str,
    options: &RowOptions,
) {
    match variant.class() {
        Some(class) => {
            let _ = write!(out, "<tr class='{}'>", class);
        }
        None => out.push_str("<tr>"),
    }

    if options.include_index && variant != RowVariant::Coordinate {
        let _ = write!(out, "<td>{}</td>", index);
    } else {
        out.push_str("<td></td>");
    }

    if variant == RowVariant::Coordinate {
        let _ = write!(out, "<td>{}</td>", label);
    } else {
        let _ = write!(out, "<td><b>{}{}</b></td>", label, options.spacer);
    }

    let _ = write!(out, "<td align='right'>{}{}</td></tr>", value, options.spacer);
}
