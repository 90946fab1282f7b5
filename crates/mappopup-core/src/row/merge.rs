//! Fragment assembly from parallel label/value sequences

use std::collections::BTreeSet;

use super::format::{write_row, RowOptions, RowVariant};
use crate::config::consts::RESERVED_FIELDS;
use crate::error::{PopupError, Result};

/// Labels that are rendered as coordinate rows regardless of position.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedFields {
    names: BTreeSet<String>,
}

impl Default for ReservedFields {
    fn default() -> Self {
        Self::new(RESERVED_FIELDS.iter().copied())
    }
}

impl ReservedFields {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// A set that reserves nothing; every field alternates.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.names.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Pick the row style for the field at `index`.
pub fn select_variant(label: &str, index: usize, reserved: &ReservedFields) -> RowVariant {
    if reserved.contains(label) {
        RowVariant::Coordinate
    } else if index % 2 == 0 {
        RowVariant::Primary
    } else {
        RowVariant::Alternate
    }
}

/// Build the fragment for one record using the default reserved fields and spacer.
pub fn merge<L, V>(labels: &[L], values: &[V], include_index: bool) -> Result<String>
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    merge_with(
        labels,
        values,
        &RowOptions::with_index(include_index),
        &ReservedFields::default(),
    )
}

/// Build the fragment for one record.
///
/// One `<tr>` is emitted per label, in input order. Fails with
/// `DimensionMismatch` when the sequences differ in length.
pub fn merge_with<L, V>(
    labels: &[L],
    values: &[V],
    options: &RowOptions,
    reserved: &ReservedFields,
) -> Result<String>
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    if labels.len() != values.len() {
        return Err(PopupError::dimension(
            "labels vs. values",
            labels.len(),
            values.len(),
        ));
    }

    let mut fragment = String::new();
    for (i, (label, value)) in labels.iter().zip(values).enumerate() {
        let label = label.as_ref();
        let variant = select_variant(label, i, reserved);
        write_row(&mut fragment, variant, i, label, value.as_ref(), options);
    }

    Ok(fragment)
}
