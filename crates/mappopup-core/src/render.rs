//! Popup rendering over a matrix of records

use std::path::Path;

use crate::config::PopupConfig;
use crate::error::{PopupError, Result};
use crate::frame::{DataFrame, Matrix};
use crate::row::{merge_with, ReservedFields, RowOptions};
use crate::template::{load_template, Template};

/// Renders one popup per record from a pristine template.
///
/// The template is never modified; each record starts from a fresh copy.
#[derive(Debug, Clone)]
pub struct PopupRenderer {
    template: Template,
    placeholder: String,
    options: RowOptions,
    reserved: ReservedFields,
}

impl PopupRenderer {
    /// Validate `config` against `template` and build a renderer.
    ///
    /// A template without the placeholder is rejected when
    /// `strict_placeholder` is set and logged as a warning otherwise.
    pub fn new(template: Template, config: &PopupConfig) -> Result<Self> {
        config.validate()?;

        match template.placeholder_count(&config.placeholder) {
            0 if config.strict_placeholder => {
                template.require_placeholder(&config.placeholder)?;
            }
            0 => tracing::warn!(
                "Template has no '{}' placeholder; popups will repeat the bare template",
                config.placeholder
            ),
            1 => {}
            n => tracing::warn!(
                "Template contains {} '{}' placeholders; every occurrence receives the rows",
                n,
                config.placeholder
            ),
        }

        Ok(Self {
            template,
            placeholder: config.placeholder.clone(),
            options: config.row_options(),
            reserved: config.reserved(),
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Render a single record.
    pub fn render_row<L, V>(&self, labels: &[L], values: &[V]) -> Result<String>
    where
        L: AsRef<str>,
        V: AsRef<str>,
    {
        let fragment = merge_with(labels, values, &self.options, &self.reserved)?;
        Ok(self.template.fill(&self.placeholder, &fragment))
    }

    /// Render every matrix row, in row order.
    ///
    /// Fails with `DimensionMismatch` when `labels` does not match the
    /// matrix width; no partial output is returned.
    pub fn render_all<L: AsRef<str>>(&self, matrix: &Matrix, labels: &[L]) -> Result<Vec<String>> {
        if labels.len() != matrix.n_cols() {
            return Err(PopupError::dimension(
                "labels vs. matrix columns",
                matrix.n_cols(),
                labels.len(),
            ));
        }

        tracing::debug!(
            "Rendering {} popups with {} fields each",
            matrix.n_rows(),
            matrix.n_cols()
        );

        matrix
            .rows()
            .map(|row| self.render_row(labels, row))
            .collect()
    }

    /// Stringify `frame` and render one popup per row, labelled by column name.
    pub fn render_frame(&self, frame: &DataFrame) -> Result<Vec<String>> {
        let matrix = frame.to_matrix()?;
        self.render_all(&matrix, frame.names())
    }
}

/// Render every matrix row with the default field classification and spacer.
pub fn render_all<L: AsRef<str>>(
    matrix: &Matrix,
    labels: &[L],
    template: &Template,
    include_index: bool,
) -> Result<Vec<String>> {
    let config = PopupConfig::with_row_index(include_index);
    PopupRenderer::new(template.clone(), &config)?.render_all(matrix, labels)
}

/// Load the template at `path` once and render one popup per frame row.
pub fn list_popup_templates(
    path: impl AsRef<Path>,
    frame: &DataFrame,
    config: &PopupConfig,
) -> Result<Vec<String>> {
    let template = load_template(path)?;
    PopupRenderer::new(template, config)?.render_frame(frame)
}
