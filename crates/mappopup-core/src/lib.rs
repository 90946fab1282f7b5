//! Map popup content generation
//!
//! Turns tabular attribute data into HTML table fragments injected into a
//! popup template, and encodes rows as JSON-array-shaped strings for
//! client-side rendering.
//!
//! ```
//! use mappopup_core::{render_all, Matrix, Template};
//!
//! let template = Template::new("<table><%=pop%></table>");
//! let matrix = Matrix::from_rows(vec![vec!["Berlin", "13.4"]]).unwrap();
//! let popups = render_all(&matrix, &["name", "Longitude"], &template, false).unwrap();
//! assert_eq!(popups.len(), 1);
//! assert!(popups[0].contains("<tr class='coord'>"));
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod frame;
pub mod json;
pub mod render;
pub mod replace;
pub mod row;
pub mod template;

// Re-export commonly used types
pub use config::PopupConfig;
pub use error::{PopupError, Result};
pub use frame::{Column, DataFrame, Matrix, Stringify};
pub use json::{encode, encode_matrix, encode_strict};
pub use render::{list_popup_templates, render_all, PopupRenderer};
pub use replace::replace;
pub use row::{merge, ReservedFields, RowOptions, RowVariant};
pub use template::{load_template, Template, TemplateError};
