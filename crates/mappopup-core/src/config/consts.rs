//! Constants shared across the crate

/// Token marking where the row fragment is injected into a template
pub const DEFAULT_PLACEHOLDER: &str = "<%=pop%>";

/// Entity appended after label and value text
pub const DEFAULT_SPACER: &str = "&emsp;";

/// Fields rendered as coordinate rows instead of alternating rows
pub const RESERVED_FIELDS: [&str; 3] = ["Feature ID", "Longitude", "Latitude"];

/// Text emitted for a missing cell value
pub const MISSING_VALUE: &str = "NA";
