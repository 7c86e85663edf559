//! Well-known status names.
//!
//! Every new report starts in the "Enviado" status. The row is found by a
//! case-insensitive name lookup rather than a fixed id, so reseeded or
//! reordered status tables keep working.

/// Name fragment identifying the initial status of every new report.
pub const INITIAL_STATUS_NAME: &str = "Enviado";
