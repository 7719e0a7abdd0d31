//! Records that no single source object asks for.
//!
//! - [`apportion`] picks which outdoor air coefficients survive
//! - [`ventilation`] writes zone ventilation records from them
//! - [`connections`] builds the equipment list and node lists of a zone

pub mod apportion;
pub mod connections;
pub mod ventilation;
