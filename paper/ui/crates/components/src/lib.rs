pub mod datetime;
pub mod language;
