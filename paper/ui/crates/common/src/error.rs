use time::error::{ComponentRange, Format};

#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("unrecognized date: {0:?}")]
    Unrecognized(String),
    #[error("date out of range: {0}")]
    Range(#[from] ComponentRange),
    #[error("failed to format date: {0}")]
    Format(#[from] Format),
}
