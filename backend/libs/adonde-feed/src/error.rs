//! Feed error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("invalid cadence: {cadence} (must be at least 1)")]
    InvalidCadence { cadence: u32 },

    #[error("invalid page size: {page_size} (must be at least 1)")]
    InvalidPageSize { page_size: u32 },
}

pub type Result<T> = std::result::Result<T, FeedError>;
