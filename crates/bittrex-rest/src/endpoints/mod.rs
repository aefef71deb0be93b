//! API endpoint implementations

pub mod account;
pub mod market;
pub mod public;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use public::PublicEndpoints;

use crate::error::{RestError, RestResult};

/// Reject an empty or whitespace-only required argument
pub(crate) fn require<'v>(name: &str, value: &'v str) -> RestResult<&'v str> {
    if value.trim().is_empty() {
        return Err(RestError::InvalidArgument(format!("{} is required", name)));
    }
    Ok(value)
}

/// Treat an empty optional filter as absent
pub(crate) fn optional(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
