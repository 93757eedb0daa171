// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

use std::fmt;

/// Errors raised by page selection.
///
/// Selecting a page is the only partial operation of the viewer: the drawer
/// only offers valid ids, so an out-of-range id is a caller bug and the
/// transition is simply refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// The requested id is not in `1..=count`.
    OutOfRange { id: u32, count: usize },
}

impl PageError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PageError::OutOfRange { .. } => "error-page-out-of-range",
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::OutOfRange { id, count } => {
                write!(f, "page {id} is out of range (valid ids: 1..={count})")
            }
        }
    }
}

impl std::error::Error for PageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display_names_id_and_bounds() {
        let err = PageError::OutOfRange { id: 9, count: 4 };
        assert_eq!(err.to_string(), "page 9 is out of range (valid ids: 1..=4)");
    }

    #[test]
    fn out_of_range_i18n_key() {
        let err = PageError::OutOfRange { id: 0, count: 4 };
        assert_eq!(err.i18n_key(), "error-page-out-of-range");
    }
}
