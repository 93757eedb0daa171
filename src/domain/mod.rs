// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`PageError`](error::PageError))
//! - [`viewer`]: Pages and the viewer state machine
//!   ([`Page`](viewer::Page), [`Pages`](viewer::Pages),
//!   [`ViewerState`](viewer::ViewerState), [`ViewerEvent`](viewer::ViewerEvent))

pub mod error;
pub mod viewer;
