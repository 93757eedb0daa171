// SPDX-License-Identifier: MPL-2.0
//! Viewer domain types.
//!
//! Everything the screen does is expressed as a pure transition over
//! [`ViewerState`]. The rendering layer reads the snapshot after every
//! transition and redraws.

pub mod newtypes;
pub mod page;
pub mod state;

// Re-export commonly used types
pub use newtypes::{scale_bounds, Offset, ZoomLevel};
pub use page::{Page, PageId, Pages};
pub use state::{ViewerEvent, ViewerState};
