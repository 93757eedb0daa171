// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the viewer chrome.

pub mod button;
pub mod container;
