// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod scroll_locked;

pub use scroll_locked::{scroll_locked, ScrollLocked};
