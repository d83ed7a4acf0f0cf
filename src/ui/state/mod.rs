// SPDX-License-Identifier: MPL-2.0
//! UI state shared between components, kept apart from the main App struct.

pub mod scroll_lock;

pub use scroll_lock::{ScrollGuard, ScrollLock};
