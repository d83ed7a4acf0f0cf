// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `ViewContext`, its `Message` type and, when it reports to
//! its parent, an `Event` returned from `update`.
//!
//! # Views
//!
//! - [`navbar`] - Top bar with the About, Projects and Contact links
//! - [`home`] - About and Contact sections
//! - [`projects`] - Project sections, owner of the lightbox
//! - [`gallery`] - Thumbnail grid of one project
//! - [`lightbox`] - Enlarged image overlay and its lifecycle
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Page scroll lock shared by overlays and the page body
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod home;
pub mod lightbox;
pub mod navbar;
pub mod projects;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
