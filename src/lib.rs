// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio built with the Iced GUI framework.
//!
//! It shows an About and Contact landing view and a Projects view whose image
//! galleries open in a lightbox, with Fluent localization and a small
//! `settings.toml` for user preferences.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod portfolio;
pub mod ui;
