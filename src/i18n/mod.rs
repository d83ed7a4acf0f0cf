// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI labels are looked up in Fluent `.ftl` bundles embedded in the binary.
//! Portfolio content itself is not translated.
//!
//! # Locale Resolution
//!
//! 1. `--lang` CLI argument
//! 2. `[general] language` in `settings.toml`
//! 3. The operating system locale
//! 4. `en-US`

pub mod fluent;
