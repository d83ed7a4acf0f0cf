// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: the profile, contact details, and project galleries
//! shown by the application.
//!
//! Content is fixed for the lifetime of the process. It is read once at
//! startup from a TOML file, or from the copy embedded in the binary when no
//! file is given.
//!
//! # Examples
//!
//! ```
//! use iced_folio::portfolio::Portfolio;
//!
//! let portfolio = Portfolio::embedded().expect("embedded content parses");
//! assert!(!portfolio.projects.is_empty());
//! ```

pub mod assets;

use crate::error::{ContentError, Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

const DEFAULT_CONTENT_FILE: &str = "portfolio.toml";

/// Opaque locator of a static image asset, usually a root-relative path such
/// as `/images/tech1.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Section background colour of a project, written as `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Accent {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Accent {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a CSS-style hex colour.
    pub fn parse(value: &str) -> std::result::Result<Self, ContentError> {
        let invalid = || ContentError::InvalidAccent(value.to_string());
        let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // Short form: each digit is doubled (#abc == #aabbcc).
            3 => Ok(Self::rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            _ => Err(invalid()),
        }
    }
}

impl Default for Accent {
    fn default() -> Self {
        Self::rgb(0xff, 0xff, 0xff)
    }
}

impl TryFrom<String> for Accent {
    type Error = ContentError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Landing section content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub background: Option<ImageRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    /// Text shown for the GitHub link; falls back to the URL.
    #[serde(default)]
    pub github_label: Option<String>,
}

/// One project section on the Projects view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub logo: Option<ImageRef>,
    /// Screenshots in display order.
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

/// Everything the portfolio displays.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Portfolio {
    #[serde(default = "default_projects_heading")]
    pub projects_heading: String,
    pub profile: Profile,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub projects: Vec<Project>,
}

fn default_projects_heading() -> String {
    "Projects".to_string()
}

impl Portfolio {
    /// Parses portfolio content from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::Content(ContentError::Malformed(err.to_string())))
    }

    /// Loads portfolio content from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Returns the content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = ContentAsset::get(DEFAULT_CONTENT_FILE).ok_or(ContentError::MissingDefault)?;
        Self::from_toml_str(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Loads content from `path` when given, otherwise the embedded copy.
    ///
    /// A file that cannot be read or parsed is logged and replaced by the
    /// embedded content so that startup never fails on content.
    #[must_use]
    pub fn load_or_embedded(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::load_from_path(path) {
                Ok(portfolio) => {
                    log::info!("Loaded portfolio content from {}", path.display());
                    return portfolio;
                }
                Err(err) => {
                    log::warn!(
                        "Failed to load portfolio content from {}: {err}; using built-in content",
                        path.display()
                    );
                }
            }
        }

        Self::embedded().unwrap_or_else(|err| {
            log::error!("Built-in portfolio content is unusable: {err}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn accent_parses_long_and_short_forms() {
        assert_eq!(Accent::parse("#2c454c"), Ok(Accent::rgb(0x2c, 0x45, 0x4c)));
        assert_eq!(Accent::parse("#0000FF"), Ok(Accent::rgb(0, 0, 0xff)));
        assert_eq!(Accent::parse("#aaa"), Ok(Accent::rgb(0xaa, 0xaa, 0xaa)));
    }

    #[test]
    fn accent_rejects_garbage() {
        for value in ["2c454c", "#12345", "#ggg", "", "#"] {
            assert!(
                matches!(Accent::parse(value), Err(ContentError::InvalidAccent(_))),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn embedded_content_lists_three_projects() {
        let portfolio = Portfolio::embedded().expect("embedded content parses");
        assert_eq!(portfolio.profile.name, "Erronn John Madelo");
        assert_eq!(portfolio.projects_heading, "Project Contributions");

        let sizes: Vec<usize> = portfolio.projects.iter().map(|p| p.images.len()).collect();
        assert_eq!(sizes, vec![6, 5, 5]);

        let tech = &portfolio.projects[1];
        assert_eq!(tech.accent, Accent::rgb(0, 0, 0xff));
        assert_eq!(tech.images[0], ImageRef::from("/images/tech1.png"));
    }

    #[test]
    fn minimal_content_fills_defaults() {
        let portfolio = Portfolio::from_toml_str(
            r#"
            [profile]
            name = "Ada"
            greeting = "Hi"
            "#,
        )
        .expect("minimal content parses");

        assert_eq!(portfolio.projects_heading, "Projects");
        assert!(portfolio.projects.is_empty());
        assert_eq!(portfolio.contact, Contact::default());
        assert!(portfolio.profile.background.is_none());
    }

    #[test]
    fn invalid_accent_is_a_content_error() {
        let result = Portfolio::from_toml_str(
            r#"
            [profile]
            name = "Ada"
            greeting = "Hi"

            [[projects]]
            name = "Broken"
            accent = "blue"
            "#,
        );
        assert!(matches!(result, Err(Error::Content(ContentError::Malformed(_)))));
    }

    #[test]
    fn unreadable_file_falls_back_to_embedded() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("portfolio.toml");
        let mut file = fs::File::create(&path).expect("create file");
        file.write_all(b"this is = = not toml").expect("write");

        let portfolio = Portfolio::load_or_embedded(Some(&path));
        assert_eq!(portfolio, Portfolio::embedded().expect("embedded"));
    }

    #[test]
    fn custom_file_is_used_when_valid() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("portfolio.toml");
        fs::write(
            &path,
            r##"
            [profile]
            name = "Grace"
            greeting = "Hello"

            [[projects]]
            name = "Compiler"
            accent = "#123"
            images = ["/a.png", "/b.png"]
            "##,
        )
        .expect("write");

        let portfolio = Portfolio::load_or_embedded(Some(&path));
        assert_eq!(portfolio.profile.name, "Grace");
        assert_eq!(portfolio.projects[0].images.len(), 2);
        assert_eq!(portfolio.projects[0].accent, Accent::rgb(0x11, 0x22, 0x33));
    }
}
