// SPDX-License-Identifier: MPL-2.0
//! Resolution of [`ImageRef`] locators to files on disk.
//!
//! Image references are treated as opaque root-relative paths. They are joined
//! onto an asset root; nothing checks that the file exists, a missing image
//! simply renders empty.

use super::ImageRef;
use std::path::{Path, PathBuf};

/// Asset root used when nothing else is configured.
pub const DEFAULT_ASSET_ROOT: &str = "public";

/// Picks the directory image references are resolved against.
///
/// # Resolution Order
///
/// 1. `cli` - the `--assets` argument
/// 2. `configured` - `[content] asset_root` from `settings.toml`
/// 3. the directory containing the content file, when one was given
/// 4. [`DEFAULT_ASSET_ROOT`] relative to the working directory
#[must_use]
pub fn resolve_root(
    cli: Option<PathBuf>,
    configured: Option<PathBuf>,
    content_file: Option<&Path>,
) -> PathBuf {
    cli.or(configured)
        .or_else(|| {
            content_file
                .and_then(Path::parent)
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(Path::to_path_buf)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT))
}

/// Maps an image reference onto a path below `root`.
#[must_use]
pub fn resolve(root: &Path, image: &ImageRef) -> PathBuf {
    root.join(image.as_str().trim_start_matches('/'))
}
