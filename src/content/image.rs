use std::path::PathBuf;

/// Source shown in place of any image that cannot be loaded.
pub const FALLBACK_IMAGE: &str = "images/placeholder.jpg";

/// Decides whether an image source can be shown or must be replaced by
/// [`FALLBACK_IMAGE`].
///
/// - Empty source → fallback
/// - `http(s)` source → shown as-is, never fetched
/// - Local source with an assets directory configured → fallback when the
///   file is missing under that directory
/// - Local source without an assets directory → shown as-is
#[derive(Debug, Clone, Default)]
pub struct ImageResolver {
    assets_dir: Option<PathBuf>,
}

impl ImageResolver {
    pub fn new(assets_dir: Option<PathBuf>) -> Self {
        Self { assets_dir }
    }

    pub fn resolve<'a>(&self, src: &'a str) -> &'a str {
        let trimmed = src.trim();
        if trimmed.is_empty() {
            return FALLBACK_IMAGE;
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return src;
        }
        match &self.assets_dir {
            Some(dir) if !dir.join(trimmed.trim_start_matches('/')).is_file() => {
                tracing::trace!(src = %trimmed, "Image not found, using fallback");
                FALLBACK_IMAGE
            }
            _ => src,
        }
    }
}
