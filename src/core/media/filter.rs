//! Key filtering and labels.

use crate::core::constants::{DEFAULT_ALT, IMAGE_EXTENSIONS};

/// Whether `key` names a displayable raster image.
///
/// Folder placeholders (trailing `/`) and anything without an allowed
/// extension are rejected. The extension match ignores case.
pub fn is_image_key(key: &str) -> bool {
    if key.is_empty() || key.ends_with('/') {
        return false;
    }

    match key.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
        None => false,
    }
}

/// Display label for `key`: the last path segment up to its first `.`.
///
/// `carousel/beach.day.jpg` → `beach`; `.hidden.png` → `Image`.
pub fn alt_label(key: &str) -> String {
    let name = key.rsplit('/').next().unwrap_or(key);
    let stem = name.split('.').next().unwrap_or("");
    if stem.is_empty() {
        DEFAULT_ALT.to_string()
    } else {
        stem.to_string()
    }
}

/// Keep image keys, preserving order.
pub fn image_keys<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    keys.into_iter().filter(|k| is_image_key(k)).collect()
}
