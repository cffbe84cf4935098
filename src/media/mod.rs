// SPDX-License-Identifier: MPL-2.0
//! Image loading for the two comparison layers.

pub mod image;

// Re-export commonly used types
pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};

use std::path::Path;

pub mod extensions {
    /// Image file extensions accepted by the loader and the file picker.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Returns whether the path has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_image_detection_is_case_insensitive() {
        assert!(is_supported_image("photo.JPG"));
        assert!(is_supported_image("/tmp/diagram.svg"));
        assert!(!is_supported_image("clip.mp4"));
        assert!(!is_supported_image("README"));
    }
}
