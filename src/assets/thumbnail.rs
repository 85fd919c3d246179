use image::{imageops::FilterType, DynamicImage};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ThumbnailError;

/// Size of generated thumbnails (square bound)
const THUMBNAIL_SIZE: u32 = 256;

/// Get the thumbnail cache directory
/// Returns ~/.cache/woodshop/thumbnails on Linux
pub fn thumbnail_cache_dir() -> Option<PathBuf> {
    let mut path = dirs_next::cache_dir().or_else(dirs_next::home_dir)?;
    path.push("woodshop");
    path.push("thumbnails");
    Some(path)
}

/// Cache file name for a catalog asset path
/// "/images/bowls/a.jpg" -> "images_bowls_a.jpg.jpg"
pub fn cache_file_name(asset_path: &str) -> String {
    let key: String = asset_path
        .trim_start_matches('/')
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();
    format!("{key}.jpg")
}

/// Generate (or reuse) a thumbnail for a local image.
/// Runs on a blocking thread; returns None if the image could not be scaled.
pub async fn generate_thumbnail(source: PathBuf, target: PathBuf) -> Option<PathBuf> {
    let result = tokio::task::spawn_blocking(move || generate_thumbnail_blocking(&source, &target))
        .await
        .map_err(|e| ThumbnailError::Join(e.to_string()))
        .and_then(|result| result);

    match result {
        Ok(path) => Some(path),
        Err(err) => {
            warn!("❌ Thumbnail generation failed: {}", err);
            None
        }
    }
}

/// Blocking version of thumbnail generation
fn generate_thumbnail_blocking(source: &Path, target: &Path) -> Result<PathBuf, ThumbnailError> {
    if is_fresh(source, target) {
        debug!("Reusing cached thumbnail {}", target.display());
        return Ok(target.to_path_buf());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| ThumbnailError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let img = image::open(source)?;

    // JPEG has no alpha channel, so flatten to RGB before saving
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);
    let thumbnail = DynamicImage::ImageRgb8(thumbnail.to_rgb8());
    thumbnail.save(target)?;

    debug!("📸 Generated thumbnail: {}", target.display());
    Ok(target.to_path_buf())
}

/// A cached thumbnail is reused when it is at least as new as its source
fn is_fresh(source: &Path, target: &Path) -> bool {
    let modified = |path: &Path| fs::metadata(path).and_then(|m| m.modified()).ok();
    match (modified(source), modified(target)) {
        (Some(source_time), Some(target_time)) => target_time >= source_time,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_cache_file_name_is_flat() {
        assert_eq!(
            cache_file_name("/images/bowls/walnut-bowl/1.jpg"),
            "images_bowls_walnut-bowl_1.jpg.jpg"
        );
        assert_eq!(cache_file_name("/a b/c.png"), "a_b_c.png.jpg");
    }

    #[tokio::test]
    async fn test_generate_scales_down() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("board.png");
        RgbaImage::from_pixel(1024, 512, Rgba([120, 80, 40, 200]))
            .save(&source)
            .unwrap();

        let target = dir.path().join("cache").join(cache_file_name("/board.png"));
        let path = generate_thumbnail(source, target.clone()).await.unwrap();
        assert_eq!(path, target);

        let thumb = image::open(&path).unwrap();
        assert_eq!(thumb.width(), 256);
        assert_eq!(thumb.height(), 128);
    }

    #[tokio::test]
    async fn test_generate_fails_for_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("notes.jpg");
        std::fs::write(&source, b"not really a jpeg").unwrap();

        let target = dir.path().join("thumb.jpg");
        assert!(generate_thumbnail(source, target).await.is_none());
    }
}
