use std::path::PathBuf;

use crate::config::AppConfig;

/// Join the deployment base path with a catalog asset path.
///
/// Paths starting with `/` are placed under `base_path` with exactly one
/// separator between the two. Anything else (e.g. an `https://` URL) is
/// returned unchanged.
pub fn resolve_image_url(base_path: &str, asset_path: &str) -> String {
    if asset_path.starts_with('/') {
        format!("{}{}", base_path.trim_end_matches('/'), asset_path)
    } else {
        asset_path.to_string()
    }
}

/// Where the viewer can find an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// File under the asset root
    Local(PathBuf),
    /// Hosted elsewhere; shown as a placeholder with its URL
    Remote(String),
    /// Should be under the asset root but is not there
    Missing(PathBuf),
}

impl ImageSource {
    pub fn local_path(&self) -> Option<&PathBuf> {
        match self {
            ImageSource::Local(path) => Some(path),
            _ => None,
        }
    }
}

/// Map a catalog asset path to something the viewer can display
pub fn locate_image(config: &AppConfig, asset_path: &str) -> ImageSource {
    let url = resolve_image_url(&config.base_path, asset_path);
    if url.starts_with("http://") || url.starts_with("https://") {
        return ImageSource::Remote(url);
    }

    let base = config.base_path.trim_end_matches('/');
    let relative = url.strip_prefix(base).unwrap_or(&url).trim_start_matches('/');
    let path = config.asset_root.join(relative);

    if path.is_file() {
        ImageSource::Local(path)
    } else {
        ImageSource::Missing(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_and_without_trailing_separator() {
        assert_eq!(resolve_image_url("/app/", "/img/a.jpg"), "/app/img/a.jpg");
        assert_eq!(resolve_image_url("/app", "/img/a.jpg"), "/app/img/a.jpg");
        assert_eq!(resolve_image_url("/", "/img/a.jpg"), "/img/a.jpg");
        assert_eq!(resolve_image_url("/app//", "/img/a.jpg"), "/app/img/a.jpg");
    }

    #[test]
    fn test_resolve_leaves_external_urls() {
        assert_eq!(
            resolve_image_url("/app/", "https://x/a.jpg"),
            "https://x/a.jpg"
        );
        assert_eq!(resolve_image_url("/app/", "img/a.jpg"), "img/a.jpg");
    }

    #[test]
    fn test_locate_local_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let image_dir = dir.path().join("images/bowls");
        std::fs::create_dir_all(&image_dir).unwrap();
        std::fs::write(image_dir.join("a.jpg"), b"jpeg").unwrap();

        let config = AppConfig {
            base_path: "/portfolio/".into(),
            asset_root: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let found = locate_image(&config, "/images/bowls/a.jpg");
        assert_eq!(found, ImageSource::Local(image_dir.join("a.jpg")));
        assert_eq!(found.local_path(), Some(&image_dir.join("a.jpg")));

        let missing = locate_image(&config, "/images/bowls/b.jpg");
        assert_eq!(missing, ImageSource::Missing(image_dir.join("b.jpg")));
        assert!(missing.local_path().is_none());
    }

    #[test]
    fn test_locate_remote() {
        let config = AppConfig::default();
        assert_eq!(
            locate_image(&config, "https://cdn.example.com/a.jpg"),
            ImageSource::Remote("https://cdn.example.com/a.jpg".into())
        );
        assert!(locate_image(&config, "https://cdn.example.com/a.jpg")
            .local_path()
            .is_none());
    }
}
