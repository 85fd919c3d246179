/// Source folder scanning
///
/// Expected layout:
///
/// ```text
/// <source>/
/// ├── Bowls/
/// │   ├── Walnut Bowl/
/// │   │   ├── IMG_20240115.jpg
/// │   │   └── thumbnail.png
/// │   └── ...
/// └── Furniture/
///     └── ...
/// ```

use chrono::{DateTime, NaiveDate, Utc};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

use crate::error::SyncError;

/// Web-compatible image extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedImage {
    pub source: PathBuf,
    pub file_name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedProject {
    pub category_name: String,
    pub title: String,
    /// Oldest first
    pub images: Vec<ScannedImage>,
}

/// Convert text to a URL-friendly slug.
/// "Cutting Boards" -> "cutting-boards", "Mom's Chair!" -> "moms-chair"
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_dash = true;
        } else if c.is_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        }
    }

    slug
}

/// Lowercased extension if the file is a supported image
pub fn image_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Date an image was taken: file timestamp, else a YYYYMMDD run in the
/// name, else the epoch.
pub fn image_date(timestamp: Option<SystemTime>, file_name: &str) -> NaiveDate {
    if let Some(time) = timestamp {
        return DateTime::<Utc>::from(time).date_naive();
    }
    date_from_name(file_name).unwrap_or_default()
}

fn date_from_name(file_name: &str) -> Option<NaiveDate> {
    let bytes = file_name.as_bytes();
    bytes
        .windows(8)
        .enumerate()
        .filter(|(_, window)| window.iter().all(u8::is_ascii_digit))
        .find_map(|(start, _)| {
            NaiveDate::parse_from_str(&file_name[start..start + 8], "%Y%m%d").ok()
        })
}

/// Immediate sub-directories of `dir`, sorted by name
fn child_dirs(dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Supported images directly inside a project folder, oldest first
fn scan_images(project_dir: &Path) -> Result<Vec<ScannedImage>, SyncError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(project_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() || image_extension(entry.path()).is_none() {
            continue;
        }

        let metadata = entry.metadata()?;
        let timestamp = metadata.created().or_else(|_| metadata.modified()).ok();
        let file_name = file_name_of(entry.path());

        images.push(ScannedImage {
            date: image_date(timestamp, &file_name),
            source: entry.into_path(),
            file_name,
        });
    }

    sort_oldest_first(&mut images);
    Ok(images)
}

/// Stable: same-day images keep name order
fn sort_oldest_first(images: &mut [ScannedImage]) {
    images.sort_by_key(|image| image.date);
}

/// Walk `<source>/<category>/<project>/` and collect every project folder
pub fn scan_source(source: &Path) -> Result<Vec<ScannedProject>, SyncError> {
    if !source.is_dir() {
        return Err(SyncError::SourceMissing(source.to_path_buf()));
    }

    let mut projects = Vec::new();
    for category_dir in child_dirs(source)? {
        let category_name = file_name_of(&category_dir);

        for project_dir in child_dirs(&category_dir)? {
            projects.push(ScannedProject {
                category_name: category_name.clone(),
                title: file_name_of(&project_dir),
                images: scan_images(&project_dir)?,
            });
        }
    }

    Ok(projects)
}
