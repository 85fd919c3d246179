/// Catalog sync
///
/// Rebuilds `projects.json` and the public `images/` tree from a folder of
/// photos organised as `<Category>/<Project>/<images>`. The sync is
/// incremental: unchanged images are not copied again, and images that no
/// longer exist in the source are removed from the public tree.

pub mod files;
pub mod scan;

use log::{info, warn};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SyncError;
use crate::state::data::{ProjectDate, ProjectRecord};
use chrono::Datelike;
use scan::{image_extension, scan_source, slugify, ScannedProject};

/// Where to read from and write to
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// `<Category>/<Project>/<images>` tree
    pub source: PathBuf,
    /// Site public folder; images land in `<public_dir>/images`
    pub public_dir: PathBuf,
    /// Output catalog file
    pub catalog_path: PathBuf,
}

/// Summary of a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub projects: usize,
    pub copied: usize,
    pub up_to_date: usize,
    pub orphans_removed: usize,
    /// Titles of project folders that produced no images
    pub skipped: Vec<String>,
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} projects, {} images copied, {} up to date, {} orphans removed",
            self.projects, self.copied, self.up_to_date, self.orphans_removed
        )?;
        if !self.skipped.is_empty() {
            write!(f, ", skipped: {}", self.skipped.join(", "))?;
        }
        Ok(())
    }
}

/// Run a full sync
pub fn sync_catalog(options: &SyncOptions) -> Result<SyncReport, SyncError> {
    info!("🔍 Scanning source folder: {}", options.source.display());
    let scanned = scan_source(&options.source)?;

    let images_dir = options.public_dir.join("images");
    fs::create_dir_all(&images_dir).map_err(|e| SyncError::io(&images_dir, e))?;

    let mut report = SyncReport::default();
    let mut current_files = HashSet::new();
    let mut projects = Vec::new();
    let mut used_dirs = HashSet::new();
    let mut ids = HashSet::new();

    for project in &scanned {
        let category_slug = slugify(&project.category_name);
        let project_slug = slugify(&project.title);

        if !used_dirs.insert((category_slug.clone(), project_slug.clone())) {
            warn!(
                "  Skipping {}: another folder in {} maps to the same name",
                project.title, project.category_name
            );
            report.skipped.push(project.title.clone());
            continue;
        }

        let Some(id) = unique_id(&ids, &category_slug, &project_slug) else {
            warn!("  Skipping {}: no free project id", project.title);
            report.skipped.push(project.title.clone());
            continue;
        };

        match build_project(project, id, &images_dir, &mut current_files, &mut report)? {
            Some(record) => {
                info!("  Added: {} ({} images)", record.title, record.images.len());
                ids.insert(record.id.clone());
                projects.push(record);
            }
            None => {
                info!("  Skipping {}: no images found", project.title);
                report.skipped.push(project.title.clone());
            }
        }
    }

    sort_by_date(&mut projects);
    report.projects = projects.len();

    info!("Checking for orphaned files...");
    report.orphans_removed = files::remove_orphans(&images_dir, &current_files)?;
    files::remove_empty_dirs(&images_dir)?;

    write_catalog(&options.catalog_path, &projects)?;
    info!("✅ Sync complete: {}", report);
    Ok(report)
}

/// Project slug, or `<category>-<project>` when another category already
/// used that slug. None when both are taken.
fn unique_id(
    taken: &HashSet<String>,
    category_slug: &str,
    project_slug: &str,
) -> Option<String> {
    if !taken.contains(project_slug) {
        return Some(project_slug.to_string());
    }
    let prefixed = format!("{category_slug}-{project_slug}");
    if taken.contains(&prefixed) {
        None
    } else {
        warn!("  Project id '{project_slug}' is taken, using '{prefixed}'");
        Some(prefixed)
    }
}

/// Oldest first; projects from the same month keep folder order
fn sort_by_date(projects: &mut [ProjectRecord]) {
    projects.sort_by_key(|project| project.date);
}

/// Copy one project's images and build its catalog record.
/// Returns None when no image could be published.
fn build_project(
    project: &ScannedProject,
    id: String,
    images_dir: &Path,
    current_files: &mut HashSet<PathBuf>,
    report: &mut SyncReport,
) -> Result<Option<ProjectRecord>, SyncError> {
    let Some(first) = project.images.first() else {
        return Ok(None);
    };

    let category_slug = slugify(&project.category_name);
    let project_slug = slugify(&project.title);
    let project_dir = images_dir.join(&category_slug).join(&project_slug);

    info!(
        "  Processing: {} ({} images, dated {})",
        project.title,
        project.images.len(),
        first.date
    );

    let mut web_paths: Vec<String> = Vec::with_capacity(project.images.len());
    for image in &project.images {
        let ext = image_extension(&image.source).unwrap_or_else(|| "jpg".to_string());
        let stem = image
            .source
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let safe_name = format!("{}.{}", slugify(&stem), ext);
        let web_path = format!("/images/{category_slug}/{project_slug}/{safe_name}");

        if web_paths.contains(&web_path) {
            warn!("    Duplicate image name {} in {}, skipping", image.file_name, project.title);
            continue;
        }

        let local_path = project_dir.join(&safe_name);
        current_files.insert(local_path.clone());

        if files::needs_update(&image.source, &local_path) {
            info!("    Copying: {}", image.file_name);
            if let Err(err) = files::copy_image(&image.source, &local_path) {
                warn!("    Failed to copy {}: {}", image.file_name, err);
                continue;
            }
            report.copied += 1;
        } else {
            info!("    Up to date: {}", image.file_name);
            report.up_to_date += 1;
        }
        web_paths.push(web_path);
    }

    if web_paths.is_empty() {
        return Ok(None);
    }

    // Prefer an image named "thumbnail.*", otherwise the first one
    let thumbnail = web_paths
        .iter()
        .find(|path| {
            path.rsplit('/')
                .next()
                .is_some_and(|name| name.starts_with("thumbnail."))
        })
        .unwrap_or(&web_paths[0])
        .clone();

    let date = ProjectDate::new(first.date.year(), first.date.month()).unwrap_or_default();

    Ok(Some(ProjectRecord {
        id,
        title: project.title.clone(),
        category: category_slug,
        category_name: project.category_name.clone(),
        thumbnail,
        images: web_paths,
        description: format!(
            "Handcrafted {} from the {} collection.",
            project.title.to_lowercase(),
            project.category_name
        ),
        date,
    }))
}

fn write_catalog(path: &Path, projects: &[ProjectRecord]) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(projects)?;
    fs::write(path, json).map_err(|e| SyncError::io(path, e))?;
    info!("Saved {} projects to {}", projects.len(), path.display());
    Ok(())
}
