use log::{info, warn};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::categories;
use super::data::ProjectRecord;
use crate::error::CatalogError;

/// The Catalog holds every project, in file order.
/// It is loaded once at start-up and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Load and validate the catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        info!(
            "📁 Catalog loaded from {} ({} projects)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::from_projects(projects)
    }

    /// Build a catalog from records, enforcing the load-time invariants:
    /// ids are unique and every project has at least one image.
    pub fn from_projects(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        // category slug -> first categoryName seen (canonical)
        let mut names: HashMap<&str, &str> = HashMap::new();

        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: project.id.clone(),
                });
            }

            if project.images.is_empty() {
                return Err(CatalogError::NoImages {
                    id: project.id.clone(),
                });
            }

            let canonical = *names
                .entry(project.category.as_str())
                .or_insert(project.category_name.as_str());
            if canonical != project.category_name {
                warn!(
                    "⚠️  Project '{}' labels category '{}' as '{}', using '{}'",
                    project.id, project.category, project.category_name, canonical
                );
            }

            if categories::find(&project.category).is_none() {
                warn!(
                    "⚠️  Project '{}' uses unknown category '{}'",
                    project.id, project.category
                );
            }
        }

        Ok(Self { projects })
    }

    /// All projects in catalog order
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures;

    #[test]
    fn test_load_keeps_file_order() {
        let catalog = fixtures::catalog();
        let ids: Vec<&str> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["walnut-bowl", "oak-table", "maple-board", "cherry-bowl", "ash-bowl"]
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut projects = fixtures::catalog().projects().to_vec();
        projects.push(projects[0].clone());

        match Catalog::from_projects(projects) {
            Err(CatalogError::DuplicateId { id }) => assert_eq!(id, "walnut-bowl"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_project_without_images() {
        let mut projects = fixtures::catalog().projects().to_vec();
        projects[1].images.clear();

        match Catalog::from_projects(projects) {
            Err(CatalogError::NoImages { id }) => assert_eq!(id, "oak-table"),
            other => panic!("expected missing images error, got {:?}", other),
        }
    }

    #[test]
    fn test_inconsistent_category_name_is_not_fatal() {
        let mut projects = fixtures::catalog().projects().to_vec();
        projects[3].category_name = "Bowls & Vessels".into();
        assert!(Catalog::from_projects(projects).is_ok());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("projects.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, fixtures::CATALOG_JSON).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_array_is_an_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": 3}]"),
            Err(CatalogError::Parse(_))
        ));
    }
}
