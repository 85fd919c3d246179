/// Pure queries over the immutable catalog
///
/// All results preserve catalog order. None of these fail: an empty
/// result or `None` is a displayable state, not an error.

use super::categories::CategoryFilter;
use super::data::ProjectRecord;
use super::library::Catalog;

/// How many projects the "More in ..." panel shows
pub const RELATED_LIMIT: usize = 2;

/// All projects in `category_id`
pub fn by_category<'a>(catalog: &'a Catalog, category_id: &str) -> Vec<&'a ProjectRecord> {
    catalog
        .projects()
        .iter()
        .filter(|project| project.category == category_id)
        .collect()
}

/// The project with `id`, or `None` when the catalog has no such project
pub fn by_id<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a ProjectRecord> {
    catalog.projects().iter().find(|project| project.id == id)
}

/// Other projects in the same category, capped at `limit`
pub fn related_to<'a>(
    catalog: &'a Catalog,
    project: &ProjectRecord,
    limit: usize,
) -> Vec<&'a ProjectRecord> {
    catalog
        .projects()
        .iter()
        .filter(|other| other.category == project.category && other.id != project.id)
        .take(limit)
        .collect()
}

/// Projects selected by a landing page tab
pub fn filter<'a>(catalog: &'a Catalog, selection: &CategoryFilter) -> Vec<&'a ProjectRecord> {
    catalog
        .projects()
        .iter()
        .filter(|project| selection.matches(project))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::categories::CATEGORIES;
    use crate::state::fixtures;

    fn ids(projects: &[&ProjectRecord]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_by_category_only_matching_in_order() {
        let catalog = fixtures::catalog();
        for category in CATEGORIES {
            let found = by_category(&catalog, category.id);
            assert!(found.iter().all(|p| p.category == category.id));
        }

        let bowls = by_category(&catalog, "bowls");
        assert_eq!(ids(&bowls), vec!["walnut-bowl", "cherry-bowl", "ash-bowl"]);
    }

    #[test]
    fn test_by_category_empty_is_not_error() {
        let catalog = fixtures::catalog();
        assert!(by_category(&catalog, "tools").is_empty());
        assert!(by_category(&catalog, "no-such-category").is_empty());
    }

    #[test]
    fn test_by_id_finds_every_project() {
        let catalog = fixtures::catalog();
        for project in catalog.projects() {
            let found = by_id(&catalog, &project.id).unwrap();
            assert_eq!(found.id, project.id);
        }
        assert!(by_id(&catalog, "zzz").is_none());
    }

    #[test]
    fn test_related_excludes_self_and_caps() {
        let catalog = fixtures::catalog();
        let walnut = by_id(&catalog, "walnut-bowl").unwrap();

        let related = related_to(&catalog, walnut, RELATED_LIMIT);
        assert_eq!(ids(&related), vec!["cherry-bowl", "ash-bowl"]);

        let ash = by_id(&catalog, "ash-bowl").unwrap();
        let related = related_to(&catalog, ash, RELATED_LIMIT);
        assert_eq!(ids(&related), vec!["walnut-bowl", "cherry-bowl"]);
        assert!(related.iter().all(|p| p.category == ash.category));
    }

    #[test]
    fn test_related_empty_for_only_child() {
        let catalog = fixtures::catalog();
        let table = by_id(&catalog, "oak-table").unwrap();
        assert!(related_to(&catalog, table, RELATED_LIMIT).is_empty());
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let catalog = fixtures::catalog();
        assert_eq!(filter(&catalog, &CategoryFilter::All).len(), catalog.len());
        let furniture = filter(&catalog, &CategoryFilter::Category("furniture".into()));
        assert_eq!(ids(&furniture), vec!["oak-table"]);
    }

    #[test]
    fn test_two_project_catalog_end_to_end() {
        let json = r#"[
            {"id": "t1", "title": "Table", "category": "furniture", "categoryName": "Furniture",
             "thumbnail": "/images/t1.jpg", "images": ["/images/t1.jpg"],
             "description": "", "date": "2024-01"},
            {"id": "t2", "title": "Bowl", "category": "bowls", "categoryName": "Bowls",
             "thumbnail": "/images/t2.jpg", "images": ["/images/t2.jpg"],
             "description": "", "date": "2024-02"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(ids(&by_category(&catalog, "furniture")), vec!["t1"]);
        assert!(by_category(&catalog, "tools").is_empty());
        assert_eq!(by_id(&catalog, "t2").unwrap().category, "bowls");
        assert!(by_id(&catalog, "zzz").is_none());
    }
}
