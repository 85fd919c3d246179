/// Fixed category enumeration used for navigation tabs
///
/// The list is hand-maintained rather than derived from the catalog, so a
/// category can exist with zero projects (its page shows an empty state).

use super::data::ProjectRecord;
use super::library::Catalog;

/// A browsable category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Slug matching `ProjectRecord::category`
    pub id: &'static str,
    pub name: &'static str,
    /// Glyph shown next to the tab label
    pub icon: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "bowls", name: "Bowls", icon: "◡" },
    Category { id: "cutting-boards", name: "Cutting Boards", icon: "▭" },
    Category { id: "furniture", name: "Furniture", icon: "🪑" },
    Category { id: "kitchen-utensils", name: "Kitchen Utensils", icon: "🥄" },
    Category { id: "miscellaneous", name: "Miscellaneous", icon: "◆" },
    Category { id: "tools", name: "Tools", icon: "🔧" },
];

/// All categories in navigation order
pub fn list_categories() -> &'static [Category] {
    CATEGORIES
}

pub fn find(id: &str) -> Option<&'static Category> {
    list_categories().iter().find(|category| category.id == id)
}

/// Landing page tab selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "All Projects".to_string(),
            CategoryFilter::Category(id) => find(id)
                .map(|category| category.name.to_string())
                .unwrap_or_else(|| id.clone()),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "▦",
            CategoryFilter::Category(id) => find(id).map(|category| category.icon).unwrap_or("•"),
        }
    }

    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => project.category == *id,
        }
    }

    /// The "All" tab followed by one tab per category
    pub fn tabs() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                list_categories()
                    .iter()
                    .map(|category| CategoryFilter::Category(category.id.to_string())),
            )
            .collect()
    }
}

/// Display name for a category page.
///
/// The first matching record's `categoryName` wins, then the fixed
/// enumeration, then the raw slug.
pub fn category_name(catalog: &Catalog, id: &str) -> String {
    catalog
        .projects()
        .iter()
        .find(|project| project.category == id)
        .map(|project| project.category_name.clone())
        .or_else(|| find(id).map(|category| category.name.to_string()))
        .unwrap_or_else(|| id.to_string())
}

pub fn project_count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} project{plural} in this category")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures;

    #[test]
    fn test_enumeration_order() {
        let ids: Vec<&str> = list_categories().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "bowls",
                "cutting-boards",
                "furniture",
                "kitchen-utensils",
                "miscellaneous",
                "tools"
            ]
        );
    }

    #[test]
    fn test_tabs_start_with_all() {
        let tabs = CategoryFilter::tabs();
        assert_eq!(tabs.len(), CATEGORIES.len() + 1);
        assert_eq!(tabs[0], CategoryFilter::All);
        assert_eq!(tabs[0].label(), "All Projects");
        assert_eq!(tabs[3].label(), "Furniture");

        let listed: Vec<CategoryFilter> = list_categories()
            .iter()
            .map(|category| CategoryFilter::Category(category.id.to_string()))
            .collect();
        assert_eq!(tabs[1..], listed[..]);
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find("tools").map(|c| c.name), Some("Tools"));
        assert!(find("chairs").is_none());
    }

    #[test]
    fn test_category_name_prefers_catalog_label() {
        let catalog = fixtures::catalog();
        assert_eq!(category_name(&catalog, "cutting-boards"), "Cutting Boards");
        // No projects: fall back to the enumeration
        assert_eq!(category_name(&catalog, "kitchen-utensils"), "Kitchen Utensils");
        // Unknown slug: echo it back
        assert_eq!(category_name(&catalog, "chairs"), "chairs");
    }

    #[test]
    fn test_count_label_pluralizes() {
        assert_eq!(project_count_label(0), "0 projects in this category");
        assert_eq!(project_count_label(1), "1 project in this category");
        assert_eq!(project_count_label(3), "3 projects in this category");
    }
}
