/// Page addressing
///
/// Category pages are addressed by category slug and project pages by
/// project id, mirroring the site's hash routes (`#/project/walnut-bowl`).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Category(String),
    Project(String),
    About,
    Contact,
    Quote,
}

impl Route {
    /// Parse a route path. Returns `None` for paths no page answers to.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.trim_matches('/');

        let mut segments = path.split('/');
        let route = match (segments.next(), segments.next()) {
            (Some(""), None) => Route::Landing,
            (Some("about"), None) => Route::About,
            (Some("contact"), None) => Route::Contact,
            (Some("quote"), None) => Route::Quote,
            (Some("category"), Some(slug)) if !slug.is_empty() => Route::Category(slug.to_string()),
            (Some("project"), Some(id)) if !id.is_empty() => Route::Project(id.to_string()),
            _ => return None,
        };

        if segments.next().is_some() {
            return None;
        }
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Category(slug) => format!("/category/{slug}"),
            Route::Project(id) => format!("/project/{id}"),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Quote => "/quote".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
