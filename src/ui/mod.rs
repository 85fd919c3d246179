/// Page views and shared widgets
///
/// Every page is a thin consumer of `state::query`; nothing here mutates
/// the catalog.

pub mod category;
pub mod landing;
pub mod layout;
pub mod logo;
pub mod pages;
pub mod project;
pub mod quote;
pub mod theme;
pub mod widgets;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::assets::{locate_image, ImageSource};
use crate::config::AppConfig;

/// Resolves catalog asset paths for display, preferring cached thumbnails
/// for grid cards
pub struct Pictures<'a> {
    config: &'a AppConfig,
    thumbnails: &'a HashMap<String, PathBuf>,
}

impl<'a> Pictures<'a> {
    pub fn new(config: &'a AppConfig, thumbnails: &'a HashMap<String, PathBuf>) -> Self {
        Self { config, thumbnails }
    }

    /// Full-size image
    pub fn full(&self, asset_path: &str) -> ImageSource {
        locate_image(self.config, asset_path)
    }

    /// Down-scaled copy when one has been generated, else the full image
    pub fn thumbnail(&self, asset_path: &str) -> ImageSource {
        match self.thumbnails.get(asset_path) {
            Some(path) => ImageSource::Local(path.clone()),
            None => self.full(asset_path),
        }
    }
}
