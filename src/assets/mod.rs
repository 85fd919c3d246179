/// Image asset handling
///
/// This module handles:
/// - Resolving catalog image paths against the deployment base path
/// - Mapping resolved paths onto local files
/// - Generating and caching grid thumbnails

pub mod path;
pub mod thumbnail;

pub use path::{locate_image, ImageSource};
