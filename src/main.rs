use clap::{Parser, Subcommand};
use iced::keyboard::{self, key::Named, Key};
use iced::{Element, Subscription, Task, Theme};
use log::{debug, error, info, warn};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

mod assets;
mod config;
mod error;
mod state;
mod sync;
mod ui;

use assets::locate_image;
use assets::thumbnail::{cache_file_name, generate_thumbnail, thumbnail_cache_dir};
use config::{AppConfig, Overrides};
use error::AppError;
use state::categories::CategoryFilter;
use state::gallery::{GalleryAction, GalleryCursor};
use state::library::Catalog;
use state::query;
use state::quote::{QuoteField, QuoteForm, SubmitOutcome};
use state::route::Route;
use sync::{sync_catalog, SyncOptions};

#[derive(Parser)]
#[command(name = "woodshop")]
#[command(about = "Browse a handmade woodworking portfolio", long_about = None)]
#[command(version)]
struct Cli {
    /// Catalog JSON file
    #[arg(long, global = true, env = "WOODSHOP_CATALOG")]
    catalog: Option<PathBuf>,

    /// Prefix the site is served under
    #[arg(long, global = true, env = "WOODSHOP_BASE_PATH")]
    base_path: Option<String>,

    /// Local folder that holds the site's public assets
    #[arg(long, global = true, env = "WOODSHOP_ASSET_ROOT")]
    asset_root: Option<PathBuf>,

    /// Show full-size images in project grids
    #[arg(long, global = true)]
    no_thumbnails: bool,

    /// Settings file (defaults to the platform config dir)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Page to open, e.g. "/project/walnut-bowl"
    #[arg(long, default_value = "/")]
    open: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the catalog and public images from a photo folder
    Sync {
        /// Folder laid out as <Category>/<Project>/<images>
        source: PathBuf,
    },
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    FilterSelected(CategoryFilter),
    Gallery(GalleryAction),
    Quote(QuoteField),
    SubmitQuote,
    DismissNotice,
    ToggleMenu,
    CloseMenu,
    /// Background thumbnail finished (asset path, cached file)
    ThumbnailReady(String, Option<PathBuf>),
}

/// Main application state
struct Portfolio {
    config: AppConfig,
    catalog: Catalog,
    route: Route,
    /// Landing page category tab
    filter: CategoryFilter,
    /// Position in the open project's gallery
    gallery: GalleryCursor,
    quote: QuoteForm,
    notice: Option<SubmitOutcome>,
    menu_open: bool,
    /// Asset path -> cached thumbnail file
    thumbnails: HashMap<String, PathBuf>,
}

impl Portfolio {
    fn new(config: AppConfig, catalog: Catalog, route: Route) -> (Self, Task<Message>) {
        if catalog.is_empty() {
            warn!("Catalog has no projects, every page will be empty");
        } else {
            info!("🪵 Portfolio loaded with {} projects", catalog.len());
        }

        let task = if config.thumbnails {
            thumbnail_tasks(&config, &catalog)
        } else {
            Task::none()
        };

        let mut portfolio = Portfolio {
            config,
            catalog,
            route: Route::Landing,
            filter: CategoryFilter::All,
            gallery: GalleryCursor::new(0),
            quote: QuoteForm::default(),
            notice: None,
            menu_open: false,
            thumbnails: HashMap::new(),
        };
        portfolio.navigate(route);

        (portfolio, task)
    }

    fn navigate(&mut self, route: Route) {
        if let Route::Project(id) = &route {
            let len = query::by_id(&self.catalog, id).map_or(0, |project| project.images.len());
            self.gallery = GalleryCursor::new(len);
            debug!("Gallery for '{}' opened with {} images", id, self.gallery.len());
        }
        if route != Route::Quote {
            self.notice = None;
        }
        self.menu_open = false;
        self.route = route;
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::FilterSelected(filter) => self.filter = filter,
            Message::Gallery(action) => {
                if matches!(self.route, Route::Project(_)) && self.gallery.has_navigation() {
                    self.gallery.apply(action);
                }
            }
            Message::Quote(field) => self.quote.apply(field),
            Message::SubmitQuote => {
                let outcome = self.quote.submit();
                if outcome == SubmitOutcome::Confirmed {
                    info!("Quote request submitted");
                    self.quote = QuoteForm::default();
                }
                self.notice = Some(outcome);
            }
            Message::DismissNotice => self.notice = None,
            Message::ToggleMenu => self.menu_open = !self.menu_open,
            Message::CloseMenu => self.menu_open = false,
            Message::ThumbnailReady(asset, path) => {
                if let Some(path) = path {
                    self.thumbnails.insert(asset, path);
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let pictures = ui::Pictures::new(&self.config, &self.thumbnails);

        let page = match &self.route {
            Route::Landing => ui::landing::view(&self.catalog, &self.filter, &pictures),
            Route::Category(slug) => ui::category::view(&self.catalog, slug, &pictures),
            Route::Project(id) => ui::project::view(&self.catalog, id, &self.gallery, &pictures),
            Route::About => ui::pages::about(),
            Route::Contact => ui::pages::contact(),
            Route::Quote => ui::quote::view(&self.quote, self.notice.as_ref()),
        };

        ui::layout::frame(self.menu_open, &self.route, page)
    }

    fn title(&self) -> String {
        match &self.route {
            Route::Project(id) => match query::by_id(&self.catalog, id) {
                Some(project) => format!("{} · {}", project.title, ui::layout::SITE_NAME),
                None => ui::layout::SITE_NAME.to_string(),
            },
            _ => ui::layout::SITE_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        ui::theme::woodshop()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::ArrowRight) => Some(Message::Gallery(GalleryAction::Next)),
            Key::Named(Named::ArrowLeft) => Some(Message::Gallery(GalleryAction::Previous)),
            Key::Named(Named::Escape) => Some(Message::CloseMenu),
            _ => None,
        })
    }
}

/// One background job per distinct local thumbnail in the catalog
fn thumbnail_tasks(config: &AppConfig, catalog: &Catalog) -> Task<Message> {
    let Some(cache_dir) = thumbnail_cache_dir() else {
        warn!("No cache directory available, grids will use full-size images");
        return Task::none();
    };

    let mut seen = HashSet::new();
    let tasks: Vec<Task<Message>> = catalog
        .projects()
        .iter()
        .filter(|project| seen.insert(project.thumbnail.clone()))
        .filter_map(|project| {
            let source = locate_image(config, &project.thumbnail).local_path()?.clone();
            let asset = project.thumbnail.clone();
            let target = cache_dir.join(cache_file_name(&asset));
            Some(Task::perform(generate_thumbnail(source, target), move |path| {
                Message::ThumbnailReady(asset.clone(), path)
            }))
        })
        .collect();

    info!("Generating {} thumbnails in the background", tasks.len());
    Task::batch(tasks)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = cli.settings.clone().or_else(AppConfig::settings_path);
    let overrides = Overrides {
        catalog_path: cli.catalog,
        base_path: cli.base_path,
        asset_root: cli.asset_root,
        no_thumbnails: cli.no_thumbnails,
    };
    let config = AppConfig::resolve(settings.as_deref(), overrides)?;

    if let Some(Commands::Sync { source }) = cli.command {
        let options = SyncOptions {
            source,
            public_dir: config.asset_root.clone(),
            catalog_path: config.catalog_path.clone(),
        };
        let report = sync_catalog(&options)?;
        println!("{report}");
        return Ok(());
    }

    let catalog = Catalog::load(&config.catalog_path)?;
    let route = Route::parse(&cli.open).unwrap_or_else(|| {
        warn!("Unknown page '{}', opening the landing page", cli.open);
        Route::Landing
    });

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .theme(Portfolio::theme)
        .subscription(Portfolio::subscription)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || Portfolio::new(config, catalog, route))?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Cli::parse()) {
        error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::fixtures;

    fn portfolio(route: Route) -> Portfolio {
        let config = AppConfig {
            thumbnails: false,
            ..AppConfig::default()
        };
        Portfolio::new(config, fixtures::catalog(), route).0
    }

    #[test]
    fn test_entering_project_resets_gallery() {
        let mut app = portfolio(Route::Project("walnut-bowl".into()));
        assert_eq!(app.gallery.len(), 3);

        let _ = app.update(Message::Gallery(GalleryAction::Select(2)));
        assert_eq!(app.gallery.position(), 2);

        let _ = app.update(Message::Navigate(Route::Project("ash-bowl".into())));
        assert_eq!(app.gallery.position(), 0);
        assert_eq!(app.gallery.len(), 2);
    }

    #[test]
    fn test_arrow_keys_ignored_off_project_pages() {
        let mut app = portfolio(Route::Project("walnut-bowl".into()));
        let _ = app.update(Message::Navigate(Route::About));
        let _ = app.update(Message::Gallery(GalleryAction::Next));
        assert_eq!(app.gallery.position(), 0);
    }

    #[test]
    fn test_single_image_gallery_does_not_move() {
        let mut app = portfolio(Route::Project("oak-table".into()));
        let _ = app.update(Message::Gallery(GalleryAction::Next));
        assert_eq!(app.gallery.position(), 0);
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut app = portfolio(Route::Landing);
        let _ = app.update(Message::ToggleMenu);
        assert!(app.menu_open);
        let _ = app.update(Message::Navigate(Route::Contact));
        assert!(!app.menu_open);
        assert_eq!(app.route, Route::Contact);
    }

    #[test]
    fn test_quote_submission_flow() {
        let mut app = portfolio(Route::Quote);
        let _ = app.update(Message::SubmitQuote);
        assert!(matches!(app.notice, Some(SubmitOutcome::Incomplete(_))));

        let _ = app.update(Message::Quote(QuoteField::Name("Dana".into())));
        let _ = app.update(Message::Quote(QuoteField::Email("dana@example.com".into())));
        let _ = app.update(Message::Quote(QuoteField::ProjectType(
            state::quote::ProjectType::ALL[0],
        )));
        let _ = app.update(Message::Quote(QuoteField::Description("A bench".into())));
        let _ = app.update(Message::SubmitQuote);
        assert_eq!(app.notice, Some(SubmitOutcome::Confirmed));
        assert_eq!(app.quote, QuoteForm::default());

        let _ = app.update(Message::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_title_names_open_project() {
        let app = portfolio(Route::Project("oak-table".into()));
        assert!(app.title().starts_with("Oak Table"));
    }
}
