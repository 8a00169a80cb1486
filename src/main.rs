use iced::widget::{button, canvas, column, container, image, row, text, Column, Stack};
use iced::{Alignment, Length};
use iced::{Element, Task, Theme};
use std::path::PathBuf;
use url::Url;

mod catalog;
mod error;
mod link;
mod logging;
mod state;
mod ui;

use link::DeepLink;
use state::config::GalleryConfig;
use state::data::{Item, ReactionKind};
use state::gallery::Gallery;
use state::reactions::ReactionStore;
use state::storage::{MemoryStorage, SqliteStorage, Storage};
use ui::gesture::{NavIntent, SwipeTracker};
use ui::swipe::SwipeArea;

/// Main application state
struct CreatureGallery {
    config: GalleryConfig,
    /// Catalog, cursor and persisted reaction counters
    gallery: Gallery<Box<dyn Storage>>,
    /// Deep-link parameter for the configured variant
    link: DeepLink,
    /// Location the app was launched with (first command-line argument)
    launch_location: Option<String>,
    swipe: SwipeTracker,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background catalog load finished (empty on failure)
    CatalogLoaded(Vec<Item>),
    Previous,
    Next,
    React(u32, ReactionKind),
    /// User asked for a share link to the current card
    Share,
    SwipeStart(f32),
    SwipeEnd(f32),
    SwipeCancel,
}

impl CreatureGallery {
    /// Create a new instance of the application and start loading the catalog
    fn new(config: GalleryConfig, launch_location: Option<String>) -> (Self, Task<Message>) {
        let variant = config.variant;
        let store = ReactionStore::new(open_storage(&config), variant.storage_prefix());

        let mut gallery = Gallery::new(store);
        gallery.subscribe(|change| tracing::debug!(?change, "gallery changed"));

        let app = CreatureGallery {
            link: DeepLink::new(variant.param_name()),
            swipe: SwipeTracker::new(config.swipe_threshold),
            status: "Loading creatures...".to_string(),
            gallery,
            launch_location,
            config,
        };

        let load = Task::perform(
            catalog::load(variant, app.config.catalog_path.clone()),
            Message::CatalogLoaded,
        );
        (app, load)
    }

    fn title(&self) -> String {
        match self.gallery.current() {
            Some(item) => format!("{} - {}", self.config.variant.title(), item.display_name),
            None => self.config.variant.title().to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(items) => {
                let cursor = self
                    .launch_location
                    .as_deref()
                    .map(|location| self.link.cursor_from_location(location, items.len()))
                    .unwrap_or(0);

                self.gallery.initialize(items, cursor);
                self.status = if self.gallery.is_empty() {
                    "No creatures to show.".to_string()
                } else {
                    format!("Ready. {} creatures in the gallery.", self.gallery.len())
                };
                Task::none()
            }
            Message::Previous => {
                self.gallery.navigate_previous();
                Task::none()
            }
            Message::Next => {
                self.gallery.navigate_next();
                Task::none()
            }
            Message::React(id, kind) => {
                self.gallery.react(id, kind);
                Task::none()
            }
            Message::Share => self.share(),
            Message::SwipeStart(x) => {
                self.swipe.touch_start(x);
                Task::none()
            }
            Message::SwipeEnd(x) => {
                match self.swipe.touch_end(x) {
                    Some(NavIntent::Next) => {
                        self.gallery.navigate_next();
                    }
                    Some(NavIntent::Previous) => {
                        self.gallery.navigate_previous();
                    }
                    None => {}
                }
                Task::none()
            }
            Message::SwipeCancel => {
                self.swipe.cancel();
                Task::none()
            }
        }
    }

    /// Build a share link for the current card and copy it to the clipboard
    fn share(&mut self) -> Task<Message> {
        let Some(id) = self.gallery.current().map(|item| item.id) else {
            return Task::none();
        };

        match self.link.share_url(self.share_base(), id) {
            Ok(url) => {
                tracing::info!("🔗 Share link: {url}");
                self.status = format!("Link copied: {url}");
                iced::clipboard::write(url.to_string())
            }
            Err(e) => {
                tracing::warn!("⚠️  Could not build share link: {e}");
                self.status = "Could not build a share link.".to_string();
                Task::none()
            }
        }
    }

    /// Share links reuse the launch URL when there is one, like a browser location
    fn share_base(&self) -> &str {
        match self.launch_location.as_deref() {
            Some(location) if Url::parse(location).is_ok() => location,
            _ => &self.config.base_url,
        }
    }

    /// The hint is hidden mid-swipe and when there is nowhere to go
    fn show_swipe_hint(&self) -> bool {
        self.gallery.len() > 1 && !self.swipe.is_tracking()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let photo = Stack::new()
            .push(
                container(self.photo_view())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            )
            .push(
                canvas(SwipeArea {
                    show_hint: self.show_swipe_hint(),
                })
                .width(Length::Fill)
                .height(Length::Fill),
            )
            .width(Length::Fixed(340.0))
            .height(Length::Fixed(300.0));

        let current_id = self.gallery.current().map(|item| item.id);
        let reaction = current_id
            .map(|id| self.gallery.reactions_for(id))
            .unwrap_or_default();

        let actions = row![
            button("❤️")
                .on_press_maybe(current_id.map(|id| Message::React(id, ReactionKind::Like)))
                .padding(10),
            text(reaction.likes.to_string()).size(16),
            button("💔")
                .on_press_maybe(current_id.map(|id| Message::React(id, ReactionKind::Dislike)))
                .padding(10),
            text(reaction.dislikes.to_string()).size(16),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let navigation = row![
            button("◀ Previous")
                .on_press_maybe(self.gallery.can_go_previous().then_some(Message::Previous))
                .padding(10),
            text(self.gallery.position_label()).size(16),
            button("Next ▶")
                .on_press_maybe(self.gallery.can_go_next().then_some(Message::Next))
                .padding(10),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let content: Column<Message> = column![
            text(self.config.variant.title()).size(36),
            photo,
            actions,
            navigation,
            button("Share")
                .on_press_maybe(current_id.map(|_| Message::Share))
                .padding(10),
            text(&self.status).size(14),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn photo_view(&self) -> Element<'_, Message> {
        if self.gallery.is_loading() {
            return text("Loading creatures...").into();
        }
        let Some(item) = self.gallery.current() else {
            return text("Nothing to show here.").into();
        };

        match item.image_ref.as_deref() {
            Some(reference) => match local_path(reference) {
                Some(path) => image(image::Handle::from_path(path))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
                None => column![
                    text(item.display_name.as_str()).size(24),
                    text(reference).size(12),
                ]
                .spacing(8)
                .align_x(Alignment::Center)
                .into(),
            },
            None => text(item.display_name.as_str()).size(24).into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Plain paths and `file:` URLs are decoded from disk; any other URL is shown as a link
fn local_path(reference: &str) -> Option<PathBuf> {
    match Url::parse(reference) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().ok(),
        Ok(_) => None,
        Err(_) => Some(PathBuf::from(reference)),
    }
}

/// Open the reaction database, falling back to memory so the gallery always starts
fn open_storage(config: &GalleryConfig) -> Box<dyn Storage> {
    let Some(path) = config.database_path() else {
        tracing::warn!("⚠️  No data directory found, reactions will not be saved");
        return Box::new(MemoryStorage::new());
    };

    match SqliteStorage::open(&path) {
        Ok(storage) => {
            if let Some(path) = storage.path() {
                tracing::info!("📁 Reaction database opened at: {}", path.display());
            }
            Box::new(storage)
        }
        Err(e) => {
            tracing::warn!("⚠️  Could not open {}: {e}, reactions will not be saved", path.display());
            Box::new(MemoryStorage::new())
        }
    }
}

fn main() -> iced::Result {
    logging::init();

    let config = GalleryConfig::load();
    let launch_location = std::env::args().nth(1);
    tracing::info!("🦊 Starting {:?} gallery", config.variant);

    iced::application(
        CreatureGallery::title,
        CreatureGallery::update,
        CreatureGallery::view,
    )
    .theme(CreatureGallery::theme)
    .centered()
    .run_with(move || CreatureGallery::new(config, launch_location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::config::Variant;
    use crate::state::data::Reaction;

    fn app(dir: &tempfile::TempDir, launch: Option<&str>) -> CreatureGallery {
        let config = GalleryConfig {
            database_path: Some(dir.path().join("reactions.db")),
            ..GalleryConfig::default()
        };
        let (app, _load) = CreatureGallery::new(config, launch.map(str::to_string));
        app
    }

    #[test]
    fn test_deep_link_places_cursor() {
        let dir = tempfile::tempdir().unwrap();

        let mut last = app(&dir, Some("https://foxes.example/?fox=51"));
        let _ = last.update(Message::CatalogLoaded(catalog::fox_catalog(51)));
        assert_eq!(last.gallery.cursor(), 50);
        assert!(!last.gallery.can_go_next());

        let mut beyond = app(&dir, Some("?fox=52"));
        let _ = beyond.update(Message::CatalogLoaded(catalog::fox_catalog(51)));
        assert_eq!(beyond.gallery.cursor(), 0);
    }

    #[test]
    fn test_empty_catalog_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, None);
        assert!(app.gallery.is_loading());

        let _ = app.update(Message::CatalogLoaded(Vec::new()));
        let _ = app.update(Message::Next);
        let _ = app.update(Message::Share);

        assert!(!app.gallery.is_loading());
        assert_eq!(app.status, "No creatures to show.");
    }

    #[test]
    fn test_swipe_messages_navigate() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, None);
        let _ = app.update(Message::CatalogLoaded(catalog::fox_catalog(3)));

        let _ = app.update(Message::SwipeStart(300.0));
        let _ = app.update(Message::SwipeEnd(200.0));
        assert_eq!(app.gallery.cursor(), 1);

        let _ = app.update(Message::SwipeStart(300.0));
        let _ = app.update(Message::SwipeEnd(320.0));
        assert_eq!(app.gallery.cursor(), 1);

        let _ = app.update(Message::SwipeStart(100.0));
        let _ = app.update(Message::SwipeCancel);
        let _ = app.update(Message::SwipeEnd(400.0));
        assert_eq!(app.gallery.cursor(), 1);

        let _ = app.update(Message::SwipeStart(100.0));
        let _ = app.update(Message::SwipeEnd(400.0));
        assert_eq!(app.gallery.cursor(), 0);
    }

    #[test]
    fn test_reactions_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = app(&dir, None);
            let _ = app.update(Message::CatalogLoaded(catalog::fox_catalog(3)));
            let _ = app.update(Message::React(2, ReactionKind::Dislike));
            let _ = app.update(Message::React(2, ReactionKind::Dislike));
        }

        let restarted = app(&dir, None);
        assert_eq!(
            restarted.gallery.reactions_for(2),
            Reaction { likes: 0, dislikes: 2 }
        );
    }

    #[test]
    fn test_swipe_hint_hides_while_tracking() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, None);
        assert!(!app.show_swipe_hint());

        let _ = app.update(Message::CatalogLoaded(catalog::fox_catalog(3)));
        assert!(app.show_swipe_hint());

        let _ = app.update(Message::SwipeStart(200.0));
        assert!(!app.show_swipe_hint());

        let _ = app.update(Message::SwipeEnd(190.0));
        assert!(app.show_swipe_hint());
    }

    #[test]
    fn test_only_paths_are_decoded_from_disk() {
        assert_eq!(local_path("roo/3.png"), Some(PathBuf::from("roo/3.png")));
        assert_eq!(local_path("/srv/roos/joey.jpg"), Some(PathBuf::from("/srv/roos/joey.jpg")));
        assert_eq!(local_path("https://randomfox.ca/images/1.jpg"), None);
        assert_eq!(local_path("data:image/png;base64,iVBORw0KGgo="), None);
        assert_eq!(local_path("ftp://example.org/roo.jpg"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_urls_are_decoded_from_disk() {
        assert_eq!(local_path("file:///tmp/joey.jpg"), Some(PathBuf::from("/tmp/joey.jpg")));
    }

    #[test]
    fn test_share_uses_launch_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, Some("https://foxes.example/gallery?fox=4#top"));
        let _ = app.update(Message::CatalogLoaded(catalog::fox_catalog(10)));
        let _ = app.update(Message::Share);

        assert_eq!(app.status, "Link copied: https://foxes.example/gallery?fox=4");
    }

    #[test]
    fn test_share_falls_back_to_configured_base() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, Some("fox=2"));
        assert_eq!(app.config.variant, Variant::Fox);
        let _ = app.update(Message::CatalogLoaded(catalog::fox_catalog(10)));
        let _ = app.update(Message::Share);

        assert_eq!(app.status, "Link copied: https://creature-gallery.local/?fox=2");
    }
}
