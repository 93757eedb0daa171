// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires together the viewer, localization and settings,
//! and translates messages into effects like logging a rejected page or
//! starting the appearance fade.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::viewer::Pages;
use crate::i18n::fluent::I18n;
use crate::media::PageAssets;
use crate::ui::viewer;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the viewer, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    viewer: viewer::State,
    /// Resolved at boot so `System` mode is not re-detected every frame.
    theme: Theme,
    /// i18n key of a settings problem to show until dismissed.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer", &self.viewer.viewer())
            .field("theme", &self.theme)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone(), flags.assets_dir.clone());

    // iced 0.14 requires an Fn boot; flags are cloned on every call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and page assets, then schedules the appearance fade.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let app = Self::from_config(flags, config, warning);
        (app, Task::done(Message::WindowOpened))
    }

    /// Builds the application from an already loaded configuration.
    #[must_use]
    pub fn from_config(flags: Flags, config: Config, warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, &config);

        let pages = config
            .pages
            .images
            .clone()
            .and_then(Pages::from_image_names)
            .unwrap_or_default();
        let assets_dir = flags
            .assets_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| paths::get_assets_dir(config.pages.assets_dir.clone()));
        let images = PageAssets::new(&assets_dir).load_all(&pages);

        tracing::info!(
            locale = %i18n.current_locale(),
            pages = pages.len(),
            assets = %assets_dir.display(),
            "viewer ready"
        );

        Self {
            i18n,
            viewer: viewer::State::new(pages, images, assets_dir, &config.viewer),
            theme: config.general.theme_mode.theme(),
            warning,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_frame_subscription(&self.viewer),
        ])
    }

    /// Routes `message` to its handler.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            viewer: &mut self.viewer,
            warning: &mut self.warning,
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            warning: self.warning.as_deref(),
        })
    }

    /// Viewer screen state, for inspection.
    #[must_use]
    pub fn viewer(&self) -> &viewer::State {
        &self.viewer
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
}
