// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portfolio views.
//!
//! The `App` struct wires together the content, localization and settings,
//! and routes component messages to the mounted page. Page switching and the
//! lightbox lifecycle live in [`page`] and [`crate::ui::projects`]; this file
//! only decides what is loaded at startup and how the window is configured.

mod message;
pub mod page;
pub mod paths;
mod subscription;
pub mod update;
mod view;

pub use message::{Flags, Message};
pub use page::{Page, ViewState};

use crate::config::{
    self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::portfolio::{assets, Portfolio};
use crate::ui::lightbox::LightboxState;
use crate::ui::state::ScrollLock;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    portfolio: Portfolio,
    /// Directory image references are resolved against.
    asset_root: PathBuf,
    page: Page,
    scroll: ScrollLock,
    /// Resolved once at startup; `System` mode queries the desktop.
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("asset_root", &self.asset_root)
            .field("scroll_locked", &self.scroll.is_locked())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; flags are consumed only once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    /// Built-in content on the Home view, without touching the config file.
    fn default() -> Self {
        Self::from_parts(
            I18n::default(),
            Portfolio::load_or_embedded(None),
            PathBuf::from(assets::DEFAULT_ASSET_ROOT),
            ThemeMode::default(),
        )
    }
}

impl App {
    fn from_parts(
        i18n: I18n,
        portfolio: Portfolio,
        asset_root: PathBuf,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            i18n,
            portfolio,
            asset_root,
            page: Page::default(),
            scroll: ScrollLock::new(),
            theme: theme_mode.theme(),
        }
    }

    /// Initializes application state from the config file and the launcher
    /// flags. Bad config or content never prevents startup.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let content_path = flags
            .content
            .map(PathBuf::from)
            .or_else(|| config.content.path.clone());
        let portfolio = Portfolio::load_or_embedded(content_path.as_deref());
        let asset_root = assets::resolve_root(
            flags.assets.map(PathBuf::from),
            config.content.asset_root.clone(),
            content_path.as_deref(),
        );
        log::info!("Resolving images against {}", asset_root.display());

        let app = Self::from_parts(i18n, portfolio, asset_root, config.general.theme_mode);
        (app, Task::none())
    }

    /// Builds an application showing `portfolio` with images under `asset_root`.
    #[must_use]
    pub fn with_content(portfolio: Portfolio, asset_root: PathBuf) -> Self {
        Self::from_parts(I18n::default(), portfolio, asset_root, ThemeMode::default())
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.page.view_state()
    }

    /// Lightbox state; always closed outside the Projects view.
    #[must_use]
    pub fn lightbox(&self) -> LightboxState {
        self.page
            .projects()
            .map_or(LightboxState::Closed, |state| state.lightbox())
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    #[must_use]
    pub fn title(&self) -> String {
        let suffix = self.i18n.tr("window-title");
        let name = self.portfolio.profile.name.trim();
        if name.is_empty() {
            suffix
        } else {
            format!("{name} - {suffix}")
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_page_subscription(&self.page)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            page: &mut self.page,
            scroll: &self.scroll,
            portfolio: &self.portfolio,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Projects(projects_message) => {
                update::handle_projects_message(&mut ctx, projects_message)
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: &self.page,
            portfolio: &self.portfolio,
            asset_root: &self.asset_root,
            scroll_locked: self.scroll.is_locked(),
        })
    }
}
