// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the shared display surface, the marshaling channel
//! workers use to reach the UI context, and the cached Iced image handle the
//! viewer renders. The update loop is the UI-owning context: every surface
//! mutation either happens directly inside a message handler or is queued by
//! a worker and drained here on the periodic tick.

mod message;
mod subscription;
mod update;
mod view;

pub use message::Message;

use crate::config::{self, Config};
use crate::dispatch::{self, UiHandle, UiReceiver};
use crate::display::{self, DisplaySurface, SharedSurface};
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Root Iced application state.
pub struct App {
    /// Surface the fetch strategies assign into, always from this context.
    surface: SharedSurface,
    /// Handle workers use to marshal assignments back onto this context.
    ui: UiHandle,
    /// Queued assignment jobs, drained on every tick.
    jobs: UiReceiver,
    /// Cached Iced handle for the surface's current bitmap.
    image: Option<Handle>,
    /// Surface revision `image` was built from.
    image_revision: u64,
    /// Current slider position.
    opacity: f32,
}

/// Builds the window settings, honoring config overrides.
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config.window_width.unwrap_or(WINDOW_DEFAULT_WIDTH) as f32,
            config.window_height.unwrap_or(WINDOW_DEFAULT_HEIGHT) as f32,
        ),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    let config = config::load().unwrap_or_else(|err| {
        log::warn!("could not load settings, using defaults: {err}");
        Config::default()
    });

    let window = window_settings(&config);
    let boot = move || App::new(&config);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        App::new(&Config::default()).0
    }
}

impl App {
    /// Initializes application state from the loaded configuration.
    fn new(config: &Config) -> (Self, Task<Message>) {
        let surface = display::shared_surface();
        let (ui, jobs) = dispatch::ui_channel();

        let opacity = config
            .initial_opacity
            .unwrap_or(config::DEFAULT_OPACITY)
            .clamp(0.0, 1.0);
        if let Ok(mut surface) = surface.lock() {
            surface.set_opacity(opacity);
        }

        let app = App {
            surface,
            ui,
            jobs,
            image: None,
            image_revision: 0,
            opacity,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("IcedReef")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(controls_message) => {
                update::handle_controls(self, controls_message)
            }
            Message::Tick(_instant) => update::handle_tick(self),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Rebuilds the cached Iced handle when the surface holds a newer bitmap.
    fn refresh_image(&mut self) {
        let Ok(surface) = self.surface.lock() else {
            return;
        };
        if surface.revision() == self.image_revision {
            return;
        }
        self.image_revision = surface.revision();
        self.image = surface.bitmap().map(|bitmap| {
            Handle::from_rgba(bitmap.width(), bitmap.height(), bitmap.rgba_bytes().to_vec())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Bitmap;
    use crate::ui::controls;
    use std::time::Instant;

    #[test]
    fn new_starts_without_an_image() {
        let app = App::default();
        assert!(app.image.is_none());
        assert_eq!(app.opacity, 1.0);
        assert!(app.surface.lock().unwrap().bitmap().is_none());
    }

    #[test]
    fn initial_opacity_comes_from_config_and_clamps() {
        let config = Config {
            initial_opacity: Some(2.5),
            ..Config::default()
        };
        let (app, _task) = App::new(&config);
        assert_eq!(app.opacity, 1.0);
        assert_eq!(app.surface.lock().unwrap().opacity(), 1.0);
    }

    #[test]
    fn opacity_message_updates_app_and_surface() {
        let mut app = App::default();
        let _ = app.update(Message::Controls(controls::Message::OpacityChanged(0.3)));
        assert_eq!(app.opacity, 0.3);
        assert_eq!(app.surface.lock().unwrap().opacity(), 0.3);
    }

    #[test]
    fn tick_drains_marshaled_jobs_and_refreshes_viewer() {
        let mut app = App::default();

        let surface = app.surface.clone();
        app.ui.invoke(move || {
            if let Ok(mut surface) = surface.lock() {
                surface.set_image(Bitmap::from_rgba(2, 2, vec![255; 16]));
            }
        });
        assert!(app.image.is_none());

        let _ = app.update(Message::Tick(Instant::now()));

        assert!(app.image.is_some());
        assert_eq!(app.image_revision, 1);
    }

    #[test]
    fn refresh_image_is_a_no_op_without_new_revisions() {
        let mut app = App::default();
        app.refresh_image();
        assert!(app.image.is_none());
        assert_eq!(app.image_revision, 0);
    }

    #[test]
    fn window_settings_honor_config_overrides() {
        let config = Config {
            window_width: Some(1024),
            window_height: Some(768),
            ..Config::default()
        };
        let settings = window_settings(&config);
        assert_eq!(settings.size.width, 1024.0);
        assert_eq!(settings.size.height, 768.0);
    }
}
