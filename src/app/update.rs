// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Button handlers kick off one of the three fetch strategies; the tick
//! handler is the run loop of the UI-owning context, executing whatever
//! assignments the workers marshaled over since the last tick.

use super::{App, Message};
use crate::dispatch::Priority;
use crate::display::DisplaySurface;
use crate::fetch;
use crate::ui::controls;
use iced::Task;

pub(super) fn handle_controls(app: &mut App, message: controls::Message) -> Task<Message> {
    match message {
        controls::Message::FetchBlocking(source) => {
            // Runs on the Iced update thread: the whole interface freezes for
            // the full network + decode duration.
            if let Ok(mut surface) = app.surface.lock() {
                fetch::fetch_blocking(source.url(), &mut *surface);
            }
            app.refresh_image();
            Task::none()
        }
        controls::Message::FetchBackground(source) => {
            let surface = app.surface.clone();
            let spawned =
                fetch::fetch_background(source.url().to_string(), app.ui.clone(), move |bitmap| {
                    if let Ok(mut surface) = surface.lock() {
                        surface.set_image(bitmap);
                    }
                });
            if let Err(err) = spawned {
                log::warn!("could not spawn download thread for {source}: {err}");
            }
            Task::none()
        }
        controls::Message::FetchWithCallback(source) => {
            let surface = app.surface.clone();
            fetch::fetch_with_callback(
                source.url().to_string(),
                Priority::UserInitiated,
                app.ui.clone(),
                move |bitmap| {
                    if let Ok(mut surface) = surface.lock() {
                        surface.set_image(bitmap);
                    }
                },
            );
            Task::none()
        }
        controls::Message::OpacityChanged(value) => {
            app.opacity = value;
            if let Ok(mut surface) = app.surface.lock() {
                surface.set_opacity(value);
            }
            Task::none()
        }
    }
}

pub(super) fn handle_tick(app: &mut App) -> Task<Message> {
    app.jobs.drain();
    app.refresh_image();
    Task::none()
}
