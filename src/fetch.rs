// SPDX-License-Identifier: MPL-2.0
//! Remote image fetching, three ways.
//!
//! All strategies share the same parse → GET → decode → assign sequence; they
//! differ only in where the blocking work runs and how the finished bitmap is
//! handed back to the UI-owning context:
//!
//! - [`fetch_blocking`] runs everything on the calling thread and assigns
//!   directly. Called from a UI thread, it freezes the UI for the duration —
//!   which is the lesson this variant teaches.
//! - [`fetch_background`] spawns a dedicated worker thread and hands the
//!   assignment back with a blocking rendezvous.
//! - [`fetch_with_callback`] uses the shared worker pool and delivers the
//!   bitmap to a completion callback without waiting for it.

use crate::dispatch::{self, Priority, UiHandle};
use crate::display::DisplaySurface;
use crate::error::{Error, Result};
use crate::media::Bitmap;
use std::fmt;
use std::io;
use std::thread;

/// The three fixed remote images the demo fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Whale,
    Shark,
    SeaLion,
}

impl ImageSource {
    pub const ALL: [ImageSource; 3] = [ImageSource::Whale, ImageSource::Shark, ImageSource::SeaLion];

    /// Literal URL of the remote resource.
    #[must_use]
    pub const fn url(self) -> &'static str {
        match self {
            ImageSource::Whale => "https://lh3.googleusercontent.com/16zRJrj3ae3G4kCDO9CeTHj_dyhCvQsUDU0VF0nZqHPGueg9A9ykdXTc6ds0TkgoE1eaNW-SLKlVrwDDZPE=s0#w=4800&h=3567",
            ImageSource::Shark => "https://lh3.googleusercontent.com/BCoVLCGTcWErtKbD9Nx7vNKlQ0R3RDsBpOa8iA70mGW2XcC76jKS09pDX_Rad6rjyXQCxngEYi3Sy3uJgd99=s0#w=4713&h=3846",
            ImageSource::SeaLion => "https://lh3.googleusercontent.com/ibcT9pm_NEdh9jDiKnq0NGuV2yrl5UkVxu-7LbhMjnzhD84mC6hfaNlb-Ht0phXKH4TtLxi12zheyNEezA=s0#w=4626&h=3701",
        }
    }

    /// Human-readable name for buttons and diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ImageSource::Whale => "Whale",
            ImageSource::Shark => "Shark",
            ImageSource::SeaLion => "Sea lion",
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const USER_AGENT: &str = concat!("IcedReef/", env!("CARGO_PKG_VERSION"));

/// Downloads and decodes the image at `url`, blocking the calling thread.
///
/// # Errors
///
/// Returns [`Error::Url`] when `url` does not parse, and [`Error::Fetch`] for
/// network failures, non-success statuses, and undecodable payloads.
pub fn fetch_bitmap(url: &str) -> Result<Bitmap> {
    let url = reqwest::Url::parse(url).map_err(|e| Error::Url(e.to_string()))?;

    let client = reqwest::blocking::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
    }

    let bytes = response.bytes()?;
    Bitmap::from_encoded(&bytes)
}

/// Fetches `url` on the calling thread and assigns the result directly to
/// `surface`.
///
/// Failures log a diagnostic and leave the surface untouched.
pub fn fetch_blocking<S: DisplaySurface>(url: &str, surface: &mut S) {
    match fetch_bitmap(url) {
        Ok(bitmap) => surface.set_image(bitmap),
        Err(err) => log::warn!("image fetch failed: {err}"),
    }
}

/// Fetches `url` on a dedicated worker thread; on success the worker hands
/// `apply(bitmap)` to the UI context and blocks until it has run.
///
/// Failures log a diagnostic on the worker and leave the surface untouched.
/// The returned handle lets callers join the worker.
///
/// # Errors
///
/// Returns the OS error when the worker thread cannot be spawned.
pub fn fetch_background<F>(url: String, ui: UiHandle, apply: F) -> io::Result<thread::JoinHandle<()>>
where
    F: FnOnce(Bitmap) + Send + 'static,
{
    thread::Builder::new()
        .name("download".to_string())
        .spawn(move || {
            let bitmap = match fetch_bitmap(&url) {
                Ok(bitmap) => bitmap,
                Err(err) => {
                    log::warn!("image fetch failed: {err}");
                    return;
                }
            };
            ui.invoke_sync(move || apply(bitmap));
        })
}

/// Fetches `url` on the shared worker pool, tagged with `priority`, and
/// delivers the decoded bitmap to `handler` on the UI context.
///
/// The pool worker does not wait for the handler to run. A failed fetch is
/// dropped without a diagnostic; the image simply never arrives.
pub fn fetch_with_callback<F>(url: String, priority: Priority, ui: UiHandle, handler: F)
where
    F: FnOnce(Bitmap) + Send + 'static,
{
    dispatch::spawn_pooled(priority, move || {
        let Ok(bitmap) = fetch_bitmap(&url) else {
            return;
        };
        ui.invoke(move || handler(bitmap));
    });
}
