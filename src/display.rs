// SPDX-License-Identifier: MPL-2.0
//! The display-surface capability the fetch strategies target.
//!
//! Keeping the surface behind a trait means the fetch and dispatch layers
//! have no compile-time dependency on Iced; the application and the tests
//! both drive the same [`SurfaceState`].

use crate::media::Bitmap;
use std::sync::{Arc, Mutex};

/// Something that can show a bitmap at an adjustable opacity.
pub trait DisplaySurface {
    /// Replaces the displayed image. Last write wins.
    fn set_image(&mut self, bitmap: Bitmap);

    /// Sets the display opacity; values outside `[0.0, 1.0]` are clamped.
    fn set_opacity(&mut self, opacity: f32);
}

/// The application's surface: the current bitmap, its opacity, and a revision
/// counter so the UI layer can detect new images without comparing pixels.
#[derive(Debug)]
pub struct SurfaceState {
    bitmap: Option<Bitmap>,
    opacity: f32,
    revision: u64,
}

impl SurfaceState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bitmap: None,
            opacity: 1.0,
            revision: 0,
        }
    }

    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Increases every time a new image is assigned.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for SurfaceState {
    fn set_image(&mut self, bitmap: Bitmap) {
        self.bitmap = Some(bitmap);
        self.revision += 1;
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

/// Surface shared between the UI context and marshaled assignment jobs.
///
/// The mutex satisfies the compiler, not a locking discipline: every mutation
/// is funneled onto the UI-owning context, so concurrent assignments resolve
/// to whichever job ran last.
pub type SharedSurface = Arc<Mutex<SurfaceState>>;

/// Creates the shared surface the app and its fetch callbacks mutate.
#[must_use]
pub fn shared_surface() -> SharedSurface {
    Arc::new(Mutex::new(SurfaceState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_empty_and_opaque() {
        let surface = SurfaceState::new();
        assert!(surface.bitmap().is_none());
        assert_eq!(surface.opacity(), 1.0);
        assert_eq!(surface.revision(), 0);
    }

    #[test]
    fn set_image_bumps_revision() {
        let mut surface = SurfaceState::new();
        surface.set_image(Bitmap::from_rgba(1, 1, vec![0; 4]));
        surface.set_image(Bitmap::from_rgba(1, 1, vec![255; 4]));
        assert_eq!(surface.revision(), 2);
        assert_eq!(surface.bitmap().unwrap().rgba_bytes(), &[255, 255, 255, 255]);
    }

    #[test]
    fn opacity_is_clamped_to_unit_range() {
        let mut surface = SurfaceState::new();
        surface.set_opacity(1.5);
        assert_eq!(surface.opacity(), 1.0);
        surface.set_opacity(-0.25);
        assert_eq!(surface.opacity(), 0.0);
        surface.set_opacity(0.4);
        assert_eq!(surface.opacity(), 0.4);
    }
}
