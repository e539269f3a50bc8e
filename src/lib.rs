// SPDX-License-Identifier: MPL-2.0
//! `iced_reef` is an instructional image-fetching demo built with the Iced
//! GUI framework.
//!
//! It contrasts three dispatch strategies for downloading a remote image —
//! blocking on the UI thread, a dedicated background thread with a
//! synchronous handoff, and a shared worker pool with an asynchronous
//! completion callback — and displays the result at a slider-controlled
//! opacity.
//!
//! The fetch core ([`fetch`], [`dispatch`], [`display`], [`media`]) has no
//! dependency on Iced; [`app`] and [`ui`] adapt it to the toolkit.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod fetch;
pub mod media;
pub mod ui;
