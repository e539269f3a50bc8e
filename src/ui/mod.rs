// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`viewer`] - Image pane rendering the fetched bitmap at the chosen opacity
//! - [`controls`] - Fetch buttons and the opacity slider

pub mod controls;
pub mod viewer;
