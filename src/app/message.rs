// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::ui::controls;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded button and slider messages.
    Controls(controls::Message),
    /// Periodic pump: drains marshaled UI jobs and refreshes the viewer.
    Tick(Instant),
}
