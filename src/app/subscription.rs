// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The periodic tick is the UI-owning context's run loop: it drains the jobs
//! workers marshaled over and keeps the viewer in sync with the shared
//! surface. It stays active for the whole application lifetime — a worker may
//! hand an assignment over at any moment.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval at which queued UI jobs are drained.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the periodic tick subscription.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}
