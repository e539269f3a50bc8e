// SPDX-License-Identifier: MPL-2.0
//! Fetch buttons and the opacity slider.

use crate::fetch::ImageSource;
use iced::{
    alignment::Vertical,
    widget::{button, slider, Column, Row, Space, Text},
    Element, Length,
};

#[derive(Debug, Clone)]
pub enum Message {
    /// Fetch on the UI thread, freezing the interface for the duration.
    FetchBlocking(ImageSource),
    /// Fetch on a dedicated background thread with a synchronous handoff.
    FetchBackground(ImageSource),
    /// Fetch on the shared pool with an asynchronous completion callback.
    FetchWithCallback(ImageSource),
    OpacityChanged(f32),
}

pub fn view<'a>(opacity: f32) -> Element<'a, Message> {
    let blocking_button = button(Text::new(format!(
        "{} (blocking)",
        ImageSource::Whale.label()
    )))
    .on_press(Message::FetchBlocking(ImageSource::Whale))
    .padding([6, 12]);

    let background_button = button(Text::new(format!(
        "{} (background)",
        ImageSource::Shark.label()
    )))
    .on_press(Message::FetchBackground(ImageSource::Shark))
    .padding([6, 12]);

    let callback_button = button(Text::new(format!(
        "{} (callback)",
        ImageSource::SeaLion.label()
    )))
    .on_press(Message::FetchWithCallback(ImageSource::SeaLion))
    .padding([6, 12]);

    let fetch_row = Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(blocking_button)
        .push(background_button)
        .push(callback_button);

    let opacity_label = Text::new("Opacity");
    let opacity_slider = slider(0.0..=1.0, opacity, Message::OpacityChanged)
        .step(0.01)
        .width(Length::Fixed(180.0));
    let opacity_value = Text::new(format!("{:.0}%", opacity * 100.0));

    let opacity_row = Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(opacity_label)
        .push(opacity_slider)
        .push(Space::new().width(Length::Fixed(4.0)).height(Length::Shrink))
        .push(opacity_value);

    Column::new()
        .spacing(8)
        .push(fetch_row)
        .push(opacity_row)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_view_renders() {
        let _element = view(0.5);
    }

    #[test]
    fn controls_view_renders_at_range_edges() {
        let _transparent = view(0.0);
        let _opaque = view(1.0);
    }
}
