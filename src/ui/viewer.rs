// SPDX-License-Identifier: MPL-2.0
//! Image pane: renders the fetched bitmap at the chosen opacity, or a hint
//! while nothing has been fetched yet.

use iced::widget::image::{self, Handle};
use iced::{alignment, widget::Container, widget::Text, ContentFit, Element, Length};

pub fn view<'a, Message: 'a>(handle: Option<&Handle>, opacity: f32) -> Element<'a, Message> {
    let content: Element<'a, Message> = match handle {
        Some(handle) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .opacity(opacity)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Text::new("No image loaded yet. Pick a fetch strategy below.").into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
