// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::{controls, viewer};
use iced::widget::Column;
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let viewer = viewer::view(app.image.as_ref(), app.opacity);
    let controls = controls::view(app.opacity).map(Message::Controls);

    Column::new()
        .spacing(12)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(viewer)
        .push(controls)
        .into()
}
