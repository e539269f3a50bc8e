// SPDX-License-Identifier: MPL-2.0
use iced_reef::app;

fn main() -> iced::Result {
    env_logger::init();
    app::run()
}
