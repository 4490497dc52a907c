mod gui;
mod dictionary;
mod history;
mod models;

use iced::{window, Size};

fn main() -> iced::Result {
    iced::application(
        "word2ipa - Word to IPA Transcriber",
        gui::Word2ipaApp::update,
        gui::Word2ipaApp::view,
    )
    .window(window::Settings {
        size: Size::new(980.0, 640.0),
        resizable: true,
        ..window::Settings::default()
    })
    .run_with(gui::Word2ipaApp::new)
}
