//! PersonaEditorCMD GUI - Main entry point
//!
//! Sets up application-level logging and launches the iced event loop.
//! All persistent state (the executable path, dialog directories) lives in
//! the core crate's config manager, loaded by `App::new`.

use iced::window;
use iced::Size;

use peg_core::logging::{self, LogLevel};

mod app;
mod handlers;
mod pages;
mod theme;

use app::App;

fn main() -> iced::Result {
    logging::init_tracing(LogLevel::Info);

    tracing::info!("PersonaEditorCMD GUI starting");
    tracing::info!("Core version: {}", peg_core::version());

    iced::application(App::new, App::update, App::view)
        .title("PersonaEditorCMD GUI")
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(850.0, 850.0),
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .run()
}
