mod app;
mod data;
mod error;
mod logging;
mod navigation;
mod session;
mod ui;
mod view_model;

use adw::prelude::*;
use adw::Application;

fn main() {
    logging::init(log::LevelFilter::Info);
    let settings = app::AppSettings::load();
    log::set_max_level(settings.log_filter());

    let app = Application::builder()
        .application_id("com.example.FinraLinkGtk")
        .build();
    app.connect_activate(move |app| {
        crate::app::build_ui(app, &settings);
    });
    app.run();
}
