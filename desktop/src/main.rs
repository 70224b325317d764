#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::brand::BRAND;
use ui::components::NavBar;
use ui::theme::THEME_CSS;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");

    let resource_dir = resolve_resource_dir();
    info!(?resource_dir, "launching desktop host");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(WindowBuilder::new().with_title(window_title()))
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

fn window_title() -> String {
    format!("{} – v{}", BRAND.full_name(), env!("CARGO_PKG_VERSION"))
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Always inline the shared theme (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS}" }

        NavBar {}
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
