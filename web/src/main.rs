use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::NavBar;
use ui::theme::THEME_CSS;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Style { "{THEME_CSS}" }

        NavBar {}
    }
}
