use crate::brand::BRAND;
use crate::i18n::{self};
use crate::t;
use crate::theme::NAVBAR_CSS_INLINE;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

// Navbar stylesheet, bundled as an asset and inlined in release native builds.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Message ids of the static navigation labels, in display order.
pub const NAV_LABEL_KEYS: [&str; 2] = ["nav-home", "nav-recipes"];

/// Localized navigation labels in display order (`Home`, `Recipes` in the fallback locale).
///
/// Lookups go through `t!` so the ids are checked against the fallback FTL at compile time.
/// Reads whatever language the loader currently holds; callers run `i18n::init` first.
pub fn nav_labels() -> [String; 2] {
    [t!("nav-home"), t!("nav-recipes")]
}

/// Top navigation bar: brand, static labels and the profile placeholder.
///
/// Takes no props and holds no state. The stylesheet is attached through the
/// document head so the bar renders the same in every host.
#[component]
pub fn NavBar() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        NavBarLayout {}
    }
}

/// Markup of the navbar without any head elements.
#[component]
pub fn NavBarLayout() -> Element {
    i18n::init();

    let labels = nav_labels();
    let profile_label = t!("nav-profile-placeholder");
    let brand_name = BRAND.full_name();
    let brand_lead = BRAND.lead;
    let brand_accent = BRAND.accent;

    debug!(?labels, "NavBar render");

    rsx! {
        header { id: "navbar", class: "navbar",
            // Brand
            div { class: "navbar__brand", aria_label: "{brand_name}",
                span { class: "navbar__brand-lead", "{brand_lead}" }
                span { class: "navbar__brand-accent", "{brand_accent}" }
            }

            // Static labels (no routing)
            nav { class: "navbar__links",
                for label in labels {
                    span { key: "{label}", class: "navbar__label", "{label}" }
                }
            }

            // Profile placeholder
            div {
                class: "navbar__avatar",
                "role": "img",
                aria_label: "{profile_label}",
            }
        }
    }
}
