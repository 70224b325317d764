//! Stylesheets embedded at compile time.
//!
//! Hosts inline `THEME_CSS` so packaged builds never depend on an external file.
//! `NAVBAR_CSS_INLINE` mirrors the bundled navbar asset for release native builds.

pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

pub const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));
