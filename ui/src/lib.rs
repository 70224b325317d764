//! Shared UI crate for FoodDude. The navbar, its stylesheet and label text live here.

pub mod brand;
pub mod i18n;
pub mod theme;

pub mod components {
    // Top navigation bar (components/nav_bar.rs)
    pub mod nav_bar;
    pub use nav_bar::NavBar;
    pub use nav_bar::NavBarLayout;
}

#[cfg(test)]
mod tests;
