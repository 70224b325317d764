//! Brand identity shown at the left edge of the navbar.

/// Two-segment brand label. The accent segment is styled in the brand colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub lead: &'static str,
    pub accent: &'static str,
}

pub const BRAND: Brand = Brand {
    lead: "Food",
    accent: "Dude",
};

impl Brand {
    /// Both segments joined, for window titles and accessible labels.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.lead, self.accent)
    }
}
