//! Placeholders for profile and project images that fail to load.

#[cfg(test)]
#[path = "image_fallback_test.rs"]
mod image_fallback_test;

/// Background of the initials block that replaces a broken profile photo.
pub const PROFILE_GRADIENT: &str = "linear-gradient(135deg, #0066ff, #3385ff)";

/// Icon centred over a broken project screenshot.
pub const PROJECT_ICON_CLASS: &str = "fas fa-laptop-code";

pub const PROJECT_GRADIENTS: [&str; 6] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    "linear-gradient(135deg, #30cfd0 0%, #330867 100%)",
];

/// One-way latch recording that an image has fallen back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageFallback {
    failed: bool,
}

impl ImageFallback {
    /// Record a load failure. Returns `true` only for the first one, which is
    /// when the placeholder gets inserted.
    pub fn fail(&mut self) -> bool {
        let first = !self.failed;
        self.failed = true;
        first
    }

    #[must_use]
    pub fn failed(self) -> bool {
        self.failed
    }
}

/// Whether an image had already failed before its `error` listener existed.
///
/// Server-rendered images start loading before hydration, so a broken one can
/// fire `error` early. The browser reports such an image as complete with no
/// intrinsic width.
#[must_use]
pub fn failed_at_mount(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

/// Gradient for the project card at `index`.
#[must_use]
pub fn project_gradient(index: usize) -> &'static str {
    PROJECT_GRADIENTS[index % PROJECT_GRADIENTS.len()]
}

/// Upper-cased first letters of the first two words of `name`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
