#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::scroll::{SectionSpan, active_section, is_scrolled};
use crate::util::theme::Theme;

/// Page chrome state: mobile menu, theme, navbar, and active nav link.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub menu_open: bool,
    pub theme: Theme,
    pub scrolled: bool,
    pub active_section: Option<String>,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Recompute scroll-derived state. The active section is only replaced
    /// when some section matches.
    pub fn apply_scroll(&mut self, scroll_y: f64, spans: &[SectionSpan]) {
        self.scrolled = is_scrolled(scroll_y);
        if let Some(id) = active_section(scroll_y, spans) {
            if self.active_section.as_deref() != Some(id) {
                self.active_section = Some(id.to_owned());
            }
        }
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }
}
