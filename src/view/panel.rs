//! The collapsible side panel (toggle button, Escape closes).

use crate::events::KeyCode;

/// State of the slide-out side panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidePanel {
    pub open: bool,
}

impl SidePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the panel and returns the new open state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handles a key-up. Escape closes an open panel; returns whether
    /// the state changed so the caller can re-render.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        if key == KeyCode::Escape && self.open {
            self.open = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut panel = SidePanel::new();
        assert!(panel.toggle());
        assert!(panel.open);
        assert!(!panel.toggle());
        assert!(!panel.open);
    }

    #[test]
    fn test_escape_closes_open_panel() {
        let mut panel = SidePanel::new();
        panel.toggle();
        assert!(panel.handle_key(KeyCode::Escape));
        assert!(!panel.open);
    }

    #[test]
    fn test_escape_on_closed_panel_changes_nothing() {
        let mut panel = SidePanel::new();
        assert!(!panel.handle_key(KeyCode::Escape));
        assert!(!panel.handle_key(KeyCode::Enter));
    }
}
