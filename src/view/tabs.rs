//! The three result views and their tab state.
//!
//! Once the backend reports that the current query has no geo results,
//! the grid and geo tabs are hidden for the rest of the session; no
//! later refresh brings them back.

use crate::prelude::HashSet;

/// One of the switchable result views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTab {
    List,
    Grid,
    Geo,
}

impl std::fmt::Display for ViewTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Grid => "grid",
            Self::Geo => "geo",
        };
        f.write_str(name)
    }
}

/// Active tab plus the sticky set of hidden tabs
#[derive(Debug, Clone)]
pub struct TabState {
    active: ViewTab,
    hidden: HashSet<ViewTab>,
    /// Set when the geo tab is activated for the first time, so the map
    /// knows to run its initial refresh
    geo_needs_refresh: bool,
}

impl Default for TabState {
    fn default() -> Self {
        Self {
            active: ViewTab::List,
            hidden: HashSet::default(),
            geo_needs_refresh: false,
        }
    }
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ViewTab {
        self.active
    }

    pub fn is_visible(&self, tab: ViewTab) -> bool {
        !self.hidden.contains(&tab)
    }

    /// Activates a tab. Hidden tabs cannot be activated; returns whether
    /// activation happened.
    pub fn activate(&mut self, tab: ViewTab) -> bool {
        if self.hidden.contains(&tab) {
            return false;
        }
        if tab == ViewTab::Geo && self.active != ViewTab::Geo {
            self.geo_needs_refresh = true;
        }
        self.active = tab;
        true
    }

    /// Hides the grid and geo tabs for the rest of the session. The grid
    /// view is hidden alongside geo because it has become redundant.
    pub fn hide_geo_views(&mut self) {
        self.hidden.insert(ViewTab::Grid);
        self.hidden.insert(ViewTab::Geo);
        if self.hidden.contains(&self.active) {
            self.active = ViewTab::List;
        }
    }

    /// Consumes the "geo tab was just opened" flag
    pub fn take_geo_refresh(&mut self) -> bool {
        std::mem::take(&mut self.geo_needs_refresh)
    }

    /// Tabs currently shown, in display order
    pub fn visible_tabs(&self) -> Vec<ViewTab> {
        [ViewTab::List, ViewTab::Grid, ViewTab::Geo]
            .into_iter()
            .filter(|tab| self.is_visible(*tab))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let tabs = TabState::new();
        assert_eq!(tabs.active(), ViewTab::List);
        assert_eq!(tabs.visible_tabs().len(), 3);
    }

    #[test]
    fn test_hide_geo_views_is_sticky() {
        let mut tabs = TabState::new();
        tabs.hide_geo_views();

        assert!(!tabs.is_visible(ViewTab::Geo));
        assert!(!tabs.is_visible(ViewTab::Grid));
        assert!(tabs.is_visible(ViewTab::List));

        // Hidden tabs refuse activation.
        assert!(!tabs.activate(ViewTab::Geo));
        assert_eq!(tabs.active(), ViewTab::List);
    }

    #[test]
    fn test_hiding_the_active_tab_falls_back_to_list() {
        let mut tabs = TabState::new();
        assert!(tabs.activate(ViewTab::Grid));
        tabs.hide_geo_views();
        assert_eq!(tabs.active(), ViewTab::List);
    }

    #[test]
    fn test_first_geo_activation_requests_refresh() {
        let mut tabs = TabState::new();
        assert!(tabs.activate(ViewTab::Geo));
        assert!(tabs.take_geo_refresh());
        // Re-activating the already active geo tab does not re-request.
        assert!(tabs.activate(ViewTab::Geo));
        assert!(!tabs.take_geo_refresh());
    }
}
