//! Tab bar over the result views. Hidden tabs are simply not rendered.

use crate::view::tabs::{TabState, ViewTab};
use egui::Ui;

/// Renders the view tabs
#[derive(Debug, Default)]
pub struct TabsUi;

impl TabsUi {
    pub fn new() -> Self {
        Self
    }

    /// Renders the visible tabs; returns the newly activated tab, if any
    pub fn show(&self, ui: &mut Ui, tabs: &mut TabState) -> Option<ViewTab> {
        let mut activated = None;

        ui.horizontal(|ui| {
            for tab in tabs.visible_tabs() {
                let selected = tabs.active() == tab;
                if ui
                    .selectable_label(selected, tab.to_string())
                    .clicked()
                    && !selected
                    && tabs.activate(tab)
                {
                    activated = Some(tab);
                }
            }
        });

        activated
    }
}
