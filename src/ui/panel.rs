//! The slide-out side panel and its toggle button.

use crate::events::KeyCode;
use crate::view::panel::SidePanel;
use egui::Ui;

/// Renders the side panel toggle and contents
#[derive(Debug, Default)]
pub struct PanelUi;

impl PanelUi {
    pub fn new() -> Self {
        Self
    }

    /// Renders the toggle button and wires Escape; returns whether the
    /// open state changed this frame.
    pub fn show(
        &self,
        ui: &mut Ui,
        panel: &mut SidePanel,
        add_contents: impl FnOnce(&mut Ui),
    ) -> bool {
        let mut changed = false;

        if ui.button("Facets").clicked() {
            panel.toggle();
            changed = true;
        }

        if ui.input(|i| i.key_released(egui::Key::Escape)) && panel.handle_key(KeyCode::Escape) {
            changed = true;
        }

        if panel.open {
            egui::SidePanel::right("search-side-panel")
                .resizable(false)
                .show(ui.ctx(), |ui| {
                    add_contents(ui);
                });
        }

        changed
    }
}
