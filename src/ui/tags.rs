//! The tag strip: one colored chip per query field, an × per tag, and a
//! clear-all button. Removals feed straight back into the query state.

use crate::query::state::QueryState;
use crate::query::tags::TagStyle;
use egui::{Color32, RichText, Ui};

/// What the user did to the strip this frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagStripResponse {
    pub removed: Option<String>,
    pub cleared: bool,
}

/// Renders the tag strip
pub struct TagsUi {
    query_color: Color32,
    facet_color: Color32,
    default_color: Color32,
}

impl Default for TagsUi {
    fn default() -> Self {
        Self {
            query_color: Color32::from_rgb(51, 122, 183),
            facet_color: Color32::from_rgb(92, 184, 92),
            default_color: Color32::from_rgb(119, 119, 119),
        }
    }
}

impl TagsUi {
    pub fn new() -> Self {
        Self::default()
    }

    fn color_for(&self, style: TagStyle) -> Color32 {
        match style {
            TagStyle::Query => self.query_color,
            TagStyle::Facet => self.facet_color,
            TagStyle::Default => self.default_color,
        }
    }

    /// Renders the strip and applies any removal to `state`
    pub fn show(&self, ui: &mut Ui, state: &mut QueryState) -> TagStripResponse {
        let mut response = TagStripResponse::default();

        ui.horizontal_wrapped(|ui| {
            for tag in state.tags().to_vec() {
                let color = self.color_for(tag.style);
                let chip = ui.button(
                    RichText::new(format!("{} ×", tag.label))
                        .color(Color32::WHITE)
                        .background_color(color),
                );
                if chip.clicked() && response.removed.is_none() {
                    response.removed = Some(tag.value.clone());
                }
            }

            if !state.is_empty() && ui.button("Clear all").clicked() {
                response.cleared = true;
            }
        });

        if let Some(value) = &response.removed {
            state.remove_by_value(value);
        }
        if response.cleared {
            state.clear_all();
        }

        response
    }
}
