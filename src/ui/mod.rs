pub mod panel;
pub mod popup;
pub mod tabs;
pub mod tags;

pub use panel::PanelUi;
pub use popup::{Popup, PopupManager, PopupStyle};
pub use tabs::TabsUi;
pub use tags::TagsUi;
