pub mod foldout;
pub mod image_fit;
pub mod panel;
pub mod tabs;

pub use foldout::FoldoutConfig;
pub use image_fit::{fit_rect, FitMode, HorizontalAlign, Rect, Size, VerticalAlign};
pub use panel::SidePanel;
pub use tabs::{TabState, ViewTab};
