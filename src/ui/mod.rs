//! UI モジュール

mod annotation_panel;
mod viewer_panel;

pub use annotation_panel::AnnotationPanel;
pub use viewer_panel::ViewerPanel;
