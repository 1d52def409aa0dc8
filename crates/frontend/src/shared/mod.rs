pub mod charts;
pub mod clipboard;
pub mod components;
pub mod icons;
pub mod modal_frame;
pub mod navigation;
pub mod theme;
pub mod toast;
