pub mod address;
pub mod controls;
pub mod navigation;
pub mod slide;
