pub mod footer;
pub mod header;
pub mod logo;
pub mod mobile_nav;
pub mod navigation;
pub mod theme_toggle;
pub mod toaster;
