pub mod footer;
pub mod form;
pub mod navigation;
pub mod ui;
