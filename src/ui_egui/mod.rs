mod app;
pub mod date_multiselect;
pub mod theme;

pub use app::MultiselectApp;
