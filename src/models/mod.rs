// Module exports for models

pub mod control;
pub mod selection;
pub mod settings;
