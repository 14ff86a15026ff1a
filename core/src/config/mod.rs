pub mod loop_settings;
pub mod settings;
pub mod tunables;
