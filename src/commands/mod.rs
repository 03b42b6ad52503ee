pub mod config;
pub mod event;
pub mod events;
pub mod presets;
pub mod preview;
pub mod print;
pub mod store;
