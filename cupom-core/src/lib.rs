//! Core of the cupom store coupon generator.
//!
//! - `event` / `event_list`: the records an operator edits, capped at four
//! - `preset` / `policy`: category defaults and which fields each category locks
//! - `display`: the pure pipeline turning the editable list into the printed one
//! - `receipt` / `coupon`: fixed-width thermal receipt layouts
//! - `store` / `config`: persistence and user configuration

pub mod config;
pub mod coupon;
pub mod display;
pub mod error;
pub mod event;
pub mod event_list;
pub mod locale;
pub mod policy;
pub mod preset;
pub mod receipt;
pub mod store;
pub mod validate;

pub use display::derive_display_list;
pub use error::{CupomError, CupomResult};
pub use event::{Category, EventRecord, TimeFormat};
pub use event_list::{EventList, MAX_EVENTS};
