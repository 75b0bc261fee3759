//! Application State Module

mod app;
mod status;

pub use app::AppState;
pub use status::{StatusKind, StatusMessage};
