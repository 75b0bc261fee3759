pub mod app_reducer;
pub mod session_reducer;
