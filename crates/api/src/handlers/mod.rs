pub mod classify;
pub mod not_found;
