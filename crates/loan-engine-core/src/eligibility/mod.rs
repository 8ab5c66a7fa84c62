pub mod capacity;
pub mod classify;
