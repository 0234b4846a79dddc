// src/process/mod.rs
pub mod frame;

pub use frame::{concat, missing_columns, parse_frame, write_frame, Frame};
