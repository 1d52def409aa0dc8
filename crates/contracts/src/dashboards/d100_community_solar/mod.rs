pub mod dto;
pub mod sample;

pub use dto::*;
