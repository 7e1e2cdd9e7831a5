//! Data Transfer Objects (DTOs) for API requests and responses

pub mod booking;
pub mod common;
pub mod room;

pub use booking::*;
pub use common::*;
pub use room::*;
