mod client;
mod error;
mod fan_out;
mod legs;

pub use client::*;
pub use error::*;
pub use fan_out::*;
pub use legs::*;
