mod client;
mod resource;
mod trigger;

pub use client::*;
pub use resource::*;
pub use trigger::*;
