pub mod config;
pub mod discover;
pub mod enumerate;
pub mod error;
pub mod normalize;
pub mod output;

pub use crate::enumerate::{enumerate, Enumeration};
pub use crate::error::SubhunterError;
