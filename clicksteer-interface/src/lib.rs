#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]

mod clients;
mod error;
mod messages;
mod traits;

pub use clients::*;
pub use error::*;
pub use messages::*;
pub use traits::*;

// re-export
pub use async_trait::async_trait;
pub use image::{Rgb, RgbImage};
