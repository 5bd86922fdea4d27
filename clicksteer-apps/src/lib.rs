#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]

mod config;
mod directory_frame_source;
mod error;
mod image_file_display;
mod json_lines_publisher;
mod stdin_pointer_input;
pub mod utils;

pub use crate::{
    config::*, directory_frame_source::*, error::*, image_file_display::*,
    json_lines_publisher::*, stdin_pointer_input::*,
};
