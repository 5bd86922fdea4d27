#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]

mod annotator;
mod click_handler;
mod config;
mod error;
mod frame_ingest;
mod node;
mod policy;
mod selection;
mod velocity_scheduler;

pub use crate::{
    annotator::*, click_handler::*, config::*, error::*, frame_ingest::*, node::*, policy::*,
    selection::*, velocity_scheduler::*,
};
