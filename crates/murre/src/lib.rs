#![doc = include_str!("../README.md")]

mod components;
pub mod date;
pub mod html;

pub use components::*;
