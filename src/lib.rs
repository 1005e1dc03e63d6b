#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]

extern crate alloc;

pub mod collections;
pub mod errors;
