#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

pub mod button;
pub mod clock;
pub mod config;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod flash;
pub mod io;
pub mod lfo;
pub mod routing;
pub mod trig;
mod lookup_tables;
mod phase_accumulator;
mod utils;
