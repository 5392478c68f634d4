#![doc = include_str!("../README.md")]

pub mod calendar;
pub mod clock;
pub mod convert;
mod error;
pub mod temporal;
pub mod when;

pub use error::Error;

/// Shortcut of [`core::result::Result<T, Error>`].
pub type Result<T> = core::result::Result<T, Error>;
