#![doc = include_str!("../README.md")]

pub mod decode;
pub mod error;
pub mod options;
pub mod time;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use crate::decode::{decode, decode_with_options};
pub use crate::error::{Error, Result};
pub use crate::options::DecodeOptions;
pub use crate::value::{Number, Value};
