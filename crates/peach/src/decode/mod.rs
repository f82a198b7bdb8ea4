pub mod context;
pub mod rules;

use crate::error::Result;
use crate::options::DecodeOptions;
use crate::value::Value;

use self::context::Context;

/// Decode a complete JSON document with default options.
pub fn decode(input: &str) -> Result<Value> {
    decode_with_options(input, &DecodeOptions::default())
}

/// Decode a complete JSON document. The whole input must be consumed;
/// trailing non-whitespace content is an error.
pub fn decode_with_options(input: &str, options: &DecodeOptions) -> Result<Value> {
    let mut ctx = Context::new(input, options);
    rules::root(&mut ctx)
}
