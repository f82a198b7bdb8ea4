/// Decoder options.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Decode integer literals whose magnitude exceeds the signed 32-bit
    /// range to their exact source digit string instead of a number.
    /// Preserves precision for identifiers that do not fit a double.
    pub bigint_as_string: bool,
}
