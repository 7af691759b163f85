//! Decoder configuration
//!
//! Controls how forgiving the constant pool decoder is towards questionable input. The
//! defaults are strict; the lenient preset exists for tooling that would rather show a
//! damaged string than refuse the whole class file.

/// Configuration for constant pool decoding
///
/// Structural checks (known tags, complete records, index ranges, variant types, cycles) are
/// always performed and cannot be disabled; a pool that fails them has no meaningful
/// interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum nesting of on-demand resolution (default: 16)
    ///
    /// The deepest chain a well-formed pool can contain is `Methodref -> Class -> Utf8`, so
    /// anything close to this limit already indicates corruption.
    pub max_resolution_depth: usize,

    /// Reject `Utf8` records that are not valid modified UTF-8 (default: true)
    ///
    /// When disabled, such records are decoded lossily with replacement characters and a
    /// warning is logged.
    pub strict_strings: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_resolution_depth: 16,
            strict_strings: true,
        }
    }
}

impl DecoderConfig {
    /// Creates the strict configuration (same as [`DecoderConfig::default`])
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Creates a configuration that tolerates undecodable string records
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict_strings: false,
            ..Self::default()
        }
    }
}
