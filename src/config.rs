//! Per-call configuration of the encode/decode engine.

// -----------------------------------------------------------------------------
// ByteArrayMode

/// Textual encoding applied to byte-sequence properties.
///
/// The binary representation always carries the raw bytes and uses this mode
/// only to pick the semantic tag; the textual representation carries the
/// encoded string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteArrayMode {
    /// Standard base64 alphabet, with padding.
    #[default]
    Base64,
    /// URL-safe base64 alphabet, without padding.
    Base64url,
    /// Lowercase hexadecimal.
    Hex,
}

// -----------------------------------------------------------------------------
// ValidationFlags

bitflags::bitflags! {
    /// Decode-time strictness flags.
    ///
    /// Both flags are independent; the default is fully lenient.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ValidationFlags: u8 {
        /// Fail when the incoming map carries keys no declared property consumes.
        const NO_EXTRA = 1 << 0;
        /// Fail when a declared property has no incoming value.
        const NO_MISSING = 1 << 1;
    }
}

impl ValidationFlags {
    /// Both strictness flags at once.
    pub const STRICT: Self = Self::NO_EXTRA.union(Self::NO_MISSING);
}

// -----------------------------------------------------------------------------
// Configuration

/// Immutable options for one encode or decode call.
///
/// # Examples
///
/// ```
/// use tagtree::{ByteArrayMode, Configuration, ValidationFlags};
///
/// let config = Configuration::new()
///     .with_enum_as_string(true)
///     .with_byte_array_mode(ByteArrayMode::Hex)
///     .with_validation(ValidationFlags::STRICT);
///
/// assert!(config.enum_as_string);
/// assert!(config.validation.contains(ValidationFlags::NO_MISSING));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Configuration {
    /// Ignore the per-property `persisted` flag and include every property.
    pub ignore_persisted: bool,
    /// Encode enums as their name(s) instead of the raw integer.
    pub enum_as_string: bool,
    /// Textual encoding and binary tag selection for byte sequences.
    pub byte_array_mode: ByteArrayMode,
    /// Decode-time strictness.
    pub validation: ValidationFlags,
}

impl Configuration {
    /// Creates the default configuration: lenient validation, integer enums,
    /// standard base64.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ignore_persisted: false,
            enum_as_string: false,
            byte_array_mode: ByteArrayMode::Base64,
            validation: ValidationFlags::empty(),
        }
    }

    /// Returns the configuration with `ignore_persisted` replaced.
    #[inline]
    pub const fn with_ignore_persisted(mut self, ignore_persisted: bool) -> Self {
        self.ignore_persisted = ignore_persisted;
        self
    }

    /// Returns the configuration with `enum_as_string` replaced.
    #[inline]
    pub const fn with_enum_as_string(mut self, enum_as_string: bool) -> Self {
        self.enum_as_string = enum_as_string;
        self
    }

    /// Returns the configuration with `byte_array_mode` replaced.
    #[inline]
    pub const fn with_byte_array_mode(mut self, mode: ByteArrayMode) -> Self {
        self.byte_array_mode = mode;
        self
    }

    /// Returns the configuration with `validation` replaced.
    #[inline]
    pub const fn with_validation(mut self, validation: ValidationFlags) -> Self {
        self.validation = validation;
        self
    }
}

// -----------------------------------------------------------------------------
// Tests
