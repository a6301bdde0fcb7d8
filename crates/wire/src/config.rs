//! Encoder configuration
//!
//! ```
//! use costwire_wire::EncodeConfig;
//!
//! let config = EncodeConfig::new().without_derived_fields();
//! assert!(!config.derived_fields());
//! ```

/// Options for the encode side
///
/// Decoding has no options: the required/optional field policy is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    derived_fields: bool,
}

impl EncodeConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the derived display fields (`minutes`, `bytes`, `cpuCores`,
    /// `ramBytes`)
    ///
    /// On by default. Decoders ignore these fields, so turning them off never
    /// changes what a round trip reconstructs.
    pub fn derived_fields(&self) -> bool {
        self.derived_fields
    }

    /// Set whether derived display fields are emitted
    pub fn with_derived_fields(mut self, enabled: bool) -> Self {
        self.derived_fields = enabled;
        self
    }

    /// Leave derived display fields out
    pub fn without_derived_fields(self) -> Self {
        self.with_derived_fields(false)
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            derived_fields: true,
        }
    }
}
