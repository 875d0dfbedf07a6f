//! Configuration for the FURL parser.

/// Length of a TubID in every FURL issued so far.
pub const DEFAULT_TUB_ID_LENGTH: usize = 32;

/// Configuration for [`FurlParser`](crate::FurlParser).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Exact number of base32 characters a TubID must have.
    pub tub_id_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            tub_id_length: DEFAULT_TUB_ID_LENGTH,
        }
    }
}

impl ParserConfig {
    /// Create a configuration with the given TubID length.
    pub fn new(tub_id_length: usize) -> Self {
        Self { tub_id_length }
    }

    /// Override the TubID length.
    pub fn with_tub_id_length(mut self, tub_id_length: usize) -> Self {
        self.tub_id_length = tub_id_length;
        self
    }

    /// Configuration accepting only the identifiers produced by current peers.
    pub fn strict() -> Self {
        Self::default()
    }
}
