//! Error types for the flash driver and the configuration store.

use core::fmt;

/// Errors reported while programming or erasing flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// The controller raised an error flag (write protection, alignment, programming a non-erased word, ...).
    Hardware,

    /// The controller stayed busy for longer than any legitimate operation takes.
    Timeout,
}

impl fmt::Display for FlashError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlashError::Hardware => write!(f, "flash controller reported an error"),
            FlashError::Timeout => write!(f, "flash controller stayed busy"),
        }
    }
}

/// Errors reported by the configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The current page is full and every other page in the pool is in use.
    NoFreePage,

    /// A flash operation failed.
    Flash(FlashError),

    /// The savers passed in don't match the ones registered when the store was built.
    LayoutMismatch,

    /// More savers were registered than the store can track.
    TooManySavers,

    /// The header plus all registered settings don't fit in a block, or a block doesn't fit in a page.
    BlockTooLarge,

    /// The page pool is larger than the store can track.
    PoolTooLarge,
}

// Allow ergonomic `?` propagation from flash errors.
impl From<FlashError> for ConfigError {
    fn from(error: FlashError) -> Self {
        ConfigError::Flash(error)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::NoFreePage => write!(f, "no free flash page for the configuration"),
            ConfigError::Flash(e) => write!(f, "flash error: {}", e),
            ConfigError::LayoutMismatch => write!(f, "settings don't match the registered layout"),
            ConfigError::TooManySavers => write!(f, "too many settings savers registered"),
            ConfigError::BlockTooLarge => write!(f, "configuration block too large"),
            ConfigError::PoolTooLarge => write!(f, "too many pages in the configuration pool"),
        }
    }
}
