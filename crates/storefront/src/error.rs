//! Unified error handling.
//!
//! Each module owns a precise error enum; [`StorefrontError`] gathers them
//! for callers that drive the whole storefront, such as the CLI.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::demo::{LoyaltyError, TrackError};
use crate::print::ExportError;
use crate::storage::StorageError;
use crate::wizard::WizardError;

/// Storefront-level error type.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Menu error: {0}")]
    Catalog(#[from] CatalogError),

    /// Wizard refusals carry user-facing messages; shown as-is.
    #[error("{0}")]
    Wizard(#[from] WizardError),

    #[error("{0}")]
    Loyalty(#[from] LoyaltyError),

    #[error("{0}")]
    Track(#[from] TrackError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl StorefrontError {
    /// Whether the error comes from something the user typed rather than
    /// from the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Wizard(_)
                | Self::Track(_)
                | Self::Loyalty(LoyaltyError::InsufficientPoints { .. })
        )
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
