//! Command implementations.
//!
//! Every command writes its user-facing output to the given writer; logs go
//! to stderr through tracing.

pub mod cart;
pub mod demo;
pub mod menu;
pub mod order;

use resto_storefront::catalog::{CatalogError, Menu};
use resto_storefront::config::{ConfigError, StorefrontConfig};
use resto_storefront::demo::{LoyaltyError, TrackError};
use resto_storefront::print::ExportError;
use resto_storefront::session::Session;
use resto_storefront::storage::{FileStorage, StorageError};
use resto_storefront::views::{ViewKind, ViewRenderer};
use resto_storefront::StorefrontError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Dish not on the menu.
    #[error("No dish with ID {0} on the menu")]
    UnknownDish(String),
}

impl CliError {
    /// Whether the error comes from something the user typed rather than
    /// from the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::Storefront(e) => e.is_user_error(),
            Self::UnknownDish(_) => true,
            Self::Io(_) => false,
        }
    }
}

/// Module errors reach the CLI wrapped in [`StorefrontError`].
macro_rules! via_storefront {
    ($($error:ty),+ $(,)?) => {
        $(
            impl From<$error> for CliError {
                fn from(e: $error) -> Self {
                    Self::Storefront(StorefrontError::from(e))
                }
            }
        )+
    };
}

via_storefront!(
    ConfigError,
    StorageError,
    CatalogError,
    LoyaltyError,
    TrackError,
    ExportError,
    askama::Error,
);

/// Everything a command needs: configuration, storage, and the menu.
#[derive(Debug)]
pub struct App {
    pub config: StorefrontConfig,
    pub storage: FileStorage,
    pub menu: Menu,
}

impl App {
    /// Open storage and load the menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the menu
    /// cannot be loaded.
    pub fn open(config: StorefrontConfig) -> Result<Self, CliError> {
        let storage = FileStorage::open(&config.data_dir)?;
        let menu = match &config.menu_file {
            Some(path) => Menu::load(path)?,
            None => Menu::builtin()?,
        };
        Ok(Self {
            config,
            storage,
            menu,
        })
    }

    /// A session over the app's storage. The terminal shows no HTML views,
    /// so only the badge is tracked.
    #[must_use]
    pub fn session(&self) -> Session<&FileStorage> {
        Session::open(&self.storage, ViewRenderer::new(std::iter::empty::<ViewKind>()))
    }
}
