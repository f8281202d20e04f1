//! Menu catalog.
//!
//! The catalog is the product source for the cart: [`MenuItem`] supplies the
//! `(product id, name, unit price)` triple that [`CartStore::add`] takes.
//!
//! [`CartStore::add`]: crate::cart::CartStore::add

use std::fs;
use std::path::Path;
use std::str::FromStr;

use resto_core::{Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Menu shipped with the site.
const BUILTIN_MENU: &str = include_str!("../data/menu.json");

/// Errors raised while loading a menu.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid menu JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_available() -> bool {
    true
}

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Dietary tags such as `vegetarian` or `vegan`.
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Price band offered by the menu's price filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBand {
    #[default]
    Any,
    /// At most 10.
    Low,
    /// Above 10, at most 20.
    Medium,
    /// Above 20.
    High,
}

impl PriceBand {
    /// Whether `price` falls in this band.
    #[must_use]
    pub fn contains(self, price: Price) -> bool {
        let amount = price.amount();
        let ten = Decimal::from(10);
        let twenty = Decimal::from(20);
        match self {
            Self::Any => true,
            Self::Low => amount <= ten,
            Self::Medium => amount > ten && amount <= twenty,
            Self::High => amount > twenty,
        }
    }
}

impl FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::Any),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("invalid price range: {s}")),
        }
    }
}

/// Combined menu filters. Every set criterion must match.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    /// Category to show; `None` or `"all"` shows every category.
    pub category: Option<String>,
    /// Case-insensitive text matched against name and description.
    pub search: Option<String>,
    pub price: PriceBand,
    /// Dietary tag that must be present; `None` or `"all"` skips the check.
    pub dietary: Option<String>,
}

impl MenuFilter {
    /// Whether `item` passes every criterion.
    #[must_use]
    pub fn matches(&self, item: &MenuItem) -> bool {
        if !item.available {
            return false;
        }

        let category_ok = match self.category.as_deref() {
            None | Some("all") => true,
            Some(category) => item.category == category,
        };

        let search_ok = self.search.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();
            item.name.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term)
        });

        let dietary_ok = match self.dietary.as_deref() {
            None | Some("all") => true,
            Some(tag) => item.dietary.iter().any(|t| t == tag),
        };

        category_ok && search_ok && self.price.contains(item.price) && dietary_ok
    }
}

/// The restaurant menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu from items.
    #[must_use]
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The menu shipped with the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded menu is not valid JSON.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(BUILTIN_MENU)?))
    }

    /// Load a menu from a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let menu = Self::new(serde_json::from_str(&raw)?);
        tracing::info!(path = %path.display(), items = menu.items.len(), "Menu loaded");
        Ok(menu)
    }

    /// All items, available or not.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an available item by ID.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id && item.available)
    }

    /// Items passing `filter`, in menu order.
    #[must_use]
    pub fn filter(&self, filter: &MenuFilter) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }
}
