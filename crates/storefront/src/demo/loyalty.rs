//! Simulated loyalty points.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::storage::{Storage, StorageError, StorageExt, keys};

/// Balance shown to a visitor who has never redeemed anything.
pub const STARTING_POINTS: u32 = 1250;

/// Errors raised while redeeming a reward.
#[derive(Debug, Error)]
pub enum LoyaltyError {
    #[error("Insufficient points for this reward.")]
    InsufficientPoints { balance: u32, cost: u32 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Rewards on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    Appetizer,
    Discount,
    Dessert,
}

impl Reward {
    /// Confirmation shown after a successful redemption.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Appetizer => "Free appetizer voucher added to your account!",
            Self::Discount => "₹200 discount voucher added to your account!",
            Self::Dessert => "Free dessert voucher added to your account!",
        }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Appetizer => write!(f, "appetizer"),
            Self::Discount => write!(f, "discount"),
            Self::Dessert => write!(f, "dessert"),
        }
    }
}

impl FromStr for Reward {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appetizer" => Ok(Self::Appetizer),
            "discount" => Ok(Self::Discount),
            "dessert" => Ok(Self::Dessert),
            _ => Err(format!("invalid reward: {s}")),
        }
    }
}

/// Point balance persisted in storage.
#[derive(Debug)]
pub struct LoyaltyAccount<S> {
    storage: S,
}

impl<S: Storage> LoyaltyAccount<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current balance; [`STARTING_POINTS`] until something is redeemed.
    #[must_use]
    pub fn points(&self) -> u32 {
        match self.storage.load_json::<u32>(keys::USER_POINTS) {
            Ok(points) => points.unwrap_or(STARTING_POINTS),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable loyalty balance");
                STARTING_POINTS
            }
        }
    }

    /// Spend `cost` points on `reward`, returning the new balance.
    ///
    /// # Errors
    ///
    /// [`LoyaltyError::InsufficientPoints`] if the balance is below `cost`;
    /// the balance is left untouched.
    pub fn redeem(&self, reward: Reward, cost: u32) -> Result<u32, LoyaltyError> {
        let balance = self.points();
        let Some(remaining) = balance.checked_sub(cost) else {
            return Err(LoyaltyError::InsufficientPoints { balance, cost });
        };
        self.storage.save_json(keys::USER_POINTS, &remaining)?;
        tracing::info!(%reward, cost, remaining, "Reward redeemed");
        Ok(remaining)
    }
}
