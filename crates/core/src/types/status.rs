//! Status enums for the order flow and site preferences.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Step of the order wizard.
///
/// Steps are strictly linear: `Cart -> Details -> Payment -> Confirmation`.
/// `Confirmation` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStep {
    #[default]
    Cart,
    Details,
    Payment,
    Confirmation,
}

impl OrderStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 4] = [Self::Cart, Self::Details, Self::Payment, Self::Confirmation];

    /// Zero-based position of the step in the wizard.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Cart => 0,
            Self::Details => 1,
            Self::Payment => 2,
            Self::Confirmation => 3,
        }
    }

    /// Heading shown in the step indicator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cart => "Cart",
            Self::Details => "Details",
            Self::Payment => "Payment",
            Self::Confirmation => "Confirmation",
        }
    }
}

impl fmt::Display for OrderStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    #[default]
    DineIn,
    Takeaway,
    Delivery,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DineIn => write!(f, "dine-in"),
            Self::Takeaway => write!(f, "takeaway"),
            Self::Delivery => write!(f, "delivery"),
        }
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dine-in" => Ok(Self::DineIn),
            "takeaway" => Ok(Self::Takeaway),
            "delivery" => Ok(Self::Delivery),
            _ => Err(format!("invalid order type: {s}")),
        }
    }
}

/// Payment method picked on the payment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Paypal,
    Cash,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Upi => write!(f, "upi"),
            Self::Paypal => write!(f, "paypal"),
            Self::Cash => write!(f, "cash"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "upi" => Ok(Self::Upi),
            "paypal" => Ok(Self::Paypal),
            "cash" => Ok(Self::Cash),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Site colour theme.
///
/// Persisted as the bare strings `"dark"` and `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme: {s}")),
        }
    }
}

/// Delivery progress shown by the order tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingStatus {
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl TrackingStatus {
    /// All statuses in progress order.
    pub const ALL: [Self; 4] = [
        Self::Confirmed,
        Self::Preparing,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// Zero-based position in the progress bar.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Confirmed => 0,
            Self::Preparing => 1,
            Self::OutForDelivery => 2,
            Self::Delivered => 3,
        }
    }

    /// Estimated remaining time, as shown under the progress bar.
    #[must_use]
    pub const fn estimate(self) -> &'static str {
        match self {
            Self::Confirmed => "Estimated delivery: 25-30 minutes",
            Self::Preparing => "Estimated delivery: 20-25 minutes",
            Self::OutForDelivery => "Estimated delivery: 15-20 minutes",
            Self::Delivered => "Delivered!",
        }
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Preparing => write!(f, "preparing"),
            Self::OutForDelivery => write!(f, "out-for-delivery"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_serializes_as_bare_string() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_order_type_parse_and_display_agree() {
        for kind in [OrderType::DineIn, OrderType::Takeaway, OrderType::Delivery] {
            assert_eq!(kind.to_string().parse::<OrderType>().unwrap(), kind);
        }
        assert!("drive-thru".parse::<OrderType>().is_err());
        assert_eq!(
            serde_json::to_string(&OrderType::DineIn).unwrap(),
            "\"dine-in\""
        );
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("upi".parse::<PaymentMethod>().unwrap(), PaymentMethod::Upi);
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_steps_are_ordered() {
        assert!(OrderStep::Cart < OrderStep::Details);
        assert!(OrderStep::Payment < OrderStep::Confirmation);
        for (i, step) in OrderStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn test_tracking_estimates() {
        assert_eq!(TrackingStatus::Delivered.estimate(), "Delivered!");
        assert_eq!(
            TrackingStatus::Confirmed.estimate(),
            "Estimated delivery: 25-30 minutes"
        );
        assert_eq!(TrackingStatus::OutForDelivery.to_string(), "out-for-delivery");
    }
}
