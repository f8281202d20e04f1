//! Customer details and placed-order snapshots.

use resto_core::{OrderNumber, OrderTotals, OrderType, PaymentMethod, Price, TableId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::LineItem;

/// Date format used on the confirmation page and the bill ("October 16, 2026").
pub const ORDER_DATE_FORMAT: &str = "%B %-d, %Y";

/// A required order-detail field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Phone,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// Customer details failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields.")]
pub struct ValidationError {
    /// Fields that were empty, in form order.
    pub missing: Vec<RequiredField>,
}

/// Contents of the order-details form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub order_type: OrderType,
    #[serde(default)]
    pub table: Option<TableId>,
    #[serde(default)]
    pub delivery_address: Option<String>,
}

impl CustomerDetails {
    /// Details with only the required fields filled in.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Check that name, email, and phone are all filled in.
    ///
    /// Whitespace-only values count as empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every empty field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
            (RequiredField::Phone, &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "price")]
    pub unit_price: Price,
}

impl From<&LineItem> for PlacedItem {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

/// Immutable snapshot of an order at the moment it was confirmed.
///
/// Persisted under [`keys::LAST_ORDER`](crate::storage::keys::LAST_ORDER)
/// and read back by the bill renderer, independently of the live cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub order_number: OrderNumber,
    pub date: String,
    pub customer_name: String,
    pub items: Vec<PlacedItem>,
    pub subtotal: Price,
    pub tax: Price,
    pub total: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableId>,
}

impl PlacedOrder {
    /// Snapshot the given cart lines for a customer.
    #[must_use]
    pub fn snapshot(
        order_number: OrderNumber,
        date: String,
        details: &CustomerDetails,
        payment_method: PaymentMethod,
        items: &[LineItem],
    ) -> Self {
        let OrderTotals {
            subtotal,
            tax,
            total,
        } = OrderTotals::from_lines(items.iter().map(|item| (item.unit_price, item.quantity)))
            .unwrap_or_default();

        let table = match details.order_type {
            OrderType::DineIn => details.table.clone(),
            OrderType::Takeaway | OrderType::Delivery => None,
        };

        Self {
            order_number,
            date,
            customer_name: details.name.trim().to_string(),
            items: items.iter().map(PlacedItem::from).collect(),
            subtotal,
            tax,
            total,
            order_type: Some(details.order_type),
            payment_method: Some(payment_method),
            table,
        }
    }

    /// Totals recorded at placement.
    #[must_use]
    pub const fn totals(&self) -> OrderTotals {
        OrderTotals {
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use resto_core::ProductId;

    use super::*;

    #[test]
    fn test_validate_reports_each_missing_field() {
        let details = CustomerDetails::new("Asha", "", "   ");
        let err = details.validate().unwrap_err();
        assert_eq!(err.missing, vec![RequiredField::Email, RequiredField::Phone]);
        assert_eq!(err.to_string(), "Please fill in all required fields.");
    }

    #[test]
    fn test_validate_accepts_complete_details() {
        assert!(CustomerDetails::new("Asha", "asha@example.com", "555-0100")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_snapshot_copies_lines_and_totals() {
        let items = vec![LineItem {
            id: ProductId::new("A"),
            name: "Dish A".to_string(),
            unit_price: Price::whole(100),
            quantity: 1,
        }];
        let details = CustomerDetails::new("Asha", "asha@example.com", "555-0100");
        let order = PlacedOrder::snapshot(
            OrderNumber::new(123_456),
            "October 16, 2026".to_string(),
            &details,
            PaymentMethod::Cash,
            &items,
        );

        assert_eq!(order.items, vec![PlacedItem::from(&items[0])]);
        assert_eq!(order.subtotal, Price::whole(100));
        assert_eq!(order.tax, Price::whole(10));
        assert_eq!(order.total, Price::whole(110));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let details = CustomerDetails {
            order_type: OrderType::Takeaway,
            table: Some(TableId::new("7")),
            ..CustomerDetails::new("Asha", "a@b.c", "1")
        };
        let order = PlacedOrder::snapshot(
            OrderNumber::new(100_000),
            "January 1, 2026".to_string(),
            &details,
            PaymentMethod::Upi,
            &[],
        );
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderNumber"], 100_000);
        assert_eq!(json["customerName"], "Asha");
        assert_eq!(json["orderType"], "takeaway");
        assert!(json.get("table").is_none());
    }
}
