//! Cart & order session.
//!
//! [`Session`] ties the cart, the view renderer, and the order wizard
//! together so that every cart mutation is followed by a full re-render in
//! the same call. No caller ever sees views computed from a half-updated
//! cart.

use chrono::NaiveDate;
use resto_core::{OrderNumber, OrderStep, OrderType, PaymentMethod, Price, ProductId};
use tracing::instrument;

use crate::cart::CartStore;
use crate::catalog::MenuItem;
use crate::demo::TableInfo;
use crate::error::Result;
use crate::order::{CustomerDetails, ORDER_DATE_FORMAT, PlacedOrder};
use crate::storage::{Storage, StorageExt, keys};
use crate::views::{CartView, RenderedViews, ViewRenderer};
use crate::wizard::OrderWizard;

/// One visitor's cart and order flow.
#[derive(Debug)]
pub struct Session<S> {
    cart: CartStore<S>,
    wizard: OrderWizard,
    renderer: ViewRenderer,
}

impl<S: Storage> Session<S> {
    /// Start a session, restoring the cart from `storage`.
    pub fn open(storage: S, renderer: ViewRenderer) -> Self {
        Self {
            cart: CartStore::load(storage),
            wizard: OrderWizard::new(),
            renderer,
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    #[must_use]
    pub const fn wizard(&self) -> &OrderWizard {
        &self.wizard
    }

    #[must_use]
    pub const fn step(&self) -> OrderStep {
        self.wizard.step()
    }

    /// View model of the current cart.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::project(self.cart.items(), &self.cart.totals())
    }

    /// Render every visible view from the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn render(&self) -> Result<RenderedViews> {
        Ok(self.renderer.render(&self.cart_view())?)
    }

    /// Add one unit of a product and re-render.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted or rendered.
    #[instrument(skip(self, name), fields(product_id = %id))]
    pub fn add(&mut self, id: ProductId, name: impl Into<String>, unit_price: Price) -> Result<RenderedViews> {
        self.cart.add(id, name, unit_price)?;
        self.render()
    }

    /// Add one unit of a menu dish and re-render.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted or rendered.
    pub fn add_menu_item(&mut self, item: &MenuItem) -> Result<RenderedViews> {
        self.add(item.id.clone(), item.name.clone(), item.price)
    }

    /// Add one unit to an existing line and re-render.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted or rendered.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn increment(&mut self, id: &ProductId) -> Result<RenderedViews> {
        self.cart.increment(id)?;
        self.render()
    }

    /// Remove one unit from a line and re-render.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted or rendered.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn decrement(&mut self, id: &ProductId) -> Result<RenderedViews> {
        self.cart.decrement(id)?;
        self.render()
    }

    /// Delete a line and re-render.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted or rendered.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove(&mut self, id: &ProductId) -> Result<RenderedViews> {
        self.cart.remove(id)?;
        self.render()
    }

    /// Empty the cart and re-render.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be erased or the views rendered.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<RenderedViews> {
        self.cart.clear()?;
        self.render()
    }

    /// `Cart -> Details`.
    ///
    /// # Errors
    ///
    /// Returns a wizard error if the cart is empty or the step is wrong.
    pub fn proceed_to_details(&mut self) -> Result<()> {
        self.wizard.proceed_to_details(self.cart.is_empty())?;
        Ok(())
    }

    /// `Details -> Payment`.
    ///
    /// A dine-in order without a table picks up the last scanned table.
    ///
    /// # Errors
    ///
    /// Returns a wizard error if a required field is empty or the step is wrong.
    pub fn submit_details(&mut self, mut details: CustomerDetails) -> Result<()> {
        if details.order_type == OrderType::DineIn && details.table.is_none() {
            details.table = TableInfo::current(self.cart.storage()).map(|table| table.id());
        }
        self.wizard.proceed_to_payment(details)?;
        Ok(())
    }

    /// Step the wizard back once.
    ///
    /// # Errors
    ///
    /// Returns a wizard error on the cart and confirmation steps.
    pub fn back(&mut self) -> Result<OrderStep> {
        Ok(self.wizard.back()?)
    }

    /// Place the order with a fresh order number and today's date.
    ///
    /// # Errors
    ///
    /// See [`Session::place_order_at`].
    pub fn place_order(&mut self, payment_method: PaymentMethod) -> Result<PlacedOrder> {
        let today = chrono::Local::now().date_naive();
        self.place_order_at(payment_method, OrderNumber::generate(), today)
    }

    /// `Payment -> Confirmation`.
    ///
    /// Snapshots the live cart into a [`PlacedOrder`], persists it under
    /// `lastOrder`, then clears the cart. The wizard only advances once both
    /// writes have succeeded.
    ///
    /// # Errors
    ///
    /// Returns a wizard error if not on the payment step, or a storage error
    /// if the snapshot cannot be saved or the cart cleared.
    #[instrument(skip(self), fields(order_number = %order_number))]
    pub fn place_order_at(
        &mut self,
        payment_method: PaymentMethod,
        order_number: OrderNumber,
        date: NaiveDate,
    ) -> Result<PlacedOrder> {
        let details = self.wizard.ready_to_place()?;
        let order = PlacedOrder::snapshot(
            order_number,
            date.format(ORDER_DATE_FORMAT).to_string(),
            details,
            payment_method,
            self.cart.items(),
        );

        self.cart.storage().save_json(keys::LAST_ORDER, &order)?;
        self.cart.clear()?;
        self.wizard.confirm()?;

        tracing::info!(
            items = order.items.len(),
            total = %order.total,
            "Order placed"
        );
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use resto_core::TableId;

    use super::*;
    use crate::error::StorefrontError;
    use crate::order::ValidationError;
    use crate::storage::MemoryStorage;
    use crate::views::ViewKind;
    use crate::wizard::WizardError;

    fn session(storage: &MemoryStorage) -> Session<MemoryStorage> {
        Session::open(
            storage.clone(),
            ViewRenderer::new([ViewKind::CartPopup, ViewKind::OrderCart]),
        )
    }

    fn details() -> CustomerDetails {
        CustomerDetails::new("Asha", "asha@example.com", "555-0100")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_mutation_returns_fresh_views() {
        let storage = MemoryStorage::new();
        let mut session = session(&storage);
        let views = session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
        assert_eq!(views.badge, 1);
        assert!(views.cart_popup.unwrap().contains("Dish A"));

        let views = session.increment(&ProductId::new("A")).unwrap();
        assert_eq!(views.badge, 2);
        let views = session.decrement(&ProductId::new("A")).unwrap();
        assert_eq!(views.badge, 1);
        let views = session.remove(&ProductId::new("A")).unwrap();
        assert_eq!(views.badge, 0);
    }

    #[test]
    fn test_place_order_snapshots_and_clears() {
        let storage = MemoryStorage::new();
        let mut session = session(&storage);
        session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
        session.proceed_to_details().unwrap();
        session.submit_details(details()).unwrap();

        let order = session
            .place_order_at(PaymentMethod::Card, OrderNumber::new(123_456), date())
            .unwrap();

        assert_eq!(order.date, "October 16, 2026");
        assert_eq!(order.total, Price::whole(110));
        assert!(session.cart().is_empty());
        assert!(storage.get(keys::CART).unwrap().is_none());
        assert_eq!(session.step(), OrderStep::Confirmation);

        let stored: PlacedOrder = storage.load_json(keys::LAST_ORDER).unwrap().unwrap();
        assert_eq!(stored, order);
    }

    #[test]
    fn test_invalid_details_change_nothing() {
        let storage = MemoryStorage::new();
        let mut session = session(&storage);
        session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
        session.proceed_to_details().unwrap();
        let before = storage.get(keys::CART).unwrap();

        let err = session
            .submit_details(CustomerDetails::new("", "asha@example.com", "555-0100"))
            .unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Wizard(WizardError::Validation(ValidationError { .. }))
        ));
        assert_eq!(session.step(), OrderStep::Details);
        assert_eq!(storage.get(keys::CART).unwrap(), before);
        assert!(storage.get(keys::LAST_ORDER).unwrap().is_none());
    }

    #[test]
    fn test_empty_cart_cannot_start_checkout() {
        let storage = MemoryStorage::new();
        let mut session = session(&storage);
        assert!(matches!(
            session.proceed_to_details(),
            Err(StorefrontError::Wizard(WizardError::EmptyCart))
        ));
    }

    #[test]
    fn test_dine_in_uses_scanned_table() {
        let storage = MemoryStorage::new();
        let table = crate::demo::scan_table(&storage).unwrap();
        let mut session = session(&storage);
        session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
        session.proceed_to_details().unwrap();
        session.submit_details(details()).unwrap();
        let order = session
            .place_order_at(PaymentMethod::Cash, OrderNumber::new(100_000), date())
            .unwrap();
        assert_eq!(order.table, Some(table.id()));
    }

    #[test]
    fn test_explicit_table_wins() {
        let storage = MemoryStorage::new();
        crate::demo::scan_table(&storage).unwrap();
        let mut session = session(&storage);
        session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
        session.proceed_to_details().unwrap();
        session
            .submit_details(CustomerDetails {
                table: Some(TableId::new("T-21")),
                ..details()
            })
            .unwrap();
        assert_eq!(
            session.wizard().details().unwrap().table,
            Some(TableId::new("T-21"))
        );
    }

    #[test]
    fn test_place_order_requires_payment_step() {
        let storage = MemoryStorage::new();
        let mut session = session(&storage);
        session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
        assert!(
            session
                .place_order_at(PaymentMethod::Card, OrderNumber::new(100_000), date())
                .is_err()
        );
        assert!(!session.cart().is_empty());
        assert!(storage.get(keys::LAST_ORDER).unwrap().is_none());
    }
}
