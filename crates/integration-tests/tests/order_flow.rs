//! Cart to confirmation through file-backed storage.

#![allow(clippy::unwrap_used)]

use resto_core::{OrderNumber, OrderStep, OrderType, PaymentMethod, Price, ProductId, TableId};
use resto_integration_tests::{TestContext, customer, line, order_date};
use resto_storefront::cart::{CartStore, LineItem};
use resto_storefront::order::{CustomerDetails, PlacedItem, PlacedOrder};
use resto_storefront::storage::{Storage, StorageExt, keys};
use resto_storefront::wizard::WizardError;
use resto_storefront::StorefrontError;

#[test]
fn test_cart_is_restored_by_a_new_session() {
    let ctx = TestContext::new().unwrap();
    {
        let mut menu = ctx.menu_page();
        menu.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
        menu.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
        menu.add(ProductId::new("B"), "Dish B", Price::whole(50)).unwrap();
    }

    let order = ctx.order_page();
    assert_eq!(
        order.cart().items(),
        [line("A", "Dish A", 100, 2), line("B", "Dish B", 50, 1)]
    );
    let totals = order.cart().totals();
    assert_eq!(totals.subtotal, Price::whole(250));
    assert_eq!(totals.tax, Price::whole(25));
    assert_eq!(totals.total, Price::whole(275));

    let views = order.render().unwrap();
    assert_eq!(views.badge, 3);
    assert!(views.order_cart.unwrap().contains("₹275"));
    assert!(views.payment_summary.unwrap().contains("₹25"));
}

#[test]
fn test_corrupt_snapshot_starts_empty() {
    let ctx = TestContext::new().unwrap();
    ctx.storage.set(keys::CART, "[{\"id\": \"A\"").unwrap();
    let cart = CartStore::load(&ctx.storage);
    assert!(cart.is_empty());
    assert!(cart.totals().total.is_zero());
}

#[test]
fn test_full_order_placement() {
    let ctx = TestContext::new().unwrap();
    let mut session = ctx.order_page();
    session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
    let before: Vec<LineItem> = session.cart().items().to_vec();

    session.proceed_to_details().unwrap();
    session.submit_details(customer()).unwrap();
    let order = session
        .place_order_at(PaymentMethod::Card, OrderNumber::new(654_321), order_date())
        .unwrap();

    assert_eq!(session.step(), OrderStep::Confirmation);
    assert!(ctx.storage.get(keys::CART).unwrap().is_none());
    assert!(CartStore::load(&ctx.storage).is_empty());

    let stored: PlacedOrder = ctx.storage.load_json(keys::LAST_ORDER).unwrap().unwrap();
    assert_eq!(stored, order);
    assert_eq!(
        stored.items,
        before.iter().map(PlacedItem::from).collect::<Vec<_>>()
    );
    assert_eq!(stored.customer_name, "Asha Rao");
    assert_eq!(stored.date, "October 16, 2026");
    assert_eq!(stored.total, Price::whole(110));

    // The confirmed cart now renders as empty.
    let views = session.render().unwrap();
    assert_eq!(views.badge, 0);
    assert!(views.order_cart.unwrap().contains("Your cart is empty."));
}

#[test]
fn test_missing_phone_changes_nothing() {
    let ctx = TestContext::new().unwrap();
    let mut session = ctx.order_page();
    session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
    session.proceed_to_details().unwrap();
    let snapshot = ctx.storage.get(keys::CART).unwrap();

    let result = session.submit_details(CustomerDetails::new("Asha", "asha@example.com", ""));
    assert!(matches!(
        result,
        Err(StorefrontError::Wizard(WizardError::Validation(_)))
    ));
    assert_eq!(session.step(), OrderStep::Details);
    assert_eq!(ctx.storage.get(keys::CART).unwrap(), snapshot);
    assert!(ctx.storage.get(keys::LAST_ORDER).unwrap().is_none());
}

#[test]
fn test_back_and_forth_keeps_cart() {
    let ctx = TestContext::new().unwrap();
    let mut session = ctx.order_page();
    session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
    session.proceed_to_details().unwrap();
    session.submit_details(customer()).unwrap();
    assert_eq!(session.back().unwrap(), OrderStep::Details);
    assert_eq!(session.back().unwrap(), OrderStep::Cart);
    assert_eq!(session.cart().item_count(), 1);
}

#[test]
fn test_delivery_order_drops_table() {
    let ctx = TestContext::new().unwrap();
    let mut session = ctx.order_page();
    session.add(ProductId::new("A"), "Dish A", Price::whole(100)).unwrap();
    session.proceed_to_details().unwrap();
    session
        .submit_details(CustomerDetails {
            order_type: OrderType::Delivery,
            table: Some(TableId::new("4")),
            delivery_address: Some("12 MG Road".to_string()),
            ..customer()
        })
        .unwrap();
    let order = session
        .place_order_at(PaymentMethod::Paypal, OrderNumber::new(100_000), order_date())
        .unwrap();
    assert_eq!(order.order_type, Some(OrderType::Delivery));
    assert!(order.table.is_none());
}
