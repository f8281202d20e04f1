//! Bills read back from stored orders.

#![allow(clippy::unwrap_used)]

use resto_core::{OrderNumber, PaymentMethod, Price, ProductId};
use resto_integration_tests::{TestContext, customer, order_date};
use resto_storefront::bill::{BillRenderer, NO_ITEMS_MESSAGE};
use resto_storefront::print::{BILL_TITLE, ExportError, HtmlDocumentExporter, PrintExporter};
use resto_storefront::storage::{Storage, keys};

#[test]
fn test_no_order_renders_empty() {
    let ctx = TestContext::new().unwrap();
    let renderer = BillRenderer::new(&ctx.storage);
    assert!(renderer.load().is_none());
    assert_eq!(renderer.render_html().unwrap(), "");
    assert_eq!(renderer.render_text().unwrap(), "");
}

#[test]
fn test_bill_matches_placed_order_not_live_cart() {
    let ctx = TestContext::new().unwrap();
    let mut session = ctx.order_page();
    session.add(ProductId::new("1"), "Butter Chicken", Price::whole(350)).unwrap();
    session.add(ProductId::new("6"), "Samosa", Price::whole(100)).unwrap();
    session.add(ProductId::new("6"), "Samosa", Price::whole(100)).unwrap();
    session.proceed_to_details().unwrap();
    session.submit_details(customer()).unwrap();
    session
        .place_order_at(PaymentMethod::Upi, OrderNumber::new(482_913), order_date())
        .unwrap();

    // A new cart started after the order must not leak into the bill.
    let mut next = ctx.menu_page();
    next.add(ProductId::new("11"), "Kulfi", Price::whole(130)).unwrap();

    let bill = BillRenderer::new(&ctx.storage).load().unwrap();
    assert_eq!(bill.order_number, OrderNumber::new(482_913));
    assert_eq!(bill.rows.len(), 2);
    assert_eq!(bill.rows[1].name, "Samosa");
    assert_eq!(bill.rows[1].line_total, "₹200");
    assert_eq!(bill.subtotal, "₹550");
    assert_eq!(bill.tax, "₹55");
    assert_eq!(bill.total, "₹605");
    assert!(!bill.rows.iter().any(|row| row.name == "Kulfi"));
}

#[test]
fn test_partially_malformed_order() {
    let ctx = TestContext::new().unwrap();
    ctx.storage
        .set(
            keys::LAST_ORDER,
            r#"{"orderNumber": 111111, "date": "October 16, 2026", "customerName": "Asha",
                "items": [{"name": "Samosa"}, {"name": "Kulfi", "quantity": 1, "price": 130}],
                "subtotal": 130, "tax": 13, "total": 143}"#,
        )
        .unwrap();
    let text = BillRenderer::new(&ctx.storage).render_text().unwrap();
    assert!(text.contains("Kulfi"));
    assert!(!text.contains("Samosa"));
    assert!(text.contains("₹143"));
}

#[test]
fn test_order_without_items_shows_placeholder() {
    let ctx = TestContext::new().unwrap();
    ctx.storage
        .set(
            keys::LAST_ORDER,
            r#"{"orderNumber": 222222, "date": "October 16, 2026", "customerName": "Asha",
                "items": [null, 7], "subtotal": 0, "tax": 0, "total": 0}"#,
        )
        .unwrap();
    let html = BillRenderer::new(&ctx.storage).render_html().unwrap();
    assert!(html.contains(NO_ITEMS_MESSAGE));
    assert!(html.contains("222222"));
}

#[test]
fn test_printable_export() {
    let ctx = TestContext::new().unwrap();
    let mut session = ctx.order_page();
    session.add(ProductId::new("4"), "Masala Chai", Price::whole(80)).unwrap();
    session.proceed_to_details().unwrap();
    session.submit_details(customer()).unwrap();
    session
        .place_order_at(PaymentMethod::Cash, OrderNumber::new(333_333), order_date())
        .unwrap();

    let markup = BillRenderer::new(&ctx.storage).render_html().unwrap();
    let exporter = HtmlDocumentExporter::new(ctx.dir().join("exports").join("bill.html"));
    let path = exporter.export(&markup, BILL_TITLE).unwrap();
    let document = std::fs::read_to_string(path).unwrap();
    assert!(document.contains("<title>Bill - Resto 2.0</title>"));
    assert!(document.contains("Masala Chai"));
    assert!(document.contains("window.print()"));
}

#[test]
fn test_export_refuses_empty_markup() {
    let ctx = TestContext::new().unwrap();
    let exporter = HtmlDocumentExporter::new(ctx.dir().join("bill.html"));
    assert!(matches!(exporter.export("", BILL_TITLE), Err(ExportError::Empty)));
}
