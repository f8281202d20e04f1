//! Checkout and bill commands.

use std::io::Write;

use resto_core::{OrderType, PaymentMethod, TableId};
use resto_storefront::bill::BillRenderer;
use resto_storefront::order::CustomerDetails;
use resto_storefront::print::{BILL_TITLE, HtmlDocumentExporter, PrintExporter};
use resto_storefront::views::text;

use super::{App, CliError};

/// Order details as entered on the command line.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub order_type: OrderType,
    pub table: Option<String>,
    pub address: Option<String>,
    pub payment: PaymentMethod,
}

impl From<CheckoutForm> for CustomerDetails {
    fn from(form: CheckoutForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            order_type: form.order_type,
            table: form.table.map(TableId::new),
            delivery_address: form.address,
        }
    }
}

/// Walk the wizard from the cart to a placed order, then print the
/// confirmation and the bill.
pub fn checkout(app: &App, form: CheckoutForm, out: &mut impl Write) -> Result<(), CliError> {
    let payment = form.payment;
    let mut session = app.session();
    session.proceed_to_details()?;
    session.submit_details(form.into())?;
    let order = session.place_order(payment)?;
    write!(out, "{}", text::render_confirmation(&order)?)?;
    writeln!(out)?;
    write!(out, "{}", BillRenderer::new(&app.storage).render_text()?)?;
    Ok(())
}

/// Print the bill of the last order, or export it as a printable page.
pub fn bill(app: &App, export: bool, out: &mut impl Write) -> Result<(), CliError> {
    let renderer = BillRenderer::new(&app.storage);
    if export {
        let exporter = HtmlDocumentExporter::new(app.config.bill_export_path());
        let path = exporter.export(&renderer.render_html()?, BILL_TITLE)?;
        writeln!(out, "Bill written to {}", path.display())?;
        return Ok(());
    }

    let bill = renderer.render_text()?;
    if bill.is_empty() {
        writeln!(out, "No order details found.")?;
    } else {
        write!(out, "{bill}")?;
    }
    Ok(())
}
