//! Resto 2.0 CLI - order from the restaurant in a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the menu
//! resto menu --category main --price medium
//!
//! # Fill the cart
//! resto cart add 1
//! resto cart inc 1
//! resto cart show
//!
//! # Place the order and print the bill
//! resto checkout -n "Asha" -e asha@example.com -p 555-0100 --payment upi
//! resto bill --export
//! ```
//!
//! # Commands
//!
//! - `menu` - List dishes, optionally filtered
//! - `cart` - Show or change the cart
//! - `checkout` - Walk the order wizard and place the order
//! - `bill` - Show or export the bill of the last order
//! - `theme` - Show or toggle the colour theme
//! - `table scan` - Simulate scanning a table's QR code
//! - `loyalty` - Show or redeem loyalty points
//! - `track` - Simulate tracking an order

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use resto_core::{OrderType, PaymentMethod, ProductId};
use resto_storefront::catalog::PriceBand;
use resto_storefront::config::StorefrontConfig;
use resto_storefront::demo::Reward;

mod commands;

use commands::{App, CliError};

#[derive(Parser)]
#[command(name = "resto")]
#[command(author, version, about = "Resto 2.0 ordering from the terminal")]
struct Cli {
    /// Directory holding the cart, last order, and preferences
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List dishes on the menu
    Menu {
        /// Only show this category (`all` for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Match against dish name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Price band (`all`, `low`, `medium`, `high`)
        #[arg(short, long, default_value = "all")]
        price: PriceBand,

        /// Dietary tag, e.g. `vegetarian`
        #[arg(short, long)]
        dietary: Option<String>,
    },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Enter order details and place the order
    Checkout {
        /// Customer name
        #[arg(short, long)]
        name: String,

        /// Customer email
        #[arg(short, long)]
        email: String,

        /// Customer phone number
        #[arg(short, long)]
        phone: String,

        /// `dine-in`, `takeaway`, or `delivery`
        #[arg(long, default_value = "dine-in")]
        order_type: OrderType,

        /// Table for dine-in orders (defaults to the last scanned table)
        #[arg(long)]
        table: Option<String>,

        /// Delivery address
        #[arg(long)]
        address: Option<String>,

        /// `card`, `upi`, `paypal`, or `cash`
        #[arg(long, default_value = "card")]
        payment: PaymentMethod,
    },
    /// Show the bill for the last placed order
    Bill {
        /// Write a printable HTML document instead
        #[arg(long)]
        export: bool,
    },
    /// Show the colour theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Table QR codes
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Show loyalty points
    Loyalty {
        #[command(subcommand)]
        action: Option<LoyaltyAction>,
    },
    /// Track an order
    Track {
        /// Order number from the confirmation
        order_id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart (default)
    Show,
    /// Add one unit of a dish
    Add { id: String },
    /// Add one unit to a line
    Inc { id: String },
    /// Remove one unit from a line
    Dec { id: String },
    /// Remove a line
    Remove { id: String },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand)]
enum TableAction {
    /// Simulate scanning a table's QR code
    Scan,
}

#[derive(Subcommand)]
enum LoyaltyAction {
    /// Spend points on a reward
    Redeem {
        /// `appetizer`, `discount`, or `dessert`
        reward: Reward,

        /// Points the reward costs
        #[arg(long)]
        cost: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if e.is_user_error() {
            tracing::info!("Command refused: {e}");
        } else {
            tracing::error!("Command failed: {e}");
        }
        let _ = writeln!(std::io::stderr(), "error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.export_dir = dir.join("exports");
        config.data_dir = dir;
    }
    resto_storefront::telemetry::init_tracing(config.log_format);

    let app = App::open(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Menu {
            category,
            search,
            price,
            dietary,
        } => commands::menu::list(&app, category, search, price, dietary, &mut out)?,
        Commands::Cart { action } => match action.unwrap_or(CartAction::Show) {
            CartAction::Show => commands::cart::show(&app, &mut out)?,
            CartAction::Add { id } => commands::cart::add(&app, &ProductId::new(id), &mut out)?,
            CartAction::Inc { id } => {
                commands::cart::increment(&app, &ProductId::new(id), &mut out)?;
            }
            CartAction::Dec { id } => {
                commands::cart::decrement(&app, &ProductId::new(id), &mut out)?;
            }
            CartAction::Remove { id } => {
                commands::cart::remove(&app, &ProductId::new(id), &mut out)?;
            }
            CartAction::Clear => commands::cart::clear(&app, &mut out)?,
        },
        Commands::Checkout {
            name,
            email,
            phone,
            order_type,
            table,
            address,
            payment,
        } => {
            let form = commands::order::CheckoutForm {
                name,
                email,
                phone,
                order_type,
                table,
                address,
                payment,
            };
            commands::order::checkout(&app, form, &mut out)?;
        }
        Commands::Bill { export } => commands::order::bill(&app, export, &mut out)?,
        Commands::Theme { action } => match action {
            None => commands::demo::show_theme(&app, &mut out)?,
            Some(ThemeAction::Toggle) => commands::demo::toggle_theme(&app, &mut out)?,
        },
        Commands::Table {
            action: TableAction::Scan,
        } => commands::demo::scan_table(&app, &mut out)?,
        Commands::Loyalty { action } => match action {
            None => commands::demo::show_points(&app, &mut out)?,
            Some(LoyaltyAction::Redeem { reward, cost }) => {
                commands::demo::redeem(&app, reward, cost, &mut out)?;
            }
        },
        Commands::Track { order_id } => commands::demo::track(&order_id, &mut out)?,
    }
    Ok(())
}
