//! Demo feature simulators.
//!
//! None of these talk to a real data source. They fabricate plausible
//! outcomes so the site's table scanning, loyalty, and tracking screens have
//! something to show. Nothing in the cart or order flow depends on them,
//! apart from the scanned table being offered as the dine-in table.

pub mod loyalty;
pub mod table;
pub mod tracker;

pub use loyalty::{LoyaltyAccount, LoyaltyError, Reward};
pub use table::{TableInfo, scan_table};
pub use tracker::{StepState, TrackError, TrackingSnapshot, track_order};
