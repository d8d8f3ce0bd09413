//! Input data model for the scoring engines.
//!
//! Both engines operate on caller-owned immutable snapshots of these records;
//! nothing in this module is mutated after construction. Wire names follow
//! the camelCase JSON the data source emits, and the classification enums
//! decode unknown strings to neutral fallbacks so every downstream operation
//! stays total.

mod product;
mod snapshot;
mod user;

pub use product::{Product, ProductType, RiskLevel};
pub use snapshot::{load_snapshot, parse_snapshot_str, PortfolioSnapshot};
pub use user::{Holding, RiskAppetite, UserProfile};
