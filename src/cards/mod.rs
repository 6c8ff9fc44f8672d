//! Card system: static catalog, lookup, and instances.
//!
//! ## Key Types
//!
//! - `DishKind` / `StoreKind` / `VisitorKind`: closed card kinds
//! - `DishType` / `StoreType` / `VisitorType`: their static definitions
//! - `CardCatalog`: lookup and per-session supply construction
//! - `StoreInstance` / `DishInstance`: runtime card state
//!
//! Visitors never need an instance type: a visitor card carries no state of
//! its own, so piles hold `VisitorKind` directly.

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{DishKind, DishType, StoreKind, StoreType, VisitorKind, VisitorType};
pub use instance::{CardId, DishInstance, StoreInstance};
pub use registry::CardCatalog;
