//! In-memory drink list with a draft/edit state machine, a derived
//! total-alcohol aggregate, and a count-threshold advisory warning.
//!
//! # Examples
//!
//! Synchronous usage with [`core::store::DrinkListStore`]:
//! ```
//! use drinklist::{core::store::DrinkListStore, types::Category};
//!
//! let mut store = DrinkListStore::new();
//! store.set_name("Lager");
//! store.set_category(Some(Category::Beer));
//! store.set_percentage("5");
//! store.set_volume("500");
//! let id = store.add().expect("add");
//!
//! assert_eq!(id, 1);
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.total_alcohol_display(), "25.00");
//! ```
//!
//! Observable usage through the runtime handle:
//! ```
//! use drinklist::{
//!     config::RuntimeConfig,
//!     core::store::DrinkListStore,
//!     runtime::{events::DrinkEvent, handle::spawn_drinklist},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handle = spawn_drinklist(DrinkListStore::new(), RuntimeConfig::default());
//! let mut events = handle.subscribe();
//!
//! handle.set_name("Shot").await.expect("name");
//! handle.set_percentage("40").await.expect("percentage");
//! handle.set_volume("50").await.expect("volume");
//! let id = handle.add().await.expect("add");
//!
//! let mut added = false;
//! while let Ok(evt) = events.try_recv() {
//!     added |= evt == DrinkEvent::Added { id };
//! }
//! assert!(added);
//! assert_eq!(handle.view().await.expect("view").total_alcohol_display, "20.00");
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Store and runtime configuration.
pub mod config;
/// Core in-memory store and read models.
pub mod core;
/// Drink records, drafts, and field helpers.
pub mod drink;
/// Mutation journal model.
pub mod op;
/// Single-writer runtime handle and events.
pub mod runtime;
/// Shared primitive types and enums.
pub mod types;
