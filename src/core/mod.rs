//! In-memory authoritative store and its read models.

/// Authoritative drink list store and draft/edit state machine.
pub mod store;
/// Serializable render-input snapshot.
pub mod view;
/// Advisory warning state.
pub mod warning;
