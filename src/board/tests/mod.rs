//! Unit tests for board synchronization.
//!
//! Tests are organised by layer: domain parsing and conversion, partition
//! invariants, the sync engine's optimistic protocol, and the drag
//! controller's guard.
