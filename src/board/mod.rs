//! Optimistic task-board synchronization.
//!
//! This module keeps a client-side board of status columns consistent with
//! an authoritative task store: a move is applied to the board immediately,
//! persisted asynchronously, and rolled back plus reconciled from the store
//! when persistence fails. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
