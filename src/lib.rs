//! Aalto: optimistic task-board synchronization core.
//!
//! This crate keeps the task board of a project-management client consistent
//! with its authoritative task store. A drag-and-drop move is applied to the
//! in-memory board immediately, persisted asynchronously, and rolled back
//! and reconciled from the store when persistence fails.
//!
//! # Architecture
//!
//! Aalto follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state and task types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the task store and the
//!   user-facing notifier
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Status partition, sync engine, and drag controller

pub mod board;
