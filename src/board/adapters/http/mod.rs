//! HTTP adapter for the task store port.

mod store;

pub use store::HttpTaskStore;
