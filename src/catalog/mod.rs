//! Catalog Module
//!
//! Holds the fixed table of energy-saving recommendations the service is built around.
//!
//! ## Overview
//! The catalog is read once at startup from a CSV file and never changes afterwards.
//! Everything downstream (the chatbot and the plain lookup endpoints) borrows it through
//! an `Arc<CatalogStore>`.
//!
//! ## Submodules
//! - **`store`**: Loading, validation and read-only accessors.
//! - **`handlers`**: HTTP handlers for listing and filtering recommendations.
//! - **`types`**: The record type, error taxonomy and response DTOs.

pub mod handlers;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
