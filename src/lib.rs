//! Energy-Saving Tips Service Library
//!
//! Serves a fixed catalog of household-appliance energy-saving tips and a chatbot
//! endpoint that works out which appliance a free-text question is about.
//!
//! ## Modules
//! - **`catalog`**: The recommendation table, loaded once from CSV, plus the plain
//!   lookup endpoints (list, by ID, by name fragment).
//! - **`chatbot`**: The query-resolution pipeline: normalization, stopword filtering,
//!   fuzzy matching against the known appliance names, and the reply state machine.
//! - **`assets`**: The single-page front end embedded into the binary.
//! - **`config`**: Startup settings from flags and environment variables.
//! - **`routes`**: The HTTP router wiring all handlers together, with permissive CORS.

pub mod assets;
pub mod catalog;
pub mod chatbot;
pub mod config;
pub mod routes;
