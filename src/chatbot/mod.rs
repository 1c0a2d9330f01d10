//! Chatbot Module
//!
//! Maps a free-text question to the appliance category it is most likely about.
//!
//! ## Pipeline
//! 1. **Normalize**: lower-case, split into words, drop stopwords (`normalizer`, `stopwords`).
//! 2. **Resolve**: score every known appliance name with a partial similarity metric and
//!    keep the best one (`resolver`).
//! 3. **Respond**: accept the best name if its score reaches the threshold and collect the
//!    matching catalog records (`responder`).
//!
//! The pipeline is pure; `handlers` is the only place that logs.

pub mod handlers;
pub mod normalizer;
pub mod resolver;
pub mod responder;
pub mod stopwords;
pub mod types;
