//! Static front end: a single page with a chat box, compiled into the binary.

pub mod handlers;
