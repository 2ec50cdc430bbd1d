// Composition root for the user registry.
//
// Responsibilities
// - Hold the fixed server configuration and the seed record.
// - Build the in memory store and wire it into the use case handlers.
// - Expose the HTTP router and the tracing setup used by the binary.

pub mod config;
pub mod http;
pub mod logging;
pub mod state;
