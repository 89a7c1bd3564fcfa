//! Observability for Sentipulse
//!
//! Counters live in a private Prometheus registry. The CLI renders them in the
//! text exposition format on exit; nothing listens for incoming requests.

pub mod metrics;

pub use metrics::Metrics;
