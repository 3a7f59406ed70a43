//! Autoprice On-Road Price Library
//!
//! Resolves Indian state road tax (RTO) for a vehicle and composes the
//! on-road price shown on variant and listing pages.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::locations;
pub use modules::pricing;
pub use modules::rto;
pub use modules::variants;
