pub mod cli;
pub mod depth;
pub mod image;
pub mod orientation;
pub mod summary;
pub mod types;

// Re-export commonly used functions
pub use depth::{normalize, try_normalize, DepthBuffer};
pub use summary::print_summary;
