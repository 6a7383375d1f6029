pub mod logging;
pub mod vec2;

pub use logging::{FileLogger, LogTarget, StdoutLogger, init_logger};
pub use vec2::Vec2;

// Re-export log crate so downstream crates can use posecam_base::log::*
pub use log;
