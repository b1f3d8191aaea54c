pub mod config;
pub mod issues;
pub mod span;

pub use config::{Config, ConfigError};
pub use issues::Issue;
pub use span::{Position, Span};
