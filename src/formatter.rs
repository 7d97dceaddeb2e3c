/// The formatter core.
///
/// # Responsibilities
/// - Hold the formatting configuration and the registered rules.
/// - Render AST node sequences back to canonical source text.
pub mod core;

/// The per-construct formatting rules.
///
/// # Responsibilities
/// - Render each node variant according to the configuration.
pub mod rules;

pub use self::core::{FormatConfig, Formatter};
