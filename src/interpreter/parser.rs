/// The parser core and the statement builder trait.
///
/// # Responsibilities
/// - Segment the token stream into statements.
/// - Dispatch each statement to the registered builders.
pub mod core;

/// Expression tree construction.
///
/// # Responsibilities
/// - Build binary expression trees from flat token slices.
/// - Resolve operator binding via ordered split groups.
pub mod expression;

/// The per-construct statement builders.
///
/// # Responsibilities
/// - Recognize and build declarations, assignments, conditionals,
///   print calls and bare expression statements.
pub mod statement;
