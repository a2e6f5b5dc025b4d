/// Dispatch of binary operators to their handlers.
pub mod core;

/// `+`, `-`, `*` and `/`.
pub mod arithmetic;

/// Relational and equality operators.
pub mod comparison;

/// Short-circuiting `and` / `or`.
pub mod logic;
