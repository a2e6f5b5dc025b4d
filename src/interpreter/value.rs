/// Runtime values.
///
/// Defines the `Value` enum, its truthiness rule and its canonical printed
/// form.
pub mod core;
