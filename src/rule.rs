/// A named default value policy for a value type.
///
/// A rule pairs a value type with the single canonical default used both to
/// fill in absent or `null` fields on deserialization and to decide omission
/// on serialization. Rules are stateless marker types selected per field by
/// type parameterization; they are never instantiated at runtime.
///
/// Adding a policy means adding one more type implementing this trait; the
/// [`Defaulted`](crate::Defaulted) wrapper never changes:
///
/// ```rust
/// use serde_defaulted::DefaultRule;
///
/// struct Forty2;
///
/// impl DefaultRule for Forty2 {
///     type Value = u64;
///
///     fn canonical() -> u64 {
///         42
///     }
/// }
/// ```
pub trait DefaultRule {
    /// The value type this rule provides the default for.
    type Value: PartialEq;

    /// Returns the canonical default value.
    ///
    /// Must be pure and deterministic: calling it twice yields equal values,
    /// and no external state (clock, environment, I/O) may be consulted. It
    /// cannot fail.
    fn canonical() -> Self::Value;
}
