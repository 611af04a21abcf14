//! The [`Defaulted`] field wrapper.

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use derive_more::with_trait::{Deref, DerefMut};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use static_assertions::assert_impl_all;

use crate::rule::DefaultRule;

/// A field wrapper binding a value to a [`DefaultRule`].
///
/// On deserialization, an absent key or an explicit `null` both resolve to
/// [`R::canonical()`](DefaultRule::canonical); a present, well-typed value is
/// kept verbatim, and a type mismatch fails with the deserializer's usual
/// error; the default never masks a malformed value. On serialization the
/// wrapper is transparent: it emits the inner value as a plain value of type
/// `R::Value`, and [`Defaulted::is_default`] lets serde omit the key entirely
/// while the value equals the canonical default.
///
/// Absence and omission are routed through serde's own field hooks, so a
/// wrapped field carries two attributes:
///
/// ```rust
/// # use serde::{Deserialize, Serialize};
/// # use serde_defaulted::{Defaulted, True};
/// #[derive(Deserialize, Serialize)]
/// struct Thing {
///     name: String,
///     #[serde(default, skip_serializing_if = "Defaulted::is_default")]
///     is_foo: Defaulted<True>,
/// }
/// ```
#[derive(Deref, DerefMut)]
pub struct Defaulted<R: DefaultRule> {
    #[deref]
    #[deref_mut]
    value: R::Value,
    rule: PhantomData<fn() -> R>,
}

// The rule parameter is only ever a value producer, so auto traits follow the
// wrapped value alone.
assert_impl_all!(Defaulted<crate::rules::True>: Send, Sync);

impl<R: DefaultRule> Defaulted<R> {
    /// Wraps an explicit initial value.
    #[inline]
    pub fn new(value: R::Value) -> Self {
        Self {
            value,
            rule: PhantomData,
        }
    }

    /// Returns whether the wrapped value equals the rule's canonical default.
    ///
    /// This is the `skip_serializing_if` predicate: while it returns `true`,
    /// the field's key is entirely absent from the serialized output.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.value == R::canonical()
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub fn get(&self) -> &R::Value {
        &self.value
    }

    /// Returns a mutable reference to the wrapped value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut R::Value {
        &mut self.value
    }

    /// Replaces the wrapped value.
    #[inline]
    pub fn set(&mut self, value: R::Value) {
        self.value = value;
    }

    /// Unwraps the value, consuming the wrapper.
    #[inline]
    pub fn into_inner(self) -> R::Value {
        self.value
    }
}

// The std impls are implemented manually to bound on `R::Value` instead of
// the redundant `R` bounds a derive would impose.

impl<R: DefaultRule> Default for Defaulted<R> {
    fn default() -> Self {
        Self::new(R::canonical())
    }
}

impl<R: DefaultRule> Clone for Defaulted<R>
where
    R::Value: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<R: DefaultRule> Copy for Defaulted<R> where R::Value: Copy {}

impl<R: DefaultRule> fmt::Debug for Defaulted<R>
where
    R::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<R: DefaultRule> PartialEq for Defaulted<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: DefaultRule> Eq for Defaulted<R> where R::Value: Eq {}

impl<R: DefaultRule> Hash for Defaulted<R>
where
    R::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<'de, R: DefaultRule> Deserialize<'de> for Defaulted<R>
where
    R::Value: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        // Explicit `null` lands here as `None` and collapses to the same
        // canonical default an absent key resolves to via the `Default` impl.
        // Anything else must decode as a plain `R::Value`.
        Option::<R::Value>::deserialize(de)
            .map(|v| Self::new(v.unwrap_or_else(R::canonical)))
    }
}

impl<R: DefaultRule> Serialize for Defaulted<R>
where
    R::Value: Serialize,
{
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(ser)
    }
}
