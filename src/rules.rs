//! Built-in [`DefaultRule`] implementations.

use std::{collections::HashMap, hash::Hash, marker::PhantomData, rc::Rc};

use static_assertions::assert_impl_all;

use crate::rule::DefaultRule;

/// Rule providing `false`.
pub struct False;

impl DefaultRule for False {
    type Value = bool;

    fn canonical() -> bool {
        false
    }
}

/// Rule providing `true`.
pub struct True;

impl DefaultRule for True {
    type Value = bool;

    fn canonical() -> bool {
        true
    }
}

/// Numeric primitives with canonical zero and one values.
///
/// Implemented for every primitive integer and floating-point type.
pub trait Numeric: PartialEq {
    /// The additive identity of this type.
    const ZERO: Self;

    /// The multiplicative identity of this type.
    const ONE: Self;
}

macro_rules! impl_numeric {
    ($($ty:ty => $zero:literal, $one:literal;)*) => {$(
        impl Numeric for $ty {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
        }
    )*};
}

impl_numeric! {
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    i128 => 0, 1;
    isize => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    u128 => 0, 1;
    usize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

/// Rule providing the numeric zero of `N`.
pub struct Zero<N = i64>(PhantomData<fn() -> N>);

impl<N: Numeric> DefaultRule for Zero<N> {
    type Value = N;

    fn canonical() -> N {
        N::ZERO
    }
}

/// Rule providing the numeric one of `N`.
pub struct One<N = i64>(PhantomData<fn() -> N>);

impl<N: Numeric> DefaultRule for One<N> {
    type Value = N;

    fn canonical() -> N {
        N::ONE
    }
}

/// Rule providing the empty form of a collection-like type.
///
/// Any `C` whose [`Default`] is its canonical empty construction qualifies:
/// `Vec`, `String`, `HashSet`, `VecDeque` and the like.
pub struct Empty<C>(PhantomData<fn() -> C>);

impl<C: Default + PartialEq> DefaultRule for Empty<C> {
    type Value = C;

    fn canonical() -> C {
        C::default()
    }
}

/// Rule providing an empty [`HashMap`].
pub struct EmptyMap<K, V>(PhantomData<fn() -> (K, V)>);

impl<K: Eq + Hash, V: PartialEq> DefaultRule for EmptyMap<K, V> {
    type Value = HashMap<K, V>;

    fn canonical() -> HashMap<K, V> {
        HashMap::new()
    }
}

/// Enums with a statically known first case.
///
/// `FIRST` must name the first case in declaration order of a non-empty,
/// stably ordered set of cases. An enum with no cases cannot supply the
/// constant, so the non-emptiness precondition holds at compile time.
///
/// ```rust
/// use serde_defaulted::Enumerated;
///
/// #[derive(PartialEq)]
/// enum Kind {
///     Foo,
///     Bar,
/// }
///
/// impl Enumerated for Kind {
///     const FIRST: Self = Kind::Foo;
/// }
/// ```
pub trait Enumerated: Sized {
    /// The first case in declaration order.
    const FIRST: Self;
}

/// Rule providing the first declared case of an enum.
pub struct FirstCase<E>(PhantomData<fn() -> E>);

impl<E: Enumerated + PartialEq> DefaultRule for FirstCase<E> {
    type Value = E;

    fn canonical() -> E {
        E::FIRST
    }
}

// Rules only ever name their value type and are never instantiated, so the
// phantom parameter must not affect auto traits.
assert_impl_all!(Empty<Rc<String>>: Send, Sync);
assert_impl_all!(FirstCase<Rc<String>>: Send, Sync);

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::{
        DefaultRule as _, Empty, EmptyMap, Enumerated, False, FirstCase, One, True, Zero,
    };

    #[derive(Debug, PartialEq)]
    enum Direction {
        North,
        South,
        East,
        West,
    }

    impl Enumerated for Direction {
        const FIRST: Self = Direction::North;
    }

    #[test]
    fn booleans() {
        assert!(!False::canonical());
        assert!(True::canonical());
    }

    #[test]
    fn numbers() {
        assert_eq!(Zero::<u32>::canonical(), 0);
        assert_eq!(Zero::<i128>::canonical(), 0);
        assert_eq!(Zero::<f64>::canonical(), 0.0);
        assert_eq!(One::<i64>::canonical(), 1);
        assert_eq!(One::<f32>::canonical(), 1.0);
    }

    #[test]
    fn collections() {
        assert_eq!(Empty::<Vec<u8>>::canonical(), Vec::new());
        assert_eq!(Empty::<String>::canonical(), "");
        assert_eq!(Empty::<HashSet<u32>>::canonical(), HashSet::new());
        assert_eq!(EmptyMap::<String, u32>::canonical(), HashMap::new());
    }

    #[test]
    fn first_case() {
        assert_eq!(FirstCase::<Direction>::canonical(), Direction::North);
        for later in [Direction::South, Direction::East, Direction::West] {
            assert_ne!(FirstCase::<Direction>::canonical(), later);
        }
    }

    #[test]
    fn canonical_is_deterministic() {
        assert_eq!(Zero::<u64>::canonical(), Zero::<u64>::canonical());
        assert_eq!(
            Empty::<Vec<String>>::canonical(),
            Empty::<Vec<String>>::canonical(),
        );
        assert_eq!(
            FirstCase::<Direction>::canonical(),
            FirstCase::<Direction>::canonical(),
        );
    }
}
