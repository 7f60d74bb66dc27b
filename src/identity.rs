//! Value identity: structural hashing, cross-type comparison and closed
//! enumerations with stable ordinals.

use std::any::Any;
use std::cmp::Ordering;
use std::hash::Hash;

use crate::error::{Result, TemporalError};

/// A value whose identity is fully described by a structural hash code.
///
/// Two values are equal exactly when their hash codes are equal.
pub trait Hashable {
    type Code: Eq + Hash;

    fn hash_code(&self) -> Self::Code;

    fn equals(&self, other: &Self) -> bool {
        self.hash_code() == other.hash_code()
    }
}

/// Ordering against a value whose concrete type is only known at runtime.
///
/// Statically typed callers should use `Ord`; this exists for heterogeneous
/// collections of `dyn Any`.
pub trait Comparable: Any {
    /// # Errors
    /// Returns `TemporalError::ClassMismatch` if `other` is not the same type.
    fn compare_to(&self, other: &dyn Any) -> Result<Ordering>;
}

/// Shared `compare_to` body for types that are already `Ord`.
pub(crate) fn compare_same<T: Ord + 'static>(
    this: &T,
    other: &dyn Any,
    expected: &'static str,
) -> Result<Ordering> {
    other
        .downcast_ref::<T>()
        .map(|other| this.cmp(other))
        .ok_or(TemporalError::ClassMismatch { expected })
}

/// A closed set of named constants in declaration order.
pub trait Enumeration: Copy + Eq + 'static {
    /// Name of the enumeration, used in error messages.
    const KIND: &'static str;
    /// Every constant, in declaration order.
    const VALUES: &'static [Self];

    fn ordinal(self) -> usize;

    fn name(self) -> &'static str;

    /// Looks up a constant by its exact name.
    ///
    /// # Errors
    /// Returns `TemporalError::NoSuchElement` for an undeclared name.
    fn value_of(name: &str) -> Result<Self> {
        Self::VALUES
            .iter()
            .copied()
            .find(|value| value.name() == name)
            .ok_or_else(|| TemporalError::NoSuchElement {
                kind: Self::KIND,
                name: name.to_owned(),
            })
    }
}

/// Declares a fieldless enum and implements `Enumeration`, `Display` (the
/// constant's name) and `FromStr` (lookup by name) for it.
macro_rules! enumeration {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vattr:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vattr])* $variant ),+
        }

        impl $crate::Enumeration for $name {
            const KIND: &'static str = stringify!($name);
            const VALUES: &'static [Self] = &[ $( Self::$variant ),+ ];

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant) ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Enumeration::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::TemporalError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::Enumeration>::value_of(s)
            }
        }
    };
}
