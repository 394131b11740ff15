//! `C5` (unbounded): arbitrary-precision decimal formatting.
//!
//! `num_bigint`'s own `Display` implementation already does the bounded
//! component's job — chunked divmod against `10^9`, emitted most
//! significant chunk first — so this module is a thin adapter rather
//! than a second hand-rolled formatter: reusing it is the idiomatic
//! choice once the crate is already in the dependency graph for
//! unbounded integers at all.

use num_bigint::{BigInt, BigUint};

use crate::text::Text;

mod sealed {
    pub trait Sealed {}
    impl Sealed for num_bigint::BigInt {}
    impl Sealed for num_bigint::BigUint {}
}

/// An arbitrary-precision integer that can be written as decimal text.
/// Sealed: implemented only for [`BigInt`] and [`BigUint`].
pub trait Unbounded: sealed::Sealed {
    #[doc(hidden)]
    fn decimal_text(&self) -> String;
}

impl Unbounded for BigInt {
    fn decimal_text(&self) -> String {
        self.to_string()
    }
}

impl Unbounded for BigUint {
    fn decimal_text(&self) -> String {
        self.to_string()
    }
}

impl Text {
    /// Appends the decimal representation of an arbitrary-precision
    /// integer. Unlike the bounded writers, the destination length is not
    /// known until the value is formatted, so this goes through
    /// [`Text::append_exact`] rather than the bounded writer contract.
    pub fn append_bigint<T: Unbounded>(self, v: &T) -> Self {
        let s = v.decimal_text();
        self.append_exact(s.len(), |dst| dst.copy_from_slice(s.as_bytes()))
    }

    /// Prepends the decimal representation of an arbitrary-precision
    /// integer.
    pub fn prepend_bigint<T: Unbounded>(self, v: &T) -> Self {
        let s = v.decimal_text();
        self.prepend_exact(s.len(), |dst| dst.copy_from_slice(s.as_bytes()))
    }
}
