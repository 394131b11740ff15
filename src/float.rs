//! `C7`: double/single precision formatting.
//!
//! Shortest round-trip float-to-text is exactly what `ryu` exists for,
//! and its `Buffer` type already follows the "format into a
//! caller-owned scratch buffer, then copy" shape this component
//! describes, so it is used directly rather than reimplemented.

use ryu::Buffer;

use crate::text::Text;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating point type that can be written as shortest round-trip
/// decimal text. Sealed: implemented only for `f32` and `f64`.
pub trait Float: sealed::Sealed + Copy {
    #[doc(hidden)]
    fn format_into(self, buf: &mut Buffer) -> String;
}

impl Float for f32 {
    fn format_into(self, buf: &mut Buffer) -> String {
        buf.format(self).to_owned()
    }
}

impl Float for f64 {
    fn format_into(self, buf: &mut Buffer) -> String {
        buf.format(self).to_owned()
    }
}

impl Text {
    /// Appends the shortest decimal representation that round-trips back
    /// to `v` exactly.
    pub fn append_float<T: Float>(self, v: T) -> Self {
        let mut buf = Buffer::new();
        let s = v.format_into(&mut buf);
        self.append_exact(s.len(), |dst| dst.copy_from_slice(s.as_bytes()))
    }

    /// Prepends the shortest round-trip decimal representation of `v`.
    pub fn prepend_float<T: Float>(self, v: T) -> Self {
        let mut buf = Buffer::new();
        let s = v.format_into(&mut buf);
        self.prepend_exact(s.len(), |dst| dst.copy_from_slice(s.as_bytes()))
    }

    /// Appends the shortest round-trip decimal representation of an
    /// `f64`. A non-generic convenience over [`append_float`](Text::append_float).
    pub fn append_f64(self, v: f64) -> Self {
        self.append_float(v)
    }

    /// Prepends the shortest round-trip decimal representation of an
    /// `f64`.
    pub fn prepend_f64(self, v: f64) -> Self {
        self.prepend_float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_values() {
        assert_eq!(Text::run(|b| b.append_float(0.1f64)), "0.1");
        assert_eq!(Text::run(|b| b.append_float(1.0f64)), "1.0");
        assert_eq!(Text::run(|b| b.append_float(-2.5f32)), "-2.5");
    }

    #[test]
    fn special_values() {
        assert_eq!(Text::run(|b| b.append_float(f64::NAN)), "NaN");
        assert_eq!(Text::run(|b| b.append_float(f64::INFINITY)), "inf");
        assert_eq!(Text::run(|b| b.append_float(f64::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn prepend_matches_append() {
        let s = Text::run(|b| b.append_text("pi=").append_float(3.14f64));
        assert_eq!(s, "pi=3.14");
        let s2 = Text::run(|b| b.prepend_float(3.14f64).append_text(" end"));
        assert_eq!(s2, "3.14 end");
    }

    #[test]
    fn mixed_with_ints() {
        let s = Text::run(|b| b.append_int(1i32).append_text(":").append_float(2.5f64));
        assert_eq!(s, "1:2.5");
    }
}
