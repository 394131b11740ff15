//! `C5`/`C6`: bounded-integer decimal and hexadecimal formatting.
//!
//! Digits are emitted right-to-left directly into the destination window
//! (no scratch buffer, no reversal pass), using the same right-aligned
//! writer contract [`Text::append_bounded_choice`](crate::text::Text::append_bounded_choice)
//! and [`Text::prepend_bounded`](crate::text::Text::prepend_bounded) already
//! use for every other bounded write.
//!
//! [`Int`] is sealed: it is implemented for every bounded machine integer
//! type the standard library provides and is not meant to be implemented
//! downstream, the same way `span`'s `Length`/`Size` markers in the
//! buffer-mapping layer this crate grew out of are sealed.

use crate::text::Text;

mod sealed {
    pub trait Sealed {}
}

/// A bounded machine integer that can be written as decimal or
/// hexadecimal text. Sealed: implemented only for the built-in integer
/// types.
pub trait Int: sealed::Sealed + Copy {
    #[doc(hidden)]
    const DEC_WIDTH: usize;
    #[doc(hidden)]
    const HEX_WIDTH: usize;
    #[doc(hidden)]
    fn write_dec(self, buf: &mut [u8]) -> usize;
    #[doc(hidden)]
    fn write_hex(self, buf: &mut [u8]) -> usize;
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn write_udec(mut v: u128, buf: &mut [u8]) -> usize {
    let max = buf.len();
    let mut i = max;
    if v == 0 {
        i -= 1;
        buf[i] = b'0';
    } else {
        while v > 0 {
            i -= 1;
            buf[i] = b'0' + (v % 10) as u8;
            v /= 10;
        }
    }
    max - i
}

fn write_idec(v: i128, buf: &mut [u8]) -> usize {
    let neg = v < 0;
    let mag: u128 = if neg { v.unsigned_abs() } else { v as u128 };
    let max = buf.len();
    let mut i = max;
    if mag == 0 {
        i -= 1;
        buf[i] = b'0';
    } else {
        let mut mag = mag;
        while mag > 0 {
            i -= 1;
            buf[i] = b'0' + (mag % 10) as u8;
            mag /= 10;
        }
    }
    if neg {
        i -= 1;
        buf[i] = b'-';
    }
    max - i
}

fn write_hex_digits(mut v: u128, buf: &mut [u8]) -> usize {
    let max = buf.len();
    let mut i = max;
    if v == 0 {
        i -= 1;
        buf[i] = b'0';
    } else {
        while v > 0 {
            i -= 1;
            buf[i] = HEX_DIGITS[(v & 0xf) as usize];
            v >>= 4;
        }
    }
    max - i
}

macro_rules! impl_uint {
    ($t:ty, $dec:expr, $hex:expr) => {
        impl sealed::Sealed for $t {}
        impl Int for $t {
            const DEC_WIDTH: usize = $dec;
            const HEX_WIDTH: usize = $hex;

            fn write_dec(self, buf: &mut [u8]) -> usize {
                write_udec(self as u128, buf)
            }

            fn write_hex(self, buf: &mut [u8]) -> usize {
                write_hex_digits(self as u128, buf)
            }
        }
    };
}

macro_rules! impl_sint {
    ($t:ty, $u:ty, $dec:expr, $hex:expr) => {
        impl sealed::Sealed for $t {}
        impl Int for $t {
            const DEC_WIDTH: usize = $dec;
            const HEX_WIDTH: usize = $hex;

            fn write_dec(self, buf: &mut [u8]) -> usize {
                write_idec(self as i128, buf)
            }

            fn write_hex(self, buf: &mut [u8]) -> usize {
                write_hex_digits(self as $u as u128, buf)
            }
        }
    };
}

impl_uint!(u8, 3, 2);
impl_uint!(u16, 5, 4);
impl_uint!(u32, 10, 8);
impl_uint!(u64, 20, 16);
impl_uint!(u128, 39, 32);

impl_sint!(i8, u8, 4, 2);
impl_sint!(i16, u16, 6, 4);
impl_sint!(i32, u32, 11, 8);
impl_sint!(i64, u64, 20, 16);
impl_sint!(i128, u128, 40, 32);

#[cfg(target_pointer_width = "64")]
impl_uint!(usize, 20, 16);
#[cfg(target_pointer_width = "64")]
impl_sint!(isize, usize, 20, 16);

#[cfg(target_pointer_width = "32")]
impl_uint!(usize, 10, 8);
#[cfg(target_pointer_width = "32")]
impl_sint!(isize, usize, 11, 8);

impl Text {
    /// Appends the decimal representation of a bounded integer.
    pub fn append_int<T: Int>(self, v: T) -> Self {
        self.append_bounded_choice(T::DEC_WIDTH, |buf| v.write_dec(buf))
    }

    /// Prepends the decimal representation of a bounded integer.
    pub fn prepend_int<T: Int>(self, v: T) -> Self {
        self.prepend_bounded(T::DEC_WIDTH, |buf| v.write_dec(buf))
    }

    /// Appends the lowercase hexadecimal representation of a bounded
    /// integer (two's complement bit pattern for signed types, no
    /// leading zero padding beyond what the magnitude needs).
    pub fn append_hex<T: Int>(self, v: T) -> Self {
        self.append_bounded_choice(T::HEX_WIDTH, |buf| v.write_hex(buf))
    }

    /// Prepends the lowercase hexadecimal representation of a bounded
    /// integer.
    pub fn prepend_hex<T: Int>(self, v: T) -> Self {
        self.prepend_bounded(T::HEX_WIDTH, |buf| v.write_hex(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_roundtrip() {
        assert_eq!(Text::run(|b| b.append_int(0i32)), "0");
        assert_eq!(Text::run(|b| b.append_int(42u8)), "42");
        assert_eq!(Text::run(|b| b.append_int(-128i8)), "-128");
        assert_eq!(Text::run(|b| b.append_int(i64::MIN)), "-9223372036854775808");
        assert_eq!(Text::run(|b| b.append_int(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn decimal_min_signed_values_all_widths() {
        assert_eq!(Text::run(|b| b.append_int(i8::MIN)), "-128");
        assert_eq!(Text::run(|b| b.append_int(i16::MIN)), "-32768");
        assert_eq!(Text::run(|b| b.append_int(i32::MIN)), "-2147483648");
        assert_eq!(Text::run(|b| b.append_int(i128::MIN)), "-170141183460469231731687303715884105728");
    }

    #[test]
    fn prepend_int_matches_append() {
        let s = Text::run(|b| b.append_text(": ").prepend_int(7i32));
        assert_eq!(s, "7: ");
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Text::run(|b| b.append_hex(255u8)), "ff");
        assert_eq!(Text::run(|b| b.append_hex(0u32)), "0");
        assert_eq!(Text::run(|b| b.append_hex(-1i32)), "ffffffff");
        assert_eq!(Text::run(|b| b.append_hex(-1i8)), "ff");
    }

    #[test]
    fn mixed_decimal_and_text() {
        let s = Text::run(|b| b.append_text("x=").append_int(10u32).append_text(", y=").append_int(-3i32));
        assert_eq!(s, "x=10, y=-3");
    }

    #[test]
    fn many_appends_force_growth() {
        let s = Text::run(|b| {
            (0..200).fold(b, |acc, i: i64| acc.append_int(i).append_text(","))
        });
        assert!(s.starts_with("0,1,2,3,"));
        assert!(s.ends_with("199,"));
    }
}
