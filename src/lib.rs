//! An affine, allocation-frugal mutable string builder.
//!
//! [`Text`] is the single public handle: every operation that mutates it
//! consumes the handle by value and returns a new one, so a half-built
//! buffer can never be observed twice or left in an inconsistent state.
//! Underneath, it owns a two-sided growable byte array — both a front and
//! a back reserve are tracked — so a pipeline dominated by either
//! `append_*` or `prepend_*` calls runs in amortised O(1), and numeric and
//! textual content is written directly into the array rather than through
//! an intermediate buffer.
//!
//! ```
//! use growbuf::Text;
//!
//! let s = Text::run(|b| {
//!     b.append_text("count = ")
//!         .append_int(42i32)
//!         .prepend_char('[')
//!         .append_char(']')
//! });
//! assert_eq!(s, "[count = 42]");
//! ```

mod array;
mod bigint;
mod char_writer;
mod float;
mod int;
mod text;

pub use crate::bigint::Unbounded;
pub use crate::float::Float;
pub use crate::int::Int;
pub use crate::text::Text;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_then_append() {
        assert_eq!(Text::run(|b| b.append_text("foo").append_text("bar")), "foobar");
    }

    #[test]
    fn prepend_then_prepend() {
        assert_eq!(Text::run(|b| b.prepend_text("bar").prepend_text("foo")), "foobar");
    }

    #[test]
    fn mixed_append_char_prepend_char() {
        let s = Text::run(|b| {
            b.append_text("bar")
                .append_char('.')
                .prepend_text("foo")
                .prepend_char('!')
        });
        assert_eq!(s, "!foobar.");
    }

    #[test]
    fn justified_columns_concatenated() {
        let s = Text::run(|b| {
            let aaa = b.new_empty().append_text("AAA").justify_right(12, ' ');
            let bbbbbbb = b.new_empty().append_text("BBBBBBB").justify_right(12, ' ');
            b.append_text("Test:").concat(aaa).concat(bbbbbbb)
        });
        assert_eq!(s, "Test:         AAA     BBBBBBB");
    }

    #[test]
    fn duplicate_then_diverge_then_rejoin() {
        let s = Text::run(|b| {
            let (b1, b2) = b.duplicate();
            b1.prepend_text("foo").concat(b2.append_text("bar"))
        });
        assert_eq!(s, "foobar");
    }

    #[test]
    fn minimum_signed_byte() {
        assert_eq!(Text::run(|b| b.append_int(-128i8)), "-128");
    }

    #[test]
    fn shortest_round_trip_float() {
        assert_eq!(Text::run(|b| b.append_f64(0.1)), "0.1");
    }
}
