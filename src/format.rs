//! Fixed-width numeric field formatting
//!
//! Every numeric field on the panel is exactly [`FIELD_WIDTH`] characters
//! wide. Values inside the display domain `[0, 999]` render right-aligned
//! over the field's pad bytes; anything else degrades to the `"---"`
//! placeholder rather than faulting or changing the layout.

use core::fmt::Write as _;

use heapless::String;

/// Width of a numeric field in characters.
pub const FIELD_WIDTH: usize = 3;

/// Largest value a field can display.
pub const VALUE_MAX: i32 = 999;

/// Shown when a value falls outside the display domain.
pub const PLACEHOLDER: &str = "---";

/// Whether `value` fits the `[0, VALUE_MAX]` display domain.
pub fn in_domain(value: i32) -> bool {
    (0..=VALUE_MAX).contains(&value)
}

/// Copy `s` into the last `s.len()` bytes of `field`.
///
/// Leading bytes keep whatever pad they were pre-filled with. If `s` is
/// longer than the field, the field is left untouched; overflow must not
/// silently truncate.
pub fn right_align(field: &mut [u8], s: &str) {
    if s.len() > field.len() {
        return;
    }
    let start = field.len() - s.len();
    field[start..].copy_from_slice(s.as_bytes());
}

/// Render `value` as a 3-character field.
///
/// In-domain values are right-aligned over space padding; out-of-domain
/// values produce the placeholder.
pub fn num_field(value: i32) -> [u8; FIELD_WIDTH] {
    if !in_domain(value) {
        return *b"---";
    }
    let mut digits: String<FIELD_WIDTH> = String::new();
    // 0..=999 always fits FIELD_WIDTH digits
    let _ = write!(digits, "{value}");
    let mut field = [b' '; FIELD_WIDTH];
    right_align(&mut field, &digits);
    field
}

/// View a field as `&str`. Fields only ever hold ASCII.
pub fn field_str(field: &[u8; FIELD_WIDTH]) -> &str {
    core::str::from_utf8(field).unwrap_or(PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_right_align_basic() {
        let mut field = *b"   ";
        right_align(&mut field, "42");
        assert_eq!(&field, b" 42");
    }

    #[test]
    fn test_right_align_preserves_pad_bytes() {
        let mut field = *b"---";
        right_align(&mut field, "7");
        assert_eq!(&field, b"--7");
    }

    #[test]
    fn test_right_align_overflow_is_noop() {
        let mut field = *b"   ";
        right_align(&mut field, "1234");
        assert_eq!(&field, b"   ");
    }

    #[test]
    fn test_right_align_exact_fit() {
        let mut field = *b"   ";
        right_align(&mut field, "999");
        assert_eq!(&field, b"999");
    }

    #[test]
    fn test_num_field_out_of_domain() {
        assert_eq!(&num_field(-1), b"---");
        assert_eq!(&num_field(1000), b"---");
        assert_eq!(&num_field(i32::MIN), b"---");
        assert_eq!(&num_field(i32::MAX), b"---");
    }

    #[test]
    fn test_num_field_domain_edges() {
        assert_eq!(&num_field(0), b"  0");
        assert_eq!(&num_field(999), b"999");
    }

    proptest! {
        #[test]
        fn num_field_right_aligned_in_domain(v in 0i32..=999) {
            let field = num_field(v);
            let s = field_str(&field);
            let trimmed = s.trim_start_matches(' ');
            // Digits parse back to the value, remainder is pad
            prop_assert_eq!(trimmed.parse::<i32>().unwrap(), v);
            prop_assert!(s[..s.len() - trimmed.len()].bytes().all(|b| b == b' '));
        }

        #[test]
        fn num_field_never_panics(v in any::<i32>()) {
            let field = num_field(v);
            prop_assert_eq!(field.len(), FIELD_WIDTH);
        }

        #[test]
        fn right_align_noop_when_too_long(s in "[0-9]{4,8}") {
            let mut field = *b"   ";
            right_align(&mut field, &s);
            prop_assert_eq!(&field, b"   ");
        }
    }
}
