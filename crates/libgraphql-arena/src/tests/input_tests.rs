//! Tests for source buffers and byte slice references.

use crate::ByteSliceReference;
use crate::Input;

#[test]
fn byte_slices() {
    let input = Input::from_string("query Q { a }");
    let name = ByteSliceReference::new(6, 7);
    assert_eq!(input.byte_slice(name), b"Q");
    assert_eq!(input.byte_slice_str(name), "Q");
    assert_eq!(input.byte_slice_string(ByteSliceReference::new(0, 5)), "query");
    assert_eq!(input.len(), 13);
}

/// A reference past the end of the buffer resolves to nothing.
#[test]
fn out_of_range_references_are_empty() {
    let input = Input::from_string("abc");
    let reference = ByteSliceReference::new(2, 10);
    assert_eq!(input.try_byte_slice(reference), None);
    assert_eq!(input.byte_slice(reference), b"");
    assert_eq!(input.byte_slice_str(reference), "");
}

#[test]
fn invalid_utf8_is_replaced_in_owned_copies() {
    let mut input = Input::new();
    input.reset_input_bytes(b"a\xffb");
    let all = ByteSliceReference::new(0, 3);
    assert_eq!(input.byte_slice_str(all), "");
    assert_eq!(input.byte_slice_string(all), "a\u{fffd}b");
}

#[test]
fn appended_regions_follow_the_source() {
    let mut input = Input::from_string("{ a }");
    let appended = input.append_input_string("user");
    assert_eq!(appended, ByteSliceReference::new(5, 9));
    assert_eq!(input.byte_slice(appended), b"user");
    assert_eq!(input.byte_slice(ByteSliceReference::new(0, 5)), b"{ a }");

    let empty = input.append_input_bytes(b"");
    assert!(empty.is_empty());
    assert_eq!(empty.start, 9);
}

#[test]
fn reset_replaces_contents() {
    let mut input = Input::from_string("first");
    input.reset_input_string("y");
    assert_eq!(input.raw_bytes(), b"y");
    input.reset();
    assert!(input.is_empty());
    assert_eq!(input.append_input_string("z"), ByteSliceReference::new(0, 1));
}

#[test]
fn equality_across_inputs() {
    let a = Input::from_string("type User");
    let b = Input::from_string("User");
    let user_a = ByteSliceReference::new(5, 9);
    let user_b = ByteSliceReference::new(0, 4);
    assert!(Input::byte_slice_equals(user_a, &a, user_b, &b));
    assert!(!Input::byte_slice_equals(ByteSliceReference::new(0, 4), &a, user_b, &b));
    assert!(!Input::byte_slice_equals(user_a, &a, ByteSliceReference::new(0, 3), &b));
}
