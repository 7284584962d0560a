use crate::bounded_text::BoundedText;

type Text8 = BoundedText<8>;

#[test]
fn test_short_text_is_kept() {
    let text = Text8::truncate_from("abc");

    assert_eq!("abc", text.as_str());
    assert_eq!(3, text.len());
    assert_eq!(&[b'a', b'b', b'c', 0, 0, 0, 0, 0], text.as_field());
}

#[test]
fn test_exact_capacity_is_kept() {
    let text = Text8::truncate_from("1234567");

    assert_eq!("1234567", text.as_str());
    assert_eq!(0, text.as_field()[7]);
}

#[test]
fn test_long_text_is_truncated_with_terminator() {
    let text = Text8::truncate_from("123456789abcdef");

    assert_eq!("1234567", text.as_str());
    assert_eq!(Text8::CAPACITY, text.len());
    assert_eq!(0, text.as_field()[7]);
}

#[test]
fn test_truncation_keeps_whole_characters() {
    // 'é' is two bytes and would straddle the bound
    let text = Text8::truncate_from("abcdefé");

    assert_eq!("abcdef", text.as_str());
    assert_eq!(&[0, 0], &text.as_field()[6..]);
}

#[test]
fn test_text_stops_at_nul() {
    let text = Text8::truncate_from("ab\0cd");

    assert_eq!("ab", text.as_str());
}

#[test]
fn test_empty_text() {
    let text = Text8::truncate_from("");

    assert!(text.is_empty());
    assert_eq!(&[0u8; 8], text.as_field());
    assert_eq!(Text8::new(), text);
}

#[test]
fn test_from_field_reads_to_terminator() {
    let text = Text8::from_field(b"hi\0junk\0").unwrap();

    assert_eq!("hi", text.as_str());
}

#[test]
fn test_from_field_without_terminator() {
    let text = Text8::from_field(b"abcdefgh").unwrap();

    assert_eq!("abcdefg", text.as_str());
}

#[test]
fn test_from_field_drops_cut_character() {
    let text = Text8::from_field(&[b'a', b'b', b'c', b'd', b'e', b'f', 0xC3, 0xA9]).unwrap();

    assert_eq!("abcdef", text.as_str());
}

#[test]
fn test_from_field_invalid_utf8() {
    assert!(Text8::from_field(&[0xFF, b'a', 0, 0, 0, 0, 0, 0]).is_err());
}

#[test]
fn test_compares_with_str() {
    let text: Text8 = "abc".into();

    assert_eq!(text, "abc");
    assert_eq!("abc", format!("{text}"));
    assert_eq!("\"abc\"", format!("{text:?}"));
}
