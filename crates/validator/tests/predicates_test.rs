//! Predicate behaviour against known-good and known-bad inputs.

use rstest::rstest;
use strcheck_validator::{
    is_alpha, is_alphanumeric, is_ascii, is_bool, is_credit_card, is_date, is_email, is_float,
    is_hex_color, is_hexadecimal, is_in, is_int, is_ip, is_ipv4, is_ipv6, is_isbn, is_isbn_v10,
    is_isbn_v13, is_length, is_lower_case, is_null, is_upper_case, is_uuid, is_uuid_v3,
    is_uuid_v4, is_uuid_v5,
};

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

#[rstest]
#[case("abc", true)]
#[case("ABC", true)]
#[case("FoOBar", true)]
#[case("abc1", false)]
#[case("  foo ", false)]
#[case("", false)]
#[case("très", false)]
fn alpha(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_alpha(input), expected, "{input:?}");
}

#[rstest]
#[case("abc123", true)]
#[case("ABC11", true)]
#[case("abc ", false)]
#[case("foo!!", false)]
#[case("", false)]
fn alphanumeric(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_alphanumeric(input), expected, "{input:?}");
}

#[rstest]
#[case("foo", true)]
#[case("0987654321", true)]
#[case("test@example.com", true)]
#[case("1234abcDEF", true)]
#[case("ｆｏｏbar", false)]
#[case("ｘｙｚ０９８", false)]
#[case("１２３456", false)]
#[case("ｶﾀｶﾅ", false)]
#[case("", false)]
fn ascii(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_ascii(input), expected, "{input:?}");
}

#[rstest]
#[case("deadBEEF", true)]
#[case("ff0044", true)]
#[case("abcdefg", false)]
#[case("", false)]
#[case("..", false)]
fn hexadecimal(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_hexadecimal(input), expected, "{input:?}");
}

#[rstest]
#[case("#ff0034", true)]
#[case("#CCCCCC", true)]
#[case("fff", true)]
#[case("#f00", true)]
#[case("#ff", false)]
#[case("fff0", false)]
#[case("#ff12FG", false)]
#[case("#", false)]
fn hex_color(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_hex_color(input), expected, "{input:?}");
}

#[rstest]
#[case("abc", true)]
#[case("abc123", true)]
#[case("this is lowercase", true)]
#[case("très über", true)]
#[case("", true)]
#[case("fooBar", false)]
#[case("123A", false)]
fn lower_case(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_lower_case(input), expected, "{input:?}");
}

#[rstest]
#[case("ABC", true)]
#[case("ABC123", true)]
#[case("ALL CAPS IS FUN", true)]
#[case("", true)]
#[case("abc", false)]
#[case("abc123", false)]
#[case("this is lowercase", false)]
#[case("très über", false)]
#[case("ß", false)]
fn upper_case(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_upper_case(input), expected, "{input:?}");
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

#[rstest]
#[case("foo@bar.com", true)]
#[case("x@d.c", true)]
#[case("foo@bar.com.au", true)]
#[case("foo+bar@bar.com", true)]
#[case("FOO@BAR.COM", true)]
#[case("invalidemail@", false)]
#[case("invalid.com", false)]
#[case("@invalid.com", false)]
#[case("foo@bar.com trailing", false)]
#[case("foo@-bar.com", false)]
#[case("foo..bar@bar.com", false)]
fn email(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_email(input), expected, "{input:?}");
}

#[rstest]
#[case("A987FBC9-4BED-3078-CF07-9141BA07C9F3", true)]
#[case("A987FBC9-4BED-4078-8F07-9141BA07C9F3", true)]
#[case("A987FBC9-4BED-5078-AF07-9141BA07C9F3", true)]
#[case("", false)]
#[case("xxxA987FBC9-4BED-3078-CF07-9141BA07C9F3", false)]
#[case("A987FBC9-4BED-3078-CF07-9141BA07C9F3xxx", false)]
#[case("A987FBC94BED3078CF079141BA07C9F3", false)]
#[case("934859", false)]
#[case("987FBC9-4BED-3078-CF07A-9141BA07C9F3", false)]
#[case("AAAAAAAA-1111-1111-AAAG-111111111111", false)]
fn uuid_any(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_uuid(input), expected, "{input:?}");
}

#[rstest]
#[case("A987FBC9-4BED-3078-8F07-9141BA07C9F3", true)]
#[case("a987fbc9-4bed-3078-bf07-9141ba07c9f3", true)]
// Variant nibble C is not the RFC 4122 variant.
#[case("A987FBC9-4BED-3078-CF07-9141BA07C9F3", false)]
#[case("", false)]
#[case("xxxA987FBC9-4BED-3078-CF07-9141BA07C9F3", false)]
#[case("934859", false)]
#[case("AAAAAAAA-1111-1111-AAAG-111111111111", false)]
#[case("A987FBC9-4BED-4078-8F07-9141BA07C9F3", false)]
#[case("A987FBC9-4BED-5078-AF07-9141BA07C9F3", false)]
fn uuid_v3(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_uuid_v3(input), expected, "{input:?}");
}

#[rstest]
#[case("713ae7e3-cb32-45f9-adcb-7c4fa86b90c1", true)]
#[case("625e63f3-58f5-40b7-83a1-a72ad31acffb", true)]
#[case("57b73598-8764-4ad0-a76a-679bb6640eb1", true)]
#[case("9c858901-8a57-4791-81fe-4c455b099bc9", true)]
#[case("", false)]
#[case("xxxA987FBC9-4BED-3078-CF07-9141BA07C9F3", false)]
#[case("934859", false)]
#[case("AAAAAAAA-1111-1111-AAAG-111111111111", false)]
#[case("A987FBC9-4BED-5078-AF07-9141BA07C9F3", false)]
#[case("A987FBC9-4BED-3078-CF07-9141BA07C9F3", false)]
#[case("713ae7e3-cb32-45f9-cdcb-7c4fa86b90c1", false)]
fn uuid_v4(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_uuid_v4(input), expected, "{input:?}");
}

#[rstest]
#[case("987FBC97-4BED-5078-AF07-9141BA07C9F3", true)]
#[case("987FBC97-4BED-5078-BF07-9141BA07C9F3", true)]
#[case("987FBC97-4BED-5078-8F07-9141BA07C9F3", true)]
#[case("987FBC97-4BED-5078-9F07-9141BA07C9F3", true)]
#[case("", false)]
#[case("xxxA987FBC9-4BED-3078-CF07-9141BA07C9F3", false)]
#[case("934859", false)]
#[case("AAAAAAAA-1111-1111-AAAG-111111111111", false)]
#[case("9c858901-8a57-4791-81fe-4c455b099bc9", false)]
#[case("A987FBC9-4BED-3078-CF07-9141BA07C9F3", false)]
fn uuid_v5(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_uuid_v5(input), expected, "{input:?}");
}

#[rstest]
#[case("2011-08-04", true)]
#[case("2024-02-29", true)]
#[case("", false)]
#[case("2023-02-29", false)]
#[case("2011-8-4", false)]
#[case("2011-08-04T10:00:00Z", false)]
fn date(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_date(input), expected, "{input:?}");
}

// ---------------------------------------------------------------------------
// Numeric literals
// ---------------------------------------------------------------------------

#[rstest]
#[case("12", true)]
#[case("123", true)]
#[case("0", true)]
#[case("-0", true)]
#[case("+5", true)]
#[case("  ", false)]
#[case("foo", false)]
#[case("123.123", false)]
#[case("", false)]
#[case("9223372036854775808", false)]
fn int(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_int(input), expected, "{input:?}");
}

#[rstest]
#[case("123", true)]
#[case("123.", true)]
#[case("123.123", true)]
#[case("-123.123", true)]
#[case("-0.123", true)]
#[case("0.123", true)]
#[case(".0", true)]
#[case("01.123", true)]
#[case("-0.22250738585072011e-307", true)]
#[case("foo", false)]
#[case("  ", false)]
#[case("", false)]
#[case(".", false)]
#[case("inf", false)]
#[case("NaN", false)]
#[case("1e400", false)]
fn float(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_float(input), expected, "{input:?}");
}

#[rstest]
#[case("1")]
#[case("t")]
#[case("f")]
#[case("0")]
#[case("TRUE")]
#[case("FALSE")]
#[case("T")]
#[case("F")]
#[case("True")]
#[case("False")]
#[case("true")]
#[case("false")]
fn bool_accepts(#[case] input: &str) {
    assert!(is_bool(input), "{input:?}");
}

#[rstest]
#[case("a")]
#[case("verdadero")]
#[case("fv")]
#[case("00")]
#[case("01")]
#[case("tRUE")]
#[case("yes")]
#[case("")]
fn bool_rejects(#[case] input: &str) {
    assert!(!is_bool(input), "{input:?}");
}

// ---------------------------------------------------------------------------
// Checksums
// ---------------------------------------------------------------------------

#[rstest]
#[case("3836221195")]
#[case("3-8362-2119-5")]
#[case("3 8362 2119 5")]
#[case("1617290858")]
#[case("1-61729-085-8")]
#[case("1 61729 085-8")]
#[case("0007269706")]
#[case("0-00-726970-6")]
#[case("0 00 726970 6")]
#[case("3423214120")]
#[case("3-423-21412-0")]
#[case("3 423 21412 0")]
#[case("340101319X")]
#[case("3-401-01319-X")]
#[case("3 401 01319 X")]
#[case("340101319x")]
fn isbn10_accepts(#[case] input: &str) {
    assert!(is_isbn_v10(input), "{input:?}");
    assert!(is_isbn(input), "{input:?}");
}

#[rstest]
#[case("3423214121")]
#[case("3-423-21412-1")]
#[case("3 423 21412 1")]
#[case("978-3836221191")]
#[case("9783836221191")]
#[case("123456789a")]
#[case("foo")]
#[case("")]
fn isbn10_rejects(#[case] input: &str) {
    assert!(!is_isbn_v10(input), "{input:?}");
}

#[rstest]
#[case("9783836221191")]
#[case("978-3-8362-2119-1")]
#[case("978 3 8362 2119 1")]
#[case("9783401013190")]
#[case("978-3401013190")]
#[case("978 3401013190")]
#[case("9784873113685")]
#[case("978-4-87311-368-5")]
#[case("978 4 87311 368 5")]
fn isbn13_accepts(#[case] input: &str) {
    assert!(is_isbn_v13(input), "{input:?}");
    assert!(is_isbn(input), "{input:?}");
}

#[rstest]
#[case("9783836221190")]
#[case("978-3-8362-2119-0")]
#[case("978 3 8362 2119 0")]
#[case("3836221195")]
#[case("3-8362-2119-5")]
#[case("3 8362 2119 5")]
#[case("01234567890ab")]
#[case("foo")]
#[case("")]
fn isbn13_rejects(#[case] input: &str) {
    assert!(!is_isbn_v13(input), "{input:?}");
}

#[rstest]
#[case("3423214121")]
#[case("9783836221190")]
#[case("")]
#[case("3\u{3000}836221195")]
#[case("3\u{a0}836221195")]
#[case("978\u{a0}4873113685")]
#[case("978\u{2028}4873113685")]
fn isbn_rejects(#[case] input: &str) {
    assert!(!is_isbn(input), "{input:?}");
}

#[rstest]
#[case("4111111111111111", true)]
#[case("4111-1111-1111-1111", true)]
#[case("4111 1111 1111 1111", true)]
#[case("5500000000000004", true)]
#[case("378282246310005", true)]
#[case("6011111111111117", true)]
#[case("30569309025904", true)]
#[case("3530111333300000", true)]
#[case("4111111111111121", false)]
#[case("4111111111111112", false)]
#[case("1234567890123456", false)]
#[case("foo", false)]
#[case("", false)]
fn credit_card(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_credit_card(input), expected, "{input:?}");
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

#[rstest]
#[case("127.0.0.1", true)]
#[case("0.0.0.0", true)]
#[case("255.255.255.255", true)]
#[case("1.2.3.4", true)]
#[case("::1", true)]
#[case("2001:db8:0000:1:1:1:1:1", true)]
#[case("abc", false)]
#[case("256.0.0.0", false)]
#[case("0.0.0.256", false)]
#[case("", false)]
fn ip(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_ip(input), expected, "{input:?}");
}

#[rstest]
#[case("127.0.0.1", true, false)]
#[case("::ffff:192.0.2.1", true, true)]
#[case("::1", false, true)]
#[case("2001:db8::1", false, true)]
#[case("1.2.3", false, false)]
fn ip_families(#[case] input: &str, #[case] v4: bool, #[case] v6: bool) {
    assert_eq!(is_ipv4(input), v4, "{input:?}");
    assert_eq!(is_ipv6(input), v6, "{input:?}");
}

// ---------------------------------------------------------------------------
// Other
// ---------------------------------------------------------------------------

#[rstest]
#[case("", true)]
#[case(" ", false)]
#[case("foo", false)]
fn null(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_null(input), expected, "{input:?}");
}

#[test]
fn is_in_is_exact() {
    let stooges = ["moe", "larry", "curly"];
    assert!(!is_in("groucho", &stooges));
    assert!(is_in("moe", &stooges));
    assert!(!is_in("Moe", &stooges));
    assert!(!is_in("mo", &stooges));

    let owned: Vec<String> = stooges.iter().map(ToString::to_string).collect();
    assert!(is_in("curly", &owned));
}

#[rstest]
#[case("", 0, 0, true)]
#[case("abc", 1, 3, true)]
#[case("über", 4, 4, true)]
#[case("abcd", 1, 3, false)]
#[case("abc", 3, 1, false)]
#[case("", 1, 0, false)]
fn length(#[case] input: &str, #[case] min: usize, #[case] max: usize, #[case] expected: bool) {
    assert_eq!(is_length(input, min, max), expected, "{input:?}");
}
