//! Codepoint-boundary utilities over UTF-8 text
//!
//! The diff engine slices text at byte positions discovered by byte-wise
//! scans, so every cut has to be snapped back to a codepoint boundary
//! before the pieces can be handed around as `str` again. The helpers in
//! this module do that snapping, plus the codepoint-counted size checks
//! the engine bases its decisions on.

/// Number of codepoints in `s`.
pub fn text_size(s: &str) -> usize {
    s.chars().count()
}

/// Returns `true` if `s` contains fewer than `n` codepoints.
///
/// Stops scanning after at most `n` codepoints, so probing a huge string
/// for a small bound is cheap.
pub fn text_smaller_than(s: &str, n: usize) -> bool {
    s.chars().take(n).count() < n
}

/// Number of codepoints in a byte string which may not be valid UTF-8.
///
/// Malformed or truncated sequences are counted permissively: each stray
/// byte counts as one codepoint.
pub fn codepoint_count(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        let width = sequence_width(bytes[i]);
        if width > 1
            && i + width <= bytes.len()
            && bytes[i + 1..i + width].iter().all(|b| is_continuation(*b))
        {
            i += width;
        } else {
            i += 1;
        }
        count += 1;
    }
    count
}

/// Splits off the trailing bytes of `s` that form the start of an
/// incomplete UTF-8 sequence.
///
/// Returns `(valid, dangling)` where `valid ++ dangling == s` and `valid`
/// ends on a codepoint boundary. `dangling` holds at most 3 bytes and is
/// empty whenever `s` already ends on a boundary.
pub fn repair_tail(s: &[u8]) -> (&[u8], &[u8]) {
    let len = s.len();
    for i in (len.saturating_sub(3)..len).rev() {
        let width = sequence_width(s[i]);
        if width == 0 {
            // continuation byte, keep walking back toward the lead
            continue;
        }
        if i + width > len && s[i + 1..].iter().all(|b| is_continuation(*b)) {
            return s.split_at(i);
        }
        break;
    }
    (s, &s[len..])
}

/// Splits off the leading bytes of `s` that are the tail of a sequence
/// begun before the slice.
///
/// Returns `(dangling, valid)` where `dangling ++ valid == s` and `valid`
/// begins on a codepoint boundary.
pub fn repair_head(s: &[u8]) -> (&[u8], &[u8]) {
    let dangling = s
        .iter()
        .take(3)
        .take_while(|b| is_continuation(**b))
        .count();
    s.split_at(dangling)
}

/// The longest common prefix of `a` and `b`, ending on a codepoint
/// boundary.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    &a[..common_prefix_len(a, b)]
}

/// The longest common suffix of `a` and `b`, beginning on a codepoint
/// boundary.
pub fn common_suffix<'a>(a: &'a str, b: &str) -> &'a str {
    &a[a.len() - common_suffix_len(a, b)..]
}

/// Byte length of the longest boundary-aligned common prefix.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut n = a
        .as_bytes()
        .iter()
        .zip(b.as_bytes())
        .take_while(|(x, y)| x == y)
        .count();
    // The shared bytes are identical in both inputs, so boundary
    // structure agrees between them and checking one side suffices.
    while n > 0 && !a.is_char_boundary(n) {
        n -= 1;
    }
    n
}

/// Byte length of the longest boundary-aligned common suffix.
pub(crate) fn common_suffix_len(a: &str, b: &str) -> usize {
    let mut n = a
        .as_bytes()
        .iter()
        .rev()
        .zip(b.as_bytes().iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    while n > 0 && !a.is_char_boundary(a.len() - n) {
        n -= 1;
    }
    n
}

/// Splits two texts into their shared prefix, differing middles, and
/// shared suffix.
///
/// Returns `(prefix, middle1, middle2, suffix)` with
/// `prefix ++ middle1 ++ suffix == t1` and
/// `prefix ++ middle2 ++ suffix == t2`; all four parts are cut on
/// codepoint boundaries.
pub fn split_pre_and_suffix<'a>(t1: &'a str, t2: &'a str) -> (&'a str, &'a str, &'a str, &'a str) {
    let prefix_len = common_prefix_len(t1, t2);
    let (rest1, rest2) = (&t1[prefix_len..], &t2[prefix_len..]);
    let suffix_len = common_suffix_len(rest1, rest2);
    (
        &t1[..prefix_len],
        &rest1[..rest1.len() - suffix_len],
        &rest2[..rest2.len() - suffix_len],
        &rest1[rest1.len() - suffix_len..],
    )
}

/// Largest codepoint boundary in `s` not greater than `i`.
pub(crate) fn floor_boundary(s: &str, mut i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest codepoint boundary in `s` strictly greater than `i`.
pub(crate) fn next_boundary(s: &str, mut i: usize) -> usize {
    i += 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}

fn sequence_width(byte: u8) -> usize {
    match byte {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 0,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xc0 == 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(text_size(""), 0);
        assert_eq!(text_size("abc"), 3);
        assert_eq!(text_size("日本語"), 3);
        assert!(text_smaller_than("abc", 4));
        assert!(!text_smaller_than("abc", 3));
        assert!(text_smaller_than("", 1));
    }

    #[test]
    fn permissive_count() {
        assert_eq!(codepoint_count("héllo".as_bytes()), 5);
        // a lone continuation byte and a truncated lead each count as one
        assert_eq!(codepoint_count(&[0x61, 0x80, 0x62]), 3);
        assert_eq!(codepoint_count(&[0xf0, 0x9f]), 2);
    }

    #[test]
    fn tail_repair() {
        let snowman = "\u{2603}".as_bytes();
        assert_eq!(repair_tail(snowman), (&snowman[..], &snowman[3..]));
        assert_eq!(repair_tail(&snowman[..2]), (&snowman[..0], &snowman[..2]));
        let (valid, dangling) = repair_tail(b"ab");
        assert_eq!(valid, b"ab");
        assert!(dangling.is_empty());
    }

    #[test]
    fn head_repair() {
        let snowman = "\u{2603}".as_bytes();
        assert_eq!(repair_head(&snowman[1..]), (&snowman[1..], &snowman[3..]));
        let (dangling, valid) = repair_head(b"ab");
        assert!(dangling.is_empty());
        assert_eq!(valid, b"ab");
    }

    #[test]
    fn prefix_stops_on_boundary() {
        // both emojis share their first three bytes
        assert_eq!(common_prefix("test🟢123", "test🟡123"), "test");
        assert_eq!(common_prefix("abc", "abd"), "ab");
        assert_eq!(common_prefix("", "abc"), "");
    }

    #[test]
    fn suffix_stops_on_boundary() {
        assert_eq!(common_suffix("123🟢test", "123🟡test"), "test");
        assert_eq!(common_suffix("xba", "yba"), "ba");
        assert_eq!(common_suffix("é", "è"), "");
    }

    #[test]
    fn splitting() {
        let (prefix, mid1, mid2, suffix) = split_pre_and_suffix("abXcd", "abYZcd");
        assert_eq!((prefix, mid1, mid2, suffix), ("ab", "X", "YZ", "cd"));

        let (prefix, mid1, mid2, suffix) = split_pre_and_suffix("same", "same");
        assert_eq!((prefix, mid1, mid2, suffix), ("same", "", "", ""));
    }

    #[test]
    fn boundaries() {
        let s = "a🟢b";
        assert_eq!(floor_boundary(s, 3), 1);
        assert_eq!(floor_boundary(s, 9), s.len());
        assert_eq!(next_boundary(s, 1), 5);
        assert_eq!(next_boundary(s, 5), 6);
    }
}
