use super::*;
use crate::readers::{destination_text, source_text};

#[test]
fn equal_inputs() {
    assert_eq!(diff("", ""), vec![]);
    assert_eq!(diff("abc", "abc"), vec![Diff::equal("abc")]);
}

#[test]
fn one_side_empty() {
    assert_eq!(diff("", "abc"), vec![Diff::insert("abc")]);
    assert_eq!(diff("abc", ""), vec![Diff::delete("abc")]);
}

#[test]
fn shared_affixes_become_anchors() {
    assert_eq!(
        diff("the cat", "the hairy cat"),
        vec![
            Diff::equal("the "),
            Diff::insert("hairy "),
            Diff::equal("cat"),
        ]
    );
}

#[test]
fn containment_shortcut() {
    assert_eq!(
        diff("xyz", "abcxyzdef"),
        vec![
            Diff::insert("abc"),
            Diff::equal("xyz"),
            Diff::insert("def"),
        ]
    );
    assert_eq!(
        diff("abcxyzdef", "xyz"),
        vec![
            Diff::delete("abc"),
            Diff::equal("xyz"),
            Diff::delete("def"),
        ]
    );
}

#[test]
fn single_codepoint_short_side() {
    assert_eq!(
        diff("a", "xy"),
        vec![Diff::delete("a"), Diff::insert("xy")]
    );
}

#[test]
fn whole_word_replacement() {
    assert_eq!(
        diff("fruit flies like a banana", "fruit flies eat a banana"),
        vec![
            Diff::equal("fruit flies "),
            Diff::delete("like"),
            Diff::insert("eat"),
            Diff::equal(" a banana"),
        ]
    );
}

#[test]
fn dissimilar_inputs_collapse_to_replacement() {
    assert_eq!(
        diff("abc", "def"),
        vec![Diff::delete("abc"), Diff::insert("def")]
    );
}

#[test]
fn unicode_replacement_stays_on_boundaries() {
    // the two emojis share their first bytes; a byte-based split would
    // tear the codepoints apart
    assert_eq!(
        diff("🟢x", "🟡x"),
        vec![
            Diff::delete("🟢"),
            Diff::insert("🟡"),
            Diff::equal("x"),
        ]
    );
}

#[test]
fn half_match_divides_and_conquers() {
    assert_eq!(
        diff("qwerty1234567890uiop", "zxcv1234567890bnm"),
        vec![
            Diff::delete("qwerty"),
            Diff::insert("zxcv"),
            Diff::equal("1234567890"),
            Diff::delete("uiop"),
            Diff::insert("bnm"),
        ]
    );
}

#[test]
fn bisect_anchors_shared_codepoints() {
    assert_eq!(
        diff_bisect("cat", "map"),
        vec![
            Diff::delete("c"),
            Diff::insert("m"),
            Diff::equal("a"),
            Diff::delete("t"),
            Diff::insert("p"),
        ]
    );
}

#[test]
fn bisect_split_concatenates_halves() {
    // the two halves are diffed independently, so same-kind ops can sit
    // next to each other across the seam
    assert_eq!(
        diff_bisect("cat zebra", "cat mouse dog sheep monkey chicken zebra"),
        vec![
            Diff::equal("cat "),
            Diff::insert("mouse dog sheep "),
            Diff::insert("monkey chicken "),
            Diff::equal("zebra"),
        ]
    );
}

#[test]
fn bisect_without_common_codepoints() {
    assert_eq!(
        diff_bisect("abc", "xyz"),
        vec![Diff::delete("abc"), Diff::insert("xyz")]
    );
}

#[test]
fn bisect_trivial_inputs() {
    assert_eq!(diff_bisect("", ""), vec![]);
    assert_eq!(diff_bisect("ab", "ab"), vec![Diff::equal("ab")]);
    assert_eq!(diff_bisect("", "ab"), vec![Diff::insert("ab")]);
    assert_eq!(diff_bisect("ab", ""), vec![Diff::delete("ab")]);
}

#[test]
fn bisect_reconstructs_inputs() {
    let cases = [
        ("ABCABBA", "CBABAC"),
        ("abgdef", "gh"),
        ("🟢abc🟡", "🔵abc🟣"),
        ("1A B A 2", "1A "),
        ("mississippi", "ippississim"),
    ];
    for (old, new) in cases {
        let edits = diff_bisect(old, new);
        assert_eq!(source_text(&edits), old, "source of {:?} -> {:?}", old, new);
        assert_eq!(
            destination_text(&edits),
            new,
            "destination of {:?} -> {:?}",
            old,
            new
        );
    }
}

#[test]
fn linemode_keeps_trailing_runs_whole() {
    assert_eq!(
        diff_linemode("hello\nworld\n", "hello\nmaas\n"),
        vec![
            Diff::equal("hello\n"),
            Diff::delete("world\n"),
            Diff::insert("maas\n"),
        ]
    );
}

#[test]
fn linemode_rediffs_interior_runs() {
    // The run before "three\n" is re-diffed at codepoint granularity and
    // the sub-script spliced in as-is. Its trailing "wo\n" equality sits
    // next to the line anchor that closed the run; cleanup_merge fuses
    // that seam, which is what `diff` does with line-mode output.
    let mut edits = diff_linemode("one\ntwo\nthree\n", "one\n2wo\nthree\n");
    assert_eq!(
        edits,
        vec![
            Diff::equal("one\n"),
            Diff::delete("t"),
            Diff::insert("2"),
            Diff::equal("wo\n"),
            Diff::equal("three\n"),
        ]
    );

    crate::cleanup::cleanup_merge(&mut edits);
    assert_eq!(
        edits,
        vec![
            Diff::equal("one\n"),
            Diff::delete("t"),
            Diff::insert("2"),
            Diff::equal("wo\nthree\n"),
        ]
    );
}

#[test]
fn diff_merges_linemode_output() {
    assert_eq!(
        diff("aaa\nbbb\nccc\n", "aaa\nxxx\nccc\n"),
        vec![
            Diff::equal("aaa\n"),
            Diff::delete("bbb"),
            Diff::insert("xxx"),
            Diff::equal("\nccc\n"),
        ]
    );
}

#[test]
fn linemode_survives_a_large_vocabulary() {
    // more than 128 distinct lines pushes the synthetic codepoints past
    // the ASCII range
    let old: String = (0..150).map(|i| format!("line {}\n", i)).collect();
    let new: String = (0..150)
        .map(|i| {
            if i == 75 {
                "changed\n".to_string()
            } else {
                format!("line {}\n", i)
            }
        })
        .collect();

    let edits = diff_linemode(&old, &new);
    assert_eq!(source_text(&edits), old);
    assert_eq!(destination_text(&edits), new);
    // the untouched lines around the change survive as equalities
    assert!(edits
        .iter()
        .any(|d| d.is_equal() && d.text().contains("line 74\n")));
}

#[test]
fn half_match_flanks() {
    assert_eq!(
        half_match("1234567890", "a345678z"),
        Some(HalfMatch {
            old_head: "12",
            old_tail: "90",
            new_head: "a",
            new_tail: "z",
            common: "345678",
        })
    );

    // swapping the inputs swaps the flanks consistently
    assert_eq!(
        half_match("a345678z", "1234567890"),
        Some(HalfMatch {
            old_head: "a",
            old_tail: "z",
            new_head: "12",
            new_tail: "90",
            common: "345678",
        })
    );
}

#[test]
fn half_match_bails_out() {
    // too short
    assert_eq!(half_match("abc", "def"), None);
    // the shorter input is less than half the longer one
    assert_eq!(half_match("1234567890", "23"), None);
    // nothing shared
    assert_eq!(half_match("qwertyuiop", "asdfghjklz"), None);
}

#[test]
fn diff_reconstructs_inputs() {
    let cases = [
        ("", "plain insertion"),
        ("plain deletion", ""),
        ("the quick brown fox", "the quick red fox"),
        ("a\nb\nc\nd\ne\n", "a\nB\nc\nD\ne\n"),
        ("🟢🟡🔵", "🟡🟢🔵"),
        ("internationalization", "internationalisation"),
    ];
    for (old, new) in cases {
        let edits = diff(old, new);
        assert_eq!(source_text(&edits), old, "source of {:?} -> {:?}", old, new);
        assert_eq!(
            destination_text(&edits),
            new,
            "destination of {:?} -> {:?}",
            old,
            new
        );
    }
}
