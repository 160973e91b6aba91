//! Fold-style readers over an edit script

use crate::diff::Diff;
use crate::utf8;

/// Reconstructs the source text of an edit script.
pub fn source_text(diffs: &[Diff]) -> String {
    diffs
        .iter()
        .filter(|diff| !diff.is_insert())
        .map(Diff::text)
        .collect()
}

/// Reconstructs the destination text of an edit script.
pub fn destination_text(diffs: &[Diff]) -> String {
    diffs
        .iter()
        .filter(|diff| !diff.is_delete())
        .map(Diff::text)
        .collect()
}

/// Number of codepoints inserted or deleted by the script.
///
/// Within each replacement run separated by equalities, insertions and
/// deletions overlap rather than add, so the run costs the larger of the
/// two.
pub fn levenshtein(diffs: &[Diff]) -> usize {
    let mut distance = 0;
    let mut inserted = 0;
    let mut deleted = 0;
    for diff in diffs {
        match diff {
            Diff::Insert(text) => inserted += utf8::text_size(text),
            Diff::Delete(text) => deleted += utf8::text_size(text),
            Diff::Equal(_) => {
                distance += inserted.max(deleted);
                inserted = 0;
                deleted = 0;
            }
        }
    }
    distance + inserted.max(deleted)
}

/// Flips a script's direction, turning inserts into deletes and back.
///
/// `invert(diff(a, b))` is a script from `b` to `a`.
pub fn invert(diffs: &[Diff]) -> Vec<Diff> {
    diffs
        .iter()
        .map(|diff| match diff {
            Diff::Equal(text) => Diff::Equal(text.clone()),
            Diff::Delete(text) => Diff::Insert(text.clone()),
            Diff::Insert(text) => Diff::Delete(text.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> Vec<Diff> {
        vec![
            Diff::equal("jump"),
            Diff::delete("s"),
            Diff::insert("ed"),
            Diff::equal(" over "),
            Diff::delete("the"),
            Diff::insert("a"),
            Diff::equal(" lazy"),
        ]
    }

    #[test]
    fn text_reconstruction() {
        assert_eq!(source_text(&script()), "jumps over the lazy");
        assert_eq!(destination_text(&script()), "jumped over a lazy");
    }

    #[test]
    fn levenshtein_counts_runs() {
        assert_eq!(levenshtein(&script()), 5);

        let trailing_run = vec![
            Diff::delete("abc"),
            Diff::insert("1234"),
            Diff::equal("xyz"),
        ];
        assert_eq!(levenshtein(&trailing_run), 4);

        let leading_equal = vec![
            Diff::equal("xyz"),
            Diff::delete("abc"),
            Diff::insert("1234"),
        ];
        assert_eq!(levenshtein(&leading_equal), 4);
    }

    #[test]
    fn levenshtein_counts_codepoints() {
        let diffs = vec![Diff::delete("🟢🟢"), Diff::insert("🟡")];
        assert_eq!(levenshtein(&diffs), 2);
    }

    #[test]
    fn inversion() {
        let inverted = invert(&script());
        assert_eq!(source_text(&inverted), "jumped over a lazy");
        assert_eq!(destination_text(&inverted), "jumps over the lazy");
    }
}
