use crate::cleanup::cleanup_merge;
use crate::utf8::{self, split_pre_and_suffix};
use tracing::trace;

mod bisect;
mod line_mode;

#[cfg(test)]
mod tests;

/// Byte size past which an input is considered long enough to be worth
/// compressing to lines before diffing.
const LINE_MODE_THRESHOLD: usize = 100;

/// A single edit operation over UTF-8 text.
///
/// An edit script is an ordered `Vec<Diff>`; concatenating the text of all
/// non-insert ops reproduces the source and all non-delete ops the
/// destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diff {
    /// Text present in both the source and the destination
    Equal(String),
    /// Text present only in the source
    Delete(String),
    /// Text present only in the destination
    Insert(String),
}

impl Diff {
    /// Construct an `Equal` operation
    pub fn equal(text: impl Into<String>) -> Self {
        Diff::Equal(text.into())
    }

    /// Construct a `Delete` operation
    pub fn delete(text: impl Into<String>) -> Self {
        Diff::Delete(text.into())
    }

    /// Construct an `Insert` operation
    pub fn insert(text: impl Into<String>) -> Self {
        Diff::Insert(text.into())
    }

    /// The text carried by the operation
    pub fn text(&self) -> &str {
        match self {
            Diff::Equal(text) | Diff::Delete(text) | Diff::Insert(text) => text,
        }
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        match self {
            Diff::Equal(text) | Diff::Delete(text) | Diff::Insert(text) => text,
        }
    }

    /// Returns `true` for an `Equal` operation
    pub fn is_equal(&self) -> bool {
        matches!(self, Diff::Equal(_))
    }

    /// Returns `true` for a `Delete` operation
    pub fn is_delete(&self) -> bool {
        matches!(self, Diff::Delete(_))
    }

    /// Returns `true` for an `Insert` operation
    pub fn is_insert(&self) -> bool {
        matches!(self, Diff::Insert(_))
    }
}

/// Computes the differences between `old` and `new` as an edit script.
///
/// The script is canonicalized with [`cleanup_merge`]: no empty ops, no
/// two adjacent ops of the same kind, deletions before insertions within
/// a replacement.
///
/// ```
/// use rift::{diff, Diff};
///
/// let edits = diff("fruit flies like a banana", "fruit flies eat a banana");
/// assert_eq!(
///     edits,
///     vec![
///         Diff::equal("fruit flies "),
///         Diff::delete("like"),
///         Diff::insert("eat"),
///         Diff::equal(" a banana"),
///     ],
/// );
/// ```
///
/// [`cleanup_merge`]: crate::cleanup_merge
pub fn diff(old: &str, new: &str) -> Vec<Diff> {
    diff_impl(old, new, true)
}

/// Diffs by middle-snake search alone, skipping the line-mode and
/// half-match shortcuts taken by [`diff`].
pub fn diff_bisect(old: &str, new: &str) -> Vec<Diff> {
    if old == new {
        if old.is_empty() {
            return Vec::new();
        }
        return vec![Diff::Equal(old.to_string())];
    }
    if old.is_empty() {
        return vec![Diff::Insert(new.to_string())];
    }
    if new.is_empty() {
        return vec![Diff::Delete(old.to_string())];
    }
    bisect::bisect(old, new)
}

/// Diffs at line granularity, then re-diffs replacement runs anchored
/// between shared lines at codepoint granularity.
pub fn diff_linemode(old: &str, new: &str) -> Vec<Diff> {
    line_mode::line_mode(old, new)
}

pub(crate) fn diff_impl(old: &str, new: &str, check_lines: bool) -> Vec<Diff> {
    if old == new {
        if old.is_empty() {
            return Vec::new();
        }
        return vec![Diff::Equal(old.to_string())];
    }

    trace!(
        old_len = old.len(),
        new_len = new.len(),
        check_lines,
        "diffing"
    );

    let (prefix, mid_old, mid_new, suffix) = split_pre_and_suffix(old, new);
    let mut diffs = compute(mid_old, mid_new, check_lines);
    if !prefix.is_empty() {
        diffs.insert(0, Diff::Equal(prefix.to_string()));
    }
    if !suffix.is_empty() {
        diffs.push(Diff::Equal(suffix.to_string()));
    }
    cleanup_merge(&mut diffs);
    diffs
}

/// Diffs two texts known to share no common prefix or suffix.
fn compute(old: &str, new: &str, check_lines: bool) -> Vec<Diff> {
    if old.is_empty() {
        return vec![Diff::Insert(new.to_string())];
    }
    if new.is_empty() {
        return vec![Diff::Delete(old.to_string())];
    }

    let old_longer = old.len() > new.len();
    let (long, short) = if old_longer { (old, new) } else { (new, old) };

    if let Some(at) = long.find(short) {
        // the shorter text is contained whole within the longer one
        let outer = |text: &str| {
            if old_longer {
                Diff::Delete(text.to_string())
            } else {
                Diff::Insert(text.to_string())
            }
        };
        return vec![
            outer(&long[..at]),
            Diff::Equal(short.to_string()),
            outer(&long[at + short.len()..]),
        ];
    }

    if utf8::text_smaller_than(short, 2) {
        // a single codepoint matches nothing after the containment check
        return vec![
            Diff::Delete(old.to_string()),
            Diff::Insert(new.to_string()),
        ];
    }

    if let Some(hm) = half_match(old, new) {
        let mut diffs = diff_impl(hm.old_head, hm.new_head, false);
        diffs.push(Diff::Equal(hm.common.to_string()));
        diffs.extend(diff_impl(hm.old_tail, hm.new_tail, false));
        return diffs;
    }

    if check_lines || old.len() > LINE_MODE_THRESHOLD || new.len() > LINE_MODE_THRESHOLD {
        return line_mode::line_mode(old, new);
    }

    bisect::bisect(old, new)
}

/// A substring shared by both inputs at least half as long as the longer
/// one, together with the four texts flanking it.
///
/// `old == old_head ++ common ++ old_tail` and
/// `new == new_head ++ common ++ new_tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfMatch<'a> {
    pub old_head: &'a str,
    pub old_tail: &'a str,
    pub new_head: &'a str,
    pub new_tail: &'a str,
    pub common: &'a str,
}

/// Searches for a substring of the shorter input, at least half as long
/// as the longer one, present in both.
///
/// A successful half-match lets the diff divide and conquer around the
/// shared middle instead of paying for a full middle-snake search. The
/// search is seeded from two windows of the longer text (at its first
/// quarter and at its midpoint) and is a heuristic: it can miss a
/// qualifying substring, but never fabricates one.
pub fn half_match<'a>(old: &'a str, new: &'a str) -> Option<HalfMatch<'a>> {
    let old_longer = old.len() > new.len();
    let (long, short) = if old_longer { (old, new) } else { (new, old) };
    if long.len() < 4 || short.len() * 2 < long.len() {
        return None;
    }

    let quarter = half_match_at(long, short, (long.len() + 3) / 4);
    let half = half_match_at(long, short, (long.len() + 1) / 2);
    let seeded = match (quarter, half) {
        (None, None) => return None,
        (Some(seeded), None) | (None, Some(seeded)) => seeded,
        // a tie goes to the midpoint seed
        (Some(q), Some(h)) => {
            if q.common.len() > h.common.len() {
                q
            } else {
                h
            }
        }
    };

    Some(if old_longer {
        HalfMatch {
            old_head: seeded.long_head,
            old_tail: seeded.long_tail,
            new_head: seeded.short_head,
            new_tail: seeded.short_tail,
            common: seeded.common,
        }
    } else {
        HalfMatch {
            old_head: seeded.short_head,
            old_tail: seeded.short_tail,
            new_head: seeded.long_head,
            new_tail: seeded.long_tail,
            common: seeded.common,
        }
    })
}

#[derive(Debug, Clone, Copy)]
struct SeedMatch<'a> {
    long_head: &'a str,
    long_tail: &'a str,
    short_head: &'a str,
    short_tail: &'a str,
    common: &'a str,
}

/// Scans `short` for every occurrence of a quarter-length seed taken from
/// `long` at `seed_at`, keeping the occurrence whose shared stretch around
/// the seed is longest.
fn half_match_at<'a>(long: &'a str, short: &'a str, seed_at: usize) -> Option<SeedMatch<'a>> {
    // snap the seed window onto codepoint boundaries
    let seed_start = utf8::floor_boundary(long, seed_at);
    let seed_end = utf8::floor_boundary(long, seed_start + long.len() / 4);
    if seed_end <= seed_start {
        return None;
    }
    let seed = &long[seed_start..seed_end];

    let mut best: Option<SeedMatch<'a>> = None;
    let mut from = 0;
    while let Some(found) = short[from..].find(seed) {
        let at = from + found;
        let prefix_len = utf8::common_prefix_len(&long[seed_start..], &short[at..]);
        let suffix_len = utf8::common_suffix_len(&long[..seed_start], &short[..at]);
        if best.map_or(0, |b| b.common.len()) < suffix_len + prefix_len {
            best = Some(SeedMatch {
                common: &short[at - suffix_len..at + prefix_len],
                long_head: &long[..seed_start - suffix_len],
                long_tail: &long[seed_start + prefix_len..],
                short_head: &short[..at - suffix_len],
                short_tail: &short[at + prefix_len..],
            });
        }
        from = utf8::next_boundary(short, at);
    }

    best.filter(|b| b.common.len() * 2 >= long.len())
}
