//! Canonicalization passes over an edit script
//!
//! [`cleanup_merge`] is the workhorse: every script the engine emits goes
//! through it. [`cleanup_efficiency`] is an optional cost-based pass that
//! trades small `equal` islands for longer fused edits.

use crate::diff::Diff;
use crate::utf8;

/// Default cost of an edit operation used by [`cleanup_efficiency`].
pub const EDIT_COST: usize = 4;

/// Canonicalizes an edit script in place.
///
/// After this pass no operation has empty text, no two adjacent
/// operations share a kind, a deletion always precedes an insertion
/// within a replacement run, and no edit can slide over an adjacent
/// `equal` anchor. The concatenated source and destination texts are
/// preserved, and the pass is idempotent.
pub fn cleanup_merge(diffs: &mut Vec<Diff>) {
    if diffs.is_empty() {
        return;
    }
    // sentinel so the final run is processed like any interior one
    diffs.push(Diff::Equal(String::new()));

    let mut pointer = 0;
    let mut delete_count = 0usize;
    let mut insert_count = 0usize;
    let mut delete_text = String::new();
    let mut insert_text = String::new();

    while pointer < diffs.len() {
        if pointer < diffs.len() - 1 && diffs[pointer].text().is_empty() {
            diffs.remove(pointer);
            continue;
        }

        match &diffs[pointer] {
            Diff::Insert(text) => {
                insert_count += 1;
                insert_text.push_str(text);
                pointer += 1;
            }
            Diff::Delete(text) => {
                delete_count += 1;
                delete_text.push_str(text);
                pointer += 1;
            }
            Diff::Equal(_) => {
                let run = delete_count + insert_count;
                if !delete_text.is_empty() && !insert_text.is_empty() {
                    // factor shared affixes of the replacement out into
                    // the neighbouring equal ops
                    let prefix_len = utf8::common_prefix_len(&insert_text, &delete_text);
                    if prefix_len != 0 {
                        let prefix = insert_text[..prefix_len].to_string();
                        if pointer > run {
                            // the op just before the run is always the
                            // previously processed equal
                            diffs[pointer - run - 1].text_mut().push_str(&prefix);
                        } else {
                            diffs.insert(0, Diff::Equal(prefix));
                            pointer += 1;
                        }
                        insert_text.drain(..prefix_len);
                        delete_text.drain(..prefix_len);
                    }

                    let suffix_len = utf8::common_suffix_len(&insert_text, &delete_text);
                    if suffix_len != 0 {
                        let suffix = insert_text[insert_text.len() - suffix_len..].to_string();
                        diffs[pointer].text_mut().insert_str(0, &suffix);
                        insert_text.truncate(insert_text.len() - suffix_len);
                        delete_text.truncate(delete_text.len() - suffix_len);
                    }
                }

                if run > 0 {
                    let start = pointer - run;
                    let mut replacement = Vec::with_capacity(2);
                    if !delete_text.is_empty() {
                        replacement.push(Diff::Delete(std::mem::take(&mut delete_text)));
                    }
                    if !insert_text.is_empty() {
                        replacement.push(Diff::Insert(std::mem::take(&mut insert_text)));
                    }
                    let replacement_len = replacement.len();
                    diffs.splice(start..pointer, replacement);
                    pointer = start + replacement_len;
                }

                if pointer != 0 && diffs[pointer - 1].is_equal() {
                    // fuse with the preceding equal
                    let text = std::mem::take(diffs[pointer].text_mut());
                    diffs[pointer - 1].text_mut().push_str(&text);
                    diffs.remove(pointer);
                } else {
                    pointer += 1;
                }

                delete_count = 0;
                insert_count = 0;
                delete_text.clear();
                insert_text.clear();
            }
        }
    }

    if diffs.last().is_some_and(|diff| diff.text().is_empty()) {
        diffs.pop();
    }

    // Single edits surrounded by equalities can sometimes be shifted
    // sideways to line up with a neighbouring anchor, which in turn can
    // unlock further merges.
    let mut changes = false;
    let mut pointer = 1;
    while pointer + 1 < diffs.len() {
        if diffs[pointer - 1].is_equal() && diffs[pointer + 1].is_equal() {
            let previous = diffs[pointer - 1].text().to_string();
            let current = diffs[pointer].text().to_string();
            let next = diffs[pointer + 1].text().to_string();
            if current.ends_with(&previous) {
                // slide the edit left over the preceding equal
                let kept = current.len() - previous.len();
                *diffs[pointer].text_mut() = format!("{}{}", previous, &current[..kept]);
                diffs[pointer + 1].text_mut().insert_str(0, &previous);
                diffs.remove(pointer - 1);
                changes = true;
            } else if current.starts_with(&next) {
                // slide the edit right over the following equal
                diffs[pointer - 1].text_mut().push_str(&next);
                *diffs[pointer].text_mut() = format!("{}{}", &current[next.len()..], next);
                diffs.remove(pointer + 1);
                changes = true;
            }
        }
        pointer += 1;
    }

    if changes {
        cleanup_merge(diffs);
    }
}

/// Semantic cleanup of an edit script.
///
/// Currently the identity transformation.
// TODO: factor out equalities smaller than the edits surrounding them.
pub fn cleanup_semantic(_diffs: &mut Vec<Diff>) {}

/// Runs [`cleanup_efficiency_with`] at the default [`EDIT_COST`].
pub fn cleanup_efficiency(diffs: &mut Vec<Diff>) {
    cleanup_efficiency_with(diffs, EDIT_COST);
}

/// Splits short `equal` ops whose presence costs more than folding their
/// text into the surrounding edits.
///
/// An equality is split when it is fenced by a delete/insert pair on both
/// sides and spans fewer than `edit_cost` codepoints, or when three of
/// those four fence ops are present and it spans fewer than
/// `edit_cost / 2 + 1` codepoints. Runs to a fixpoint, so the pass is
/// idempotent.
pub fn cleanup_efficiency_with(diffs: &mut Vec<Diff>, edit_cost: usize) {
    loop {
        let mut changed = false;
        let mut pointer = 1;
        while pointer + 1 < diffs.len() {
            if diffs[pointer].is_equal() {
                let (pre_insert, pre_delete) = edit_kinds_before(diffs, pointer);
                let (post_insert, post_delete) = edit_kinds_after(diffs, pointer);
                let fences = usize::from(pre_insert)
                    + usize::from(pre_delete)
                    + usize::from(post_insert)
                    + usize::from(post_delete);
                let size = utf8::text_size(diffs[pointer].text());
                let split = (fences == 4 && size < edit_cost)
                    || (fences == 3 && size < edit_cost / 2 + 1);
                if split {
                    let text = diffs[pointer].text().to_string();
                    diffs.splice(
                        pointer..pointer + 1,
                        [Diff::Delete(text.clone()), Diff::Insert(text)],
                    );
                    changed = true;
                    pointer += 1;
                }
            }
            pointer += 1;
        }
        if !changed {
            break;
        }
        cleanup_merge(diffs);
    }
}

/// Kinds of edits between `pointer` and the previous equality.
fn edit_kinds_before(diffs: &[Diff], pointer: usize) -> (bool, bool) {
    let mut insert = false;
    let mut delete = false;
    for diff in diffs[..pointer].iter().rev() {
        match diff {
            Diff::Insert(_) => insert = true,
            Diff::Delete(_) => delete = true,
            Diff::Equal(_) => break,
        }
    }
    (insert, delete)
}

/// Kinds of edits between `pointer` and the next equality.
fn edit_kinds_after(diffs: &[Diff], pointer: usize) -> (bool, bool) {
    let mut insert = false;
    let mut delete = false;
    for diff in &diffs[pointer + 1..] {
        match diff {
            Diff::Insert(_) => insert = true,
            Diff::Delete(_) => delete = true,
            Diff::Equal(_) => break,
        }
    }
    (insert, delete)
}
