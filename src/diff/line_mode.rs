//! Line-granularity diffing
//!
//! Collapses each distinct line of the two inputs to a single synthetic
//! codepoint, diffs the (much shorter) synthetic strings, and re-expands
//! the result. Replacement runs anchored between equalities are then
//! re-diffed at codepoint granularity.

use super::{diff_impl, Diff};
use crate::utils::{line_index, LineClassifier};
use tracing::debug;

pub(crate) fn line_mode(old: &str, new: &str) -> Vec<Diff> {
    let mut classifier = LineClassifier::default();
    let old_synthetic = classifier.compress(old);
    let new_synthetic = classifier.compress(new);
    let lines = classifier.into_lines();

    debug!(distinct_lines = lines.len(), "diffing at line granularity");

    let mut diffs = diff_impl(&old_synthetic, &new_synthetic, false);

    // Swap the synthetic codepoints back for their source lines. The
    // synthetic script is already merged, and substituting whole lines for
    // codepoints cannot introduce empty or adjacent same-kind ops, so the
    // script stays canonical. Merging again at full-text granularity would
    // peel the shared trailing newline of a replacement run out across a
    // line boundary.
    for diff in diffs.iter_mut() {
        let expanded: String = diff
            .text()
            .chars()
            .map(|id| lines[line_index(id)])
            .collect();
        *diff.text_mut() = expanded;
    }

    rediff_replacements(&mut diffs);
    diffs
}

/// Re-diffs paired delete/insert runs at codepoint granularity.
///
/// A run is only rewritten once an `equal` op closes it; a run still
/// pending at the end of the script is flushed unchanged.
fn rediff_replacements(diffs: &mut Vec<Diff>) {
    let mut pointer = 0;
    let mut delete_count = 0usize;
    let mut insert_count = 0usize;
    let mut delete_text = String::new();
    let mut insert_text = String::new();

    while pointer < diffs.len() {
        match &diffs[pointer] {
            Diff::Insert(text) => {
                insert_count += 1;
                insert_text.push_str(text);
            }
            Diff::Delete(text) => {
                delete_count += 1;
                delete_text.push_str(text);
            }
            Diff::Equal(_) => {
                if delete_count >= 1 && insert_count >= 1 {
                    let start = pointer - delete_count - insert_count;
                    let replacement = diff_impl(&delete_text, &insert_text, false);
                    let replacement_len = replacement.len();
                    diffs.splice(start..pointer, replacement);
                    pointer = start + replacement_len;
                }
                delete_count = 0;
                insert_count = 0;
                delete_text.clear();
                insert_text.clear();
            }
        }
        pointer += 1;
    }
}
