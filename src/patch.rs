//! Grouping an edit script into patch records

use crate::diff::Diff;
use crate::error::Error;
use crate::utf8;

/// Codepoints of context kept on each side of a patch.
pub const PATCH_MARGIN: usize = 4;
/// Upper bound on the codepoint length of a patch.
pub const PATCH_MAX_PATCH_LEN: usize = 32;
/// Width in bits of the bitmasks used when locating a pattern in text.
pub const MATCH_MAXBITS: usize = 31;

/// A contiguous group of edits, with up to [`PATCH_MARGIN`] codepoints of
/// shared context on either side.
///
/// `source_start`/`dest_start` are codepoint offsets of the patch in the
/// source and destination texts; `source_length`/`dest_length` count the
/// codepoints the patch spans in each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub source_start: usize,
    pub dest_start: usize,
    pub source_length: usize,
    pub dest_length: usize,
    pub diffs: Vec<Diff>,
}

/// Groups the edits of a script into patch records.
///
/// `source` must be the source text the script was computed from. Every
/// edit is covered; equalities flanking the edits are trimmed to at most
/// [`PATCH_MARGIN`] codepoints of context.
///
/// An interior `equal` run of `2 * PATCH_MARGIN` codepoints or more would
/// close the current patch and open a new one; splitting is not
/// implemented and yields [`Error::PatchSplitUnimplemented`].
pub fn make_patch(diffs: &[Diff], source: &str) -> Result<Vec<Patch>, Error> {
    debug_assert_eq!(crate::readers::source_text(diffs), source);

    let mut patches = Vec::new();
    let mut patch = Patch::default();
    let mut has_edits = false;
    // the last equality walked before the patch opened
    let mut pending_context: Option<&str> = None;
    // codepoint cursors over the source and destination texts
    let mut source_cursor = 0usize;
    let mut dest_cursor = 0usize;

    for (index, diff) in diffs.iter().enumerate() {
        let size = utf8::text_size(diff.text());
        match diff {
            Diff::Insert(_) => {
                if !has_edits {
                    has_edits = true;
                    open_patch(&mut patch, pending_context.take(), source_cursor, dest_cursor);
                }
                patch.dest_length += size;
                patch.diffs.push(diff.clone());
                dest_cursor += size;
            }
            Diff::Delete(_) => {
                if !has_edits {
                    has_edits = true;
                    open_patch(&mut patch, pending_context.take(), source_cursor, dest_cursor);
                }
                patch.source_length += size;
                patch.diffs.push(diff.clone());
                source_cursor += size;
            }
            Diff::Equal(text) => {
                if has_edits {
                    if size >= 2 * PATCH_MARGIN {
                        return Err(Error::PatchSplitUnimplemented);
                    }
                    if index + 1 == diffs.len() {
                        // trailing context
                        let context = head_codepoints(text, PATCH_MARGIN);
                        if !context.is_empty() {
                            let context_size = utf8::text_size(context);
                            patch.source_length += context_size;
                            patch.dest_length += context_size;
                            patch.diffs.push(Diff::Equal(context.to_string()));
                        }
                    } else {
                        patch.source_length += size;
                        patch.dest_length += size;
                        patch.diffs.push(diff.clone());
                    }
                } else {
                    pending_context = Some(text.as_str());
                }
                source_cursor += size;
                dest_cursor += size;
            }
        }
    }

    if has_edits {
        patches.push(patch);
    }
    Ok(patches)
}

/// Seeds a fresh patch with up to [`PATCH_MARGIN`] codepoints of leading
/// context taken from the equality preceding its first edit.
fn open_patch(patch: &mut Patch, context: Option<&str>, source_cursor: usize, dest_cursor: usize) {
    patch.source_start = source_cursor;
    patch.dest_start = dest_cursor;
    let context = tail_codepoints(context.unwrap_or(""), PATCH_MARGIN);
    if !context.is_empty() {
        let context_size = utf8::text_size(context);
        patch.source_start -= context_size;
        patch.dest_start -= context_size;
        patch.source_length += context_size;
        patch.dest_length += context_size;
        patch.diffs.push(Diff::Equal(context.to_string()));
    }
}

/// Returns `true` iff `pattern` occurs in `text` exactly once.
///
/// The search is byte-wise and counts overlapping occurrences. A pattern
/// that never occurs is an error, kept distinct from the found-twice
/// `false` outcome.
pub fn unique_match(pattern: &str, text: &str) -> Result<bool, Error> {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();

    let mut occurrences = 0;
    let mut at = 0;
    while at + pattern.len() <= text.len() {
        if &text[at..at + pattern.len()] == pattern {
            occurrences += 1;
            if occurrences > 1 {
                return Ok(false);
            }
        }
        at += 1;
    }

    if occurrences == 0 {
        return Err(Error::PatternNotFound);
    }
    Ok(true)
}

fn head_codepoints(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((at, _)) => &text[..at],
        None => text,
    }
}

fn tail_codepoints(text: &str, count: usize) -> &str {
    let skip = utf8::text_size(text).saturating_sub(count);
    match text.char_indices().nth(skip) {
        Some((at, _)) => &text[at..],
        None => "",
    }
}
