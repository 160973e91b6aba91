//! Tools for finding and manipulating differences between UTF-8 texts
//!
//! ## Overview
//!
//! This library finds the differences between two strings as an *edit
//! script*: an ordered sequence of [`Diff`] operations (`Equal`, `Delete`,
//! `Insert`) that rebuilds the destination text from the source. The
//! diff implementation is based on [Myers' diff algorithm], sped up on
//! realistic inputs by a half-match divide-and-conquer heuristic and a
//! line-compression mode, at the cost of not always producing a minimum
//! script.
//!
//! Every boundary the engine cuts lands on a codepoint boundary, so each
//! operation of a script always carries valid UTF-8.
//!
//! ## Computing a diff
//!
//! ```
//! use rift::{diff, source_text, destination_text, Diff};
//!
//! let old = "fruit flies like a banana";
//! let new = "fruit flies eat a banana";
//!
//! let edits = diff(old, new);
//! assert_eq!(
//!     edits,
//!     vec![
//!         Diff::equal("fruit flies "),
//!         Diff::delete("like"),
//!         Diff::insert("eat"),
//!         Diff::equal(" a banana"),
//!     ],
//! );
//!
//! // a script always reproduces both of its inputs
//! assert_eq!(source_text(&edits), old);
//! assert_eq!(destination_text(&edits), new);
//! ```
//!
//! ## Reading a script
//!
//! [`levenshtein`] measures how much a script changes, [`pretty_html`]
//! renders it as an HTML fragment, and [`DiffFormatter`] prints it inline
//! for a terminal:
//!
//! ```
//! use rift::{diff, levenshtein, DiffFormatter};
//!
//! let edits = diff("fruit flies like a banana", "fruit flies eat a banana");
//! assert_eq!(levenshtein(&edits), 4);
//!
//! let rendered = DiffFormatter::new().fmt_diffs(&edits).to_string();
//! assert_eq!(rendered, "fruit flies [-like-]{+eat+} a banana");
//! ```
//!
//! ## Building a patch
//!
//! [`make_patch`] groups the edits of a script into a [`Patch`] record
//! with a few codepoints of context on each side:
//!
//! ```
//! use rift::{diff, make_patch};
//!
//! let old = "the quick brown fox";
//! let new = "the quick red fox";
//!
//! let edits = diff(old, new);
//! let patches = make_patch(&edits, old)?;
//! assert_eq!(patches.len(), 1);
//! # Ok::<(), rift::Error>(())
//! ```
//!
//! [Myers' diff algorithm]: http://www.xmailserver.org/diff2.pdf

mod cleanup;
mod diff;
mod error;
mod format;
mod html;
mod patch;
mod readers;
mod utf8;
mod utils;

pub use cleanup::{
    cleanup_efficiency, cleanup_efficiency_with, cleanup_merge, cleanup_semantic, EDIT_COST,
};
pub use diff::{diff, diff_bisect, diff_linemode, half_match, Diff, HalfMatch};
pub use error::Error;
pub use format::DiffFormatter;
pub use html::pretty_html;
pub use patch::{
    make_patch, unique_match, Patch, MATCH_MAXBITS, PATCH_MARGIN, PATCH_MAX_PATCH_LEN,
};
pub use readers::{destination_text, invert, levenshtein, source_text};
pub use utf8::{
    codepoint_count, common_prefix, common_suffix, repair_head, repair_tail, split_pre_and_suffix,
    text_size, text_smaller_than,
};
