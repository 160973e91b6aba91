use thiserror::Error;

/// Errors reported by the patch and match operations.
///
/// The diff engine itself is total and never fails; only the operations
/// that interrogate a text for a pattern or assemble patch records have
/// failure modes worth surfacing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The pattern handed to [`unique_match`] does not occur in the text
    /// at all. Occurring more than once is an ordinary `false` outcome,
    /// not an error.
    ///
    /// [`unique_match`]: crate::unique_match
    #[error("pattern not found in text")]
    PatternNotFound,

    /// [`make_patch`] ran into an `equal` run long enough to close the
    /// current patch and open a new one. Splitting a script into multiple
    /// patch records is not implemented.
    ///
    /// [`make_patch`]: crate::make_patch
    #[error("splitting into multiple patches is not implemented")]
    PatchSplitUnimplemented,
}
