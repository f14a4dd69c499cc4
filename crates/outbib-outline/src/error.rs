//! Error types for the outline-heading side

/// Errors raised by staging, fleshout, and export operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A write was attempted with nothing parsed onto the staging queue.
    #[error("staging queue is empty")]
    EmptyStagingQueue,
    /// The user aborted a prompt; the entry under edit was left untouched.
    #[error("prompt aborted")]
    Aborted,
    /// A heading failed to translate mid-batch; output written before
    /// `position` is preserved.
    #[error("export failed at heading {position}")]
    Export {
        position: usize,
        #[source]
        source: outbib_bibtex::Error,
    },
    #[error(transparent)]
    Bibtex(#[from] outbib_bibtex::Error),
}
