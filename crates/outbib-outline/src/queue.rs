//! Staging queue
//!
//! Parsed entries wait here between a read of bibliography text and the
//! write that turns them into headings. The queue is an explicit value
//! owned by the caller, passed into both operations; popping yields the
//! most recently staged entry first.

use outbib_bibtex::{parser, BibEntry};

use crate::error::Error;
use crate::heading::HeadingRecord;
use crate::mapper;
use crate::options::Options;

/// Caller-owned stack of parsed entries pending insertion as headings.
#[derive(Debug, Clone, Default)]
pub struct StagingQueue {
    entries: Vec<BibEntry>,
}

impl StagingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: BibEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the most recently staged entry.
    pub fn pop(&mut self) -> Option<BibEntry> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse bibliography text and stage every non-empty entry, in document
/// order. Returns the number staged.
pub fn stage(input: &str, queue: &mut StagingQueue) -> usize {
    let mut staged = 0;
    for entry in parser::parse(input) {
        if !entry.is_empty() {
            queue.push(entry);
            staged += 1;
        }
    }
    staged
}

/// Pop the most recent staged entry and translate it into a heading.
pub fn write_heading(queue: &mut StagingQueue, options: &Options) -> Result<HeadingRecord, Error> {
    let entry = queue.pop().ok_or(Error::EmptyStagingQueue)?;
    Ok(mapper::heading_from_entry(&entry, options))
}
