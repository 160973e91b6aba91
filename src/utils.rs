//! Common utilities

use std::collections::{hash_map::Entry, HashMap};

// Codepoints in the surrogate gap are not valid `char`s, so the line
// vocabulary skips over them. The mapping stays bijective.
const SURROGATE_START: usize = 0xd800;
const SURROGATE_LEN: usize = 0x800;

/// Classifies lines, assigning each distinct line a synthetic codepoint
/// shared across every text fed to the same classifier.
#[derive(Default)]
pub(crate) struct LineClassifier<'a> {
    unique_ids: HashMap<&'a str, char>,
    lines: Vec<&'a str>,
}

impl<'a> LineClassifier<'a> {
    fn classify(&mut self, line: &'a str) -> char {
        match self.unique_ids.entry(line) {
            Entry::Occupied(o) => *o.get(),
            Entry::Vacant(v) => {
                let id = line_id(self.lines.len());
                self.lines.push(line);
                *v.insert(id)
            }
        }
    }

    /// Collapses `text` to a synthetic string with one codepoint per line.
    pub fn compress(&mut self, text: &'a str) -> String {
        LineIter::new(text).map(|line| self.classify(line)).collect()
    }

    /// The vocabulary built so far, indexed by [`line_index`].
    pub fn into_lines(self) -> Vec<&'a str> {
        self.lines
    }
}

/// Synthetic codepoint for the `index`-th distinct line.
pub(crate) fn line_id(index: usize) -> char {
    let codepoint = if index < SURROGATE_START {
        index
    } else {
        index + SURROGATE_LEN
    };
    match char::from_u32(codepoint as u32) {
        Some(id) => id,
        None => panic!("line vocabulary exhausted at {} distinct lines", index),
    }
}

/// Inverse of [`line_id`].
pub(crate) fn line_index(id: char) -> usize {
    let codepoint = id as usize;
    if codepoint < SURROGATE_START {
        codepoint
    } else {
        codepoint - SURROGATE_LEN
    }
}

/// Iterator over the lines of a string, including the `\n` character.
pub(crate) struct LineIter<'a>(&'a str);

impl<'a> LineIter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self(text)
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }

        let end = if let Some(idx) = self.0.find('\n') {
            idx + 1
        } else {
            self.0.len()
        };

        let (line, remaining) = self.0.split_at(end);
        self.0 = remaining;
        Some(line)
    }
}
