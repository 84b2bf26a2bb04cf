use serde::Serialize;

use crate::models::candidate::{CandidateEmail, RoleKey};

pub const MAX_CANDIDATES: usize = 3;

/// Cyclic cursor over the normalised candidate emails.
///
/// `current_index` is always valid while the carousel is non-empty; every
/// navigation wraps modulo the length, and all of them are no-ops when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateCarousel {
    records: Vec<CandidateEmail>,
    current_index: usize,
}

impl CandidateCarousel {
    pub fn new(mut records: Vec<CandidateEmail>) -> Self {
        records.truncate(MAX_CANDIDATES);
        CandidateCarousel {
            records,
            current_index: 0,
        }
    }

    /// `None` means there is no content to show.
    pub fn current(&self) -> Option<&CandidateEmail> {
        self.records.get(self.current_index)
    }

    pub fn next(&mut self) {
        if let Some(len) = self.non_empty_len() {
            self.current_index = (self.current_index + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        if let Some(len) = self.non_empty_len() {
            self.current_index = (self.current_index + len - 1) % len;
        }
    }

    /// Moves to the record for `key`. Returns false (and stays put) if it is not present.
    pub fn jump_to(&mut self, key: RoleKey) -> bool {
        match self.records.iter().position(|r| r.role_key == key) {
            Some(index) => {
                self.current_index = index;
                true
            }
            None => false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Navigation is only meaningful with more than one record.
    pub fn can_navigate(&self) -> bool {
        self.records.len() > 1
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index,
            length: self.records.len(),
            current: self.current().cloned(),
            role_keys: self.records.iter().map(|r| r.role_key).collect(),
        }
    }

    fn non_empty_len(&self) -> Option<usize> {
        Some(self.records.len()).filter(|&len| len > 0)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub length: usize,
    pub current: Option<CandidateEmail>,
    pub role_keys: Vec<RoleKey>,
}
