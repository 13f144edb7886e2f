// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// Difficulty assigned to rows whose difficulty column is missing or invalid.
pub const DEFAULT_DIFFICULTY: i64 = 2;

/// A word's position in the catalog. This is the word's identity in the
/// persisted progress state, so it is only meaningful against the catalog
/// snapshot it was recorded with.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogIndex(usize);

impl CatalogIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Display for CatalogIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One row of the vocabulary spreadsheet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WordRecord {
    pub category: String,
    /// The answer key for quizzes.
    pub english: String,
    /// The quiz prompt.
    pub korean: String,
    pub example1: String,
    pub example2: String,
    pub example3: String,
    pub frequency: String,
    pub difficulty: i64,
}

impl WordRecord {
    pub fn examples(&self) -> [&str; 3] {
        [&self.example1, &self.example2, &self.example3]
    }
}

/// A word record tagged with the catalog index it was loaded at. Batches and
/// quiz results carry this, so the index never has to be looked up again.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Word {
    index: CatalogIndex,
    record: WordRecord,
}

impl Word {
    pub fn new(index: CatalogIndex, record: WordRecord) -> Self {
        Self { index, record }
    }

    pub fn index(&self) -> CatalogIndex {
        self.index
    }

    pub fn record(&self) -> &WordRecord {
        &self.record
    }

    pub fn english(&self) -> &str {
        &self.record.english
    }

    pub fn korean(&self) -> &str {
        &self.record.korean
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A record whose fields are derived from `english`.
    pub fn record(english: &str) -> WordRecord {
        WordRecord {
            category: "soil".to_string(),
            english: english.to_string(),
            korean: format!("{english} (ko)"),
            example1: format!("The {english} is here."),
            example2: String::new(),
            example3: String::new(),
            frequency: "high".to_string(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }

    pub fn word(index: usize, english: &str) -> Word {
        Word::new(CatalogIndex::new(index), record(english))
    }
}
