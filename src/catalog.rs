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

use std::fs::read_to_string;
use std::path::Path;
use std::time::Instant;

use crate::error::Fallible;
use crate::error::fail;
use crate::parser::parse_table;
use crate::types::word::CatalogIndex;
use crate::types::word::Word;
use crate::types::word::WordRecord;

/// An immutable snapshot of the word list. Every word is tagged with its
/// position at load time.
///
/// Reordering or editing the source file shifts the indices, and progress
/// recorded against the old order then points at different words (or at
/// nothing). There is no migration.
pub struct Catalog {
    words: Vec<Word>,
}

impl Catalog {
    pub fn new(records: Vec<WordRecord>) -> Self {
        let words = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Word::new(CatalogIndex::new(i), record))
            .collect();
        Self { words }
    }

    /// Parses the contents of a spreadsheet export. A table with no usable
    /// rows is an error.
    pub fn parse(text: &str) -> Fallible<Self> {
        let catalog = Self::new(parse_table(text));
        if catalog.is_empty() {
            return fail("catalog unavailable: the word list has no usable rows.");
        }
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail(format!(
                "catalog unavailable: {} does not exist.",
                path.display()
            ));
        }
        log::debug!("Loading catalog from {}...", path.display());
        let start = Instant::now();
        let text = match read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                return fail(format!(
                    "catalog unavailable: could not read {}: {e}",
                    path.display()
                ));
            }
        };
        let catalog = Self::parse(&text)?;
        let duration = start.elapsed().as_millis();
        log::debug!("Loaded {} words in {duration}ms.", catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Looks up a word by index. `None` means the index is stale.
    pub fn get(&self, index: CatalogIndex) -> Option<&Word> {
        self.words.get(index.get())
    }

    pub fn contains(&self, index: CatalogIndex) -> bool {
        index.get() < self.words.len()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::types::word::fixtures::record;

    /// A catalog of `n` words named `word0`, `word1`, ...
    pub fn catalog(n: usize) -> Catalog {
        Catalog::new((0..n).map(|i| record(&format!("word{i}"))).collect())
    }
}
