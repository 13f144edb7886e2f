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

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::types::session::SessionRecord;
use crate::types::word::CatalogIndex;

/// The learner's classification of catalog words, plus the session history.
///
/// The three sets may overlap: a mastered word stays in `learned`, and a
/// word can be in `review_pool` and `learned` at once. Sets are ordered so
/// that anything iterating over them (notably the review fallback, which
/// takes the first entries of `learned`) is deterministic.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressState {
    /// Words shown in a completed learning session.
    pub learned: BTreeSet<CatalogIndex>,
    /// Words that passed a high-accuracy review.
    pub mastered: BTreeSet<CatalogIndex>,
    /// Words missed in a review, due for re-review.
    pub review_pool: BTreeSet<CatalogIndex>,
    /// Append-only, oldest first.
    pub history: Vec<SessionRecord>,
}

impl ProgressState {
    pub fn empty() -> Self {
        Self::default()
    }
}
