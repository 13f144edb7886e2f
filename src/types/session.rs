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

use serde::Deserialize;
use serde::Serialize;

use crate::types::timestamp::Timestamp;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    /// A learning session over new words.
    New,
    /// A typed-answer quiz.
    Review,
}

impl SessionType {
    pub fn as_str(&self) -> &str {
        match self {
            SessionType::New => "new",
            SessionType::Review => "review",
        }
    }
}

/// A finished session, as stored in the progress history.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    pub date: Timestamp,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub correct: usize,
    pub total: usize,
}

impl SessionRecord {
    pub fn review(date: Timestamp, correct: usize, total: usize) -> Self {
        Self {
            date,
            session_type: SessionType::Review,
            correct,
            total,
        }
    }

    /// The session's accuracy as a rounded percentage, or `None` for a
    /// session with no questions.
    pub fn accuracy_percent(&self) -> Option<u32> {
        percent(self.correct, self.total)
    }
}

/// Rounds `100 * correct / total` to the nearest integer, halves rounding
/// up. Returns `None` when `total` is zero.
pub fn percent(correct: usize, total: usize) -> Option<u32> {
    if total == 0 {
        None
    } else {
        Some((100.0 * correct as f64 / total as f64).round() as u32)
    }
}
