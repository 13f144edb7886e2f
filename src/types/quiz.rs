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

use crate::types::word::Word;

/// The outcome of one quiz question. Lives only until the session is scored.
#[derive(Clone, Debug)]
pub struct QuizResult {
    pub word: Word,
    /// The learner's answer, trimmed and lower-cased.
    pub user_answer: String,
    pub is_correct: bool,
}

impl QuizResult {
    pub fn grade(word: Word, raw_input: &str) -> Self {
        let is_correct = check_answer(&word, raw_input);
        Self {
            word,
            user_answer: normalize(raw_input),
            is_correct,
        }
    }
}

/// Exact match after trimming and lower-casing both sides. No partial
/// credit and no punctuation stripping.
pub fn check_answer(word: &Word, raw_input: &str) -> bool {
    normalize(raw_input) == normalize(word.english())
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReviewSummary {
    pub correct: usize,
    pub total: usize,
    pub accuracy_percent: u32,
    /// Whether the accuracy met the mastery threshold.
    pub mastered: bool,
}

impl ReviewSummary {
    pub fn wrong(&self) -> usize {
        self.total - self.correct
    }
}
