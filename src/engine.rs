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

//! The progress engine: which words to study next, and how session outcomes
//! change each word's classification.
//!
//! Everything here is a pure function of its arguments. Loading and saving
//! happen in [`crate::collection::Collection`].

use std::num::NonZeroUsize;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::progress::ProgressState;
use crate::types::quiz::QuizResult;
use crate::types::quiz::ReviewSummary;
use crate::types::session::SessionRecord;
use crate::types::session::percent;
use crate::types::settings::Settings;
use crate::types::timestamp::Timestamp;
use crate::types::word::Word;

/// The first `batch_size` words, in catalog order, that have not been
/// learned. An empty batch means the whole catalog has been learned.
pub fn select_learning_batch(
    catalog: &Catalog,
    progress: &ProgressState,
    batch_size: NonZeroUsize,
) -> Vec<Word> {
    catalog
        .words()
        .iter()
        .filter(|word| !progress.learned.contains(&word.index()))
        .take(batch_size.get())
        .cloned()
        .collect()
}

/// Words to quiz, in random order.
///
/// Draws from the review pool when it is non-empty, and otherwise from the
/// first `batch_size` learned words. Stale indices are dropped. An empty
/// batch means there is nothing to review yet.
pub fn select_review_batch<R: Rng + ?Sized>(
    catalog: &Catalog,
    progress: &ProgressState,
    batch_size: NonZeroUsize,
    rng: &mut R,
) -> Vec<Word> {
    let candidates: Vec<_> = if progress.review_pool.is_empty() {
        progress
            .learned
            .iter()
            .take(batch_size.get())
            .copied()
            .collect()
    } else {
        progress.review_pool.iter().copied().collect()
    };
    let mut batch: Vec<Word> = candidates
        .into_iter()
        .filter_map(|index| {
            let word = catalog.get(index);
            if word.is_none() {
                log::debug!("Skipping stale index {index}.");
            }
            word.cloned()
        })
        .take(batch_size.get())
        .collect();
    batch.shuffle(rng);
    batch
}

/// Marks every word in the batch as learned. Idempotent.
pub fn complete_learning(progress: &mut ProgressState, catalog: &Catalog, batch: &[Word]) {
    for word in batch {
        let index = word.index();
        if catalog.contains(index) {
            progress.learned.insert(index);
        } else {
            log::debug!("Skipping stale index {index}.");
        }
    }
}

/// Scores a finished review and folds it into the progress state.
///
/// Missed words go to the review pool. If the accuracy reaches the master
/// rate, every word in `batch` (not only the correct ones) is mastered and
/// leaves the review pool. A session record is appended either way.
///
/// Scoring a review with no results is an error, and leaves `progress`
/// untouched.
pub fn complete_review(
    progress: &mut ProgressState,
    catalog: &Catalog,
    settings: &Settings,
    batch: &[Word],
    results: &[QuizResult],
    now: Timestamp,
) -> Fallible<ReviewSummary> {
    let total = results.len();
    let correct = results.iter().filter(|r| r.is_correct).count();
    let accuracy_percent = match percent(correct, total) {
        Some(p) => p,
        None => return fail("cannot score an empty review session."),
    };

    for result in results.iter().filter(|r| !r.is_correct) {
        let index = result.word.index();
        if catalog.contains(index) {
            progress.review_pool.insert(index);
        } else {
            log::debug!("Skipping stale index {index}.");
        }
    }

    let mastered = accuracy_percent as f64 >= settings.master_rate * 100.0;
    if mastered {
        for word in batch {
            let index = word.index();
            if catalog.contains(index) {
                progress.mastered.insert(index);
                progress.review_pool.remove(&index);
            } else {
                log::debug!("Skipping stale index {index}.");
            }
        }
    }

    progress
        .history
        .push(SessionRecord::review(now, correct, total));

    Ok(ReviewSummary {
        correct,
        total,
        accuracy_percent,
        mastered,
    })
}
