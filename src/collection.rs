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

use std::env::current_dir;
use std::num::NonZeroUsize;
use std::path::Path;
use std::path::PathBuf;

use rand::Rng;

use crate::catalog::Catalog;
use crate::db::Database;
use crate::engine::complete_learning;
use crate::engine::complete_review;
use crate::engine::select_learning_batch;
use crate::engine::select_review_batch;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::progress::ProgressState;
use crate::types::quiz::QuizResult;
use crate::types::quiz::ReviewSummary;
use crate::types::settings::Settings;
use crate::types::timestamp::Timestamp;
use crate::types::word::Word;

pub const CATALOG_FILE: &str = "vocabulary.csv";
pub const DATABASE_FILE: &str = "agrivocab.db";

/// Everything an engine operation needs: the catalog snapshot, the learner's
/// settings and progress, and the store they persist to.
///
/// The mutating operations save the complete progress state before they
/// return.
pub struct Collection {
    pub directory: PathBuf,
    pub catalog: Catalog,
    pub settings: Settings,
    pub progress: ProgressState,
    db: Database,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory = resolve_directory(directory)?;
        let catalog = Catalog::load(&directory.join(CATALOG_FILE))?;
        let db = open_database(&directory)?;
        let settings = db.load_settings()?;
        let progress = db.load_progress()?;
        log::debug!(
            "Progress: {} learned, {} mastered, {} in review.",
            progress.learned.len(),
            progress.mastered.len(),
            progress.review_pool.len()
        );
        Ok(Self {
            directory,
            catalog,
            settings,
            progress,
            db,
        })
    }

    /// The requested batch size, falling back to the daily goal.
    pub fn batch_size(&self, requested: Option<NonZeroUsize>) -> Fallible<NonZeroUsize> {
        match requested {
            Some(n) => Ok(n),
            None => self.settings.batch_size(),
        }
    }

    pub fn learning_batch(&self, batch_size: NonZeroUsize) -> Vec<Word> {
        select_learning_batch(&self.catalog, &self.progress, batch_size)
    }

    pub fn review_batch<R: Rng + ?Sized>(
        &self,
        batch_size: NonZeroUsize,
        rng: &mut R,
    ) -> Vec<Word> {
        select_review_batch(&self.catalog, &self.progress, batch_size, rng)
    }

    pub fn complete_learning(&mut self, batch: &[Word]) -> Fallible<()> {
        complete_learning(&mut self.progress, &self.catalog, batch);
        self.db.save_progress(&self.progress)?;
        log::info!(
            "Learned {} words ({} total).",
            batch.len(),
            self.progress.learned.len()
        );
        Ok(())
    }

    pub fn complete_review(
        &mut self,
        batch: &[Word],
        results: &[QuizResult],
    ) -> Fallible<ReviewSummary> {
        let summary = complete_review(
            &mut self.progress,
            &self.catalog,
            &self.settings,
            batch,
            results,
            Timestamp::now(),
        )?;
        self.db.save_progress(&self.progress)?;
        log::info!(
            "Review scored {}/{} ({}%), mastered: {}.",
            summary.correct,
            summary.total,
            summary.accuracy_percent,
            summary.mastered
        );
        Ok(summary)
    }
}

pub fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    let directory: PathBuf = match directory {
        Some(dir) => PathBuf::from(dir),
        None => current_dir()?,
    };
    if directory.exists() {
        Ok(directory.canonicalize()?)
    } else {
        fail("directory does not exist.")
    }
}

pub fn open_database(directory: &Path) -> Fallible<Database> {
    let db_path: PathBuf = directory.join(DATABASE_FILE);
    let db_path: &str = db_path
        .to_str()
        .ok_or_else(|| ErrorReport::new("invalid path"))?;
    Database::new(db_path)
}
