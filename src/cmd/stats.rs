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

use clap::ValueEnum;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::date::Date;
use crate::types::progress::ProgressState;
use crate::types::session::percent;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Human-readable output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let stats = dashboard(&coll.catalog, &coll.progress, Date::today());
    match format {
        StatsFormat::Text => {
            println!("Collection:      {}", coll.directory.display());
            println!("Total words:     {}", stats.total_words);
            println!("Learned:         {}", stats.learned_words);
            println!("Mastered:        {}", stats.mastered_words);
            println!("In review pool:  {}", stats.review_pool_words);
            println!("Sessions today:  {}", stats.today_sessions);
            match stats.accuracy_percent {
                Some(p) => println!("Accuracy:        {p}%"),
                None => println!("Accuracy:        -"),
            }
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    total_words: usize,
    learned_words: usize,
    mastered_words: usize,
    review_pool_words: usize,
    today_sessions: usize,
    /// Over all recorded sessions. `None` until something has been scored.
    accuracy_percent: Option<u32>,
}

/// Set sizes count stale indices too, so they can exceed `total_words`
/// after the word list shrinks.
pub fn dashboard(catalog: &Catalog, progress: &ProgressState, today: Date) -> Stats {
    let today_sessions = progress
        .history
        .iter()
        .filter(|h| h.date.local_date() == today)
        .count();
    let total: usize = progress.history.iter().map(|h| h.total).sum();
    let correct: usize = progress.history.iter().map(|h| h.correct).sum();
    Stats {
        total_words: catalog.len(),
        learned_words: progress.learned.len(),
        mastered_words: progress.mastered.len(),
        review_pool_words: progress.review_pool.len(),
        today_sessions,
        accuracy_percent: percent(correct, total),
    }
}
