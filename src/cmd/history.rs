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

use std::io::Write;
use std::io::stdout;

use crate::collection::open_database;
use crate::collection::resolve_directory;
use crate::error::Fallible;
use crate::types::progress::ProgressState;
use crate::types::session::SessionRecord;

pub const DEFAULT_HISTORY_LIMIT: usize = 5;

pub fn print_history(directory: Option<String>, limit: usize) -> Fallible<()> {
    let directory = resolve_directory(directory)?;
    let db = open_database(&directory)?;
    let progress = db.load_progress()?;
    write_history(&progress, limit, &mut stdout().lock())
}

fn write_history(
    progress: &ProgressState,
    limit: usize,
    output: &mut impl Write,
) -> Fallible<()> {
    if progress.history.is_empty() {
        writeln!(output, "No sessions yet.")?;
        return Ok(());
    }
    for record in recent_history(progress, limit) {
        writeln!(output, "{}", format_record(record))?;
    }
    Ok(())
}

/// The last `limit` sessions, newest first.
pub fn recent_history(progress: &ProgressState, limit: usize) -> Vec<&SessionRecord> {
    progress.history.iter().rev().take(limit).collect()
}

fn format_record(record: &SessionRecord) -> String {
    let percent = match record.accuracy_percent() {
        Some(p) => format!("{p}%"),
        None => "-".to_string(),
    };
    format!(
        "{}  {:<6}  {:>3}/{:<3}  {:>4}",
        record.date.local_date(),
        record.session_type.as_str(),
        record.correct,
        record.total,
        percent
    )
}
