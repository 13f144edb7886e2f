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

use std::num::NonZeroUsize;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// Number of words per session when nothing else is configured.
pub const DEFAULT_DAILY_GOAL: usize = 15;

/// The learner's preferences.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Link to the source spreadsheet. May be empty.
    pub sheets_url: String,
    /// Words per learning or review session.
    pub daily_goal: usize,
    /// Stored and validated, but no rule consults it.
    pub pass_rate: f64,
    /// Minimum review accuracy, as a fraction, that masters the whole batch.
    pub master_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sheets_url: String::new(),
            daily_goal: DEFAULT_DAILY_GOAL,
            pass_rate: 0.75,
            master_rate: 0.90,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Fallible<()> {
        if self.daily_goal == 0 {
            return fail("invalid configuration: the daily goal must be at least 1.");
        }
        validate_rate("pass rate", self.pass_rate)?;
        validate_rate("master rate", self.master_rate)?;
        if !self.sheets_url.is_empty() && sheet_id(&self.sheets_url).is_none() {
            return fail(format!(
                "invalid configuration: '{}' is not a Google Sheets URL.",
                self.sheets_url
            ));
        }
        Ok(())
    }

    pub fn batch_size(&self) -> Fallible<NonZeroUsize> {
        NonZeroUsize::new(self.daily_goal).ok_or_else(|| {
            ErrorReport::new("invalid configuration: the daily goal must be at least 1.")
        })
    }

    /// The CSV export URL of the first sheet of the configured spreadsheet.
    pub fn export_url(&self) -> Fallible<String> {
        if self.sheets_url.is_empty() {
            return fail("no spreadsheet configured. Use `agrivocab settings --sheets-url`.");
        }
        match sheet_id(&self.sheets_url) {
            Some(id) => Ok(format!(
                "https://docs.google.com/spreadsheets/d/{id}/export?format=csv&gid=0"
            )),
            None => fail(format!(
                "invalid configuration: '{}' is not a Google Sheets URL.",
                self.sheets_url
            )),
        }
    }
}

fn validate_rate(name: &str, rate: f64) -> Fallible<()> {
    if rate > 0.0 && rate <= 1.0 {
        Ok(())
    } else {
        fail(format!(
            "invalid configuration: the {name} must be in (0, 1], got {rate}."
        ))
    }
}

/// Extracts the spreadsheet identifier: the run of ASCII alphanumerics, `-`
/// and `_` following the first `/d/` in the URL.
pub fn sheet_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("/d/")?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 { None } else { Some(&rest[..end]) }
}
