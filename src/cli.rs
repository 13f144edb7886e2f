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

use clap::Parser;

use crate::cmd::check::check_collection;
use crate::cmd::history::DEFAULT_HISTORY_LIMIT;
use crate::cmd::history::print_history;
use crate::cmd::learn::learn;
use crate::cmd::review::review;
use crate::cmd::settings::SettingsUpdate;
use crate::cmd::settings::settings;
use crate::cmd::source::print_source;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Study a batch of words you haven't learned yet.
    Learn {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Number of words in the session. Defaults to the daily goal.
        #[arg(long)]
        batch_size: Option<NonZeroUsize>,
    },
    /// Quiz yourself on words you have learned.
    Review {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Number of words in the session. Defaults to the daily goal.
        #[arg(long)]
        batch_size: Option<NonZeroUsize>,
    },
    /// Print progress statistics.
    Stats {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Print the most recent sessions.
    History {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// How many sessions to show.
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
    /// Print the settings, or change them.
    Settings {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Google Sheets URL of the word list.
        #[arg(long)]
        sheets_url: Option<String>,
        /// Words per session.
        #[arg(long)]
        daily_goal: Option<usize>,
        /// Pass rate, as a fraction in (0, 1].
        #[arg(long)]
        pass_rate: Option<f64>,
        /// Review accuracy that masters a batch, as a fraction in (0, 1].
        #[arg(long)]
        master_rate: Option<f64>,
    },
    /// Print the CSV export URL of the configured spreadsheet.
    Source {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Check the integrity of a collection.
    Check {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Learn {
            directory,
            batch_size,
        } => learn(directory, batch_size),
        Command::Review {
            directory,
            batch_size,
        } => review(directory, batch_size),
        Command::Stats { directory, format } => print_stats(directory, format),
        Command::History { directory, limit } => print_history(directory, limit),
        Command::Settings {
            directory,
            sheets_url,
            daily_goal,
            pass_rate,
            master_rate,
        } => {
            let update = SettingsUpdate {
                sheets_url,
                daily_goal,
                pass_rate,
                master_rate,
            };
            settings(directory, update)
        }
        Command::Source { directory } => print_source(directory),
        Command::Check { directory } => check_collection(directory),
    }
}
