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

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::progress::ProgressState;
use crate::types::settings::Settings;
use crate::types::timestamp::Timestamp;

const SETTINGS_KEY: &str = "agrivocab_settings";
const PROGRESS_KEY: &str = "agrivocab_progress";

/// A key-value store holding the learner's settings and progress as two
/// independent JSON entries. Every save replaces an entry wholesale.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating schema in {database_path}.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// The stored settings, or the defaults if none were saved.
    pub fn load_settings(&self) -> Fallible<Settings> {
        Ok(self.get_entry(SETTINGS_KEY)?.unwrap_or_default())
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Fallible<()> {
        self.put_entry(SETTINGS_KEY, settings)
    }

    /// The stored progress, or an empty state if none was saved.
    pub fn load_progress(&self) -> Fallible<ProgressState> {
        Ok(self.get_entry(PROGRESS_KEY)?.unwrap_or_default())
    }

    pub fn save_progress(&mut self, progress: &ProgressState) -> Fallible<()> {
        self.put_entry(PROGRESS_KEY, progress)
    }

    fn get_entry<T: DeserializeOwned>(&self, key: &str) -> Fallible<Option<T>> {
        let sql = "select value from entries where key = ?;";
        let value: Option<String> = self
            .conn
            .query_row(sql, [key], |row| row.get(0))
            .optional()?;
        match value {
            Some(json) => {
                let parsed = serde_json::from_str(&json).map_err(|e| {
                    ErrorReport::new(format!("corrupt '{key}' entry in the database: {e}"))
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    fn put_entry<T: Serialize>(&mut self, key: &str, value: &T) -> Fallible<()> {
        let json = serde_json::to_string(value)?;
        log::debug!("Saving '{key}' ({} bytes).", json.len());
        let tx = self.conn.transaction()?;
        let sql = "insert into entries (key, value, updated_at) values (?, ?, ?) \
                   on conflict (key) do update set value = excluded.value, updated_at = excluded.updated_at;";
        tx.execute(sql, (key, &json, Timestamp::now().to_rfc3339()))?;
        tx.commit()?;
        Ok(())
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["entries"], |row| row.get(0))?;
    Ok(count > 0)
}
