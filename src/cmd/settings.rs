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

use crate::collection::open_database;
use crate::collection::resolve_directory;
use crate::error::Fallible;
use crate::types::settings::Settings;

/// Changes requested on the command line. Unset fields keep their stored
/// value.
#[derive(Default)]
pub struct SettingsUpdate {
    pub sheets_url: Option<String>,
    pub daily_goal: Option<usize>,
    pub pass_rate: Option<f64>,
    pub master_rate: Option<f64>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.sheets_url.is_none()
            && self.daily_goal.is_none()
            && self.pass_rate.is_none()
            && self.master_rate.is_none()
    }

    /// The stored settings with this update applied. Fails, leaving the
    /// caller's copy untouched, if the result is invalid.
    pub fn apply(self, current: &Settings) -> Fallible<Settings> {
        let mut settings = current.clone();
        if let Some(url) = self.sheets_url {
            settings.sheets_url = url.trim().to_string();
        }
        if let Some(goal) = self.daily_goal {
            settings.daily_goal = goal;
        }
        if let Some(rate) = self.pass_rate {
            settings.pass_rate = rate;
        }
        if let Some(rate) = self.master_rate {
            settings.master_rate = rate;
        }
        settings.validate()?;
        Ok(settings)
    }
}

/// Prints the settings, or updates them if any option was given.
pub fn settings(directory: Option<String>, update: SettingsUpdate) -> Fallible<()> {
    let directory = resolve_directory(directory)?;
    let mut db = open_database(&directory)?;
    let current = db.load_settings()?;
    if update.is_empty() {
        println!("{}", serde_json::to_string_pretty(&current)?);
        return Ok(());
    }
    let updated = update.apply(&current)?;
    db.save_settings(&updated)?;
    log::info!("Settings saved to {}.", directory.display());
    println!("Settings saved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_collection;

    #[test]
    fn test_empty_update() {
        assert!(SettingsUpdate::default().is_empty());
        let update = SettingsUpdate {
            daily_goal: Some(20),
            ..SettingsUpdate::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_apply() -> Fallible<()> {
        let update = SettingsUpdate {
            sheets_url: Some(" https://docs.google.com/spreadsheets/d/abc/edit ".to_string()),
            daily_goal: Some(20),
            ..SettingsUpdate::default()
        };
        let settings = update.apply(&Settings::default())?;
        assert_eq!(
            settings.sheets_url,
            "https://docs.google.com/spreadsheets/d/abc/edit"
        );
        assert_eq!(settings.daily_goal, 20);
        assert_eq!(settings.master_rate, 0.90);
        Ok(())
    }

    #[test]
    fn test_invalid_update() {
        let update = SettingsUpdate {
            master_rate: Some(1.5),
            ..SettingsUpdate::default()
        };
        let err = update.apply(&Settings::default()).err().unwrap();
        assert!(err.to_string().starts_with("error: invalid configuration"));
    }

    #[test]
    fn test_settings_are_saved() -> Fallible<()> {
        let (_dir, path) = create_tmp_collection(3)?;
        let update = SettingsUpdate {
            daily_goal: Some(5),
            master_rate: Some(0.8),
            ..SettingsUpdate::default()
        };
        settings(Some(path.clone()), update)?;
        let db = open_database(&resolve_directory(Some(path.clone()))?)?;
        let saved = db.load_settings()?;
        assert_eq!(saved.daily_goal, 5);
        assert_eq!(saved.master_rate, 0.8);

        // A rejected update leaves the stored settings alone.
        let bad = SettingsUpdate {
            daily_goal: Some(0),
            ..SettingsUpdate::default()
        };
        assert!(settings(Some(path.clone()), bad).is_err());
        let db = open_database(&resolve_directory(Some(path))?)?;
        assert_eq!(db.load_settings()?.daily_goal, 5);
        Ok(())
    }
}
