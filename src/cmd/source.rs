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

use crate::collection::CATALOG_FILE;
use crate::collection::open_database;
use crate::collection::resolve_directory;
use crate::error::Fallible;

/// Prints where to download the word list from. Save the download as
/// `vocabulary.csv` in the collection directory.
pub fn print_source(directory: Option<String>) -> Fallible<()> {
    let directory = resolve_directory(directory)?;
    let db = open_database(&directory)?;
    let url = db.load_settings()?.export_url()?;
    println!("{url}");
    log::debug!(
        "Save the export as {}.",
        directory.join(CATALOG_FILE).display()
    );
    Ok(())
}
