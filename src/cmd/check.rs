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

use crate::catalog::Catalog;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::progress::ProgressState;

pub fn check_collection(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    coll.settings.validate()?;
    let stale = count_stale(&coll.catalog, &coll.progress);
    if stale > 0 {
        println!(
            "warning: {stale} progress entries point past the end of the word list ({} words).",
            coll.catalog.len()
        );
    }
    println!("ok");
    Ok(())
}

/// Number of entries across the progress sets that name no catalog word.
fn count_stale(catalog: &Catalog, progress: &ProgressState) -> usize {
    progress
        .learned
        .iter()
        .chain(progress.mastered.iter())
        .chain(progress.review_pool.iter())
        .filter(|index| !catalog.contains(**index))
        .count()
}
