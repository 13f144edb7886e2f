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

use std::fs::write;

use tempfile::TempDir;
use tempfile::tempdir;

use crate::collection::CATALOG_FILE;
use crate::error::Fallible;

const HEADER: &str = "category,english,korean,example1,example2,example3,frequency,difficulty\n";

/// Creates a collection directory whose catalog has `n` words named `word0`,
/// `word1`, ... The directory is deleted when the returned handle drops.
pub fn create_tmp_collection(n: usize) -> Fallible<(TempDir, String)> {
    let dir = tempdir()?;
    let mut text = String::from(HEADER);
    for i in 0..n {
        text.push_str(&format!(
            "Soil,word{i},단어{i},\"Use word{i}, please.\",,,high,{}\n",
            i % 3 + 1
        ));
    }
    write(dir.path().join(CATALOG_FILE), text)?;
    let path = dir.path().canonicalize()?.display().to_string();
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_create_tmp_collection() -> Fallible<()> {
        let (dir, _path) = create_tmp_collection(3)?;
        let catalog = Catalog::load(&dir.path().join(CATALOG_FILE))?;
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.words()[2].korean(), "단어2");
        assert_eq!(catalog.words()[1].record().example1, "Use word1, please.");
        Ok(())
    }
}
