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

use crate::types::word::DEFAULT_DIFFICULTY;
use crate::types::word::WordRecord;

/// Number of columns a row needs to become a word.
const COLUMN_COUNT: usize = 8;

/// Parses a spreadsheet export into word records, in row order.
///
/// If any line contains a tab the whole table is read as TSV, otherwise as
/// CSV with double-quote enclosure. The first line is a header. Blank lines
/// and rows with fewer than eight columns are skipped.
pub fn parse_table(text: &str) -> Vec<WordRecord> {
    let tab_delimited = text.contains('\t');
    let mut words = Vec::new();
    for line in text.split('\n').skip(1) {
        // Tabs are delimiters here, so only strip the other whitespace.
        let line = line.trim_matches(|c: char| c.is_whitespace() && c != '\t');
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<String> = if tab_delimited {
            line.split('\t').map(|s| s.to_string()).collect()
        } else {
            split_quoted(line)
        };
        if let Some(word) = parse_row(&cols) {
            words.push(word);
        }
    }
    words
}

/// Splits a CSV line on commas. A double quote toggles whether we are inside
/// a quoted field and is itself dropped.
fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

fn parse_row(cols: &[String]) -> Option<WordRecord> {
    if cols.len() < COLUMN_COUNT {
        return None;
    }
    Some(WordRecord {
        category: clean(&cols[0]),
        english: clean(&cols[1]),
        korean: clean(&cols[2]),
        example1: clean(&cols[3]),
        example2: clean(&cols[4]),
        example3: clean(&cols[5]),
        frequency: clean(&cols[6]),
        difficulty: parse_difficulty(&cols[7]),
    })
}

/// Trims the field and strips one enclosing quote from each end.
fn clean(field: &str) -> String {
    let field = field.trim();
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.to_string()
}

/// Reads the leading integer of the raw field. Anything unparseable, and
/// zero, becomes the default difficulty. Quotes are not stripped, so a
/// quoted TSV cell like `"4"` is unparseable.
fn parse_difficulty(field: &str) -> i64 {
    let field = field.trim();
    let end = field
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(field.len());
    match field[..end].parse::<i64>() {
        Ok(0) | Err(_) => DEFAULT_DIFFICULTY,
        Ok(n) => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "category,english,korean,example1,example2,example3,frequency,difficulty";

    #[test]
    fn test_parse_csv() {
        let text = format!(
            "{HEADER}\nSoil,soil,흙,The soil is wet.,Test the soil.,Soil health matters.,high,1\n"
        );
        let words = parse_table(&text);
        assert_eq!(words.len(), 1);
        let word = &words[0];
        assert_eq!(word.category, "Soil");
        assert_eq!(word.english, "soil");
        assert_eq!(word.korean, "흙");
        assert_eq!(word.example1, "The soil is wet.");
        assert_eq!(word.example2, "Test the soil.");
        assert_eq!(word.example3, "Soil health matters.");
        assert_eq!(word.frequency, "high");
        assert_eq!(word.difficulty, 1);
    }

    #[test]
    fn test_quoted_commas() {
        let text = format!(
            "{HEADER}\nCrops,\"wheat, winter\",겨울밀,\"Sow it, then wait.\",b,c,low,3\n"
        );
        let words = parse_table(&text);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].english, "wheat, winter");
        assert_eq!(words[0].example1, "Sow it, then wait.");
        assert_eq!(words[0].difficulty, 3);
    }

    #[test]
    fn test_tab_autodetect() {
        let text = "category\tenglish\tkorean\te1\te2\te3\tfrequency\tdifficulty\n\
                    Tools\tplough, heavy\t쟁기\ta\tb\tc\tmid\t4\n";
        let words = parse_table(text);
        assert_eq!(words.len(), 1);
        // Commas are ordinary characters in a tab-delimited table.
        assert_eq!(words[0].english, "plough, heavy");
        assert_eq!(words[0].difficulty, 4);
    }

    #[test]
    fn test_tab_anywhere_switches_whole_table() {
        let text = format!("{HEADER}\na,b,c,d,e,f,g,1\nx\ty\tz\t1\t2\t3\t4\t5\n");
        let words = parse_table(&text);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].category, "x");
    }

    #[test]
    fn test_empty_leading_tsv_column_is_kept() {
        let text = "h\n\tharrow\t써레\ta\tb\tc\tlow\t2\n";
        let words = parse_table(text);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].category, "");
        assert_eq!(words[0].english, "harrow");
    }

    #[test]
    fn test_header_skipped() {
        let text = format!("{HEADER}\n");
        assert!(parse_table(&text).is_empty());
        // The first line is skipped even when it looks like data.
        let text = "a,b,c,d,e,f,g,1\n";
        assert!(parse_table(text).is_empty());
    }

    #[test]
    fn test_short_rows_dropped() {
        let text = format!("{HEADER}\na,b,c,d,e,f,g\na,b,c,d,e,f,g,h\n");
        let words = parse_table(&text);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].english, "b");
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let text = format!("{HEADER}\r\n\r\n  \na,b,c,d,e,f,g,5\r\n\n");
        let words = parse_table(&text);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].difficulty, 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("\n   \n  \n").is_empty());
    }

    #[test]
    fn test_difficulty_defaults() {
        assert_eq!(parse_difficulty("3"), 3);
        assert_eq!(parse_difficulty(" 3 "), 3);
        assert_eq!(parse_difficulty("3 (hard)"), 3);
        assert_eq!(parse_difficulty("\"4\""), DEFAULT_DIFFICULTY);
        assert_eq!(parse_difficulty("-1"), -1);
        assert_eq!(parse_difficulty(""), DEFAULT_DIFFICULTY);
        assert_eq!(parse_difficulty("hard"), DEFAULT_DIFFICULTY);
        assert_eq!(parse_difficulty("0"), DEFAULT_DIFFICULTY);
        assert_eq!(parse_difficulty("-"), DEFAULT_DIFFICULTY);
    }

    #[test]
    fn test_quoted_difficulty() {
        // CSV quotes are consumed by the splitter; TSV quotes are not.
        let csv = format!("{HEADER}\nc,soil,흙,a,b,c,high,\"4\"\n");
        assert_eq!(parse_table(&csv)[0].difficulty, 4);
        let tsv = "h\nc\tsoil\t흙\ta\tb\tc\thigh\t\"4\"\n";
        assert_eq!(parse_table(tsv)[0].difficulty, DEFAULT_DIFFICULTY);
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("  \"quoted\"  "), "quoted");
        assert_eq!(clean("\"half"), "half");
        assert_eq!(clean("\""), "");
        assert_eq!(clean("plain"), "plain");
    }

    #[test]
    fn test_split_quoted() {
        assert_eq!(split_quoted("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_quoted("\"a,b\",c"), vec!["a,b", "c"]);
        assert_eq!(split_quoted(""), vec![""]);
    }
}
