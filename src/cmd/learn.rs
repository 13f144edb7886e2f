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

use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;
use std::num::NonZeroUsize;

use crate::cmd::prompt::read_line;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::word::Word;

pub fn learn(directory: Option<String>, batch_size: Option<NonZeroUsize>) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let mut input = stdin().lock();
    let mut output = stdout().lock();
    run_learning(&mut coll, batch_size, &mut input, &mut output)
}

/// Pages through a batch of new words. Enter moves forward, `b` goes back,
/// `q` quits without recording anything. Passing the last word marks the
/// whole batch as learned.
pub fn run_learning(
    coll: &mut Collection,
    batch_size: Option<NonZeroUsize>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Fallible<()> {
    let batch_size = coll.batch_size(batch_size)?;
    let batch = coll.learning_batch(batch_size);
    if batch.is_empty() {
        writeln!(output, "You have learned every word in the list!")?;
        return Ok(());
    }
    log::debug!("Learning batch of {} words.", batch.len());

    let mut position = 0;
    while position < batch.len() {
        show_word(output, &batch[position], position, batch.len())?;
        let command = read_line(input, output, "[enter: next, b: back, q: quit] ")?;
        match command.as_deref().map(str::trim) {
            None | Some("q") => {
                writeln!(output, "Session abandoned. Nothing was recorded.")?;
                return Ok(());
            }
            Some("b") => position = position.saturating_sub(1),
            Some(_) => position += 1,
        }
    }

    coll.complete_learning(&batch)?;
    writeln!(
        output,
        "You learned {} words! Now test yourself with `agrivocab review`.",
        batch.len()
    )?;
    Ok(())
}

fn show_word(output: &mut impl Write, word: &Word, position: usize, total: usize) -> Fallible<()> {
    let record = word.record();
    writeln!(output)?;
    writeln!(output, "[{} / {}] {}", position + 1, total, record.category)?;
    writeln!(output, "  {}", record.english)?;
    writeln!(output, "  {}", record.korean)?;
    for example in record.examples().iter().filter(|e| !e.is_empty()) {
        writeln!(output, "  - {example}")?;
    }
    Ok(())
}
