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

use rand::Rng;

use crate::cmd::prompt::read_line;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::quiz::QuizResult;
use crate::types::quiz::ReviewSummary;

pub fn review(directory: Option<String>, batch_size: Option<NonZeroUsize>) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let mut input = stdin().lock();
    let mut output = stdout().lock();
    let mut rng = rand::rng();
    run_review(&mut coll, batch_size, &mut rng, &mut input, &mut output)?;
    Ok(())
}

/// Quizzes the learner on a review batch: each prompt shows the Korean
/// meaning and expects the English word. Results are only recorded if the
/// learner answers every question.
pub fn run_review<R: Rng + ?Sized>(
    coll: &mut Collection,
    batch_size: Option<NonZeroUsize>,
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Fallible<Option<ReviewSummary>> {
    let batch_size = coll.batch_size(batch_size)?;
    let batch = coll.review_batch(batch_size, rng);
    if batch.is_empty() {
        if coll.progress.review_pool.is_empty() {
            writeln!(
                output,
                "Nothing to review yet. Learn some new words first with `agrivocab learn`."
            )?;
        } else {
            writeln!(
                output,
                "Your review pool only holds words missing from the word list. \
                 Run `agrivocab check`."
            )?;
        }
        return Ok(None);
    }
    log::debug!("Review batch of {} words.", batch.len());

    let mut results: Vec<QuizResult> = Vec::with_capacity(batch.len());
    for (i, word) in batch.iter().enumerate() {
        writeln!(output)?;
        writeln!(output, "[{} / {}] {}", i + 1, batch.len(), word.korean())?;
        let answer = match read_line(input, output, "> ")? {
            Some(answer) => answer,
            None => {
                writeln!(output)?;
                writeln!(output, "Review abandoned. Nothing was recorded.")?;
                return Ok(None);
            }
        };
        let result = QuizResult::grade(word.clone(), &answer);
        if result.is_correct {
            writeln!(output, "Correct! {}", word.english())?;
        } else {
            writeln!(
                output,
                "Wrong. Answer: {} (you typed: {})",
                word.english(),
                result.user_answer
            )?;
        }
        results.push(result);
    }

    let summary = coll.complete_review(&batch, &results)?;
    writeln!(output)?;
    writeln!(
        output,
        "Correct: {}  Wrong: {}  Accuracy: {}%",
        summary.correct,
        summary.wrong(),
        summary.accuracy_percent
    )?;
    if summary.mastered {
        writeln!(output, "Mastered all {} words!", summary.total)?;
    } else if summary.wrong() > 0 {
        writeln!(
            output,
            "{} words were added to your review pool.",
            summary.wrong()
        )?;
    }
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::cmd::learn::run_learning;
    use crate::helper::create_tmp_collection;
    use crate::types::word::CatalogIndex;

    fn size(n: usize) -> Option<NonZeroUsize> {
        NonZeroUsize::new(n)
    }

    fn learn_all(coll: &mut Collection, n: usize) -> Fallible<()> {
        let mut input = Cursor::new("\n".repeat(n));
        run_learning(coll, size(n), &mut input, &mut Vec::<u8>::new())
    }

    /// Drives a review, answering each prompt with `answer_for(english)`.
    /// The seeded generator is cloned so the script follows the same order
    /// the controller will ask in.
    fn quiz(
        coll: &mut Collection,
        n: usize,
        answer_for: impl Fn(&str) -> String,
    ) -> Fallible<(Option<ReviewSummary>, String)> {
        let rng = StdRng::seed_from_u64(11);
        let batch_size = coll.batch_size(size(n))?;
        let mut script = String::new();
        for word in coll.review_batch(batch_size, &mut rng.clone()) {
            script.push_str(&answer_for(word.english()));
            script.push('\n');
        }
        let mut input = Cursor::new(script);
        let mut output = Vec::new();
        let summary = run_review(coll, size(n), &mut rng.clone(), &mut input, &mut output)?;
        Ok((summary, String::from_utf8(output).unwrap()))
    }

    #[test]
    fn test_nothing_to_review() -> Fallible<()> {
        let (_dir, path) = create_tmp_collection(5)?;
        let mut coll = Collection::new(Some(path))?;
        let mut output = Vec::new();
        let summary = run_review(
            &mut coll,
            size(5),
            &mut rand::rng(),
            &mut Cursor::new(""),
            &mut output,
        )?;
        assert!(summary.is_none());
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Nothing to review yet."));
        Ok(())
    }

    #[test]
    fn test_stale_review_pool() -> Fallible<()> {
        let (_dir, path) = create_tmp_collection(5)?;
        let mut coll = Collection::new(Some(path))?;
        learn_all(&mut coll, 5)?;
        coll.progress.review_pool.insert(CatalogIndex::new(40));
        let mut output = Vec::new();
        let summary = run_review(
            &mut coll,
            size(5),
            &mut rand::rng(),
            &mut Cursor::new(""),
            &mut output,
        )?;
        assert!(summary.is_none());
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Run `agrivocab check`."));
        assert!(!out.contains("Learn some new words first"));
        Ok(())
    }

    #[test]
    fn test_perfect_review_masters() -> Fallible<()> {
        let (_dir, path) = create_tmp_collection(5)?;
        let mut coll = Collection::new(Some(path))?;
        learn_all(&mut coll, 5)?;
        let (summary, out) = quiz(&mut coll, 5, |english| english.to_uppercase())?;
        let summary = summary.unwrap();
        assert_eq!((summary.correct, summary.total), (5, 5));
        assert!(summary.mastered);
        assert!(out.contains("Accuracy: 100%"));
        assert!(out.contains("Mastered all 5 words!"));
        assert_eq!(coll.progress.mastered.len(), 5);
        Ok(())
    }

    #[test]
    fn test_wrong_answers_go_to_pool() -> Fallible<()> {
        let (_dir, path) = create_tmp_collection(5)?;
        let mut coll = Collection::new(Some(path))?;
        learn_all(&mut coll, 5)?;
        let mut output = Vec::new();
        let script = "wrong\n".repeat(5);
        let summary = run_review(
            &mut coll,
            size(5),
            &mut rand::rng(),
            &mut Cursor::new(script),
            &mut output,
        )?;
        let summary = summary.unwrap();
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.accuracy_percent, 0);
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Wrong. Answer: word"));
        assert!(out.contains("(you typed: wrong)"));
        assert!(out.contains("5 words were added to your review pool."));
        assert_eq!(coll.progress.review_pool.len(), 5);
        assert!(coll.progress.mastered.is_empty());
        Ok(())
    }

    #[test]
    fn test_abandoned_review_records_nothing() -> Fallible<()> {
        let (_dir, path) = create_tmp_collection(5)?;
        let mut coll = Collection::new(Some(path))?;
        learn_all(&mut coll, 5)?;
        let mut output = Vec::new();
        let summary = run_review(
            &mut coll,
            size(5),
            &mut rand::rng(),
            &mut Cursor::new("a\nb\n"),
            &mut output,
        )?;
        assert!(summary.is_none());
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Review abandoned."));
        assert!(coll.progress.history.is_empty());
        assert!(coll.progress.review_pool.is_empty());
        Ok(())
    }
}
