use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};

use crate::common::errors::TextKitError;

use super::read_existing;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsReport {
    pub file: String,
    pub line_count: usize,
    pub char_count: usize,
    pub word_count: usize,
    /// Every word sharing the highest count, in order of first appearance.
    pub most_frequent_words: Vec<String>,
    pub most_frequent_word_occurrences: usize,
    pub longest_word: String,
    pub mean_words_per_line: f64,
    pub most_frequent_letter: char,
    pub most_frequent_letter_occurrences: usize,
}

impl StatsReport {
    pub fn from_lines<S: AsRef<str>>(file: &Path, lines: &[S]) -> Result<Self, TextKitError> {
        let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
        // Joined with spaces so words never straddle a line break.
        let text = lines.join(" ");
        let words: Vec<String> = words(&text).collect();
        trace!("{} words", words.len());

        let line_count = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .count();
        if words.is_empty() || line_count == 0 {
            return Err(TextKitError::EmptyDocument(file.to_path_buf()));
        }

        let lowercase: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();
        let word_tally = tally(lowercase.iter().cloned());
        let (most_frequent_words, most_frequent_word_occurrences) = leaders(&word_tally);
        let letter_tally = tally(lowercase.iter().flat_map(|word| word.chars()));
        let (letters, most_frequent_letter_occurrences) = leaders(&letter_tally);

        let longest_word = words
            .iter()
            .fold(&words[0], |longest, word| {
                if word.chars().count() > longest.chars().count() {
                    word
                } else {
                    longest
                }
            })
            .clone();

        Ok(StatsReport {
            file: file.display().to_string(),
            line_count,
            char_count: lines.iter().map(|line| line.chars().count()).sum(),
            word_count: words.len(),
            most_frequent_words,
            most_frequent_word_occurrences,
            longest_word,
            mean_words_per_line: words.len() as f64 / line_count as f64,
            most_frequent_letter: letters[0],
            most_frequent_letter_occurrences,
        })
    }
}

impl Display for StatsReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let several = self.most_frequent_words.len() > 1;

        writeln!(f, "Stats for file '{}':", self.file)?;
        writeln!(f, "Line count: {} (not counting empty lines)", self.line_count)?;
        writeln!(f, "Character count: {}", self.char_count)?;
        writeln!(f, "Word count: {}", self.word_count)?;
        writeln!(
            f,
            "Most frequent {}: {} (with {} occurrences{})",
            if several { "words" } else { "word" },
            quoted_list(&self.most_frequent_words),
            self.most_frequent_word_occurrences,
            if several { " each" } else { "" },
        )?;
        writeln!(
            f,
            "Longest word: '{}' (with {} characters)",
            self.longest_word,
            self.longest_word.chars().count()
        )?;
        writeln!(f, "Mean word count per line: {:.2}", self.mean_words_per_line)?;
        write!(
            f,
            "Most frequent letter: '{}' (with {} occurrences)",
            self.most_frequent_letter, self.most_frequent_letter_occurrences
        )
    }
}

/// Space separated tokens with every non-alphabetic character removed.
/// Tokens with no letters at all are dropped.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(' ')
        .filter(|token| !token.is_empty())
        .map(|token| token.chars().filter(|c| c.is_alphabetic()).collect::<String>())
        .filter(|word| !word.is_empty())
}

// Keeps items in order of first appearance.
fn tally<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: Iterator<Item = T>,
{
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match positions.get(&item) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }
    counts
}

fn leaders<T: Clone>(counts: &[(T, usize)]) -> (Vec<T>, usize) {
    let highest = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let leaders = counts
        .iter()
        .filter(|(_, count)| *count == highest)
        .map(|(item, _)| item.clone())
        .collect();
    (leaders, highest)
}

fn quoted_list(words: &[String]) -> String {
    let quoted: Vec<String> = words.iter().map(|word| format!("'{word}'")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

pub fn stats<W: Write>(path: &Path, format: ReportFormat, out: &mut W) -> anyhow::Result<()> {
    debug!("Computing stats for {}", path.display());

    let content = read_existing(path)?;
    let lines: Vec<&str> = content.lines().collect();
    let report = StatsReport::from_lines(path, &lines)?;

    match format {
        ReportFormat::Text => writeln!(out, "{report}")?,
        ReportFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
    }
    Ok(())
}
