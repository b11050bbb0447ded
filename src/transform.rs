//! Pure content transformations shared by every reader format.
//!
//! All functions here operate on an already materialized content string and
//! never touch the filesystem. Lines are delimited by `\n` only; words by runs
//! of ASCII whitespace.

use memchr::memchr_iter;
use std::fmt;

/// Split content into lines on `\n`.
///
/// Empty content yields a single empty line. Otherwise trailing empty pieces
/// are dropped, so `"a\nb\n"` and `"a\nb"` both give `["a", "b"]` and content
/// made only of newlines gives no lines at all.
pub fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return vec![""];
    }

    let mut lines = Vec::new();
    let mut start = 0;
    // '\n' is ASCII, so every match is a char boundary
    for newline in memchr_iter(b'\n', content.as_bytes()) {
        lines.push(&content[start..newline]);
        start = newline + 1;
    }
    lines.push(&content[start..]);

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Number of lines as counted by [`split_lines`].
pub fn line_count(content: &str) -> usize {
    split_lines(content).len()
}

/// Emit the lines of `content` in reverse order, each followed by `\n`.
pub fn reverse_lines(content: &str) -> String {
    let mut reversed = String::with_capacity(content.len() + 1);
    for line in split_lines(content).into_iter().rev() {
        reversed.push_str(line);
        reversed.push('\n');
    }
    reversed
}

/// Matches `\s` in the usual regex sense: ASCII whitespace plus vertical tab.
fn is_word_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Reverse word order and the characters of every word.
///
/// Words are separated by runs of whitespace; the output joins them with a
/// single space and ends with a trailing space. Empty or all-whitespace
/// content yields an empty string.
pub fn palindrome(content: &str) -> String {
    let words: Vec<&str> = content
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
        .collect();

    let mut output = String::with_capacity(content.len() + 1);
    for word in words.iter().rev() {
        output.extend(word.chars().rev());
        output.push(' ');
    }
    output
}

/// Outcome of comparing two contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub first_lines: usize,
    pub second_lines: usize,
    pub identical: bool,
}

impl Comparison {
    pub fn of(first: &str, second: &str) -> Self {
        Self {
            first_lines: line_count(first),
            second_lines: line_count(second),
            identical: first == second,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fichier 1 : {} lignes", self.first_lines)?;
        writeln!(f, "Fichier 2 : {} lignes", self.second_lines)?;
        if self.identical {
            write!(f, "Les fichiers sont identiques.")
        } else {
            write!(f, "Les fichiers sont différents.")
        }
    }
}
