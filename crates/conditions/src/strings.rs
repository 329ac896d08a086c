//! String puzzles.

use core::fmt::Display;
use std::collections::HashMap;

/// First character that occurs exactly once in `text`.
pub fn find_first_single_char(text: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for character in text.chars() {
        *counts.entry(character).or_default() += 1;
    }
    text.chars()
        .find(|character| counts.get(character) == Some(&1))
}

/// Interval notation for the bounds `a` and `b`, smaller bound first:
/// `[` / `]` for included ends, `(` / `)` for excluded ones.
pub fn get_interval_string<T: PartialOrd + Display>(
    a: T,
    b: T,
    is_start_included: bool,
    is_end_included: bool,
) -> String {
    let open = if is_start_included { '[' } else { '(' };
    let close = if is_end_included { ']' } else { ')' };
    let (low, high) = if b < a { (b, a) } else { (a, b) };
    format!("{open}{low}, {high}{close}")
}

/// `text` with its characters in reverse order.
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// Closing partner of an opening bracket.
const fn closing_bracket(open: char) -> Option<char> {
    match open {
        '[' => Some(']'),
        '(' => Some(')'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

/// True if every bracket in `text` (`[]`, `()`, `{}`, `<>`) is closed in the right order.
/// Other characters are ignored.
pub fn is_brackets_balanced(text: &str) -> bool {
    let mut expected: Vec<char> = Vec::new();
    for character in text.chars() {
        if let Some(close) = closing_bracket(character) {
            expected.push(close);
        } else if matches!(character, ']' | ')' | '}' | '>')
            && expected.pop() != Some(character)
        {
            return false;
        }
    }
    expected.is_empty()
}

/// Longest directory prefix shared by every path, with a trailing `/`.
///
/// The last segment of each path is treated as a file name. Returns `""` when
/// the paths share nothing, including when `paths` is empty.
pub fn get_common_directory_path<S: AsRef<str>>(paths: &[S]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };
    let directories = |path: &S| -> Vec<String> {
        let mut segments: Vec<String> = path.as_ref().split('/').map(str::to_owned).collect();
        segments.pop();
        segments
    };
    let mut common = directories(first);
    for path in rest {
        let other = directories(path);
        let shared = common
            .iter()
            .zip(&other)
            .take_while(|(left, right)| left == right)
            .count();
        common.truncate(shared);
    }
    if common.is_empty() {
        return String::new();
    }
    let mut out = common.join("/");
    out.push('/');
    out
}
