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

use crate::forms::FormError;
use crate::types::quiz::QuizType;

/// MATCH questions pair entries up, so fewer than this makes no question.
pub const MIN_MATCH_SELECTION: usize = 3;

/// Which of a content item's highlights or keywords the user picked for
/// quiz generation. The selection keeps the order of `available`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightSelection {
    available: Vec<String>,
    selected: Vec<bool>,
}

impl HighlightSelection {
    /// Entries are trimmed and deduplicated, keeping the first appearance.
    /// Commas inside an entry are kept.
    pub fn new(entries: Vec<String>) -> Self {
        let mut available: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.trim();
            if !entry.is_empty() && !available.iter().any(|a| a == entry) {
                available.push(entry.to_string());
            }
        }
        let selected = vec![false; available.len()];
        Self {
            available,
            selected,
        }
    }

    /// Flip an entry. Returns whether it is now selected, or `None` for an
    /// entry that is not on offer.
    pub fn toggle(&mut self, entry: &str) -> Option<bool> {
        let entry = entry.trim();
        let index = self.available.iter().position(|a| a == entry)?;
        self.selected[index] = !self.selected[index];
        Some(self.selected[index])
    }

    pub fn select_all(&mut self) {
        self.selected.iter_mut().for_each(|s| *s = true);
    }

    pub fn clear(&mut self) {
        self.selected.iter_mut().for_each(|s| *s = false);
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn selected(&self) -> Vec<String> {
        self.available
            .iter()
            .zip(&self.selected)
            .filter(|(_, on)| **on)
            .map(|(entry, _)| entry.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    /// Block generation of MATCH quizzes with too few entries.
    pub fn validate_for(&self, types: &[QuizType]) -> Result<(), FormError> {
        if types.contains(&QuizType::Match) && self.selected_count() < MIN_MATCH_SELECTION {
            return Err(FormError::new(format!(
                "MATCH quizzes need at least {MIN_MATCH_SELECTION} selected keywords."
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> HighlightSelection {
        HighlightSelection::new(vec!["a".into(), "b".into(), "c".into(), "d".into()])
    }

    #[test]
    fn test_toggle_keeps_available_order() {
        let mut s = selection();
        assert_eq!(s.toggle("c"), Some(true));
        assert_eq!(s.toggle("a"), Some(true));
        assert_eq!(s.selected(), vec!["a", "c"]);
        assert_eq!(s.toggle("c"), Some(false));
        assert_eq!(s.selected(), vec!["a"]);
        assert_eq!(s.toggle("zzz"), None);
    }

    #[test]
    fn test_match_requires_three() {
        let mut s = selection();
        s.toggle("a");
        s.toggle("b");
        let err = s.validate_for(&[QuizType::Mcq, QuizType::Match]).unwrap_err();
        assert_eq!(err.message(), "MATCH quizzes need at least 3 selected keywords.");
        s.toggle("c");
        assert!(s.validate_for(&[QuizType::Match]).is_ok());
    }

    #[test]
    fn test_other_types_need_no_minimum() {
        let s = selection();
        assert!(s.validate_for(&[QuizType::Mcq, QuizType::Short]).is_ok());
    }

    #[test]
    fn test_repeated_entries_count_once() {
        let mut s = HighlightSelection::new(vec!["a".into(), "a".into(), " b ".into()]);
        assert_eq!(s.available(), ["a", "b"]);
        s.select_all();
        assert_eq!(s.selected_count(), 2);
        assert!(s.validate_for(&[QuizType::Match]).is_err());
        assert_eq!(s.toggle("a"), Some(false));
        assert_eq!(s.selected(), vec!["b"]);
    }

    #[test]
    fn test_entries_keep_commas() {
        let s = HighlightSelection::new(vec!["Seoul, Korea".into()]);
        assert_eq!(s.available(), ["Seoul, Korea"]);
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut s = selection();
        s.select_all();
        assert_eq!(s.selected_count(), 4);
        s.clear();
        assert!(s.selected().is_empty());
    }
}
