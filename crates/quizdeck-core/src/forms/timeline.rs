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

//! Timeline and era entries on the content editor.

use crate::forms::FormError;
use crate::types::content::EraEntry;
use crate::types::content::TimelineEntry;

const BULLETS: [char; 5] = ['•', '-', '*', '●', '▪'];

// Spaced separators come first so "1392 - Joseon" splits on the spaced dash
// rather than on a hyphen inside a word.
const SEPARATORS: [&str; 6] = [" – ", " — ", " - ", "–", "—", "-"];

/// Split a pasted line such as `• 1392 – Joseon founded` into a title and a
/// description. A line without a separator is all title.
pub fn parse_timeline_entry(raw: &str) -> TimelineEntry {
    let mut normalized = raw.trim_start();
    while let Some(rest) = normalized.strip_prefix(BULLETS) {
        normalized = rest.trim_start();
    }
    let normalized = normalized.trim();
    let mut title = normalized;
    let mut description = "";
    if let Some(sep) = SEPARATORS.iter().find(|sep| normalized.contains(**sep)) {
        if let Some((left, right)) = normalized.split_once(*sep) {
            let (left, right) = (left.trim(), right.trim());
            if !left.is_empty() || !right.is_empty() {
                if left.is_empty() {
                    title = right;
                } else {
                    title = left;
                    description = right;
                }
            }
        }
    }
    TimelineEntry {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
    }
}

/// Parse pasted text, one entry per non-blank line.
pub fn parse_timeline_text(text: &str) -> Vec<TimelineEntry> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_timeline_entry)
        .filter(|entry| !entry.title.is_empty())
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimelineEditor {
    entries: Vec<TimelineEntry>,
}

impl TimelineEditor {
    pub fn new(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }

    /// Append a structured entry. The title is required.
    pub fn add(&mut self, title: &str, description: &str) -> Result<(), FormError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FormError::new("Enter a timeline title."));
        }
        self.entries.push(TimelineEntry {
            title: title.to_string(),
            description: description.trim().to_string(),
        });
        Ok(())
    }

    /// Append every entry parsed from pasted text. Returns how many.
    pub fn paste(&mut self, text: &str) -> usize {
        let parsed = parse_timeline_text(text);
        let count = parsed.len();
        self.entries.extend(parsed);
        count
    }

    pub fn remove(&mut self, index: usize) -> Option<TimelineEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TimelineEntry> {
        self.entries
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EraEditor {
    entries: Vec<EraEntry>,
}

impl EraEditor {
    pub fn new(entries: Vec<EraEntry>) -> Self {
        Self { entries }
    }

    /// Append a structured entry. The period is required.
    pub fn add(&mut self, period: &str, detail: &str) -> Result<(), FormError> {
        let period = period.trim();
        if period.is_empty() {
            return Err(FormError::new("Enter a period."));
        }
        self.entries.push(EraEntry {
            period: period.to_string(),
            detail: detail.trim().to_string(),
        });
        Ok(())
    }

    /// Append `period – detail` lines. Returns how many were added.
    pub fn paste(&mut self, text: &str) -> usize {
        let parsed: Vec<EraEntry> = parse_timeline_text(text)
            .into_iter()
            .map(|entry| EraEntry {
                period: entry.title,
                detail: entry.description,
            })
            .collect();
        let count = parsed.len();
        self.entries.extend(parsed);
        count
    }

    pub fn remove(&mut self, index: usize) -> Option<EraEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn entries(&self) -> &[EraEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<EraEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, description: &str) -> TimelineEntry {
        TimelineEntry {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_parse_with_bullet_and_dash() {
        assert_eq!(
            parse_timeline_entry("• 1392 – Joseon founded"),
            entry("1392", "Joseon founded")
        );
        assert_eq!(
            parse_timeline_entry("- * 918 - Goryeo founded"),
            entry("918", "Goryeo founded")
        );
    }

    #[test]
    fn test_parse_without_separator() {
        assert_eq!(parse_timeline_entry("Hangul created"), entry("Hangul created", ""));
    }

    #[test]
    fn test_parse_missing_left_side_promotes_description() {
        assert_eq!(parse_timeline_entry("— only detail"), entry("only detail", ""));
    }

    #[test]
    fn test_parse_text_skips_blank_lines() {
        let parsed = parse_timeline_text("1392 - Joseon\n\n   \n1446 - Hangul\n•");
        assert_eq!(parsed, vec![entry("1392", "Joseon"), entry("1446", "Hangul")]);
    }

    #[test]
    fn test_added_entry_round_trips() -> Result<(), FormError> {
        let mut editor = TimelineEditor::default();
        editor.add("1443", "Hunminjeongeum")?;
        let entries = editor.into_entries();
        assert_eq!(entries, vec![entry("1443", "Hunminjeongeum")]);
        // Re-parsing the rendered line yields the same entry.
        let line = format!("{} - {}", entries[0].title, entries[0].description);
        assert_eq!(parse_timeline_entry(&line), entries[0]);
        Ok(())
    }

    #[test]
    fn test_add_requires_title() {
        let mut editor = TimelineEditor::default();
        assert!(editor.add("  ", "x").is_err());
        assert!(editor.entries().is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut editor = TimelineEditor::new(vec![entry("a", "")]);
        assert_eq!(editor.remove(3), None);
        assert_eq!(editor.remove(0), Some(entry("a", "")));
    }

    #[test]
    fn test_era_paste() {
        let mut editor = EraEditor::default();
        assert_eq!(editor.paste("Three Kingdoms - 57 BC to 668\nGoryeo"), 2);
        assert_eq!(editor.entries()[0].period, "Three Kingdoms");
        assert_eq!(editor.entries()[0].detail, "57 BC to 668");
        assert_eq!(editor.entries()[1].detail, "");
    }
}
