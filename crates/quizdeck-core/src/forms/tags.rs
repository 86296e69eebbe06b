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

//! Comma-separated tag input, used for keywords, categories and session
//! tags.

/// Split free text into tags: commas and newlines separate entries, entries
/// are trimmed, blanks dropped, and repeats removed keeping the first
/// appearance.
pub fn parse_tag_input(input: &str) -> Vec<String> {
    let mut tags = TagList::new();
    tags.add(input);
    tags.into_vec()
}

/// An ordered, duplicate-free list of tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing values, normalizing them the same way as input.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = Self::new();
        for value in values {
            tags.add(value.as_ref());
        }
        tags
    }

    /// Add every tag in `input`. Returns how many were new.
    pub fn add(&mut self, input: &str) -> usize {
        let mut added = 0;
        for candidate in input.split([',', '\n']) {
            let candidate = candidate.trim();
            if candidate.is_empty() || self.contains(candidate) {
                continue;
            }
            self.tags.push(candidate.to_string());
            added += 1;
        }
        added
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}
