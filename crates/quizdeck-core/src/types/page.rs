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

use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
    pub total: u64,
}

fn first_page() -> u32 {
    1
}

fn default_size() -> u32 {
    20
}

/// A paginated list envelope, `{items, meta}`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Whether another page exists after this one.
    pub fn has_next(&self) -> bool {
        u64::from(self.meta.page) * u64::from(self.meta.size) < self.meta.total
    }
}

/// An unpaginated list envelope, `{items}`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

/// `page`/`size` query parameters.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_next() {
        let page: Page<u8> = Page {
            items: vec![],
            meta: PageMeta {
                page: 2,
                size: 20,
                total: 41,
            },
        };
        assert!(page.has_next());
        let last = Page::<u8> {
            items: vec![],
            meta: PageMeta {
                page: 3,
                size: 20,
                total: 41,
            },
        };
        assert!(!last.has_next());
    }
}
