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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::types::timestamp::Timestamp;

/// Which image of a helper to show.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelperVariant {
    Idle,
    Correct,
    Incorrect,
}

impl HelperVariant {
    pub const ALL: [HelperVariant; 3] = [
        HelperVariant::Idle,
        HelperVariant::Correct,
        HelperVariant::Incorrect,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HelperVariant::Idle => "idle",
            HelperVariant::Correct => "correct",
            HelperVariant::Incorrect => "incorrect",
        }
    }
}

impl Display for HelperVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HelperVariant {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        HelperVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == lower)
            .ok_or_else(|| ErrorReport::new(format!("Invalid helper variant: '{s}'.")))
    }
}

/// Image asset paths for each variant. Any may be missing until uploaded.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct HelperVariants {
    #[serde(default)]
    pub idle: Option<String>,
    #[serde(default)]
    pub correct: Option<String>,
    #[serde(default)]
    pub incorrect: Option<String>,
}

impl HelperVariants {
    pub fn get(&self, variant: HelperVariant) -> Option<&str> {
        match variant {
            HelperVariant::Idle => self.idle.as_deref(),
            HelperVariant::Correct => self.correct.as_deref(),
            HelperVariant::Incorrect => self.incorrect.as_deref(),
        }
    }
}

/// A gamification character, unlocked once the user reaches its level.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LearningHelper {
    pub id: i64,
    pub name: String,
    pub level_requirement: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variants: HelperVariants,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Computed by the server for the requesting user. Absent on endpoints
    /// that return the public shape.
    #[serde(default)]
    pub unlocked: bool,
}

impl LearningHelper {
    pub fn is_unlocked_at(&self, level: i64) -> bool {
        level >= self.level_requirement
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HelperCreate {
    pub name: String,
    pub level_requirement: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct HelperUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_requirement: Option<i64>,
    /// `Some(None)` clears the description.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_unlock_by_level() -> Fallible<()> {
        let helper: LearningHelper = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Owl",
                "level_requirement": 3,
                "variants": {"idle": "owl_idle.png"},
                "created_at": "2024-01-01T00:00:00",
                "updated_at": "2024-01-01T00:00:00"
            }"#,
        )?;
        assert!(!helper.unlocked);
        assert!(!helper.is_unlocked_at(2));
        assert!(helper.is_unlocked_at(3));
        assert_eq!(helper.variants.get(HelperVariant::Idle), Some("owl_idle.png"));
        assert_eq!(helper.variants.get(HelperVariant::Correct), None);
        Ok(())
    }

    #[test]
    fn test_variant_parse() -> Fallible<()> {
        assert_eq!("Correct".parse::<HelperVariant>()?, HelperVariant::Correct);
        assert!("sad".parse::<HelperVariant>().is_err());
        Ok(())
    }
}
