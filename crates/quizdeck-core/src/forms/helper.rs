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
use crate::forms::optional;
use crate::forms::required;
use crate::types::helper::HelperCreate;
use crate::types::helper::HelperUpdate;
use crate::types::helper::LearningHelper;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HelperForm {
    pub name: String,
    /// Raw text of the level input.
    pub level_requirement: String,
    pub description: String,
}

impl HelperForm {
    pub fn from_helper(helper: &LearningHelper) -> Self {
        Self {
            name: helper.name.clone(),
            level_requirement: helper.level_requirement.to_string(),
            description: helper.description.clone().unwrap_or_default(),
        }
    }

    fn level(&self) -> Result<i64, FormError> {
        match self.level_requirement.trim().parse::<i64>() {
            Ok(level) if level >= 1 => Ok(level),
            _ => Err(FormError::new("The level requirement must be 1 or more.")),
        }
    }

    pub fn to_create(&self) -> Result<HelperCreate, FormError> {
        required(&self.name, "Enter a name.")?;
        Ok(HelperCreate {
            name: self.name.trim().to_string(),
            level_requirement: self.level()?,
            description: optional(&self.description),
        })
    }

    pub fn to_update(&self) -> Result<HelperUpdate, FormError> {
        let create = self.to_create()?;
        Ok(HelperUpdate {
            name: Some(create.name),
            level_requirement: Some(create.level_requirement),
            description: Some(create.description),
        })
    }
}
