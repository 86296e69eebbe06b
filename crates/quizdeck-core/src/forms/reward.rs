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
use crate::forms::required;
use crate::types::reward::Reward;
use crate::types::reward::RewardCreate;
use crate::types::reward::RewardUpdate;
use crate::types::timestamp::Timestamp;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RewardForm {
    pub title: String,
    pub duration: String,
    pub valid_until: Option<Timestamp>,
}

impl RewardForm {
    pub fn from_reward(reward: &Reward) -> Self {
        Self {
            title: reward.title.clone(),
            duration: reward.duration.clone(),
            valid_until: reward.valid_until,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        required(&self.title, "Enter a reward title.")?;
        required(&self.duration, "Enter a duration.")?;
        Ok(())
    }

    pub fn to_create(&self) -> Result<RewardCreate, FormError> {
        self.validate()?;
        Ok(RewardCreate {
            title: self.title.trim().to_string(),
            duration: self.duration.trim().to_string(),
            valid_until: self.valid_until,
        })
    }

    pub fn to_update(&self) -> Result<RewardUpdate, FormError> {
        self.validate()?;
        Ok(RewardUpdate {
            title: Some(self.title.trim().to_string()),
            duration: Some(self.duration.trim().to_string()),
            valid_until: self.valid_until,
            used: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_requires_fields() {
        let form = RewardForm {
            title: " Ice cream ".into(),
            duration: "".into(),
            valid_until: None,
        };
        assert_eq!(form.to_create().unwrap_err().message(), "Enter a duration.");
        let form = RewardForm {
            duration: " 1 day".into(),
            ..form
        };
        let create = form.to_create().unwrap();
        assert_eq!(create.title, "Ice cream");
        assert_eq!(create.duration, "1 day");
    }
}
