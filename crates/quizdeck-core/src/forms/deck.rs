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
use crate::types::deck::CardDeck;
use crate::types::deck::CardDeckDraft;
use crate::types::deck::CardDeckUpdate;

/// Card deck editor. Images are uploaded first; the form holds the server
/// filenames the uploads returned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardDeckForm {
    pub name: String,
    pub description: String,
    pub front_image: String,
    pub back_image: String,
    pub is_default: bool,
}

impl CardDeckForm {
    pub fn from_deck(deck: &CardDeck) -> Self {
        Self {
            name: deck.name.clone(),
            description: deck.description.clone().unwrap_or_default(),
            front_image: deck.front_image.clone(),
            back_image: deck.back_image.clone(),
            is_default: deck.is_default,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        required(&self.name, "Enter a deck name.")?;
        required(&self.front_image, "Upload a front image.")?;
        required(&self.back_image, "Upload a back image.")?;
        Ok(())
    }

    pub fn to_draft(&self) -> Result<CardDeckDraft, FormError> {
        self.validate()?;
        Ok(CardDeckDraft {
            name: self.name.trim().to_string(),
            description: optional(&self.description),
            front_image: self.front_image.trim().to_string(),
            back_image: self.back_image.trim().to_string(),
            is_default: self.is_default,
        })
    }

    pub fn to_update(&self) -> Result<CardDeckUpdate, FormError> {
        let draft = self.to_draft()?;
        Ok(CardDeckUpdate {
            name: Some(draft.name),
            description: Some(draft.description),
            front_image: Some(draft.front_image),
            back_image: Some(draft.back_image),
            is_default: Some(draft.is_default),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_both_images() {
        let form = CardDeckForm {
            name: "Classic".into(),
            front_image: "front.png".into(),
            ..CardDeckForm::default()
        };
        assert_eq!(form.to_draft().unwrap_err().message(), "Upload a back image.");
    }

    #[test]
    fn test_blank_description_clears_it() {
        let form = CardDeckForm {
            name: "Classic".into(),
            description: "  ".into(),
            front_image: "front.png".into(),
            back_image: "back.png".into(),
            is_default: false,
        };
        let update = form.to_update().unwrap();
        assert_eq!(update.description, Some(None));
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["description"], serde_json::Value::Null);
    }
}
