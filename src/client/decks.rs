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

use quizdeck_core::types::deck::CardDeck;
use quizdeck_core::types::deck::CardDeckDraft;
use quizdeck_core::types::deck::CardDeckUpdate;
use quizdeck_core::types::deck::UploadedImage;
use quizdeck_core::types::page::Page;
use quizdeck_core::types::page::PageQuery;
use reqwest::Method;
use reqwest::multipart::Form;

use crate::client::ApiClient;
use crate::client::ApiResult;
use crate::client::Upload;

impl ApiClient {
    /// `GET /card-decks`.
    pub async fn list_decks(&self, query: &PageQuery) -> ApiResult<Page<CardDeck>> {
        self.get_with("/card-decks", query).await
    }

    /// `GET /card-decks/default`.
    pub async fn default_deck(&self) -> ApiResult<CardDeck> {
        self.get("/card-decks/default").await
    }

    /// `GET /card-decks/{id}`.
    pub async fn get_deck(&self, id: i64) -> ApiResult<CardDeck> {
        self.get(&format!("/card-decks/{id}")).await
    }

    /// `POST /card-decks`.
    pub async fn create_deck(&self, deck: &CardDeckDraft) -> ApiResult<CardDeck> {
        self.post("/card-decks", deck).await
    }

    /// `PUT /card-decks/{id}`. Only the fields set in `update` change.
    pub async fn update_deck(&self, id: i64, update: &CardDeckUpdate) -> ApiResult<CardDeck> {
        self.put(&format!("/card-decks/{id}"), update).await
    }

    /// `DELETE /card-decks/{id}`. The server refuses to delete the default
    /// deck.
    pub async fn delete_deck(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/card-decks/{id}")).await
    }

    /// `POST /upload-card-deck-image`. The returned filename goes into a
    /// deck's `front_image` or `back_image`.
    pub async fn upload_deck_image(&self, image: Upload) -> ApiResult<UploadedImage> {
        let form = Form::new().part("file", image.into_part()?);
        let builder = self
            .request(Method::POST, "/upload-card-deck-image")
            .multipart(form);
        self.send(builder).await
    }
}
