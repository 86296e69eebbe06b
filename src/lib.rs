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

//! quizdeck: typed async client for the study server, the stateful hooks
//! built on it, and a command-line front end.

pub mod cli;
pub mod client;
pub mod config;
pub mod hooks;
pub mod utils;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use client::ApiError;
pub use client::ApiResult;
pub use client::Upload;
