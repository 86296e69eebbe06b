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

use std::path::Path;
use std::time::Duration;

use quizdeck_core::Fallible;
use quizdeck_core::fail;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::client::Upload;

pub async fn wait_for_server(host: &str, port: u16) -> Fallible<()> {
    loop {
        if let Ok(stream) = TcpStream::connect(format!("{host}:{port}")).await {
            drop(stream);
            break;
        }
        sleep(Duration::from_millis(1)).await;
    }
    Ok(())
}

/// Read a local file into an [`Upload`], keeping its file name.
pub async fn read_upload(path: &Path) -> Fallible<Upload> {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return fail(format!("not a file: {}", path.display()));
    };
    let file_name = file_name.to_string();
    let bytes = tokio::fs::read(path).await?;
    Ok(Upload::from_file_name(file_name, bytes))
}
