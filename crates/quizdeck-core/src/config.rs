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

//! Where the API lives.
//!
//! An explicit override always wins. Without one, the client talks to the
//! host that served the page; during local development the page is served
//! by a dev server on another port, so `localhost` gets the API port
//! appended instead.

/// Default API port used on localhost.
pub const DEFAULT_API_PORT: u16 = 8000;

const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

/// The parts of the page's location that matter for resolution, mirroring
/// `window.location`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PageLocation {
    /// Scheme with trailing colon, e.g. `https:`.
    pub protocol: String,
    /// Host name without port.
    pub hostname: String,
    /// Host name with port, when the page has one.
    pub host: String,
}

impl PageLocation {
    pub fn new(
        protocol: impl Into<String>,
        hostname: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
            host: host.into(),
        }
    }

    /// `http://localhost`, the location assumed outside a browser.
    pub fn localhost() -> Self {
        Self::new("http:", "localhost", "localhost")
    }

    pub fn is_local(&self) -> bool {
        LOCAL_HOSTNAMES.contains(&self.hostname.as_str())
    }
}

/// Resolve the API base URL.
///
/// - `override_url`, when non-blank, is returned trimmed and otherwise
///   untouched.
/// - On a local hostname: `{protocol}//{hostname}:{port}`, where `port` is
///   the parsed `override_port` or [`DEFAULT_API_PORT`].
/// - Anywhere else: the page origin, `{protocol}//{host}`.
pub fn resolve_base_url(
    override_url: Option<&str>,
    override_port: Option<&str>,
    location: &PageLocation,
) -> String {
    if let Some(url) = override_url.map(str::trim).filter(|u| !u.is_empty()) {
        return url.to_string();
    }
    if location.is_local() {
        let port = override_port
            .map(str::trim)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_API_PORT);
        return format!("{}//{}:{}", location.protocol, location.hostname, port);
    }
    format!("{}//{}", location.protocol, location.host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_is_used_verbatim_after_trim() {
        let location = PageLocation::new("https:", "study.example.com", "study.example.com");
        assert_eq!(
            resolve_base_url(Some("  https://api.example.com/v1/ \n"), Some("9000"), &location),
            "https://api.example.com/v1/"
        );
        assert_eq!(
            resolve_base_url(Some("http://10.0.0.2:8080"), None, &PageLocation::localhost()),
            "http://10.0.0.2:8080"
        );
    }

    #[test]
    fn test_blank_override_is_ignored() {
        assert_eq!(
            resolve_base_url(Some("   "), None, &PageLocation::localhost()),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_localhost_default_port() {
        let location = PageLocation::new("http:", "localhost", "localhost:5173");
        assert_eq!(resolve_base_url(None, None, &location), "http://localhost:8000");
    }

    #[test]
    fn test_localhost_configured_port() {
        let location = PageLocation::new("http:", "localhost", "localhost:5173");
        assert_eq!(
            resolve_base_url(None, Some("9001"), &location),
            "http://localhost:9001"
        );
        assert_eq!(
            resolve_base_url(None, Some("not-a-port"), &location),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_remote_host_uses_origin() {
        let location = PageLocation::new("https:", "study.example.com", "study.example.com:8443");
        assert_eq!(
            resolve_base_url(None, Some("9001"), &location),
            "https://study.example.com:8443"
        );
    }
}
