// Server URL layout. Every endpoint hangs off `{host}/{storage}` (or
// `{host}/{storage}/permanent`), except the listing which lives under
// `{host}/api/...`.

use reqwest::Url;

use crate::error::{ClientError, Result};

#[derive(Debug, Clone)]
pub struct Endpoints {
    host: Url,
    storage: String,
    permanent: bool,
}

/// Prefix `http://` when the host was given without a scheme.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    if host.contains("://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

impl Endpoints {
    pub fn new(host: &str, storage: &str, permanent: bool) -> Result<Self> {
        if host.trim().is_empty() {
            return Err(ClientError::Config("host is empty".into()));
        }
        if storage.trim_matches('/').is_empty() {
            return Err(ClientError::Config("storage name is empty".into()));
        }

        let host = Url::parse(&normalize_host(host))
            .map_err(|e| ClientError::Config(format!("host {:?}: {}", host, e)))?;
        if host.cannot_be_a_base() {
            return Err(ClientError::Config(format!("host {} cannot carry a path", host)));
        }

        Ok(Endpoints {
            host,
            storage: storage.to_string(),
            permanent,
        })
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    pub fn listing(&self) -> Url {
        self.build(Some("api"), &[])
    }

    pub fn upload(&self) -> Url {
        self.build(None, &["upload"])
    }

    /// The file name is pushed as a single escaped path segment.
    pub fn download(&self, file_name: &str) -> Url {
        self.build(None, &[file_name])
    }

    pub fn delete(&self) -> Url {
        self.build(None, &["remove"])
    }

    pub fn share_text(&self) -> Url {
        self.build(None, &["shareText"])
    }

    fn build(&self, prefix: Option<&str>, tail: &[&str]) -> Url {
        let mut url = self.host.clone();
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(prefix);
            path.extend(self.storage.split('/').filter(|s| !s.is_empty()));
            if self.permanent {
                path.push("permanent");
            }
            path.extend(tail);
        }
        url
    }
}
