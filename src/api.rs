// API client module: a small blocking HTTP client that talks to the file
// storage server. Every call is a single request; nothing is retried.

use std::io::Read;

use indicatif::ProgressBar;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use tracing::{debug, info};

use crate::endpoints::Endpoints;
use crate::error::{ClientError, Result};
use crate::listing::Listing;
use crate::upload::UploadBatch;

/// Operations the storage server offers. The CLI flows are written against
/// this trait so they can run without a network in tests.
pub trait StorageApi {
    /// Fetch the current file listing, in server order.
    fn list(&self) -> Result<Listing>;

    /// Start downloading `file_name`. The server status has already been
    /// checked when this returns.
    fn download(&self, file_name: &str) -> Result<Download>;

    fn delete(&self, file_name: &str) -> Result<()>;

    fn upload(&self, batch: UploadBatch, progress: &ProgressBar) -> Result<()>;

    fn share_text(&self, title: &str, body: &str) -> Result<()>;
}

/// Body of a successful download.
pub struct Download {
    pub content_length: Option<u64>,
    pub body: Box<dyn Read>,
}

/// Blocking reqwest client bound to one host and storage.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        // the blocking client otherwise stops every request after 30s
        let client = Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()?;
        Ok(ApiClient { client, endpoints })
    }
}

/// Turn a non-200 response into an error carrying the server's message.
fn check(response: Response, context: &'static str) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let message = response.text().unwrap_or_default();
    debug!(%status, %message, "{}", context);
    Err(ClientError::HttpStatus {
        context,
        status,
        message,
    })
}

impl StorageApi for ApiClient {
    fn list(&self) -> Result<Listing> {
        let url = self.endpoints.listing();
        debug!(%url, "fetching listing");
        let res = check(self.client.get(url).send()?, "Unable to get file list")?;
        let listing = Listing::from_json(&res.text()?)?;
        info!(files = listing.len(), "listing fetched");
        Ok(listing)
    }

    fn download(&self, file_name: &str) -> Result<Download> {
        let url = self.endpoints.download(file_name);
        debug!(%url, "downloading");
        let res = check(self.client.get(url).send()?, "Unable to get file")?;
        Ok(Download {
            content_length: res.content_length(),
            body: Box::new(res),
        })
    }

    fn delete(&self, file_name: &str) -> Result<()> {
        let url = self.endpoints.delete();
        debug!(%url, file_name, "deleting");
        check(
            self.client.post(url).form(&[("fileName", file_name)]).send()?,
            "Unable to delete file",
        )?;
        Ok(())
    }

    fn upload(&self, batch: UploadBatch, progress: &ProgressBar) -> Result<()> {
        let url = self.endpoints.upload();
        debug!(%url, parts = batch.len(), bytes = batch.total_size(), "uploading");
        let form = batch.into_form(progress);
        check(
            self.client.post(url).multipart(form).send()?,
            "Unable to upload file",
        )?;
        Ok(())
    }

    fn share_text(&self, title: &str, body: &str) -> Result<()> {
        let url = self.endpoints.share_text();
        debug!(%url, title, "sharing text");
        check(
            self.client
                .post(url)
                .form(&[("title", title), ("body", body)])
                .send()?,
            "Unable to share text",
        )?;
        Ok(())
    }
}
