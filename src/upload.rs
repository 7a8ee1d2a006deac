// Upload payload. All files are read before the request is sent so that a
// stat or read error on any of them aborts the whole push.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use indicatif::ProgressBar;
use reqwest::blocking::multipart::{Form, Part};
use tracing::debug;

use crate::error::{ClientError, Result};

/// One file of the multipart body. `name` is used both as the form part
/// name and as the file name the server stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub name: String,
    pub contents: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct UploadBatch {
    parts: Vec<UploadPart>,
}

impl UploadBatch {
    /// Read every regular file in `paths`. Directories are skipped without
    /// a message; anything that cannot be stat'ed or read is an error.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        if paths.is_empty() {
            return Err(ClientError::input("no files specified"));
        }

        let mut parts = Vec::with_capacity(paths.len());
        for path in paths {
            let path: &Path = path.as_ref();
            let meta = fs::metadata(path).map_err(|e| ClientError::io(path, e))?;
            if meta.is_dir() {
                debug!(path = %path.display(), "skipping directory");
                continue;
            }

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| ClientError::input(format!("{} has no file name", path.display())))?;
            let contents = fs::read(path).map_err(|e| ClientError::io(path, e))?;
            debug!(%name, bytes = contents.len(), "queued for upload");
            parts.push(UploadPart { name, contents });
        }

        Ok(UploadBatch { parts })
    }

    pub fn parts(&self) -> &[UploadPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.parts.iter().map(|p| p.contents.len() as u64).sum()
    }

    /// Build the multipart body. Reads of each part advance `progress`.
    pub fn into_form(self, progress: &ProgressBar) -> Form {
        self.parts.into_iter().fold(Form::new(), |form, part| {
            let len = part.contents.len() as u64;
            let reader = progress.wrap_read(Cursor::new(part.contents));
            let body = Part::reader_with_length(reader, len).file_name(part.name.clone());
            form.part(part.name, body)
        })
    }
}
