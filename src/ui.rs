// UI layer: one function per command. Each flow talks to the server through
// `StorageApi`, prints user-facing lines with `println!` and shows indicatif
// progress bars for transfers.

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::api::StorageApi;
use crate::batch;
use crate::error::{ClientError, Result};
use crate::selection::SelectionWarning;
use crate::sink::{ConsoleSink, FileSink, Sink};
use crate::upload::UploadBatch;

/// How `get` stores what it downloads.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Print to the terminal instead of saving.
    pub view: bool,
    pub dir: PathBuf,
    pub progress: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        DownloadOptions {
            view: false,
            dir: PathBuf::from("."),
            progress: true,
        }
    }
}

fn transfer_bar(len: Option<u64>, message: &str, enabled: bool) -> ProgressBar {
    let bar = match len {
        Some(len) if enabled && len > 0 => ProgressBar::new(len),
        _ => return ProgressBar::hidden(),
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.cyan} [{bar:40.cyan/blue}] {bytes}/{total_bytes} @ {bytes_per_sec} - {msg}",
    ) {
        bar.set_style(style.progress_chars("━━╌"));
    }
    bar.set_message(message.to_string());
    bar
}

/// Print a skipped selection without stopping the batch.
pub fn report_warning(warning: SelectionWarning) {
    println!("{}", warning_line(&warning, io::stdout().is_terminal()));
}

// colour only when stdout is a terminal
fn warning_line(warning: &SelectionWarning, color: bool) -> String {
    let text = capitalize(&warning.to_string());
    if color {
        text.yellow().to_string()
    } else {
        text
    }
}

/// Copy a download body into `sink`. Read failures are transfer errors for
/// `name`; write failures are local errors on the sink's target.
fn copy_body<R: Read + ?Sized>(name: &str, body: &mut R, sink: &mut dyn Sink) -> Result<u64> {
    let mut buf = [0u8; 8192];
    let mut copied = 0u64;
    loop {
        let n = match body.read(&mut buf) {
            Ok(0) => return Ok(copied),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(ClientError::Transfer {
                    name: name.to_string(),
                    source: e,
                })
            }
        };
        sink.write_all(&buf[..n])
            .map_err(|e| ClientError::io(sink.target(), e))?;
        copied += n as u64;
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `list`: print the listing as `ordinal => name`.
pub fn list<A: StorageApi + ?Sized>(api: &A) -> Result<()> {
    let listing = api.list()?;
    for (ordinal, file) in listing.iter() {
        println!("{} => {}", ordinal, file.name);
    }
    Ok(())
}

/// `get`: download every selected file, to disk or to the terminal.
pub fn download<A: StorageApi + ?Sized>(
    api: &A,
    tokens: &[String],
    opts: &DownloadOptions,
) -> Result<()> {
    batch::run_indexed(api, tokens, report_warning, |name| {
        let download = api.download(name)?;
        let mut sink: Box<dyn Sink> = if opts.view {
            Box::new(ConsoleSink::new())
        } else {
            Box::new(FileSink::create(&opts.dir, name)?)
        };

        let bar = transfer_bar(download.content_length, name, opts.progress && !opts.view);
        let mut body = bar.wrap_read(download.body);
        let copied = copy_body(name, &mut body, sink.as_mut())?;
        bar.finish_and_clear();
        info!(name, bytes = copied, "download finished");

        if let Some(path) = sink.finalize()? {
            println!("Downloaded: {}", path.display());
        }
        Ok(())
    })
}

/// `del`: remove every selected file from the server.
pub fn delete<A: StorageApi + ?Sized>(api: &A, tokens: &[String]) -> Result<()> {
    batch::run_indexed(api, tokens, report_warning, |name| {
        api.delete(name)?;
        println!("Deleted: {}", name);
        Ok(())
    })
}

/// `push`: upload local files in one multipart request.
pub fn push<A: StorageApi + ?Sized, P: AsRef<Path>>(
    api: &A,
    paths: &[P],
    progress: bool,
) -> Result<()> {
    let upload = UploadBatch::from_paths(paths)?;
    let count = upload.len();
    let bar = transfer_bar(Some(upload.total_size()), "uploading", progress);
    api.upload(upload, &bar)?;
    bar.finish_and_clear();
    info!(files = count, "upload finished");
    println!("Uploaded...");
    Ok(())
}

/// `text`: share a titled text message. Slashes are not allowed in titles
/// and are dropped.
pub fn share_text<A: StorageApi + ?Sized>(api: &A, title: &str, body: &str) -> Result<()> {
    let title = title.replace('/', "");
    api.share_text(&title, body)?;
    println!("Text uploaded...");
    Ok(())
}
