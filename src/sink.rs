// Download destinations: a local file next to the previous downloads, or
// the terminal when the user only wants to look at the contents.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ClientError, Result};

/// Where downloaded bytes go. `finalize` returns the local path when the
/// bytes were stored on disk.
pub trait Sink: Write {
    /// Where the bytes end up, for error messages.
    fn target(&self) -> &Path;

    fn finalize(self: Box<Self>) -> Result<Option<PathBuf>>;
}

/// Return `candidate` if nothing exists at that path, otherwise the first
/// free `candidate_1`, `candidate_2`, ...
pub fn unique_name(candidate: &Path) -> PathBuf {
    if !exists(candidate) {
        return candidate.to_path_buf();
    }

    let mut counter = 1u64;
    loop {
        let mut name = candidate.as_os_str().to_os_string();
        name.push(format!("_{}", counter));
        let next = PathBuf::from(name);
        if !exists(&next) {
            return next;
        }
        counter += 1;
    }
}

// Dangling symlinks count as taken.
fn exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create `dir/file_name`, or a suffixed variant if that name is taken.
    /// Only the last path component of `file_name` is used.
    pub fn create(dir: &Path, file_name: &str) -> Result<Self> {
        let local = Path::new(file_name)
            .file_name()
            .ok_or_else(|| ClientError::input(format!("unusable file name {:?}", file_name)))?;
        let path = unique_name(&dir.join(local));
        let file = File::create(&path).map_err(|e| ClientError::io(&path, e))?;
        debug!(path = %path.display(), "writing download");
        Ok(FileSink {
            path,
            writer: BufWriter::new(file),
        })
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Sink for FileSink {
    fn target(&self) -> &Path {
        &self.path
    }

    fn finalize(mut self: Box<Self>) -> Result<Option<PathBuf>> {
        self.writer
            .flush()
            .map_err(|e| ClientError::io(&self.path, e))?;
        Ok(Some(self.path))
    }
}

pub struct ConsoleSink {
    out: Stdout,
}

impl ConsoleSink {
    pub fn new() -> Self {
        ConsoleSink { out: io::stdout() }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for ConsoleSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Sink for ConsoleSink {
    fn target(&self) -> &Path {
        Path::new("<stdout>")
    }

    fn finalize(mut self: Box<Self>) -> Result<Option<PathBuf>> {
        writeln!(self.out)
            .and_then(|_| self.out.flush())
            .map_err(|e| ClientError::io(self.target(), e))?;
        Ok(None)
    }
}
