// File listing as returned by the server. The position of an entry (1-based)
// is the number the user types on the command line, so the server order is
// kept exactly as received.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// One file known to the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
}

/// Snapshot of the server listing for a single command.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Listing {
    files: Vec<FileDescriptor>,
}

impl Listing {
    /// Decode the listing payload. A `null` body is an empty storage.
    pub fn from_json(payload: &str) -> Result<Self> {
        let files: Option<Vec<FileDescriptor>> =
            serde_json::from_str(payload).map_err(ClientError::Decode)?;
        Ok(Listing {
            files: files.unwrap_or_default(),
        })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Look up a file by its 1-based ordinal.
    pub fn get(&self, ordinal: usize) -> Option<&FileDescriptor> {
        ordinal.checked_sub(1).and_then(|i| self.files.get(i))
    }

    /// Iterate as `(ordinal, file)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FileDescriptor)> {
        self.files.iter().enumerate().map(|(i, f)| (i + 1, f))
    }
}

impl<S: Into<String>> FromIterator<S> for Listing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Listing {
            files: iter
                .into_iter()
                .map(|name| FileDescriptor { name: name.into() })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_order() {
        let listing =
            Listing::from_json(r#"[{"name":"z.txt"},{"name":"a.txt","size":12}]"#).unwrap();
        let names: Vec<_> = listing.iter().map(|(n, f)| (n, f.name.as_str())).collect();
        assert_eq!(names, vec![(1, "z.txt"), (2, "a.txt")]);
    }

    #[test]
    fn null_payload_is_empty_listing() {
        let listing = Listing::from_json("null").unwrap();
        assert!(listing.is_empty());
        assert!(Listing::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn ordinal_zero_is_not_a_file() {
        let listing: Listing = ["a"].into_iter().collect();
        assert!(listing.get(0).is_none());
        assert_eq!(listing.get(1).map(|f| f.name.as_str()), Some("a"));
        assert!(listing.get(2).is_none());
    }

    #[test]
    fn malformed_payload_is_decode_error() {
        assert!(matches!(
            Listing::from_json(r#"{"name":"a"}"#),
            Err(ClientError::Decode(_))
        ));
        assert!(matches!(Listing::from_json("<html>"), Err(ClientError::Decode(_))));
    }
}
