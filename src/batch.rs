// Index-based batch commands (`get`, `del`).
//
// A batch fetches the listing once, resolves the user's numbers against
// that snapshot and then runs one operation per file. Bad numbers are
// reported and skipped; the first failing operation stops the batch.

use tracing::{debug, info};

use crate::api::StorageApi;
use crate::error::{ClientError, Result};
use crate::selection::{self, SelectionWarning};

/// Run `op` for every name in order, stopping at the first error.
pub fn run_batch<S, F, E>(names: &[S], mut op: F) -> Result<(), E>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Result<(), E>,
{
    for (i, name) in names.iter().enumerate() {
        let name: &str = name.as_ref();
        debug!(step = i + 1, total = names.len(), name, "batch step");
        op(name)?;
    }
    Ok(())
}

/// Resolve `tokens` against a fresh listing from `api` and apply `op` to each
/// selected file.
///
/// Fails with an input error before touching the network when `tokens` is
/// empty. Selection warnings go to `on_warning` as they are found.
pub fn run_indexed<A, W, F>(api: &A, tokens: &[String], on_warning: W, op: F) -> Result<()>
where
    A: StorageApi + ?Sized,
    W: FnMut(SelectionWarning),
    F: FnMut(&str) -> Result<()>,
{
    if tokens.is_empty() {
        return Err(ClientError::input("no files specified"));
    }

    let listing = api.list()?;
    let names = selection::resolve(tokens, &listing, on_warning);
    info!(
        requested = tokens.len(),
        selected = names.len(),
        "selection resolved"
    );
    run_batch(&names, op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_every_name_in_order() {
        let mut seen = Vec::new();
        let result: Result<(), String> = run_batch(&["b", "a", "c"], |n| {
            seen.push(n.to_string());
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(seen, vec!["b", "a", "c"]);
    }

    #[test]
    fn first_error_stops_the_batch() {
        let mut seen = Vec::new();
        let result = run_batch(&["a", "b", "c"], |n| {
            seen.push(n.to_string());
            if n == "a" {
                Err(format!("failed {n}"))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("failed a".to_string()));
        assert_eq!(seen, vec!["a"]);
    }

    #[test]
    fn empty_batch_is_ok() {
        let names: [&str; 0] = [];
        let result: Result<(), ()> = run_batch(&names, |_| Err(()));
        assert!(result.is_ok());
    }
}
