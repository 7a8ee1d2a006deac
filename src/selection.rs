// Turns the numbers typed by the user into file names.
//
// Resolution is lenient: a token that is not a number, points outside the
// listing or repeats an earlier ordinal produces a `SelectionWarning`
// and is skipped. Only the per-file operation that runs afterwards can
// abort a batch.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::listing::Listing;

/// Non-fatal problem with a single selection token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionWarning {
    InvalidNumber(String),
    OutOfRange(i64),
    AlreadyProcessed(usize),
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionWarning::InvalidNumber(token) => write!(f, "invalid number {}", token),
            SelectionWarning::OutOfRange(n) => write!(f, "no file with index {}", n),
            SelectionWarning::AlreadyProcessed(n) => write!(f, "already processed {}", n),
        }
    }
}

/// Resolve `tokens` against `listing`, in token order.
///
/// Each skipped token is reported to `on_warning` as soon as it is seen.
/// Duplicates are detected by ordinal, so `2` and `+2` count as the same
/// selection. The returned names keep the order of first valid occurrence.
pub fn resolve<S, F>(tokens: &[S], listing: &Listing, mut on_warning: F) -> Vec<String>
where
    S: AsRef<str>,
    F: FnMut(SelectionWarning),
{
    let mut processed = HashSet::new();
    let mut names = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token: &str = token.as_ref();
        let warning = match token.parse::<i64>() {
            Err(_) => SelectionWarning::InvalidNumber(token.to_string()),
            Ok(n) => match usize::try_from(n).ok().and_then(|o| listing.get(o).map(|f| (o, f))) {
                None => SelectionWarning::OutOfRange(n),
                Some((ordinal, _)) if !processed.insert(ordinal) => {
                    SelectionWarning::AlreadyProcessed(ordinal)
                }
                Some((ordinal, file)) => {
                    debug!(ordinal, name = %file.name, "resolved selection");
                    names.push(file.name.clone());
                    continue;
                }
            },
        };
        debug!(token, "skipped: {}", warning);
        on_warning(warning);
    }

    names
}
