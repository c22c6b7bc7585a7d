//! Interactive confirmation on the terminal.

use std::io::{BufRead, Write};

use atlas_editor::{Confirm, ConfirmRequest};

/// Asks on stderr and reads the answer from stdin. Anything but `y`/`yes`
/// declines, including a closed stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, request: &ConfirmRequest<'_>) -> bool {
        let mut stderr = std::io::stderr();
        if write!(stderr, "{request} [y/N] ").and_then(|()| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn only_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
