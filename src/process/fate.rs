//! How a process ended, and whether that counts as failure.

/// How a child process terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessFate {
    /// Exited on its own with this code.
    Exited(i32),
    /// Terminated by a signal, named like `"SIGKILL"`.
    Killed(String),
}

impl From<std::process::ExitStatus> for ProcessFate {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ProcessFate::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ProcessFate::Killed(signal_name(signal));
            }
        }

        // Neither a code nor a signal: only reachable on exotic platforms.
        ProcessFate::Exited(-1)
    }
}

#[cfg(unix)]
fn signal_name(signal: i32) -> String {
    match nix::sys::signal::Signal::try_from(signal) {
        Ok(signal) => signal.as_str().to_string(),
        Err(_) => format!("signal {}", signal),
    }
}

/// Why a terminated process counts as failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExitError {
    /// Non-zero exit code.
    #[error("exited with code {0}")]
    Code(i32),
    /// Killed by the named signal.
    #[error("killed by {0}")]
    Signal(String),
}

/// `None` for a clean exit, otherwise the reason the process failed.
///
/// ```
/// use undertow::process::{classify, ExitError, ProcessFate};
///
/// assert_eq!(classify(&ProcessFate::Exited(0)), None);
/// assert_eq!(classify(&ProcessFate::Exited(2)), Some(ExitError::Code(2)));
/// ```
pub fn classify(fate: &ProcessFate) -> Option<ExitError> {
    match fate {
        ProcessFate::Exited(0) => None,
        ProcessFate::Exited(code) => Some(ExitError::Code(*code)),
        ProcessFate::Killed(signal) => Some(ExitError::Signal(signal.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_killed_is_a_failure() {
        assert_eq!(
            classify(&ProcessFate::Killed("SIGTERM".to_string())),
            Some(ExitError::Signal("SIGTERM".to_string()))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_from_signal() {
        use std::os::unix::process::ExitStatusExt;

        let status = std::process::ExitStatus::from_raw(9);
        assert_eq!(ProcessFate::from(status), ProcessFate::Killed("SIGKILL".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_from_code() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status keeps the exit code in the second byte.
        let status = std::process::ExitStatus::from_raw(3 << 8);
        assert_eq!(ProcessFate::from(status), ProcessFate::Exited(3));
    }

    proptest! {
        #[test]
        fn prop_only_zero_exit_is_success(code in any::<i32>()) {
            let outcome = classify(&ProcessFate::Exited(code));
            if code == 0 {
                prop_assert_eq!(outcome, None);
            } else {
                prop_assert_eq!(outcome, Some(ExitError::Code(code)));
            }
        }
    }
}
