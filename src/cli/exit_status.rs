use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): the command did what was asked
/// - `Failure` (1): the command ran but refused to act (e.g. `init` with an existing config)
/// - `Error` (2): the command failed (load, extraction or write error, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
