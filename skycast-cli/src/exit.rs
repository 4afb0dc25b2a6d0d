use skycast_core::Error;
use std::process::ExitCode;

pub const USAGE: &str = "\
Usage:

Specified location:
  skycast <location> <mode> <days in forecast>

Default location:
  skycast";

/// Exit status for a failed run: 2 for usage errors, 1 for everything else.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(Error::Usage(_)) => 2,
        _ => 1,
    }
}

/// Print `err` for the user and pick the process exit code.
pub fn report_error(err: &anyhow::Error) -> ExitCode {
    tracing::debug!(error = ?err, "run failed");

    if let Some(Error::Usage(_)) = err.downcast_ref::<Error>() {
        eprintln!("{USAGE}");
    } else {
        eprintln!("error: {err:#}");
    }

    ExitCode::from(exit_status(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_two() {
        let err = anyhow::Error::from(Error::Usage(5));
        assert_eq!(exit_status(&err), 2);
    }

    #[test]
    fn other_errors_exit_with_one() {
        for err in [
            Error::InvalidMode("hourly".to_string()),
            Error::MissingApiKey,
            Error::MalformedResponse("`main` missing".to_string()),
        ] {
            assert_eq!(exit_status(&anyhow::Error::from(err)), 1);
        }

        assert_eq!(exit_status(&anyhow::anyhow!("unexpected")), 1);
    }

    #[test]
    fn context_does_not_hide_the_kind() {
        let err = anyhow::Error::from(Error::Usage(1)).context("while starting up");
        assert_eq!(exit_status(&err), 2);
    }
}
