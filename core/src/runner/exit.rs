/// Exit code reported when the child could not be started or wired up.
pub const SETUP_FAILED: i32 = -1;

/// Exit code reported when waiting on a started child fails.
pub const WAIT_FAILED: i32 = -1;

/// Maps a termination status onto a shell-style exit code.
///
/// Signal deaths become `128 + signal` on unix, matching what a shell reports
/// for the same child.
pub fn normalize_exit(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            1
        }
    }
    #[cfg(windows)]
    {
        status.code().unwrap_or(1)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn normal_exit_passes_through() {
        assert_eq!(normalize_exit(std::process::ExitStatus::from_raw(0)), 0);
        assert_eq!(normalize_exit(std::process::ExitStatus::from_raw(3 << 8)), 3);
    }

    #[test]
    fn signal_maps_to_shell_encoding() {
        // raw wait status 9 = killed by SIGKILL
        assert_eq!(normalize_exit(std::process::ExitStatus::from_raw(9)), 137);
    }
}
