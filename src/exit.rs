// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkrankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config, dataset).
    Error = 1,
    /// A one-shot search matched nothing (scriptable, like grep).
    NoResults = 2,
}

impl LinkrankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for LinkrankExit {
    fn report(self) -> std::process::ExitCode {
        // Exit codes stay within the portable 0..255 range; scripts that only
        // check 0 vs non-0 keep working, specific codes help debug.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<()>> for LinkrankExit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                Self::Error
            }
        }
    }
}
