//! Browser navigation through the platform's URL opener

use std::io;
use std::process::{Child, Command, Stdio};
use std::thread;

use sdc_core::Navigator;
use sdc_domain::{Result, SdcError};
use tracing::{debug, instrument, warn};

/// Program (plus leading arguments) that opens a URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opener {
    program: String,
    args: Vec<String>,
}

impl Opener {
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// `open` on macOS, `cmd /C start` on Windows, `xdg-open` elsewhere.
    #[must_use]
    pub fn system() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("open", Vec::<String>::new())
        } else if cfg!(windows) {
            // `start` treats its first quoted argument as the window title
            Self::new("cmd", ["/C", "start", ""])
        } else {
            Self::new("xdg-open", Vec::<String>::new())
        }
    }
}

/// Opens collector URLs in the user's browser.
#[derive(Clone, Debug)]
pub struct SystemNavigator {
    base_url: String,
    opener: Opener,
}

impl SystemNavigator {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_opener(base_url, Opener::system())
    }

    #[must_use]
    pub fn with_opener(base_url: &str, opener: Opener) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), opener }
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Launching is non-blocking: the opener is spawned and reaped on a detached
/// thread, so only a failure to start it is reported to the caller.
impl Navigator for SystemNavigator {
    #[instrument(skip(self))]
    fn open(&self, path: &str) -> Result<()> {
        let url = self.url_for(path);
        debug!(%url, opener = %self.opener.program, "opening browser");

        let child = Command::new(&self.opener.program)
            .args(&self.opener.args)
            .arg(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| map_launch_error(&self.opener.program, &e))?;

        reap_detached(child, self.opener.program.clone(), url);
        Ok(())
    }
}

fn reap_detached(mut child: Child, program: String, url: String) {
    thread::spawn(move || match child.wait() {
        Ok(status) if status.success() => {}
        Ok(status) => warn!(%program, %url, %status, "opener exited unsuccessfully"),
        Err(e) => warn!(%program, %url, error = %e, "failed to wait for opener"),
    });
}

fn map_launch_error(program: &str, err: &io::Error) -> SdcError {
    SdcError::Platform(format!("failed to launch {program}: {err}"))
}
