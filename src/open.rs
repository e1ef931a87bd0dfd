//! Handing resolved links to the operating system.
//!
//! Opening is fire-and-forget: the launcher process is spawned and reaped
//! on a background thread so callers never block on it, and a failure to
//! open is logged rather than reported.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::decoder::Decoder;

/// Something that can open a link.
pub trait Opener {
    fn open(&self, url: &Url) -> Result<()>;
}

/// Opens links with the platform launcher or a configured program.
pub struct SystemOpener {
    program: String,
}

impl SystemOpener {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.open.command {
            Some(ref cmd) => Self::new(cmd.clone()),
            None => Self::platform_default(),
        }
    }

    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("open")
        } else if cfg!(target_os = "windows") {
            Self::new("explorer")
        } else {
            Self::new("xdg-open")
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Opener for SystemOpener {
    fn open(&self, url: &Url) -> Result<()> {
        let mut child = Command::new(&self.program)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch '{}'", self.program))?;

        let program = self.program.clone();
        std::thread::spawn(move || match child.wait() {
            Ok(status) => debug!(program = %program, %status, "launcher exited"),
            Err(e) => debug!(program = %program, "could not wait on launcher: {}", e),
        });
        Ok(())
    }
}

/// Decodes commands and opens whatever they resolve to.
pub struct Launcher<O: Opener> {
    decoder: Decoder,
    opener: O,
}

impl<O: Opener> Launcher<O> {
    pub fn new(decoder: Decoder, opener: O) -> Self {
        Self { decoder, opener }
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Returns whether the command was recognised. Open failures are
    /// logged and otherwise ignored.
    pub fn launch(&self, raw: &str) -> bool {
        match self.decoder.decode(raw) {
            Some(url) => {
                self.open(&url);
                true
            }
            None => {
                info!(input = raw, "no match");
                false
            }
        }
    }

    pub fn open(&self, url: &Url) {
        if let Err(e) = self.opener.open(url) {
            warn!(url = %url, "could not open link: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::TopicIndex;
    use std::cell::RefCell;
    use std::sync::Arc;

    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Opener for Recorder {
        fn open(&self, url: &Url) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                anyhow::bail!("launcher unavailable");
            }
            Ok(())
        }
    }

    fn launcher(fail: bool) -> Launcher<Recorder> {
        Launcher::new(
            Decoder::new(Arc::new(TopicIndex::empty())),
            Recorder {
                fail,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_launch_opens_decoded_link() {
        let l = launcher(false);
        assert!(l.launch("John 3:16"));
        assert_eq!(
            l.opener.opened.borrow().as_slice(),
            ["jwlibrary:///finder?srcid=jwlshare&wtlocale=E&prefer=lang&bible=43003016&pub=nwtsty"]
        );
    }

    #[test]
    fn test_launch_ignores_unrecognised() {
        let l = launcher(false);
        assert!(!l.launch("xyz123"));
        assert!(l.opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_open_failure_is_swallowed() {
        let l = launcher(true);
        assert!(l.launch("help"));
        assert_eq!(l.opener.opened.borrow().len(), 1);
    }

    #[test]
    fn test_missing_program_is_error() {
        let opener = SystemOpener::new("spot-no-such-launcher-binary");
        let url = Url::parse("https://judes.club/app/scripture-spotlight").unwrap();
        assert!(opener.open(&url).is_err());
    }

    /// Children of this process sitting in the zombie state.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|e| std::fs::read_to_string(e.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // "<pid> (<comm>) <state> <ppid> ..."
                let Some(close) = stat.rfind(')') else {
                    return false;
                };
                let mut fields = stat[close + 1..].split_whitespace();
                fields.next() == Some("Z") && fields.next() == Some(me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_launched_children_are_reaped() {
        let opener = SystemOpener::new("true");
        let url = Url::parse("https://judes.club/app/scripture-spotlight").unwrap();
        for _ in 0..5 {
            opener.open(&url).unwrap();
        }

        // give every child time to exit before counting
        std::thread::sleep(std::time::Duration::from_millis(200));
        let mut zombies = zombie_children();
        for _ in 0..40 {
            if zombies == 0 {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(50));
            zombies = zombie_children();
        }
        assert_eq!(zombies, 0);
    }

    #[test]
    fn test_from_config_override() {
        let mut cfg = Config::minimal();
        cfg.open.command = Some("firefox".to_string());
        assert_eq!(SystemOpener::from_config(&cfg).program(), "firefox");
    }
}
