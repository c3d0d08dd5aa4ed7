//! Window-title capability.
//!
//! With the `x11` feature the root window name is set through `xsetroot`,
//! which window managers such as dwm display as their status text. Without
//! it, [`open`] reports the capability as unsupported.

use crate::error::Result;
#[cfg(not(feature = "x11"))]
use crate::error::StatusError;

/// Publishes a finished line as the window-system title
pub trait TitleSetter {
    fn set_title(&mut self, title: &str) -> Result<()>;

    /// Release the underlying display connection.
    fn close(&mut self) -> Result<()>;
}

/// Open the title capability compiled into this build
#[cfg(feature = "x11")]
pub fn open() -> Result<XsetrootTitle> {
    XsetrootTitle::open()
}

#[cfg(not(feature = "x11"))]
pub fn open() -> Result<Unsupported> {
    Err(StatusError::unsupported(
        "window title output was not compiled in",
    ))
}

/// Stand-in used when no window system support is built
#[cfg(not(feature = "x11"))]
pub struct Unsupported;

#[cfg(not(feature = "x11"))]
impl TitleSetter for Unsupported {
    fn set_title(&mut self, _title: &str) -> Result<()> {
        Err(StatusError::unsupported("window title output"))
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(feature = "x11")]
pub use x11::XsetrootTitle;

#[cfg(feature = "x11")]
mod x11 {
    use std::path::PathBuf;
    use std::process::{Command, Stdio};

    use super::TitleSetter;
    use crate::error::{Result, StatusError};

    /// Sets the X root window name by running `xsetroot -name`
    pub struct XsetrootTitle {
        program: PathBuf,
        display: String,
    }

    impl XsetrootTitle {
        /// Locate `xsetroot` and make sure the display accepts a name.
        pub fn open() -> Result<Self> {
            let display = std::env::var("DISPLAY")
                .ok()
                .filter(|d| !d.is_empty())
                .ok_or_else(|| StatusError::title("XOpenDisplay", "DISPLAY is not set"))?;
            let program = which::which("xsetroot")
                .map_err(|e| StatusError::title("XOpenDisplay", format!("xsetroot: {}", e)))?;
            Self::connect(program, display)
        }

        /// Use `program` on `display`, blanking the name once to check both work
        pub fn connect(program: impl Into<PathBuf>, display: impl Into<String>) -> Result<Self> {
            let title = Self {
                program: program.into(),
                display: display.into(),
            };
            title.store("", "XOpenDisplay")?;
            log::debug!("using {:?} on display {}", title.program, title.display);
            Ok(title)
        }

        fn store(&self, name: &str, op: &'static str) -> Result<()> {
            let status = Command::new(&self.program)
                .arg("-display")
                .arg(&self.display)
                .arg("-name")
                .arg(name)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map_err(|e| StatusError::title(op, e.to_string()))?;
            if !status.success() {
                return Err(StatusError::title(op, format!("xsetroot exited with {}", status)));
            }
            Ok(())
        }
    }

    impl TitleSetter for XsetrootTitle {
        fn set_title(&mut self, title: &str) -> Result<()> {
            self.store(title, "XStoreName")
        }

        fn close(&mut self) -> Result<()> {
            // Each update is its own connection, nothing stays open.
            Ok(())
        }
    }

}
