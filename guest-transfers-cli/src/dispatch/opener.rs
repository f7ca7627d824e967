//! Handing links to the outside world

use anyhow::{Context, Result};
use colored::*;

/// Something that can open a URL
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens links in the system's default browser without waiting for it
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that_detached(url).with_context(|| format!("Failed to open link: {}", url))?;
        log::info!("Opened messaging link");
        Ok(())
    }
}

/// Prints links instead of opening them
pub struct PrintOpener;

impl LinkOpener for PrintOpener {
    fn open(&self, url: &str) -> Result<()> {
        println!("{}", url.cyan());
        Ok(())
    }
}
