use anyhow::Result;

use crate::core::interfaces::adapters::LinkOpener;

/// Opens links in the user's default browser.
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open_in_new_context(&self, url: &str) -> Result<()> {
        log::info!("[LINK] Opening {}", url);
        open::that(url)?;
        Ok(())
    }
}
