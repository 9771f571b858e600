use anyhow::Result;
use log::info;

/// Sink that accepts a complete document and renders it immediately.
/// The real surface lives outside this crate; the document itself carries
/// the print trigger.
pub trait PrintSink {
    fn print(&self, document: &str) -> Result<()>;
}

/// Headless default: records that a print job was emitted.
pub struct LogPrinter;

impl PrintSink for LogPrinter {
    fn print(&self, document: &str) -> Result<()> {
        info!("print job emitted ({} bytes)", document.len());
        Ok(())
    }
}
