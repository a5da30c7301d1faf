//! Handler that drops everything

use crate::core::{Entry, Handler, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardHandler;

impl Handler for DiscardHandler {
    fn log(&self, _entry: Entry) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
