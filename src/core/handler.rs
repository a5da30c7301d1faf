//! Handler trait for log output destinations

use super::{error::Result, log_entry::Entry};

/// A sink that formats and writes one [`Entry`] at a time.
///
/// Implementations must serialize concurrent calls so that records never
/// interleave on the destination. Returning `Ok(())` without writing is a
/// valid outcome for entries the handler chooses to suppress.
pub trait Handler: Send + Sync {
    fn log(&self, entry: Entry) -> Result<()>;
    fn name(&self) -> &str;
}
