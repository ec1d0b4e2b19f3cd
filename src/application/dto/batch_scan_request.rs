use crate::shared::ScanContext;
use std::path::PathBuf;
use std::time::Duration;

/// BatchScanRequest - input of a multi-archive run
#[derive(Debug, Clone)]
pub struct BatchScanRequest {
    /// Files to inspect, in report order
    pub paths: Vec<PathBuf>,
    /// Deadline applied to each archive separately
    pub timeout_per_archive: Option<Duration>,
    /// Shared cancellation flag for the whole run
    pub context: ScanContext,
}

impl BatchScanRequest {
    pub fn new(paths: Vec<PathBuf>, timeout_per_archive: Option<Duration>) -> Self {
        Self {
            paths,
            timeout_per_archive,
            context: ScanContext::new(),
        }
    }

    pub fn with_context(mut self, context: ScanContext) -> Self {
        self.context = context;
        self
    }

    /// Context for one archive: the shared flag plus a fresh deadline
    pub fn archive_context(&self) -> ScanContext {
        match self.timeout_per_archive {
            Some(timeout) => self
                .context
                .clone()
                .deadline_at(std::time::Instant::now() + timeout),
            None => self.context.clone(),
        }
    }
}
