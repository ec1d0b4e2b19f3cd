/// ProgressReporter port for scan diagnostics
///
/// Status lines, warnings and the multi-archive progress bar all go through
/// this port so that stdout stays reserved for the report itself.
pub trait ProgressReporter {
    /// Reports a status line (archive opened, disk image found, ...)
    fn report(&self, message: &str);

    /// Reports how many of `total` archives have been processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a failed archive or a warning
    fn report_error(&self, message: &str);

    /// Reports the end of a scan or of a whole run
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
