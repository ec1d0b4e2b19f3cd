mod progress_reporter;
mod silent_reporter;

pub use progress_reporter::StderrProgressReporter;
pub use silent_reporter::SilentProgressReporter;
