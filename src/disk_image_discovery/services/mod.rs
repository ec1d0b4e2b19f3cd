mod eligibility_filter;
mod entry_classifier;
mod format_sniffer;
mod path_normalizer;

pub use eligibility_filter::EligibilityFilter;
pub use entry_classifier::EntryClassifier;
pub use format_sniffer::{FormatSniffer, TAR_MAGIC, TAR_MAGIC_OFFSET};
pub use path_normalizer::PathNormalizer;
