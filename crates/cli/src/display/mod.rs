pub mod formatter;

pub use formatter::{describe_preference, format_range, print_full_targets, snippet};
