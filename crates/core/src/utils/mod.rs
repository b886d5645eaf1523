pub mod serde_helpers;

pub use serde_helpers::normalize_tag;
