pub mod file;
pub mod parser;

pub use file::load_document;
pub use parser::{Location, parse_location, read_json_arg};
