mod capture_tag;
mod file_scanner;
mod path_validator;
mod relocator;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use capture_tag::{
    CaptureTag, MetadataDecode, YearMonth, decode_metadata, extract_capture_tag,
};
pub use file_scanner::scan_directory_files;
pub use path_validator::{
    ensure_directory_exists, resolve_source_directory, validate_directory_exists,
};
pub use relocator::{Destination, relocate};
