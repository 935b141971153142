mod fs;

pub use fs::require_file_exists;
