pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{preview, safe_truncate_chars};
pub use url_utils::{archive_file_name, parse_http_url};
