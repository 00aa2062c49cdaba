pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{safe_truncate_chars, truncate_at_word_boundary};
pub use url_utils::{is_valid_url, parse_http_url};
