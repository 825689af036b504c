mod checkers;
mod media_type;
mod quoting;

pub use self::media_type::*;

pub(crate) use self::checkers::{invalid_token_index, invalid_type_index};
pub(crate) use self::checkers::{is_valid_value_char, WILDCARD};
pub(crate) use self::quoting::{TokenValidator, ValueSpec};
