/// Takes a set of sets of byte characters, return a 2^8 array with non-zero
/// values at the indices corresponding to the character byte values.
const fn char_table(sets: &[&[u8]]) -> [u8; 256] {
    let mut table = [0u8; 256];

    let mut i = 0;
    while i < sets.len() {
        let set: &[u8] = sets[i];

        let mut j = 0;
        while j < set.len() {
            let c: u8 = set[j];
            table[c as usize] = c;
            j += 1;
        }

        i += 1;
    }

    table
}

const ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const DIGIT: &[u8] = b"0123456789";

/// RFC 6838 `restricted-name-chars`.
const TOKEN_CHARS: [u8; 256] = char_table(&[ALPHA, DIGIT, b"!#$&-^_+."]);

const WHITESPACE: [u8; 256] = char_table(&[b" \t\r\n"]);

pub(crate) const WILDCARD: &str = "*";

#[inline(always)]
pub fn is_valid_token(&c: &char) -> bool {
    c.is_ascii() && TOKEN_CHARS[c as usize] != 0
}

#[inline(always)]
pub fn is_whitespace(&c: &char) -> bool {
    c.is_ascii() && WHITESPACE[c as usize] != 0
}

/// Characters allowed in a parameter value once it has been unquoted.
#[inline]
pub fn is_valid_value_char(&c: &char) -> bool {
    c.is_ascii() && (!c.is_ascii_control() || c == '\t')
}

/// Returns the index of the first character of `string` that isn't a token
/// character, or `None` if `string` is a non-empty token.
pub fn invalid_token_index(string: &str) -> Option<usize> {
    match string.char_indices().find(|(_, c)| !is_valid_token(c)) {
        Some((i, _)) => Some(i),
        None if string.is_empty() => Some(0),
        None => None,
    }
}

/// Like [`invalid_token_index()`] but also accepts the lone wildcard `*`.
pub fn invalid_type_index(string: &str) -> Option<usize> {
    match string {
        WILDCARD => None,
        _ => invalid_token_index(string),
    }
}
