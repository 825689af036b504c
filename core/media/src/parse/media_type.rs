use std::borrow::Cow;

use log::trace;
use pear::input::Extent;
use pear::macros::{parser, parse};
use pear::parsers::*;

use crate::error::{GrammarError, GrammarErrorKind};
use crate::parse::checkers::{invalid_token_index, invalid_type_index, is_whitespace};
use crate::parse::quoting::ValueSpec;

type Input<'a> = pear::input::Pear<pear::input::Cursor<&'a str>>;
type Result<'a, T> = pear::input::Result<T, Input<'a>>;

/// A media type split into its structural pieces, before normalization.
///
/// Parameter values have already been unquoted; a value that needed no
/// unescaping borrows from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMediaType<'a> {
    pub top: &'a str,
    pub sub: &'a str,
    pub params: Vec<(&'a str, Cow<'a, str>)>,
}

enum RawValue<'a> {
    Bare(Extent<&'a str>),
    /// The text between the quotes, whether the closing quote was found, and
    /// whatever follows it up to the next `;`.
    Quoted {
        content: Extent<&'a str>,
        closed: bool,
        trailing: Extent<&'a str>,
    },
}

struct RawParam<'a> {
    attribute: Extent<&'a str>,
    value: Option<RawValue<'a>>,
    /// What follows the attribute when no `=` does.
    rest: Extent<&'a str>,
}

/// The `;`-delimited layout of the input. The scanner never fails; every
/// grammar rule is checked afterwards so errors can name exact positions.
struct Layout<'a> {
    top: Extent<&'a str>,
    slash: bool,
    sub: Extent<&'a str>,
    params: Vec<RawParam<'a>>,
}

#[parser]
fn param_value<'a>(input: &mut Input<'a>) -> Result<'a, RawValue<'a>> {
    skip_while(is_whitespace)?;
    match eat(input, '"') {
        Ok(_) => {
            let mut is_escaped = false;
            let content = take_while(|&c| {
                if is_escaped {
                    is_escaped = false;
                    return true;
                }

                if c == '\\' {
                    is_escaped = true;
                    return true;
                }

                c != '"'
            })?;

            let closed = eat(input, '"').is_ok();
            let trailing = take_while(|&c| c != ';')?;
            RawValue::Quoted { content, closed, trailing }
        }
        Err(_) => {
            let value = take_while(|&c| c != ';')?;
            RawValue::Bare(value)
        }
    }
}

#[parser]
fn param<'a>(input: &mut Input<'a>) -> Result<'a, RawParam<'a>> {
    skip_while(is_whitespace)?;
    let attribute = take_while(|&c| c != '=' && c != ';' && !is_whitespace(&c))?;
    skip_while(is_whitespace)?;
    let value = match eat(input, '=') {
        Ok(_) => {
            let value = param_value()?;
            Some(value)
        }
        Err(_) => None,
    };

    let rest = take_while(|&c| c != ';')?;
    RawParam { attribute, value, rest }
}

#[parser]
fn media_type<'a>(input: &mut Input<'a>) -> Result<'a, Layout<'a>> {
    skip_while(is_whitespace)?;
    let top = take_while(|&c| c != '/' && c != ';')?;
    let slash = eat(input, '/').is_ok();
    let sub = take_while(|&c| c != ';')?;

    let mut params = Vec::new();
    while eat(input, ';').is_ok() {
        let next = param()?;
        params.push(next);
    }

    Layout { top, slash, sub, params }
}

fn trim_end(s: &str) -> &str {
    s.trim_end_matches(|c: char| is_whitespace(&c))
}

/// The character containing byte `index` of `s`.
fn char_at(s: &str, index: usize) -> char {
    s.char_indices()
        .take_while(|&(i, _)| i <= index)
        .last()
        .map_or(' ', |(_, c)| c)
}

/// Errors with `InvalidChar` at the first non-token character of `token`,
/// which starts at byte `start` of `input`.
fn check_token(
    input: &str,
    token: &str,
    start: usize,
    wildcard: bool
) -> std::result::Result<(), GrammarError> {
    let invalid = match wildcard {
        true => invalid_type_index(token),
        false => invalid_token_index(token),
    };

    match invalid {
        Some(i) => {
            let kind = GrammarErrorKind::InvalidChar(char_at(token, i));
            Err(GrammarError::new(kind, start + i, input))
        }
        None => Ok(())
    }
}

/// Validates and unescapes the quoted string `input[open..=close]`.
fn unquote(input: &str, open: usize, close: usize) -> std::result::Result<Cow<'_, str>, GrammarError> {
    let quoted = &input[open..=close];
    let invalid_at = |pos: usize| {
        // An escape is reported at its backslash; the escaped character is
        // the offending one.
        let (i, c) = match char_at(quoted, pos) {
            '\\' => (pos + 1, char_at(quoted, pos + 1)),
            c => (pos, c),
        };

        GrammarError::new(GrammarErrorKind::InvalidChar(c), open + i, input)
    };

    if let Err((pos, _)) = quoted_string::parse::<ValueSpec>(quoted) {
        return Err(invalid_at(pos));
    }

    quoted_string::to_content::<ValueSpec>(quoted).map_err(|_| invalid_at(0))
}

impl<'a> Layout<'a> {
    fn check(self, input: &'a str) -> std::result::Result<RawMediaType<'a>, GrammarError> {
        use GrammarErrorKind::*;

        let error = |kind, index| GrammarError::new(kind, index, input);
        if self.top.values.is_empty() && !self.slash && self.params.is_empty() {
            return Err(error(Empty, 0));
        }

        if !self.slash {
            return Err(error(MissingSlash, self.top.end));
        }

        if self.top.values.is_empty() {
            return Err(error(MissingType, self.top.start));
        }

        let top = self.top.values;
        check_token(input, top, self.top.start, true)?;

        let sub = trim_end(self.sub.values);
        if sub.is_empty() {
            return Err(error(MissingSubtype, self.sub.start));
        }

        check_token(input, sub, self.sub.start, true)?;

        let mut params = Vec::with_capacity(self.params.len());
        for param in self.params {
            let attribute = param.attribute.values;
            if attribute.is_empty() {
                return Err(error(MissingAttribute, param.attribute.start));
            }

            check_token(input, attribute, param.attribute.start, false)?;
            let value = match param.value {
                None => match param.rest.values.chars().next() {
                    Some(c) => return Err(error(InvalidChar(c), param.rest.start)),
                    None => return Err(error(MissingEquals, param.rest.start)),
                },
                Some(RawValue::Bare(raw)) => {
                    let value = trim_end(raw.values);
                    if value.is_empty() {
                        return Err(error(MissingValue, raw.start));
                    }

                    check_token(input, value, raw.start, false)?;
                    Cow::Borrowed(value)
                }
                Some(RawValue::Quoted { content, closed, trailing }) => {
                    let open = content.start - 1;
                    if !closed {
                        return Err(error(UnterminatedQuote, open));
                    }

                    let value = unquote(input, open, content.end)?;
                    let extra = trailing.values.char_indices().find(|(_, c)| !is_whitespace(c));
                    if let Some((i, c)) = extra {
                        return Err(error(InvalidChar(c), trailing.start + i));
                    }

                    value
                }
            };

            params.push((attribute, value));
        }

        Ok(RawMediaType { top, sub, params })
    }
}

/// Splits `input` into a type, a subtype, and unquoted parameters, checking
/// every piece against the token grammar.
///
/// The wildcard `*` is accepted as a whole type or subtype; whether a
/// wildcard type may be paired with a concrete subtype is decided by
/// [`MediaType`](crate::MediaType), not here.
pub fn parse_media_type(input: &str) -> std::result::Result<RawMediaType<'_>, GrammarError> {
    let layout = match parse!(media_type: Input::new(input)) {
        Ok(layout) => layout,
        Err(e) => {
            trace!("media type scan failed: {}", e);
            let kind = GrammarErrorKind::InvalidChar(char_at(input, 0));
            return Err(GrammarError::new(kind, 0, input));
        }
    };

    layout.check(input).map_err(|e| {
        trace!("rejected media type: {}", e);
        e
    })
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;

    use crate::error::GrammarErrorKind::{self, *};
    use super::{parse_media_type, RawMediaType};

    macro_rules! assert_no_parse {
        ($string:expr, $kind:expr) => ({
            match parse_media_type($string) {
                Ok(raw) => panic!("{:?} parsed unexpectedly: {:?}", $string, raw),
                Err(e) => assert_eq!(e.kind(), $kind, "{:?}: {}", $string, e),
            }
        });
    }

    macro_rules! assert_parse {
        ($string:expr) => ({
            match parse_media_type($string) {
                Ok(raw) => raw,
                Err(e) => panic!("{:?} failed to parse: {}", $string, e)
            }
        });
    }

    macro_rules! assert_parse_eq {
        ($string:expr, $top:expr, $sub:expr, [$(($k:expr, $v:expr)),*]) => ({
            let raw = assert_parse!($string);
            let expected = RawMediaType {
                top: $top,
                sub: $sub,
                params: vec![$(($k, Cow::from($v))),*],
            };

            assert_eq!(raw, expected);
        });
    }

    #[test]
    fn check_does_parse() {
        assert_parse!("text/plain");
        assert_parse!("*/*");
        assert_parse!("text/*");
        assert_parse!("application/atom+xml; charset=utf-8");
        assert_parse!("application/x-custom; a=\"\"");
        assert_parse!("text/plain; a=1; a=2; b=3");
    }

    #[test]
    fn check_parse_eq() {
        assert_parse_eq!("text/plain", "text", "plain", []);
        assert_parse_eq!("TEXT/PLAIN", "TEXT", "PLAIN", []);
        assert_parse_eq!("text/plain;charset=utf-8", "text", "plain", [("charset", "utf-8")]);
        assert_parse_eq!("text/plain; a=1; a=2; b=3", "text", "plain",
            [("a", "1"), ("a", "2"), ("b", "3")]);
    }

    #[test]
    fn check_whitespace_is_stripped() {
        assert_parse_eq!("text/plain ;  charset=utf-8 ", "text", "plain", [("charset", "utf-8")]);
        assert_parse_eq!("text/plain; \tcharset=utf-8", "text", "plain", [("charset", "utf-8")]);
        assert_parse_eq!("text/plain; \r\n\tcharset=utf-8", "text", "plain", [("charset", "utf-8")]);
        assert_parse_eq!("text/plain; a = 1 ; b= 2", "text", "plain", [("a", "1"), ("b", "2")]);
    }

    #[test]
    fn check_quoted_values() {
        assert_parse_eq!("text/plain; charset=\"utf-8\"", "text", "plain", [("charset", "utf-8")]);
        assert_parse_eq!(r#"text/plain; charset="\u\tf-\8""#, "text", "plain",
            [("charset", "utf-8")]);
        assert_parse_eq!(r#"text/plain; a="the \" char""#, "text", "plain", [("a", "the \" char")]);
        assert_parse_eq!("text/plain; a=\"x;y\"; b=c", "text", "plain", [("a", "x;y"), ("b", "c")]);
        assert_parse_eq!("text/plain; a=\"  spaced  \" ", "text", "plain", [("a", "  spaced  ")]);
        assert_parse_eq!("text/plain; a=\"\t\"", "text", "plain", [("a", "\t")]);
        assert_parse_eq!("text/plain; a=\"\"", "text", "plain", [("a", "")]);
    }

    #[test]
    fn unescaped_values_borrow() {
        let raw = assert_parse!("text/plain; a=\"b c\"; d=e");
        assert!(matches!(raw.params[0].1, Cow::Borrowed("b c")));
        assert!(matches!(raw.params[1].1, Cow::Borrowed("e")));

        let raw = assert_parse!(r#"text/plain; a="b\"c""#);
        assert!(matches!(raw.params[0].1, Cow::Owned(_)));
    }

    #[test]
    fn test_bad_parses() {
        assert_no_parse!("", Empty);
        assert_no_parse!("  ", Empty);
        assert_no_parse!("/", MissingType);
        assert_no_parse!("/plain", MissingType);
        assert_no_parse!("text", MissingSlash);
        assert_no_parse!("text;a=b/c", MissingSlash);
        assert_no_parse!("text/", MissingSubtype);
        assert_no_parse!("text/ ; a=b", MissingSubtype);
        assert_no_parse!("text/plain;", MissingAttribute);
        assert_no_parse!("text/plain; ", MissingAttribute);
        assert_no_parse!("text/plain; =1", MissingAttribute);
        assert_no_parse!("text/plain; a", MissingEquals);
        assert_no_parse!("text/plain; a=", MissingValue);
        assert_no_parse!("text/plain; a= ; b=c", MissingValue);
        assert_no_parse!("text/plain; a=1;", MissingAttribute);
        assert_no_parse!("text/plain; a=1; ", MissingAttribute);
        assert_no_parse!("text/plain; a=1; b", MissingEquals);
        assert_no_parse!("text/plain; a=1; b=", MissingValue);
        assert_no_parse!("text/plain; a=\"@", UnterminatedQuote);
        assert_no_parse!("text/plain; a=\"abc\\\"", UnterminatedQuote);
        assert_no_parse!("text/plain; a=\"abc\\", UnterminatedQuote);
    }

    #[test]
    fn test_bad_chars() {
        assert_no_parse!("te<t/plain", InvalidChar('<'));
        assert_no_parse!("text/pl@in", InvalidChar('@'));
        assert_no_parse!("text /plain", InvalidChar(' '));
        assert_no_parse!("text/pl ain", InvalidChar(' '));
        assert_no_parse!("text/plain; a=@", InvalidChar('@'));
        assert_no_parse!("text/plain; a=\u{2025}", InvalidChar('\u{2025}'));
        assert_no_parse!("text/plain; a b=c", InvalidChar('b'));
        assert_no_parse!("text/plain; a=\"b\"c", InvalidChar('c'));
        assert_no_parse!("text/plain; a=\"\u{2025}\"", InvalidChar('\u{2025}'));
        assert_no_parse!("text/plain; a=\"\r\"", InvalidChar('\r'));
        assert_no_parse!("text/plain; a=\"\\\0\"", InvalidChar('\0'));
        assert_no_parse!("*a/plain", InvalidChar('*'));
    }

    #[test]
    fn wildcards_are_tokens_here() {
        // Rejecting `*/plain` is the value type's job.
        assert_parse_eq!("*/plain", "*", "plain", []);
    }

    #[test]
    fn error_indices() {
        let index = |s: &str| parse_media_type(s).unwrap_err().index();
        assert_eq!(index("text/pl@in"), 7);
        assert_eq!(index("text/plain; a="), 14);
        assert_eq!(index("text/plain; a=\"open"), 14);
        assert_eq!(index("text"), 4);
    }

    #[test]
    fn later_params_report_absolute_indices() {
        let error = |s: &str| {
            let e = parse_media_type(s).unwrap_err();
            (e.kind(), e.index())
        };

        assert_eq!(error("text/plain; a=\"x;y\"; b"), (MissingEquals, 22));
        assert_eq!(error("text/plain; a=1;  b=\"o\"k"), (InvalidChar('k'), 23));
        assert_eq!(error("text/plain; a=1; b=\"\r\""), (InvalidChar('\r'), 20));
        assert_eq!(error("  text/pl@in"), (InvalidChar('@'), 9));
        assert_eq!(error("text/plain; a=1; b=\"open"), (UnterminatedQuote, 19));
    }

    #[test]
    fn error_display_names_the_input() {
        let e = parse_media_type("text/pl@in").unwrap_err();
        let kind: GrammarErrorKind = e.kind();
        assert_eq!(kind, InvalidChar('@'));
        assert!(e.to_string().contains("text/pl@in"));
    }
}
