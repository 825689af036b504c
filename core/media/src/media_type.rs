use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use encoding_rs::Encoding;
use quoted_string::quote_if_needed;
use uncased::UncasedStr;

use crate::charset;
use crate::error::{CharsetError, TokenKind, ValidationError};
use crate::known::{self, *};
use crate::params::MediaParams;
use crate::parse::{parse_media_type, invalid_token_index, invalid_type_index};
use crate::parse::{is_valid_value_char, TokenValidator, ValueSpec, WILDCARD};

const CHARSET: &str = "charset";

/// An immutable Internet media type: `type/subtype; attribute=value; ...`.
///
/// # Usage
///
/// A `MediaType` is obtained by parsing a string with [`MediaType::parse()`]
/// (or [`str::parse()`]), by building one with [`MediaType::create()`], or,
/// for common types, from the constants in [`known`](crate::known):
///
/// ```rust
/// use media_type::{MediaType, known};
///
/// let html = MediaType::parse("TEXT/HTML; Charset=UTF-8").unwrap();
/// assert_eq!(html, *known::HTML_UTF_8);
/// assert_eq!(html.to_string(), "text/html; charset=utf-8");
/// ```
///
/// A `MediaType` is never modified after it is built. Methods like
/// [`with_parameter()`](MediaType::with_parameter()) return a new value.
/// Cloning is cheap: clones share the same allocation.
///
/// # Normalization
///
/// The type, subtype, and parameter attributes are lower-cased. Parameter
/// values keep their case with the exception of `charset`, whose value is
/// lower-cased.
///
/// # Comparison and Hashing
///
/// Two media types are equal when their types, subtypes, and _sets_ of
/// parameter pairs are equal. The order of parameters is irrelevant, and a
/// parameter pair that appears twice counts once.
///
/// ```rust
/// use media_type::MediaType;
///
/// let a = MediaType::parse("text/plain; a=1; b=2").unwrap();
/// let b = MediaType::parse("text/plain; B=2; A=1").unwrap();
/// assert_eq!(a, b);
///
/// let upper = MediaType::parse("text/plain; a=VALUE").unwrap();
/// assert_ne!(a, upper);
/// ```
///
/// # Well-known instances
///
/// Whenever parsing or construction produces a value equal to one of the
/// constants in [`known`](crate::known), the constant itself is returned.
/// Use [`MediaType::ptr_eq()`] to observe this:
///
/// ```rust
/// use media_type::{MediaType, known};
///
/// let jpeg = MediaType::parse("image/jpeg").unwrap();
/// assert!(MediaType::ptr_eq(&jpeg, &known::JPEG));
/// assert!(jpeg.is_known());
/// ```
#[derive(Clone)]
pub struct MediaType(Arc<Inner>);

struct Inner {
    source: Source,
    top: String,
    sub: String,
    params: MediaParams,
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Known(&'static str),
    None,
}

macro_rules! media_types {
    ($($name:ident ($check:ident): $str:expr, $t:expr, $s:expr $(; $k:expr => $v:expr)*,)+) => {
        /// Returns `true` if this media type is one of the well-known
        /// constants in [`known`](crate::known).
        ///
        /// # Example
        ///
        /// ```rust
        /// use media_type::MediaType;
        ///
        /// assert!(MediaType::parse("image/png").unwrap().is_known());
        /// assert!(!MediaType::parse("image/x-custom").unwrap().is_known());
        /// ```
        #[inline]
        pub fn is_known(&self) -> bool {
            matches!(self.0.source, Source::Known(_))
        }

        $(
            /// Returns `true` if `self` is equal to
            #[doc = concat!("[`known::", stringify!($name), "`], ")]
            /// i.e
            #[doc = concat!("`", $t, "/", $s, $("; ", $k, "=", $v,)* "`.")]
            #[inline]
            pub fn $check(&self) -> bool {
                *self == *$name
            }
        )+
    };
}

macro_rules! from_extension {
    ($($ext:expr => $name:ident,)*) => (
        /// Returns the well-known media type associated with the file
        /// extension `ext`, if there is one. The comparison is
        /// case-insensitive.
        ///
        /// # Example
        ///
        /// ```rust
        /// use media_type::{MediaType, known};
        ///
        /// let png = MediaType::from_extension("PNG").unwrap();
        /// assert!(MediaType::ptr_eq(&png, &known::PNG));
        ///
        /// assert!(MediaType::from_extension("foo").is_none());
        /// ```
        pub fn from_extension(ext: &str) -> Option<MediaType> {
            match ext {
                $(x if uncased::eq(x, $ext) => Some($name.clone()),)*
                _ => None
            }
        }
    )
}

fn normalize_type(token: &str, kind: TokenKind) -> Result<String, ValidationError> {
    match invalid_type_index(token) {
        Some(_) => Err(ValidationError::InvalidToken { kind, token: token.to_string() }),
        None => Ok(token.to_ascii_lowercase()),
    }
}

fn normalize_attribute(attribute: &str) -> Result<String, ValidationError> {
    match invalid_token_index(attribute) {
        Some(_) => Err(ValidationError::InvalidToken {
            kind: TokenKind::Attribute,
            token: attribute.to_string(),
        }),
        None => Ok(attribute.to_ascii_lowercase()),
    }
}

/// `attribute` must already be normalized.
fn normalize_value(attribute: &str, value: &str) -> Result<String, ValidationError> {
    if !value.chars().all(|c| is_valid_value_char(&c)) {
        return Err(ValidationError::InvalidValue {
            attribute: attribute.to_string(),
            value: value.to_string(),
        });
    }

    match attribute {
        CHARSET => Ok(value.to_ascii_lowercase()),
        _ => Ok(value.to_string()),
    }
}

impl MediaType {
    pub(crate) fn new_known(
        source: &'static str,
        top: &'static str,
        sub: &'static str,
        params: &[(&'static str, &'static str)],
    ) -> MediaType {
        let mut media_params = MediaParams::new();
        for &(name, value) in params {
            media_params.push(name.to_string(), value.to_string());
        }

        MediaType(Arc::new(Inner {
            source: Source::Known(source),
            top: top.to_string(),
            sub: sub.to_string(),
            params: media_params,
        }))
    }

    /// Builds a media type from normalized parts, returning the well-known
    /// instance if there is an equal one.
    fn interned(top: String, sub: String, params: MediaParams) -> MediaType {
        let media_type = MediaType(Arc::new(Inner { source: Source::None, top, sub, params }));
        known::intern(media_type)
    }

    fn build<I, K, V>(top: &str, sub: &str, params: I) -> Result<MediaType, ValidationError>
        where I: IntoIterator<Item = (K, V)>, K: AsRef<str>, V: AsRef<str>
    {
        let top = normalize_type(top, TokenKind::Type)?;
        let sub = normalize_type(sub, TokenKind::Subtype)?;
        if top == WILDCARD && sub != WILDCARD {
            return Err(ValidationError::WildcardType { subtype: sub });
        }

        let mut media_params = MediaParams::new();
        for (name, value) in params {
            let name = normalize_attribute(name.as_ref())?;
            let value = normalize_value(&name, value.as_ref())?;
            media_params.push(name, value);
        }

        Ok(MediaType::interned(top, sub, media_params))
    }

    /// Creates a media type with type `top`, subtype `sub`, and no
    /// parameters. Both are lower-cased.
    ///
    /// Either may be the wildcard `*`, but a wildcard type requires a
    /// wildcard subtype.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::MediaType;
    ///
    /// let plain = MediaType::create("TEXT", "Plain").unwrap();
    /// assert_eq!(plain.top(), "text");
    /// assert_eq!(plain.sub(), "plain");
    ///
    /// assert!(MediaType::create("text", "pl@in").is_err());
    /// assert!(MediaType::create("*", "text").is_err());
    /// ```
    pub fn create<T, S>(top: T, sub: S) -> Result<MediaType, ValidationError>
        where T: AsRef<str>, S: AsRef<str>
    {
        MediaType::build(top.as_ref(), sub.as_ref(), std::iter::empty::<(&str, &str)>())
    }

    /// Creates an `application/<sub>` media type.
    #[inline]
    pub fn application<S: AsRef<str>>(sub: S) -> Result<MediaType, ValidationError> {
        MediaType::create("application", sub)
    }

    /// Creates an `audio/<sub>` media type.
    #[inline]
    pub fn audio<S: AsRef<str>>(sub: S) -> Result<MediaType, ValidationError> {
        MediaType::create("audio", sub)
    }

    /// Creates a `font/<sub>` media type.
    #[inline]
    pub fn font<S: AsRef<str>>(sub: S) -> Result<MediaType, ValidationError> {
        MediaType::create("font", sub)
    }

    /// Creates an `image/<sub>` media type.
    #[inline]
    pub fn image<S: AsRef<str>>(sub: S) -> Result<MediaType, ValidationError> {
        MediaType::create("image", sub)
    }

    /// Creates a `text/<sub>` media type.
    #[inline]
    pub fn text<S: AsRef<str>>(sub: S) -> Result<MediaType, ValidationError> {
        MediaType::create("text", sub)
    }

    /// Creates a `video/<sub>` media type.
    #[inline]
    pub fn video<S: AsRef<str>>(sub: S) -> Result<MediaType, ValidationError> {
        MediaType::create("video", sub)
    }

    /// Parses a media type from `string`.
    ///
    /// Whitespace around `;` and `=` is ignored. Parameter values may be
    /// quoted strings, in which `\` escapes the following character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::MediaType;
    ///
    /// let mt = MediaType::parse(r#"application/x-custom; title="a \"b\" c"; A=1"#).unwrap();
    /// assert_eq!(mt.top(), "application");
    /// assert_eq!(mt.sub(), "x-custom");
    /// assert_eq!(mt.param("title"), Some(r#"a "b" c"#));
    /// assert_eq!(mt.param("a"), Some("1"));
    ///
    /// assert!(MediaType::parse("text/plain; a").is_err());
    /// ```
    pub fn parse(string: &str) -> Result<MediaType, ValidationError> {
        let raw = parse_media_type(string)?;
        MediaType::build(raw.top, raw.sub, raw.params)
    }

    /// Compares the allocations of two media types, like [`Arc::ptr_eq()`].
    ///
    /// This is `true` for clones of one value and for two well-known values
    /// that are equal, but generally `false` for two equal values built
    /// separately.
    #[inline]
    pub fn ptr_eq(this: &MediaType, other: &MediaType) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Returns the type. The return type, `UncasedStr`, has caseless
    /// equality comparison and hashing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::known;
    ///
    /// let plain = &*known::PLAIN_TEXT_UTF_8;
    /// assert_eq!(plain.top(), "text");
    /// assert_eq!(plain.top(), "TEXT");
    /// ```
    #[inline]
    pub fn top(&self) -> &UncasedStr {
        UncasedStr::new(&self.0.top)
    }

    /// Returns the subtype. The return type, `UncasedStr`, has caseless
    /// equality comparison and hashing.
    #[inline]
    pub fn sub(&self) -> &UncasedStr {
        UncasedStr::new(&self.0.sub)
    }

    /// Returns the parameters.
    #[inline]
    pub fn params(&self) -> &MediaParams {
        &self.0.params
    }

    /// Returns the first value of the parameter `name`, if any. `name` is
    /// compared case-insensitively.
    #[inline]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.0.params.get(name)
    }

    /// Returns `true` if the type or the subtype is the wildcard `*`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::known;
    ///
    /// assert!(known::ANY_TYPE.has_wildcard());
    /// assert!(known::ANY_IMAGE_TYPE.has_wildcard());
    /// assert!(!known::JPEG.has_wildcard());
    /// ```
    #[inline]
    pub fn has_wildcard(&self) -> bool {
        self.0.top == WILDCARD || self.0.sub == WILDCARD
    }

    /// Returns `true` if `self` is within the range described by `other`.
    ///
    /// That is the case when `other`'s type is `*` or equal to `self`'s type,
    /// `other`'s subtype is `*` or equal to `self`'s subtype, and every
    /// parameter of `other` is also a parameter of `self`. `self` may have
    /// parameters that `other` does not mention, so this is not symmetric.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::{MediaType, known};
    ///
    /// let plain = MediaType::parse("text/plain").unwrap();
    /// assert!(plain.is(&known::ANY_TYPE));
    /// assert!(plain.is(&known::ANY_TEXT_TYPE));
    /// assert!(!plain.is(&known::ANY_IMAGE_TYPE));
    ///
    /// assert!(known::PLAIN_TEXT_UTF_8.is(&plain));
    /// assert!(!plain.is(&known::PLAIN_TEXT_UTF_8));
    /// ```
    pub fn is(&self, other: &MediaType) -> bool {
        (other.0.top == WILDCARD || other.0.top == self.0.top)
            && (other.0.sub == WILDCARD || other.0.sub == self.0.sub)
            && other.0.params.iter().all(|(k, v)| self.0.params.contains(k, v))
    }

    /// Returns a media type with the same type and subtype as `self` but no
    /// parameters. If `self` has no parameters, `self` is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::{MediaType, known};
    ///
    /// let plain = known::PLAIN_TEXT_UTF_8.without_parameters();
    /// assert_eq!(plain.to_string(), "text/plain");
    /// assert!(MediaType::ptr_eq(&plain, &plain.without_parameters()));
    /// ```
    pub fn without_parameters(&self) -> MediaType {
        if self.0.params.is_empty() {
            return self.clone();
        }

        MediaType::interned(self.0.top.clone(), self.0.sub.clone(), MediaParams::new())
    }

    /// Returns a media type with the same type and subtype as `self` and the
    /// parameters `params`, which replace all of `self`'s parameters.
    ///
    /// Fails if an attribute isn't a token or a value contains a non-ASCII or
    /// control character (other than tab).
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::MediaType;
    ///
    /// let plain = MediaType::parse("text/plain; x=y").unwrap();
    /// let mt = plain.with_parameters(vec![("a", "1"), ("a", "2"), ("b", "3")]).unwrap();
    /// assert_eq!(mt.to_string(), "text/plain; a=1; a=2; b=3");
    ///
    /// assert!(plain.with_parameters(vec![("@", "1")]).is_err());
    /// ```
    pub fn with_parameters<I, K, V>(&self, params: I) -> Result<MediaType, ValidationError>
        where I: IntoIterator<Item = (K, V)>, K: AsRef<str>, V: AsRef<str>
    {
        MediaType::build(&self.0.top, &self.0.sub, params)
    }

    /// Returns a media type equal to `self` except that every value of the
    /// parameter `attribute` is replaced by the single value `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::MediaType;
    ///
    /// let mt = MediaType::parse("text/plain; a=1; a=2; b=3").unwrap();
    /// let mt = mt.with_parameter("A", "4").unwrap();
    /// assert_eq!(mt.to_string(), "text/plain; b=3; a=4");
    /// ```
    pub fn with_parameter(&self, attribute: &str, value: &str) -> Result<MediaType, ValidationError> {
        let attribute = normalize_attribute(attribute)?;
        let value = normalize_value(&attribute, value)?;

        let mut params = self.0.params.clone();
        params.remove_all(&attribute);
        params.push(attribute, value);
        Ok(MediaType::interned(self.0.top.clone(), self.0.sub.clone(), params))
    }

    /// Returns a media type equal to `self` with its `charset` parameter set
    /// to the lower-cased `charset`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::{MediaType, known};
    ///
    /// let plain = MediaType::parse("text/plain; charset=utf-16").unwrap();
    /// let utf8 = plain.with_charset(encoding_rs::UTF_8.name()).unwrap();
    /// assert!(MediaType::ptr_eq(&utf8, &known::PLAIN_TEXT_UTF_8));
    /// ```
    #[inline]
    pub fn with_charset(&self, charset: &str) -> Result<MediaType, ValidationError> {
        self.with_parameter(CHARSET, &charset.to_ascii_lowercase())
    }

    /// Resolves the `charset` parameter, if there is one.
    ///
    /// Duplicate identical values count once. Fails with
    /// [`CharsetError::Ambiguous`] if there are several distinct values,
    /// [`CharsetError::IllegalName`] if the value isn't a legal charset
    /// name, and [`CharsetError::Unsupported`] if no encoding is known by
    /// that name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::MediaType;
    /// use media_type::error::CharsetError;
    ///
    /// let mt = MediaType::parse("text/plain").unwrap();
    /// assert_eq!(mt.charset(), Ok(None));
    ///
    /// let mt = MediaType::parse("text/plain; charset=UTF-8").unwrap();
    /// assert_eq!(mt.charset(), Ok(Some(encoding_rs::UTF_8)));
    ///
    /// let mt = MediaType::parse("text/plain; charset=utf-8; charset=utf-16").unwrap();
    /// assert!(matches!(mt.charset(), Err(CharsetError::Ambiguous(_))));
    /// ```
    pub fn charset(&self) -> Result<Option<&'static Encoding>, CharsetError> {
        let mut values: Vec<&str> = Vec::new();
        for value in self.0.params.get_all(CHARSET) {
            if !values.contains(&value) {
                values.push(value);
            }
        }

        match values.as_slice() {
            [] => Ok(None),
            [name] => charset::resolve(name).map(Some),
            _ => Err(CharsetError::Ambiguous(values.iter().map(|v| v.to_string()).collect())),
        }
    }

    known_media_types!(media_types);

    known_extensions!(from_extension);
}

impl FromStr for MediaType {
    type Err = ValidationError;

    #[inline]
    fn from_str(raw: &str) -> Result<MediaType, ValidationError> {
        MediaType::parse(raw)
    }
}

impl PartialEq for MediaType {
    #[inline(always)]
    fn eq(&self, other: &MediaType) -> bool {
        MediaType::ptr_eq(self, other)
            || (self.0.top == other.0.top
                && self.0.sub == other.0.sub
                && self.0.params == other.0.params)
    }
}

impl Eq for MediaType {  }

impl Hash for MediaType {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.top.hash(state);
        self.0.sub.hash(state);
        self.0.params.hash(state);
    }
}

impl PartialOrd for MediaType {
    #[inline]
    fn partial_cmp(&self, other: &MediaType) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MediaType {
    fn cmp(&self, other: &MediaType) -> Ordering {
        if MediaType::ptr_eq(self, other) {
            return Ordering::Equal;
        }

        self.0.top.cmp(&other.0.top)
            .then_with(|| self.0.sub.cmp(&other.0.sub))
            .then_with(|| self.0.params.pair_set().cmp(&other.0.params.pair_set()))
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let mut validator = TokenValidator::default();
    let value = quote_if_needed::<ValueSpec, _>(value, &mut validator).map_err(|_| fmt::Error)?;
    f.write_str(&value)
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Source::Known(src) = self.0.source {
            return f.write_str(src);
        }

        write!(f, "{}/{}", self.0.top, self.0.sub)?;
        for (name, value) in self.0.params.iter() {
            write!(f, "; {}=", name)?;
            write_value(f, value)?;
        }

        Ok(())
    }
}

impl fmt::Debug for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MediaType").field(&self.to_string()).finish()
    }
}
