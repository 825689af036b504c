use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;

use indexmap::IndexMap;
use smallvec::SmallVec;
use uncased::{Uncased, UncasedStr};

type Values = SmallVec<[String; 1]>;

/// The parameters of a [`MediaType`](crate::MediaType): an ordered,
/// multi-valued map from attribute to value.
///
/// Attributes are kept in the order they were first inserted and the values
/// of a single attribute in the order they were inserted. Lookups by
/// attribute are ASCII case-insensitive.
///
/// # Equality
///
/// Two `MediaParams` are equal when they contain the same _set_ of
/// `(attribute, value)` pairs. Neither the order of attributes nor the order
/// of the values of one attribute matters, and a pair that appears twice
/// counts once:
///
/// ```rust
/// use media_type::MediaType;
///
/// let a = MediaType::parse("text/plain; a=1; a=2").unwrap();
/// let b = MediaType::parse("text/plain; a=2; a=1").unwrap();
/// assert_eq!(a.params(), b.params());
///
/// let c = MediaType::parse("text/plain; a=1; a=1").unwrap();
/// let d = MediaType::parse("text/plain; a=1").unwrap();
/// assert_eq!(c.params(), d.params());
/// ```
#[derive(Clone, Default)]
pub struct MediaParams {
    map: IndexMap<Uncased<'static>, Values>,
    len: usize,
}

impl MediaParams {
    pub(crate) fn new() -> MediaParams {
        MediaParams::default()
    }

    /// Appends `value` to the values of `name`. `name` must already be
    /// normalized.
    pub(crate) fn push(&mut self, name: String, value: String) {
        self.map.entry(Uncased::from_owned(name)).or_default().push(value);
        self.len += 1;
    }

    /// Removes every value of `name`, returning how many there were.
    pub(crate) fn remove_all(&mut self, name: &str) -> usize {
        let removed = self.map.shift_remove(UncasedStr::new(name)).map_or(0, |v| v.len());
        self.len -= removed;
        removed
    }

    /// Returns the first value of the attribute `name`, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::MediaType;
    ///
    /// let mt = MediaType::parse("text/plain; charset=utf-8; a=1; a=2").unwrap();
    /// assert_eq!(mt.params().get("CHARSET"), Some("utf-8"));
    /// assert_eq!(mt.params().get("a"), Some("1"));
    /// assert_eq!(mt.params().get("b"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).next()
    }

    /// Returns every value of the attribute `name` in insertion order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_type::MediaType;
    ///
    /// let mt = MediaType::parse("text/plain; a=2; b=3; A=1").unwrap();
    /// let values: Vec<_> = mt.params().get_all("a").collect();
    /// assert_eq!(values, ["2", "1"]);
    /// ```
    pub fn get_all(&self, name: &str) -> impl Iterator<Item = &str> + '_ {
        let values: &[String] = match self.map.get(UncasedStr::new(name)) {
            Some(values) => values,
            None => &[],
        };

        values.iter().map(|v| v.as_str())
    }

    /// Returns `true` if the pair `(name, value)` is present. The attribute
    /// is compared case-insensitively, the value exactly.
    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.get_all(name).any(|v| v == value)
    }

    /// Returns the distinct attribute names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(|k| k.as_str())
    }

    /// Returns every `(attribute, value)` pair, grouped by attribute.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter { outer: self.map.iter(), current: None, remaining: self.len }
    }

    /// The number of `(attribute, value)` pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn pair_set(&self) -> BTreeSet<(&str, &str)> {
        self.iter().collect()
    }
}

impl PartialEq for MediaParams {
    fn eq(&self, other: &MediaParams) -> bool {
        match (self.len, other.len) {
            (0, 0) => true,
            (0, _) | (_, 0) => false,
            _ => self.pair_set() == other.pair_set(),
        }
    }
}

impl Eq for MediaParams {  }

impl Hash for MediaParams {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pair_set().hash(state);
    }
}

impl fmt::Debug for MediaParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MediaParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the `(attribute, value)` pairs of a [`MediaParams`].
#[derive(Clone)]
pub struct Iter<'a> {
    outer: indexmap::map::Iter<'a, Uncased<'static>, Values>,
    current: Option<(&'a str, slice::Iter<'a, String>)>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((name, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    self.remaining -= 1;
                    return Some((*name, value.as_str()));
                }
            }

            let (name, values) = self.outer.next()?;
            self.current = Some((name.as_str(), values.iter()));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {  }

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
