use std::fmt;

use serde_::ser::{Serialize, Serializer};
use serde_::de::{self, Deserialize, Deserializer, Visitor};

use crate::MediaType;

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct MediaTypeVisitor;

impl<'de> Visitor<'de> for MediaTypeVisitor {
    type Value = MediaType;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a media type string, e.g. \"text/plain; charset=utf-8\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MediaType, E> {
        MediaType::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(MediaTypeVisitor)
    }
}
