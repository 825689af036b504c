//! The registry of well-known media types.
//!
//! Every constant is built once, on first use, and never changes. Any parse
//! or construction that produces a value equal to one of these returns the
//! constant itself, so equal well-known values share one allocation.

use std::collections::HashSet;

use lazy_static::lazy_static;
use log::trace;

use crate::MediaType;

macro_rules! media_type_statics {
    ($($name:ident ($check:ident): $str:expr, $t:expr, $s:expr $(; $k:expr => $v:expr)*,)+) => {
        lazy_static! {
            $(
                #[doc = concat!("Media type for **", $str, "**: ")]
                #[doc = concat!("`", $t, "/", $s, $("; ", $k, "=", $v,)* "`")]
                pub static ref $name: MediaType = MediaType::new_known(
                    concat!($t, "/", $s, $("; ", $k, "=", $v),*),
                    $t,
                    $s,
                    &[$(($k, $v)),*]
                );
            )+

            static ref KNOWN: HashSet<MediaType> = {
                let mut known = HashSet::new();
                $(known.insert($name.clone());)+
                known
            };
        }

        /// Returns every well-known media type, in declaration order.
        pub fn all() -> Vec<&'static MediaType> {
            vec![$(&*$name),+]
        }
    };
}

known_media_types!(media_type_statics);

/// Returns the well-known instance equal to `media_type`, or `media_type`
/// itself if there is none.
pub(crate) fn intern(media_type: MediaType) -> MediaType {
    match KNOWN.get(&media_type) {
        Some(known) if !MediaType::ptr_eq(known, &media_type) => {
            trace!("interned {} as a well-known media type", known);
            known.clone()
        }
        _ => media_type
    }
}
