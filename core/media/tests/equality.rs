use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use media_type::{known, MediaType};

fn parse(string: &str) -> MediaType {
    MediaType::parse(string).unwrap()
}

fn hash(media_type: &MediaType) -> u64 {
    let mut hasher = DefaultHasher::new();
    media_type.hash(&mut hasher);
    hasher.finish()
}

fn plain() -> MediaType {
    MediaType::create("text", "plain").unwrap()
}

/// Every member of a group equals every other member with an equal hash, and
/// no member equals a member of another group.
fn check_groups(groups: Vec<Vec<MediaType>>) {
    for (i, group) in groups.iter().enumerate() {
        for a in group {
            for b in group {
                assert_eq!(a, b);
                assert_eq!(hash(a), hash(b), "{} and {} hash differently", a, b);
            }

            for (j, other) in groups.iter().enumerate() {
                if i != j {
                    for b in other {
                        assert_ne!(a, b);
                    }
                }
            }
        }
    }
}

#[test]
fn equality_groups() {
    check_groups(vec![
        vec![
            plain(),
            MediaType::create("TEXT", "PLAIN").unwrap(),
            parse("text/plain"),
            parse("TEXT/PLAIN"),
            plain().with_parameter("a", "1").unwrap().without_parameters(),
        ],
        vec![
            plain().with_charset("UTF-8").unwrap(),
            plain().with_parameter("CHARSET", "UTF-8").unwrap(),
            plain().with_parameters(vec![("charset", "utf-8")]).unwrap(),
            parse("text/plain;charset=utf-8"),
            parse("text/plain; charset=utf-8"),
            parse("text/plain;  charset=utf-8"),
            parse("text/plain; \tcharset=utf-8"),
            parse("text/plain; \r\n\tcharset=utf-8"),
            parse("text/plain; CHARSET=utf-8"),
            parse("text/plain; charset=\"utf-8\""),
            parse("text/plain; charset=\"\\u\\tf-\\8\""),
            parse("text/plain; charset=UTF-8"),
            parse("text/plain; charset=utf-8; charset=utf-8"),
        ],
        vec![
            plain().with_parameter("a", "value").unwrap(),
            plain().with_parameter("A", "value").unwrap(),
        ],
        vec![
            plain().with_parameter("a", "VALUE").unwrap(),
            plain().with_parameter("A", "VALUE").unwrap(),
        ],
        vec![
            plain().with_parameters(vec![("a", "1"), ("a", "2")]).unwrap(),
            plain().with_parameters(vec![("a", "2"), ("a", "1")]).unwrap(),
        ],
        vec![MediaType::create("text", "csv").unwrap()],
        vec![MediaType::create("application", "atom+xml").unwrap()],
    ]);
}

#[test]
fn charsets_distinguish() {
    check_groups(vec![
        vec![plain()],
        vec![plain().with_charset("utf-8").unwrap()],
        vec![plain().with_charset("utf-16").unwrap()],
    ]);
}

#[test]
fn hash_set_lookups() {
    let mut set = HashSet::new();
    set.insert(parse("text/plain; a=1; b=2"));
    set.insert(known::JPEG.clone());

    assert!(set.contains(&parse("TEXT/PLAIN; B=2; A=1")));
    assert!(set.contains(&parse("image/jpeg")));
    assert!(!set.contains(&parse("text/plain; a=1")));
}

#[test]
fn is_ranges() {
    let plain_utf8 = &*known::PLAIN_TEXT_UTF_8;
    let bare = plain_utf8.without_parameters();

    assert!(plain_utf8.is(&known::ANY_TYPE));
    assert!(known::JPEG.is(&known::ANY_TYPE));
    assert!(known::ANY_TEXT_TYPE.is(&known::ANY_TYPE));
    assert!(plain_utf8.is(&known::ANY_TEXT_TYPE));
    assert!(bare.is(&known::ANY_TEXT_TYPE));
    assert!(!known::JPEG.is(&known::ANY_TEXT_TYPE));
    assert!(plain_utf8.is(plain_utf8));
    assert!(plain_utf8.is(&bare));
    assert!(!bare.is(plain_utf8));
    assert!(!plain_utf8.is(&known::HTML_UTF_8));

    let utf16 = plain_utf8.with_parameter("charset", "UTF-16").unwrap();
    assert!(!utf16.is(plain_utf8));
    assert!(!plain_utf8.is(&utf16));
}
