use lib::input::ErrorKind;
use lib::IStr;

use super::{Pair, Range};

fn parse(line: &str) -> Pair {
    IStr::new(line.as_bytes(), 0).complete().unwrap()
}

fn pair(a: i64, b: i64, c: i64, d: i64) -> Pair {
    Pair::new(Range::new(a, b), Range::new(c, d))
}

#[test]
fn test_parse_pair() {
    assert_eq!(parse("2-4,6-8"), pair(2, 4, 6, 8));
    assert_eq!(parse("6-6,4-6"), pair(6, 6, 4, 6));
    assert_eq!(parse("10-200,3000-40000"), pair(10, 200, 3000, 40000));
    assert_eq!(parse("-3--1,+2-5"), pair(-3, -1, 2, 5));
}

#[test]
fn test_parse_malformed() {
    let cases: [(&str, fn(&ErrorKind) -> bool); 8] = [
        ("", |k| matches!(k, ErrorKind::ExpectedInteger)),
        ("2-4", |k| matches!(k, ErrorKind::ExpectedChar(','))),
        ("2,4-6-8", |k| matches!(k, ErrorKind::ExpectedChar('-'))),
        ("2-4,6", |k| matches!(k, ErrorKind::ExpectedChar('-'))),
        ("2-4,6-", |k| matches!(k, ErrorKind::ExpectedInteger)),
        ("a-4,6-8", |k| matches!(k, ErrorKind::ExpectedInteger)),
        ("2-4,6-8,1-1", |k| matches!(k, ErrorKind::TrailingInput)),
        ("2-4,6-99999999999999999999", |k| {
            matches!(k, ErrorKind::NotInteger(..))
        }),
    ];

    for (line, check) in cases {
        let error = IStr::new(line.as_bytes(), 0)
            .complete::<Pair>()
            .unwrap_err();
        assert!(check(error.kind()), "{line:?}: {error}");
    }
}

#[test]
fn test_fully_contains() {
    assert!(pair(2, 8, 3, 7).fully_contains());
    assert!(pair(6, 6, 4, 6).fully_contains());
    assert!(pair(4, 6, 6, 6).fully_contains());
    assert!(pair(1, 1, 1, 1).fully_contains());
    assert!(!pair(5, 7, 7, 9).fully_contains());
    assert!(!pair(2, 4, 6, 8).fully_contains());
}

#[test]
fn test_overlaps() {
    assert!(pair(5, 7, 7, 9).overlaps());
    assert!(pair(7, 9, 5, 7).overlaps());
    assert!(pair(2, 8, 3, 7).overlaps());
    assert!(pair(2, 6, 4, 8).overlaps());
    assert!(!pair(2, 4, 6, 8).overlaps());
    assert!(!pair(2, 3, 4, 5).overlaps());
    assert!(!pair(4, 5, 2, 3).overlaps());
}

#[test]
fn test_predicates_match_formulas() {
    let span = -3..=3;

    for a in span.clone() {
        for b in a..=3 {
            for c in span.clone() {
                for d in c..=3 {
                    let p = pair(a, b, c, d);

                    let contains = (a <= c && d <= b) || (c <= a && b <= d);
                    assert_eq!(p.fully_contains(), contains, "{p:?}");

                    let overlaps = a.max(c) <= b.min(d);
                    assert_eq!(p.overlaps(), overlaps, "{p:?}");

                    if p.fully_contains() {
                        assert!(p.overlaps(), "{p:?}");
                    }
                }
            }
        }
    }
}
