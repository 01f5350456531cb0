use std::ops::Range;

use num_bigint::{BigInt, BigUint};

const KEY_PREFIX: &[u8] = b"Key_";
const CHAN_PREFIX: &[u8] = b"Chan_";

/// The line separator between the two lines of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    Lf,
    CrLf,
}

impl LineBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineBreak::Lf => "\n",
            LineBreak::CrLf => "\r\n",
        }
    }

    fn len(&self) -> usize {
        self.as_str().len()
    }
}

/// Numbers are unbounded: any run of digits is a valid field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier shared by the `Key_` and `Chan_` lines
    pub id: BigUint,
    /// Note number
    pub key: BigInt,
    /// Output channel
    pub chan: BigInt,
    /// Separator found between the two lines
    pub line_break: LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatch {
    /// Byte range of the record in the scanned input, from `K` to the last channel digit
    pub span: Range<usize>,
    pub record: Record,
}

/// Iterates over the non-overlapping records of a document, left to right.
pub struct RecordScanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> RecordScanner<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }
}

impl Iterator for RecordScanner<'_> {
    type Item = RecordMatch;

    fn next(&mut self) -> Option<RecordMatch> {
        while self.pos < self.input.len() {
            let start = self.pos + find(&self.input[self.pos..], KEY_PREFIX)?;

            match parse_record(self.input, start) {
                Some(found) => {
                    self.pos = found.span.end;
                    return Some(found);
                }
                None => self.pos = start + 1,
            }
        }

        None
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Length of the run of ASCII digits at the start of `input`.
fn digit_run(input: &[u8]) -> usize {
    input.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn parse_digits<T: std::str::FromStr>(digits: &[u8]) -> Option<T> {
    std::str::from_utf8(digits).ok()?.parse().ok()
}

/// Try to read a whole record starting at `start`, which points at a `Key_` prefix.
fn parse_record(input: &[u8], start: usize) -> Option<RecordMatch> {
    let mut pos = start + KEY_PREFIX.len();

    let id_len = digit_run(&input[pos..]);
    if id_len == 0 {
        return None;
    }
    let id_digits = &input[pos..pos + id_len];
    pos += id_len;

    if input.get(pos) != Some(&b'=') {
        return None;
    }
    pos += 1;

    let key_len = digit_run(&input[pos..]);
    if key_len == 0 {
        return None;
    }
    let key_digits = &input[pos..pos + key_len];
    pos += key_len;

    let rest = &input[pos..];
    let line_break = if rest.starts_with(b"\r\n") {
        LineBreak::CrLf
    } else if rest.starts_with(b"\n") {
        LineBreak::Lf
    } else {
        return None;
    };
    pos += line_break.len();

    if !input[pos..].starts_with(CHAN_PREFIX) {
        return None;
    }
    pos += CHAN_PREFIX.len();

    let chan_id_len = digit_run(&input[pos..]);
    if &input[pos..pos + chan_id_len] != id_digits {
        return None;
    }
    pos += chan_id_len;

    if input.get(pos) != Some(&b'=') {
        return None;
    }
    pos += 1;

    let chan_len = digit_run(&input[pos..]);
    if chan_len == 0 {
        return None;
    }
    let chan_digits = &input[pos..pos + chan_len];
    pos += chan_len;

    Some(RecordMatch {
        span: start..pos,
        record: Record {
            id: parse_digits(id_digits)?,
            key: parse_digits(key_digits)?,
            chan: parse_digits(chan_digits)?,
            line_break,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn scan(input: &str) -> Vec<RecordMatch> {
        RecordScanner::new(input.as_bytes()).collect()
    }

    #[test]
    fn finds_consecutive_records() {
        let input = "[Board0]\nKey_0=60\nChan_0=1\nKey_1=61\nChan_1=1\n";
        let found = scan(input);

        assert_eq!(found.len(), 2);
        assert_eq!(
            found[0].record,
            Record {
                id: BigUint::from(0u32),
                key: int(60),
                chan: int(1),
                line_break: LineBreak::Lf
            }
        );
        assert_eq!(&input[found[0].span.clone()], "Key_0=60\nChan_0=1");
        assert_eq!(found[1].record.key, int(61));
        assert_eq!(&input[found[1].span.clone()], "Key_1=61\nChan_1=1");
    }

    #[test]
    fn requires_matching_ids() {
        assert!(scan("Key_1=60\nChan_2=1").is_empty());
        assert!(scan("Key_1=60\nChan_11=1").is_empty());
        assert!(scan("Key_12=60\nChan_1=1").is_empty());
    }

    #[test]
    fn requires_adjacent_lines_in_order() {
        assert!(scan("Key_1=60\n\nChan_1=1").is_empty());
        assert!(scan("Chan_1=1\nKey_1=60").is_empty());
        assert!(scan("Key_1=60 \nChan_1=1").is_empty());
    }

    #[test]
    fn rejects_missing_or_signed_numbers() {
        assert!(scan("Key_=60\nChan_=1").is_empty());
        assert!(scan("Key_1=\nChan_1=1").is_empty());
        assert!(scan("Key_1=60\nChan_1=").is_empty());
        assert!(scan("Key_1=-60\nChan_1=1").is_empty());
    }

    #[test]
    fn channel_takes_all_digits_and_stops_there() {
        let input = "Key_3=60\nChan_3=12x";
        let found = scan(input);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].record.chan, int(12));
        assert_eq!(found[0].span, 0..input.len() - 1);
    }

    #[test]
    fn accepts_crlf_between_lines() {
        let found = scan("Key_4=70\r\nChan_4=3\r\n");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].record.line_break, LineBreak::CrLf);
        assert_eq!(found[0].span, 0..18);
    }

    #[test]
    fn matches_inside_a_line() {
        let found = scan("xKey_5=1\nChan_5=2");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span.start, 1);
    }

    #[test]
    fn recovers_after_a_broken_candidate() {
        let input = "Key_Key_7=10\nChan_7=0";
        let found = scan(input);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span.start, 4);
        assert_eq!(found[0].record.id, BigUint::from(7u32));
    }

    #[test]
    fn keeps_leading_zeros_out_of_the_values() {
        let found = scan("Key_007=060\nChan_007=01");

        assert_eq!(found[0].record.id, BigUint::from(7u32));
        assert_eq!(found[0].record.key, int(60));
        assert_eq!(found[0].record.chan, int(1));
    }

    #[test]
    fn numbers_beyond_machine_width_are_records() {
        let id = "123456789012345678901234";
        let found = scan(&format!("Key_{id}=99999999999999999999\nChan_{id}=1"));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].record.id, id.parse::<BigUint>().unwrap());
        assert_eq!(
            found[0].record.key,
            "99999999999999999999".parse::<BigInt>().unwrap()
        );
        assert_eq!(found[0].record.chan, int(1));
    }

    #[test]
    fn empty_and_unrelated_input() {
        assert!(scan("").is_empty());
        assert!(scan("Key_").is_empty());
        assert!(scan("[Board0]\nCol_0=ff0000\n").is_empty());
    }
}
