//! Date patterns in the `yyyy-MM-dd HH:mm:ss.SSS` letter style and the time
//! zones `%date`/`%time` accept as their second parameter.
//!
//! A pattern is compiled once into parts that map onto chrono's strftime
//! specifiers, so rendering never re-parses and never fails.

use chrono::{DateTime, FixedOffset, Local, Offset, Timelike, Utc};
use chrono_tz::Tz;

/// Default for `%date`.
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd HH:mm:ss.SSS";
/// Default for `%time`.
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm:ss.SSS";

#[derive(Debug, Clone, PartialEq, Eq)]
enum DatePart {
    Literal(String),
    Field(&'static str),
    /// Fraction of a second with this many digits.
    Fraction(usize),
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    parts: Vec<DatePart>,
}

impl DatePattern {
    /// Compiles a pattern such as `HH:mm:ss,SSS` or `yyyy-MM-dd'T'HH:mm`.
    ///
    /// # Errors
    /// Returns a human-readable reason for unknown pattern letters or an
    /// unterminated quoted literal.
    pub fn parse(pattern: &str) -> Result<Self, String> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    literal.push('\'');
                    i += 2;
                    continue;
                }
                i = read_quoted(&chars, i + 1, &mut literal)
                    .ok_or_else(|| format!("unterminated quote in date pattern '{pattern}'"))?;
                continue;
            }

            if !c.is_ascii_alphabetic() {
                literal.push(c);
                i += 1;
                continue;
            }

            let run = chars[i..].iter().take_while(|&&x| x == c).count();
            if !literal.is_empty() {
                parts.push(DatePart::Literal(std::mem::take(&mut literal)));
            }
            parts.push(letter_part(c, run)?);
            i += run;
        }

        if !literal.is_empty() {
            parts.push(DatePart::Literal(literal));
        }
        Ok(Self { parts })
    }

    /// Renders `time` in the offset it carries.
    #[must_use]
    pub fn format(&self, time: &DateTime<FixedOffset>) -> String {
        let mut out = String::with_capacity(32);
        for part in &self.parts {
            match part {
                DatePart::Literal(s) => out.push_str(s),
                DatePart::Field(spec) => out.push_str(&time.format(spec).to_string()),
                DatePart::Fraction(digits) => {
                    let nanos = format!("{:09}", time.nanosecond() % 1_000_000_000);
                    let shown = (*digits).min(9);
                    out.push_str(&nanos[..shown]);
                    out.extend(std::iter::repeat_n('0', digits - shown));
                }
            }
        }
        out
    }
}

/// Copies quoted text starting at `start` into `literal`, where `''` stands
/// for one quote. Returns the index after the closing quote.
fn read_quoted(chars: &[char], start: usize, literal: &mut String) -> Option<usize> {
    let mut i = start;
    loop {
        match chars.get(i)? {
            '\'' if chars.get(i + 1) == Some(&'\'') => {
                literal.push('\'');
                i += 2;
            }
            '\'' => return Some(i + 1),
            c => {
                literal.push(*c);
                i += 1;
            }
        }
    }
}

fn letter_part(letter: char, run: usize) -> Result<DatePart, String> {
    let spec = match (letter, run) {
        ('y' | 'u', 2) => "%y",
        ('y' | 'u', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('D', 1) => "%-j",
        ('D', _) => "%j",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', n) => return Ok(DatePart::Fraction(n)),
        ('a', _) => "%p",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('Z', 1..=3) | ('X' | 'x', 1..=2) => "%z",
        ('Z' | 'X' | 'x', _) => "%:z",
        ('z', _) => "%Z",
        _ => return Err(format!("unknown date pattern letter '{letter}'")),
    };
    Ok(DatePart::Field(spec))
}

/// Zone a timestamp is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSpec {
    /// The system zone at render time.
    #[default]
    Local,
    Fixed(FixedOffset),
    /// A tz database zone; its offset follows daylight saving per timestamp.
    Named(Tz),
}

impl TimeZoneSpec {
    /// Accepts `local`/`system`, `UTC`/`GMT`/`Z`, fixed offsets written
    /// `+02:00`, `-0530`, `+2` or `UTC+3`, and tz database names such as
    /// `Europe/Oslo`.
    ///
    /// # Errors
    /// Returns a reason for anything else.
    pub fn parse(zone: &str) -> Result<Self, String> {
        let zone = zone.trim();
        match zone.to_ascii_lowercase().as_str() {
            "" | "local" | "system" => return Ok(Self::Local),
            "utc" | "gmt" | "z" => return Ok(Self::utc()),
            _ => {}
        }

        let offset = zone
            .strip_prefix("UTC")
            .or_else(|| zone.strip_prefix("GMT"))
            .unwrap_or(zone);

        if let Some(fixed) = parse_offset(offset) {
            return Ok(Self::Fixed(fixed));
        }
        zone.parse::<Tz>().map(Self::Named).map_err(|_| {
            format!(
                "unknown time zone '{zone}', expected local, UTC, an offset like +02:00 \
                 or a name like Europe/Oslo"
            )
        })
    }

    #[must_use]
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// `time` expressed in this zone.
    #[must_use]
    pub fn apply(&self, time: &DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => time.with_timezone(&Local).fixed_offset(),
            Self::Fixed(offset) => time.with_timezone(offset),
            Self::Named(tz) => time.with_timezone(tz).fixed_offset(),
        }
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, digits) = match s.chars().next()? {
        '+' => (1, &s[1..]),
        '-' => (-1, &s[1..]),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None if digits.len() <= 2 => (digits, "0"),
        None if digits.len() == 4 => digits.split_at(2),
        None => return None,
    };

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 18 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
