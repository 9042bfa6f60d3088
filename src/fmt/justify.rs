//! The padding/truncation stage every conversion's output passes through.
//!
//! Lengths are counted in `char`s. Truncation runs before padding.

/// Signed length bounds parsed from `%[min][.max]word`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthLimits {
    /// Pad to `abs(min)`: negative pads on the right (left-justify), positive on the left.
    pub min: Option<i32>,
    /// Cut to `abs(max)`: positive keeps the leftmost characters, negative the rightmost.
    pub max: Option<i32>,
}

impl LengthLimits {
    #[must_use]
    pub const fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }

    /// No bounds at all, so the stage is a no-op.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub fn apply(&self, s: String) -> String {
        let s = match self.max {
            Some(max) => truncate(s, max),
            None => s,
        };
        match self.min {
            Some(min) => pad(s, min),
            None => s,
        }
    }
}

fn truncate(s: String, max: i32) -> String {
    let limit = max.unsigned_abs() as usize;
    let len = s.chars().count();
    if len <= limit {
        return s;
    }
    if max >= 0 {
        s.chars().take(limit).collect()
    } else {
        s.chars().skip(len - limit).collect()
    }
}

fn pad(mut s: String, min: i32) -> String {
    let width = min.unsigned_abs() as usize;
    let len = s.chars().count();
    if len >= width {
        return s;
    }
    let padding = " ".repeat(width - len);
    if min < 0 {
        s.push_str(&padding);
        s
    } else {
        padding + &s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(s: &str, min: Option<i32>, max: Option<i32>) -> String {
        LengthLimits::new(min, max).apply(s.to_string())
    }

    #[test]
    fn unbounded_is_identity() {
        assert!(LengthLimits::default().is_unbounded());
        assert_eq!(apply("INFO", None, None), "INFO");
    }

    #[test]
    fn positive_min_pads_left() {
        assert_eq!(apply("INFO", Some(6), None), "  INFO");
    }

    #[test]
    fn negative_min_pads_right() {
        assert_eq!(apply("INFO", Some(-6), None), "INFO  ");
    }

    #[test]
    fn positive_max_keeps_leftmost() {
        assert_eq!(apply("some.logger.name", None, Some(10)), "some.logge");
    }

    #[test]
    fn negative_max_keeps_rightmost() {
        assert_eq!(apply("some.logger.name", None, Some(-4)), "name");
    }

    #[test]
    fn truncates_before_padding() {
        assert_eq!(apply("abcdefgh", Some(-6), Some(3)), "abc   ");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(apply("æøå", Some(4), None), " æøå");
        assert_eq!(apply("æøåæøå", None, Some(2)), "æø");
    }

    #[test]
    fn zero_max_yields_empty() {
        assert_eq!(apply("abc", None, Some(0)), "");
    }
}
