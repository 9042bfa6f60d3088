//! Logger-name abbreviation for `%logger{N}`.

/// Shortens a dotted name towards `max_length` characters.
///
/// The final segment is always kept whole. Leading segments are kept whole
/// from the left while the budget lasts, after which each is cut to its first
/// character: `org.example.Logger` becomes `o.e.Logger` or `org.e.Logger`.
/// The result can still exceed `max_length` when the last segment alone does.
#[must_use]
pub fn abbreviate(name: &str, max_length: usize) -> String {
    if name.chars().count() <= max_length {
        return name.to_string();
    }

    let parts: Vec<&str> = name.split('.').collect();
    let Some((last, leading)) = parts.split_last() else {
        return name.to_string();
    };

    let mut remainder =
        signed(max_length) - signed(last.chars().count()) - signed(leading.len() * 2);

    let mut result = String::with_capacity(max_length);
    for part in leading {
        let len = signed(part.chars().count());
        if len > remainder {
            remainder = 0;
            if let Some(first) = part.chars().next() {
                result.push(first);
            }
        } else {
            remainder -= len + 1;
            result.push_str(part);
        }
        result.push('.');
    }
    result.push_str(last);
    result
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
