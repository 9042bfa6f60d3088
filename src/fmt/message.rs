//! `{}` placeholder substitution for message templates.
//!
//! Each `{}` takes the next argument in order. `\{}` is a literal `{}`, and
//! `\\{}` is a backslash followed by an argument. Placeholders left over once
//! the arguments run out stay in the output as written.

/// Fills the placeholders of `template` with `args`.
#[must_use]
pub fn format(template: &str, args: &[String]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len() + args.len() * 8);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(idx) = rest.find("{}") {
        let before = &rest[..idx];
        let escaped = before.ends_with('\\') && !before.ends_with("\\\\");

        if escaped {
            result.push_str(&before[..before.len() - 1]);
            result.push_str("{}");
            rest = &rest[idx + 2..];
            continue;
        }

        let Some(arg) = args.next() else {
            break;
        };
        let before = before.strip_suffix('\\').unwrap_or(before);
        result.push_str(before);
        result.push_str(arg);
        rest = &rest[idx + 2..];
    }

    result.push_str(rest);
    result
}
