/*!
 * Field extraction for `<label> = <value>` lines.
 *
 * TextGrid fields come in two shapes:
 * - numeric: `xmin = 0.25 ` (value followed by one trailing space)
 * - text:    `text = "sil" ` (value between double quotes)
 *
 * All functions here are pure and return `None` when the field is absent.
 */

/// Extract a numeric field value from a line.
///
/// The field must appear as `name = <float>`; the single trailing space and
/// any line terminator are ignored. Non-finite values are rejected.
pub fn numeric_field(name: &str, line: &str) -> Option<f64> {
    let value = value_after(name, line)?;
    let value = value.trim_end_matches(['\r', '\n']);
    let value = value.strip_suffix(' ').unwrap_or(value);

    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Extract a declared element count (`size = 3 `) from a line.
///
/// The value must be a non-negative whole number.
pub fn count_field(name: &str, line: &str) -> Option<usize> {
    let value = numeric_field(name, line)?;
    if value < 0.0 || value.fract() != 0.0 || value >= usize::MAX as f64 {
        return None;
    }
    Some(value as usize)
}

/// Extract a quoted text field value from a line.
///
/// The value starts after `name = "` and ends at the first `" ` that follows.
/// A closing quote at the very end of the line is accepted as well. Embedded
/// quotes are not unescaped.
pub fn text_field<'a>(name: &str, line: &'a str) -> Option<&'a str> {
    let pattern = format!("{} = \"", name);
    let start = line.find(&pattern)? + pattern.len();
    let tail = &line[start..];

    if let Some(end) = tail.find("\" ") {
        return Some(&tail[..end]);
    }

    tail.trim_end_matches(['\r', '\n']).strip_suffix('"')
}

/// Check that a line carries `name = ` without caring about its value.
pub fn has_field(name: &str, line: &str) -> bool {
    value_after(name, line).is_some()
}

fn value_after<'a>(name: &str, line: &'a str) -> Option<&'a str> {
    let pattern = format!("{} = ", name);
    line.find(&pattern).map(|pos| &line[pos + pattern.len()..])
}
