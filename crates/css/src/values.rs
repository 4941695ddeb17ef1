/// Reads the leading number of a value and ignores the rest, the way script
/// code reads `"1px solid #000"` as `1`. Returns `None` when the value does
/// not start with a number, or when the unit is something other than `px`.
pub fn parse_leading_px(value: &str) -> Option<f32> {
    let v = value.trim_start();
    let end = v
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(v.len());
    let num = v[..end].parse::<f32>().ok().filter(|n| n.is_finite())?;

    let rest = &v[end..];
    let unit = rest
        .split(|c: char| c.is_ascii_whitespace())
        .next()
        .unwrap_or("");
    match unit {
        "" | "px" => Some(num),
        _ => None,
    }
}

/// Serialize a px value for an inline style, without float noise.
pub fn format_px(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}px", rounded as i64)
    } else {
        format!("{rounded}px")
    }
}
