use crate::values::parse_leading_px;

/// Top/bottom padding and border widths in CSS px.
///
/// Longhands and shorthands are applied in declaration order, so a later
/// `padding-top` overrides an earlier `padding`, and the other way around.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VerticalEdges {
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub border_top: f32,
    pub border_bottom: f32,
}

impl VerticalEdges {
    pub fn from_declarations(specified: &[(String, String)]) -> Self {
        let mut edges = VerticalEdges::default();

        for (name, value) in specified {
            let value = value.as_str();
            match name.as_str() {
                "padding" => {
                    if let Some((top, bottom)) = box_shorthand_vertical(value) {
                        edges.padding_top = top;
                        edges.padding_bottom = bottom;
                    }
                }
                "padding-top" => set_px(&mut edges.padding_top, value),
                "padding-bottom" => set_px(&mut edges.padding_bottom, value),
                "border-width" => {
                    if let Some((top, bottom)) = box_shorthand_vertical(value) {
                        edges.border_top = top;
                        edges.border_bottom = bottom;
                    }
                }
                "border" => {
                    if let Some(w) = border_width(value) {
                        edges.border_top = w;
                        edges.border_bottom = w;
                    }
                }
                "border-top" | "border-top-width" => {
                    if let Some(w) = border_width(value) {
                        edges.border_top = w;
                    }
                }
                "border-bottom" | "border-bottom-width" => {
                    if let Some(w) = border_width(value) {
                        edges.border_bottom = w;
                    }
                }
                _ => {}
            }
        }

        edges
    }

    pub fn padding(&self) -> f32 {
        self.padding_top + self.padding_bottom
    }

    pub fn border(&self) -> f32 {
        self.border_top + self.border_bottom
    }

    pub fn total(&self) -> f32 {
        self.padding() + self.border()
    }
}

fn set_px(slot: &mut f32, value: &str) {
    if let Some(v) = parse_leading_px(value) {
        *slot = v.max(0.0);
    }
}

// `padding: 1px 2px 3px` → (1, 3); one/two/three/four value forms.
fn box_shorthand_vertical(value: &str) -> Option<(f32, f32)> {
    let parts = value
        .split_ascii_whitespace()
        .map(parse_leading_px)
        .collect::<Option<Vec<_>>>()?;
    let (top, bottom) = match parts.as_slice() {
        [all] => (*all, *all),
        [v, _] => (*v, *v),
        [t, _, b] | [t, _, b, _] => (*t, *b),
        _ => return None,
    };
    Some((top.max(0.0), bottom.max(0.0)))
}

// `1px solid #000`, `solid 2px red`, `none` → width if any token is a length.
fn border_width(value: &str) -> Option<f32> {
    let mut tokens = value.split_ascii_whitespace();
    if value.trim().eq_ignore_ascii_case("none") {
        return Some(0.0);
    }
    tokens
        .find_map(|t| match t {
            "thin" => Some(1.0),
            "medium" => Some(3.0),
            "thick" => Some(5.0),
            _ => parse_leading_px(t),
        })
        .map(|w| w.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn longhands_sum_up() {
        let edges = VerticalEdges::from_declarations(&decls(&[
            ("padding-top", "2px"),
            ("padding-bottom", "3px"),
            ("border-top", "1px solid #000"),
            ("border-bottom-width", "1px"),
        ]));
        assert_eq!(edges.padding(), 5.0);
        assert_eq!(edges.border(), 2.0);
        assert_eq!(edges.total(), 7.0);
    }

    #[test]
    fn shorthands_and_overrides() {
        let edges = VerticalEdges::from_declarations(&decls(&[
            ("padding", "4px 10px 6px"),
            ("padding-bottom", "1px"),
            ("border", "solid 2px red"),
        ]));
        assert_eq!(edges.padding_top, 4.0);
        assert_eq!(edges.padding_bottom, 1.0);
        assert_eq!(edges.border_top, 2.0);
        assert_eq!(edges.border_bottom, 2.0);
    }

    #[test]
    fn malformed_values_are_ignored() {
        let edges = VerticalEdges::from_declarations(&decls(&[
            ("padding", "auto"),
            ("border-top", "none"),
            ("padding-top", "1em"),
        ]));
        assert_eq!(edges, VerticalEdges::default());
    }
}
