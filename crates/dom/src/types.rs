pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl Id {
    pub const DOCUMENT: Id = Id(0);
}

#[derive(Debug)]
pub enum NodeKind {
    Document,
    Element(ElementData),
}

/// Element state as seen by scripts: attributes, the inline `style`
/// declarations, the form value and the layout slots a host fills in.
#[derive(Clone, Debug, Default)]
pub struct ElementData {
    pub name: String,
    pub attributes: Vec<(String, Option<String>)>,
    /// Inline declarations, property names lowercased, in source order.
    pub style: Vec<(String, String)>,
    pub value: String,
    /// Content-box height used when no inline `height` is set.
    pub layout_height: f32,
    /// Height of the scrollable content as reported by layout.
    pub scroll_height: f32,
}

impl ElementData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            ..Self::default()
        }
    }
}
