use crate::types::ElementData;

impl ElementData {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = Some(value.to_string()),
            None => self
                .attributes
                .push((name.to_ascii_lowercase(), Some(value.to_string()))),
        }
    }

    /// The raw `class` attribute, empty when absent.
    pub fn class_name(&self) -> &str {
        self.attr("class").unwrap_or("")
    }

    pub fn has_class(&self, class: &str) -> bool {
        !class.is_empty() && self.class_name().split_ascii_whitespace().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if class.is_empty() || self.has_class(class) {
            return;
        }
        let mut list = self.class_name().trim().to_string();
        if !list.is_empty() {
            list.push(' ');
        }
        list.push_str(class);
        self.set_attr("class", &list);
    }

    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let list = self
            .class_name()
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", &list);
    }

    /// Inline style value for `property`; last declaration wins.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str())
    }

    /// Sets an inline style property. An empty value removes the declaration,
    /// so the property falls back to its non-inline value.
    pub fn set_style(&mut self, property: &str, value: &str) {
        let property = property.to_ascii_lowercase();
        let value = value.trim();
        if value.is_empty() {
            self.style.retain(|(k, _)| *k != property);
            return;
        }
        match self.style.iter_mut().find(|(k, _)| *k == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self.style.push((property, value.to_string())),
        }
    }

    pub fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }
}
