//! Generic XML element tree

/// An XML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: vec![],
            children: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute; an existing attribute keeps its position
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Builder form of [`set_attr`](Self::set_attr)
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Append a child; later children render on top
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serialize this element and its subtree into `out`
    pub fn write_xml(&self, out: &mut String, depth: usize, pretty: bool) {
        let indent = if pretty {
            "  ".repeat(depth)
        } else {
            String::new()
        };
        let nl = if pretty { "\n" } else { "" };

        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attrs {
            out.push_str(&format!(r#" {}="{}""#, name, escape_xml(value)));
        }

        if self.children.is_empty() {
            out.push_str("/>");
            out.push_str(nl);
            return;
        }

        out.push('>');
        out.push_str(nl);
        for child in &self.children {
            child.write_xml(out, depth + 1, pretty);
        }
        out.push_str(&format!("{}</{}>", indent, self.name));
        out.push_str(nl);
    }
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
