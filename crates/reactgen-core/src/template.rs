//! Ordered-section template assembly
//!
//! Generators describe a file as a sequence of named sections instead of
//! appending to one growing string. Optional sections are added with
//! [`Template::section_if`], so feature branching stays declarative.
//!
//! Rendering joins the non-empty sections with a single blank line and
//! terminates the file with exactly one newline.

/// One named block of a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    sections: Vec<Section>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section
    pub fn section(mut self, name: &'static str, body: impl Into<String>) -> Self {
        self.sections.push(Section {
            name,
            body: body.into(),
        });
        self
    }

    /// Append a section only when `condition` holds; `body` is not evaluated otherwise
    pub fn section_if<F>(self, condition: bool, name: &'static str, body: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if condition {
            self.section(name, body())
        } else {
            self
        }
    }

    /// Append one section per item
    pub fn sections<I, F, T>(mut self, name: &'static str, items: I, mut render: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> String,
    {
        for item in items {
            self = self.section(name, render(item));
        }
        self
    }

    /// Append every section of `other`, keeping their order
    pub fn append(mut self, other: Template) -> Self {
        self.sections.extend(other.sections);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.body.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|s| s.name)
    }

    pub fn render(&self) -> String {
        let blocks: Vec<&str> = self
            .sections
            .iter()
            .map(|s| s.body.trim_end_matches('\n'))
            .filter(|body| !body.trim().is_empty())
            .collect();

        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }

    /// Render and indent every non-empty line, for nesting inside a block
    pub fn render_indented(&self, width: usize) -> String {
        indent(&self.render(), width)
    }
}

/// Prefix each non-empty line with `width` spaces
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            out.push_str(line.trim_start_matches(' '));
        } else {
            out.push_str(&pad);
            out.push_str(line);
        }
    }
    out
}

/// Join lines with newlines (no trailing newline)
pub fn lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
