
use serde::Serialize;

///
/// Assets
///
/// Extra stylesheets, scripts and raw page fragments a field widget needs.
/// Every list keeps insertion order and holds each entry once.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assets {
    css_files: Vec<String>,
    js_files: Vec<String>,
    webpack_encore_entries: Vec<String>,
    head_contents: Vec<String>,
    body_contents: Vec<String>,
}

impl Assets {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            css_files: Vec::new(),
            js_files: Vec::new(),
            webpack_encore_entries: Vec::new(),
            head_contents: Vec::new(),
            body_contents: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_css_file(mut self, path: impl Into<String>) -> Self {
        push_unique(&mut self.css_files, path.into());
        self
    }

    #[must_use]
    pub fn with_js_file(mut self, path: impl Into<String>) -> Self {
        push_unique(&mut self.js_files, path.into());
        self
    }

    #[must_use]
    pub fn with_webpack_encore_entry(mut self, entry: impl Into<String>) -> Self {
        push_unique(&mut self.webpack_encore_entries, entry.into());
        self
    }

    #[must_use]
    pub fn with_head_content(mut self, html: impl Into<String>) -> Self {
        push_unique(&mut self.head_contents, html.into());
        self
    }

    #[must_use]
    pub fn with_body_content(mut self, html: impl Into<String>) -> Self {
        push_unique(&mut self.body_contents, html.into());
        self
    }

    /// Append every entry of `other` not already present.
    ///
    /// Used to aggregate per-field requirements into one page-level set.
    pub fn merge(&mut self, other: &Self) {
        extend_unique(&mut self.css_files, &other.css_files);
        extend_unique(&mut self.js_files, &other.js_files);
        extend_unique(
            &mut self.webpack_encore_entries,
            &other.webpack_encore_entries,
        );
        extend_unique(&mut self.head_contents, &other.head_contents);
        extend_unique(&mut self.body_contents, &other.body_contents);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.css_files.is_empty()
            && self.js_files.is_empty()
            && self.webpack_encore_entries.is_empty()
            && self.head_contents.is_empty()
            && self.body_contents.is_empty()
    }

    #[must_use]
    pub fn css_files(&self) -> &[String] {
        &self.css_files
    }

    #[must_use]
    pub fn js_files(&self) -> &[String] {
        &self.js_files
    }

    #[must_use]
    pub fn webpack_encore_entries(&self) -> &[String] {
        &self.webpack_encore_entries
    }

    #[must_use]
    pub fn head_contents(&self) -> &[String] {
        &self.head_contents
    }

    #[must_use]
    pub fn body_contents(&self) -> &[String] {
        &self.body_contents
    }
}

fn push_unique(list: &mut Vec<String>, entry: String) {
    if !list.contains(&entry) {
        list.push(entry);
    }
}

fn extend_unique(list: &mut Vec<String>, entries: &[String]) {
    for entry in entries {
        push_unique(list, entry.clone());
    }
}
