/// Knobs shared by both renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Key of the generated struct tag, e.g. `json` gives `json:"dog_name"`.
    pub tag_key: String,
    /// Emitted as `package <name>` at the top of whole-file output.
    pub package: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            tag_key: "json".to_string(),
            package: None,
        }
    }
}

impl RenderOptions {
    pub fn with_tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_key = key.into();
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}
