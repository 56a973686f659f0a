//! Printer configuration

/// How a parsed program is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Indented node listing, one node per line.
    #[default]
    Tree,
    /// Canonical source text, one statement per line.
    Source,
    /// Rust `{:#?}` dump of the AST.
    Debug,
}

impl OutputStyle {
    pub const ALL: [OutputStyle; 3] = [OutputStyle::Tree, OutputStyle::Source, OutputStyle::Debug];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputStyle::Tree => "tree",
            OutputStyle::Source => "source",
            OutputStyle::Debug => "debug",
        }
    }
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("unknown output style '{s}' (expected tree, source, or debug)"))
    }
}

/// Printer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per tree nesting level
    pub indent_width: usize,
    /// Which view `render` produces
    pub style: OutputStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            style: OutputStyle::Tree,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the output style
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }
}
