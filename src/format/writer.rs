//! Output writer with indentation tracking

use super::config::FormatConfig;

/// Writer that tracks indentation and builds printer output
pub struct FormatWriter {
    output: String,
    indent_level: usize,
    indent_width: usize,
    at_line_start: bool,
}

impl FormatWriter {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width: config.indent_width,
            at_line_start: true,
        }
    }

    /// Get the finished output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }
}
