//! Indented text output shared by every emitter.

/// Options for the writer.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Indentation string.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent_str: "    ".to_string(),
            new_line: "\n".to_string(),
        }
    }
}

/// A linear text stream with line-level indentation.
///
/// Indentation is inserted lazily at the first write of each line, so blank
/// lines never carry trailing whitespace.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    output: String,
    indent_level: u32,
    at_line_start: bool,
    options: WriterOptions,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::with_options(WriterOptions::default())
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            at_line_start: true,
            options,
        }
    }

    /// Write text on the current line.
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if self.at_line_start {
            self.write_indent();
            self.at_line_start = false;
        }
        self.output.push_str(s);
    }

    /// Write text and terminate the line.
    pub fn line(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push_str(&self.options.new_line);
        self.at_line_start = true;
    }

    /// Terminate the current line and leave exactly one empty line after it.
    pub fn blank_line(&mut self) {
        if self.output.is_empty() {
            return;
        }
        if !self.at_line_start {
            self.newline();
        }
        let double = self.options.new_line.repeat(2);
        if !self.output.ends_with(&double) {
            self.newline();
        }
    }

    /// Append text verbatim, ignoring the indentation level.
    ///
    /// Used for hand-written fragments that carry their own layout.
    pub fn raw(&mut self, s: &str) {
        self.output.push_str(s);
        self.at_line_start = self.output.is_empty() || self.output.ends_with(&self.options.new_line);
    }

    /// Write a multi-line fragment at the current indentation.
    ///
    /// The fragment's common leading spaces and tabs are stripped first, and
    /// leading and trailing empty lines are dropped. Remaining indentation is
    /// read in steps of four columns, a tab counting as one step, and
    /// rewritten with the indent string. Other whitespace is kept as text.
    pub fn lines(&mut self, text: &str) {
        let body: Vec<&str> = text.lines().collect();
        let first = body.iter().position(|l| !l.trim().is_empty());
        let last = body.iter().rposition(|l| !l.trim().is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return;
        };
        let body = &body[first..=last];
        // Spaces and tabs are single bytes, so the margin is a valid slice point.
        let margin = body
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| leading_blanks(l).len())
            .min()
            .unwrap_or(0);
        for l in body {
            if l.trim().is_empty() {
                self.newline();
                continue;
            }
            let l = l[margin..].trim_end();
            let lead = leading_blanks(l);
            let columns: usize = lead.chars().map(|c| if c == '\t' { 4 } else { 1 }).sum();
            let mut prefix = self.options.indent_str.repeat(columns / 4);
            prefix.push_str(&" ".repeat(columns % 4));
            self.write(&prefix);
            self.line(&l[lead.len()..]);
        }
    }

    /// Open a `{` block after `header` and indent its body.
    pub fn open(&mut self, header: &str) {
        self.write(header);
        self.write(" {");
        self.newline();
        self.increase_indent();
    }

    /// Close the innermost block opened with [`CodeWriter::open`].
    pub fn close(&mut self) {
        if !self.at_line_start {
            self.newline();
        }
        self.decrease_indent();
        self.line("}");
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Consume the writer, returning everything written.
    pub fn finish(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }
}

/// The run of spaces and tabs that starts `line`.
fn leading_blanks(line: &str) -> &str {
    let body = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - body.len()]
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
