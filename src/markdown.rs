//! Markdown building blocks for review comments
//!
//! Inline helpers (`code`, `link`, `sup`, ...) plus a padded pipe table with
//! per-column alignment, in the GitHub-flavoured dialect comment renderers accept.

use console::measure_text_width;

/// Inline code span
pub fn code(text: &str) -> String {
    format!("`{}`", text)
}

/// Inline link
pub fn link(text: &str, url: &str) -> String {
    format!("[{}]({})", text, url)
}

/// Superscript span, empty when there is nothing to show
pub fn sup(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("<sup>{}</sup>", text)
    }
}

/// Subscript span, empty when there is nothing to show
pub fn sub(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("<sub>{}</sub>", text)
    }
}

/// Keyboard-style highlighted span
pub fn kbd(text: &str) -> String {
    format!("<kbd>{}</kbd>", text)
}

/// Collapsible disclosure block
///
/// ```
/// use pkg_size_report::markdown::details;
///
/// assert_eq!(
///     details("Hidden files", "body"),
///     "<details><summary>Hidden files</summary>\n\nbody\n</details>"
/// );
/// ```
pub fn details(summary: &str, body: &str) -> String {
    format!("<details><summary>{}</summary>\n\n{}\n</details>", summary, body)
}

/// Column alignment in a [`MarkdownTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// No explicit alignment, renderer default (left)
    #[default]
    None,
    /// Right aligned
    Right,
}

/// Pipe table with a header row and padded cells
#[derive(Debug, Clone, Default)]
pub struct MarkdownTable {
    header: Vec<String>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
}

/// Narrowest delimiter cell, `---`
const MIN_COLUMN_WIDTH: usize = 3;

impl MarkdownTable {
    /// Create a table from its header cells
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            align: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Set per-column alignment; columns without an entry use [`Align::None`]
    pub fn with_align(mut self, align: &[Align]) -> Self {
        self.align = align.to_vec();
        self
    }

    /// Append a body row
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table, one line per row, no trailing newline
    ///
    /// ```
    /// use pkg_size_report::markdown::{Align, MarkdownTable};
    ///
    /// let mut table = MarkdownTable::new(["File", "Size"]).with_align(&[Align::None, Align::Right]);
    /// table.push_row(vec!["a".to_string(), "1 kB".to_string()]);
    ///
    /// assert_eq!(table.render(), "| File | Size |\n| ---- | ---: |\n| a    | 1 kB |");
    /// ```
    pub fn render(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![MIN_COLUMN_WIDTH; columns];
        for row in std::iter::once(&self.header).chain(&self.rows) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(measure_text_width(cell));
            }
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&self.header, &widths));
        lines.push(self.render_delimiter(&widths));
        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }
        lines.join("\n")
    }

    fn align_of(&self, column: usize) -> Align {
        self.align.get(column).copied().unwrap_or_default()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let padding = " ".repeat(width - measure_text_width(cell));
                match self.align_of(i) {
                    Align::Right => format!("{}{}", padding, cell),
                    Align::None => format!("{}{}", cell, padding),
                }
            })
            .collect();

        format!("| {} |", cells.join(" | "))
    }

    fn render_delimiter(&self, widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| match self.align_of(i) {
                Align::None => "-".repeat(width),
                Align::Right => format!("{}:", "-".repeat(width - 1)),
            })
            .collect();

        format!("| {} |", cells.join(" | "))
    }
}
