/// Rows assigned to one image, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<String>,
}

impl Page {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Length in `char`s of the longest row.
    pub fn longest_line_chars(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Rows joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split rows into consecutive pages of at most `max_lines` rows.
///
/// Always returns at least one page: no rows yields a single empty page.
/// A `max_lines` of zero is treated as one.
pub fn paginate(lines: Vec<String>, max_lines: usize) -> Vec<Page> {
    let max_lines = max_lines.max(1);
    if lines.is_empty() {
        return vec![Page::default()];
    }
    let mut pages = Vec::with_capacity(lines.len().div_ceil(max_lines));
    let mut rest = lines.into_iter().peekable();
    while rest.peek().is_some() {
        pages.push(Page::new(rest.by_ref().take(max_lines).collect()));
    }
    pages
}
