//! Plain-text table layout: a left-aligned row label column followed by
//! right-aligned value columns, separated by two spaces.

#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<(String, Vec<String>)>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TextTable {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, label: S, cells: Vec<String>) {
        self.rows.push((label.into(), cells));
    }

    pub fn render(&self) -> String {
        let label_width = self
            .rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        let n_cols = self
            .rows
            .iter()
            .map(|(_, cells)| cells.len())
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let widths: Vec<usize> = (0..n_cols)
            .map(|c| {
                let header = self.headers.get(c).map_or(0, |h| h.chars().count());
                self.rows
                    .iter()
                    .filter_map(|(_, cells)| cells.get(c))
                    .map(|cell| cell.chars().count())
                    .fold(header, usize::max)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);

        let mut header_line = " ".repeat(label_width);
        for (c, width) in widths.iter().enumerate() {
            let header = self.headers.get(c).map_or("", String::as_str);
            header_line.push_str(&format!("  {:>width$}", header, width = width));
        }
        lines.push(header_line.trim_end().to_string());

        for (label, cells) in &self.rows {
            let mut line = format!("{:<width$}", label, width = label_width);
            for (c, width) in widths.iter().enumerate() {
                let cell = cells.get(c).map_or("", String::as_str);
                line.push_str(&format!("  {:>width$}", cell, width = width));
            }
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}
