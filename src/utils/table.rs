//! Plain-text tables for terminal output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct Column {
    pub header: String,
    /// Upper bound for the column; longer cells are cut with "…".
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell<'a>(&'a self, row: &'a [String], i: usize) -> &'a str {
        row.get(i).map(String::as_str).unwrap_or("")
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .map(|r| self.cell(r, i).width())
                    .max()
                    .unwrap_or(0);
                content.max(col.header.width()).min(col.max_width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        push_line(&mut out, &header, &widths);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
        push_line(&mut out, &rule, &widths);

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len()).map(|i| self.cell(row, i)).collect();
            push_line(&mut out, &cells, &widths);
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| pad_to(&clip(c, *w), *w))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Cut `s` to `max` terminal columns, ending with "…" when cut.
pub fn clip(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

fn pad_to(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_the_widest_cell() {
        let mut t = Table::new(vec![Column::new("Day", 10), Column::new("Output", 20)]);
        t.add_row(vec!["Sunday".into(), "4m×2m".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Day    | Output");
        assert_eq!(lines[1], "------ | ------");
        assert_eq!(lines[2], "Sunday | 4m×2m");
    }

    #[test]
    fn long_cells_are_clipped() {
        assert_eq!(clip("Street Sweeping", 8), "Street …");
        assert_eq!(clip("Short", 8), "Short");
    }
}
