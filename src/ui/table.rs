//! Table rendering for formatted output.

use console::{measure_text_width, pad_str, Alignment};

/// A simple box-drawn table.
///
/// Column widths are measured in terminal columns, so styled cells
/// (ANSI escapes) and wide glyphs line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(self.render_border('┌', '┬', '┐'));
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_border('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.push(self.render_border('└', '┴', '┘'));

        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        let mid = mid.to_string();
        format!("{}{}{}", left, segments.join(mid.as_str()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            s.push_str(&format!(" {} │", pad_str(cell, *width, Alignment::Left, None)));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["Check", "Result"]);
        assert!(table.is_empty());

        let output = table.render();
        assert!(output.contains("Check"));
        assert!(output.contains("Result"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["Check", "Result"]);
        table.add_row(row(&["Node.js", "✓ passed"]));
        table.add_row(row(&["ADB", "✗ failed"]));

        assert!(!table.is_empty());

        let output = table.render();
        assert!(output.contains("Node.js"));
        assert!(output.contains("✓ passed"));
        assert!(output.contains("ADB"));
        assert!(output.contains("✗ failed"));
    }

    #[test]
    fn table_uses_box_drawing() {
        let table = Table::new(vec!["Test"]);
        let output = table.render();

        assert!(output.contains("┌"));
        assert!(output.contains("┐"));
        assert!(output.contains("└"));
        assert!(output.contains("┘"));
        assert!(output.contains("│"));
        assert!(output.contains("─"));
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(row(&["only", "two"]));

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn table_lines_have_equal_display_width() {
        let mut table = Table::new(vec!["Check", "Result"]);
        table.add_row(row(&["Python packages", "✓ passed"]));
        table.add_row(row(&["ADB", "\u{1b}[31m✗ failed\u{1b}[0m"]));

        let output = table.render();
        let widths: Vec<usize> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn table_render_line_count() {
        let mut table = Table::new(vec!["Check", "Result"]);
        table.add_row(row(&["Node.js", "✓ passed"]));
        table.add_row(row(&["Appium Server", "✓ passed"]));
        table.add_row(row(&["ADB", "✗ failed"]));

        // top border, header, separator, 3 data rows, bottom border
        assert_eq!(table.render().lines().count(), 7);
    }
}
