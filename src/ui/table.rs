//! Plain-text table layout for the buffered UI.

/// Rows of `key value`, keys padded to the widest key plus `padding` spaces.
pub fn render_key_value_table(prefix: &str, rows: &[(String, String)], padding: usize) -> String {
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in rows {
        let pad = width - key.chars().count() + padding;
        let line = format!("{}{}{}{}", prefix, key, " ".repeat(pad), value);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Columns padded to their widest cell plus `padding` spaces; last column unpadded.
pub fn render_table(prefix: &str, rows: &[Vec<String>], padding: usize) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in rows {
        let mut line = String::from(prefix);
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < row.len() {
                line.push_str(&" ".repeat(widths[i] - cell.chars().count() + padding));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
