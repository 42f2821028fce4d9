//! Plain aligned tables for terminal output.

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`, one line per row, no trailing newline.
///
/// Numeric cells are right-aligned. When `max_width` is set the widest
/// columns shrink first and overflowing cells end in `…`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = join_cells(headers.iter().zip(&widths).map(|(header, width)| {
        pad(&truncate(header, *width), *width, false)
    }));
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        lines.push(join_cells(widths.iter().enumerate().map(|(col, width)| {
            let cell = row.get(col).map_or("-", String::as_str);
            let text = truncate(cell, *width);
            let padded = pad(&text, *width, is_numeric(&text));
            if options.color {
                colorize(&padded, &text)
            } else {
                padded
            }
        })));
    }
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(GAP).trim_end().to_string()
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let total = |widths: &[usize]| widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    while total(widths) > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(col, width)| **width > headers[*col].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(col, _)| col);
        let Some(col) = widest else {
            break;
        };
        widths[col] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

fn colorize(padded: &str, text: &str) -> String {
    let code = match text {
        "true" | "pass" => "32",
        "false" | "missing" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}
