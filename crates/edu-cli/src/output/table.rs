#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;

/// Render an aligned table. Widths count characters, so accented names
/// line up.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .chain([display_width(header), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(display_width(&header_line)));

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let clipped = clip(cell, *width);
                let numeric = is_numeric(&clipped);
                let padded = pad(&clipped, *width, numeric);
                if options.color {
                    paint(&clipped, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// Narrow the widest column one step at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > display_width(headers[*index]).max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Color the padded cell by its plain value. Padding stays outside the
/// escape codes so alignment is unchanged.
fn paint(value: &str, padded: String) -> String {
    let code = match value.to_lowercase().as_str() {
        "aprobado" | "activo" | "available" | "live" | "confirmed" | "true" => "32",
        "pendiente" | "limited" | "demo" | "acknowledged" => "33",
        "cancelado" | "rechazado" | "full" | "false" | "error" => "31",
        _ => return padded,
    };
    padded.replacen(value, &format!("\u{1b}[{code}m{value}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, clip, render_table};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn accented_cells_align_by_characters() {
        let rows = vec![
            vec!["MAT101".to_string(), "Cálculo I".to_string()],
            vec!["FIS102".to_string(), "Física I".to_string()],
        ];
        let table = render_table(&["codigo", "nombre"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].chars().nth(8), Some('C'));
        assert_eq!(lines[3].chars().nth(8), Some('F'));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["MAT101".to_string(), "3".to_string()]];
        let table = render_table(&["codigo", "cupo"], &rows, PLAIN);
        let last = table.lines().last().unwrap_or_default();
        assert!(last.ends_with("   3"));
    }

    #[test]
    fn narrow_terminal_clips_the_widest_column() {
        let rows = vec![vec![
            "FIS201".to_string(),
            "Edificio A - Laboratorio de Física 102".to_string(),
        ]];
        let table = render_table(
            &["codigo", "aula"],
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 30));
        assert!(table.contains('…'));
    }

    #[test]
    fn clip_keeps_short_values() {
        assert_eq!(clip("MAT101", 10), "MAT101");
        assert_eq!(clip("Programación", 5), "Prog…");
    }

    #[test]
    fn color_wraps_status_words_only() {
        let rows = vec![vec!["MAT101".to_string(), "pendiente".to_string()]];
        let table = render_table(
            &["codigo", "estado"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[33mpendiente\u{1b}[0m"));
        assert!(!table.contains("\u{1b}[33mMAT101"));
    }
}
