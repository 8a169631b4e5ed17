use crate::profiles::{HalfProfileSet, OccupationNumberRow};
use std::fs;
use std::path::Path;

pub fn format_fixed_f64(value: f64, width: usize, precision: usize) -> String {
    format!(
        "{value:>width$.precision$}",
        width = width,
        precision = precision
    )
}

pub fn format_scientific_f64(value: f64, width: usize, precision: usize) -> String {
    format!(
        "{value:>width$.precision$E}",
        width = width,
        precision = precision
    )
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, normalize_text_artifact(content))
}

/// One row per grid point: momentum followed by every shell's value.
pub fn render_half_profile_table(set: &HalfProfileSet) -> String {
    let mut lines = Vec::with_capacity(set.momentum_grid.len() + 1);
    let mut header = format!("{:>12}", "q");
    for profile in &set.profiles {
        header.push_str(&format!("{:>14}", profile.shell.label()));
    }
    lines.push(header);

    for (row, momentum) in set.momentum_grid.iter().enumerate() {
        let mut line = format_fixed_f64(*momentum, 12, 4);
        for profile in &set.profiles {
            let value = profile.values.get(row).copied().unwrap_or(f64::NAN);
            line.push_str(&format_scientific_f64(value, 14, 5));
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub fn render_occupation_table(rows: &[OccupationNumberRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!("{:>14}{:>16}{:>16}", "p", "J(p)", "n(p)"));
    for row in rows {
        lines.push(format!(
            "{}{}{}",
            format_fixed_f64(row.momentum, 14, 6),
            format_scientific_f64(row.compton_profile, 16, 7),
            format_fixed_f64(row.occupation_number, 16, 10)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{
        format_fixed_f64, format_scientific_f64, normalize_text_artifact,
        render_half_profile_table, render_occupation_table, write_text_artifact,
    };
    use crate::domain::AtomicNumber;
    use crate::profiles::{default_generator, OccupationNumberRow, UNION_GRID_SIZE};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fixed_width_float_formatting_is_deterministic() {
        let first = format_fixed_f64(1.23, 13, 5);
        let second = format_fixed_f64(1.23, 13, 5);

        assert_eq!(first, "      1.23000");
        assert_eq!(first, second);
        assert_eq!(format_scientific_f64(0.000125, 12, 3), "    1.250E-4");
    }

    #[test]
    fn normalize_text_artifact_uses_canonical_line_endings() {
        let normalized = normalize_text_artifact("alpha\r\nbeta\rgamma");
        assert_eq!(normalized, "alpha\nbeta\ngamma\n");
        assert_eq!(normalize_text_artifact(""), "");
    }

    #[test]
    fn repeated_text_writes_produce_identical_bytes() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("artifact.dat");
        let input = "line 1\r\nline 2\rline 3";

        write_text_artifact(&path, input).expect("first write should succeed");
        let first = fs::read(&path).expect("artifact should be readable");

        write_text_artifact(&path, input).expect("second write should succeed");
        let second = fs::read(&path).expect("artifact should be readable");

        assert_eq!(first, second);
        assert_eq!(second, b"line 1\nline 2\nline 3\n");
    }

    #[test]
    fn half_profile_table_has_header_and_one_row_per_grid_point() {
        let set = default_generator(AtomicNumber::new(3).expect("lithium"))
            .generate_half_profiles()
            .expect("lithium profiles");
        let table = render_half_profile_table(&set);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), UNION_GRID_SIZE + 1);
        assert!(lines[0].contains("1s"));
        assert!(lines[0].contains("2s"));
        assert!(lines[1].trim_start().starts_with("0.0000"));
    }

    #[test]
    fn occupation_table_lists_rows_in_order() {
        let rows = [
            OccupationNumberRow {
                momentum: -1.0,
                compton_profile: 0.0,
                occupation_number: 0.0,
            },
            OccupationNumberRow {
                momentum: 0.0,
                compton_profile: 1.0,
                occupation_number: 0.5,
            },
        ];
        let table = render_occupation_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with("0.5000000000"));
    }
}
