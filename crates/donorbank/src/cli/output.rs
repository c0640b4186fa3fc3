//! Rendering of donor lists for the terminal.

use std::fmt::Write as _;

use crate::config::OutputFormat;
use crate::donor::Donor;

/// Column headings for table output.
const HEADINGS: [&str; 6] = ["Name", "Age", "Gender", "Contact", "Blood", "Location"];

/// Render donors in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(donors: &[&Donor], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(donors)),
        OutputFormat::Table => Ok(render_table(donors)),
        OutputFormat::Json => serde_json::to_string_pretty(donors),
    }
}

fn render_plain(donors: &[&Donor]) -> String {
    donors.iter().fold(String::new(), |mut out, donor| {
        let _ = writeln!(out, "{donor}");
        out
    })
}

fn render_table(donors: &[&Donor]) -> String {
    let rows: Vec<[String; 6]> = donors
        .iter()
        .map(|d| {
            [
                d.name.clone(),
                d.age.to_string(),
                d.gender.clone(),
                d.contact.clone(),
                d.blood_type.clone(),
                d.location.clone(),
            ]
        })
        .collect();

    let mut widths = HEADINGS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADINGS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donors() -> Vec<Donor> {
        vec![
            Donor::new("john doe", 25, "Male", "9998887777", "A+", "DELHI"),
            Donor::new("ann lee", 41, "Female", "555", "AB-", "PUNE"),
        ]
    }

    #[test]
    fn test_render_plain() {
        let donors = donors();
        let refs: Vec<&Donor> = donors.iter().collect();
        let out = render(&refs, OutputFormat::Plain).unwrap();
        assert_eq!(
            out,
            "John Doe | 25 | Male | 9998887777 | A+ | DELHI\nAnn Lee | 41 | Female | 555 | AB- | PUNE\n"
        );
    }

    #[test]
    fn test_render_table() {
        let donors = donors();
        let refs: Vec<&Donor> = donors.iter().collect();
        let out = render(&refs, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name      Age  Gender"));
        assert!(lines[1].starts_with("--------  ---"));
        assert!(lines[2].starts_with("John Doe  25   Male"));
        assert!(lines[3].ends_with("PUNE"));
    }

    #[test]
    fn test_render_table_empty_has_headings() {
        let out = render(&[], OutputFormat::Table).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("Location"));
    }

    #[test]
    fn test_render_json() {
        let donors = donors();
        let refs: Vec<&Donor> = donors.iter().collect();
        let out = render(&refs, OutputFormat::Json).unwrap();
        let parsed: Vec<Donor> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, donors);
    }
}
