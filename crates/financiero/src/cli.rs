//! Formatters for the `routes` subcommand

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use financiero_types::{manifest, NavigationEntry};

/// Format the navigation manifest as a table (human) or JSON
///
/// With `active`, the entry whose path equals it exactly is marked.
pub fn format_routes(active: Option<&str>, json: bool, no_color: bool) -> String {
    let entries = manifest();

    if json {
        return format_routes_json(entries, active);
    }

    if entries.is_empty() {
        return "No sections configured.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["#", "Section", "Path", "Icon", "Active"]);
    } else {
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Section").fg(Color::Cyan),
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Icon").fg(Color::Cyan),
            Cell::new("Active").fg(Color::Cyan),
        ]);
    }

    for (index, entry) in entries.iter().enumerate() {
        let marker = if is_active(entry, active) { "●" } else { "" };
        let position = (index + 1).to_string();
        table.add_row(Row::from(vec![
            position.as_str(),
            entry.label,
            entry.path,
            entry.icon.name(),
            marker,
        ]));
    }

    table.to_string()
}

fn is_active(entry: &NavigationEntry, active: Option<&str>) -> bool {
    active.is_some_and(|path| entry.state_for(path).is_active())
}

fn format_routes_json(entries: &[NavigationEntry], active: Option<&str>) -> String {
    let rows: Vec<_> = entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "label": entry.label,
                "path": entry.path,
                "icon": entry.icon,
                "active": is_active(entry, active),
            })
        })
        .collect();

    serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_sections_in_order() {
        let output = format_routes(None, false, true);

        let dashboard = output.find("Dashboard").unwrap();
        let documents = output.find("Documentos").unwrap();
        let settings = output.find("Configuración").unwrap();
        assert!(dashboard < documents);
        assert!(documents < settings);
        assert!(output.contains("/partner-documents"));
        assert!(!output.contains('●'));
    }

    #[test]
    fn test_table_marks_active_section() {
        let output = format_routes(Some("/expenses"), false, true);
        let marked: Vec<_> = output.lines().filter(|l| l.contains('●')).collect();

        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Gastos"));
    }

    #[test]
    fn test_json_output() {
        let output = format_routes(Some("/"), true, true);
        let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0]["label"], "Dashboard");
        assert_eq!(rows[0]["icon"], "layout-dashboard");
        assert_eq!(rows[0]["active"], true);
        assert!(rows[1..].iter().all(|r| r["active"] == false));
    }

    #[test]
    fn test_json_without_active_path_marks_nothing() {
        let output = format_routes(None, true, true);
        let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r["active"] == false));
    }

    #[test]
    fn test_json_unknown_path_has_no_active() {
        let output = format_routes(Some("/unknown"), true, true);
        let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        assert!(rows.iter().all(|r| r["active"] == false));
    }
}
