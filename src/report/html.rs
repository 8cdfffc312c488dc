use super::ReportRow;

/// Escape the five HTML-significant characters.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full static document: one table row per event with the event
/// name, the comma-joined confirmed attendee names, and the confirmed count.
pub fn render(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n<title>Attendance report</title>\n");
    out.push_str("</head>\n<body>\n<h1>Attendance report</h1>\n");
    out.push_str("<table>\n<tr><th>Event</th><th>Confirmed attendees</th><th>Count</th></tr>\n");

    for row in rows {
        let attendees = row
            .attendees
            .iter()
            .map(|name| escape(name))
            .collect::<Vec<_>>()
            .join(", ");

        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&row.event_name),
            attendees,
            row.confirmed
        ));
    }

    out.push_str("</table>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<i>\"x\"</i>"), "&lt;i&gt;&quot;x&quot;&lt;/i&gt;");
        assert_eq!(escape("O'Brien"), "O&#39;Brien");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn renders_one_row_per_event() {
        let rows = vec![
            ReportRow {
                event_id: "1".to_string(),
                event_name: "Friday <scrim>".to_string(),
                attendees: vec!["Ana".to_string(), "Bo & Co".to_string()],
                confirmed: 2,
            },
            ReportRow {
                event_id: "2".to_string(),
                event_name: "Quiet night".to_string(),
                attendees: Vec::new(),
                confirmed: 0,
            },
        ];

        let html = render(&rows);
        assert!(html.contains("Friday &lt;scrim&gt;"));
        assert!(html.contains("Ana, Bo &amp; Co"));
        assert!(html.contains("<td>2</td>"));
        assert!(html.contains("<td></td><td>0</td>"));
    }
}
