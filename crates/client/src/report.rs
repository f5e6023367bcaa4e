//! Printable report rendering
//!
//! Pure function from a (usually filtered) record set to a complete HTML
//! document with inline print styling. Opening a print surface and
//! invoking the print dialog is the caller's concern; nothing here touches
//! the outside world.

use crate::query::{FilterCriteria, GenderFilter};
use chrono::{DateTime, Utc};
use registry_common::StudentRecord;
use std::fmt::Write;

/// Placeholder for absent field values
const NOT_AVAILABLE: &str = "Not available";

/// Human summary of the active filters, one line per criterion
pub fn describe_filters(criteria: &FilterCriteria) -> Vec<String> {
    let mut lines = Vec::new();
    if !criteria.search_term.is_empty() {
        lines.push(format!("Search: {}", criteria.search_term));
    }
    if let GenderFilter::Only(gender) = criteria.gender {
        lines.push(format!("Gender: {}", gender.label()));
    }
    if let Some(recorded) = &criteria.recorded {
        lines.push(format!("Recorded by: {recorded}"));
    }
    lines
}

/// Render the registered-students report.
///
/// One table row per record in input order; any missing field renders as
/// "Not available" rather than an empty cell. All interpolated field text
/// is HTML-escaped.
pub fn render_report(
    students: &[StudentRecord],
    school_name: &str,
    report_title: &str,
    criteria: &FilterCriteria,
    generated_at: DateTime<Utc>,
) -> String {
    let mut html = String::with_capacity(2048 + students.len() * 256);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    let _ = writeln!(html, "<title>{} - {}</title>", escape(report_title), escape(school_name));
    html.push_str(
        "<style>\n\
         body { font-family: Arial, sans-serif; margin: 20px; }\n\
         .header { text-align: center; margin-bottom: 30px; }\n\
         .school-name { font-size: 24px; font-weight: bold; margin-bottom: 10px; }\n\
         .report-title { font-size: 18px; color: #666; }\n\
         .info { margin-bottom: 20px; }\n\
         .filters { background: #f9f9f9; padding: 10px; margin-bottom: 20px; border-radius: 5px; }\n\
         table { width: 100%; border-collapse: collapse; margin-top: 20px; }\n\
         th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\n\
         th { background-color: #f5f5f5; font-weight: bold; }\n\
         @media print { @page { size: A4; margin: 10mm; } th { background-color: #f5f5f5 !important; } }\n\
         </style>\n</head>\n<body>\n",
    );

    let _ = writeln!(
        html,
        "<div class=\"header\">\n<div class=\"school-name\">{}</div>\n<div class=\"report-title\">{}</div>\n</div>",
        escape(school_name),
        escape(report_title),
    );
    let _ = writeln!(
        html,
        "<div class=\"info\">\n<strong>Report date:</strong> {}<br>\n<strong>Total students:</strong> {}\n</div>",
        generated_at.format("%d %B %Y %H:%M"),
        students.len(),
    );

    let filters = describe_filters(criteria);
    if !filters.is_empty() {
        html.push_str("<div class=\"filters\">\n<strong>Applied filters:</strong><br>\n");
        for line in &filters {
            let _ = writeln!(html, "{}<br>", escape(line));
        }
        html.push_str("</div>\n");
    }

    html.push_str(
        "<table>\n<thead>\n<tr>\n<th>#</th>\n<th>Full name</th>\n<th>Previous school</th>\n\
         <th>National ID</th>\n<th>Phone</th>\n<th>Gender</th>\n<th>Address</th>\n\
         <th>Registration date</th>\n</tr>\n</thead>\n<tbody>\n",
    );

    for (index, student) in students.iter().enumerate() {
        let registration = student
            .registration_date
            .map(|ts| ts.format("%d %B %Y %H:%M").to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let _ = writeln!(
            html,
            "<tr>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n</tr>",
            index + 1,
            cell(&student.full_name),
            cell(&student.previous_school),
            cell(&student.national_id),
            cell(&student.phone_number),
            student.gender.label(),
            cell(&student.address),
            escape(&registration),
        );
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

/// Escaped cell text, with the placeholder for empty values
fn cell(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        escape(value)
    }
}

fn escape(value: &str) -> String {
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
