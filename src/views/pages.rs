//! Páginas HTML
//!
//! Render mínimo con `format!`. Todo valor que viene del usuario pasa por
//! `escape_html` antes de entrar en el documento.

use crate::config::AppConfig;
use crate::models::vehicle::{SalesReportRow, TotalCostReport};

use super::flash::Flash;

/// Escapar los caracteres especiales de HTML
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(config: &AppConfig, title: &str, flash: Option<Flash>, body: &str) -> String {
    let banner = flash
        .map(|f| format!(r#"<div class="flash {}">{}</div>"#, f.category(), f.message()))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
</head>
<body>
<nav>
<a href="{home}">Home</a>
<a href="{entry}">Tractor Entry</a>
<a href="{update}">Update Cost</a>
<a href="{total}">Total Cost</a>
<a href="{sales}">Tractor Sales</a>
</nav>
{banner}
<h1>{title}</h1>
{body}
</body>
</html>"#,
        title = title,
        css = config.url_for("/static/style.css"),
        home = config.url_for("/"),
        entry = config.url_for("/tractor_entry"),
        update = config.url_for("/update_cost"),
        total = config.url_for("/total_cost"),
        sales = config.url_for("/tractor_sales"),
        banner = banner,
        body = body,
    )
}

pub fn main_page(config: &AppConfig) -> String {
    layout(
        config,
        "Tractor Records",
        None,
        "<p>Record tractor purchases, post-purchase costs and totals.</p>",
    )
}

pub fn tractor_entry_page(config: &AppConfig, flash: Option<Flash>) -> String {
    let body = format!(
        r#"<form method="post" action="{action}">
<label>Date <input type="date" name="date" required></label>
<label>Vehicle name <input type="text" name="vehicle_name" required></label>
<label>Vehicle number <input type="text" name="vehicle_number" required></label>
<label>Showroom cost <input type="number" step="0.01" name="showroom_cost" required></label>
<button type="submit">Save</button>
</form>"#,
        action = config.url_for("/tractor_entry"),
    );
    layout(config, "Tractor Entry", flash, &body)
}

pub fn update_cost_page(config: &AppConfig, flash: Option<Flash>) -> String {
    let body = format!(
        r#"<form method="post" action="{action}">
<label>Vehicle number <input type="text" name="vehicle_number" required></label>
<label>Updated cost <input type="number" step="0.01" name="updated_cost" required></label>
<button type="submit">Save</button>
</form>"#,
        action = config.url_for("/update_cost"),
    );
    layout(config, "Update Cost", flash, &body)
}

pub fn total_cost_page(config: &AppConfig, report: &TotalCostReport) -> String {
    let rows: String = report
        .rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td></tr>\n",
                escape_html(&row.vehicle_number),
                row.showroom_cost,
                row.updated_cost,
                row.total_cost,
            )
        })
        .collect();

    let body = format!(
        r#"<table>
<tr><th>Vehicle number</th><th>Showroom cost</th><th>Updated cost</th><th>Total cost</th></tr>
{rows}</table>
<p class="grand-total">Total: {total:.2}</p>"#,
        rows = rows,
        total = report.grand_total,
    );
    layout(config, "Total Cost", None, &body)
}

pub fn tractor_sales_page(config: &AppConfig, sales: &[SalesReportRow], flash: Option<Flash>) -> String {
    let action = config.url_for("/delete_sale");
    let rows: String = sales
        .iter()
        .map(|sale| {
            let number = escape_html(&sale.vehicle_number);
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td><form method="post" action="{}"><input type="hidden" name="vehicle_number" value="{}"><button type="submit">Delete</button></form></td></tr>
"#,
                escape_html(&sale.date),
                escape_html(&sale.vehicle_name),
                number,
                sale.showroom_cost,
                sale.updated_cost,
                sale.total_cost,
                action,
                number,
            )
        })
        .collect();

    let body = format!(
        r#"<table>
<tr><th>Date</th><th>Vehicle name</th><th>Vehicle number</th><th>Showroom cost</th><th>Updated cost</th><th>Total cost</th><th></th></tr>
{rows}</table>"#,
        rows = rows,
    );
    layout(config, "Tractor Sales", flash, &body)
}
