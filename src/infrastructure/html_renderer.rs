// HTML presentation adapter - turns display directives into a standalone page
use crate::domain::chart::{ChartKind, ChartData};
use crate::domain::dashboard::{Dashboard, Directive, PageLayout};
use crate::domain::filter::FilterControl;
use crate::domain::kpi::Kpi;
use crate::domain::quote::TableData;
use std::fmt::Write;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 320.0;
const PLOT_LEFT: f64 = 56.0;
const PLOT_BOTTOM: f64 = 48.0;
const PLOT_TOP: f64 = 36.0;
const BAR_FILL: &str = "#1f77b4";
/// Colour ramp endpoints for colour-scaled bars (low value, high value).
const SCALE_LOW: (u8, u8, u8) = (0xc6, 0xdb, 0xef);
const SCALE_HIGH: (u8, u8, u8) = (0x08, 0x30, 0x6b);

const STYLE: &str = "body{font-family:sans-serif;margin:0 auto;padding:1rem 2rem;color:#262730}\
.wide{max-width:none}.centered{max-width:760px}\
.filters{display:flex;gap:1.5rem;align-items:flex-end}\
.metrics{display:flex;gap:1rem;margin:0.5rem 0}\
.metric{flex:1;border:1px solid #e6e6e6;border-radius:6px;padding:0.75rem}\
.metric .label{font-size:0.85rem;color:#555}.metric .value{font-size:1.8rem}\
.delta.up{color:#09ab3b}.delta.down{color:#ff2b2b}\
table{border-collapse:collapse}table.full{width:100%}\
th,td{border:1px solid #e6e6e6;padding:0.3rem 0.6rem;text-align:left}";

pub fn render_html(dashboard: &Dashboard) -> String {
    let layout_class = match dashboard.layout() {
        PageLayout::Wide => "wide",
        PageLayout::Centered => "centered",
    };

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(
        html,
        "<title>{}</title>",
        escape(dashboard.page_title().unwrap_or_default())
    );
    let _ = writeln!(html, "<style>{}</style>\n</head>", STYLE);
    let _ = writeln!(html, "<body class=\"{}\">", layout_class);

    // Consecutive filter controls share one form.
    let mut form_open = false;
    for directive in &dashboard.directives {
        if directive.is_filter() && !form_open {
            html.push_str("<form class=\"filters\" method=\"get\" action=\"/\">\n");
            form_open = true;
        } else if !directive.is_filter() && form_open {
            html.push_str("<button type=\"submit\">Apply</button>\n</form>\n");
            form_open = false;
        }
        render_directive(&mut html, directive);
    }
    if form_open {
        html.push_str("<button type=\"submit\">Apply</button>\n</form>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_directive(html: &mut String, directive: &Directive) {
    match directive {
        Directive::PageConfig { .. } => {}
        Directive::Title { text } => {
            let _ = writeln!(html, "<h1>{}</h1>", escape(text));
        }
        Directive::Heading { text } => {
            let _ = writeln!(html, "<h3>{}</h3>", escape(text));
        }
        Directive::Divider => html.push_str("<hr>\n"),
        Directive::Select { control } | Directive::MultiSelect { control } => {
            render_filter(html, control)
        }
        Directive::MetricRow { metrics } => render_metrics(html, metrics),
        Directive::BarChart { chart } => render_chart(html, chart),
        Directive::Table { table } => render_table(html, table),
        Directive::BulletList { lead, items } => {
            let _ = writeln!(html, "<p><strong>{}</strong></p>\n<ul>", escape(lead));
            for item in items {
                let _ = writeln!(html, "<li>{}</li>", inline_markdown(item));
            }
            html.push_str("</ul>\n");
        }
    }
}

fn render_filter(html: &mut String, control: &FilterControl) {
    let _ = writeln!(
        html,
        "<label>{}<br><select name=\"{}\"{}>",
        escape(&control.label),
        escape(&control.key),
        if control.multiple { " multiple" } else { "" }
    );
    for option in &control.options {
        let _ = writeln!(
            html,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(option),
            if control.is_selected(option) { " selected" } else { "" }
        );
    }
    html.push_str("</select></label>\n");
}

fn render_metrics(html: &mut String, metrics: &[Kpi]) {
    html.push_str("<div class=\"metrics\">\n");
    for kpi in metrics {
        let _ = writeln!(
            html,
            "<div class=\"metric\"><div class=\"label\">{}</div><div class=\"value\">{}</div><div class=\"delta {}\">{}</div></div>",
            escape(&kpi.label),
            escape(&kpi.value),
            if kpi.is_negative() { "down" } else { "up" },
            escape(&kpi.delta)
        );
    }
    html.push_str("</div>\n");
}

fn render_chart(html: &mut String, chart: &ChartData) {
    let range = chart.effective_range();
    let span = range.max - range.min;
    let plot_width = CHART_WIDTH - PLOT_LEFT - 16.0;
    let plot_height = CHART_HEIGHT - PLOT_TOP - PLOT_BOTTOM;
    let slot = plot_width / chart.series.len() as f64;
    let (lo, hi) = chart.series.bounds();

    let _ = writeln!(
        html,
        "<figure id=\"{}\"><svg viewBox=\"0 0 {} {}\" width=\"100%\" role=\"img\">",
        escape(&chart.id),
        CHART_WIDTH,
        CHART_HEIGHT
    );
    if let Some(title) = &chart.title {
        let _ = writeln!(
            html,
            "<text x=\"{}\" y=\"20\" font-weight=\"bold\">{}</text>",
            PLOT_LEFT,
            escape(title)
        );
    }
    let _ = writeln!(
        html,
        "<text x=\"{}\" y=\"{}\" font-size=\"11\">{}</text><text x=\"{}\" y=\"{}\" font-size=\"11\">{}</text>",
        4,
        PLOT_TOP + plot_height,
        fmt_number(range.min),
        4,
        PLOT_TOP + 10.0,
        fmt_number(range.max)
    );

    for (index, (category, value)) in chart.series.points().enumerate() {
        let fraction = ((value - range.min) / span).clamp(0.0, 1.0);
        let height = fraction * plot_height;
        let x = PLOT_LEFT + index as f64 * slot + slot * 0.15;
        let y = PLOT_TOP + plot_height - height;
        let fill = match chart.kind {
            ChartKind::Bar => BAR_FILL.to_string(),
            ChartKind::ColorScaledBar => scale_color(value, lo, hi),
        };
        let _ = writeln!(
            html,
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"><title>{}: {}</title></rect>",
            x,
            y,
            slot * 0.7,
            height,
            fill,
            escape(category),
            fmt_number(value)
        );
        let _ = writeln!(
            html,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"middle\">{}</text>",
            x + slot * 0.35,
            CHART_HEIGHT - PLOT_BOTTOM + 16.0,
            escape(category)
        );
    }

    let caption = if chart.x_label.is_empty() {
        escape(&chart.y_label)
    } else {
        format!("{} / {}", escape(&chart.x_label), escape(&chart.y_label))
    };
    let _ = writeln!(html, "</svg><figcaption>{}</figcaption></figure>", caption);
}

fn render_table(html: &mut String, table: &TableData) {
    let _ = writeln!(
        html,
        "<table{}>\n<thead><tr>",
        if table.full_width { " class=\"full\"" } else { "" }
    );
    for column in &table.columns {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
}

/// Linear interpolation along the colour ramp; a flat series maps to the high end.
pub fn scale_color(value: f64, lo: f64, hi: f64) -> String {
    let t = if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        mix(SCALE_LOW.0, SCALE_HIGH.0),
        mix(SCALE_LOW.1, SCALE_HIGH.1),
        mix(SCALE_LOW.2, SCALE_HIGH.2)
    )
}

fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes, then turns `**bold**` pairs into `<strong>`. An unpaired marker stays literal.
fn inline_markdown(text: &str) -> String {
    let escaped = escape(text);
    let parts: Vec<&str> = escaped.split("**").collect();
    let mut out = String::with_capacity(escaped.len() + 16);
    for (i, part) in parts.iter().enumerate() {
        let closes_pair = i % 2 == 1 && i + 1 < parts.len();
        let unpaired = i % 2 == 1 && !closes_pair;
        if closes_pair {
            let _ = write!(out, "<strong>{}</strong>", part);
        } else if unpaired {
            let _ = write!(out, "**{}", part);
        } else {
            out.push_str(part);
        }
    }
    out
}
