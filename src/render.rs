//! Plain-text rendering of a [`FormView`] for the terminal.

use common::{ChartSeries, FormView, InputKind};

/// Width in characters of a bar at full scale
const BAR_WIDTH: usize = 40;

pub fn render_view(view: &FormView) -> String {
    let mut out = String::new();

    let label_width = view.inputs.iter().map(|i| i.label.len()).max().unwrap_or(0);
    for input in &view.inputs {
        let value = if input.value.is_empty() { "-" } else { input.value.as_str() };
        let kind = match input.kind {
            InputKind::Number => " (number)",
            InputKind::Text => "",
        };
        out.push_str(&format!("{:<width$} : {}{}\n", input.label, value, kind, width = label_width));
    }

    let disabled = if view.submit.disabled { " (disabled)" } else { "" };
    out.push_str(&format!("\n[ {} ]{}\n", view.submit.label, disabled));

    if let Some(error) = &view.error_panel {
        out.push_str(&format!("\n!! {} !!\n", error));
    }

    if let Some(panel) = &view.result_panel {
        out.push_str("\nYour predicted toy price is:\n");
        out.push_str(&format!("{}\n\n", panel.price_text));
        out.push_str(&render_chart(&panel.chart));
    }

    out
}

/// One horizontal bar scaled to its own value, so any positive price fills
/// the full width and zero draws nothing.
pub fn render_chart(series: &ChartSeries) -> String {
    let value = series.value();
    let filled = if value > 0.0 { BAR_WIDTH } else { 0 };

    format!(
        "{}\n{} | {}{} {}\n",
        series.dataset_label,
        series.category_label,
        "█".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        value
    )
}
