//! Terminal rendering for reports and market briefs

use std::io::Write;

use tradeinsight_core::{MarketBrief, Report, ReportStatus};

/// Width of the widest chart bar, in glyphs
const BAR_WIDTH: usize = 30;

/// Status icon matching the report classification
pub fn status_icon(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Competitive => "✅",
        ReportStatus::NeedsImprovement => "📉",
        ReportStatus::Opportunity => "💡",
        ReportStatus::Info => "📊",
    }
}

/// Horizontal bar scaled against the chart maximum
pub fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round().max(0.0) as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

/// Group an integer with thousands separators (12345 → "12,345")
pub fn thousands(n: i64) -> String {
    let negative = n < 0;
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn render_brief<W: Write>(out: &mut W, brief: &MarketBrief) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📊 Market Brief: {}", brief.product)?;
    writeln!(out, "   ─────────────────────────────────────────")?;
    writeln!(out, "   Global Avg Price   ${:.2}/kg", brief.avg_price)?;
    writeln!(out, "   Dominant Origin    {}", brief.dominant_origin)?;
    writeln!(out, "   Market Trend       {} 🔼", brief.trend)?;
    writeln!(out)?;
    writeln!(
        out,
        "   🤖 Strategic Insight: {} supply currently leads this market and",
        brief.dominant_origin
    )?;
    writeln!(
        out,
        "   price volatility is widening. A positioning diagnostic based on"
    )?;
    writeln!(
        out,
        "   your actual trade terms (volume, unit price) is recommended."
    )?;
    Ok(())
}

pub fn render_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "✅ Diagnostic Report")?;
    writeln!(out, "   ─────────────────────────────────────────")?;
    writeln!(out, "   {} {}", status_icon(report.status), report.title)?;
    writeln!(out)?;
    writeln!(out, "   Insight: {}", report.summary)?;

    if let Some(impact) = report.impact {
        writeln!(out)?;
        writeln!(
            out,
            "   📉 Potential Savings: ${} / year",
            thousands(impact)
        )?;
    }

    render_chart(out, report)?;
    render_teaser(out, report)?;
    Ok(())
}

fn render_chart<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    let max = report
        .chart
        .iter()
        .map(|p| p.value)
        .fold(f64::MIN, f64::max);
    let label_width = report
        .chart
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(out)?;
    writeln!(out, "   📊 Positioning Chart")?;
    for point in &report.chart {
        writeln!(
            out,
            "   {:label_width$} │ {} ${:.2}",
            point.label,
            bar(point.value, max),
            point.value,
        )?;
    }
    Ok(())
}

fn render_teaser<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "   🔒 Premium Insight (Locked)")?;
    writeln!(out, "   • {}", report.teaser)?;
    writeln!(out, "   • Top 3 Recommended Suppliers: S******, M****, K********")?;
    writeln!(out, "   • Target Negotiation Price: $5.** / kg")?;
    Ok(())
}
