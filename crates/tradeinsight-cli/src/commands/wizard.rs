//! Interactive wizard command
//!
//! Drives a [`Session`] through its six steps over a line-oriented
//! reader/writer pair, so the flow is scriptable in tests. Malformed input
//! never aborts the run; the offending step simply re-prompts.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use tradeinsight_core::{
    generate, market, AnalysisCategory, Dataset, DetailForm, ScopeForm, Session, Step, StepInput,
    TradeMode,
};

use crate::render;

/// Cosmetic pause before the report, matching the original flow
const REPORT_DELAY: Duration = Duration::from_millis(1000);

pub fn cmd_wizard(dataset: &Dataset, no_delay: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_wizard(dataset, &mut input, &mut output, no_delay)
}

/// Run the wizard loop until the user declines a restart.
pub fn run_wizard<R: BufRead, W: Write>(
    dataset: &Dataset,
    input: &mut R,
    output: &mut W,
    no_delay: bool,
) -> Result<()> {
    let mut session = Session::new();

    writeln!(output, "🧀 Trade Insight")?;
    writeln!(output, "Global Trade Intelligence for Strategic Sourcing")?;

    loop {
        match session.step() {
            Step::Scope => {
                let form = collect_scope(dataset, input, output)?;
                submit(&mut session, StepInput::Scope(form), output)?;
            }
            Step::MarketBrief => {
                let product = session
                    .answers()
                    .scope
                    .as_ref()
                    .map(|s| s.product.clone())
                    .unwrap_or_default();
                let brief = market::MarketBrief::build(dataset, &product);
                render::render_brief(output, &brief)?;
                writeln!(output)?;
                write!(output, "👉 Press Enter to start the deep-dive: ")?;
                output.flush()?;
                read_line(input)?;
                submit(&mut session, StepInput::Continue, output)?;
            }
            Step::ModeSelect => {
                writeln!(output)?;
                writeln!(output, "2️⃣  Select your analysis goal")?;
                let choice = ask_select(
                    input,
                    output,
                    &["🚢 Import Optimization", "✈️ Export Expansion"],
                )?;
                let mode = if choice == 0 {
                    TradeMode::Import
                } else {
                    TradeMode::Export
                };
                submit(&mut session, StepInput::Mode(mode), output)?;
            }
            Step::CategorySelect => {
                let Some(mode) = session.answers().mode else {
                    bail!("mode missing at category step");
                };
                writeln!(output)?;
                writeln!(output, "3️⃣  Key {} issue to analyze", mode)?;
                let categories = AnalysisCategory::for_mode(mode);
                let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
                let choice = ask_select(input, output, &labels)?;
                submit(&mut session, StepInput::Category(categories[choice]), output)?;
            }
            Step::DetailInput => {
                let form = collect_detail(dataset, &session, input, output)?;
                submit(&mut session, StepInput::Detail(form), output)?;
            }
            Step::Report => {
                if !no_delay {
                    writeln!(output)?;
                    writeln!(output, "Analyzing market data...")?;
                    output.flush()?;
                    std::thread::sleep(REPORT_DELAY);
                }

                let request = session.analysis_request()?;
                let report = generate(dataset, &request);
                render::render_report(output, &report)?;

                writeln!(output)?;
                write!(output, "🔄 Start a new analysis? [y/N]: ")?;
                output.flush()?;
                match read_line(input) {
                    Ok(line) if line.trim().eq_ignore_ascii_case("y") => {
                        submit(&mut session, StepInput::Restart, output)?;
                    }
                    _ => break,
                }
            }
        }
    }

    Ok(())
}

/// Submit a step input, printing validation failures instead of propagating
/// them so the step re-prompts.
fn submit<W: Write>(session: &mut Session, input: StepInput, output: &mut W) -> Result<()> {
    if let Err(e) = session.submit(input) {
        writeln!(output, "⚠️  {}", e)?;
    }
    Ok(())
}

fn collect_scope<R: BufRead, W: Write>(
    dataset: &Dataset,
    input: &mut R,
    output: &mut W,
) -> Result<ScopeForm> {
    writeln!(output)?;
    writeln!(
        output,
        "💡 Enter an HS code and the market scan builds a global brief."
    )?;

    let hs_code = ask_text(input, output, "HS Code", Some("0406.10"))?;
    let product = ask_text(input, output, "Product Name", Some("Mozzarella Cheese"))?;

    writeln!(output, "   Known origins: {}", dataset.origins().join(", "))?;
    let target_origin = ask_optional(input, output, "Target origin (optional)")?;
    let exclude_origin = ask_optional(input, output, "Excluded origin (optional)")?;

    Ok(ScopeForm {
        hs_code,
        product,
        target_origin,
        exclude_origin,
    })
}

fn collect_detail<R: BufRead, W: Write>(
    dataset: &Dataset,
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> Result<DetailForm> {
    writeln!(output)?;
    writeln!(output, "4️⃣  Trade terms for the deep-dive")?;

    let default_origin = session
        .answers()
        .scope
        .as_ref()
        .and_then(|s| s.target_origin.clone())
        .or_else(|| market::most_common_origin(dataset));

    let origin = ask_text(input, output, "Origin to analyze", default_origin.as_deref())?;
    let volume = ask_number(input, output, "Annual volume (tons)", 10.0)?;
    let price = ask_number(input, output, "Unit price ($/kg)", 6.5)?;

    Ok(DetailForm {
        origin,
        volume,
        price,
    })
}

/// Read one line, failing when the input ends mid-wizard
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended before the wizard completed");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt for text; an empty answer takes the default when one exists,
/// otherwise re-prompts.
fn ask_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: Option<&str>,
) -> Result<String> {
    loop {
        match default {
            Some(d) => write!(output, "{} [{}]: ", prompt, d)?,
            None => write!(output, "{}: ", prompt)?,
        }
        output.flush()?;
        let line = read_line(input)?;
        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        if let Some(d) = default {
            return Ok(d.to_string());
        }
        writeln!(output, "⚠️  A value is required.")?;
    }
}

/// Prompt for optional text; empty means none
fn ask_optional<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}: ", prompt)?;
    output.flush()?;
    let line = read_line(input)?;
    let answer = line.trim();
    Ok(if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    })
}

/// Prompt for a number until one parses
fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: f64,
) -> Result<f64> {
    loop {
        write!(output, "{} [{}]: ", prompt, default)?;
        output.flush()?;
        let line = read_line(input)?;
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "⚠️  Not a number: {}", answer)?,
        }
    }
}

/// Numbered menu; loops until a valid 1-based choice arrives. Returns the
/// zero-based index.
fn ask_select<R: BufRead, W: Write, S: AsRef<str>>(
    input: &mut R,
    output: &mut W,
    options: &[S],
) -> Result<usize> {
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "   {}. {}", i + 1, option.as_ref())?;
    }
    loop {
        write!(output, "Choice [1-{}]: ", options.len())?;
        output.flush()?;
        let line = read_line(input)?;
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            _ => writeln!(output, "⚠️  Enter a number between 1 and {}.", options.len())?,
        }
    }
}
