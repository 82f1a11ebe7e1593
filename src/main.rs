use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use mednlp::{
    AnnotatedDocument, Annotator, EntityRow, MarkupStyle, MednlpConfig, Sample, TABLE_COLUMNS,
};
use tracing_subscriber::EnvFilter;

const NO_ENTITIES: &str = "No medical entities found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Markup,
}

#[derive(Debug, Parser)]
#[command(name = "mednlp", version, about = "Annotate medical entities in clinical text")]
struct Args {
    /// Text to annotate.
    #[arg(long, conflicts_with_all = ["input", "sample"])]
    text: Option<String>,

    /// Read the text from a file (`-` for stdin).
    #[arg(long, conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Annotate one of the bundled demo texts (1-3).
    #[arg(long)]
    sample: Option<Sample>,

    /// JSON lexicon file replacing the configured or built-in dictionary.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Markup style, overriding the configured one.
    #[arg(long)]
    markup: Option<MarkupStyle>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let output = run(&args, io::stdin().lock())?;
    println!("{output}");

    Ok(())
}

/// Annotates the selected input and renders it in the requested format.
fn run(args: &Args, stdin: impl Read) -> Result<String> {
    let mut config = match &args.config {
        Some(path) => MednlpConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MednlpConfig::default(),
    };
    if let Some(style) = args.markup {
        config.annotate.markup = style;
    }
    if let Some(path) = &args.lexicon {
        config.lexicon.path = Some(path.clone());
    }

    let annotator = Annotator::from_config(&config)?;

    let text = read_text(args, stdin)?;
    let doc = annotator.annotate(&text)?;
    tracing::info!(entities = doc.total_entities(), "annotation complete");

    render(&doc, args.format)
}

/// `stdin` is only read for `--input -`.
fn read_text(args: &Args, mut stdin: impl Read) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(sample) = args.sample {
        return Ok(sample.text().to_string());
    }
    match &args.input {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("reading standard input")?;
            Ok(buf)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => bail!("one of --text, --input or --sample is required"),
    }
}

fn render(doc: &AnnotatedDocument, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(doc)?,
        OutputFormat::Markup => doc.markup.clone(),
        OutputFormat::Table => render_table(doc),
    })
}

fn render_table(doc: &AnnotatedDocument) -> String {
    if doc.rows.is_empty() {
        return NO_ENTITIES.to_string();
    }

    let mut widths = TABLE_COLUMNS.map(str::len);
    for row in &doc.rows {
        for (width, cell) in widths.iter_mut().zip(row_cells(row).iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(doc.rows.len() + doc.summary.len() + 4);
    let header: Vec<String> = TABLE_COLUMNS.iter().map(|c| c.to_string()).collect();
    lines.push(format_row(&header, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(format_row(&rule, &widths));
    for row in &doc.rows {
        lines.push(format_row(&row_cells(row), &widths));
    }

    lines.push(String::new());
    for (category, count) in &doc.summary {
        lines.push(format!("{category}: {count}"));
    }
    lines.push(format!("Total: {}", doc.total_entities()));

    lines.join("\n")
}

fn row_cells(row: &EntityRow) -> [String; 4] {
    [
        row.entity.clone(),
        row.entity_type.to_string(),
        row.confidence.clone(),
        row.position.clone(),
    ]
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    line.join("  ").trim_end().to_string()
}
