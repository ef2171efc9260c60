//! docfill CLI - DOCX template filling tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docfill::{
    builtin_fonts, load_docx, save_docx, write_font_demo, DocumentSummary, FillConfig, FillReport,
    FontCatalog, TemplateFiller, DEFAULT_FALLBACK_FONT,
};

#[derive(Parser)]
#[command(name = "docfill")]
#[command(version)]
#[command(about = "Fill DOCX template placeholders with formatted values", long_about = None)]
struct Cli {
    /// Input template DOCX
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill template placeholders and write the result
    Fill {
        /// Input template DOCX
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = "certificate_formatted.docx")]
        output: PathBuf,

        /// Recipient name
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        /// Company name
        #[arg(long, value_name = "COMPANY")]
        company: Option<String>,

        /// Date line
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Full fill configuration as a JSON file
        #[arg(long, value_name = "FILE", env = "DOCFILL_CONFIG")]
        config: Option<PathBuf>,

        /// Dump document content before filling
        #[arg(long)]
        show_content: bool,
    },

    /// Show the texts of a document's paragraphs and tables
    Inspect {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Report font availability for a list of font names
    Fonts {
        /// Font names to probe (a default list is used when omitted)
        #[arg(value_name = "NAME")]
        names: Vec<String>,

        /// How many system fonts to list
        #[arg(long, default_value = "15")]
        limit: usize,
    },

    /// Check a single font and show its safe resolution
    CheckFont {
        /// Font name to check
        #[arg(value_name = "NAME")]
        name: String,

        /// Fallback font
        #[arg(long, default_value = DEFAULT_FALLBACK_FONT)]
        fallback: String,
    },

    /// Write a demo document showing sample fonts
    Demo {
        /// Output file
        #[arg(value_name = "OUTPUT", default_value = "font_demo_output.docx")]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Fill {
            input,
            output,
            name,
            company,
            date,
            config,
            show_content,
        }) => cmd_fill(
            &input,
            &output,
            name,
            company,
            date,
            config.as_deref(),
            show_content,
        ),
        Some(Commands::Inspect {
            input,
            json,
            compact,
        }) => cmd_inspect(&input, json, compact),
        Some(Commands::Fonts { names, limit }) => cmd_fonts(&names, limit),
        Some(Commands::CheckFont { name, fallback }) => cmd_check_font(&name, &fallback),
        Some(Commands::Demo { output }) => cmd_demo(&output),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: fill if input is provided
            if let Some(input) = cli.input {
                let output = cli
                    .output
                    .unwrap_or_else(|| PathBuf::from("certificate_formatted.docx"));
                cmd_fill(&input, &output, None, None, None, None, false)
            } else {
                println!("{}", "Usage: docfill <FILE> [OUTPUT]".yellow());
                println!("       docfill --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_fill(
    input: &Path,
    output: &Path,
    name: Option<String>,
    company: Option<String>,
    date: Option<String>,
    config_path: Option<&Path>,
    show_content: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => {
            log::debug!("loading fill configuration from {}", path.display());
            FillConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => FillConfig::default(),
    };
    if let Some(name) = name {
        config = config.with_name(name);
    }
    if let Some(company) = company {
        config = config.with_company(company);
    }
    if let Some(date) = date {
        config = config.with_date(date);
    }

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Loading template...");
    let mut docx = load_docx(input)?;
    pb.inc(1);

    if show_content {
        pb.suspend(|| print_summary(&DocumentSummary::scan(&docx)));
    }

    pb.set_message("Replacing placeholders...");
    let filler = TemplateFiller::new(config);
    let report = filler.fill(&mut docx);
    pb.inc(1);

    pb.set_message("Saving document...");
    save_docx(docx, output)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    print_report(&report, output);
    Ok(())
}

fn print_report(report: &FillReport, output: &Path) {
    if report.is_empty() {
        println!(
            "\n{}",
            "No placeholders found in the document.".yellow().bold()
        );
    }

    println!("\n{}", "Replacements:".green().bold());
    println!("  {} name: {}", "├─".dimmed(), report.name);
    println!("  {} company: {}", "├─".dimmed(), report.company);
    println!("  {} date: {}", "└─".dimmed(), report.date);
    println!(
        "\n{} {} ({} total)",
        "Saved to".green(),
        output.display(),
        report.total()
    );
}

fn cmd_inspect(input: &Path, json: bool, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let docx = load_docx(input)?;
    let summary = DocumentSummary::scan(&docx);

    if json || compact {
        println!("{}", summary.to_json(!compact)?);
        return Ok(());
    }

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &DocumentSummary) {
    println!("{}", "Document Content".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Paragraphs".bold(), summary.paragraph_count);
    println!("{}: {}", "Tables".bold(), summary.table_count);

    if !summary.paragraphs.is_empty() {
        println!();
        for p in &summary.paragraphs {
            println!("Paragraph {}: '{}'", p.index, p.text);
        }
    }

    for table in &summary.tables {
        println!();
        println!("Table {}:", table.index);
        for cell in &table.cells {
            println!("  Cell {},{}: '{}'", cell.row, cell.column, cell.text);
        }
    }

    if summary.is_empty() {
        println!("\n{}", "No text content found.".yellow());
    }
}

fn cmd_fonts(names: &[String], limit: usize) -> Result<(), Box<dyn std::error::Error>> {
    const PROBE_FONTS: &[&str] = &[
        "Arial",
        "Calibri",
        "Times New Roman",
        "Poppins",
        "Garet",
        "Comic Sans MS",
        "NonExistentFont",
    ];

    let system = FontCatalog::system();
    let probes: Vec<&str> = if names.is_empty() {
        PROBE_FONTS.to_vec()
    } else {
        names.iter().map(String::as_str).collect()
    };

    println!("{}", "Font Availability".cyan().bold());
    println!("{}", "─".repeat(50).dimmed());

    for name in &probes {
        let basic = docfill::is_available_basic(name);
        let advanced = system.contains(name);
        println!(
            "{:<20} | Basic: {} | System: {}",
            name,
            mark(basic),
            mark(advanced)
        );
    }

    println!();
    println!(
        "{}: {}",
        "Fonts in builtin list".bold(),
        builtin_fonts().len()
    );
    println!(
        "{}: {} ({})",
        "Fonts in system catalog".bold(),
        system.len(),
        system.source()
    );

    println!("\n{}", format!("First {} system fonts:", limit).bold());
    for (i, name) in system.names().take(limit).enumerate() {
        println!("  {:>2}. {}", i + 1, name);
    }

    Ok(())
}

fn mark(available: bool) -> colored::ColoredString {
    if available {
        "✓".green()
    } else {
        "✗".red()
    }
}

fn cmd_check_font(name: &str, fallback: &str) -> Result<(), Box<dyn std::error::Error>> {
    let system = FontCatalog::system();
    let resolved = system.resolve_safe(name, fallback);

    println!("{}: {}", "Font".bold(), name);
    println!(
        "{}: {}",
        "Builtin list".bold(),
        mark(docfill::is_available_basic(name))
    );
    println!("{}: {}", "System catalog".bold(), mark(system.contains(name)));

    if resolved == name {
        println!("{}: {}", "Resolved".bold(), resolved.green());
    } else {
        println!(
            "{}: {} {}",
            "Resolved".bold(),
            resolved.yellow(),
            "(fallback)".dimmed()
        );
    }

    Ok(())
}

fn cmd_demo(output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = FontCatalog::system();
    write_font_demo(output, &catalog)?;
    println!(
        "{} {}",
        "Font demo document saved as".green(),
        output.display()
    );
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docfill".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX template filling tool");
    println!();
    println!("License: MIT");
}
