mod keywords;
mod prompt;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

use packpal_core::{Catalog, Checklist, DEFAULT_OUTPUT_FILE, FileSink, PackingEngine, Vocabulary};

#[derive(Debug, Parser)]
#[command(name = "packpal", version)]
#[command(about = "Turn a trip description (emoji or words plus days) into a packing checklist")]
struct Args {
    /// Trip description, e.g. `🏖️ 📸 3d` or `hiking ❄️ 4d`. Prompts when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    description: Vec<String>,

    /// Path the report is saved to (overwritten on every run)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// List every known activity and climate keyword and exit
    #[arg(long)]
    list_keywords: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = io::stdout().lock();

    if args.list_keywords {
        keywords::write_keywords(
            &mut stdout,
            Catalog::default_catalog(),
            Vocabulary::default_vocabulary(),
        )?;
        return Ok(());
    }

    let raw = resolve_description(&args.description, &mut stdout)?;
    let engine = PackingEngine::new(FileSink::new(&args.output));
    let checklist = engine.run(&raw, Local::now().naive_local());
    write_checklist(&mut stdout, &checklist)?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Joined command-line words, or one interactive line when there are none.
fn resolve_description(words: &[String], out: &mut impl Write) -> Result<String> {
    let joined = words.join(" ");
    let joined = joined.trim();
    if !joined.is_empty() {
        return Ok(joined.to_string());
    }
    let stdin = io::stdin();
    prompt::read_description(&mut stdin.lock(), out)
}

/// Echo the report surrounded by blank lines, then the save confirmation.
fn write_checklist(out: &mut impl Write, checklist: &Checklist) -> Result<()> {
    writeln!(out, "\n{}\n", checklist.report).context("failed to write report")?;
    if let Some(path) = checklist.saved.saved_path() {
        writeln!(out, "Saved to: {}", path.display().to_string().green())
            .context("failed to write save confirmation")?;
    }
    Ok(())
}
