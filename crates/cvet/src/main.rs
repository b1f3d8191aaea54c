use std::fs;
use std::path::PathBuf;
use std::process;

use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::Parser;
use indexmap::IndexMap;

use cvet_analyzer::{Analyzer, SourceFile, BUILTIN_RULE_IDS};
use cvet_common::{config, Issue};

/// cvet static analyzer.
///
/// Analyzes a single C translation unit for suspicious patterns.
#[derive(Parser)]
#[command(
    name = "cvet",
    version,
    about,
    long_about = "cvet static analyzer.\n\nWalks the syntax tree of one C translation unit and reports suspicious\npatterns: unused variables, parameters and functions, uninitialized reads,\nconstant branch conditions, empty control bodies, and switch cases that\nfall through.\n\nExamples:\n  cvet main.c                   Analyze and print a report\n  cvet main.c --json out.json   Also write a machine-readable report\n  cvet main.c --emit-json       Print the JSON report to stdout"
)]
struct Cli {
    /// Input .c source file.
    input: PathBuf,

    /// Write the JSON report to this path.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the JSON report to stdout instead of the pretty report.
    #[arg(long = "emit-json")]
    emit_json: bool,

    /// Dump the adapted syntax tree to stdout and exit (debug).
    #[arg(long = "emit-ast")]
    emit_ast: bool,

    /// Suppress the per-rule summary.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Read source file
    let source = match fs::read_to_string(&cli.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: could not read '{}': {}", cli.input.display(), e);
            process::exit(1);
        }
    };

    let file_name = cli
        .input
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    // === Configuration ===
    // Find and load Cvet.toml from the source file's directory (walks up).
    let abs_input = fs::canonicalize(&cli.input).unwrap_or_else(|_| cli.input.clone());
    let disabled: Vec<String> = match config::find_and_load_config(&abs_input, &BUILTIN_RULE_IDS) {
        Ok(cfg) => cfg.rules.disabled,
        Err(config::ConfigError::NotFound(_)) => {
            // No Cvet.toml anywhere up the tree: every rule stays enabled.
            Vec::new()
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // === Parse (external AST provider) ===
    let file = match SourceFile::parse(&source) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if cli.emit_ast {
        println!("{:#?}", file.root);
        return;
    }

    // === Analysis ===
    let mut analyzer = Analyzer::new();
    for rule in cvet_analyzer::default_rules() {
        if !disabled.iter().any(|id| id == rule.rule_id()) {
            analyzer.register(rule);
        }
    }
    let issues = analyzer.analyze(&file.root);

    // === Report ===
    let json = match serde_json::to_string_pretty(&issues) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("error: failed to serialize report: {}", e);
            process::exit(1);
        }
    };

    if cli.emit_json {
        println!("{}", json);
        return;
    }

    for issue in &issues {
        print_issue(issue, &source, &file_name);
    }

    if issues.is_empty() {
        println!("No issues found.");
    } else {
        println!("Issues found ({}):", issues.len());
        for issue in &issues {
            println!("  {}", issue);
        }
    }

    if !cli.quiet && !issues.is_empty() {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for issue in &issues {
            *counts.entry(issue.rule_id.as_str()).or_insert(0) += 1;
        }
        println!();
        println!("Summary by rule:");
        for (rule, count) in &counts {
            println!("  {}: {}", rule, count);
        }
    }

    if let Some(path) = cli.json {
        match fs::write(&path, &json) {
            Ok(()) => println!("Report written to {}", path.display()),
            Err(e) => {
                eprintln!("error: could not write '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    }
}

fn print_issue(issue: &Issue, source: &str, file_name: &str) {
    let offset = offset_of(source, issue.line, issue.column);

    Report::build(ReportKind::Warning, file_name, offset)
        .with_message(format!("[{}] {}", issue.rule_id, issue.message))
        .with_label(
            Label::new((file_name, offset..offset + 1))
                .with_message(&issue.message)
                .with_color(Color::Yellow),
        )
        .finish()
        .eprint((file_name, Source::from(source)))
        .unwrap();
}

/// Byte offset of a 1-based line/column pair, clamped to the source.
fn offset_of(source: &str, line: u32, column: u32) -> usize {
    let mut offset = 0usize;
    let mut remaining = line.saturating_sub(1);
    for chunk in source.split_inclusive('\n') {
        if remaining == 0 {
            let col = column.saturating_sub(1) as usize;
            return offset + col.min(chunk.len().saturating_sub(1));
        }
        offset += chunk.len();
        remaining -= 1;
    }
    source.len().saturating_sub(1)
}
