use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use dctap_cli::pipeline::{read_profile, resolve_config, warnings_enabled, write_default_config};
use dctap_ingest::IngestOptions;
use dctap_model::{ConstraintType, Severity, count_severity};
use dctap_output::{OutputFormat, OutputOptions, render, render_warnings};
use dctap_standards::registry;

use crate::cli::{InitArgs, ReadArgs};

/// What `read` found, for the exit code.
#[derive(Debug, Clone, Copy)]
pub struct ReadOutcome {
    pub warnings: usize,
    pub notices: usize,
}

impl ReadOutcome {
    pub fn total(&self) -> usize {
        self.warnings + self.notices
    }
}

pub fn run_read(args: &ReadArgs) -> Result<ReadOutcome> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let config = resolve_config(args.config.as_deref(), &cwd)?;
    let ingest = IngestOptions {
        delimiter: args.delimiter,
    };
    let profile = read_profile(&args.file, &config, &ingest)?;

    let format = OutputFormat::from(args.format);
    let options = OutputOptions::default().with_warnings(args.embed_warnings);
    let rendered = render(&profile, format, &options).context("render profile")?;
    print!("{rendered}");

    if warnings_enabled(&config, format, args.warnings) && profile.has_warnings() {
        eprint!("{}", render_warnings(&profile.warnings));
    }

    Ok(ReadOutcome {
        warnings: count_severity(&profile.warnings, Severity::Warning),
        notices: count_severity(&profile.warnings, Severity::Notice),
    })
}

pub fn run_elements() {
    let mut elements = Table::new();
    elements.set_header(vec!["Element", "Scope", "Kind", "Description"]);
    apply_table_style(&mut elements);
    for element in registry().elements() {
        elements.add_row(vec![
            element.name.to_string(),
            element.scope.to_string(),
            element.kind.to_string(),
            element.description.to_string(),
        ]);
    }
    println!("{elements}");

    let mut constraints = Table::new();
    constraints.set_header(vec!["valueConstraintType", "valueConstraint"]);
    apply_table_style(&mut constraints);
    for constraint_type in ConstraintType::ALL {
        constraints.add_row(vec![
            constraint_type.as_str().to_string(),
            constraint_type.description().to_string(),
        ]);
    }
    println!("{constraints}");
}

pub fn run_init(args: &InitArgs) -> Result<PathBuf> {
    write_default_config(&args.output, args.force)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}
