use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use critvar_cli::config::Settings;
use critvar_ingest::load_dataset;
use critvar_map::SearchEngine;
use critvar_model::MatchOptions;
use critvar_report::AnalysisReport;
use critvar_standards::{VariableStore, parse_synonym_list};

use crate::cli::{AnalyzeArgs, OutputFormatArg, VariablesCommand};
use crate::summary::{render_analysis, render_catalog, render_variable};

pub fn run_analyze(args: &AnalyzeArgs, settings: &Settings) -> Result<()> {
    let span = info_span!("analyze", file = %args.file.display());
    let _guard = span.enter();

    let profile = load_dataset(&args.file)
        .with_context(|| format!("load dataset {}", args.file.display()))?;
    let store = VariableStore::open(&settings.variables_file).context("open variable store")?;
    let engine = SearchEngine::new(MatchOptions::new(settings.threshold));
    let outcome = engine.analyze(store.catalog(), &profile.columns);
    let report = AnalysisReport::new(profile, outcome);

    let rendered = match args.format {
        OutputFormatArg::Table => render_analysis(&report),
        OutputFormatArg::Json => report.to_json()?,
        OutputFormatArg::Csv => report.to_csv()?,
    };
    emit(&rendered, args.output.as_deref())
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("write report {}", path.display()))?;
            info!(path = %path.display(), "report written");
            println!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

pub fn run_variables(command: &VariablesCommand, settings: &Settings) -> Result<()> {
    let span = info_span!("variables", file = %settings.variables_file.display());
    let _guard = span.enter();

    let mut store = VariableStore::open(&settings.variables_file).context("open variable store")?;
    match command {
        VariablesCommand::List => {
            println!("{}", render_catalog(store.list()));
            println!("{} variable(s) in {}", store.count(), store.path().display());
        }
        VariablesCommand::Show { name } => {
            let definition = store
                .get(name)
                .with_context(|| format!("variable not found: {name}"))?;
            print!("{}", render_variable(definition));
        }
        VariablesCommand::Add { name, synonyms } => {
            let definition = store.create(name, parse_synonym_list(synonyms))?;
            println!(
                "Added '{}' with {} synonym(s)",
                definition.key,
                definition.synonyms.len()
            );
        }
        VariablesCommand::Update { name, synonyms } => {
            let definition = store.update(name, parse_synonym_list(synonyms))?;
            println!(
                "Updated '{}' with {} synonym(s)",
                definition.key,
                definition.synonyms.len()
            );
        }
        VariablesCommand::Remove { name } => {
            let removed = store.delete(name)?;
            println!("Removed '{}'", removed.key);
        }
        VariablesCommand::Reset => {
            store.reset()?;
            println!("Restored {} default variable(s)", store.count());
        }
        VariablesCommand::AddSynonym { name, synonym } => {
            if store.add_synonym(name, synonym)? {
                println!("Added synonym '{}' to '{}'", synonym.trim(), name);
            } else {
                println!("Synonym '{}' already present in '{}'", synonym.trim(), name);
            }
        }
        VariablesCommand::RemoveSynonym { name, synonym } => {
            store.remove_synonym(name, synonym)?;
            println!("Removed synonym '{}' from '{}'", synonym.trim(), name);
        }
    }
    Ok(())
}
