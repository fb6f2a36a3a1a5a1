use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span, warn};

use vforge_cli::manifest::ManifestBuilder;
use vforge_cli::summary::{print_expansion, print_fixes, print_report, print_variants};
use vforge_cli::{MANIFEST_FILE, SAVED_SPEC_FILE};
use vforge_expand::{
    ExpandOptions, ExpansionOutcome, ExpansionSummary, Rejection, expand, render_preview,
    select_combination,
};
use vforge_model::{Combination, ComponentSpec, templates};
use vforge_persist::{JsonFileStore, PersistenceError, load_spec, save_spec};
use vforge_validate::{apply_auto_fixes, validate};

use crate::cli::{GenerateArgs, InitArgs, PreviewArgs, SpecArg, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<i32> {
    let path = &args.input.spec;
    let spec = read_spec(path)?;
    let _span = info_span!("validate", component = %spec.name).entered();
    let mut report = validate(&spec);

    if args.fix && !report.auto_fixes.is_empty() {
        let fixes = report.auto_fixes.clone();
        let fixed = apply_auto_fixes(&spec, &fixes);
        let destination = args.output.as_deref().unwrap_or(path);
        save_spec(&fixed, destination).map_err(persistence_error)?;
        info!(fixes = fixes.len(), path = %destination.display(), "applied auto-fixes");
        report = validate(&fixed);
        if !args.json {
            print_fixes(&fixes, &destination.display().to_string());
            println!();
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        print_report(&spec.name, &report);
    }
    Ok(if report.has_errors() { 1 } else { 0 })
}

pub fn run_variants(args: &SpecArg) -> Result<i32> {
    let spec = read_spec(&args.spec)?;
    print_variants(&spec);
    Ok(0)
}

pub fn run_preview(args: &PreviewArgs) -> Result<i32> {
    let spec = read_spec(&args.input.spec)?;
    let picks = Combination::from_pairs(args.picks.iter().cloned());
    let combination = select_combination(&spec, &picks)?;
    let preview = render_preview(&spec, &combination);
    for skipped in &preview.skipped_bindings {
        warn!("{skipped}");
    }
    let json = serde_json::to_string_pretty(&preview).context("serialize preview")?;
    println!("{json}");
    Ok(0)
}

pub fn run_generate(args: &GenerateArgs) -> Result<i32> {
    let spec = read_spec(&args.input.spec)?;
    let manifest_path = args.out.join(MANIFEST_FILE);
    let mut builder = ManifestBuilder::open(&manifest_path)?;
    if !args.fonts.is_empty() {
        builder = builder.with_available_families(args.fonts.iter().cloned());
    }
    let store = JsonFileStore::new(args.out.join(SAVED_SPEC_FILE));

    let mut options = ExpandOptions::default();
    if args.confirm {
        options = options.confirmed();
    }
    if args.no_save {
        options = options.without_save();
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let outcome = runtime.block_on(expand(&spec, &mut builder, &store, options));

    match outcome {
        ExpansionOutcome::ValidatedOk(summary) => {
            finish_generate(&builder, &manifest_path, &summary, 0)?;
            Ok(0)
        }
        ExpansionOutcome::ValidatedWithWarnings { summary, warnings } => {
            finish_generate(&builder, &manifest_path, &summary, warnings.len())?;
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
            Ok(0)
        }
        ExpansionOutcome::Rejected(rejection) => {
            report_rejection(&spec, &rejection);
            // Nodes built before a failure stay in the manifest.
            if matches!(
                rejection,
                Rejection::BuildFailed { .. } | Rejection::HostFailed { .. }
            ) {
                builder.write(&manifest_path)?;
            }
            Ok(1)
        }
    }
}

pub fn run_init(args: &InitArgs) -> Result<i32> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }
    let spec = templates::by_name(args.template.as_str(), args.name.as_deref())?;
    save_spec(&spec, &args.path).map_err(persistence_error)?;
    println!(
        "Created {} from the {} template ({} combination(s))",
        args.path.display(),
        args.template.as_str(),
        vforge_core::combination_count(&spec.variants)
    );
    Ok(0)
}

fn finish_generate<N>(
    builder: &ManifestBuilder,
    manifest_path: &Path,
    summary: &ExpansionSummary<N>,
    warnings: usize,
) -> Result<()> {
    let written = builder.write(manifest_path)?;
    print_expansion(summary, warnings, &written.display().to_string());
    Ok(())
}

fn report_rejection(spec: &ComponentSpec, rejection: &Rejection) {
    match rejection {
        Rejection::Invalid { report } => print_report(&spec.name, report),
        Rejection::NeedsConfirmation { .. } => {
            eprintln!("error: {rejection}");
            eprintln!("hint: re-run with --confirm to build every combination");
        }
        Rejection::BuildFailed { error, .. } | Rejection::HostFailed { error, .. } => {
            eprintln!("error: {rejection}: {error}");
        }
    }
}

fn read_spec(path: &Path) -> Result<ComponentSpec> {
    match load_spec(path) {
        Ok(Some(spec)) => Ok(spec),
        Ok(None) => bail!("specification not found: {}", path.display()),
        Err(error) => Err(persistence_error(error)),
    }
}

fn persistence_error(error: PersistenceError) -> anyhow::Error {
    match error.suggestion() {
        Some(hint) => anyhow!("{}\nhint: {hint}", error.user_message()),
        None => anyhow!(error.user_message()),
    }
}
