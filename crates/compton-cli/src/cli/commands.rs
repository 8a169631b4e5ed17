use super::CliError;
use super::helpers::*;
use compton_core::common::elements::element_symbol;
use compton_core::common::subshell::SubshellType;
use compton_core::domain::{ComptonError, ExecutionMode};
use compton_core::profiles::{
    ComptonProfileSubshellConverter, FullProfileOptions, MomentumUnits, OccupationNumberEvaluator,
    OccupationNumberRow, TABLE_DIR_ENV, convert_to_mec_units, default_generator_with_config,
    full_profile_from_half,
};
use compton_core::serialization::{render_half_profile_table, render_occupation_table};
use compton_core::verification::{VerificationConfig, render_human_summary, run_verification};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum OutputFormat {
    Json,
    Table,
}

#[derive(clap::Args)]
pub(super) struct GenerateArgs {
    /// Atomic number or element symbol
    #[arg(long)]
    z: String,

    /// Directory of zNNN.json profile tables
    #[arg(long, env = TABLE_DIR_ENV)]
    table_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct LayoutArgs {
    /// Atomic number or element symbol
    #[arg(long)]
    z: String,

    /// Print only the shell index serving this subshell label (e.g. L3)
    #[arg(long)]
    subshell: Option<String>,
}

#[derive(clap::Args)]
pub(super) struct OccupationArgs {
    /// Atomic number or element symbol
    #[arg(long)]
    z: String,

    /// Zero-based Compton shell index
    #[arg(long)]
    shell: usize,

    /// Directory of zNNN.json profile tables
    #[arg(long, env = TABLE_DIR_ENV)]
    table_dir: Option<PathBuf>,

    /// Report momentum in m_e c instead of atomic units
    #[arg(long)]
    mec_units: bool,

    /// Scale the full profile to unit area before integrating
    #[arg(long)]
    renormalize: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct VerifyArgs {
    /// Reference file; the bundled reference when omitted
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Directory of zNNN.json profile tables
    #[arg(long, env = TABLE_DIR_ENV)]
    table_dir: Option<PathBuf>,

    /// First atomic number to verify
    #[arg(long = "from", default_value = "1")]
    first: String,

    /// Last atomic number to verify
    #[arg(long = "to", default_value = "100")]
    last: String,

    /// Verify elements on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Absolute tolerance for front/back comparisons
    #[arg(long)]
    abs_tol: Option<f64>,

    /// Relative tolerance for front/back comparisons
    #[arg(long)]
    rel_tol: Option<f64>,

    /// JSON report output path
    #[arg(long)]
    report: Option<PathBuf>,
}

impl VerifyArgs {
    fn into_config(self) -> Result<(VerificationConfig, Option<PathBuf>), CliError> {
        let config = VerificationConfig {
            first: resolve_atomic_number(&self.first)?,
            last: resolve_atomic_number(&self.last)?,
            mode: if self.parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Serial
            },
            reference_path: self.reference,
            tolerance: resolve_tolerance(self.abs_tol, self.rel_tol)?,
            report_path: self.report,
        };
        Ok((config, self.table_dir))
    }
}

pub(super) fn run_generate_command(args: GenerateArgs) -> Result<i32, CliError> {
    let atomic_number = resolve_atomic_number(&args.z)?;
    let config = generator_config(args.table_dir);
    let set = default_generator_with_config(atomic_number, &config)?.generate_half_profiles()?;

    let content = match args.format {
        OutputFormat::Json => to_pretty_json(&set)?,
        OutputFormat::Table => render_half_profile_table(&set),
    };
    emit_output(args.output.as_deref(), &content)?;
    Ok(0)
}

pub(super) fn run_layout_command(args: LayoutArgs) -> Result<i32, CliError> {
    let atomic_number = resolve_atomic_number(&args.z)?;
    let converter = ComptonProfileSubshellConverter::for_atomic_number(atomic_number);

    if let Some(label) = args.subshell.as_deref() {
        let subshell = SubshellType::from_label(label).ok_or_else(|| {
            CliError::Compute(ComptonError::input_validation(
                "INPUT.SUBSHELL",
                format!("unknown subshell label '{}'", label),
            ))
        })?;
        println!("{}", converter.convert_subshell_to_index(subshell)?);
        return Ok(0);
    }

    println!(
        "Z={} ({}): {} Compton shells",
        atomic_number,
        element_symbol(atomic_number),
        converter.shells().len()
    );
    for (index, shell) in converter.shells().iter().enumerate() {
        let subshells = shell
            .subshells
            .iter()
            .map(|subshell| format!("{}({})", subshell.label(), subshell.endf_designator()))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:>3}  {:<8}{}", index, shell.label(), subshells);
    }
    Ok(0)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OccupationOutput<'a> {
    atomic_number: u8,
    shell: String,
    units: MomentumUnits,
    rows: &'a [OccupationNumberRow],
}

pub(super) fn run_occupation_command(args: OccupationArgs) -> Result<i32, CliError> {
    let atomic_number = resolve_atomic_number(&args.z)?;
    let config = generator_config(args.table_dir);
    let set = default_generator_with_config(atomic_number, &config)?.generate_half_profiles()?;
    let half = set.profile(args.shell).ok_or_else(|| {
        CliError::Compute(ComptonError::input_validation(
            "INPUT.CLI_SHELL",
            format!(
                "shell index {} is outside the {} shells of Z={}",
                args.shell,
                set.shell_count(),
                atomic_number
            ),
        ))
    })?;

    let options = FullProfileOptions {
        renormalize: args.renormalize,
        ..FullProfileOptions::default()
    };
    let mut full = full_profile_from_half(&set.momentum_grid, &half.values, options)?;
    if args.mec_units {
        full = convert_to_mec_units(&full);
    }

    let evaluator = OccupationNumberEvaluator::new(full.momentum_grid.clone(), full.values.clone())?;
    let rows = evaluator.occupation_number_table(&full.momentum_grid);

    let content = match args.format {
        OutputFormat::Json => to_pretty_json(&OccupationOutput {
            atomic_number: atomic_number.get(),
            shell: half.shell.label(),
            units: full.units,
            rows: &rows,
        })?,
        OutputFormat::Table => render_occupation_table(&rows),
    };
    emit_output(args.output.as_deref(), &content)?;
    Ok(0)
}

pub(super) fn run_verify_command(args: VerifyArgs) -> Result<i32, CliError> {
    let (config, table_dir) = args.into_config()?;
    let profile_config = generator_config(table_dir);
    let report = run_verification(&config, |atomic_number| {
        default_generator_with_config(atomic_number, &profile_config)
    })?;

    println!("{}", render_human_summary(&report));
    if let Some(report_path) = config.report_path.as_deref() {
        println!("JSON report: {}", report_path.display());
    }

    if report.passed { Ok(0) } else { Ok(1) }
}
