//! Argument parsing and command execution.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use cardbridge_core::config::Settings;
use cardbridge_format::convert;
use cardbridge_format::mapping::ColumnMapping;
use cardbridge_format::split::SplitPolicy;
use cardbridge_format::vcard::VCardVersion;

use crate::archive;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a tabular contact export to a vCard file.
    CsvToVcf(CsvToVcfArgs),
    /// Convert a vCard file to a tabular contact export.
    VcfToCsv(VcfToCsvArgs),
    /// Split a vCard file into a zip archive of bounded parts.
    Split(SplitArgs),
    /// Parse a vCard file and print the first contacts as JSON.
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct CsvToVcfArgs {
    /// Input file.
    pub input: PathBuf,

    /// Output file; defaults to `<input stem>_converted.vcf`.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Target vCard version (2.1, 3.0, or 4.0); defaults to the
    /// configured version.
    #[arg(long)]
    pub vcard_version: Option<VCardVersion>,

    /// JSON file mapping contact fields to column headers, e.g.
    /// `{"firstName": "Given Name"}`. Columns are auto-mapped when
    /// omitted.
    #[arg(long)]
    pub mapping: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct VcfToCsvArgs {
    /// Input file.
    pub input: PathBuf,

    /// Output file; defaults to `<input stem>_converted.csv`.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input file.
    pub input: PathBuf,

    /// Output archive; defaults to `split_contacts.zip` next to the
    /// input.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Maximum contacts per part.
    #[arg(long, conflicts_with = "files")]
    pub per_file: Option<usize>,

    /// Number of parts to create.
    #[arg(long)]
    pub files: Option<usize>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input file.
    pub input: PathBuf,

    /// Maximum number of contacts to show.
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}

/// Executes the parsed command against the loaded settings.
///
/// ## Errors
/// Returns an error when input cannot be read, conversion fails, or the
/// output cannot be written.
pub fn run(cli: Cli, settings: &Settings) -> anyhow::Result<()> {
    match cli.command {
        Command::CsvToVcf(args) => csv_to_vcf(&args, settings),
        Command::VcfToCsv(args) => vcf_to_csv(&args),
        Command::Split(args) => split(&args, settings),
        Command::Preview(args) => preview(&args),
    }
}

fn csv_to_vcf(args: &CsvToVcfArgs, settings: &Settings) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;

    let mapping = match &args.mapping {
        Some(path) => Some(load_mapping(path)?),
        None => None,
    };
    let version = match args.vcard_version {
        Some(version) => version,
        None => settings.output.version.parse()?,
    };

    let vcf = convert::tabular_to_vcard(&text, mapping.as_ref(), version)?;
    let out = output_path(args.out.as_deref(), &args.input, "vcf");
    fs::write(&out, vcf).with_context(|| format!("write output: {}", out.display()))?;

    tracing::info!(path = %out.display(), "Wrote vCard output");
    Ok(())
}

fn vcf_to_csv(args: &VcfToCsvArgs) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;

    let csv = convert::vcard_to_tabular(&text)?;
    let out = output_path(args.out.as_deref(), &args.input, "csv");
    fs::write(&out, csv).with_context(|| format!("write output: {}", out.display()))?;

    tracing::info!(path = %out.display(), "Wrote tabular output");
    Ok(())
}

fn split(args: &SplitArgs, settings: &Settings) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;
    let policy = resolve_policy(args.per_file, args.files, settings.output.split);

    let parts = convert::split_vcard(&text, policy)?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| args.input.with_file_name("split_contacts.zip"));

    let file =
        fs::File::create(&out).with_context(|| format!("create archive: {}", out.display()))?;
    archive::write_zip(file, &parts)?;

    tracing::info!(parts = parts.len(), path = %out.display(), "Wrote split archive");
    Ok(())
}

fn preview(args: &PreviewArgs) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;

    let contacts = convert::parse_cards(&text)?;
    let shown = &contacts[..contacts.len().min(args.limit)];
    println!("{}", serde_json::to_string_pretty(shown)?);

    tracing::info!(
        shown = shown.len(),
        total = contacts.len(),
        "Previewed contacts"
    );
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("read input: {}", path.display()))
}

fn load_mapping(path: &Path) -> anyhow::Result<ColumnMapping> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read mapping: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse mapping: {}", path.display()))
}

/// Picks the splitting policy: an explicit cap or part count wins; the
/// configured default cap applies otherwise.
fn resolve_policy(
    per_file: Option<usize>,
    files: Option<usize>,
    default_split: usize,
) -> SplitPolicy {
    match (per_file, files) {
        (Some(count), _) => SplitPolicy::ByCount(count),
        (None, Some(count)) => SplitPolicy::ByFiles(count),
        (None, None) => SplitPolicy::ByCount(default_split),
    }
}

/// Default output name: `<input stem>_converted.<ext>` next to the input.
fn output_path(out: Option<&Path>, input: &Path, extension: &str) -> PathBuf {
    if let Some(out) = out {
        return out.to_path_buf();
    }
    let stem = input
        .file_stem()
        .map_or_else(|| "contacts".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_converted.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_derives_from_input_stem() {
        let path = output_path(None, Path::new("dir/contacts.csv"), "vcf");
        assert_eq!(path, Path::new("dir/contacts_converted.vcf"));
    }

    #[test]
    fn output_path_respects_explicit_out() {
        let path = output_path(
            Some(Path::new("explicit.vcf")),
            Path::new("contacts.csv"),
            "vcf",
        );
        assert_eq!(path, Path::new("explicit.vcf"));
    }

    #[test]
    fn policy_prefers_explicit_flags() {
        assert_eq!(
            resolve_policy(Some(25), None, 100),
            SplitPolicy::ByCount(25)
        );
        assert_eq!(resolve_policy(None, Some(4), 100), SplitPolicy::ByFiles(4));
        assert_eq!(resolve_policy(None, None, 100), SplitPolicy::ByCount(100));
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "cardbridge",
            "csv-to-vcf",
            "contacts.csv",
            "--vcard-version",
            "4.0",
        ])
        .expect("parse args");

        match cli.command {
            Command::CsvToVcf(args) => {
                assert_eq!(args.input, PathBuf::from("contacts.csv"));
                assert_eq!(args.vcard_version, Some(VCardVersion::V4_0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_conflicting_split_flags() {
        let result = Cli::try_parse_from([
            "cardbridge",
            "split",
            "contacts.vcf",
            "--per-file",
            "10",
            "--files",
            "3",
        ]);
        assert!(result.is_err());
    }
}
