use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use numconv_ingest::{CsvOptions, read_csv_table, write_csv_table};
use numconv_model::ConversionReport;
use numconv_transform::{NoProgress, NumericConverter};
use tracing::{info, info_span};

use crate::cli::{ConvertArgs, ScanArgs};
use crate::progress::BarProgress;

/// What a `convert` run produced.
#[derive(Debug)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub rows: usize,
    pub report: ConversionReport,
    /// Written CSV, `None` on a dry run.
    pub output: Option<PathBuf>,
    /// Written JSON report, when requested.
    pub report_file: Option<PathBuf>,
}

/// What an `inspect` run found.
#[derive(Debug)]
pub struct InspectOutcome {
    pub input: PathBuf,
    pub rows: usize,
    pub report: ConversionReport,
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertOutcome> {
    let input = &args.scan.input;
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();

    let csv = CsvOptions::default().with_separator(args.scan.delimiter);
    let mut df = read_csv_table(input, &csv)
        .with_context(|| format!("read {}", input.display()))?;

    let verbose = !args.no_progress;
    let converter = NumericConverter::new(args.scan.convert_options(verbose));
    let mut bar = if verbose {
        BarProgress::new()
    } else {
        BarProgress::hidden()
    };
    let converted = converter.convert_with_report(&mut df, &mut bar);
    bar.finish();
    let report = converted.context("convert numeric columns")?;

    let output = if args.dry_run {
        info!("dry run, output not written");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input));
        write_csv_table(&mut df, &path, &csv)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    let report_file = match &args.report {
        Some(path) => {
            write_report(&report, path)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(ConvertOutcome {
        input: input.clone(),
        rows: df.height(),
        report,
        output,
        report_file,
    })
}

pub fn run_inspect(args: &ScanArgs) -> Result<InspectOutcome> {
    let input = &args.input;
    let span = info_span!("inspect", input = %input.display());
    let _guard = span.enter();

    let csv = CsvOptions::default().with_separator(args.delimiter);
    let df = read_csv_table(input, &csv).with_context(|| format!("read {}", input.display()))?;

    let report = NumericConverter::new(args.convert_options(false))
        .inspect(&df, &mut NoProgress)
        .context("scan columns")?;

    Ok(InspectOutcome {
        input: input.clone(),
        rows: df.height(),
        report,
    })
}

/// `<dir>/<stem>.numeric.csv` for an input `<dir>/<stem>.<ext>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}.numeric.csv"))
}

fn write_report(report: &ConversionReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize conversion report")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote conversion report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/prices.csv")),
            PathBuf::from("/data/prices.numeric.csv")
        );
        assert_eq!(
            default_output_path(Path::new("prices")),
            PathBuf::from("prices.numeric.csv")
        );
    }
}
