use std::io::IsTerminal;
use std::path::Path;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use pgmstego::pgm::Header;
use pgmstego::PipelineReport;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct HeaderOutput<'a> {
    path: String,
    format: &'a str,
    tag: &'a str,
    comment: Option<&'a str>,
    width: u32,
    height: u32,
    maxval: u32,
}

#[derive(Serialize)]
struct ReportOutput {
    status: &'static str,
    width: u32,
    height: u32,
    stego: Option<String>,
    extracted: Option<String>,
}

pub fn print_header(path: &Path, header: &Header, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = HeaderOutput {
                path: path.display().to_string(),
                format: header.format.name(),
                tag: header.format.tag(),
                comment: header.comment.as_deref(),
                width: header.dimensions.width,
                height: header.dimensions.height,
                maxval: header.maxval,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PATH", "FORMAT", "WIDTH", "HEIGHT", "MAXVAL", "COMMENT"])
                .add_row(vec![
                    path.display().to_string(),
                    header.format.tag().to_string(),
                    header.dimensions.width.to_string(),
                    header.dimensions.height.to_string(),
                    header.maxval.to_string(),
                    header.comment.clone().unwrap_or_default(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "path={} format={} ({}) size={} maxval={} comment={:?}",
                path.display(),
                header.format.tag(),
                header.format.name(),
                header.dimensions,
                header.maxval,
                header.comment.as_deref().unwrap_or("")
            );
        }
    }
}

pub fn print_report(report: &PipelineReport, format: OutputFormat) {
    let stego = report.stego_path.as_ref().map(|p| p.display().to_string());
    let extracted = report
        .extracted_path
        .as_ref()
        .map(|p| p.display().to_string());

    match format {
        OutputFormat::Json => {
            let out = ReportOutput {
                status: "ok",
                width: report.dimensions.width,
                height: report.dimensions.height,
                stego,
                extracted,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SIZE", "STEGO", "EXTRACTED"])
                .add_row(vec![
                    report.dimensions.to_string(),
                    stego.unwrap_or_else(|| "-".to_string()),
                    extracted.unwrap_or_else(|| "-".to_string()),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "size={} stego={} extracted={}",
                report.dimensions,
                stego.as_deref().unwrap_or("-"),
                extracted.as_deref().unwrap_or("-")
            );
        }
    }
}
