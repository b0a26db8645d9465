//! # Transform File
//!
//! Runs JSON export files through the transform router without starting the
//! HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! # Print the Zoom envelope for one RingCentral user export
//! cargo run --bin transform-file raw_to_zoom user exports/users.json
//!
//! # Transform every *.json file in a directory, writing <name>.zoom.json
//! cargo run --bin transform-file ssot_to_zoom site ./sites/ --write
//! ```
//!
//! Each file holds one record or an array of records.
//!
//! ## Exit Codes
//!
//! - `0`: every file transformed
//! - `1`: one or more files failed

use clap::Parser;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use zoom_transform::{
    Platform, TransformEnvelope, TransformHandler, TransformMethod, TransformOptions,
    TransformRequest,
};

#[derive(Parser, Debug)]
#[command(name = "transform-file")]
#[command(about = "Transform telephony export files offline")]
struct Args {
    /// ssot_to_zoom, raw_to_zoom or zoom_to_ssot
    method: String,

    /// Entity type, e.g. user or call_queue
    entity_type: String,

    /// Files or directories of *.json files
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Vendor of the raw data for raw_to_zoom
    #[arg(long, default_value = "ringcentral")]
    raw_platform: String,

    /// Copy unmapped top-level fields into the output
    #[arg(long)]
    pass_through: bool,

    /// Write <name>.<target>.json next to each input instead of printing
    #[arg(long)]
    write: bool,
}

struct Job {
    handler: TransformHandler,
    method: TransformMethod,
    entity_type: String,
    raw_platform: Platform,
    options: TransformOptions,
    write: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let method: TransformMethod = match args.method.parse() {
        Ok(method) => method,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let raw_platform: Platform = match args.raw_platform.parse() {
        Ok(platform) => platform,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let job = Job {
        handler: TransformHandler::new(),
        method,
        entity_type: args.entity_type,
        raw_platform,
        options: TransformOptions {
            pass_through: args.pass_through,
        },
        write: args.write,
    };

    let mut ok_count = 0;
    let mut error_count = 0;

    for path in &args.paths {
        let files = match collect_files(path, job.target()) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("Error: {}", e);
                error_count += 1;
                continue;
            }
        };

        for file in files {
            match job.run(&file) {
                Ok(envelope) => {
                    eprintln!(
                        "✓ {} - {} record(s), fingerprint {}",
                        file.display(),
                        envelope.metadata.record_count,
                        envelope.metadata.fingerprint
                    );
                    ok_count += 1;
                }
                Err(e) => {
                    eprintln!("❌ {} - {}", file.display(), e);
                    error_count += 1;
                }
            }
        }
    }

    eprintln!("\nTransform Summary:");
    eprintln!("  Transformed files: {}", ok_count);
    eprintln!("  Failed files: {}", error_count);

    if error_count > 0 {
        process::exit(1);
    }
}

impl Job {
    fn target(&self) -> Platform {
        self.method.platforms(self.raw_platform).1
    }

    fn run(&self, file: &Path) -> Result<TransformEnvelope, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(file)?;
        let data: Value = serde_json::from_str(&content)?;

        let request =
            TransformRequest::for_method(self.method, &self.entity_type, self.raw_platform, data)
                .with_options(self.options.clone());
        let envelope = self.handler.handle_transform(request)?;
        let rendered = serde_json::to_string_pretty(&envelope)?;

        if self.write {
            let output = output_path(file, self.target());
            fs::write(&output, rendered + "\n")?;
            eprintln!("  wrote {}", output.display());
        } else {
            println!("{}", rendered);
        }

        Ok(envelope)
    }
}

/// Expand a path into the JSON files to transform, skipping earlier outputs.
fn collect_files(path: &Path, target: Platform) -> Result<Vec<PathBuf>, String> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(format!("'{}' is not a valid file or directory", path.display()));
    }

    let entries = fs::read_dir(path)
        .map_err(|e| format!("reading directory '{}': {}", path.display(), e))?;

    let output_suffix = format!(".{}.json", target);
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.ends_with(&output_suffix))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn output_path(input: &Path, target: Platform) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}.{}.json", stem, target))
}
