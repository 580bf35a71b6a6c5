use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tabwriter::TabWriter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nfcmod_io::config_schema::validate_config_schema;
use nfcmod_io::core::SUPPORTED_ALGORITHMS;
use nfcmod_io::document_json::{to_minified_json, to_pretty_json};
use nfcmod_io::merge::{main_activity_mut, parse_config_value};
use nfcmod_io::prelude::*;
use nfcmod_io::vocab::android;

#[derive(Debug, Parser)]
#[command(name = "nfcmod", version, about = "Idempotent NFC manifest merge CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one mutation pass over the JSON renditions of the project documents.
    Apply {
        /// Configuration JSON path
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        info_plist: Option<PathBuf>,
        #[arg(long)]
        entitlements: Option<PathBuf>,
        /// Android manifest JSON path (xml2js shape)
        #[arg(long)]
        manifest: Option<PathBuf>,
        #[arg(long)]
        build_properties: Option<PathBuf>,
        /// Write each provided document into this directory as `<document>.json`
        #[arg(long, conflicts_with = "in_place")]
        out_dir: Option<PathBuf>,
        /// Overwrite changed input documents
        #[arg(long)]
        in_place: bool,
        /// Reject malformed configuration instead of ignoring it
        #[arg(long)]
        strict: bool,
        #[arg(long, default_value = android::DEFAULT_MAIN_ACTIVITY)]
        main_activity: String,
        /// Emit pass telemetry JSON on stdout
        #[arg(long)]
        telemetry_json: bool,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
    },
    /// Check a configuration file.
    ValidateConfig {
        config: PathBuf,
        #[arg(long)]
        strict: bool,
    },
    /// List the intent filters of the primary activity.
    Inspect {
        manifest: PathBuf,
        #[arg(long, default_value = android::DEFAULT_MAIN_ACTIVITY)]
        main_activity: String,
    },
    /// Print the canonical fingerprint of a document.
    Fingerprint {
        document: PathBuf,
        #[arg(long, default_value = "xxh64")]
        algorithm: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries JSON and tables only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Apply {
            config,
            info_plist,
            entitlements,
            manifest,
            build_properties,
            out_dir,
            in_place,
            strict,
            main_activity,
            telemetry_json,
            min,
        } => {
            let config_s = read_input(&config)?;
            let config_v: Value = serde_json::from_str(&config_s)
                .with_context(|| format!("Invalid JSON in {}", config.display()))?;

            let paths = [
                ("info_plist", info_plist),
                ("entitlements", entitlements),
                ("android_manifest", manifest),
                ("build_properties", build_properties),
            ];

            let [info, ent, man, props] = &paths;
            let docs = ProjectDocuments {
                info_plist: read_document(info.0, info.1.as_deref())?,
                entitlements: read_document(ent.0, ent.1.as_deref())?,
                android_manifest: read_document(man.0, man.1.as_deref())?,
                build_properties: read_document(props.0, props.1.as_deref())?,
            };

            let opts = MergeOptions {
                main_activity,
                strict_inputs: strict,
                ..MergeOptions::default()
            };

            let outcome = match apply_config(docs, config_v, &opts) {
                Ok(o) => o,
                Err(ApplyError::Config(ConfigError::Invalid(diags))) => {
                    for d in diags.iter() {
                        eprintln!("{}", describe("error", d));
                    }
                    process::exit(2);
                }
                Err(ApplyError::Schema(errors)) => {
                    for e in errors {
                        eprintln!("schema: {e}");
                    }
                    process::exit(2);
                }
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(2);
                }
            };

            let changed = outcome.telemetry.changed_documents();
            let named = outcome.documents.named();

            if in_place || out_dir.is_some() {
                if let Some(dir) = &out_dir {
                    fs::create_dir_all(dir)
                        .with_context(|| format!("create {}", dir.display()))?;
                }

                for ((name, path), (_, doc)) in paths.iter().zip(named) {
                    let Some(path) = path else { continue };

                    let target = match &out_dir {
                        Some(dir) => dir.join(format!("{name}.json")),
                        None if changed.contains(name) => path.clone(),
                        None => continue,
                    };

                    let out = if min { to_minified_json(doc)? } else { to_pretty_json(doc)? };
                    fs::write(&target, format!("{out}\n"))
                        .with_context(|| format!("write {}", target.display()))?;
                    debug!(document = *name, path = %target.display(), "document written");
                }

                if telemetry_json {
                    println!("{}", render(&serde_json::to_value(&outcome.telemetry)?, min)?);
                }
            } else {
                let mut report = Map::new();
                let mut documents = Map::new();
                for ((name, path), (_, doc)) in paths.iter().zip(named) {
                    if path.is_some() {
                        documents.insert(name.to_string(), serde_json::to_value(doc)?);
                    }
                }
                report.insert("documents".to_string(), Value::Object(documents));
                if telemetry_json {
                    report.insert("telemetry".to_string(), serde_json::to_value(&outcome.telemetry)?);
                }

                println!("{}", render(&Value::Object(report), min)?);
            }
        }

        Command::ValidateConfig { config, strict } => {
            let s = read_input(&config)?;
            let v: Value = serde_json::from_str(&s)
                .with_context(|| format!("Invalid JSON in {}", config.display()))?;

            let mut failed = false;

            if strict {
                if let Err(errors) = validate_config_schema(&v) {
                    for e in errors {
                        eprintln!("schema: {e}");
                    }
                    failed = true;
                }
            }

            match parse_config_value(v, strict) {
                Ok(normalized) => {
                    for d in normalized.warnings.iter() {
                        eprintln!("{}", describe("warning", d));
                    }
                }
                Err(ConfigError::Invalid(diags)) => {
                    for d in diags.iter() {
                        eprintln!("{}", describe("error", d));
                    }
                    failed = true;
                }
                Err(e) => {
                    eprintln!("{e}");
                    failed = true;
                }
            }

            if failed {
                process::exit(2);
            }
            println!("OK");
        }

        Command::Inspect {
            manifest,
            main_activity,
        } => {
            let s = read_input(&manifest)?;
            let mut doc = parse_document_json_str("android_manifest", &s)?;

            let activity = match main_activity_mut(&mut doc, &main_activity) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(2);
                }
            };

            let filters = activity
                .get(android::INTENT_FILTER)
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();

            let mut tw = TabWriter::new(io::stdout());
            writeln!(tw, "index\torigin\tactions\tcategories\tdata")?;

            for (i, node) in filters.into_iter().enumerate() {
                let entry = FilterEntry::classify(node);
                let origin = if entry.is_generated() { "generated" } else { "user" };
                let node = entry.as_value();

                writeln!(
                    tw,
                    "{i}\t{origin}\t{}\t{}\t{}",
                    child_names(node, android::ACTION),
                    child_names(node, android::CATEGORY),
                    node.get(android::DATA).and_then(Value::as_array).map_or(0, Vec::len),
                )?;
            }

            tw.flush()?;
        }

        Command::Fingerprint {
            document,
            algorithm,
        } => {
            let s = read_input(&document)?;
            let doc = parse_document_json_str(&document.display().to_string(), &s)?;

            match doc.fingerprint(&algorithm) {
                Some(h) => println!("{h}"),
                None => {
                    eprintln!(
                        "Unsupported hash algorithm: {algorithm}. Supported algorithms: {}",
                        SUPPORTED_ALGORITHMS.join(", ")
                    );
                    process::exit(2);
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// A missing path reads as an empty document.
fn read_document(name: &str, path: Option<&Path>) -> anyhow::Result<Document> {
    match path {
        Some(p) => Ok(parse_document_json_str(name, &read_input(p)?)?),
        None => Ok(Document::new()),
    }
}

fn render(v: &Value, min: bool) -> anyhow::Result<String> {
    Ok(if min {
        serde_json::to_string(v)?
    } else {
        serde_json::to_string_pretty(v)?
    })
}

fn describe(level: &str, d: &Diagnostic) -> String {
    match &d.path {
        Some(p) => format!("{level}[{}] {p}: {}", d.code.as_str(), d.message),
        None => format!("{level}[{}] {}", d.code.as_str(), d.message),
    }
}

/// Comma-joined `android:name` of each `tag` child, or `-`.
fn child_names(node: &Value, tag: &str) -> String {
    let names: Vec<&str> = node
        .get(tag)
        .and_then(Value::as_array)
        .map(|children| {
            children
                .iter()
                .filter_map(|c| nfcmod_io::core::element::attr(c, android::NAME_ATTR))
                .collect()
        })
        .unwrap_or_default();

    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(",")
    }
}
