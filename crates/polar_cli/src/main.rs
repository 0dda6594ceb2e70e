mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Args, Parser, Subcommand};
use polar_core::schema;
use polar_core::{AssetGuid, FieldValue, parse_field_data};
use polar_render::{render_registry_json, render_schema_json, render_type_detail, render_type_list};
use serde_json::{Map as JsonMap, Value as JsonValue};

use commands::{BatchReport, CreatedAsset};

#[derive(Debug, Parser)]
#[command(author, version, about = "Generate Unity .asset files for Polar weapons from JSON")]
struct Cli {
    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create one .asset file and its .meta companion
    Create(CreateArgs),
    /// Create an asset for every *.json file in a directory
    Batch(BatchArgs),
    /// Patch fields of an existing .asset file in place
    Update(UpdateArgs),
    /// Show the supported types, their fields and defaults
    List(ListArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("input").required(true).args(["json", "data"])))]
struct CreateArgs {
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    type_key: String,
    #[arg(short, long, value_name = "FILE")]
    json: Option<PathBuf>,
    #[arg(short, long, value_name = "JSON")]
    data: Option<String>,
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "POLAR_ASSET_OUTPUT",
        default_value = "."
    )]
    output: PathBuf,
    /// Asset file name; defaults to the `id` or `weaponName` field
    #[arg(short, long)]
    name: Option<String>,
    /// Use this GUID in the .meta file instead of a random one
    #[arg(long, value_name = "HEX32")]
    guid: Option<String>,
}

#[derive(Debug, Args)]
struct BatchArgs {
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,
    /// Type for every file; otherwise each file's `type` field, then `laser`
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    type_key: Option<String>,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("updates").required(true).multiple(true).args(["json", "data", "set"])))]
struct UpdateArgs {
    #[arg(short, long, value_name = "FILE")]
    asset: PathBuf,
    #[arg(short, long, value_name = "FILE", conflicts_with = "data")]
    json: Option<PathBuf>,
    #[arg(short, long, value_name = "JSON")]
    data: Option<String>,
    /// Single field edit; applied after --json/--data
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    type_key: Option<String>,
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Create(args) => run_create(args),
        Command::Batch(args) => run_batch(args),
        Command::Update(args) => run_update(args),
        Command::List(args) => run_list(args),
    }
}

fn run_create(args: CreateArgs) -> Result<()> {
    let data = load_field_data(args.json.as_ref(), args.data.as_deref())?;
    let guid = args.guid.as_deref().map(AssetGuid::parse).transpose()?;

    let created = commands::create_asset(
        &args.type_key,
        &data,
        &args.output,
        args.name.as_deref(),
        guid,
    )?;
    print_created(&created);
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let report = commands::batch_create(&args.input, &args.output, args.type_key.as_deref())
        .with_context(|| format!("batch over {} failed", args.input.display()))?;
    print_batch_report(&report);
    Ok(())
}

fn run_update(args: UpdateArgs) -> Result<()> {
    let mut updates: Vec<(String, FieldValue)> = Vec::new();
    if args.json.is_some() || args.data.is_some() {
        let data = load_field_data(args.json.as_ref(), args.data.as_deref())?;
        updates.extend(
            data.iter()
                .map(|(key, value)| (key.clone(), FieldValue::from_json(value))),
        );
    }
    for assignment in &args.set {
        let (key, value) = commands::parse_assignment(assignment)?;
        updates.retain(|(existing, _)| *existing != key);
        updates.push((key, value));
    }

    let outcome = commands::update_asset(&args.asset, &updates)?;
    println!("Updated: {}", args.asset.display());
    if !outcome.missing.is_empty() {
        println!("Not present (skipped): {}", outcome.missing.join(", "));
    }
    Ok(())
}

fn run_list(args: ListArgs) -> Result<()> {
    match args.type_key {
        Some(key) => {
            let schema = schema::require(&key)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&render_schema_json(schema))?);
            } else {
                print!("{}", render_type_detail(schema));
            }
        }
        None if args.json => {
            println!("{}", serde_json::to_string_pretty(&render_registry_json())?);
        }
        None => print!("{}", render_type_list()),
    }
    Ok(())
}

fn load_field_data(
    json: Option<&PathBuf>,
    data: Option<&str>,
) -> Result<JsonMap<String, JsonValue>> {
    match (json, data) {
        (Some(path), _) => Ok(commands::load_json_file(path)?),
        (None, Some(text)) => Ok(parse_field_data(text).context("--data is not usable")?),
        (None, None) => bail!("either --json or --data is required"),
    }
}

fn print_created(created: &CreatedAsset) {
    println!("Created: {}", created.asset_path.display());
    println!("Created: {}", created.meta_path.display());
    println!("Asset GUID: {}", created.guid);
}

fn print_batch_report(report: &BatchReport) {
    for item in &report.items {
        match &item.result {
            Ok(created) => print_created(created),
            Err(e) => eprintln!("Error processing {}: {e}", item.source.display()),
        }
    }
    println!(
        "Processed {} file(s): {} created, {} failed",
        report.items.len(),
        report.created(),
        report.failed()
    );
}

