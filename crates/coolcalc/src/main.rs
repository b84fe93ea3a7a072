use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use coolcalc_core::advisory::{AdvisoryClient, AdvisoryRequest, AdvisorySource};
use coolcalc_core::app::CoolCalcApp;
use coolcalc_core::calculator::{compute_capacity, parse_area, recommend_unit};
use coolcalc_core::config::AppConfig;
use coolcalc_core::export::{export_filename, to_csv};
use coolcalc_core::storage::{FileStore, Preferences};
use coolcalc_core::{CoolCalcError, EnvironmentalFactors, Language, RecordId, RoomType};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cooling capacity estimator", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the directory holding saved records and preferences
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Language for this invocation (en, fr, zh); not persisted
    #[arg(long, global = true)]
    language: Option<Language>,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the recommended capacity for a room
    Calc(CalcArgs),
    /// List saved records
    List,
    /// Rename a saved record
    Rename {
        id: String,
        name: String,
    },
    /// Delete a saved record
    Delete { id: String },
    /// Delete every saved record
    Clear,
    /// Export saved records as CSV
    Export(ExportArgs),
    /// Show totals, efficiency rating and running cost across saved records
    Summary,
    /// Show the base-load reference table
    Reference,
    /// Show or change persisted preferences
    Prefs(PrefsArgs),
    /// Ask the advisory service about a room
    Advise(AdviseArgs),
}

#[derive(Args, Debug)]
struct RoomInput {
    /// Cooled floor area in square meters
    #[arg(long, default_value = "20", allow_hyphen_values = true)]
    area: String,
    /// bedroom, living_room, kitchen, office, server_room or gym
    #[arg(long, default_value = "bedroom")]
    room_type: RoomType,
    /// High sun exposure (+10%)
    #[arg(long)]
    sun: bool,
    /// Poor insulation (+15%)
    #[arg(long)]
    insulation: bool,
    /// Extra occupants (+10%)
    #[arg(long)]
    occupants: bool,
    /// Many electronics or appliances (+10%)
    #[arg(long)]
    electronics: bool,
    /// Apply the tropical climate surcharge (+30%)
    #[arg(long, conflicts_with = "no_tropical")]
    tropical: bool,
    /// Skip the tropical climate surcharge
    #[arg(long)]
    no_tropical: bool,
}

impl RoomInput {
    fn factors(&self) -> EnvironmentalFactors {
        EnvironmentalFactors {
            high_sun_exposure: self.sun,
            poor_insulation: self.insulation,
            extra_occupants: self.occupants,
            high_electronic_load: self.electronics,
        }
    }

    fn tropical(&self, config: &AppConfig) -> bool {
        if self.no_tropical {
            false
        } else if self.tropical {
            true
        } else {
            config.default_tropical
        }
    }
}

#[derive(Args, Debug)]
struct CalcArgs {
    #[command(flatten)]
    input: RoomInput,
    /// Save the result as a new record
    #[arg(long)]
    save: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Output file (defaults to CoolCal_Pro_Records_<date>.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PrefsArgs {
    /// Persist a new language
    #[arg(long = "set-language")]
    set_language: Option<Language>,
    /// Persist the dark mode flag
    #[arg(long, action = clap::ArgAction::Set)]
    dark_mode: Option<bool>,
}

#[derive(Args, Debug)]
struct AdviseArgs {
    #[command(flatten)]
    input: RoomInput,
    /// Free-text description of the room
    #[arg(long, default_value = "")]
    description: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = Some(dir);
    }

    let data_dir = config.resolved_data_dir();
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    let defaults = Preferences {
        dark_mode: false,
        language: config.default_language,
    };
    let mut app = CoolCalcApp::load(store, defaults);
    if let Some(language) = cli.language {
        app.override_language(language);
    }

    match cli.command {
        Command::Calc(args) => handle_calc(&mut app, &config, args),
        Command::List => {
            render::print_records(app.records(), app.language());
            Ok(())
        }
        Command::Rename { id, name } => handle_rename(&mut app, id, &name),
        Command::Delete { id } => {
            let id = RecordId::from(id);
            if app.delete(&id)? {
                println!("Deleted {id}");
            } else {
                warn!(record_id = %id, "No record to delete");
                println!("No record with id {id}");
            }
            Ok(())
        }
        Command::Clear => {
            app.clear()?;
            println!("All records cleared.");
            Ok(())
        }
        Command::Export(args) => handle_export(&app, args),
        Command::Summary => {
            match app.summary() {
                Some(summary) => render::print_summary(&summary),
                None => println!("No saved records."),
            }
            Ok(())
        }
        Command::Reference => {
            render::print_reference(app.language());
            Ok(())
        }
        Command::Prefs(args) => handle_prefs(&mut app, args),
        Command::Advise(args) => handle_advise(&app, &config, args).await,
    }
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn handle_calc(app: &mut CoolCalcApp<FileStore>, config: &AppConfig, args: CalcArgs) -> Result<()> {
    let area = parse_area(&args.input.area);
    let factors = args.input.factors();
    let result = compute_capacity(
        area,
        args.input.room_type,
        &factors,
        args.input.tropical(config),
    );
    let language = app.language();

    render::print_result(&result, language);
    for factor in factors.active() {
        println!("  + {}", language.factor_label(factor));
    }
    let recommendation = recommend_unit(result.horsepower, language);
    println!(
        "Suggested unit: {} ({}; {})",
        recommendation.size, recommendation.units, recommendation.tip
    );

    if args.save {
        match app.confirm(&result) {
            Ok(record) => println!("Saved as \"{}\" ({})", record.room_name, record.id),
            Err(CoolCalcError::RecordLimitReached { limit }) => {
                println!("Record limit of {limit} reached; result not saved.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn handle_rename(app: &mut CoolCalcApp<FileStore>, id: String, name: &str) -> Result<()> {
    let id = RecordId::from(id);
    let previous = app.record(&id)?.room_name.clone();

    if app.rename(&id, name)? {
        info!(record_id = %id, "Record renamed");
        println!("Renamed \"{}\" to \"{}\"", previous, name.trim());
    } else {
        println!("Name is blank; keeping \"{previous}\"");
    }
    Ok(())
}

fn handle_export(app: &CoolCalcApp<FileStore>, args: ExportArgs) -> Result<()> {
    if app.records().is_empty() {
        println!("No saved records to export.");
        return Ok(());
    }

    let language = app.language();
    let csv = to_csv(app.records(), |room_type| {
        language.room_label(room_type).to_string()
    })?;
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(export_filename(Utc::now().date_naive())));

    std::fs::write(&path, csv.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), records = app.records().len(), "Exported records");
    println!("Exported {} records to {}", app.records().len(), path.display());
    Ok(())
}

fn handle_prefs(app: &mut CoolCalcApp<FileStore>, args: PrefsArgs) -> Result<()> {
    if args.set_language.is_some() || args.dark_mode.is_some() {
        let mut preferences = app.preferences();
        if let Some(language) = args.set_language {
            preferences.language = language;
        }
        if let Some(dark_mode) = args.dark_mode {
            preferences.dark_mode = dark_mode;
        }
        app.set_preferences(preferences)?;
    }

    let preferences = app.preferences();
    println!("language  = {}", preferences.language);
    println!("dark_mode = {}", preferences.dark_mode);
    Ok(())
}

async fn handle_advise(
    app: &CoolCalcApp<FileStore>,
    config: &AppConfig,
    args: AdviseArgs,
) -> Result<()> {
    let area = parse_area(&args.input.area);
    if area <= 0.0 {
        bail!("area must be greater than zero");
    }

    let client = AdvisoryClient::from_config(&config.advisory)
        .context("failed to build advisory client")?;
    let request = AdvisoryRequest {
        area,
        room_type: args.input.room_type,
        description: args.description,
        language: app.language(),
    };

    let advisory = client.advise(&request).await;
    if advisory.source == AdvisorySource::Fallback {
        println!("(advisory service unavailable)");
    }
    println!("{}", advisory.text);
    Ok(())
}
