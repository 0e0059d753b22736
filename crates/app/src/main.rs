use std::{error::Error, fs, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use engine::{CostMode, Garage, Vehicle};

mod settings;

#[derive(Parser, Debug)]
#[command(name = "motolog")]
#[command(about = "Statistics and insights over a vehicle expense log")]
struct Cli {
    /// Garage snapshot to analyze (also read from `MOTOLOG_GARAGE`).
    #[arg(long, env = "MOTOLOG_GARAGE", default_value = "garage.json")]
    garage: PathBuf,

    /// Cost display mode: fuel, fuel-oil or total. Overrides the configured
    /// default.
    #[arg(long)]
    mode: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tracked vehicles with their current odometer readings.
    Vehicles,
    /// Print the statistics snapshot for one vehicle.
    Stats(VehicleArgs),
    /// Print the derived insights for one vehicle.
    Insights(VehicleArgs),
}

#[derive(Args, Debug)]
struct VehicleArgs {
    /// Vehicle name; defaults to the garage's active selection.
    #[arg(long)]
    vehicle: Option<String>,
}

fn load_garage(path: &PathBuf) -> Result<Garage, Box<dyn Error + Send + Sync>> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let garage = serde_json::from_str(&raw)
        .map_err(|err| format!("failed to parse {}: {err}", path.display()))?;
    Ok(garage)
}

fn resolve_vehicle<'a>(
    garage: &'a Garage,
    name: Option<&str>,
) -> Result<&'a Vehicle, Box<dyn Error + Send + Sync>> {
    match name {
        Some(name) => Ok(garage.vehicle_by_name(name)?),
        None => garage
            .active_vehicle()
            .ok_or_else(|| "no active vehicle; pass --vehicle".into()),
    }
}

fn resolve_mode(
    cli_mode: Option<&str>,
    settings: &settings::Settings,
) -> Result<CostMode, Box<dyn Error + Send + Sync>> {
    match cli_mode.or_else(|| settings.cost_mode()) {
        Some(raw) => Ok(CostMode::try_from(raw)?),
        None => Ok(CostMode::default()),
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let settings = settings::Settings::new()?;
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "motolog={level},engine={level}",
            level = settings.level()
        ))
        .init();

    let garage = load_garage(&cli.garage)?;
    let mode = resolve_mode(cli.mode.as_deref(), &settings)?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Command::Vehicles => {
            let mut vehicles: Vec<serde_json::Value> = garage
                .iter_vehicles()
                .map(|(id, vehicle)| {
                    serde_json::json!({
                        "id": id,
                        "name": vehicle.name,
                        "current_odometer": vehicle.current_odometer(),
                        "fuel_entries": vehicle.fuel_log.len(),
                    })
                })
                .collect();
            vehicles.sort_by(|a, b| a["name"].as_str().cmp(&b["name"].as_str()));
            println!("{}", serde_json::to_string_pretty(&vehicles)?);
        }
        Command::Stats(args) => {
            let vehicle = resolve_vehicle(&garage, args.vehicle.as_deref())?;
            tracing::info!(
                vehicle = %vehicle.name,
                mode = mode.as_str(),
                "computing statistics"
            );
            let snapshot = vehicle.statistics(mode, today);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Command::Insights(args) => {
            let vehicle = resolve_vehicle(&garage, args.vehicle.as_deref())?;
            tracing::info!(
                vehicle = %vehicle.name,
                mode = mode.as_str(),
                "deriving insights"
            );
            let insights = vehicle.insights(mode, today);
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
    }

    Ok(())
}
