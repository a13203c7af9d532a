use anyhow::Result;
use aquadose_core::validation::parse_number;
use aquadose_schemas::{
    inputs::{CalculatorInputs, ConditionerInputs, FertilizerInputs, MedicationInputs, SalinityInputs},
    units::{ConcentrationType, SalinityUnit, VolumeUnit},
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod logging;
mod workflow;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "aquadose", version, about = "Dosing calculators for aquarium maintenance")]
struct Cli {
    /// Configuration file (defaults to ./aquadose.yaml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the data directory from the configuration.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct TankArgs {
    /// Tank volume.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "preset")]
    volume: Option<String>,

    /// Named tank size from the configuration, e.g. 29g.
    #[arg(long)]
    preset: Option<String>,

    /// gallons or liters.
    #[arg(long)]
    unit: Option<VolumeUnit>,
}

#[derive(Args)]
struct SaveArgs {
    /// Keep the result in the calculation history.
    #[arg(long)]
    save: bool,

    /// Notes stored with the saved result instead of the instructions.
    #[arg(long, requires = "save")]
    note: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Millilitres of fertilizer to reach a target ppm.
    Fertilizer {
        #[command(flatten)]
        tank: TankArgs,
        #[arg(long, allow_hyphen_values = true)]
        ppm: String,
        #[arg(long, allow_hyphen_values = true)]
        concentration: String,
        /// percentage or ppm.
        #[arg(long, default_value = "percentage")]
        concentration_type: ConcentrationType,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Daily medication dose and total for a course of treatment.
    Medication {
        #[command(flatten)]
        tank: TankArgs,
        #[arg(long, allow_hyphen_values = true)]
        strength: String,
        /// Millilitres per unit of tank volume.
        #[arg(long, allow_hyphen_values = true)]
        dose_per_gallon: String,
        #[arg(long, allow_hyphen_values = true)]
        days: String,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Water conditioner for a partial water change.
    Conditioner {
        #[command(flatten)]
        tank: TankArgs,
        #[arg(long, allow_hyphen_values = true)]
        percentage: String,
        /// Millilitres per unit of new water.
        #[arg(long, allow_hyphen_values = true)]
        dose_rate: String,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Salt to add or water to replace to reach a target salinity.
    Salinity {
        #[command(flatten)]
        tank: TankArgs,
        #[arg(long, allow_hyphen_values = true)]
        current: String,
        #[arg(long, allow_hyphen_values = true)]
        target: String,
        /// ppt or sg.
        #[arg(long, default_value = "sg")]
        scale: SalinityUnit,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Runs every request in a YAML request file.
    Batch {
        file: PathBuf,
        #[arg(long)]
        save: bool,
    },
    /// Lists, shows, deletes or exports saved calculations.
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
    /// Shows or unlocks the timed premium features.
    Premium {
        #[command(subcommand)]
        action: PremiumCommand,
    },
    /// Lists the configured tank size presets.
    Presets,
}

#[derive(Subcommand)]
enum HistoryCommand {
    List,
    Show { id: String },
    Delete { id: String },
    Clear {
        /// Required, as clearing cannot be undone.
        #[arg(long)]
        yes: bool,
    },
    /// Premium: writes the history to a CSV file.
    Export { path: PathBuf },
}

#[derive(Subcommand)]
enum PremiumCommand {
    Status,
    /// Records a watched rewarded ad and starts the unlock window.
    Unlock,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    logging::init(&config.log_level);

    match cli.command {
        Command::Fertilizer {
            tank,
            ppm,
            concentration,
            concentration_type,
            save,
        } => {
            let (tank_volume, volume_unit) = resolve(&config, &tank)?;
            let inputs = CalculatorInputs::Fertilizer(FertilizerInputs {
                tank_volume,
                volume_unit,
                desired_ppm: parse_number(&ppm),
                product_concentration: parse_number(&concentration),
                concentration_type,
            });
            workflow::run_calculation(&config, inputs, save.save, save.note)
        }
        Command::Medication {
            tank,
            strength,
            dose_per_gallon,
            days,
            save,
        } => {
            let (tank_volume, volume_unit) = resolve(&config, &tank)?;
            let inputs = CalculatorInputs::Medication(MedicationInputs {
                tank_volume,
                volume_unit,
                medication_strength: parse_number(&strength),
                dosage_per_gallon: parse_number(&dose_per_gallon),
                treatment_days: parse_number(&days),
            });
            workflow::run_calculation(&config, inputs, save.save, save.note)
        }
        Command::Conditioner {
            tank,
            percentage,
            dose_rate,
            save,
        } => {
            let (tank_volume, volume_unit) = resolve(&config, &tank)?;
            let inputs = CalculatorInputs::Conditioner(ConditionerInputs {
                tank_volume,
                volume_unit,
                water_change_percentage: parse_number(&percentage),
                conditioner_dose_rate: parse_number(&dose_rate),
            });
            workflow::run_calculation(&config, inputs, save.save, save.note)
        }
        Command::Salinity {
            tank,
            current,
            target,
            scale,
            save,
        } => {
            let (tank_volume, volume_unit) = resolve(&config, &tank)?;
            let inputs = CalculatorInputs::Salinity(SalinityInputs {
                tank_volume,
                volume_unit,
                current_salinity: parse_number(&current),
                target_salinity: parse_number(&target),
                salinity_unit: scale,
            });
            workflow::run_calculation(&config, inputs, save.save, save.note)
        }
        Command::Batch { file, save } => workflow::run_batch(&config, &file, save),
        Command::History { action } => match action {
            HistoryCommand::List => workflow::list_history(&config),
            HistoryCommand::Show { id } => workflow::show_calculation(&config, &id),
            HistoryCommand::Delete { id } => workflow::delete_calculation(&config, &id),
            HistoryCommand::Clear { yes } => workflow::clear_history(&config, yes),
            HistoryCommand::Export { path } => workflow::export_history(&config, &path),
        },
        Command::Premium { action } => match action {
            PremiumCommand::Status => workflow::premium_status(&config),
            PremiumCommand::Unlock => workflow::unlock_premium(&config),
        },
        Command::Presets => {
            workflow::list_presets(&config);
            Ok(())
        }
    }
}

fn resolve(config: &AppConfig, tank: &TankArgs) -> Result<(f64, VolumeUnit)> {
    workflow::resolve_tank(config, tank.volume.as_deref(), tank.preset.as_deref(), tank.unit)
}
