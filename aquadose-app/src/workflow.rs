use crate::config::AppConfig;
use anyhow::{bail, Context, Result};
use aquadose_core::{
    calculate,
    error::AquadoseError,
    export,
    history::HistoryStore,
    premium::PremiumTimer,
    units::{format_dosage, to_fixed},
};
use aquadose_schemas::{
    calculation::SavedCalculation,
    file_formats::{RequestFile, SCHEMA_VERSION},
    inputs::CalculatorInputs,
    results::{DoseResult, SalinityAction},
    units::VolumeUnit,
};
use chrono::{DateTime, Local, Utc};
use std::{fs, path::Path};
use tracing::{info, warn};

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Picks the tank volume from a preset or the typed value. A missing volume
/// becomes `NaN` and is rejected by the calculator like any other bad input.
pub fn resolve_tank(
    config: &AppConfig,
    volume: Option<&str>,
    preset: Option<&str>,
    unit: Option<VolumeUnit>,
) -> Result<(f64, VolumeUnit)> {
    if let Some(label) = preset {
        let preset = config
            .preset(label)
            .with_context(|| format!("Unknown tank preset '{}'", label))?;
        return Ok((preset.gallons, VolumeUnit::Gallons));
    }

    let volume = volume.map_or(f64::NAN, aquadose_core::validation::parse_number);
    Ok((volume, unit.unwrap_or(config.default_volume_unit)))
}

fn ensure_enabled(config: &AppConfig, inputs: &CalculatorInputs) -> Result<()> {
    let kind = inputs.kind();
    if !config.is_enabled(kind) {
        bail!("The {} calculator is disabled in the configuration", kind.label());
    }
    Ok(())
}

fn print_result(result: &DoseResult) {
    println!("{}", result.kind().label());
    match result {
        DoseResult::Fertilizer(r) => println!("  Dosage: {}", r.formatted_dosage),
        DoseResult::Medication(r) => {
            println!("  Daily dose: {}", r.formatted_dosage);
            println!("  Whole treatment: {}", format_dosage(r.total_for_treatment_ml));
        }
        DoseResult::Conditioner(r) => {
            println!("  Dosage: {}", r.formatted_dosage);
            println!("  New water: {}", to_fixed(r.water_change_volume, 2));
        }
        DoseResult::Salinity(r) => {
            println!("  Action: {}", r.action.as_str());
            match (r.action, r.water_to_remove_liters) {
                (SalinityAction::Remove, Some(liters)) => println!("  Water to replace: {} L", to_fixed(liters, 2)),
                _ => println!("  Salt: {}", r.formatted_amount),
            }
        }
    }
    println!("  {}", result.instructions());
}

fn save_result(
    store: &mut HistoryStore,
    inputs: CalculatorInputs,
    result: &DoseResult,
    note: Option<String>,
) -> Result<()> {
    let saved = store.add(inputs, result, note, now_ms())?;
    println!("Saved as {}", saved.id);
    Ok(())
}

/// Runs one calculator, prints the outcome and optionally saves it.
pub fn run_calculation(config: &AppConfig, inputs: CalculatorInputs, save: bool, note: Option<String>) -> Result<()> {
    ensure_enabled(config, &inputs)?;
    let result = calculate(&inputs)?;
    print_result(&result);

    if save {
        let mut store = HistoryStore::load(config.history_path(), config.max_history_items)?;
        save_result(&mut store, inputs, &result, note)?;
    }
    Ok(())
}

/// Runs every request in a YAML request file. A rejected request is reported
/// and skipped; the rest still run.
pub fn run_batch(config: &AppConfig, file: &Path, save: bool) -> Result<()> {
    let content = fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))?;
    let request: RequestFile =
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse YAML from {:?}", file))?;
    if request.schema_version != SCHEMA_VERSION {
        warn!(version = %request.schema_version, "request file has an unexpected schema version");
    }
    info!(count = request.requests.len(), "running batch");

    let mut store = if save {
        Some(HistoryStore::load(config.history_path(), config.max_history_items)?)
    } else {
        None
    };

    let total = request.requests.len();
    let mut failed = 0;
    for (i, inputs) in request.requests.into_iter().enumerate() {
        println!("\n[{}/{}] {}", i + 1, total, inputs.kind().label());
        if let Err(e) = ensure_enabled(config, &inputs) {
            println!("  Skipped: {}", e);
            failed += 1;
            continue;
        }
        match calculate(&inputs) {
            Ok(result) => {
                print_result(&result);
                if let Some(store) = store.as_mut() {
                    save_result(store, inputs, &result, None)?;
                }
            }
            Err(e) => {
                println!("  Error: {}", e);
                failed += 1;
            }
        }
    }

    println!("\n{} of {} requests succeeded.", total - failed, total);
    Ok(())
}

fn print_calculation(calculation: &SavedCalculation) {
    println!(
        "[{}] {} - {}",
        calculation.id,
        calculation.kind.label(),
        format_timestamp(calculation.timestamp)
    );
    println!("  {}", calculation.result);
    if let Some(notes) = &calculation.notes {
        println!("  {}", notes);
    }
}

pub fn list_history(config: &AppConfig) -> Result<()> {
    let store = HistoryStore::load(config.history_path(), config.max_history_items)?;
    let count = store.len();
    println!("{} saved calculation{}", count, if count == 1 { "" } else { "s" });
    for calculation in store.list() {
        print_calculation(calculation);
    }
    Ok(())
}

pub fn show_calculation(config: &AppConfig, id: &str) -> Result<()> {
    let store = HistoryStore::load(config.history_path(), config.max_history_items)?;
    let calculation = store
        .get(id)
        .ok_or_else(|| AquadoseError::CalculationNotFound(id.to_string()))?;
    print_calculation(calculation);
    println!("{}", serde_json::to_string_pretty(&calculation.inputs)?);
    Ok(())
}

pub fn delete_calculation(config: &AppConfig, id: &str) -> Result<()> {
    let mut store = HistoryStore::load(config.history_path(), config.max_history_items)?;
    if !store.delete(id)? {
        return Err(AquadoseError::CalculationNotFound(id.to_string()).into());
    }
    println!("Deleted {}", id);
    Ok(())
}

pub fn clear_history(config: &AppConfig, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("Refusing to clear history without --yes");
    }
    let mut store = HistoryStore::load(config.history_path(), config.max_history_items)?;
    store.clear()?;
    println!("History cleared.");
    Ok(())
}

pub fn export_history(config: &AppConfig, path: &Path) -> Result<()> {
    let timer = PremiumTimer::load(config.premium_path(), config.premium_unlock_hours)?;
    if !timer.is_premium_active(now_ms()) {
        return Err(AquadoseError::PremiumRequired("history export".to_string()).into());
    }

    let store = HistoryStore::load(config.history_path(), config.max_history_items)?;
    let written = export::export_history(store.list(), path)?;
    println!("Exported {} calculations to {}", written, path.display());
    Ok(())
}

fn format_duration(ms: i64) -> String {
    let minutes = ms / 60_000;
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

pub fn premium_status(config: &AppConfig) -> Result<()> {
    let timer = PremiumTimer::load(config.premium_path(), config.premium_unlock_hours)?;
    let now = now_ms();
    if timer.is_premium_active(now) {
        println!("Premium active, {} remaining.", format_duration(timer.remaining_ms(now)));
    } else {
        println!("Premium inactive.");
    }
    Ok(())
}

pub fn unlock_premium(config: &AppConfig) -> Result<()> {
    let mut timer = PremiumTimer::load(config.premium_path(), config.premium_unlock_hours)?;
    let record = timer.unlock_premium(now_ms());
    timer.save(config.premium_path())?;
    println!("Premium unlocked until {}.", format_timestamp(record.expires_at));
    Ok(())
}

pub fn list_presets(config: &AppConfig) {
    for preset in &config.tank_presets {
        println!("{:>6}  {} gallons", preset.label, preset.gallons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_overrides_unit() {
        let config = AppConfig::default();
        let (volume, unit) = resolve_tank(&config, None, Some("55g"), Some(VolumeUnit::Liters)).unwrap();
        assert_eq!(volume, 55.0);
        assert_eq!(unit, VolumeUnit::Gallons);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let config = AppConfig::default();
        assert!(resolve_tank(&config, None, Some("1000g"), None).is_err());
    }

    #[test]
    fn typed_volume_uses_default_unit() {
        let mut config = AppConfig::default();
        config.default_volume_unit = VolumeUnit::Liters;
        let (volume, unit) = resolve_tank(&config, Some("120"), None, None).unwrap();
        assert_eq!((volume, unit), (120.0, VolumeUnit::Liters));
    }

    #[test]
    fn missing_or_garbled_volume_is_nan() {
        let config = AppConfig::default();
        assert!(resolve_tank(&config, None, None, None).unwrap().0.is_nan());
        assert!(resolve_tank(&config, Some("big"), None, None).unwrap().0.is_nan());
    }

    #[test]
    fn disabled_calculator_is_refused() {
        let mut config = AppConfig::default();
        config.enabled_calculators.clear();
        let inputs = CalculatorInputs::Conditioner(aquadose_schemas::inputs::ConditionerInputs {
            tank_volume: 50.0,
            volume_unit: VolumeUnit::Liters,
            water_change_percentage: 25.0,
            conditioner_dose_rate: 0.2,
        });
        assert!(ensure_enabled(&config, &inputs).is_err());
    }

    #[test]
    fn batch_saves_only_successful_requests() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.data_dir = dir.path().join("data");

        let file = dir.path().join("request.yaml");
        fs::write(
            &file,
            r#"
schema_version: "1"
requests:
  - type: salinity
    tank_volume: 100
    volume_unit: liters
    current_salinity: 1.020
    target_salinity: 1.025
    salinity_unit: sg
  - type: medication
    tank_volume: -1
    volume_unit: gallons
    medication_strength: 10
    dosage_per_gallon: 1
    treatment_days: 7
"#,
        )
        .unwrap();

        run_batch(&config, &file, true).unwrap();

        let store = HistoryStore::load(config.history_path(), config.max_history_items).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].result, "650.00 g / 22.93 oz");
    }

    #[test]
    fn export_requires_premium() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.data_dir = dir.path().to_path_buf();

        let target = dir.path().join("out.csv");
        let err = export_history(&config, &target).unwrap_err();
        assert!(err.to_string().contains("Premium is not active"));
        assert!(!target.exists());

        unlock_premium(&config).unwrap();
        export_history(&config, &target).unwrap();
        assert!(target.exists());
    }

    #[test]
    fn durations_read_as_hours_and_minutes() {
        assert_eq!(format_duration(23 * 3_600_000 + 5 * 60_000), "23h 05m");
        assert_eq!(format_duration(0), "0h 00m");
    }
}
