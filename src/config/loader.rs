//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::VitalwatchConfig;
use crate::domain::errors::VitalwatchError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into VitalwatchConfig
/// 4. Applies environment variable overrides (VITALWATCH_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, TOML parsing fails,
/// a referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use vitalwatch::config::loader::load_config;
///
/// let config = load_config("vitalwatch.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<VitalwatchConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VitalwatchError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VitalwatchError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: VitalwatchConfig = toml::from_str(&contents)
        .map_err(|e| VitalwatchError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(config)
}

/// Loads configuration from `path`, or uses defaults when the file is absent
///
/// Environment overrides and validation still apply to the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<VitalwatchConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
    finish(VitalwatchConfig::default())
}

fn finish(mut config: VitalwatchConfig) -> Result<VitalwatchConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        VitalwatchError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| VitalwatchError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(VitalwatchError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using VITALWATCH_* prefix
///
/// Environment variables follow the pattern: VITALWATCH_<SECTION>_<KEY>
/// For example: VITALWATCH_MONITOR_INTERVAL_SECONDS, VITALWATCH_STORE_PATH
fn apply_env_overrides(config: &mut VitalwatchConfig) -> Result<()> {
    if let Ok(val) = std::env::var("VITALWATCH_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(interval) = env_parsed("VITALWATCH_MONITOR_INTERVAL_SECONDS")? {
        config.monitor.interval_seconds = interval;
    }
    if let Some(duration) = env_parsed("VITALWATCH_MONITOR_DURATION_MINUTES")? {
        config.monitor.duration_minutes = duration;
    }

    if let Ok(val) = std::env::var("VITALWATCH_STORE_PATH") {
        config.store.path = val;
    }
    if let Some(sync) = env_parsed("VITALWATCH_STORE_SYNC_WRITES")? {
        config.store.sync_writes = sync;
    }

    if let Some(enabled) = env_parsed("VITALWATCH_LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = enabled;
    }
    if let Ok(val) = std::env::var("VITALWATCH_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("VITALWATCH_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn env_parsed<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(val) => val.trim().parse().map(Some).map_err(|_| {
            VitalwatchError::Configuration(format!("Invalid value for {name}: '{val}'"))
        }),
        Err(_) => Ok(None),
    }
}
