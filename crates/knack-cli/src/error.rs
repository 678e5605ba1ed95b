use anyhow::Error;
use knack_config::ConfigError;
use knack_core::CoreError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("amount {amount} exceeds change.max_amount ({max})")]
    AmountAboveLimit { amount: i64, max: i64 },
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    err.chain()
        .find_map(|cause| {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return Some(match cli_err {
                    CliError::AmountAboveLimit { .. } => EXIT_INVALID_INPUT,
                });
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return Some(config_exit_code(config_err));
            }
            cause
                .downcast_ref::<CoreError>()
                .map(|_| EXIT_INVALID_INPUT)
        })
        .unwrap_or(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir | ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidDefaultCoins(_)
        | ConfigError::EmptyDefaultCoins
        | ConfigError::InvalidMaxAmount(_)
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
