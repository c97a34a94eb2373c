//! Command-line entry points for the `account_ledger_cli` binary.

pub mod demo;
pub mod output;

use crate::{
    config::{Config, ConfigManager},
    errors::{CliError, LedgerError},
    ledger::RejectionPolicy,
    report::{self, ReportOptions},
    utils::build_info,
};

pub use demo::{run_demo, DemoRun};

const USAGE: &str = "Usage: account_ledger_cli <command>\n\
                     Commands:\n  \
                     demo [--detailed] [--silent] [--json]\n  \
                     config\n  \
                     version";

/// Runs a CLI command given the arguments after the program name.
pub fn run_cli<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = args
        .next()
        .ok_or_else(|| CliError::Input(format!("missing command\n{USAGE}")))?;

    match command.as_str() {
        "demo" => {
            let mut config = ConfigManager::new().load()?;
            let mut as_json = false;
            for flag in args {
                match flag.as_str() {
                    "--detailed" => config.detailed_report = true,
                    "--silent" => config.rejection_policy = RejectionPolicy::Silent,
                    "--json" => as_json = true,
                    other => {
                        return Err(CliError::Input(format!(
                            "unknown flag `{other}`\n{USAGE}"
                        )))
                    }
                }
            }
            print_demo(&config, as_json)
        }
        "config" => {
            let manager = ConfigManager::new();
            let config = manager.load()?;
            output::info(format!("Config file: {}", manager.path().display()));
            println!("{}", to_json(&config)?);
            Ok(())
        }
        "version" => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        other => Err(CliError::Input(format!("unknown command `{other}`\n{USAGE}"))),
    }
}

fn print_demo(config: &Config, as_json: bool) -> Result<(), CliError> {
    let run = run_demo(config)?;
    if as_json {
        println!("{}", to_json(run.ledger.accounts())?);
        return Ok(());
    }

    output::section("Account Manager");
    for message in &run.rejections {
        output::warning(message);
    }
    print!(
        "{}",
        report::render_ledger(&run.ledger, &ReportOptions::from(config))
    );
    output::success("Demo complete");
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value).map_err(LedgerError::from)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_is_input_error() {
        let err = run_cli(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
    }

    #[test]
    fn unknown_command_is_input_error() {
        let err = run_cli(vec!["launch".to_string()]).unwrap_err();
        assert!(err.to_string().contains("unknown command `launch`"));
    }
}
