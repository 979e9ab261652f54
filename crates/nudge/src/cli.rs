use std::path::PathBuf;

use nudge_core::StorePlatform;

use crate::error::AppError;

pub const USAGE: &str = "\
Usage: nudge <config.json> [options]

Options:
  --remote                 Read the config as a flat map of string values
  --current-version <ver>  Version to compare against (defaults to this build)
  --store <platform>       app-store, mac-app-store or web
  --debug                  Enable debug logging";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config_path: PathBuf,
    pub remote: bool,
    pub current_version: Option<String>,
    pub store: Option<StorePlatform>,
    pub debug: bool,
}

impl Args {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, AppError> {
        let mut config_path = None;
        let mut remote = false;
        let mut current_version = None;
        let mut store = None;
        let mut debug = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--remote" => remote = true,
                "--debug" => debug = true,
                "--current-version" => {
                    current_version = Some(value_for(&arg, args.next())?);
                }
                "--store" => {
                    let name = value_for(&arg, args.next())?;
                    store = Some(StorePlatform::from_name(&name).ok_or_else(|| {
                        AppError::usage(format!("Unknown store platform: {name}"))
                    })?);
                }
                flag if flag.starts_with("--") => {
                    return Err(AppError::usage(format!("Unknown option: {flag}")));
                }
                _ if config_path.is_some() => {
                    return Err(AppError::usage(format!("Unexpected argument: {arg}")));
                }
                _ => config_path = Some(PathBuf::from(arg)),
            }
        }

        Ok(Self {
            config_path: config_path.ok_or_else(|| AppError::usage("Missing config path"))?,
            remote,
            current_version,
            store,
            debug,
        })
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::usage(format!("{flag} requires a value")))
}
