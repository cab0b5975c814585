pub mod catalog;
pub mod cli;
pub mod commands;
pub mod digest;
pub mod error;
pub mod feed;
pub mod file_manager;
pub mod logging;
pub mod models;
pub mod resolver;
pub mod utils;

pub use error::TrackerError;
pub use models::{PropertyRecord, PropertyTable, ResolvedItem, VehicleRecord, VehicleTable, WeeklyUpdate};
pub use resolver::{resolve, Resolver};

use clap::Parser;
use cli::Cli;
use commands::settings::get_settings;
use file_manager::initialize_json_file;
use log::{debug, error};
use models::Settings;
use std::process::ExitCode;
use utils::{
    get_app_data_dir, get_property_images_json_path, get_settings_json_path,
    get_vehicle_data_json_path, initialize_data_directories, set_app_data_dir,
};

fn initialize_app_data() -> Result<(), String> {
    // Create directory structure
    initialize_data_directories().map_err(|e| e.to_string())?;

    // Lookup tables start empty; weekly-update.json only exists once refreshed or bundled
    initialize_json_file(&get_settings_json_path(), &Settings::default()).map_err(|e| e.to_string())?;
    initialize_json_file(&get_vehicle_data_json_path(), &VehicleTable::new()).map_err(|e| e.to_string())?;
    initialize_json_file(&get_property_images_json_path(), &PropertyTable::new()).map_err(|e| e.to_string())?;

    debug!("App data initialized at: {:?}", get_app_data_dir());
    Ok(())
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Some(dir) = cli.data_dir.clone() {
        set_app_data_dir(dir);
    }

    let log_to_file = get_settings().map(|s| s.log_to_file).unwrap_or(false);
    logging::init_logging(cli.log_level(), log_to_file);

    if let Err(e) = initialize_app_data() {
        error!("Failed to initialize app data: {}", e);
    }

    match cli::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
