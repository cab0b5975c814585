// Vehicle catalog commands - plan lookups and record vehicle data
use super::weekly::get_weekly_update;
use crate::catalog::{plan_lookups, VehicleLookup};
use crate::file_manager::update_json_file;
use crate::models::{VehicleRecord, VehicleTable};
use crate::utils::get_vehicle_data_json_path;
use log::info;

/// Vehicles referenced by the current weekly update
pub fn plan_vehicle_lookups() -> Result<Vec<VehicleLookup>, String> {
    let update = get_weekly_update()?;
    Ok(plan_lookups(&update))
}

/// Store a vehicle's catalog image and price in vehicle_data.json.
/// Vehicles in the current plan get their type, slug and discounted price filled in.
pub fn record_vehicle(
    name: String,
    image_url: String,
    original_price: Option<u64>,
) -> Result<VehicleRecord, String> {
    let planned = plan_vehicle_lookups()
        .unwrap_or_default()
        .into_iter()
        .find(|lookup| lookup.name == name);

    let record = match planned {
        Some(lookup) => lookup.into_record(image_url, original_price),
        None => VehicleRecord::new(image_url).with_prices(original_price, None),
    };

    let stored = record.clone();
    update_json_file(&get_vehicle_data_json_path(), |table: &mut VehicleTable| {
        table.insert(name.clone(), stored);
    })
    .map_err(|e| e.to_string())?;

    info!("Recorded vehicle data for {}", name);
    Ok(record)
}
