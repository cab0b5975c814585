// Command-line front end: argument parsing and screen rendering
use crate::catalog::VehicleLookup;
use crate::commands::{catalog, digest, settings, weekly};
use crate::models::{format_price, HomeSummary, ResolvedItem, Settings, VehicleRecord, WeeklyUpdate};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "weekly-tracker")]
#[command(about = "Weekly bonuses, discounts and featured vehicles", long_about = None)]
pub struct Cli {
    /// Data root (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Weekly challenge, featured vehicles and robberies
    Home,

    /// Bonus lines with their images
    Bonuses,

    /// Discount lines with their images and prices
    Discounts,

    /// Resolve arbitrary lines against the lookup tables (stdin when none given)
    Resolve { lines: Vec<String> },

    /// Fetch the newest digest post and store it as the weekly update
    Refresh {
        /// Parse a saved markdown body instead of fetching
        #[arg(long)]
        from_file: Option<PathBuf>,

        /// Post title to use with --from-file
        #[arg(long)]
        title: Option<String>,
    },

    /// List the vehicles this week's update references and their catalog pages
    Plan,

    /// Store a vehicle's image and price in the vehicle table
    RecordVehicle {
        name: String,

        #[arg(long)]
        image: String,

        #[arg(long)]
        price: Option<u64>,
    },

    /// Show settings, or change them with --set KEY=VALUE
    Settings {
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn execute(cli: Cli) -> Result<(), String> {
    let json = cli.json;

    match cli.command {
        Commands::Home => {
            let summary = weekly::get_home_summary()?;
            output(json, &summary, print_home)
        }
        Commands::Bonuses => {
            let bonuses = weekly::get_bonus_items()?;
            output(json, &bonuses, |b| print_items("Weekly Bonuses", &b.week_of, &b.items))
        }
        Commands::Discounts => {
            let discounts = weekly::get_discount_items()?;
            output(json, &discounts, |d| print_items("Weekly Discounts", &d.week_of, &d.items))
        }
        Commands::Resolve { lines } => {
            let lines = if lines.is_empty() { read_stdin_lines() } else { lines };
            let items = weekly::resolve_lines(lines)?;
            output(json, &items, |items| print_items("Resolved", "", items))
        }
        Commands::Refresh { from_file, title } => {
            let update = match from_file {
                Some(path) => digest::import_weekly_update(&path, title)?,
                None => digest::refresh_weekly_update()?,
            };
            output(json, &update, print_update_saved)
        }
        Commands::Plan => {
            let lookups = catalog::plan_vehicle_lookups()?;
            output(json, &lookups, |lookups| print_plan(lookups))
        }
        Commands::RecordVehicle { name, image, price } => {
            let record = catalog::record_vehicle(name.clone(), image, price)?;
            output(json, &record, |record| print_vehicle(&name, record))
        }
        Commands::Settings { set } => {
            let mut current = settings::get_settings()?;
            for assignment in &set {
                current = settings::update_settings(settings::parse_setting_assignment(assignment)?)?;
            }
            output(json, &current, print_settings)
        }
    }
}

fn output<T: Serialize>(json: bool, value: &T, print_text: impl FnOnce(&T)) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| format!("Failed to serialize output: {}", e))?;
        println!("{}", text);
    } else {
        print_text(value);
    }
    Ok(())
}

fn read_stdin_lines() -> Vec<String> {
    io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn print_home(summary: &HomeSummary) {
    println!("Weekly Tracker - {}", summary.week_of);
    for message in &summary.intro_messages {
        println!("  {}", message);
    }

    println!("\nWeekly Challenge\n  {}", summary.weekly_challenge);
    println!("\nPodium Vehicle\n  {}", describe(&summary.podium_vehicle));
    println!(
        "\nPrize Ride Vehicle\n  {}\n  {}",
        describe(&summary.prize_ride_vehicle),
        summary.prize_ride_challenge
    );
    println!("\nTime Trial\n  {}", summary.time_trial);
    println!("\nHSW Time Trial\n  {}", summary.hsw_time_trial);
    println!("\nPremium Race\n  {}", summary.premium_race);

    if !summary.salvage_yard_robberies.is_empty() {
        println!("\nSalvage Yard Robberies");
        for entry in &summary.salvage_yard_robberies {
            println!("  {}: {}", entry.robbery.kind, describe(&entry.vehicle));
        }
    }
}

fn print_items(title: &str, week_of: &str, items: &[ResolvedItem]) {
    if week_of.is_empty() {
        println!("{}", title);
    } else {
        println!("{} - {}", title, week_of);
    }

    for item in items {
        match &item.label {
            Some(label) => println!("\n  {} [{}]", item.name, label),
            None => println!("\n  {}", item.name),
        }
        println!("    image: {}", item.image_url);
        if item.has_prices() {
            println!("    price: {}", describe_prices(item));
        }
    }
}

fn print_plan(lookups: &[VehicleLookup]) {
    for lookup in lookups {
        match lookup.discount_percent {
            Some(percent) => println!("{} ({}, {}% off)\n  {}", lookup.name, lookup.kind, percent, lookup.url),
            None => println!("{} ({})\n  {}", lookup.name, lookup.kind, lookup.url),
        }
    }
}

fn print_vehicle(name: &str, record: &VehicleRecord) {
    println!("{}", name);
    println!("  image: {}", record.image_url);
    println!("  original: {}", record.formatted_original_price());
    println!("  discounted: {}", record.formatted_discounted_price());
}

fn print_update_saved(update: &WeeklyUpdate) {
    println!(
        "Saved weekly update for {}: {} bonuses, {} discounts",
        update.week_of,
        update.bonuses.len(),
        update.discounts.len()
    );
}

fn print_settings(settings: &Settings) {
    for line in settings_lines(settings) {
        println!("{}", line);
    }
}

fn settings_lines(settings: &Settings) -> Vec<String> {
    vec![
        format!(
            "data_source_url = {}",
            settings.data_source_url.as_deref().unwrap_or("(bundled data)")
        ),
        format!("placeholder_image_url = {}", settings.placeholder_image_url),
        format!("digest_search_url = {}", settings.digest_search_url),
        format!("user_agent = {}", settings.user_agent),
        format!("request_timeout_secs = {}", settings.request_timeout_secs),
        format!("log_to_file = {}", settings.log_to_file),
    ]
}

fn describe_prices(item: &ResolvedItem) -> String {
    let format = |price: Option<u64>| price.map(format_price).unwrap_or_else(|| "N/A".to_string());
    format!("{} -> {}", format(item.original_price), format(item.discounted_price))
}

fn describe(item: &ResolvedItem) -> String {
    if item.source.is_match() {
        format!("{} ({})", item.name, item.image_url)
    } else {
        item.name.clone()
    }
}
