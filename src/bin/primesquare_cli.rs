use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::info;
use primesquare::primesquare::schema;
use primesquare::{
    ActiveListingsProcessor, AgentPerformanceProcessor, CityRankingProcessor, CitySearchProcessor,
    FieldValue, ListingStore, RelationProvider, StatusUpdateProcessor, SystemClock, TableRecord,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

#[derive(Parser)]
#[command(name = "primesquare")]
#[command(about = "Primesquare listings analytics - reports over the listings star schema")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Active listings with property and agent detail, highest price first
    ActiveListings,
    /// Agents whose qualifying sales average above the portfolio-wide price
    TopAgents,
    /// Five highest-priced properties per city
    CityRanking,
    /// Search listings by city and inclusive price range
    Search {
        /// City to match exactly (case-sensitive)
        #[arg(long)]
        city: String,

        /// Lower price bound, inclusive
        #[arg(long)]
        min_price: Decimal,

        /// Upper price bound, inclusive
        #[arg(long)]
        max_price: Decimal,
    },
    /// Update one listing's status with an existence guard
    UpdateStatus {
        /// Fact row to update
        #[arg(long)]
        fact_id: i64,

        /// New status value
        #[arg(long)]
        status: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let store = seed_demo_dataset()?;

    match cli.command {
        Commands::ActiveListings => print_rows(&ActiveListingsProcessor::process(&store)?),
        Commands::TopAgents => print_rows(&AgentPerformanceProcessor::process(&store)?),
        Commands::CityRanking => print_rows(&CityRankingProcessor::process(&store)?),
        Commands::Search {
            city,
            min_price,
            max_price,
        } => print_rows(&CitySearchProcessor::process(
            &store, &city, min_price, max_price,
        )?),
        Commands::UpdateStatus { fact_id, status } => {
            StatusUpdateProcessor::process(&store, fact_id, &status, &SystemClock)?;
            let updated: Vec<TableRecord> = store
                .scan(schema::FACT)?
                .into_iter()
                .filter(|row| row.integer("fact_id") == Ok(fact_id))
                .collect();
            print_rows(&updated);
        }
    }

    Ok(())
}

fn print_rows(rows: &[TableRecord]) {
    info!("{} rows", rows.len());
    for row in rows {
        match serde_json::to_string(row) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to serialize row: {}", e),
        }
    }
}

fn record(fields: Vec<(&str, FieldValue)>) -> TableRecord {
    TableRecord::new(
        fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect::<HashMap<_, _>>(),
    )
}

fn price(dollars: i64) -> FieldValue {
    FieldValue::Decimal(Decimal::from(dollars))
}

fn listed(year: i32, month: u32, day: u32) -> FieldValue {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => FieldValue::Date(date),
        None => FieldValue::Null,
    }
}

/// Seed a small San Antonio / Austin / Dallas dataset so every subcommand
/// has something to report against
fn seed_demo_dataset() -> Result<ListingStore, Box<dyn std::error::Error>> {
    let store = ListingStore::new();

    let locations = vec![
        (1, "San Antonio", "TX", "78204"),
        (2, "Austin", "TX", "78701"),
        (3, "Dallas", "TX", "75201"),
    ];
    for (id, city, state, zip) in locations {
        store.insert(
            schema::LOCATION,
            record(vec![
                ("location_id", FieldValue::Integer(id)),
                ("city", FieldValue::String(city.to_string())),
                ("state", FieldValue::String(state.to_string())),
                ("zip_code", FieldValue::String(zip.to_string())),
            ]),
        )?;
    }

    let agents = vec![
        (1, "Maria Delgado", "210-555-0143", "maria@primesquare.example"),
        (2, "James Okafor", "512-555-0188", "james@primesquare.example"),
        (3, "Priya Natarajan", "214-555-0121", "priya@primesquare.example"),
    ];
    for (id, name, phone, email) in agents {
        store.insert(
            schema::AGENT,
            record(vec![
                ("agent_id", FieldValue::Integer(id)),
                ("agent_name", FieldValue::String(name.to_string())),
                ("agent_phone", FieldValue::String(phone.to_string())),
                ("agent_email", FieldValue::String(email.to_string())),
            ]),
        )?;
    }

    let properties = vec![
        (1, "PS-1001", "114 Lavaca St", "Single Family", 3, 2, 1850, 1998),
        (2, "PS-1002", "230 Cedar Ave", "Condo", 2, 2, 1100, 2012),
        (3, "PS-1003", "877 Blanco Rd", "Single Family", 4, 3, 2600, 2005),
        (4, "PS-1004", "41 Jones St", "Townhouse", 3, 2, 1600, 2018),
        (5, "PS-1005", "902 Elm St", "Single Family", 5, 4, 3400, 1994),
        (6, "PS-1006", "17 Riverwalk Ct", "Condo", 1, 1, 720, 2020),
    ];
    for (id, code, address, ptype, beds, baths, sqft, year) in properties {
        store.insert(
            schema::PROPERTY,
            record(vec![
                ("property_id", FieldValue::Integer(id)),
                ("property_code", FieldValue::String(code.to_string())),
                ("property_address", FieldValue::String(address.to_string())),
                ("property_type", FieldValue::String(ptype.to_string())),
                ("bedrooms", FieldValue::Integer(beds)),
                ("bathrooms", FieldValue::Integer(baths)),
                ("square_footage", FieldValue::Integer(sqft)),
                ("year_built", FieldValue::Integer(year)),
            ]),
        )?;
    }

    let facts = vec![
        (1, 1, 1, 1, Some(315_000), "Active", "Standard", (2025, 5, 2)),
        (2, 2, 1, 1, Some(229_500), "Active", "Standard", (2025, 5, 9)),
        (3, 3, 2, 2, Some(489_000), "Active", "Standard", (2025, 4, 18)),
        (4, 4, 2, 2, Some(365_000), "Pending", "Standard", (2025, 3, 30)),
        (5, 5, 3, 3, Some(612_000), "Active", "Luxury", (2025, 5, 20)),
        (6, 6, 3, 1, None, "Active", "Standard", (2025, 6, 1)),
    ];
    for (fact_id, property_id, agent_id, location_id, amount, status, ltype, (y, m, d)) in facts {
        store.insert(
            schema::FACT,
            record(vec![
                ("fact_id", FieldValue::Integer(fact_id)),
                ("property_id", FieldValue::Integer(property_id)),
                ("agent_id", FieldValue::Integer(agent_id)),
                ("location_id", FieldValue::Integer(location_id)),
                (
                    "price",
                    match amount {
                        Some(dollars) => price(dollars),
                        None => FieldValue::Null,
                    },
                ),
                ("status", FieldValue::String(status.to_string())),
                ("listing_type", FieldValue::String(ltype.to_string())),
                ("listed_date", listed(y, m, d)),
            ]),
        )?;
    }

    Ok(store)
}
