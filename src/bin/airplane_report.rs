//! End-to-end airplane price analysis: CSV files into SQLite, joined
//! queries back out, and a hedonic regression at each step.
//!
//! Usage: `airplane_report [DATA_DIR] [DB_PATH]`
//!
//! `DATA_DIR` defaults to `data/` and must contain `airplane_sales.csv`,
//! `airplane_specs.csv` and `airplane_perf.csv`. With no `DB_PATH` the
//! database lives in memory for the duration of the run.

use hedonics::db::{load_csv_into_table, query_to_dataset};
use hedonics::{fit_formula, Formula, OlsOptions};
use log::info;
use rusqlite::Connection;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| "data".to_string()));
    let mut conn = match args.next() {
        Some(path) => Connection::open(path)?,
        None => Connection::open_in_memory()?,
    };

    info!("loading CSV files from {}", data_dir.display());
    load_csv_into_table(&mut conn, "Sales", data_dir.join("airplane_sales.csv"))?;
    load_csv_into_table(&mut conn, "Specs", data_dir.join("airplane_specs.csv"))?;
    load_csv_into_table(&mut conn, "Perf", data_dir.join("airplane_perf.csv"))?;

    let options = OlsOptions::default();

    // Sales data alone: price against age.
    let sales = query_to_dataset(
        &conn,
        "SELECT sale_id, age, price
         FROM Sales",
    )?;
    println!("{}", sales.describe());
    let model = fit_formula(&sales, &Formula::parse("price ~ age")?, &options)?;
    println!("{model}");

    // Sales joined with airframe specifications.
    let sales_specs = query_to_dataset(
        &conn,
        "SELECT
             a.sale_id,
             a.age,
             a.price,
             b.passengers,
             b.wtop,
             b.fixgear,
             b.tdrag
         FROM Sales AS a
         LEFT JOIN Specs AS b
             ON a.sale_id = b.sale_id",
    )?;
    println!("{}", sales_specs.describe());
    let model = fit_formula(
        &sales_specs,
        &Formula::parse("price ~ age + passengers + wtop + fixgear + tdrag")?,
        &options,
    )?;
    println!("{model}");

    // Full dataset: sales, specifications and performance.
    let full = query_to_dataset(
        &conn,
        "SELECT
             a.sale_id,
             a.age,
             a.price,
             b.passengers,
             b.wtop,
             b.fixgear,
             b.tdrag,
             c.horse,
             c.fuel,
             c.ceiling,
             c.cruise
         FROM Sales AS a
         LEFT JOIN Specs AS b
             ON a.sale_id = b.sale_id
         LEFT JOIN Perf AS c
             ON a.sale_id = c.sale_id",
    )?;
    println!("{}", full.describe());
    let model = fit_formula(
        &full,
        &Formula::parse(
            "price ~ age + passengers + wtop + fixgear + tdrag + horse + fuel + ceiling + cruise",
        )?,
        &options,
    )?;
    println!("{model}");

    Ok(())
}
