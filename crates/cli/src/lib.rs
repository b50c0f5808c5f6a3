//! `stockcast` command line: load the dataset, plan one product, print a report.

pub mod report;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::Utc;
use clap::Parser;

use stockcast_core::ProductId;
use stockcast_forecast::{DEFAULT_ALPHA, SmoothingConfig};
use stockcast_infra::CsvDemandSource;
use stockcast_planner::{DemandReader, PlanControls, Planner};

#[derive(Debug, Parser)]
#[command(name = "stockcast", version, about = "Demand forecast and replenishment plan for one product")]
pub struct Cli {
    /// Order history CSV.
    #[arg(long, env = "STOCKCAST_ORDERS_CSV")]
    pub orders: PathBuf,

    /// Inventory parameter CSV.
    #[arg(long, env = "STOCKCAST_PARAMETERS_CSV")]
    pub parameters: PathBuf,

    /// Product name; defaults to the first product in the parameter file.
    #[arg(long)]
    pub product: Option<String>,

    /// Current stock on hand, in units.
    #[arg(long, default_value_t = 100)]
    pub stock: u32,

    /// Forecast horizon in weeks.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub horizon: u32,

    /// Target weeks of supply for the order-up-to level.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(2..=8))]
    pub weeks_of_supply: u32,

    /// Smoothing constant, strictly between 0 and 1.
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Print the plan as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// List product names and exit.
    #[arg(long)]
    pub list: bool,
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let source = CsvDemandSource::open(&cli.orders, &cli.parameters).context("loading dataset")?;
    let config = SmoothingConfig::new(cli.alpha)?;
    let planner = Planner::new(source, Utc::now().date_naive()).with_config(config);

    if cli.list {
        for product in planner.reader().products() {
            writeln!(out, "{product}")?;
        }
        return Ok(());
    }

    let product: ProductId = match &cli.product {
        Some(name) => name.parse()?,
        None => planner
            .reader()
            .products()
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("parameter file lists no products"))?,
    };

    let controls = PlanControls::new(cli.stock, cli.horizon, cli.weeks_of_supply);
    let plan = planner
        .plan(&product, controls)
        .with_context(|| format!("planning {product}"))?;

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &plan)?;
        writeln!(out)?;
    } else {
        out.write_all(report::render(&plan).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMETERS: &str = "\
Product,Avg_Weekly_Demand,Std_Weekly_Demand,Unit_Price,Lead_Time_Days,Safety_Stock,Reorder_Point
Perfect Fitness Perfect Rip Deck,50,10,59.99,3.5,30,55
O'Brien Men's Neoprene Life Vest,20,4,49.98,3.9,12,25
";

    const ORDERS: &str = "\
order date (DateOrders),Order Item Quantity,Product Name
1/2/2018 10:15,48,Perfect Fitness Perfect Rip Deck
1/9/2018 10:15,52,Perfect Fitness Perfect Rip Deck
1/16/2018 10:15,50,Perfect Fitness Perfect Rip Deck
1/23/2018 10:15,47,Perfect Fitness Perfect Rip Deck
1/30/2018 10:15,53,Perfect Fitness Perfect Rip Deck
";

    fn dataset() -> (tempfile::NamedTempFile, tempfile::NamedTempFile) {
        let mut orders = tempfile::NamedTempFile::new().unwrap();
        orders.write_all(ORDERS.as_bytes()).unwrap();
        let mut params = tempfile::NamedTempFile::new().unwrap();
        params.write_all(PARAMETERS.as_bytes()).unwrap();
        (orders, params)
    }

    fn cli(orders: &tempfile::NamedTempFile, params: &tempfile::NamedTempFile, extra: &[&str]) -> Cli {
        let mut args = vec![
            "stockcast".to_string(),
            "--orders".to_string(),
            orders.path().display().to_string(),
            "--parameters".to_string(),
            params.path().display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn list_prints_product_names() {
        let (orders, params) = dataset();
        let mut out = Vec::new();
        run(cli(&orders, &params, &["--list"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec!["O'Brien Men's Neoprene Life Vest", "Perfect Fitness Perfect Rip Deck"]
        );
    }

    #[test]
    fn json_report_contains_recommendation() {
        let (orders, params) = dataset();
        let mut out = Vec::new();
        run(
            cli(&orders, &params, &["--product", "Perfect Fitness Perfect Rip Deck", "--stock", "80", "--json"]),
            &mut out,
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["recommendation"]["target_stock"], 230.0);
        assert_eq!(json["recommendation"]["order_qty"], 150);
        assert_eq!(json["recommendation"]["status"], "healthy");
        assert_eq!(json["forecast"]["future_forecast"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn text_report_for_product_without_orders() {
        let (orders, params) = dataset();
        let mut out = Vec::new();
        run(
            cli(&orders, &params, &["--product", "O'Brien Men's Neoprene Life Vest", "--stock", "10"]),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("MAPE: not available"));
        assert!(text.contains("CRITICAL"));
    }

    #[test]
    fn unknown_product_fails() {
        let (orders, params) = dataset();
        let mut out = Vec::new();
        let err = run(cli(&orders, &params, &["--product", "Kayak"]), &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("product not found: Kayak"));
    }

    #[test]
    fn out_of_range_horizon_is_rejected_by_parser() {
        let args = ["stockcast", "--orders", "o.csv", "--parameters", "p.csv", "--horizon", "13"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn invalid_alpha_fails() {
        let (orders, params) = dataset();
        let mut out = Vec::new();
        assert!(run(cli(&orders, &params, &["--alpha", "1.5"]), &mut out).is_err());
    }
}
