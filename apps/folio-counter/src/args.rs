use clap::Parser;

use folio_core::Money;

#[derive(Parser, Debug, Default)]
#[command(name = "folio-counter", version)]
#[command(about = "Counter terminal for a small book and magazine shop", long_about = None)]
pub struct Args {
    /// Cash in the register at opening, e.g. 1000 or 250.50
    #[arg(long, value_parser = parse_money)]
    pub opening_cash: Option<Money>,

    /// Reject negative prices, negative counts and empty titles at intake
    #[arg(long)]
    pub strict: bool,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Store name shown in the banner
    #[arg(long)]
    pub store_name: Option<String>,
}

fn parse_money(raw: &str) -> Result<Money, String> {
    raw.parse::<Money>().map_err(|e| e.to_string())
}
