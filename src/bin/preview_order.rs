//! Print a recipe's serialized order document without submitting anything.
//!
//! Usage:
//!   preview-order single <instruction> <symbol> <qty> [limit-price]
//!   preview-order vertical <bull_call|bear_call|bull_put|bear_put> <open|close>
//!                 <sym1> <sym2> <qty> <net-price>

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use option_orders::orders::options;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let builder = match args.first().map(String::as_str) {
        Some("single") => {
            let [_, instruction, symbol, qty, rest @ ..] = &args[..] else {
                bail!("usage: preview-order single <instruction> <symbol> <qty> [limit-price]");
            };
            let qty: u32 = qty.parse().context("quantity must be a positive integer")?;
            match (instruction.as_str(), rest) {
                ("BUY_TO_OPEN", []) => options::option_buy_to_open_market(symbol, qty),
                ("SELL_TO_OPEN", []) => options::option_sell_to_open_market(symbol, qty),
                ("BUY_TO_CLOSE", []) => options::option_buy_to_close_market(symbol, qty),
                ("SELL_TO_CLOSE", []) => options::option_sell_to_close_market(symbol, qty),
                ("BUY_TO_OPEN", [price]) => {
                    options::option_buy_to_open_limit(symbol, qty, price.parse()?)
                }
                ("SELL_TO_OPEN", [price]) => {
                    options::option_sell_to_open_limit(symbol, qty, price.parse()?)
                }
                ("BUY_TO_CLOSE", [price]) => {
                    options::option_buy_to_close_limit(symbol, qty, price.parse()?)
                }
                ("SELL_TO_CLOSE", [price]) => {
                    options::option_sell_to_close_limit(symbol, qty, price.parse()?)
                }
                (other, _) => bail!("unknown instruction '{other}'"),
            }
        }
        Some("vertical") => {
            let [_, strategy, side, sym1, sym2, qty, price] = &args[..] else {
                bail!(
                    "usage: preview-order vertical <strategy> <open|close> \
                     <sym1> <sym2> <qty> <net-price>"
                );
            };
            let qty: u32 = qty.parse().context("quantity must be a positive integer")?;
            let price: f64 = price.parse().context("net price must be a number")?;
            match (strategy.as_str(), side.as_str()) {
                ("bull_call", "open") => options::bull_call_vertical_open(sym1, sym2, qty, price),
                ("bull_call", "close") => options::bull_call_vertical_close(sym1, sym2, qty, price),
                ("bear_call", "open") => options::bear_call_vertical_open(sym1, sym2, qty, price),
                ("bear_call", "close") => options::bear_call_vertical_close(sym1, sym2, qty, price),
                ("bull_put", "open") => options::bull_put_vertical_open(sym1, sym2, qty, price),
                ("bull_put", "close") => options::bull_put_vertical_close(sym1, sym2, qty, price),
                ("bear_put", "open") => options::bear_put_vertical_open(sym1, sym2, qty, price),
                ("bear_put", "close") => options::bear_put_vertical_close(sym1, sym2, qty, price),
                (s, v) => bail!("unknown vertical '{s} {v}'"),
            }
        }
        _ => bail!("usage: preview-order <single|vertical> ..."),
    };

    let order = builder.build();
    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}
