use crate::commands::{print_json, Context};
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use knack_core::{CoinSet, CoreError};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ChangeArgs {
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
    /// Comma-separated denominations; defaults to change.default_coins
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    pub coins: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
struct ChangeDto {
    amount: i64,
    denominations: CoinSet,
    coins: Vec<i64>,
    count: usize,
}

pub fn make_change(ctx: &Context<'_>, args: ChangeArgs) -> Result<()> {
    if args.amount < 0 {
        return Err(CoreError::NegativeAmount.into());
    }
    let max = ctx.config.change.max_amount;
    if args.amount > max {
        return Err(CliError::AmountAboveLimit {
            amount: args.amount,
            max,
        }
        .into());
    }

    let denominations = match args.coins {
        Some(raw) => CoinSet::new(&raw)?,
        None => ctx.config.change.default_coins.clone(),
    };

    debug!(
        amount = args.amount,
        coins = ?denominations.as_slice(),
        "making change"
    );
    let coins = denominations.fewest_coins(args.amount)?;
    debug!(count = coins.len(), "change found");

    if ctx.json {
        let count = coins.len();
        return print_json(&ChangeDto {
            amount: args.amount,
            denominations,
            coins,
            count,
        });
    }

    if coins.is_empty() {
        println!("no coins needed");
        return Ok(());
    }

    let line: Vec<String> = coins.iter().map(i64::to_string).collect();
    println!("{}", line.join(" "));
    Ok(())
}
