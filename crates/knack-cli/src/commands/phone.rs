use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use knack_core::{PhoneFormat, PhoneNumber};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct PhoneArgs {
    #[arg(allow_hyphen_values = true)]
    pub raw: String,
    /// Output format; defaults to phone.format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    Digits,
    Pretty,
    #[value(name = "e164")]
    E164,
}

impl From<FormatArg> for PhoneFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Digits => PhoneFormat::Digits,
            FormatArg::Pretty => PhoneFormat::Pretty,
            FormatArg::E164 => PhoneFormat::E164,
        }
    }
}

#[derive(Debug, Serialize)]
struct PhoneDto<'a> {
    number: &'a PhoneNumber,
    area_code: &'a str,
    exchange_code: &'a str,
    subscriber_number: &'a str,
    formatted: String,
}

pub fn normalize(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    let format = args
        .format
        .map(PhoneFormat::from)
        .unwrap_or(ctx.config.phone.format);
    debug!(format = ?format, "normalizing phone number");

    let phone = PhoneNumber::new(&args.raw)?;
    let formatted = phone.format(format);

    if ctx.json {
        return print_json(&PhoneDto {
            number: &phone,
            area_code: phone.area_code(),
            exchange_code: phone.exchange_code(),
            subscriber_number: phone.subscriber_number(),
            formatted,
        });
    }

    println!("{}", formatted);
    Ok(())
}
