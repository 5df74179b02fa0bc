use std::env;

use anyhow::Context;
use circle_distributions::{normalize_price_per_share, EpochReport, DEFAULT_DISPLAY_DECIMALS};
use circle_interface::RawAmount;
use cosmwasm_schema::schema_for;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    dotenv::dotenv().ok(); // Used to load the `.env` file if any
    pretty_env_logger::init();

    if args.contains(&"schema".to_string()) {
        let schema = schema_for!(EpochReport);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    if args.contains(&"report".to_string()) {
        let path = snapshot_path(&args)
            .context("pass a snapshot file after `report` or set EPOCH_SNAPSHOT")?;
        let decimal_places = display_decimals(&args)?;

        let report = report::load(&path)?;
        if args.contains(&"--json".to_string()) {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report::render(&report, decimal_places));
        }
        return Ok(());
    }

    if args.contains(&"pps".to_string()) {
        let (token_address, raw) = match args.iter().position(|arg| arg == "pps") {
            Some(i) => (args.get(i + 1), args.get(i + 2)),
            None => (None, None),
        };
        let token_address = token_address.context("pass a token address after `pps`")?;
        let raw: RawAmount = raw
            .context("pass the vault's raw pricePerShare after the token address")?
            .parse()?;
        let decimals = flag_value(&args, "--decimals")
            .map(|dp| {
                dp.parse::<u32>()
                    .with_context(|| format!("invalid --decimals value {dp}"))
            })
            .transpose()?;

        log::info!("normalizing pricePerShare {} for {}", raw, token_address);
        println!("{}", normalize_price_per_share(token_address, raw, decimals));
        return Ok(());
    }

    println!(
        "usage: scripts report <snapshot.json> [--dp N] [--json] | scripts pps <token> <raw> [--decimals N] | scripts schema"
    );
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn snapshot_path(args: &[String]) -> Option<String> {
    flag_value(args, "report")
        .filter(|arg| !arg.starts_with("--"))
        .map(str::to_string)
        .or_else(|| env::var("EPOCH_SNAPSHOT").ok())
}

fn display_decimals(args: &[String]) -> anyhow::Result<u32> {
    match flag_value(args, "--dp") {
        Some(dp) => dp.parse().with_context(|| format!("invalid --dp value {dp}")),
        None => match env::var("DISPLAY_DECIMALS") {
            Ok(dp) => dp
                .parse()
                .with_context(|| format!("invalid DISPLAY_DECIMALS value {dp}")),
            Err(_) => Ok(DEFAULT_DISPLAY_DECIMALS),
        },
    }
}

mod report;
