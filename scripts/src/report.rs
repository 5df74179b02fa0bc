use std::{fmt::Write, fs, path::Path};

use anyhow::Context;
use circle_distributions::{to_display_amount, EpochReport};
use circle_interface::EpochSnapshot;

pub fn load(path: impl AsRef<Path>) -> anyhow::Result<EpochReport> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let snapshot: EpochSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("parsing epoch snapshot {}", path.display()))?;

    log::debug!(
        "loaded {} circle users from {}",
        snapshot.circle_users.len(),
        path.display()
    );

    Ok(EpochReport::from_snapshot(&snapshot)?)
}

pub fn render(report: &EpochReport, decimal_places: u32) -> String {
    let mut out = String::new();
    let amount = |x| to_display_amount(x, decimal_places);

    let number = report
        .epoch_number
        .map(|n| n.to_string())
        .unwrap_or_default();
    writeln!(
        out,
        "Epoch {}: {} - {}",
        number, report.start_date, report.end_date
    )
    .ok();

    if let Some(notice) = &report.notice {
        writeln!(out, "{notice}").ok();
        return out;
    }

    writeln!(out, "Total {}: {}", report.give_token_name, report.total_give).ok();
    if report.combined {
        writeln!(out, "Gift circle and fixed payments share one distribution").ok();
    }
    writeln!(
        out,
        "{:<20} {:<44} {:>8} {:>6} {:>14} {:>14} {:>14} {:>14}",
        "name",
        "address",
        "received",
        "givers",
        "fixed",
        format!("fixed {}", report.fixed_token_name).trim(),
        format!("circle {}", report.token_name).trim(),
        "combined",
    )
    .ok();

    for member in &report.members {
        writeln!(
            out,
            "{:<20} {:<44} {:>8} {:>6} {:>14} {:>14} {:>14} {:>14}",
            member.name,
            member.address,
            member.received,
            member.givers,
            amount(member.fixed_payment_amount),
            amount(member.fixed_payment_claimed),
            amount(member.circle_claimed),
            amount(member.combined_claimed),
        )
        .ok();
    }

    out
}
