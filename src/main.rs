use std::path::PathBuf;

use anyhow::{Context, bail};
use famille::utils::logging::init_logging;
use famille::loader::load_collection;
use famille::{FamilleConfig, PersonId};
use log::info;

fn main() -> anyhow::Result<()> {
    // Setup logging
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(roster_path) = args.next().map(PathBuf::from) else {
        bail!("usage: famille <roster.json> [person-id]");
    };
    let person_id = args
        .next()
        .map(|raw| raw.parse::<PersonId>())
        .transpose()
        .context("person id must be an integer")?;

    let config = FamilleConfig::from_env().context("Failed to read configuration")?;
    let today = chrono::Local::now().date_naive();
    let roster = load_collection(&roster_path)
        .with_context(|| format!("Failed to load roster from {}", roster_path.display()))?
        .with_derived_ages(&today);

    if let Some(id) = person_id {
        let person = roster.require(id)?;
        info!("Computing eligible relatives for {}", person.display_label());
    } else {
        info!("Computing eligible relatives for a new person");
    }

    let relatives = roster.eligible_relatives(person_id, &config.filter);
    println!("{}", serde_json::to_string_pretty(&relatives)?);

    Ok(())
}
