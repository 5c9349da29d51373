use anyhow::Context;
use tracing::info;
use vinyl_application::ports::RecordRepository;
use vinyl_domain::RecordSeed;

/// Loads configured records through the normal create path. Any rejected
/// seed aborts start-up.
pub fn seed_records(store: &dyn RecordRepository, seeds: &[RecordSeed]) -> anyhow::Result<()> {
    for seed in seeds {
        store
            .create(&seed.domain, &seed.address, seed.ttl)
            .with_context(|| format!("invalid seed record for {}", seed.domain))?;
    }

    if !seeds.is_empty() {
        info!(count = seeds.len(), "Seed records loaded");
    }

    Ok(())
}
