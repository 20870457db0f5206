use mess_config::MessConfig;

/// Load layered configuration, honoring a `.env` file in the working directory.
pub fn load_config() -> anyhow::Result<MessConfig> {
    let config = MessConfig::load_with_dotenv()?;
    tracing::debug!(
        total_eligible = config.polls.total_eligible,
        monthly_fee = config.payments.monthly_fee,
        seed = config.general.seed_sample_data,
        "configuration loaded"
    );
    Ok(config)
}
