use mess_config::MessConfig;
use mess_store::MessService;

/// Shared application resources initialized once per invocation.
///
/// State lives only as long as the process, so every run starts from the
/// configured baseline.
pub struct AppContext {
    pub service: MessService,
    pub config: MessConfig,
}

impl AppContext {
    /// Build the service, seeded unless `empty` or the config says otherwise.
    pub fn init(config: MessConfig, empty: bool) -> anyhow::Result<Self> {
        let service = if empty {
            MessService::new(&config)
        } else {
            MessService::from_config(&config)?
        };
        Ok(Self { service, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_flag_overrides_seeding() {
        let ctx = AppContext::init(MessConfig::default(), true).unwrap();
        assert_eq!(ctx.service.dashboard().announcement_count, 0);

        let ctx = AppContext::init(MessConfig::default(), false).unwrap();
        assert_eq!(ctx.service.dashboard().announcement_count, 5);
    }
}
