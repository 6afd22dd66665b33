use tracing::debug;

/// Environment variable holding the shuffle seed.
pub const SEED_ENV: &str = "POKER_SEED";

/// Configuration for dealing hands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerConfig {
    /// Fixed shuffle seed, OS entropy when unset.
    pub seed: Option<u64>,
}

impl DealerConfig {
    pub fn new() -> Self {
        let seed = std::env::var(SEED_ENV).ok().and_then(|s| parse_seed(&s));
        debug!(seed = ?seed, "Loaded dealer configuration");

        Self { seed }
    }

    /// Overrides the seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_seed(s: &str) -> Option<u64> {
    s.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" 7 "), Some(7));
        assert_eq!(parse_seed("seven"), None);
        assert_eq!(parse_seed("-1"), None);
        assert_eq!(parse_seed(""), None);
    }

    #[test]
    fn test_seed_from_env() {
        std::env::set_var(SEED_ENV, "1234");
        assert_eq!(DealerConfig::new().seed, Some(1234));

        std::env::set_var(SEED_ENV, "not a number");
        assert_eq!(DealerConfig::new().seed, None);

        std::env::remove_var(SEED_ENV);
        assert_eq!(DealerConfig::new().seed, None);
    }

    #[test]
    fn test_with_seed_overrides() {
        let config = DealerConfig { seed: Some(1) };
        assert_eq!(config.clone().with_seed(Some(2)).seed, Some(2));
        assert_eq!(config.with_seed(None).seed, Some(1));
    }
}
