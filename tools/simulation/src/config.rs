//! Run configuration
//!
//! All process parameters are externally supplied constants, read once at
//! startup: producer count, run duration, producer think time, and the
//! price/quantity sampling ranges. Defaults mirror the reference workload
//! (4 producers over 10 seconds, prices 95..=105, quantities 1..=10).

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use types::errors::ConfigError;

/// Per-producer order sampling parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerConfig {
    /// Lowest price a producer will quote (inclusive)
    pub min_price: i64,
    /// Highest price a producer will quote (inclusive)
    pub max_price: i64,
    /// Smallest order quantity (inclusive)
    pub min_quantity: i64,
    /// Largest order quantity (inclusive)
    pub max_quantity: i64,
    /// Open-loop throttle between consecutive orders
    pub think_time: Duration,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            min_price: 95,
            max_price: 105,
            min_quantity: 1,
            max_quantity: 10,
            think_time: Duration::from_micros(10),
        }
    }
}

/// Full run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of concurrent producer threads
    pub producers: usize,
    /// Wall-clock length of the run before shutdown is signaled
    pub duration: Duration,
    /// Base RNG seed; producer `i` derives its stream from `seed + i`
    pub seed: u64,
    /// Order sampling parameters shared by all producers
    pub producer: ProducerConfig,
    /// Optional path for the JSON run report
    pub export_path: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            producers: 4,
            duration: Duration::from_secs(10),
            seed: 42,
            producer: ProducerConfig::default(),
            export_path: None,
        }
    }
}

impl SimConfig {
    /// Build a configuration from defaults plus `SIM_*` environment overrides
    ///
    /// Recognized variables: `SIM_PRODUCERS`, `SIM_DURATION_SECS`,
    /// `SIM_SEED`, `SIM_THINK_TIME_US`, `SIM_PRICE_MIN`, `SIM_PRICE_MAX`,
    /// `SIM_QTY_MIN`, `SIM_QTY_MAX`, `SIM_EXPORT_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(n) = parse_env::<usize>("SIM_PRODUCERS")? {
            config.producers = n;
        }
        if let Some(secs) = parse_env::<u64>("SIM_DURATION_SECS")? {
            config.duration = Duration::from_secs(secs);
        }
        if let Some(seed) = parse_env::<u64>("SIM_SEED")? {
            config.seed = seed;
        }
        if let Some(us) = parse_env::<u64>("SIM_THINK_TIME_US")? {
            config.producer.think_time = Duration::from_micros(us);
        }
        if let Some(p) = parse_env::<i64>("SIM_PRICE_MIN")? {
            config.producer.min_price = p;
        }
        if let Some(p) = parse_env::<i64>("SIM_PRICE_MAX")? {
            config.producer.max_price = p;
        }
        if let Some(q) = parse_env::<i64>("SIM_QTY_MIN")? {
            config.producer.min_quantity = q;
        }
        if let Some(q) = parse_env::<i64>("SIM_QTY_MAX")? {
            config.producer.max_quantity = q;
        }
        if let Ok(path) = env::var("SIM_EXPORT_PATH") {
            if !path.is_empty() {
                config.export_path = Some(path);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject inverted ranges and non-positive quantities up front
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.producer.min_price > self.producer.max_price {
            return Err(ConfigError::InvalidRange {
                name: "price".to_string(),
                min: self.producer.min_price,
                max: self.producer.max_price,
            });
        }
        if self.producer.min_quantity > self.producer.max_quantity {
            return Err(ConfigError::InvalidRange {
                name: "quantity".to_string(),
                min: self.producer.min_quantity,
                max: self.producer.max_quantity,
            });
        }
        if self.producer.min_quantity < 1 {
            return Err(ConfigError::InvalidValue {
                name: "SIM_QTY_MIN".to_string(),
                value: self.producer.min_quantity.to_string(),
            });
        }
        Ok(())
    }
}

/// Read and parse one optional environment variable
fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_reference_workload() {
        let config = SimConfig::default();
        assert_eq!(config.producers, 4);
        assert_eq!(config.duration, Duration::from_secs(10));
        assert_eq!(config.producer.min_price, 95);
        assert_eq!(config.producer.max_price, 105);
        assert_eq!(config.producer.min_quantity, 1);
        assert_eq!(config.producer.max_quantity, 10);
        assert_eq!(config.producer.think_time, Duration::from_micros(10));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_price_range() {
        let mut config = SimConfig::default();
        config.producer.min_price = 110;
        config.producer.max_price = 90;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let mut config = SimConfig::default();
        config.producer.min_quantity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.producers, config.producers);
        assert_eq!(parsed.producer.think_time, config.producer.think_time);
    }
}
