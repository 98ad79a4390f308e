use crate::domain::model::BirthData;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bodygraph")]
#[command(about = "Compute a design chart from birth data")]
pub struct CliConfig {
    #[arg(long)]
    pub year: i32,

    #[arg(long)]
    pub month: u32,

    #[arg(long)]
    pub day: u32,

    #[arg(long)]
    pub hour: u32,

    #[arg(long)]
    pub minute: u32,

    #[arg(long, default_value = "0")]
    pub second: u32,

    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,

    /// Remote position service; omit to compute fully offline.
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Skip the remote service even when an endpoint is set.
    #[arg(long)]
    pub offline: bool,

    #[arg(long, default_value = "5")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "64")]
    pub cache_capacity: usize,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Load engine settings from a TOML file instead of the flags above.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn birth_data(&self) -> BirthData {
        BirthData {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> Option<&str> {
        if self.offline {
            None
        } else {
            self.api_endpoint.as_deref()
        }
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_seconds
    }

    fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.api_endpoint {
            validate_url("api_endpoint", endpoint)?;
        }
        validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "bodygraph",
            "--year", "1990",
            "--month", "5",
            "--day", "15",
            "--hour", "14",
            "--minute", "30",
            "--latitude", "55.7558",
            "--longitude", "37.6176",
        ]
    }

    #[test]
    fn test_parse_minimal_args() {
        let config = CliConfig::parse_from(base_args());
        assert_eq!(config.second, 0);
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.cache_capacity, 64);
        assert!(config.api_endpoint().is_none());
        assert!(config.validate().is_ok());

        let birth = config.birth_data();
        assert_eq!(birth.year, 1990);
        assert!((birth.latitude - 55.7558).abs() < 1e-12);
    }

    #[test]
    fn test_offline_hides_the_endpoint() {
        let mut args = base_args();
        args.extend(["--api-endpoint", "https://positions.example.com", "--offline"]);
        let config = CliConfig::parse_from(args);
        assert!(config.api_endpoint().is_none());
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let mut args = base_args();
        args.extend(["--api-endpoint", "not-a-url"]);
        let config = CliConfig::parse_from(args);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_coordinates_parse() {
        let mut args = base_args();
        args[12] = "-33.8688";
        args[14] = "-151.2093";
        let config = CliConfig::parse_from(args);
        assert!(config.latitude < 0.0);
        assert!(config.longitude < 0.0);
    }
}
