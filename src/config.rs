//! Configuration loading for toque.
//!
//! Configuration follows a precedence chain:
//! 1. Project config (`.toque/config.toml`)
//! 2. User config (`~/.toque/config.toml`, or `$TOQUE_HOME/config.toml`)
//! 3. Defaults
//!
//! All configuration is optional. The system runs with the stock tier
//! shares and scoring parameters when no config exists.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::TierLabel;
use crate::error::{Result, ToqueError};
use crate::rank::{DEFAULT_QUANTILE, DEFAULT_TOLERANCE};

/// Default weight of a venue's initial rating relative to one user rating.
pub const DEFAULT_BASELINE_WEIGHT: u32 = 2;

/// Main configuration struct for toque.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Scoring parameters.
    pub scoring: ScoringConfig,
    /// Tier labels and shares.
    pub tiers: TiersConfig,
    /// Ratings log location.
    pub store: StoreConfig,
}

/// Scoring parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Quantile of the Beta posterior used as the rank score.
    pub quantile: f64,
    /// Bisection tolerance for the quantile solver.
    pub tolerance: f64,
    /// Weight of the initial rating relative to one user rating.
    pub baseline_weight: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            quantile: DEFAULT_QUANTILE,
            tolerance: DEFAULT_TOLERANCE,
            baseline_weight: DEFAULT_BASELINE_WEIGHT,
        }
    }
}

impl ScoringConfig {
    /// Validate the scoring parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.quantile.is_finite() || self.quantile <= 0.0 || self.quantile >= 1.0 {
            return Err(ToqueError::config(format!(
                "scoring.quantile must be strictly between 0 and 1, got {}",
                self.quantile
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ToqueError::config(format!(
                "scoring.tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.baseline_weight == 0 {
            return Err(ToqueError::config(
                "scoring.baseline_weight must be at least 1",
            ));
        }
        Ok(())
    }
}

/// One tier's label and proportional share.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierShare {
    /// The tier's label.
    pub label: TierLabel,
    /// Proportional share of the ranked list.
    pub shares: u32,
}

/// Tier labels and shares, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TiersConfig {
    /// Ordered tier shares.
    pub shares: Vec<TierShare>,
}

impl Default for TiersConfig {
    fn default() -> Self {
        // 65 total shares: a thin S tier, a broad middle, a thin bottom.
        let shares = [
            (TierLabel::S, 5),
            (TierLabel::A, 18),
            (TierLabel::B, 25),
            (TierLabel::C, 8),
            (TierLabel::D, 5),
            (TierLabel::F, 4),
        ];
        Self {
            shares: shares
                .into_iter()
                .map(|(label, shares)| TierShare { label, shares })
                .collect(),
        }
    }
}

impl TiersConfig {
    /// Validate the tier shares.
    pub fn validate(&self) -> Result<()> {
        if self.shares.is_empty() {
            return Err(ToqueError::config("tiers.shares must not be empty"));
        }
        for share in &self.shares {
            if share.shares == 0 {
                return Err(ToqueError::config(format!(
                    "tier {} must have at least 1 share",
                    share.label
                )));
            }
        }
        for (i, share) in self.shares.iter().enumerate() {
            if self.shares[..i].iter().any(|s| s.label == share.label) {
                return Err(ToqueError::config(format!(
                    "tier {} is listed more than once",
                    share.label
                )));
            }
        }
        Ok(())
    }

    /// The shares as (label, share) pairs for the partitioner.
    pub fn as_pairs(&self) -> Vec<(TierLabel, u32)> {
        self.shares
            .iter()
            .map(|share| (share.label, share.shares))
            .collect()
    }
}

/// Ratings log location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Explicit path to the ratings log. Defaults under the toque home dir.
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Resolve the ratings log path.
    ///
    /// Returns `None` only when no explicit path is set and no home
    /// directory can be determined.
    pub fn ratings_log_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| toque_home().map(|home| home.join("ratings.log")))
    }
}

/// The toque home directory.
///
/// `$TOQUE_HOME` when set, otherwise `~/.toque`.
pub fn toque_home() -> Option<PathBuf> {
    env::var_os("TOQUE_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".toque")))
}

/// Path to the user config file.
pub fn user_config_path() -> Option<PathBuf> {
    toque_home().map(|home| home.join("config.toml"))
}

/// Path to a project's config file.
pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".toque").join("config.toml")
}

impl Config {
    /// Load configuration for a project directory.
    ///
    /// The project config wins over the user config; defaults apply when
    /// neither exists. A config file that exists but fails to parse or
    /// validate is an error, not a silent fallback.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let project = project_config_path(project_dir);
        if project.exists() {
            return Self::from_file(&project);
        }

        if let Some(user) = user_config_path() {
            if user.exists() {
                return Self::from_file(&user);
            }
        }

        Ok(Self::default())
    }

    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| ToqueError::storage(path, e))?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            ToqueError::config(format!("invalid config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        self.tiers.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_shares_total_65() {
        let config = TiersConfig::default();
        let total: u32 = config.shares.iter().map(|s| s.shares).sum();
        assert_eq!(total, 65);
        let labels: Vec<TierLabel> = config.shares.iter().map(|s| s.label).collect();
        assert_eq!(labels, TierLabel::ALL.to_vec());
    }

    #[test]
    fn test_default_scoring_parameters() {
        let config = ScoringConfig::default();
        assert_eq!(config.quantile, 0.05);
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.baseline_weight, 2);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scoring]
            quantile = 0.1
            "#,
        )
        .unwrap();
        assert_eq!(config.scoring.quantile, 0.1);
        assert_eq!(config.scoring.tolerance, 1e-3);
        assert_eq!(config.tiers, TiersConfig::default());
    }

    #[test]
    fn test_parse_custom_tiers() {
        let config: Config = toml::from_str(
            r#"
            [[tiers.shares]]
            label = "S"
            shares = 1

            [[tiers.shares]]
            label = "F"
            shares = 3
            "#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.tiers.as_pairs(),
            vec![(TierLabel::S, 1), (TierLabel::F, 3)]
        );
    }

    #[test]
    fn test_rejects_quantile_out_of_range() {
        let config = ScoringConfig {
            quantile: 1.5,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ScoringConfig {
            quantile: 0.0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_tolerance() {
        let config = ScoringConfig {
            tolerance: 0.0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_baseline_weight() {
        let config = ScoringConfig {
            baseline_weight: 0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_shares() {
        let config = TiersConfig { shares: Vec::new() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_share() {
        let mut config = TiersConfig::default();
        config.shares[2].shares = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_label() {
        let mut config = TiersConfig::default();
        config.shares[5].label = TierLabel::S;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_store_path_override() {
        let config = StoreConfig {
            path: Some(PathBuf::from("/tmp/custom.log")),
        };
        assert_eq!(
            config.ratings_log_path(),
            Some(PathBuf::from("/tmp/custom.log"))
        );
    }

    #[test]
    fn test_project_config_path() {
        let path = project_config_path(Path::new("/work/food"));
        assert_eq!(path, PathBuf::from("/work/food/.toque/config.toml"));
    }

    #[test]
    fn test_from_file_rejects_invalid_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid toml [").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ToqueError::Config { .. }));
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scoring]\nquantile = 2.0\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_load_reads_project_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_dir = dir.path().join(".toque");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("config.toml"), "[scoring]\nquantile = 0.25\n").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.scoring.quantile, 0.25);
    }
}
