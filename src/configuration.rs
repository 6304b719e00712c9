//! Config for the session front-end behaviors.
//!
//! Configuration can be created programmatically using
//! [`Configuration::new()`] or by reading environment variables using
//! [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! All values are optional. Flags are case-insensitive; set them to `"true"`
//! to enable.
//!
//! - `LEAGUE_VERBOSE` — Re-print the table and fixture preview after every action (default: `true`)
//! - `LEAGUE_LOG` — Enable logging to a file (default: `false`)
//! - `LEAGUE_PREVIEW` — Number of upcoming fixtures to display (default: `3`)
//! - `LEAGUE_SEED` — Fixture shuffle seed, for reproducible schedules (default: unset)

use std::env;

/// Configuration for a tournament session front-end.
#[derive(Debug, Clone, Copy)]
pub struct Configuration {
    verbose: bool,
    log: bool,
    preview_count: usize,
    seed: Option<u64>,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - The table and the fixture preview are re-printed after every action.
    /// - Logging to file is disabled.
    /// - Three upcoming fixtures are previewed.
    /// - The fixture shuffle is seeded from entropy.
    pub fn new() -> Self {
        Self {
            verbose: true,
            log: false,
            preview_count: 3,
            seed: None,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Recognized variables are listed in the module documentation. Any
    /// other value (including unset) results in the default for that field.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        fn parse_usize(var: &str) -> Option<usize> {
            env::var(var).ok()?.parse().ok()
        }

        fn parse_u64(var: &str) -> Option<u64> {
            env::var(var).ok()?.parse().ok()
        }

        let defaults = Self::new();
        Self {
            verbose: get_env_flag("LEAGUE_VERBOSE", defaults.verbose),
            log: get_env_flag("LEAGUE_LOG", defaults.log),
            preview_count: parse_usize("LEAGUE_PREVIEW").unwrap_or(defaults.preview_count),
            seed: parse_u64("LEAGUE_SEED"),
        }
    }

    /// Enable or disable re-printing the table after every action.
    #[must_use]
    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Enable or disable logging to file.
    #[must_use]
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Sets how many upcoming fixtures the preview shows.
    #[must_use]
    pub fn with_preview_count(mut self, count: usize) -> Self {
        self.preview_count = count;
        self
    }

    /// Fixes the fixture shuffle seed, making the play order reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether the table and preview are re-printed after every action.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether file logging is requested.
    pub fn log(&self) -> bool {
        self.log
    }

    /// How many upcoming fixtures the preview shows.
    pub fn preview_count(&self) -> usize {
        self.preview_count
    }

    /// The fixed shuffle seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Configuration::new();
        assert!(config.verbose());
        assert!(!config.log());
        assert_eq!(config.preview_count(), 3);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn builders_chain() {
        let config = Configuration::new()
            .with_verbose(false)
            .with_preview_count(5)
            .with_seed(9);
        assert!(!config.verbose());
        assert_eq!(config.preview_count(), 5);
        assert_eq!(config.seed(), Some(9));
    }
}
