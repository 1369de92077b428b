//! Runtime configuration read from environment variables.

use sha2::{Digest, Sha256};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ADMIN_PASSWORD: &str = "change-me";
/// Two matches per displayed round.
pub const DEFAULT_MATCHES_PER_ROUND: usize = 2;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub admin_password: String,
    pub matches_per_round: usize,
    /// Roster CSV imported once at startup.
    pub roster_csv: Option<PathBuf>,
    /// Mark the admin session cookie `Secure` (only sent over HTTPS).
    pub secure_cookies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            matches_per_round: DEFAULT_MATCHES_PER_ROUND,
            roster_csv: None,
            secure_cookies: false,
        }
    }
}

impl Config {
    /// HOST, PORT, ADMIN_PASSWORD, MATCHES_PER_ROUND, ROSTER_CSV, SECURE_COOKIES.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable numbers fall back to their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };
        let matches_per_round = match non_empty("MATCHES_PER_ROUND") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    log::warn!(
                        "Ignoring invalid MATCHES_PER_ROUND {:?}, using {}",
                        raw,
                        defaults.matches_per_round
                    );
                    defaults.matches_per_round
                }
            },
            None => defaults.matches_per_round,
        };

        Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port,
            admin_password: non_empty("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            matches_per_round,
            roster_csv: non_empty("ROSTER_CSV").map(PathBuf::from),
            secure_cookies: non_empty("SECURE_COOKIES")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.secure_cookies),
        }
    }

    pub fn uses_default_password(&self) -> bool {
        self.password_matches(DEFAULT_ADMIN_PASSWORD)
    }

    /// Compare a submitted password against ADMIN_PASSWORD.
    ///
    /// Both sides are hashed to fixed-length digests and compared without early exit,
    /// so timing depends on neither the length nor the position of the first mismatch.
    pub fn password_matches(&self, candidate: &str) -> bool {
        let expected = Sha256::digest(self.admin_password.as_bytes());
        let given = Sha256::digest(candidate.as_bytes());
        expected
            .iter()
            .zip(given.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}
