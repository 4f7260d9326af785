//! Deployment environment and the staff root guard.
//!
//! # State Machine
//! ```text
//! development → fall through to the root page
//! anything else → 302 to the configured external URL
//! ```
//!
//! The environment is read once at startup and handed to the controllers
//! that need it; nothing consults a process-wide flag at request time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

/// Outcome of evaluating the guard for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the page normally.
    Proceed,
    /// Send the client elsewhere.
    Redirect(String),
}

/// Redirects away from a page everywhere except development.
#[derive(Debug, Clone)]
pub struct EnvironmentGuard {
    environment: Environment,
    redirect_to: String,
}

impl EnvironmentGuard {
    pub fn new(environment: Environment, redirect_to: impl Into<String>) -> Self {
        Self {
            environment,
            redirect_to: redirect_to.into(),
        }
    }

    pub fn evaluate(&self) -> GuardOutcome {
        if self.environment.is_development() {
            GuardOutcome::Proceed
        } else {
            GuardOutcome::Redirect(self.redirect_to.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_states() {
        let dev = EnvironmentGuard::new(Environment::Development, "https://umaxica.org");
        assert_eq!(dev.evaluate(), GuardOutcome::Proceed);

        for env in [Environment::Test, Environment::Staging, Environment::Production] {
            let guard = EnvironmentGuard::new(env, "https://umaxica.org");
            assert_eq!(
                guard.evaluate(),
                GuardOutcome::Redirect("https://umaxica.org".into())
            );
        }
    }

    #[test]
    fn test_parse_environment() {
        assert_eq!("Production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert!("qa".parse::<Environment>().is_err());
    }
}
