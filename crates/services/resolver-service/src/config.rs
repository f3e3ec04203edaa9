//! Resolver service configuration.

use common::ServiceConfig;

/// Name reported by logs and the health check
pub const SERVICE_NAME: &str = "resolver-service";

/// Prefix of the `*_HOST` / `*_PORT` environment variables
pub const ENV_PREFIX: &str = "RESOLVER";

/// Port used when `RESOLVER_PORT` is unset
pub const DEFAULT_PORT: u16 = 3001;

/// Which `UsersService` implementation answers requests.
///
/// Parsed by clap from `--backend` or `RESOLVER_BACKEND`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Every operation returns the canned record
    #[default]
    Canned,
    /// Operations act on an in-memory user store
    Memory,
}

/// Resolver service configuration.
#[derive(Debug, Clone)]
pub struct ResolverServiceConfig {
    /// Bind address and service identity
    pub service: ServiceConfig,
    /// Users service backend
    pub backend: Backend,
}

impl ResolverServiceConfig {
    /// Load the bind address from environment variables around a backend
    /// the command line already chose.
    pub fn from_env(backend: Backend) -> Self {
        Self {
            service: ServiceConfig::from_env(ENV_PREFIX, SERVICE_NAME, DEFAULT_PORT),
            backend,
        }
    }
}

impl Default for ResolverServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                port: DEFAULT_PORT,
                ..ServiceConfig::default()
            },
            backend: Backend::default(),
        }
    }
}
