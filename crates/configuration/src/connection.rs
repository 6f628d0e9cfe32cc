use crate::error::ConfigError;
use std::fmt;
use url::{Host, Url};

/// Only connection strings starting with this prefix are recognised.
pub const MYSQL_SCHEME_PREFIX: &str = "mysql://";

/// Port used when the connection string does not name one.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Discrete connection parameters extracted from `DATABASE_URL`.
///
/// Absent components stay `None` and are left for the driver to reject
/// at connect time.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: String,
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .finish()
    }
}

/// Resolves a raw `DATABASE_URL` value into connection parameters.
///
/// Returns `Ok(None)` when the value is empty or does not use the
/// `mysql://` scheme; callers treat that as "nothing configured".
pub fn resolve_database_url(raw: &str) -> Result<Option<ConnectionParams>, ConfigError> {
    if raw.is_empty() || !raw.starts_with(MYSQL_SCHEME_PREFIX) {
        return Ok(None);
    }

    let url = Url::parse(raw)?;
    let (user, password) = raw_credentials(raw);

    let params = ConnectionParams {
        host: host_name(url.host()),
        port: url.port().unwrap_or(DEFAULT_MYSQL_PORT),
        user: user.filter(|u| !u.is_empty()).map(str::to_string),
        password: password.map(str::to_string),
        database: database_name(url.path()),
    };

    tracing::debug!(?params, "Resolved DATABASE_URL.");
    Ok(Some(params))
}

/// User and password exactly as written in the authority.
///
/// `Url` percent-encodes userinfo while parsing, which would change the
/// credentials sent to the server, so they are sliced from the raw string.
fn raw_credentials(raw: &str) -> (Option<&str>, Option<&str>) {
    let rest = &raw[MYSQL_SCHEME_PREFIX.len()..];
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    match authority.rsplit_once('@') {
        Some((userinfo, _)) => match userinfo.split_once(':') {
            Some((user, password)) => (Some(user), Some(password)),
            None => (Some(userinfo), None),
        },
        None => (None, None),
    }
}

/// IPv6 literals come back without their brackets.
fn host_name(host: Option<Host<&str>>) -> Option<String> {
    match host? {
        Host::Domain(domain) if domain.is_empty() => None,
        Host::Domain(domain) => Some(domain.to_string()),
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
    }
}

/// Drops the leading path separator and anything from the first `?`.
fn database_name(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    trimmed.split('?').next().unwrap_or_default().to_string()
}
