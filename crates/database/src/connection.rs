use crate::error::DbError;
use configuration::ConnectionParams;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlSslMode};
use sqlx::ConnectOptions;

/// Builds driver options from resolved parameters.
///
/// TLS is always required. Components missing from the connection string are
/// left at the driver's defaults so that a bad string fails at connect time.
pub fn connect_options(params: &ConnectionParams) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .port(params.port)
        .ssl_mode(MySqlSslMode::Required);

    if let Some(host) = &params.host {
        options = options.host(host);
    }
    if let Some(user) = &params.user {
        options = options.username(user);
    }
    if let Some(password) = &params.password {
        options = options.password(password);
    }
    if !params.database.is_empty() {
        options = options.database(&params.database);
    }

    options
}

/// Establishes one encrypted connection to the MySQL server.
///
/// There is no pool: a backup run needs exactly one connection, and it is
/// released when the returned value is closed or dropped.
pub async fn connect(params: &ConnectionParams) -> Result<MySqlConnection, DbError> {
    tracing::info!(
        host = params.host.as_deref().unwrap_or("localhost"),
        port = params.port,
        database = %params.database,
        "Connecting to database."
    );

    connect_options(params)
        .connect()
        .await
        .map_err(DbError::ConnectionError)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ConnectionParams {
        ConnectionParams {
            host: Some("db.internal".into()),
            port: 3307,
            user: Some("reader".into()),
            password: Some("secret".into()),
            database: "appdb".into(),
        }
    }

    #[test]
    fn options_carry_resolved_parameters() {
        let options = connect_options(&params());
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 3307);
        assert_eq!(options.get_username(), "reader");
        assert_eq!(options.get_database(), Some("appdb"));
    }

    #[test]
    fn empty_database_is_left_unset() {
        let mut p = params();
        p.database.clear();
        assert_eq!(connect_options(&p).get_database(), None);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        let mut p = params();
        p.host = Some("127.0.0.1".into());
        // Port 1 is reserved and nothing listens on it.
        p.port = 1;
        let result = connect(&p).await;
        assert!(matches!(result, Err(DbError::ConnectionError(_))));
    }
}
