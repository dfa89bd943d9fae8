//! Connection pool setup for the catalog store.

use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::{Nullable, Text};
use diesel::sqlite::SqliteConnection;
use serde::{Deserialize, Serialize};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Credential scope a store handle is opened with.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessScope {
    /// Full read-write access to the database file.
    Privileged,
    /// Read-only access; SQLite rejects any write through this handle.
    Anonymous,
}

impl AccessScope {
    /// Builds the SQLite connection string for `database_url` in this scope.
    pub fn connection_string(self, database_url: &str) -> String {
        match self {
            Self::Privileged => database_url.to_string(),
            Self::Anonymous => {
                let path = database_url.strip_prefix("file:").unwrap_or(database_url);
                format!("file:{path}?mode=ro")
            }
        }
    }
}

diesel::define_sql_function! {
    /// Unicode lowercase of a text value. SQLite `LIKE` only folds ASCII.
    fn fold_case(text: Nullable<Text>) -> Nullable<Text>;
}

diesel::define_sql_function! {
    /// Text value with leading and trailing whitespace removed, using the
    /// same rule as the domain name types.
    fn trim_text(text: Nullable<Text>) -> Nullable<Text>;
}

/// Case fold applied to search text and to the searched columns.
pub fn fold_text(text: &str) -> String {
    text.to_lowercase()
}

/// Installs the catalog text functions on every new pooled connection.
#[derive(Debug, Clone, Copy)]
struct CatalogFunctions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for CatalogFunctions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        fold_case_utils::register_impl(conn, |text: Option<String>| {
            text.map(|t| fold_text(&t))
        })
        .map_err(diesel::r2d2::Error::QueryError)?;
        trim_text_utils::register_impl(conn, |text: Option<String>| {
            text.map(|t| t.trim().to_string())
        })
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Open an r2d2 pool against the SQLite database at `database_url`.
pub fn establish_connection_pool(
    database_url: &str,
    scope: AccessScope,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(scope.connection_string(database_url));
    Pool::builder()
        .connection_customizer(Box::new(CatalogFunctions))
        .build(manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privileged_scope_keeps_url() {
        assert_eq!(AccessScope::Privileged.connection_string("app.db"), "app.db");
    }

    #[test]
    fn anonymous_scope_opens_read_only() {
        assert_eq!(
            AccessScope::Anonymous.connection_string("app.db"),
            "file:app.db?mode=ro"
        );
        assert_eq!(
            AccessScope::Anonymous.connection_string("file:data/app.db"),
            "file:data/app.db?mode=ro"
        );
    }

    #[test]
    fn pooled_connections_fold_and_trim_text() {
        use diesel::dsl::sql;
        use diesel::prelude::*;
        use diesel::sql_types::Bool;

        let pool = establish_connection_pool(":memory:", AccessScope::Privileged).unwrap();
        let mut conn = pool.get().unwrap();

        let folded = diesel::select(fold_case(Some("ÉCLAT Ｓerum")))
            .get_result::<Option<String>>(&mut conn)
            .unwrap();
        assert_eq!(folded.as_deref(), Some("éclat ｓerum"));

        let trimmed = diesel::select(trim_text(Some(" Lip\t")))
            .get_result::<Option<String>>(&mut conn)
            .unwrap();
        assert_eq!(trimmed.as_deref(), Some("Lip"));

        let empty = diesel::select(fold_case(None::<String>))
            .get_result::<Option<String>>(&mut conn)
            .unwrap();
        assert!(empty.is_none());

        let matched = diesel::select(sql::<Bool>("fold_case('ÜBER') = 'über'"))
            .get_result::<bool>(&mut conn)
            .unwrap();
        assert!(matched);
    }
}
