// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Administrative query templates.
//!
//! Literal query strings for the HTTP query endpoint. Query execution
//! itself is out of scope here; callers hand these to whatever HTTP
//! client they run.

/// `CREATE DATABASE "name"` with the name double-quote-escaped.
///
/// Interior backslashes and double quotes are escaped; single quotes
/// need no escape inside the double-quoted name and pass through.
pub fn create_database(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("CREATE DATABASE \"{}\"", escaped)
}

/// The database listing query.
pub fn show_databases() -> String {
    "show databases".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_database_plain_name() {
        assert_eq!(create_database("mydb"), "CREATE DATABASE \"mydb\"");
    }

    #[test]
    fn test_create_database_escapes_double_quotes() {
        assert_eq!(
            create_database("my\"db\""),
            "CREATE DATABASE \"my\\\"db\\\"\""
        );
    }

    #[test]
    fn test_create_database_passes_single_quotes_through() {
        assert_eq!(create_database("my'db'"), "CREATE DATABASE \"my'db'\"");
    }

    #[test]
    fn test_create_database_escapes_backslashes() {
        assert_eq!(create_database("a\\b"), "CREATE DATABASE \"a\\\\b\"");
    }

    #[test]
    fn test_show_databases() {
        assert_eq!(show_databases(), "show databases");
    }
}
