use std::fmt;
use std::str::FromStr;

use data_core_api::{DataError, DataResult};

/// SQL syntax variant a repository is bound to.
///
/// A dialect decides how identifiers are quoted, how bind parameters are
/// written and how a pagination clause is rendered. It carries no state and
/// is compared by value.
///
/// # Example
/// ```
/// use data_core_db::dialect::Dialect;
///
/// let dialect = Dialect::from_name("oracle").unwrap();
/// assert_eq!(dialect, Dialect::Oracle);
/// assert_eq!(dialect.quote_identifier("country"), "\"COUNTRY\"");
/// assert_eq!(dialect.placeholder(1), ":1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    H2,
    MySql,
    Postgres,
    SqlServer,
    Oracle,
    Ansi,
}

/// How bind parameters are written into statement text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?`
    Positional,
    /// `$1`, `$2`, ...
    Dollar,
    /// `:1`, `:2`, ...
    Colon,
}

impl Dialect {
    pub const ALL: [Dialect; 6] = [
        Dialect::H2,
        Dialect::MySql,
        Dialect::Postgres,
        Dialect::SqlServer,
        Dialect::Oracle,
        Dialect::Ansi,
    ];

    /// Canonical upper-case name, as accepted by [`Dialect::from_name`]
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::H2 => "H2",
            Dialect::MySql => "MYSQL",
            Dialect::Postgres => "POSTGRES",
            Dialect::SqlServer => "SQL_SERVER",
            Dialect::Oracle => "ORACLE",
            Dialect::Ansi => "ANSI",
        }
    }

    /// Look a dialect up by its canonical name, ignoring case.
    ///
    /// # Returns
    /// * `Err(DataError::ConfigurationError)` - if the name is not a known dialect
    pub fn from_name(name: &str) -> DataResult<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DataError::ConfigurationError(format!("Unknown dialect '{name}'")))
    }

    /// Opening and closing quote characters for identifiers
    fn quote_chars(&self) -> (char, char) {
        match self {
            Dialect::MySql => ('`', '`'),
            Dialect::SqlServer => ('[', ']'),
            Dialect::H2 | Dialect::Postgres | Dialect::Oracle | Dialect::Ansi => ('"', '"'),
        }
    }

    /// Whether unquoted identifiers fold to upper case in this dialect.
    ///
    /// Quoted identifiers are case sensitive, so folding dialects get their
    /// identifiers upper-cased before quoting to keep matching unquoted DDL.
    pub fn folds_to_upper(&self) -> bool {
        matches!(self, Dialect::Oracle | Dialect::H2)
    }

    pub fn placeholder_style(&self) -> PlaceholderStyle {
        match self {
            Dialect::Postgres => PlaceholderStyle::Dollar,
            Dialect::Oracle => PlaceholderStyle::Colon,
            Dialect::H2 | Dialect::MySql | Dialect::SqlServer | Dialect::Ansi => {
                PlaceholderStyle::Positional
            }
        }
    }

    /// Quote a single identifier (table, column or alias)
    pub fn quote_identifier(&self, identifier: &str) -> String {
        let (open, close) = self.quote_chars();
        let folded = if self.folds_to_upper() {
            identifier.to_uppercase()
        } else {
            identifier.to_string()
        };

        let mut quoted = String::with_capacity(folded.len() + 2);
        quoted.push(open);
        for ch in folded.chars() {
            if ch == close {
                quoted.push(close);
            }
            quoted.push(ch);
        }
        quoted.push(close);
        quoted
    }

    /// Bind parameter marker for the 1-based parameter `index`
    pub fn placeholder(&self, index: usize) -> String {
        match self.placeholder_style() {
            PlaceholderStyle::Positional => "?".to_string(),
            PlaceholderStyle::Dollar => format!("${index}"),
            PlaceholderStyle::Colon => format!(":{index}"),
        }
    }

    /// Row-limiting clause appended after `ORDER BY`
    pub fn pagination_clause(&self, limit: usize, offset: usize) -> String {
        match self {
            Dialect::Oracle | Dialect::SqlServer | Dialect::Ansi => {
                format!("OFFSET {offset} ROWS FETCH NEXT {limit} ROWS ONLY")
            }
            Dialect::H2 | Dialect::MySql | Dialect::Postgres => {
                format!("LIMIT {limit} OFFSET {offset}")
            }
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::from_name(s)
    }
}
