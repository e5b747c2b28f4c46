//! # Built-in Catalogue
//!
//! Three sample enumerations, one of each kind, and the type-erased [`Row`]
//! view the subcommands render.
//!
//! | Name | Kind | Values |
//! |------|------|--------|
//! | `http-status` | value | reason phrase, keyed by status code |
//! | `currency` | multi-value | alphabetic code, numeric code, minor units |
//! | `weekday` | id | none (ISO day number is the id) |

use std::fmt;

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Serialize;
use tenum_core::{
    enumeration, Enumeration, Id, MultiValueEnumeration, Registry, Value, ValueEnumeration,
};

enumeration! {
    /// HTTP status codes and their reason phrases.
    pub struct HttpStatus: ValueEntity {
        ok = 200 => "OK",
        created = 201 => "Created",
        accepted = 202 => "Accepted",
        no_content = 204 => "No Content",
        moved_permanently = 301 => "Moved Permanently",
        not_modified = 304 => "Not Modified",
        bad_request = 400 => "Bad Request",
        unauthorized = 401 => "Unauthorized",
        forbidden = 403 => "Forbidden",
        not_found = 404 => "Not Found",
        conflict = 409 => "Conflict",
        internal_server_error = 500 => "Internal Server Error",
        service_unavailable = 503 => "Service Unavailable",
    }
}

enumeration! {
    /// ISO 4217 currencies: alphabetic code, numeric code, minor units.
    pub struct Currency: MultiValueEntity {
        chf = 756 => ["CHF", 756, 2],
        eur = 978 => ["EUR", 978, 2],
        gbp = 826 => ["GBP", 826, 2],
        jpy = 392 => ["JPY", 392, 0],
        kwd = 414 => ["KWD", 414, 3],
        usd = 840 => ["USD", 840, 2],
    }
}

enumeration! {
    /// ISO 8601 weekdays.
    pub struct Weekday: IdEntity {
        monday = 1,
        tuesday = 2,
        wednesday = 3,
        thursday = 4,
        friday = 5,
        saturday = 6,
        sunday = 7,
    }
}

/// Selects a catalogue enumeration on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogName {
    HttpStatus,
    Currency,
    Weekday,
}

impl CatalogName {
    pub fn all() -> &'static [CatalogName] {
        &[Self::HttpStatus, Self::Currency, Self::Weekday]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HttpStatus => "http-status",
            Self::Currency => "currency",
            Self::Weekday => "weekday",
        }
    }

    /// Whether this enumeration has been materialised in the global registry.
    pub fn is_built(&self) -> bool {
        let registry = Registry::global();
        match self {
            Self::HttpStatus => registry.is_built::<HttpStatus>(),
            Self::Currency => registry.is_built::<Currency>(),
            Self::Weekday => registry.is_built::<Weekday>(),
        }
    }

    /// Every instance in declaration order.
    pub fn rows(&self) -> Vec<Row> {
        match self {
            Self::HttpStatus => HttpStatus::all().iter().map(|s| self.row_of_value(s)).collect(),
            Self::Currency => Currency::all().iter().map(|c| self.row_of_values(c)).collect(),
            Self::Weekday => Weekday::all().iter().map(|d| self.row_of_id(d)).collect(),
        }
    }

    pub fn by_id(&self, id: Id) -> Option<Row> {
        match self {
            Self::HttpStatus => HttpStatus::from_id(id).map(|s| self.row_of_value(s)),
            Self::Currency => Currency::from_id(id).map(|c| self.row_of_values(c)),
            Self::Weekday => Weekday::from_id(id).map(|d| self.row_of_id(d)),
        }
    }

    /// Single-value reverse lookup.
    ///
    /// # Errors
    ///
    /// Fails if the enumeration does not carry exactly one value per instance.
    pub fn by_value(&self, value: Value) -> Result<Option<Row>> {
        match self {
            Self::HttpStatus => Ok(HttpStatus::from_value(value).map(|s| self.row_of_value(s))),
            Self::Currency | Self::Weekday => {
                bail!("{self} is not a single-value enumeration; try --values or --id")
            }
        }
    }

    /// Multi-value reverse lookup, positional when `ordered` is set.
    ///
    /// # Errors
    ///
    /// Fails if the enumeration does not carry a value list.
    pub fn by_values(&self, values: Vec<Value>, ordered: bool) -> Result<Option<Row>> {
        match self {
            Self::Currency => {
                let found = if ordered {
                    Currency::from_values_ordered(values)
                } else {
                    Currency::from_values(values)
                };
                Ok(found.map(|c| self.row_of_values(c)))
            }
            Self::HttpStatus | Self::Weekday => {
                bail!("{self} is not a multi-value enumeration; try --value or --id")
            }
        }
    }

    fn row_of_id<T: Enumeration + fmt::Display>(&self, instance: &T) -> Row {
        Row {
            enumeration: self.as_str(),
            id: instance.id(),
            text: instance.to_string(),
            values: Vec::new(),
        }
    }

    fn row_of_value<T: ValueEnumeration + fmt::Display>(&self, instance: &T) -> Row {
        Row {
            values: vec![instance.value().clone()],
            ..self.row_of_id(instance)
        }
    }

    /// The text column shows the value list; the instance's own text form
    /// is just its id.
    fn row_of_values<T: MultiValueEnumeration + fmt::Display>(&self, instance: &T) -> Row {
        let values = instance.values().to_vec();
        Row {
            text: Value::List(values.clone()).to_string(),
            values,
            ..self.row_of_id(instance)
        }
    }
}

impl fmt::Display for CatalogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalogue instance, independent of its enumeration type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub enumeration: &'static str,
    pub id: Id,
    pub text: String,
    pub values: Vec<Value>,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}  {}", self.id, self.text)
    }
}
