//! Column decoding shared by the repositories.
//!
//! Ids are stored as TEXT, timestamps as unix seconds and flags as INTEGER.
//! Anything that fails to decode surfaces as `DbError::Corrupt` instead of a panic.

use crate::{DbError, Result as DbErrorResult};

use ss_core::ErrorLocation;

use std::fmt::Display;
use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid_at(row: &SqliteRow, table: &'static str, column: &str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    parse_uuid(&raw, table, column)
}

#[track_caller]
pub(crate) fn optional_uuid_at(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> DbErrorResult<Option<Uuid>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|s| parse_uuid(&s, table, column)).transpose()
}

#[track_caller]
pub(crate) fn timestamp_at(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> DbErrorResult<DateTime<Utc>> {
    let secs: i64 = row.try_get(column)?;
    to_datetime(secs, table, column)
}

#[track_caller]
pub(crate) fn optional_timestamp_at(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    let secs: Option<i64> = row.try_get(column)?;
    secs.map(|s| to_datetime(s, table, column)).transpose()
}

#[track_caller]
pub(crate) fn flag_at(row: &SqliteRow, column: &str) -> DbErrorResult<bool> {
    let value: i64 = row.try_get(column)?;
    Ok(value != 0)
}

#[track_caller]
pub(crate) fn parsed_at<T>(row: &SqliteRow, table: &'static str, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: String = row.try_get(column)?;
    raw.parse::<T>().map_err(|e| DbError::Corrupt {
        table,
        message: format!("{}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn parse_uuid(raw: &str, table: &'static str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| DbError::Corrupt {
        table,
        message: format!("{}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn to_datetime(secs: i64, table: &'static str, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Corrupt {
        table,
        message: format!("{}: timestamp {} out of range", column, secs),
        location: ErrorLocation::from(Location::caller()),
    })
}
