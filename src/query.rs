//! Search query construction.
//!
//! Turns structured search criteria (keyword lists, facet filters, date
//! ranges) into the clause list the Searchcraft search endpoint expects.
//! Clause order is part of the wire contract and must not change: the engine
//! may weight clauses by position.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One atomic search predicate.
///
/// Exactly one of `exact` / `fuzzy` is set. A missing `occur` leaves the
/// engine default in effect ("may appear").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchClause {
    /// Whether the clause must or should match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occur: Option<Occur>,
    /// Literal phrase/term match, or a synthesized range/membership expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<MatchContext>,
    /// Fuzzy/approximate match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy: Option<MatchContext>,
}

impl SearchClause {
    /// A fuzzy clause against the virtual `ctx` field.
    pub fn fuzzy(occur: Option<Occur>, term: impl Into<String>) -> Self {
        Self {
            occur,
            exact: None,
            fuzzy: Some(MatchContext { ctx: term.into() }),
        }
    }

    /// An exact clause against the virtual `ctx` field.
    pub fn exact(occur: Option<Occur>, term: impl Into<String>) -> Self {
        Self {
            occur,
            exact: Some(MatchContext { ctx: term.into() }),
            fuzzy: None,
        }
    }
}

/// Match target wrapper; Searchcraft matches everything through the virtual `ctx` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchContext {
    /// The term, phrase, or synthesized expression to match.
    pub ctx: String,
}

/// Clause occurrence requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occur {
    /// The clause must match.
    Must,
    /// The clause may match (contributes to scoring).
    Should,
}

/// Sort direction for ordered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// The request body sent to the search endpoint.
///
/// The clause list is serialized under the wire name `query` and is always
/// present, even when empty (an empty list matches broadly).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Ordered clause list. Order is preserved as built.
    #[serde(rename = "query")]
    pub clauses: Vec<SearchClause>,
    /// Cap on returned hits; the service default applies when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Pagination offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Field to order results by.
    #[serde(rename = "order_by", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Sort direction for `order_by`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
}

impl SearchQuery {
    /// A query with the given clauses and limit, no pagination or ordering.
    pub fn new(clauses: Vec<SearchClause>, limit: Option<u64>) -> Self {
        Self {
            clauses,
            limit,
            offset: None,
            order_by: None,
            sort: None,
        }
    }
}

/// A date-range restriction on one datetime schema field.
#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeFilter {
    /// The datetime schema field to filter on.
    #[serde(rename = "schemaFieldName")]
    pub schema_field_name: String,
    /// Earliest instant to include.
    #[serde(rename = "startDate", deserialize_with = "lenient_datetime")]
    pub start_date: DateTime<Utc>,
    /// Latest instant to include.
    #[serde(rename = "endDate", deserialize_with = "lenient_datetime")]
    pub end_date: DateTime<Utc>,
}

/// Parse a caller-supplied date string.
///
/// The tool schema only promises "a date string", so besides full RFC3339
/// this accepts zone-less datetimes and bare dates, both taken as UTC
/// (a bare date means midnight).
fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

fn lenient_datetime<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date_string(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date string: {}", s)))
}

/// A facet-membership restriction on one facet schema field.
#[derive(Debug, Clone, Deserialize)]
pub struct FacetFilterGroup {
    /// The facet schema field to filter on.
    #[serde(rename = "schemaFieldName")]
    pub schema_field_name: String,
    /// Facet paths to include; each begins with `/`.
    #[serde(rename = "facetPaths")]
    pub facet_paths: Vec<String>,
}

/// Structured search criteria as supplied by the caller.
///
/// Field names mirror the tool's input schema; every field defaults to empty
/// so partial input deserializes cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Fuzzy-matched keywords, any of which may appear.
    #[serde(rename = "fuzzyKeywordsThatCanOptionallyAppear")]
    pub fuzzy_should: Vec<String>,
    /// Fuzzy-matched keywords that must all appear.
    #[serde(rename = "fuzzyKeywordsThatMustAppear")]
    pub fuzzy_must: Vec<String>,
    /// Exact terms/phrases, any of which may appear.
    #[serde(rename = "exactSearchTermsThatCanOptionallyAppear")]
    pub exact_should: Vec<String>,
    /// Exact terms/phrases that must all appear.
    #[serde(rename = "exactSearchTermsThatMustAppear")]
    pub exact_must: Vec<String>,
    /// Date-range restrictions.
    #[serde(rename = "dateRangeFilters")]
    pub date_range_filters: Vec<DateRangeFilter>,
    /// Facet-membership restrictions.
    #[serde(rename = "facetFilters")]
    pub facet_filters: Vec<FacetFilterGroup>,
}

/// JS-style ISO8601 with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
fn iso_millis(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the wire query from structured criteria.
///
/// Clause order is fixed: fuzzy-should, fuzzy-must, exact-should, exact-must,
/// date ranges, facets; within each category the input order is preserved.
/// Phrase content passes through unescaped, matching the service's own
/// passthrough behavior.
pub fn build_search_query(criteria: &SearchCriteria, limit: u64) -> SearchQuery {
    let mut clauses = Vec::new();

    clauses.extend(
        criteria
            .fuzzy_should
            .iter()
            .map(|term| SearchClause::fuzzy(Some(Occur::Should), term.clone())),
    );
    clauses.extend(
        criteria
            .fuzzy_must
            .iter()
            .map(|term| SearchClause::fuzzy(Some(Occur::Must), term.clone())),
    );
    clauses.extend(
        criteria
            .exact_should
            .iter()
            .map(|term| SearchClause::exact(Some(Occur::Should), term.clone())),
    );
    clauses.extend(
        criteria
            .exact_must
            .iter()
            .map(|term| SearchClause::exact(Some(Occur::Must), term.clone())),
    );
    clauses.extend(criteria.date_range_filters.iter().map(|filter| {
        SearchClause::exact(
            Some(Occur::Must),
            format!(
                "{}:[{} TO {}]",
                filter.schema_field_name,
                iso_millis(&filter.start_date),
                iso_millis(&filter.end_date)
            ),
        )
    }));
    clauses.extend(criteria.facet_filters.iter().map(|group| {
        SearchClause::exact(
            Some(Occur::Must),
            format!(
                "{}: IN [{}]",
                group.schema_field_name,
                group.facet_paths.join(" ")
            ),
        )
    }));

    SearchQuery::new(clauses, Some(limit))
}
