use std::{collections::BTreeMap, fmt, sync::Arc};

use url::Url;

use crate::route_definition::{decode_segment, split_segments, RouteMeta, RoutePattern, RouteRecord};

// Only used to let `url` split and normalize locations, never shown.
const PARSE_BASE: &str = "http://folio.invalid";

/// Errors found while building a [`RouteTable`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// The path of a route cannot be parsed.
    #[error(r#"invalid route path "{path}": {reason}"#)]
    InvalidPattern {
        /// The offending path.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Two routes share a name.
    #[error(r#"two routes with identical name: "{0}""#)]
    DuplicateName(String),

    /// Two routes match exactly the same paths.
    #[error(r#"two routes with identical path: "{0}""#)]
    DuplicatePath(String),

    /// More than one catch-all route was declared.
    #[error(r#"catch-all route "{0}" declared after another catch-all"#)]
    MultipleCatchAll(String),

    /// A route was declared after the catch-all, where it could never match.
    #[error(r#"route "{0}" is declared after the catch-all route"#)]
    CatchAllNotLast(String),

    /// Without a catch-all some paths would not resolve.
    #[error("the route table needs a catch-all route as its last entry")]
    MissingCatchAll,
}

/// The result of resolving a location against a [`RouteTable`].
pub struct RouteMatch<V> {
    record: Arc<RouteRecord<V>>,
    path: String,
    query: Option<String>,
    hash: Option<String>,
    params: Vec<String>,
    fallback: bool,
}

impl<V> Clone for RouteMatch<V> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
            path: self.path.clone(),
            query: self.query.clone(),
            hash: self.hash.clone(),
            params: self.params.clone(),
            fallback: self.fallback,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for RouteMatch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("name", &self.record.name)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("hash", &self.hash)
            .field("params", &self.params)
            .finish()
    }
}

impl<V> RouteMatch<V> {
    /// The matched record.
    pub fn record(&self) -> &RouteRecord<V> {
        &self.record
    }

    /// The name of the matched record.
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// The view of the matched record.
    pub fn view(&self) -> &V {
        &self.record.view
    }

    /// The metadata of the matched record, if any.
    pub fn meta(&self) -> Option<&RouteMeta> {
        self.record.meta.as_ref()
    }

    /// The resolved path, percent-encoded and without query or fragment.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query string, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The fragment, without the leading `#`.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// The decoded segments captured by a catch-all route. Empty for literal routes.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns `true` if the catch-all route matched.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// The path together with its query and fragment, as it would appear in the address bar.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }
}

struct Location {
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl Location {
    fn parse(input: &str) -> Self {
        let input = if input.starts_with('/') {
            input.to_string()
        } else {
            format!("/{input}")
        };

        match Url::parse(&format!("{PARSE_BASE}{input}")) {
            Ok(url) => Self {
                path: url.path().to_string(),
                query: url.query().map(str::to_string),
                hash: url.fragment().map(str::to_string),
            },
            Err(err) => {
                tracing::debug!("failed to parse location {input:?} ({err}), splitting it as is");
                let (rest, hash) = match input.split_once('#') {
                    Some((rest, hash)) => (rest, Some(hash.to_string())),
                    None => (input.as_str(), None),
                };
                let (path, query) = match rest.split_once('?') {
                    Some((path, query)) => (path, Some(query.to_string())),
                    None => (rest, None),
                };
                Self {
                    path: path.to_string(),
                    query,
                    hash,
                }
            }
        }
    }
}

/// An immutable, ordered list of [`RouteRecord`]s.
///
/// Literal routes always take priority over the catch-all, which must be the last entry and
/// makes resolution total.
///
/// ```rust
/// # use folio_router::prelude::*;
/// let table = RouteTable::new(vec![
///     RouteRecord::new("/", "Home", "home"),
///     RouteRecord::new("/:pathMatch(.*)*", "NotFound", "not-found"),
/// ])
/// .unwrap();
///
/// assert_eq!(table.resolve("/").name(), "Home");
/// assert_eq!(table.resolve("/foo/bar").name(), "NotFound");
/// ```
pub struct RouteTable<V> {
    records: Vec<Arc<RouteRecord<V>>>,
    fixed: BTreeMap<Vec<String>, usize>,
    catch_all: usize,
}

impl<V> RouteTable<V> {
    /// Build a table, checking every invariant of the route list.
    pub fn new(records: Vec<RouteRecord<V>>) -> Result<Self, RouteTableError> {
        let mut fixed = BTreeMap::new();
        let mut names = BTreeMap::new();
        let mut catch_all = None;

        for (index, record) in records.iter().enumerate() {
            if names.insert(record.name.as_str(), index).is_some() {
                return Err(RouteTableError::DuplicateName(record.name.clone()));
            }

            if catch_all.is_some() {
                return Err(match RoutePattern::parse(&record.path)? {
                    RoutePattern::CatchAll { .. } => {
                        RouteTableError::MultipleCatchAll(record.name.clone())
                    }
                    RoutePattern::Literal(_) => {
                        RouteTableError::CatchAllNotLast(record.name.clone())
                    }
                });
            }

            match RoutePattern::parse(&record.path)? {
                RoutePattern::Literal(segments) => {
                    if fixed.insert(segments, index).is_some() {
                        return Err(RouteTableError::DuplicatePath(record.path.clone()));
                    }
                }
                RoutePattern::CatchAll { .. } => catch_all = Some(index),
            }
        }

        let catch_all = catch_all.ok_or(RouteTableError::MissingCatchAll)?;

        Ok(Self {
            records: records.into_iter().map(Arc::new).collect(),
            fixed,
            catch_all,
        })
    }

    /// Resolve a location to exactly one route.
    ///
    /// The location may carry a query and a fragment, which are split off. A missing leading `/`
    /// is added and a trailing `/` is ignored. Segments are percent-decoded before comparison.
    pub fn resolve(&self, location: &str) -> RouteMatch<V> {
        let Location { path, query, hash } = Location::parse(location);

        let segments: Vec<String> = split_segments(&path)
            .into_iter()
            .map(|segment| decode_segment(segment).into_owned())
            .collect();

        let (index, params, fallback) = match self.fixed.get(&segments) {
            Some(&index) => (index, Vec::new(), false),
            None => (self.catch_all, segments, true),
        };

        let record = self.records[index].clone();
        tracing::trace!(location, route = %record.name, "resolved location");

        RouteMatch {
            record,
            path,
            query,
            hash,
            params,
            fallback,
        }
    }

    /// Find a route by its name.
    pub fn by_name(&self, name: &str) -> Option<&RouteRecord<V>> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .map(|record| &**record)
    }

    /// The path to navigate to for a named literal route.
    ///
    /// Returns [`None`] for unknown names and for the catch-all, which has no path of its own.
    pub fn href(&self, name: &str) -> Option<String> {
        let (segments, _) = self
            .fixed
            .iter()
            .find(|(_, index)| self.records[**index].name == name)?;

        let encoded: Vec<String> = segments
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        Some(format!("/{}", encoded.join("/")))
    }

    /// The records in declaration order.
    pub fn records(&self) -> impl Iterator<Item = &RouteRecord<V>> {
        self.records.iter().map(|record| &**record)
    }

    /// The catch-all record.
    pub fn fallback(&self) -> &RouteRecord<V> {
        &self.records[self.catch_all]
    }
}
