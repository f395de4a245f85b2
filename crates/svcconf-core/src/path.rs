//! Method path codec and path interning.
//!
//! A method is addressed by its canonical path `/service/method`; a
//! service-wide default uses the wildcard segment, `/service/*`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dashmap::DashSet;

use crate::error::{Result, SvcConfError};
use crate::json::JsonNode;

/// Method segment used for service-wide defaults.
pub const WILDCARD: &str = "*";

/// Parsed `{service, method}` name object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodName {
    pub service: String,
    /// None => wildcard
    pub method: Option<String>,
}

impl MethodName {
    /// Validate a JSON name object.
    ///
    /// Only `service` and `method` are accepted, each at most once and each a
    /// string. `service` must be non-empty. An empty `method` is kept as an
    /// empty segment; only an absent one becomes the wildcard.
    pub fn from_json(node: &JsonNode) -> Result<Self> {
        let members = node.as_object().ok_or_else(|| {
            SvcConfError::Name(format!("expected object, got {}", node.type_name()))
        })?;

        let mut service: Option<&str> = None;
        let mut method: Option<&str> = None;
        for (key, value) in members {
            let slot = match key.as_str() {
                "service" => &mut service,
                "method" => &mut method,
                other => {
                    return Err(SvcConfError::Name(format!("unknown field `{other}`")));
                }
            };
            if slot.is_some() {
                return Err(SvcConfError::Name(format!("duplicate field `{key}`")));
            }
            let s = value.as_str().ok_or_else(|| {
                SvcConfError::Name(format!("`{key}` must be a string, got {}", value.type_name()))
            })?;
            *slot = Some(s);
        }

        let service = match service {
            Some(s) if !s.is_empty() => s.to_owned(),
            Some(_) => return Err(SvcConfError::Name("service must be non-empty".into())),
            None => return Err(SvcConfError::Name("missing required field `service`".into())),
        };
        let method = method.map(str::to_owned);

        Ok(Self { service, method })
    }

    /// Canonical path string: `/service/method` or `/service/*`.
    pub fn to_path(&self) -> String {
        format!(
            "/{}/{}",
            self.service,
            self.method.as_deref().unwrap_or(WILDCARD)
        )
    }

    /// Validate a name object and return its canonical path.
    pub fn canonicalize(node: &JsonNode) -> Result<String> {
        Self::from_json(node).map(|name| name.to_path())
    }
}

/// Service-wide form of `path`: everything after the last `/` becomes `*`.
///
/// Returns None when `path` has no `/` at all.
pub fn wildcard_of(path: &str) -> Option<String> {
    let sep = path.rfind('/')?;
    let mut out = String::with_capacity(sep + 2);
    out.push_str(&path[..=sep]);
    out.push_str(WILDCARD);
    Some(out)
}

/// Interned, reference-counted canonical path.
///
/// Equality and hashing are by content, and the handle borrows as `str`, so
/// maps keyed by `MethodPath` can be queried with a plain `&str`.
#[derive(Clone)]
pub struct MethodPath(Arc<str>);

impl MethodPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if both handles point at the same interned allocation.
    pub fn ptr_eq(&self, other: &MethodPath) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for MethodPath {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for MethodPath {}

impl Hash for MethodPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl Borrow<str> for MethodPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for MethodPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for MethodPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup-or-insert store of canonical paths.
///
/// Safe to share between threads; equal content yields a shared allocation
/// (two racing first inserts may each keep their own, which only costs
/// memory since handles compare by content).
#[derive(Default)]
pub struct PathInterner {
    paths: DashSet<Arc<str>>,
}

impl PathInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&self, path: &str) -> MethodPath {
        if let Some(existing) = self.paths.get(path) {
            return MethodPath(Arc::clone(existing.key()));
        }
        let fresh: Arc<str> = Arc::from(path);
        self.paths.insert(Arc::clone(&fresh));
        MethodPath(fresh)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl fmt::Debug for PathInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathInterner")
            .field("len", &self.paths.len())
            .finish()
    }
}
