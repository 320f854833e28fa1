//! Second-level caching policy descriptors

use serde::{Deserialize, Serialize};

use crate::deferred::Deferred;
use crate::elements::CacheElement;
use crate::error::{MappingError, MappingResult};

/// Include mode that excludes lazy properties from the cache
const NON_LAZY: &str = "non-lazy";

/// Concurrency strategy for cached entity data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessType {
    /// Data is never modified once cached
    ReadOnly,
    /// Updates guarded by soft locks
    ReadWrite,
    /// Updates without strict isolation between transactions
    NonstrictReadWrite,
    /// Fully transactional cache
    Transactional,
}

impl AccessType {
    /// Name used in mapping documents
    pub fn external_name(&self) -> &'static str {
        match self {
            AccessType::ReadOnly => "read-only",
            AccessType::ReadWrite => "read-write",
            AccessType::NonstrictReadWrite => "nonstrict-read-write",
            AccessType::Transactional => "transactional",
        }
    }
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.external_name())
    }
}

impl std::str::FromStr for AccessType {
    type Err = MappingError;

    /// Accepts the external name (`read-write`) as well as the constant
    /// spelling (`READ_WRITE`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read-only" | "READ_ONLY" => Ok(AccessType::ReadOnly),
            "read-write" | "READ_WRITE" => Ok(AccessType::ReadWrite),
            "nonstrict-read-write" | "NONSTRICT_READ_WRITE" => Ok(AccessType::NonstrictReadWrite),
            "transactional" | "TRANSACTIONAL" => Ok(AccessType::Transactional),
            _ => Err(MappingError::configuration(format!(
                "Unknown cache access type: {}",
                s
            ))),
        }
    }
}

/// Caching policy of an entity or collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caching {
    pub region: String,
    pub access_type: AccessType,
    pub cache_lazy_properties: bool,
}

impl Caching {
    pub fn new(region: impl Into<String>, access_type: AccessType, cache_lazy_properties: bool) -> Self {
        Self {
            region: region.into(),
            access_type,
            cache_lazy_properties,
        }
    }
}

/// Deferred caching descriptor.
///
/// Nothing is evaluated until [`CachingHolder::get`] is first called. The
/// outcome, including a failure, is kept for the lifetime of the holder.
#[derive(Debug)]
pub struct CachingHolder {
    value: Deferred<MappingResult<Option<Caching>>>,
}

impl CachingHolder {
    /// Holder around an arbitrary evaluation
    pub fn deferred<F>(initializer: F) -> Self
    where
        F: FnOnce() -> MappingResult<Option<Caching>> + Send + 'static,
    {
        Self {
            value: Deferred::new(initializer),
        }
    }

    /// Holder that always yields "no caching"
    pub fn absent() -> Self {
        Self::deferred(|| Ok(None))
    }

    /// The caching policy, or `None` if no cache element was mapped
    pub fn get(&self) -> MappingResult<Option<&Caching>> {
        match self.value.get() {
            Ok(caching) => Ok(caching.as_ref()),
            Err(e) => Err(e.clone()),
        }
    }

    pub fn is_evaluated(&self) -> bool {
        self.value.is_initialized()
    }
}

/// Interpret a cache element against a default region name
pub fn build_caching(cache_element: &CacheElement, default_region_name: &str) -> MappingResult<Caching> {
    let region = cache_element
        .region
        .as_deref()
        .unwrap_or(default_region_name);
    let access_type = cache_element.usage.parse::<AccessType>()?;
    let cache_lazy_properties = cache_element.include.as_deref() != Some(NON_LAZY);
    Ok(Caching::new(region, access_type, cache_lazy_properties))
}

/// Deferred caching descriptor with a fixed default region name
pub fn create_caching_holder(
    cache_element: Option<CacheElement>,
    default_region_name: impl Into<String>,
) -> CachingHolder {
    let default_region_name = default_region_name.into();
    create_caching_holder_with(cache_element, move || default_region_name)
}

/// Deferred caching descriptor whose default region name is only asked for when
/// the descriptor is first read
pub fn create_caching_holder_with<R>(
    cache_element: Option<CacheElement>,
    default_region_name: R,
) -> CachingHolder
where
    R: FnOnce() -> String + Send + 'static,
{
    CachingHolder::deferred(move || {
        let Some(element) = cache_element else {
            tracing::trace!("No cache element mapped");
            return Ok(None);
        };
        let caching = build_caching(&element, &default_region_name())?;
        tracing::debug!(
            region = %caching.region,
            access_type = %caching.access_type,
            "Resolved caching policy"
        );
        Ok(Some(caching))
    })
}
