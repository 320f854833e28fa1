//! Cascade style interpretation

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::context::LocalBindingContext;
use crate::error::{MappingError, MappingResult};

/// Operations propagated from an entity to its associated entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CascadeStyle {
    All,
    AllDeleteOrphan,
    None,
    SaveUpdate,
    Persist,
    Merge,
    Lock,
    Refresh,
    Replicate,
    Evict,
    Delete,
    DeleteOrphan,
}

impl CascadeStyle {
    pub fn external_name(&self) -> &'static str {
        match self {
            CascadeStyle::All => "all",
            CascadeStyle::AllDeleteOrphan => "all-delete-orphan",
            CascadeStyle::None => "none",
            CascadeStyle::SaveUpdate => "save-update",
            CascadeStyle::Persist => "persist",
            CascadeStyle::Merge => "merge",
            CascadeStyle::Lock => "lock",
            CascadeStyle::Refresh => "refresh",
            CascadeStyle::Replicate => "replicate",
            CascadeStyle::Evict => "evict",
            CascadeStyle::Delete => "delete",
            CascadeStyle::DeleteOrphan => "delete-orphan",
        }
    }
}

impl std::fmt::Display for CascadeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.external_name())
    }
}

impl std::str::FromStr for CascadeStyle {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CascadeStyle::All),
            "all-delete-orphan" => Ok(CascadeStyle::AllDeleteOrphan),
            "none" => Ok(CascadeStyle::None),
            "save-update" => Ok(CascadeStyle::SaveUpdate),
            "persist" => Ok(CascadeStyle::Persist),
            "merge" => Ok(CascadeStyle::Merge),
            "lock" => Ok(CascadeStyle::Lock),
            "refresh" => Ok(CascadeStyle::Refresh),
            "replicate" => Ok(CascadeStyle::Replicate),
            "evict" => Ok(CascadeStyle::Evict),
            "delete" => Ok(CascadeStyle::Delete),
            "delete-orphan" => Ok(CascadeStyle::DeleteOrphan),
            _ => Err(MappingError::configuration(format!(
                "Unsupported cascade style: {}",
                s
            ))),
        }
    }
}

/// Split a comma-separated cascade list into styles, using the document default
/// when the list is absent or empty
pub fn interpret_cascade_styles(
    cascades: Option<&str>,
    context: &LocalBindingContext,
) -> MappingResult<BTreeSet<CascadeStyle>> {
    let cascades = match cascades {
        Some(c) if !c.is_empty() => c,
        _ => context.mapping_defaults().cascade_style.as_str(),
    };
    cascades
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<CascadeStyle>()
                .map_err(|e| e.with_origin(context.origin()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MappingDefaults;
    use crate::context::Origin;

    #[test]
    fn test_explicit_cascades() {
        let ctx = LocalBindingContext::default();
        let styles = interpret_cascade_styles(Some("persist, merge,delete-orphan"), &ctx).unwrap();
        assert_eq!(
            styles.into_iter().collect::<Vec<_>>(),
            vec![
                CascadeStyle::Persist,
                CascadeStyle::Merge,
                CascadeStyle::DeleteOrphan
            ]
        );
    }

    #[test]
    fn test_default_cascade() {
        let ctx = LocalBindingContext::new(
            Origin::unknown(),
            MappingDefaults::new().with_cascade_style("save-update,lock"),
        );
        let styles = interpret_cascade_styles(Some(""), &ctx).unwrap();
        assert!(styles.contains(&CascadeStyle::SaveUpdate));
        assert!(styles.contains(&CascadeStyle::Lock));

        let styles = interpret_cascade_styles(None, &LocalBindingContext::default()).unwrap();
        assert_eq!(styles.len(), 1);
        assert!(styles.contains(&CascadeStyle::None));
    }

    #[test]
    fn test_unknown_cascade() {
        let err = interpret_cascade_styles(Some("all,explode"), &LocalBindingContext::default())
            .unwrap_err();
        assert!(err.to_string().contains("explode"));
        assert!(err.to_string().contains("origin("));
    }
}
