//! Free-form `<meta>` attributes and their inheritance between nesting levels
//!
//! Each nesting level of a mapping document (entity, subclass, attribute) gets
//! its own [`MetaAttributeContext`]. A context owns only the attributes declared
//! at its level and keeps a shared, read-only handle on its parent; lookups
//! that miss locally walk up the parent chain.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::elements::MetaElement;

/// A named meta attribute; repeated declarations accumulate values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaAttribute {
    name: String,
    values: Vec<String>,
}

impl MetaAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// First value, for attributes expected to be single-valued
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    pub fn is_multi_valued(&self) -> bool {
        self.values.len() > 1
    }
}

/// Meta attributes visible at one nesting level
#[derive(Debug, Clone, Default)]
pub struct MetaAttributeContext {
    parent: Option<Arc<MetaAttributeContext>>,
    local: BTreeMap<String, Arc<MetaAttribute>>,
}

impl MetaAttributeContext {
    /// Context without a parent
    pub fn root() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Arc<MetaAttributeContext>) -> Self {
        Self {
            parent: Some(parent),
            local: BTreeMap::new(),
        }
    }

    pub fn parent(&self) -> Option<&Arc<MetaAttributeContext>> {
        self.parent.as_ref()
    }

    /// Register an attribute at this level, replacing any local one of the same name
    pub fn add(&mut self, attribute: MetaAttribute) {
        self.local
            .insert(attribute.name.clone(), Arc::new(attribute));
    }

    /// Attribute declared at this level only
    pub fn local_meta_attribute(&self, name: &str) -> Option<&MetaAttribute> {
        self.local.get(name).map(Arc::as_ref)
    }

    /// Attribute declared here or at the nearest ancestor declaring it
    pub fn meta_attribute(&self, name: &str) -> Option<&MetaAttribute> {
        match self.local.get(name) {
            Some(attribute) => Some(attribute),
            None => self
                .parent
                .as_deref()
                .and_then(|parent| parent.meta_attribute(name)),
        }
    }

    /// Names declared at this level
    pub fn local_keys(&self) -> impl Iterator<Item = &str> {
        self.local.keys().map(String::as_str)
    }

    /// Names visible at this level, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .parent
            .as_deref()
            .map(MetaAttributeContext::keys)
            .unwrap_or_default();
        keys.extend(self.local_keys());
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

/// Name/value/inheritable view of one `<meta>` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaAttributeSource {
    pub name: String,
    pub value: String,
    pub inheritable: bool,
}

impl From<&MetaElement> for MetaAttributeSource {
    fn from(element: &MetaElement) -> Self {
        Self {
            name: element.attribute.clone(),
            value: element.value.clone(),
            inheritable: element.inherit,
        }
    }
}

pub fn build_meta_attribute_sources(elements: &[MetaElement]) -> Vec<MetaAttributeSource> {
    elements.iter().map(MetaAttributeSource::from).collect()
}

/// Build the context of a nesting level from its `<meta>` declarations.
///
/// With `only_inheritable`, declarations marked `inherit="false"` are skipped.
/// The first local declaration of a name creates a fresh local attribute that
/// hides the inherited one; later declarations append to it.
pub fn extract_meta_attribute_context(
    elements: &[MetaElement],
    only_inheritable: bool,
    parent: &Arc<MetaAttributeContext>,
) -> MetaAttributeContext {
    let mut context = MetaAttributeContext::with_parent(Arc::clone(parent));

    for element in elements {
        if only_inheritable && !element.inherit {
            continue;
        }

        let name = &element.attribute;
        let local = context
            .local
            .entry(name.clone())
            .or_insert_with(|| Arc::new(MetaAttribute::new(name.as_str())));
        Arc::make_mut(local).add_value(element.value.clone());
    }

    tracing::trace!(
        declared = elements.len(),
        local = context.local.len(),
        "Extracted meta attribute context"
    );
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_with(name: &str, values: &[&str]) -> Arc<MetaAttributeContext> {
        let mut root = MetaAttributeContext::root();
        let mut attribute = MetaAttribute::new(name);
        for value in values {
            attribute.add_value(*value);
        }
        root.add(attribute);
        Arc::new(root)
    }

    #[test]
    fn test_lookup_walks_parent_chain() {
        let root = root_with("author", &["steve"]);
        let child = MetaAttributeContext::with_parent(Arc::clone(&root));

        assert!(child.local_meta_attribute("author").is_none());
        assert_eq!(child.meta_attribute("author").unwrap().value(), Some("steve"));
        assert!(child.meta_attribute("missing").is_none());
    }

    #[test]
    fn test_values_accumulate() {
        let root = Arc::new(MetaAttributeContext::root());
        let elements = vec![
            MetaElement::new("implements", "Serializable"),
            MetaElement::new("implements", "Comparable"),
        ];
        let context = extract_meta_attribute_context(&elements, false, &root);
        let attribute = context.local_meta_attribute("implements").unwrap();
        assert_eq!(attribute.values(), ["Serializable", "Comparable"]);
        assert!(attribute.is_multi_valued());
    }

    #[test]
    fn test_only_inheritable_skips_private_declarations() {
        let root = Arc::new(MetaAttributeContext::root());
        let elements = vec![
            MetaElement::new("scope", "private").with_inherit(false),
            MetaElement::new("author", "gail"),
        ];
        let context = extract_meta_attribute_context(&elements, true, &root);
        assert!(context.local_meta_attribute("scope").is_none());
        assert!(context.local_meta_attribute("author").is_some());

        let context = extract_meta_attribute_context(&elements, false, &root);
        assert!(context.local_meta_attribute("scope").is_some());
    }

    #[test]
    fn test_local_declaration_replaces_inherited_values() {
        let root = root_with("author", &["gail"]);
        let context =
            extract_meta_attribute_context(&[MetaElement::new("author", "steve")], false, &root);
        assert_eq!(context.meta_attribute("author").unwrap().values(), ["steve"]);

        let elements = vec![MetaElement::new("x", "first"), MetaElement::new("x", "second")];
        let root = root_with("x", &["parent"]);
        let context = extract_meta_attribute_context(&elements, false, &root);
        assert_eq!(
            context.local_meta_attribute("x").unwrap().values(),
            ["first", "second"]
        );
    }

    #[test]
    fn test_parent_is_never_mutated() {
        let root = root_with("x", &["parent"]);
        let _child = extract_meta_attribute_context(&[MetaElement::new("x", "child")], false, &root);
        assert_eq!(root.meta_attribute("x").unwrap().values(), ["parent"]);
    }

    #[test]
    fn test_keys_merge_levels() {
        let root = root_with("author", &["steve"]);
        let context =
            extract_meta_attribute_context(&[MetaElement::new("generated", "true")], false, &root);
        assert_eq!(context.keys(), vec!["author", "generated"]);
        assert_eq!(context.local_keys().collect::<Vec<_>>(), vec!["generated"]);
    }

    #[test]
    fn test_build_meta_attribute_sources() {
        let sources = build_meta_attribute_sources(&[
            MetaElement::new("a", "1"),
            MetaElement::new("b", "2").with_inherit(false),
        ]);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[1].name, "b");
        assert!(!sources[1].inheritable);
        assert!(build_meta_attribute_sources(&[]).is_empty());
    }
}
