//! Deserialization of raw mapping elements from XML text
//!
//! Thin convenience layer over `quick-xml`'s serde support, enabled with the
//! `hbm-xml` feature. The resolvers never depend on it.

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;

use crate::elements::{EntityElement, EntityKind};

/// Deserialize any raw element (`<property>`, `<cache>`, ...) from XML text
pub fn from_str<T: DeserializeOwned>(xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml).context("Mapping XML deserialization failed")
}

/// Deserialize an entity element, taking its kind from the root element name
pub fn entity_from_str(xml: &str) -> Result<EntityElement> {
    let kind = root_entity_kind(xml)?;
    let mut element: EntityElement = from_str(xml)?;
    element.kind = kind;
    Ok(element)
}

fn root_entity_kind(xml: &str) -> Result<EntityKind> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let local_name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                return EntityKind::from_element_name(&local_name).ok_or_else(|| {
                    anyhow::anyhow!("<{}> is not an entity mapping element", local_name)
                });
            }
            Ok(Event::Eof) => {
                return Err(anyhow::anyhow!("Mapping XML contains no element"));
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Mapping XML parsing error at position {}: {}",
                    reader.error_position(),
                    e
                ));
            }
            _ => {}
        }
    }
}
