//! Custom SQL overrides for insert/update/delete statements

use serde::{Deserialize, Serialize};

use crate::elements::CustomSqlElement;
use crate::error::{MappingError, MappingResult};

/// How the outcome of a custom write statement is verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultCheckStyle {
    /// No check
    None,
    /// Check the affected row count reported by the driver
    Count,
    /// Check an output parameter of a callable statement
    Param,
}

impl ResultCheckStyle {
    pub fn external_name(&self) -> &'static str {
        match self {
            ResultCheckStyle::None => "none",
            ResultCheckStyle::Count => "rowcount",
            ResultCheckStyle::Param => "param",
        }
    }

    /// Default when the mapping names no style: callable statements cannot report
    /// row counts reliably
    pub fn default_for(callable: bool) -> Self {
        if callable {
            ResultCheckStyle::None
        } else {
            ResultCheckStyle::Count
        }
    }
}

impl std::fmt::Display for ResultCheckStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.external_name())
    }
}

impl std::str::FromStr for ResultCheckStyle {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ResultCheckStyle::None),
            "rowcount" => Ok(ResultCheckStyle::Count),
            "param" => Ok(ResultCheckStyle::Param),
            _ => Err(MappingError::configuration(format!(
                "Unknown result check style: {}",
                s
            ))),
        }
    }
}

/// A user-supplied SQL statement replacing the generated one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSql {
    pub sql: String,
    pub callable: bool,
    pub check_style: ResultCheckStyle,
}

/// Interpret an optional custom SQL element
pub fn build_custom_sql(element: Option<&CustomSqlElement>) -> MappingResult<Option<CustomSql>> {
    let Some(element) = element else {
        return Ok(None);
    };
    let check_style = match element.check.as_deref() {
        Some(name) => name.parse()?,
        None => ResultCheckStyle::default_for(element.callable),
    };
    Ok(Some(CustomSql {
        sql: element.value.clone(),
        callable: element.callable,
        check_style,
    }))
}
