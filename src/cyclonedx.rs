//! Minimal CycloneDX JSON container model.
//!
//! Only the fields the enrichment engine touches are modeled explicitly;
//! everything else in the document (metadata, dependencies, hashes, ...)
//! is carried through a serde flatten map so an enriched document keeps
//! all fields of the input it was decoded from.

use crate::shared::error::EnrichError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A CycloneDX BOM document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bom {
    #[serde(rename = "bomFormat")]
    pub bom_format: String,
    #[serde(rename = "specVersion")]
    pub spec_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One component entry of a BOM
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<LicenseChoice>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of a component's `licenses` array.
///
/// CycloneDX allows either an SPDX expression entry or a license object;
/// the engine only ever writes expressions, but decoded documents may
/// carry arbitrary license objects which round-trip untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LicenseChoice {
    Expression { expression: String },
    Other(Value),
}

impl LicenseChoice {
    pub fn expression(expression: impl Into<String>) -> Self {
        LicenseChoice::Expression {
            expression: expression.into(),
        }
    }
}

/// Decodes a CycloneDX JSON document.
///
/// A decode failure is fatal for the whole run.
pub fn decode(raw: &str) -> Result<Bom> {
    serde_json::from_str(raw).map_err(|e| {
        EnrichError::SbomDecodeError {
            details: e.to_string(),
        }
        .into()
    })
}

/// Encodes a BOM back to pretty-printed JSON, with a trailing newline.
pub fn encode(bom: &Bom) -> Result<String> {
    let json = serde_json::to_string_pretty(bom).map_err(|e| EnrichError::SbomEncodeError {
        details: e.to_string(),
    })?;
    Ok(format!("{}\n", json))
}
