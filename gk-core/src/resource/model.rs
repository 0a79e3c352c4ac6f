use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json as json;

use super::*;
use crate::errors::*;

// GenericResource is the in-memory form of a resource whose kind we know
// nothing about at compile time: a custom resource returned by an apiserver
// for which no typed binding exists.  The identity envelope is decoded into
// real fields; everything under `spec` stays an opaque bag of JSON values.
//
// Every field except `metadata` is optional.  A resource decoded from input
// with no metadata at all still carries a concrete (all-unset) metadata
// value, so callers never have to null-check the envelope itself.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericResource {
    pub api_version: Option<String>,
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: GenericMetadata,

    pub spec: Option<json::Map<String, json::Value>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericMetadata {
    pub creation_timestamp: Option<String>,
    pub generation: Option<i64>,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub resource_version: Option<String>,
    pub self_link: Option<String>,
    pub uid: Option<String>,
}

impl GenericResource {
    pub fn group_version(&self) -> anyhow::Result<GroupVersion> {
        match &self.api_version {
            Some(api_version) => api_version.parse(),
            None => bail!(ResourceError::no_api_version(&self.namespaced_name())),
        }
    }

    // "namespace/name", or just "name" for cluster-scoped resources
    pub fn namespaced_name(&self) -> String {
        let name = self.metadata.name.as_deref().unwrap_or_default();
        match &self.metadata.namespace {
            Some(ns) => format!("{ns}/{name}"),
            None => name.into(),
        }
    }

    pub fn spec_value(&self, key: &str) -> Option<&json::Value> {
        self.spec.as_ref()?.get(key)
    }
}

impl fmt::Display for GenericResource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.kind.as_deref().unwrap_or("<unknown kind>"), self.namespaced_name())
    }
}
