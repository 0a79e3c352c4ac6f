use serde_json as json;
use serde_yaml as yaml;
use tracing::*;

use super::*;
use crate::constants::*;

// Decoding never fails: a field that is missing, null, or the wrong shape
// decodes to unset, and a list container with no usable entries decodes to an
// empty vec.  The only fallible entry points are the *_from_{json,yaml}
// functions below, which can't do anything about text the parser rejects.

pub fn decode_resource<S: FieldSource>(source: S) -> GenericResource {
    GenericResource {
        api_version: source.string(API_VERSION_KEY),
        kind: source.string(KIND_KEY),
        metadata: source.nested(METADATA_KEY).map(decode_metadata).unwrap_or_default(),
        spec: source.opaque(SPEC_KEY),
    }
}

pub fn decode_list<S: FieldSource>(source: S) -> Vec<GenericResource> {
    match source.entries(ITEMS_KEY) {
        Some(entries) => entries.into_iter().map(decode_resource).collect(),
        None => {
            debug!("container has no usable {ITEMS_KEY} field");
            vec![]
        },
    }
}

fn decode_metadata<S: FieldSource>(source: S) -> GenericMetadata {
    GenericMetadata {
        creation_timestamp: source.string(CREATION_TIMESTAMP_KEY),
        generation: source.integer(GENERATION_KEY),
        name: source.string(NAME_KEY),
        namespace: source.string(NAMESPACE_KEY),
        resource_version: source.string(RESOURCE_VERSION_KEY),
        self_link: source.string(SELF_LINK_KEY),
        uid: source.string(UID_KEY),
    }
}

pub fn resource_from_json(data: &str) -> anyhow::Result<GenericResource> {
    let root: json::Value = json::from_str(data)?;
    Ok(decode_resource(&root))
}

pub fn resource_from_yaml(data: &str) -> anyhow::Result<GenericResource> {
    let root: yaml::Mapping = yaml::from_str(data)?;
    Ok(decode_resource(&root))
}

pub fn list_from_json(data: &str) -> anyhow::Result<Vec<GenericResource>> {
    let root: json::Value = json::from_str(data)?;
    Ok(decode_list(&root))
}

pub fn list_from_yaml(data: &str) -> anyhow::Result<Vec<GenericResource>> {
    let root: yaml::Mapping = yaml::from_str(data)?;
    Ok(decode_list(&root))
}
