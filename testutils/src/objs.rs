use chrono::{
    DateTime,
    Utc,
};
use gk_core::prelude::*;
use kube::api::TypeMeta;
use rstest::*;
use serde_json::json;
use serde_yaml as yaml;

use crate::constants::*;

// The same (cluster-scoped) Car resource in every shape the decoder consumes,
// plus the GenericResource all of them are expected to decode to.

#[fixture]
pub fn car_json() -> serde_json::Value {
    json!({
        "apiVersion": TEST_API_VERSION,
        "kind": TEST_KIND,
        "metadata": {
            "creationTimestamp": TEST_CREATION_TIMESTAMP,
            "generation": TEST_GENERATION,
            "name": TEST_NAME,
            "resourceVersion": TEST_RESOURCE_VERSION,
            "selfLink": TEST_SELF_LINK,
            "uid": TEST_UID,
        },
        "spec": {
            "date_of_manufacturing": TEST_MANUFACTURED,
            "engine": TEST_ENGINE,
        },
    })
}

pub fn car_yaml() -> String {
    format!(
        "
apiVersion: {TEST_API_VERSION}
kind: {TEST_KIND}
metadata:
  creationTimestamp: '{TEST_CREATION_TIMESTAMP}'
  generation: {TEST_GENERATION}
  name: {TEST_NAME}
  resourceVersion: '{TEST_RESOURCE_VERSION}'
  selfLink: {TEST_SELF_LINK}
  uid: {TEST_UID}
spec:
  date_of_manufacturing: '{TEST_MANUFACTURED}'
  engine: {TEST_ENGINE}
"
    )
}

#[fixture]
pub fn car_mapping() -> yaml::Mapping {
    serde_yaml::from_str(&car_yaml()).unwrap()
}

// A list-shaped container holding one namespaced Car
#[fixture]
pub fn car_list_mapping(car_mapping: yaml::Mapping) -> yaml::Mapping {
    let mut entry = car_mapping;
    if let Some(meta) = entry.get_mut(METADATA_KEY).and_then(|m| m.as_mapping_mut()) {
        meta.insert(NAMESPACE_KEY.into(), TEST_NAMESPACE.into());
    }

    let mut container = yaml::Mapping::new();
    container.insert(ITEMS_KEY.into(), yaml::Value::Sequence(vec![yaml::Value::Mapping(entry)]));
    container
}

#[fixture]
pub fn car_resource() -> GenericResource {
    GenericResource {
        api_version: Some(TEST_API_VERSION.into()),
        kind: Some(TEST_KIND.into()),
        metadata: GenericMetadata {
            creation_timestamp: Some(TEST_CREATION_TIMESTAMP.into()),
            generation: Some(TEST_GENERATION),
            name: Some(TEST_NAME.into()),
            namespace: None,
            resource_version: Some(TEST_RESOURCE_VERSION.into()),
            self_link: Some(TEST_SELF_LINK.into()),
            uid: Some(TEST_UID.into()),
        },
        spec: json!({
            "date_of_manufacturing": TEST_MANUFACTURED,
            "engine": TEST_ENGINE,
        })
        .as_object()
        .cloned(),
    }
}

#[fixture]
pub fn car_dynamic_obj() -> DynamicObject {
    DynamicObject {
        metadata: metav1::ObjectMeta {
            creation_timestamp: Some(metav1::Time(
                DateTime::parse_from_rfc3339(TEST_CREATION_TIMESTAMP).unwrap().with_timezone(&Utc),
            )),
            generation: Some(TEST_GENERATION),
            name: Some(TEST_NAME.into()),
            resource_version: Some(TEST_RESOURCE_VERSION.into()),
            uid: Some(TEST_UID.into()),
            ..Default::default()
        },
        types: Some(TypeMeta {
            api_version: TEST_API_VERSION.into(),
            kind: TEST_KIND.into(),
        }),
        data: json!({
            "spec": {
                "date_of_manufacturing": TEST_MANUFACTURED,
                "engine": TEST_ENGINE,
            },
        }),
    }
}
