use assertables::*;
use serde_json::json;
use serde_yaml as yaml;

use super::*;

#[rstest]
fn test_list_items_wrong_type() {
    let container = json!({"items": 1});
    assert_is_empty!(decode_list(&container));
}

#[rstest]
fn test_list_items_null() {
    let container = json!({"items": null});
    assert_is_empty!(decode_list(&container));
}

#[rstest]
fn test_list_items_missing() {
    let container = json!({});
    assert_is_empty!(decode_list(&container));
}

#[rstest]
fn test_list_items_wrong_type_mapping() {
    let mut container = yaml::Mapping::new();
    container.insert(ITEMS_KEY.into(), "vroom".into());
    assert_is_empty!(decode_list(&container));
}

#[rstest]
#[traced_test]
fn test_list_skips_non_mapping_entries(car_json: serde_json::Value) {
    let container = json!({"items": [42, car_json, "vroom", null]});

    let resources = decode_list(&container);

    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].kind, Some(TEST_KIND.into()));
    assert!(logs_contain("skipping non-mapping entry"));
}

#[rstest]
fn test_list_preserves_order(car_json: serde_json::Value) {
    let mut second = car_json.clone();
    second["metadata"]["name"] = json!("giulietta");
    let container = json!({"items": [car_json, second]});

    let resources = decode_list(&container);

    assert_eq!(resources.len(), 2);
    assert_eq!(resources[0].metadata.name, Some(TEST_NAME.into()));
    assert_eq!(resources[1].metadata.name, Some("giulietta".into()));
}

#[rstest]
fn test_missing_metadata() {
    let entry = json!({"apiVersion": TEST_API_VERSION, "kind": TEST_KIND});

    let resource = decode_resource(&entry);

    assert_eq!(resource.metadata, GenericMetadata::default());
    assert_none!(resource.spec);
}

#[rstest]
fn test_metadata_wrong_type() {
    let entry = json!({"metadata": "not a mapping"});
    assert_eq!(decode_resource(&entry).metadata, GenericMetadata::default());
}

#[rstest]
fn test_spec_wrong_type() {
    let entry = json!({"spec": "not a mapping"});
    assert_none!(decode_resource(&entry).spec);
}

#[rstest]
fn test_decode_full_mapping_list(car_list_mapping: yaml::Mapping) {
    let resources = decode_list(&car_list_mapping);
    assert_eq!(resources.len(), 1);

    let resource = &resources[0];
    assert_eq!(resource.api_version, Some(TEST_API_VERSION.into()));
    assert_eq!(resource.kind, Some(TEST_KIND.into()));

    let metadata = &resource.metadata;
    assert_eq!(metadata.creation_timestamp, Some(TEST_CREATION_TIMESTAMP.into()));
    assert_eq!(metadata.generation, Some(TEST_GENERATION));
    assert_eq!(metadata.name, Some(TEST_NAME.into()));
    assert_eq!(metadata.namespace, Some(TEST_NAMESPACE.into()));
    assert_eq!(metadata.resource_version, Some(TEST_RESOURCE_VERSION.into()));
    assert_eq!(metadata.self_link, Some(TEST_SELF_LINK.into()));
    assert_eq!(metadata.uid, Some(TEST_UID.into()));

    assert_eq!(resource.spec_value("engine"), Some(&json!(TEST_ENGINE)));
}

#[rstest]
fn test_decode_car_document(car_resource: GenericResource) {
    let data = r#"
        {
            "apiVersion": "openshift.pub/v1",
            "kind": "Car",
            "metadata": {
                "creationTimestamp": "2020-08-07T18:15:35Z",
                "generation": 1,
                "name": "alfaromeo",
                "resourceVersion": "472968",
                "selfLink": "/apis/openshift.pub/v1/cars/alfaromeo",
                "uid": "1229d4a6-b8aa-43a0-a5dc-b5ce6c59bf2e"
            },
            "spec": {
                "date_of_manufacturing": "2016-07-01T00:00:00Z",
                "engine": "CQ123456"
            }
        }
    "#;

    let resource = resource_from_json(data).unwrap();

    assert_none!(resource.metadata.namespace);
    assert_eq!(resource.spec_value("engine"), Some(&json!(TEST_ENGINE)));
    assert_eq!(resource, car_resource);
}

#[rstest]
fn test_format_transparency(
    car_json: serde_json::Value,
    car_mapping: yaml::Mapping,
    car_resource: GenericResource,
) {
    assert_eq!(decode_resource(&car_json), car_resource);
    assert_eq!(decode_resource(&car_mapping), car_resource);
}

#[rstest]
fn test_resource_from_yaml(car_resource: GenericResource) {
    assert_eq!(resource_from_yaml(&car_yaml()).unwrap(), car_resource);
}

#[rstest]
fn test_list_from_json(car_json: serde_json::Value, car_resource: GenericResource) {
    let data = serde_json::to_string(&json!({"items": [car_json]})).unwrap();
    assert_eq!(list_from_json(&data).unwrap(), vec![car_resource]);
}

#[rstest]
fn test_list_from_yaml(car_list_mapping: yaml::Mapping) {
    let data = serde_yaml::to_string(&car_list_mapping).unwrap();
    let resources = list_from_yaml(&data).unwrap();

    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].metadata.namespace, Some(TEST_NAMESPACE.into()));
}

#[rstest]
fn test_from_json_parse_error() {
    assert_err!(resource_from_json("{this is not json"));
    assert_err!(list_from_json("]["));
}
