use chrono::{
    DateTime,
    SecondsFormat,
    Utc,
};
use kube::api::TypeMeta;
use serde_json as json;

use super::*;
use crate::constants::*;
use crate::prelude::*;

// DynamicObject is how kube-based tooling passes around objects with no
// compile-time schema; these conversions let decoded resources flow into and
// out of that world.  Neither direction can fail: fields with no counterpart
// (or values the other side can't represent) are left unset.
impl GenericResource {
    pub fn from_dynamic_obj(obj: &DynamicObject) -> GenericResource {
        GenericResource {
            api_version: obj.types.as_ref().map(|t| t.api_version.clone()),
            kind: obj.types.as_ref().map(|t| t.kind.clone()),
            metadata: GenericMetadata {
                creation_timestamp: obj
                    .metadata
                    .creation_timestamp
                    .as_ref()
                    .map(|ts| ts.0.to_rfc3339_opts(SecondsFormat::Secs, true)),
                generation: obj.metadata.generation,
                name: obj.metadata.name.clone(),
                namespace: obj.metadata.namespace.clone(),
                resource_version: obj.metadata.resource_version.clone(),

                // selfLink was dropped from ObjectMeta upstream, so it has no
                // counterpart here
                self_link: None,

                uid: obj.metadata.uid.clone(),
            },
            spec: (&obj.data).opaque(SPEC_KEY),
        }
    }

    pub fn to_dynamic_obj(&self) -> DynamicObject {
        let types = match (&self.api_version, &self.kind) {
            (Some(api_version), Some(kind)) => Some(TypeMeta {
                api_version: api_version.clone(),
                kind: kind.clone(),
            }),
            _ => None,
        };

        let data = match &self.spec {
            Some(spec) => {
                let mut data = json::Map::new();
                data.insert(SPEC_KEY.into(), json::Value::Object(spec.clone()));
                json::Value::Object(data)
            },
            None => json::Value::Null,
        };

        DynamicObject {
            metadata: metav1::ObjectMeta {
                creation_timestamp: self
                    .metadata
                    .creation_timestamp
                    .as_ref()
                    .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
                    .map(|ts| metav1::Time(ts.with_timezone(&Utc))),
                generation: self.metadata.generation,
                name: self.metadata.name.clone(),
                namespace: self.metadata.namespace.clone(),
                resource_version: self.metadata.resource_version.clone(),
                uid: self.metadata.uid.clone(),
                ..Default::default()
            },
            types,
            data,
        }
    }
}
