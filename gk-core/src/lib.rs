pub mod constants;
pub mod errors;
pub mod logging;
pub mod resource;

pub mod prelude {
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::api::DynamicObject;

    pub use crate::constants::*;
    pub use crate::resource::{
        FieldSource,
        GenericMetadata,
        GenericResource,
        GroupVersion,
        decode_list,
        decode_resource,
    };
}
