mod decode;
mod group_version;
mod kube_ext;
mod model;
mod source;

pub use decode::*;
pub use group_version::*;
pub use model::*;
pub use source::FieldSource;

use crate::errors::*;

err_impl! {ResourceError,
    #[error("resource has no apiVersion: {0}")]
    NoApiVersion(String),

    #[error("invalid format for apiVersion: {0}")]
    InvalidApiVersion(String),
}
