// Top-level fields of every Kubernetes-style resource; these keys (plus the
// metadata keys below) are the only contract surface shared with whatever
// produced the input.
pub const API_VERSION_KEY: &str = "apiVersion";
pub const KIND_KEY: &str = "kind";
pub const METADATA_KEY: &str = "metadata";
pub const SPEC_KEY: &str = "spec";

// List-shaped containers wrap their entries in this field
pub const ITEMS_KEY: &str = "items";

// Metadata envelope fields
pub const CREATION_TIMESTAMP_KEY: &str = "creationTimestamp";
pub const GENERATION_KEY: &str = "generation";
pub const NAME_KEY: &str = "name";
pub const NAMESPACE_KEY: &str = "namespace";
pub const RESOURCE_VERSION_KEY: &str = "resourceVersion";
pub const SELF_LINK_KEY: &str = "selfLink";
pub const UID_KEY: &str = "uid";

// The core API group is the empty string; its apiVersion is a bare version
pub const CORE_API_GROUP: &str = "";
