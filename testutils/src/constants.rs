pub const TEST_API_VERSION: &str = "openshift.pub/v1";
pub const TEST_GROUP: &str = "openshift.pub";
pub const TEST_VERSION: &str = "v1";
pub const TEST_KIND: &str = "Car";
pub const TEST_NAME: &str = "alfaromeo";
pub const TEST_NAMESPACE: &str = "the-garage";
pub const TEST_CREATION_TIMESTAMP: &str = "2020-08-07T18:15:35Z";
pub const TEST_GENERATION: i64 = 1;
pub const TEST_RESOURCE_VERSION: &str = "472968";
pub const TEST_SELF_LINK: &str = "/apis/openshift.pub/v1/cars/alfaromeo";
pub const TEST_UID: &str = "1229d4a6-b8aa-43a0-a5dc-b5ce6c59bf2e";

// spec fields for the Car fixtures
pub const TEST_ENGINE: &str = "CQ123456";
pub const TEST_MANUFACTURED: &str = "2016-07-01T00:00:00Z";
