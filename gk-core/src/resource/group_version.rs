use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de,
};

use super::*;
use crate::constants::*;
use crate::errors::*;

// GroupVersion is the parsed form of a resource's apiVersion field.  Resources
// in the core group carry a bare version string ("v1"); everything else is
// "group/version".  We serialize back to the same wire format, so a
// GroupVersion embedded in some other document reads like an apiVersion.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GroupVersion {
    pub group: String,
    pub version: String,
}

impl GroupVersion {
    pub fn new(group: &str, version: &str) -> GroupVersion {
        GroupVersion { group: group.into(), version: version.into() }
    }

    pub fn api_version(&self) -> String {
        format!("{self}")
    }

    pub fn is_core(&self) -> bool {
        self.group == CORE_API_GROUP
    }
}

impl FromStr for GroupVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<GroupVersion> {
        ensure!(!s.is_empty(), ResourceError::invalid_api_version(s));

        let parts: Vec<_> = s.split('/').collect();
        match parts.len() {
            1 => Ok(GroupVersion::new(CORE_API_GROUP, parts[0])),
            2 => Ok(GroupVersion::new(parts[0], parts[1])),
            _ => bail!(ResourceError::invalid_api_version(s)),
        }
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_core() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}

impl Serialize for GroupVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // reuse the display impl for serializing
        serializer.serialize_str(&format!("{self}"))
    }
}

struct GroupVersionVisitor;

impl<'de> de::Visitor<'de> for GroupVersionVisitor {
    type Value = GroupVersion;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an apiVersion in the format group/version")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(|err| E::custom(format!("{err}")))
    }
}

impl<'de> Deserialize<'de> for GroupVersion {
    fn deserialize<D>(deserializer: D) -> Result<GroupVersion, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(GroupVersionVisitor)
    }
}
