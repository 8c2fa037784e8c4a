//! Structured locators for animatable properties.
//!
//! A locator names one animatable property in a scene: the entity path down
//! the hierarchy, the component on that entity, and the property path within
//! that component. Its string form joins the three fields with '/', the two
//! path fields each joined internally with '.':
//!   "spotLight/light/color.r"
//! Separators occurring inside a field are escaped by the path codec, so
//! encode/decode round-trips arbitrary segment content.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::path::{join_path, join_path_with, split_path, split_path_with};

/// Number of '/'-separated sections in an encoded locator.
const SECTIONS: usize = 3;

/// Errors produced when decoding a locator string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// The string did not split into entity path, component and property path.
    #[error("malformed locator `{locator}`: expected 3 sections separated by '/', found {found}")]
    Malformed { locator: String, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    /// Entity names from the hierarchy root down to the animated entity.
    pub entity_path: Vec<String>,
    /// Component name on the final entity; one opaque segment, never split.
    pub component: String,
    /// Property names from the component down to the animated property.
    pub property_path: Vec<String>,
}

impl Locator {
    /// Construct a locator from its three fields. A path field consisting of
    /// a single segment is passed as a one-element array.
    pub fn new<E, P>(entity_path: E, component: impl Into<String>, property_path: P) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            entity_path: entity_path.into_iter().map(Into::into).collect(),
            component: component.into(),
            property_path: property_path.into_iter().map(Into::into).collect(),
        }
    }

    /// Encode into the canonical string form.
    pub fn encode(&self) -> String {
        join_path_with(
            &[
                join_path(&self.entity_path),
                self.component.clone(),
                join_path(&self.property_path),
            ],
            '/',
        )
    }

    /// Decode a string produced by [`encode`](Self::encode).
    pub fn decode(locator: &str) -> Result<Self, LocatorError> {
        let mut sections = split_path_with(locator, '/');
        if sections.len() != SECTIONS {
            return Err(LocatorError::Malformed {
                locator: locator.to_string(),
                found: sections.len(),
            });
        }
        let entity_path = split_path(&sections[0]);
        let property_path = split_path(&sections[2]);
        let component = std::mem::take(&mut sections[1]);
        Ok(Self {
            entity_path,
            component,
            property_path,
        })
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Locator {
    type Err = LocatorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locator::decode(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for Locator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Locator {
    fn deserialize<D>(deserializer: D) -> Result<Locator, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Locator::decode(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_single_entity() {
        let l = Locator::new(["spotLight"], "light", ["color", "r"]);
        assert_eq!(l.encode(), "spotLight/light/color.r");
    }

    #[test]
    fn decode_single_entity() {
        let l = Locator::decode("spotLight/light/color.r").unwrap();
        assert_eq!(l, Locator::new(["spotLight"], "light", ["color", "r"]));
    }

    #[test]
    fn multi_entity_path() {
        let l = Locator::new(["root", "child"], "render", ["enabled"]);
        assert_eq!(l.encode(), "root.child/render/enabled");
        assert_eq!(Locator::decode("root.child/render/enabled").unwrap(), l);
    }

    #[test]
    fn slash_inside_field_round_trips() {
        let l = Locator::new(["a/b"], "com/p", ["x"]);
        let encoded = l.encode();
        assert_eq!(encoded, "a\\/b/com\\/p/x");
        assert_eq!(Locator::decode(&encoded).unwrap(), l);
    }

    #[test]
    fn dot_inside_entity_segment_round_trips() {
        // the inner join escapes the dot; the outer join then escapes the
        // backslash the inner join introduced
        let l = Locator::new(["spot.Light"], "light", ["color"]);
        let encoded = l.encode();
        assert_eq!(encoded, "spot\\\\.Light/light/color");
        assert_eq!(Locator::decode(&encoded).unwrap(), l);
    }

    #[test]
    fn empty_entity_path_round_trips() {
        let l = Locator::new(Vec::<String>::new(), "scene", ["exposure"]);
        let encoded = l.encode();
        assert_eq!(encoded, "/scene/exposure");
        assert_eq!(Locator::decode(&encoded).unwrap(), l);
    }

    #[test]
    fn decode_rejects_wrong_section_count() {
        assert!(matches!(
            Locator::decode("spotLight/light"),
            Err(LocatorError::Malformed { found: 2, .. })
        ));
        assert!(matches!(
            Locator::decode("a/b/c/d"),
            Err(LocatorError::Malformed { found: 4, .. })
        ));
        assert!(matches!(
            Locator::decode(""),
            Err(LocatorError::Malformed { found: 0, .. })
        ));
    }

    #[test]
    fn serde_round_trip_as_string() {
        let l = Locator::new(["root", "lamp"], "light", ["intensity"]);
        let json = serde_json::to_string(&l).unwrap();
        assert_eq!(json, "\"root.lamp/light/intensity\"");
        let parsed: Locator = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, l);
    }

    #[test]
    fn display_and_from_str() {
        let l: Locator = "root/render/enabled".parse().unwrap();
        assert_eq!(l.to_string(), "root/render/enabled");
    }
}
