use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// `serde_as` adapter for timestamps like `Wed Oct 10 20:19:24 +0000 2018`.
pub struct TwitterDate;

impl TwitterDate {
    const FORMAT: &'static str = "%a %b %d %H:%M:%S %z %Y";

    pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_str(s, Self::FORMAT).map(|dt| dt.to_utc())
    }
}

impl SerializeAs<DateTime<Utc>> for TwitterDate {
    fn serialize_as<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(Self::FORMAT))
    }
}

impl<'de> DeserializeAs<'de, DateTime<Utc>> for TwitterDate {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(|e| de::Error::custom(format!("invalid date `{}`: {}", s, e)))
    }
}
