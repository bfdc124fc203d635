//! JSON shape of [`Interval`].
//!
//! Intervals are written as `{"start": 1, "end": 10}`. Reading matches the keys ignoring ASCII
//! case (older clients send `Start`/`End`), skips unknown keys and also accepts plain
//! `[start, end]` pairs.

use crate::Interval;
use serde::{Deserialize, Serialize, de, ser};
use std::fmt;

#[derive(Serialize)]
struct IntervalObject {
    start: i64,
    end: i64,
}

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        IntervalObject { start: self.start(), end: self.end() }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(IntervalVisitor)
    }
}

struct IntervalVisitor;

impl<'de> de::Visitor<'de> for IntervalVisitor {
    type Value = Interval;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"an interval like {"start": 1, "end": 10} or [1, 10]"#)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Interval, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let (mut start, mut end) = (None, None);
        // later duplicates win
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("start") {
                start = Some(map.next_value()?);
            } else if key.eq_ignore_ascii_case("end") {
                end = Some(map.next_value()?);
            } else {
                map.next_value::<de::IgnoredAny>()?;
            }
        }
        let start = start.ok_or_else(|| de::Error::missing_field("start"))?;
        let end = end.ok_or_else(|| de::Error::missing_field("end"))?;
        Ok(Interval::new(start, end))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Interval, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let start = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let end = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(Interval::new(start, end))
    }
}
