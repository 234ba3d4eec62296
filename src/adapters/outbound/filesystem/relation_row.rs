use crate::relation_trimming::domain::{Extras, OutputRecord, ProductCode, RelationRecord};
use crate::shared::Result;
use anyhow::Context;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// One relation table row as stored on disk
///
/// Used for both reading and writing, so trimmed output can be fed back in.
/// Column names written by older tooling are accepted as aliases. Every
/// other column is kept in `extras` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRow {
    #[serde(alias = "head_product_code")]
    pub primary_code: String,
    #[serde(alias = "tail_product_code")]
    pub related_code: String,
    #[serde(
        alias = "relation",
        alias = "relationship",
        deserialize_with = "deserialize_direction"
    )]
    pub direction: i64,
    #[serde(
        default,
        alias = "head_ancestors",
        deserialize_with = "deserialize_ancestors"
    )]
    pub primary_ancestors: Vec<String>,
    #[serde(
        default,
        alias = "tail_ancestors",
        deserialize_with = "deserialize_ancestors"
    )]
    pub related_ancestors: Vec<String>,
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

impl RelationRow {
    /// Validates codes and converts into a domain record
    pub fn into_record(self) -> Result<RelationRecord> {
        let primary = ProductCode::new(self.primary_code).context("primary_code")?;
        let related = ProductCode::new(self.related_code).context("related_code")?;
        let primary_ancestors =
            Self::parse_codes(self.primary_ancestors).context("primary_ancestors")?;
        let related_ancestors =
            Self::parse_codes(self.related_ancestors).context("related_ancestors")?;

        Ok(RelationRecord::new(
            primary,
            related,
            self.direction,
            primary_ancestors,
            related_ancestors,
        )
        .with_extras(Extras::from(self.extras)))
    }

    fn parse_codes(codes: Vec<String>) -> Result<Vec<ProductCode>> {
        codes.into_iter().map(ProductCode::new).collect()
    }
}

impl From<&OutputRecord> for RelationRow {
    fn from(record: &OutputRecord) -> Self {
        Self {
            primary_code: record.primary.to_string(),
            related_code: record.related.to_string(),
            direction: record.direction.as_i64(),
            primary_ancestors: record.primary_ancestors.iter().map(|c| c.to_string()).collect(),
            related_ancestors: record.related_ancestors.iter().map(|c| c.to_string()).collect(),
            extras: record.extras.clone().into_inner(),
        }
    }
}

/// Accepts integers and whole-valued floats (`1.0`), which dataframe
/// exports produce for integer columns
fn deserialize_direction<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct DirectionVisitor;

    impl Visitor<'_> for DirectionVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer direction (1 or -1)")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<i64, E> {
            i64::try_from(v).map_err(|_| E::custom(format!("direction {} is out of range", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<i64, E> {
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::custom(format!("direction {} is not a whole number", v)))
            }
        }
    }

    deserializer.deserialize_any(DirectionVisitor)
}

/// Accepts a list of codes, a comma-separated string (`"A, B"`), or null.
/// Empty entries are skipped. In the string form, whitespace around the
/// commas is part of the separator; list entries are taken verbatim.
fn deserialize_ancestors<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AncestorsVisitor;

    impl<'de> Visitor<'de> for AncestorsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of product codes or a comma-separated string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect())
        }

        fn visit_seq<A: SeqAccess<'de>>(
            self,
            mut seq: A,
        ) -> std::result::Result<Self::Value, A::Error> {
            let mut codes = Vec::new();
            while let Some(code) = seq.next_element::<String>()? {
                if !code.is_empty() {
                    codes.push(code);
                }
            }
            Ok(codes)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(AncestorsVisitor)
}
