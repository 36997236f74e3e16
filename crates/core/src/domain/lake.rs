//! Lake records and the attribute view used to describe them.
use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the `lake` relation. Only `name` is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Lake {
    pub name: String,
    pub area: Option<f64>,
    pub depth: Option<f64>,
    pub elevation: Option<f64>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub lake_type: Option<String>,
    pub river: Option<String>,
}

/// Describable attributes of a lake, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LakeAttribute {
    Area,
    Depth,
    Elevation,
    Type,
    River,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl LakeAttribute {
    pub const ALL: [LakeAttribute; 5] = [
        LakeAttribute::Area,
        LakeAttribute::Depth,
        LakeAttribute::Elevation,
        LakeAttribute::Type,
        LakeAttribute::River,
    ];

    pub fn column(self) -> &'static str {
        match self {
            LakeAttribute::Area => "area",
            LakeAttribute::Depth => "depth",
            LakeAttribute::Elevation => "elevation",
            LakeAttribute::Type => "type",
            LakeAttribute::River => "river",
        }
    }

    /// Fills the attribute's sentence template with the lake name and value.
    pub fn render(self, name: &str, value: &AttributeValue) -> String {
        match self {
            LakeAttribute::Area => format!("The area {name} is {value} square kilometers."),
            LakeAttribute::Depth => format!("The depth of {name} is {value} meters."),
            LakeAttribute::Elevation => format!("The elevation of {name} is {value} meters."),
            LakeAttribute::Type => format!("The type of {name} is {value}."),
            LakeAttribute::River => format!("{name} empties into a river named {value}."),
        }
    }
}

impl fmt::Display for LakeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display already drops the fractional part of whole numbers.
            AttributeValue::Number(n) => write!(f, "{n}"),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl Lake {
    pub fn value_of(&self, attribute: LakeAttribute) -> Option<AttributeValue> {
        match attribute {
            LakeAttribute::Area => self.area.map(AttributeValue::Number),
            LakeAttribute::Depth => self.depth.map(AttributeValue::Number),
            LakeAttribute::Elevation => self.elevation.map(AttributeValue::Number),
            LakeAttribute::Type => self.lake_type.clone().map(AttributeValue::Text),
            LakeAttribute::River => self.river.clone().map(AttributeValue::Text),
        }
    }

    /// Attributes other than `name` that carry a value.
    pub fn eligible_attributes(&self) -> Vec<(LakeAttribute, AttributeValue)> {
        LakeAttribute::ALL
            .into_iter()
            .filter_map(|attr| self.value_of(attr).map(|v| (attr, v)))
            .collect()
    }
}

/// Query-service projection of a lake. Measurements are whole numbers and
/// absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LakeSummary {
    pub name: String,
    pub area: Option<i64>,
    pub elevation: Option<i64>,
    #[serde(rename = "type")]
    pub lake_type: Option<String>,
}

impl LakeSummary {
    pub fn new(
        name: String,
        area: Option<f64>,
        elevation: Option<f64>,
        lake_type: Option<String>,
    ) -> Self {
        Self {
            name,
            area: area.map(whole_number),
            elevation: elevation.map(whole_number),
            lake_type,
        }
    }
}

// Truncates toward zero; `as` saturates on out-of-range values.
fn whole_number(v: f64) -> i64 {
    v.trunc() as i64
}
