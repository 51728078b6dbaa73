use serde::Deserialize;

/// Single slot of the `Information` array, which mixes numbers and strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InformationValue {
    Number(f64),
    String(String),
}

impl InformationValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            InformationValue::Number(v) => Some(*v),
            InformationValue::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            InformationValue::String(s) => Some(s),
            InformationValue::Number(_) => None,
        }
    }
}
