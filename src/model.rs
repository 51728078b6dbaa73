use serde::{Serialize, Serializer};

pub type KWh = f64;

/// Inverter hardware family, as classified from the `type` code of the local API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// X1-Mini, also every type code without a better match
    CompactSingle,
    /// X1-Boost
    BoostSingle,
    /// X3
    Three,
    /// X3-G4
    ThreeGen4,
}

impl ModelKind {
    /// Classify raw `type` code.
    ///
    /// Codes 5, 6 and 7 end up as `CompactSingle`, and so does every other code not listed
    /// below. This mirrors what deployed clients report for those devices.
    pub fn from_type_code(type_code: i64) -> ModelKind {
        match type_code {
            4 => ModelKind::BoostSingle,
            16 => ModelKind::Three,
            14 | 15 => ModelKind::ThreeGen4,
            _ => ModelKind::CompactSingle,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::CompactSingle => "X1Mini",
            ModelKind::BoostSingle => "X1Boost",
            ModelKind::Three => "X3",
            ModelKind::ThreeGen4 => "X3G4",
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ModelKind {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

/// Positions of model-independent fields within the `Information` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPositionMap {
    pub total_capacity: usize,
    pub serial_number: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoostReading {
    pub yield_today: KWh,
    pub yield_total: KWh,
}

/// Model specific part of a decoded response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reading {
    Boost(BoostReading),
}

impl Reading {
    pub fn yield_today(&self) -> KWh {
        match self {
            Reading::Boost(r) => r.yield_today,
        }
    }

    pub fn yield_total(&self) -> KWh {
        match self {
            Reading::Boost(r) => r.yield_total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedResult {
    /// Serial number of the WiFi dongle answering the request
    pub sn: String,
    pub version: String,
    pub model: ModelKind,
    pub inverter_sn: String,
    pub inverter_total_capacity: f64,
    pub reading: Reading,
}
