use super::error::DecodeError;
use super::response::RealTimeData;
use crate::model::{BoostReading, DecodedResult, FieldPositionMap, ModelKind, Reading};

/* Raw `Data` values are tenths of the physical unit */
const DECIUNIT: f64 = 0.1;

/// Everything needed to interpret a `ReadRealTimeData` response of one model.
pub struct ModelLayout {
    pub fields: FieldPositionMap,
    pub reading: fn(&[i64]) -> Result<Reading, DecodeError>,
}

static BOOST_SINGLE: ModelLayout = ModelLayout {
    fields: FieldPositionMap {
        total_capacity: 0,
        serial_number: 2,
    },
    reading: boost_single_reading,
};

/// Layout of `model`, `None` for models which can't be decoded yet.
pub fn layout(model: ModelKind) -> Option<&'static ModelLayout> {
    match model {
        ModelKind::BoostSingle => Some(&BOOST_SINGLE),
        ModelKind::CompactSingle | ModelKind::Three | ModelKind::ThreeGen4 => None,
    }
}

fn data_at(data: &[i64], index: usize) -> Result<i64, DecodeError> {
    data.get(index).copied().ok_or_else(|| {
        DecodeError::MalformedEnvelope(format!(
            "Data[{}] out of range (length {})",
            index,
            data.len()
        ))
    })
}

fn deciunits(data: &[i64], index: usize) -> Result<f64, DecodeError> {
    data_at(data, index).map(|v| v as f64 * DECIUNIT)
}

fn boost_single_reading(data: &[i64]) -> Result<Reading, DecodeError> {
    Ok(Reading::Boost(BoostReading {
        yield_today: deciunits(data, 13)?,
        yield_total: deciunits(data, 11)?,
    }))
}

fn inverter_sn(envelope: &RealTimeData, index: usize) -> Result<String, DecodeError> {
    envelope
        .information
        .get(index)
        .ok_or_else(|| {
            DecodeError::MalformedEnvelope(format!("Information[{}] out of range", index))
        })?
        .as_str()
        .map(String::from)
        .ok_or_else(|| {
            DecodeError::MalformedEnvelope(format!(
                "Information[{}] (serial number) is not a string",
                index
            ))
        })
}

fn inverter_total_capacity(envelope: &RealTimeData, index: usize) -> Result<f64, DecodeError> {
    envelope
        .information
        .get(index)
        .ok_or_else(|| {
            DecodeError::MalformedEnvelope(format!("Information[{}] out of range", index))
        })?
        .as_f64()
        .ok_or_else(|| {
            DecodeError::MalformedEnvelope(format!(
                "Information[{}] (total capacity) is not a number",
                index
            ))
        })
}

/// Decode raw `ReadRealTimeData` response body.
pub fn decode(bytes: &[u8]) -> Result<DecodedResult, DecodeError> {
    let envelope = serde_json::from_slice::<RealTimeData>(bytes)
        .map_err(|e| DecodeError::MalformedEnvelope(e.to_string()))?;

    let model = ModelKind::from_type_code(envelope.type_code);
    log::debug!(
        "inverter {} reports type {}, classified as {}",
        envelope.sn,
        envelope.type_code,
        model
    );

    let layout = layout(model).ok_or(DecodeError::UnsupportedModel(model))?;
    let inverter_sn = inverter_sn(&envelope, layout.fields.serial_number)?;
    let inverter_total_capacity =
        inverter_total_capacity(&envelope, layout.fields.total_capacity)?;
    let reading = (layout.reading)(&envelope.data)?;

    Ok(DecodedResult {
        sn: envelope.sn,
        version: envelope.version,
        model,
        inverter_sn,
        inverter_total_capacity,
        reading,
    })
}
