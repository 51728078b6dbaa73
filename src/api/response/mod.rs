mod information;

pub use information::InformationValue;
use serde::Deserialize;

/* Response to `optType=ReadRealTimeData` */
#[derive(Debug, Deserialize)]
pub struct RealTimeData {
    pub sn: String,
    #[serde(rename = "ver")]
    pub version: String,
    #[serde(rename = "type")]
    pub type_code: i64,
    #[serde(rename = "Data")]
    pub data: Vec<i64>,
    #[serde(rename = "Information")]
    pub information: Vec<InformationValue>,
}

#[cfg(test)]
mod test {
    use super::{InformationValue, RealTimeData};
    use std::fs;
    use std::path::PathBuf;

    fn read_resource(filename: &str) -> String {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push(format!("resources/test/{}", filename));
        fs::read_to_string(d.as_path()).unwrap()
    }

    #[test]
    fn read_real_time_data() {
        let input = read_resource("readRealTimeData_X1Boost.json");
        let output: RealTimeData = serde_json::from_str(&input).unwrap();
        assert_eq!("SVRDJTTEUH", output.sn);
        assert_eq!("3.003.02", output.version);
        assert_eq!(4, output.type_code);
        assert_eq!(100, output.data.len());
        assert_eq!(7337, output.data[11]);
        assert_eq!(1708, output.data[13]);
    }

    #[test]
    fn information_keeps_mixed_types() {
        let input = read_resource("readRealTimeData_X1Boost.json");
        let output: RealTimeData = serde_json::from_str(&input).unwrap();
        assert_eq!(InformationValue::Number(4.2), output.information[0]);
        assert_eq!(InformationValue::Number(4.0), output.information[1]);
        assert_eq!(
            InformationValue::String("XB3342I2094013".to_string()),
            output.information[2]
        );
        assert_eq!(10, output.information.len());
    }

    #[test]
    fn read_real_time_data_x3() {
        let input = read_resource("readRealTimeData_X3.json");
        let output: RealTimeData = serde_json::from_str(&input).unwrap();
        assert_eq!(16, output.type_code);
    }

    #[test]
    #[should_panic]
    fn read_real_time_data_invalid_json() {
        let input = read_resource("invalid_json.json");
        let _output: RealTimeData = serde_json::from_str(&input).unwrap();
    }

    #[test]
    #[should_panic]
    fn read_real_time_data_missing_fields() {
        let input = read_resource("valid_json.json");
        let _output: RealTimeData = serde_json::from_str(&input).unwrap();
    }
}
