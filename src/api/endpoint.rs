pub type OptType = str;

/* Every request goes to the root of the dongle, the operation is selected by `optType` */
pub const ROOT: &str = "/";

pub const READ_REAL_TIME_DATA: &OptType = "ReadRealTimeData";
