use prometheus::{Encoder, GaugeVec, TextEncoder};
use solax_local_rs::model::DecodedResult;

lazy_static! {
    static ref YIELD_TODAY_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "solax_yield_today",
            "energy yield of current day reported by inverter (in kWh)",
        ),
        &["sn", "inverter_sn", "model"],
    )
    .unwrap();
    static ref YIELD_TOTAL_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "solax_yield_total",
            "lifetime energy yield reported by inverter (in kWh)",
        ),
        &["sn", "inverter_sn", "model"],
    )
    .unwrap();
    static ref TOTAL_CAPACITY_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "solax_inverter_total_capacity",
            "rated capacity of inverter",
        ),
        &["sn", "inverter_sn", "model"],
    )
    .unwrap();
}

/// Feed decoded `result` to Prometheus metrics.
fn process_result(result: &DecodedResult) {
    let labels = [
        result.sn.as_str(),
        result.inverter_sn.as_str(),
        result.model.name(),
    ];

    YIELD_TODAY_GAUGE
        .with_label_values(&labels)
        .set(result.reading.yield_today());
    YIELD_TOTAL_GAUGE
        .with_label_values(&labels)
        .set(result.reading.yield_total());
    TOTAL_CAPACITY_GAUGE
        .with_label_values(&labels)
        .set(result.inverter_total_capacity);
}

/// Read inverter at `host` once, updating Prometheus exporter registry.
pub async fn collect(host: &str, password: &str) -> Result<(), solax_local_rs::Error> {
    let result = solax_local_rs::request(host, password).await?;
    process_result(&result);

    Ok(())
}

/// Read metrics from Prometheus exporter registry.
pub async fn read() -> Result<String, solax_local_rs::Error> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    encoder
        .encode(&metric_families, &mut buffer)
        .or(Err(solax_local_rs::Error::FormatError))?;
    String::from_utf8(buffer).or(Err(solax_local_rs::Error::FormatError))
}

#[cfg(test)]
mod test {
    use super::*;
    use solax_local_rs::model::{BoostReading, ModelKind, Reading};

    #[tokio::test]
    async fn processed_result_is_exported() {
        let result = DecodedResult {
            sn: "SVRDJTTEUH".to_string(),
            version: "3.003.02".to_string(),
            model: ModelKind::BoostSingle,
            inverter_sn: "XB3342I2094013".to_string(),
            inverter_total_capacity: 4.2,
            reading: Reading::Boost(BoostReading {
                yield_today: 170.8,
                yield_total: 733.7,
            }),
        };
        process_result(&result);

        let text = read().await.unwrap();
        let yield_today = text
            .lines()
            .find(|l| l.starts_with("solax_yield_today{"))
            .unwrap();
        assert!(yield_today.contains("inverter_sn=\"XB3342I2094013\""));
        assert!(yield_today.contains("model=\"X1Boost\""));
        assert!(yield_today.ends_with(" 170.8"));
        assert!(text.contains("solax_yield_total{"));
        assert!(text.contains("solax_inverter_total_capacity{"));
    }
}
