use axum::body::Bytes;
use serde_json::json;

/// Converts a JSON value to request body bytes
pub fn to_json_body(value: &serde_json::Value) -> anyhow::Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(value)?))
}

/// Calculator request body
pub fn sum_request(num1: f64, num2: f64) -> serde_json::Value {
    json!({ "num1": num1, "num2": num2 })
}

/// Portfolio request body
pub fn portfolio_request(holdings: &[&str]) -> serde_json::Value {
    json!({ "holdings": holdings })
}

/// Portfolio request with `count` distinct four-letter symbols
pub fn generated_portfolio(count: usize) -> serde_json::Value {
    let holdings: Vec<String> = (0..count)
        .map(|i| {
            let mut n = i;
            (0..4)
                .map(|_| {
                    let c = (b'A' + (n % 26) as u8) as char;
                    n /= 26;
                    c
                })
                .collect()
        })
        .collect();
    json!({ "holdings": holdings })
}
