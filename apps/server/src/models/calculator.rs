//! Calculator records (POST /calculator)

use serde::{ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// Two operands to add. Missing or `null` operands decode as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SumRequest {
    #[serde(rename = "num1", default, deserialize_with = "null_as_zero")]
    pub number1: f64,
    #[serde(rename = "num2", default, deserialize_with = "null_as_zero")]
    pub number2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SumResponse {
    #[serde(serialize_with = "serialize_finite")]
    pub result: f64,
}

impl SumRequest {
    /// Plain IEEE-754 addition; NaN and infinities propagate.
    pub fn sum(&self) -> SumResponse {
        SumResponse {
            result: self.number1 + self.number2,
        }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON has no representation for NaN or infinities, so refuse them
/// instead of letting serde_json write `null`.
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(S::Error::custom(format!("unsupported value: {value}")))
    }
}
