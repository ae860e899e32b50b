//! Custom scalars.

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use gestao_core::atividade::{parse_prazo, PRAZO_FORMAT, PRAZO_FORMAT_MESSAGE};
use gestao_core::types;

/// A calendar date written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub types::Date);

#[Scalar(name = "Date")]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(raw) => parse_prazo(raw)
                .map(Date)
                .ok_or_else(|| InputValueError::custom(PRAZO_FORMAT_MESSAGE)),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.format(PRAZO_FORMAT).to_string())
    }
}
