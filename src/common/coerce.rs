// src/common/coerce.rs
//
// Coerção de números vindos do JSON. As colunas decimais do SQL chegam
// serializadas ora como número, ora como string ("75000.00"), dependendo
// do cliente. A fronteira da API aceita os dois formatos e rejeita o
// resto, em vez de deixar um NaN se propagar.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

/// Converte um `Value` (número ou string numérica) em [`Decimal`].
pub fn decimal_from_value(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(|f| Decimal::try_from(f).ok())
            }
        }
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Para `#[serde(deserialize_with = ...)]` em campos obrigatórios.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decimal_from_value(&value)
        .ok_or_else(|| de::Error::custom("valor numérico inválido"))
}

/// Idem, para campos opcionais (null e ausência viram `None`).
pub fn lenient_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => decimal_from_value(&v)
            .map(Some)
            .ok_or_else(|| de::Error::custom("valor numérico inválido")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aceita_numero_e_string_numerica() {
        assert_eq!(
            decimal_from_value(&json!(75000)),
            Some(Decimal::from(75000))
        );
        assert_eq!(
            decimal_from_value(&json!("75000.50")),
            Decimal::from_str("75000.50").ok()
        );
        assert_eq!(
            decimal_from_value(&json!(" 120 ")),
            Some(Decimal::from(120))
        );
    }

    #[test]
    fn rejeita_lixo_sem_virar_nan() {
        assert_eq!(decimal_from_value(&json!("abc")), None);
        assert_eq!(decimal_from_value(&json!({"x": 1})), None);
        assert_eq!(decimal_from_value(&json!(null)), None);
        assert_eq!(decimal_from_value(&json!([1, 2])), None);
    }

    #[test]
    fn deserializador_leniente_em_struct() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(deserialize_with = "lenient_decimal")]
            rent: Decimal,
            #[serde(default, deserialize_with = "lenient_decimal_opt")]
            area: Option<Decimal>,
        }

        let p: Payload = serde_json::from_str(r#"{"rent": "1500", "area": 32.5}"#).unwrap();
        assert_eq!(p.rent, Decimal::from(1500));
        assert_eq!(p.area, Decimal::from_str("32.5").ok());

        let p: Payload = serde_json::from_str(r#"{"rent": 900}"#).unwrap();
        assert_eq!(p.rent, Decimal::from(900));
        assert_eq!(p.area, None);

        let err = serde_json::from_str::<Payload>(r#"{"rent": "pas un nombre"}"#);
        assert!(err.is_err());
    }
}
