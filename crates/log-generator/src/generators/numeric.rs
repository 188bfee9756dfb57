//! `integer` and `float` fields.

use super::choice::weighted_choice;
use field_values::base::round3;
use field_values::FieldValueLibrary;
use log_schema::{FieldSpec, FloatGenerator, IntegerGenerator};
use serde_json::{Number, Value};

/// Weighted choice over `distribution` keys when present, otherwise the
/// named generator (uniform in `[params.min, params.max]` by default).
pub fn generate_integer<L: FieldValueLibrary>(lib: &mut L, spec: &FieldSpec) -> Value {
    if let Some(value) = spec
        .distribution
        .as_ref()
        .and_then(|dist| weighted_choice(lib, dist))
    {
        return value;
    }

    let value = match spec.integer_generator() {
        IntegerGenerator::Uniform { min, max } => lib.int_in_range(min, max),
        IntegerGenerator::HttpStatus => lib.http_status(),
        IntegerGenerator::BodyBytes { min, max } => lib.body_bytes(min, max),
    };
    Value::Number(value.into())
}

pub fn generate_float<L: FieldValueLibrary>(lib: &mut L, spec: &FieldSpec) -> Value {
    let value = match spec.float_generator() {
        FloatGenerator::RequestTime { mean, min, max } => lib.request_time(min, max, mean),
        FloatGenerator::Uniform { min, max } => round3(lib.float_in_range(min, max)),
        FloatGenerator::Latitude => lib.latitude(),
        FloatGenerator::Longitude => lib.longitude(),
    };
    float_value(value)
}

/// JSON number for `value`; non-finite floats become `null`.
pub fn float_value(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_values::ValueLibrary;
    use log_schema::{Distribution, FieldKind, Params};
    use serde_json::json;

    #[test]
    fn test_integer_default_range() {
        let spec = FieldSpec::new(FieldKind::Integer);
        let mut lib = ValueLibrary::seeded(42);
        for _ in 0..200 {
            let v = generate_integer(&mut lib, &spec).as_i64().unwrap();
            assert!((0..=1000).contains(&v));
        }
    }

    #[test]
    fn test_integer_params_range() {
        let spec =
            FieldSpec::new(FieldKind::Integer).with_params(Params::new().with("min", 10).with("max", 12));
        let mut lib = ValueLibrary::seeded(42);
        for _ in 0..100 {
            let v = generate_integer(&mut lib, &spec).as_i64().unwrap();
            assert!((10..=12).contains(&v));
        }
    }

    #[test]
    fn test_integer_distribution_keys() {
        let spec = FieldSpec::new(FieldKind::Integer).with_distribution(Distribution::new(vec![
            (json!(200), 0.9),
            (json!(500), 0.1),
        ]));
        let mut lib = ValueLibrary::seeded(42);
        let values: Vec<Value> = (0..300).map(|_| generate_integer(&mut lib, &spec)).collect();
        assert!(values.iter().all(|v| *v == json!(200) || *v == json!(500)));
        let ok = values.iter().filter(|v| **v == json!(200)).count();
        assert!(ok > 200, "ok = {ok}");
    }

    #[test]
    fn test_integer_named_generators() {
        let mut lib = ValueLibrary::seeded(42);

        let status = FieldSpec::new(FieldKind::Integer).with_generator("http_status", Params::new());
        for _ in 0..100 {
            let v = generate_integer(&mut lib, &status).as_i64().unwrap();
            assert!((100..=599).contains(&v), "{v}");
        }

        let bytes = FieldSpec::new(FieldKind::Integer)
            .with_generator("body_bytes", Params::new().with("min", 100).with("max", 2000));
        for _ in 0..100 {
            let v = generate_integer(&mut lib, &bytes).as_i64().unwrap();
            assert!((100..=2000).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_distribution_wins_over_generator() {
        let spec = FieldSpec::new(FieldKind::Integer)
            .with_generator("http_status", Params::new())
            .with_distribution(Distribution::new(vec![(json!(418), 1.0)]));
        let mut lib = ValueLibrary::seeded(42);
        assert_eq!(generate_integer(&mut lib, &spec), json!(418));
    }

    #[test]
    fn test_float_coordinates() {
        let lat = FieldSpec::new(FieldKind::Float).with_generator("latitude", Params::new());
        let lon = FieldSpec::new(FieldKind::Float).with_generator("longitude", Params::new());
        let mut lib = ValueLibrary::seeded(42);
        let mut wide = false;
        for _ in 0..100 {
            let a = generate_float(&mut lib, &lat).as_f64().unwrap();
            let o = generate_float(&mut lib, &lon).as_f64().unwrap();
            assert!((-90.0..=90.0).contains(&a), "{a}");
            assert!((-180.0..=180.0).contains(&o), "{o}");
            wide |= a.abs() > 1.0 || o.abs() > 1.0;
        }
        // not the default uniform [0, 1]
        assert!(wide);
    }

    #[test]
    fn test_float_uniform_three_decimals() {
        let spec = FieldSpec::new(FieldKind::Float)
            .with_params(Params::new().with("min", 1.0).with("max", 2.0));
        let mut lib = ValueLibrary::seeded(42);
        for _ in 0..100 {
            let v = generate_float(&mut lib, &spec).as_f64().unwrap();
            assert!((1.0..=2.0).contains(&v));
            assert!(((v * 1000.0).round() - v * 1000.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_float_extreme_bounds_stay_numeric() {
        let spec = FieldSpec::new(FieldKind::Float)
            .with_params(Params::new().with("min", -1e308).with("max", 1e308));
        let mut lib = ValueLibrary::seeded(42);
        assert_eq!(generate_float(&mut lib, &spec), json!(-1e308));
    }

    #[test]
    fn test_request_time_clamped() {
        let spec = FieldSpec::new(FieldKind::Float).with_generator(
            "request_time",
            Params::new().with("min", 0.001).with("max", 5.0).with("mean", 0.2),
        );
        let mut lib = ValueLibrary::seeded(42);
        for _ in 0..200 {
            let v = generate_float(&mut lib, &spec).as_f64().unwrap();
            assert!((0.001..=5.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_float_value_non_finite() {
        assert_eq!(float_value(f64::NAN), Value::Null);
        assert_eq!(float_value(1.5), json!(1.5));
    }
}
