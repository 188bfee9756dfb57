//! Schema-driven generation through the public simulator API, against the
//! fixture catalog in `tests/fixtures/schemas`.

use chrono::{DateTime, Utc};
use log_schema::SchemaError;
use log_simulator::{GenerateRequest, GenerationLimits, Simulator, SimulatorError};
use serde_json::{json, Value};
use std::path::PathBuf;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn simulator() -> Simulator {
    let root = fixtures();
    Simulator::new(
        root.join("schemas"),
        root.join("templates"),
        GenerationLimits::default(),
    )
}

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T10:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn seeded(count: u64, seed: u64) -> GenerateRequest {
    GenerateRequest {
        seed: Some(seed),
        base_time: Some(base_time()),
        ..GenerateRequest::new(count)
    }
}

#[test]
fn test_minimal_schema_shapes() -> Result<(), Box<dyn std::error::Error>> {
    let records = simulator().generate("minimal", &seeded(3, 1))?;

    assert_eq!(records.len(), 3);
    for record in &records {
        let id = record["id"].as_str().unwrap();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);

        let ip = record["ip"].as_str().unwrap();
        let octets: Vec<u8> = ip.split('.').map(|o| o.parse().unwrap()).collect();
        assert_eq!(octets.len(), 4);
    }
    Ok(())
}

#[test]
fn test_enum_override_pins_value() -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerateRequest {
        overrides: [("status".to_string(), json!("fail"))].into_iter().collect(),
        ..seeded(50, 3)
    };
    let records = simulator().generate("status", &request)?;
    assert!(records.iter().all(|r| r["status"] == "fail"));

    let by_scenario = GenerateRequest {
        scenario: Some("failing".to_string()),
        ..seeded(50, 3)
    };
    let records = simulator().generate("basic/status", &by_scenario)?;
    assert!(records.iter().all(|r| r["status"] == "fail"));
    Ok(())
}

#[test]
fn test_all_types_conform() -> Result<(), Box<dyn std::error::Error>> {
    let records = simulator().generate("all_types", &seeded(25, 11))?;
    assert_eq!(records.len(), 25);

    for record in &records {
        let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "source",
                "timestamp",
                "event_id",
                "user",
                "contact",
                "client_ip",
                "bytes",
                "latency",
                "success",
                "level",
                "actor",
                "tags",
                "mystery"
            ]
        );

        assert_eq!(record["source"], "simulator");
        assert!(record["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(record["event_id"].as_str().unwrap().len(), 36);
        assert!(!record["user"].as_str().unwrap().is_empty());
        assert!(record["contact"].as_str().unwrap().ends_with("@corp.example"));

        let ip = record["client_ip"].as_str().unwrap();
        assert!(ip.starts_with("10.") || ip.starts_with("172.") || ip.starts_with("192.168."));

        let bytes = record["bytes"].as_i64().unwrap();
        assert!((10..=20).contains(&bytes));

        let latency = record["latency"].as_f64().unwrap();
        assert!((0.01..=5.0).contains(&latency));

        assert!(record["success"].is_boolean());
        assert!(["INFO", "WARN", "ERROR"].contains(&record["level"].as_str().unwrap()));

        let token = record["actor"]["session"]["token"].as_str().unwrap();
        assert!(token.starts_with("sess-"));
        assert_eq!(token.len(), "sess-".len() + 10);
        assert!(record["actor"]["name"].is_string());

        let tags = record["tags"].as_array().unwrap();
        assert!((2..=4).contains(&tags.len()));
        for tag in tags {
            assert!(["alpha", "beta", "gamma"].contains(&tag.as_str().unwrap()));
        }

        // unregistered generator name
        assert_eq!(record["mystery"], "default_value");
    }
    Ok(())
}

#[test]
fn test_time_spread_is_monotonic() -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerateRequest {
        spread_seconds: 3600,
        ..seeded(7, 5)
    };
    let records = simulator().generate("all_types", &request)?;

    let times: Vec<DateTime<Utc>> = records
        .iter()
        .map(|r| {
            DateTime::parse_from_rfc3339(r["timestamp"].as_str().unwrap())
                .unwrap()
                .with_timezone(&Utc)
        })
        .collect();
    assert_eq!(times[0], base_time());
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
    let last = (times[6] - base_time()).num_seconds();
    assert_eq!(last, 6 * 3600 / 7);
    assert!(last < 3600);
    Ok(())
}

#[test]
fn test_scenario_and_caller_overrides_at_depth() -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerateRequest {
        scenario: Some("error_burst".to_string()),
        overrides: [
            ("success".to_string(), json!("overridden")),
            ("actor.name".to_string(), json!(42)),
            ("extra.trace.id".to_string(), json!("abc")),
        ]
        .into_iter()
        .collect(),
        ..seeded(10, 9)
    };
    let records = simulator().generate("all_types", &request)?;

    for record in &records {
        assert_eq!(record["level"], "ERROR");
        assert_eq!(record["actor"]["session"]["token"], "sess-pinned");
        // caller wins over scenario, whatever the declared type
        assert_eq!(record["success"], "overridden");
        assert_eq!(record["actor"]["name"], 42);
        assert_eq!(record["extra"], json!({"trace": {"id": "abc"}}));
    }
    Ok(())
}

#[test]
fn test_empty_scenario_is_valid() -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerateRequest {
        scenario: Some("empty".to_string()),
        ..seeded(2, 1)
    };
    assert_eq!(simulator().generate("all_types", &request)?.len(), 2);
    Ok(())
}

#[test]
fn test_unknown_scenario_lists_alternatives() {
    let request = GenerateRequest {
        scenario: Some("nope".to_string()),
        ..seeded(1, 1)
    };
    let err = simulator().generate("all_types", &request).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Scenario 'nope' not found. Available: error_burst, empty"
    );
}

#[test]
fn test_zero_count_rejected() {
    let err = simulator().generate("minimal", &seeded(0, 1)).unwrap_err();
    assert_eq!(err.to_string(), "Count must be at least 1");
}

#[test]
fn test_invalid_types_reported_by_path() {
    let err = simulator()
        .generate("invalid_types", &seeded(1, 1))
        .unwrap_err();
    match err {
        SimulatorError::Schema(SchemaError::ValidationError { invalid }) => {
            assert_eq!(invalid, vec!["bad", "nested.worse"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_lenient_generation_renders_placeholders() -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerateRequest {
        lenient: true,
        ..seeded(40, 1)
    };
    let records = simulator().generate("invalid_types", &request)?;
    assert_eq!(records.len(), 40);

    let mut bad = 0;
    let mut worse = 0;
    for record in &records {
        match &record["bad"] {
            Value::Null => {}
            value => {
                assert_eq!(value, "field_bad");
                bad += 1;
            }
        }
        match &record["nested"] {
            Value::Null => {}
            nested => match &nested["worse"] {
                Value::Null => {}
                value => {
                    assert_eq!(value, "field_worse");
                    worse += 1;
                }
            },
        }
    }
    assert!(bad > 0);
    assert!(worse > 0);
    Ok(())
}

#[test]
fn test_same_seed_same_batch() -> Result<(), Box<dyn std::error::Error>> {
    let sim = simulator();
    let a = sim.generate("all_types", &seeded(20, 1234))?;
    let b = sim.generate("all_types", &seeded(20, 1234))?;
    let c = sim.generate("all_types", &seeded(20, 4321))?;
    assert_eq!(a, b);
    assert_ne!(a, c);
    Ok(())
}

#[test]
fn test_batch_round_trips_through_json() -> Result<(), Box<dyn std::error::Error>> {
    let records = simulator().generate("all_types", &seeded(10, 77))?;
    let text = serde_json::to_string(&records)?;
    let parsed: Vec<Value> = serde_json::from_str(&text)?;
    assert_eq!(parsed, records);
    Ok(())
}

#[test]
fn test_schema_info_and_listing() -> Result<(), Box<dyn std::error::Error>> {
    let sim = simulator();
    let info = sim.schema_info("all_types")?;
    assert_eq!(info.log_type, "all_types");
    assert_eq!(info.schema_version, "2");
    assert_eq!(info.output_format, "json");
    assert_eq!(info.scenario_count, 2);

    let catalog = sim.list_schemas()?;
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog["basic"], vec!["all_types", "minimal", "status"]);
    Ok(())
}
