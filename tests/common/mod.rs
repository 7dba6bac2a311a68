#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::Value;

use certplan::logging::FactsEmitter;
use certplan::types::{Facts, Parameters};

/// Facts emitter that collects every event for assertions.
#[derive(Default, Clone)]
pub struct TestEmitter {
    pub events: Arc<Mutex<Vec<(String, String, String, Value)>>>,
}

impl FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events.lock().unwrap().push((
            subsystem.to_string(),
            event.to_string(),
            decision.to_string(),
            fields,
        ));
    }
}

impl TestEmitter {
    pub fn fields(&self) -> Vec<Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, _, f)| f.clone())
            .collect()
    }

    pub fn stage_events(&self, stage: &str) -> Vec<Value> {
        self.fields()
            .into_iter()
            .filter(|f| f.get("stage") == Some(&Value::from(stage)))
            .collect()
    }
}

pub fn facts(family: &str, distribution: &str, release: &str) -> Facts {
    Facts {
        family: Some(family.to_string()),
        distribution: Some(distribution.to_string()),
        release: Some(release.to_string()),
        shell_path: Some("/usr/bin".into()),
    }
}

pub fn debian9() -> Facts {
    facts("Debian", "Debian", "9.0")
}

pub fn el7() -> Facts {
    facts("RedHat", "RedHat", "7.2")
}

/// Parameters with a contact address, the baseline for most cases.
pub fn email_params() -> Parameters {
    Parameters {
        email: Some("foo@example.com".to_string()),
        ..Parameters::default()
    }
}
