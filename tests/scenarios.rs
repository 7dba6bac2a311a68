//! End-to-end resolution scenarios, including determinism and facts.

mod common;

use serde_json::Value;

use certplan::logging::{JsonlSink, TS_ZERO};
use certplan::types::ids::plan_id;
use certplan::types::{InstallMethod, Parameters};
use certplan::Certplan;

use common::{debian9, email_params, TestEmitter};

#[test]
fn debian_nine_with_email_resolves_to_the_package_plan() {
    let facts_sink = TestEmitter::default();
    let api = Certplan::new(facts_sink.clone(), JsonlSink, email_params());
    let plan = api.resolve(&debian9()).unwrap();

    assert_eq!(plan.install.as_ref().unwrap().method, InstallMethod::Package);
    assert_eq!(plan.init.command, "letsencrypt -h");

    let settings: Vec<(&str, &str)> = plan
        .config
        .as_ref()
        .unwrap()
        .settings
        .iter()
        .collect();
    assert_eq!(
        settings,
        vec![
            ("server", "https://acme-v01.api.letsencrypt.org/directory"),
            ("rsa-key-size", "4096"),
            ("email", "foo@example.com"),
        ]
    );

    // One plan fact per resource, all carrying the envelope and the plan ID.
    let pid = plan_id(&plan).to_string();
    let plan_events = facts_sink.stage_events("plan");
    assert_eq!(plan_events.len(), plan.nodes().len());
    for e in &plan_events {
        assert_eq!(e.get("schema_version"), Some(&Value::from(1)));
        assert_eq!(e.get("ts"), Some(&Value::from(TS_ZERO)));
        assert_eq!(e.get("plan_id"), Some(&Value::from(pid.clone())));
        assert!(e.get("spec_id").is_some());
    }
    assert_eq!(facts_sink.stage_events("resolve.result").len(), 1);
}

#[test]
fn explicit_vcs_override_switches_the_whole_plan() {
    let params = Parameters {
        install_method: "vcs".parse().ok(),
        ..email_params()
    };
    let api = Certplan::new(JsonlSink, JsonlSink, params);
    let plan = api.resolve(&debian9()).unwrap();

    let install = plan.install.as_ref().unwrap();
    assert_eq!(install.method, InstallMethod::Vcs);
    assert_eq!(install.path.to_str(), Some("/opt/letsencrypt"));
    assert_eq!(install.repo, "git://github.com/letsencrypt/letsencrypt.git");
    assert_eq!(install.version, "v0.4.0");
    assert_eq!(plan.init.command, "/opt/letsencrypt/letsencrypt-auto -h");
}

#[test]
fn identical_inputs_resolve_to_structurally_identical_plans() {
    let api = Certplan::new(JsonlSink, JsonlSink, email_params());
    let a = api.resolve(&debian9()).unwrap();
    let b = api.resolve(&debian9()).unwrap();

    assert_eq!(a, b);
    assert_eq!(plan_id(&a), plan_id(&b));
}

#[test]
fn different_inputs_resolve_to_different_plan_ids() {
    let api = Certplan::new(JsonlSink, JsonlSink, email_params());
    let package = api.resolve(&debian9()).unwrap();

    let params = Parameters {
        install_method: Some(InstallMethod::Vcs),
        ..email_params()
    };
    let api = Certplan::new(JsonlSink, JsonlSink, params);
    let vcs = api.resolve(&debian9()).unwrap();

    assert_ne!(package, vcs);
    assert_ne!(plan_id(&package), plan_id(&vcs));
}
