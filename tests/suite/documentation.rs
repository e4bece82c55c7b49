//! Runs the documentation audit over the container sources.

use lockhold_audit::{AuditConfig, Auditor, DEFAULT_TYPES, Origin};

use crate::common::{AUDIT_SOURCES, CORE_SOURCES, TYPES_SOURCES};

fn auditor_over(config: AuditConfig, sources: &[(&str, &str)]) -> Auditor {
    let mut auditor = Auditor::new(config);
    for (file, text) in sources {
        auditor.add_source(file, text).unwrap();
    }
    auditor
}

fn core_auditor(config: AuditConfig) -> Auditor {
    auditor_over(config, CORE_SOURCES)
}

fn only(types: &[&str]) -> AuditConfig {
    AuditConfig {
        types: types.iter().map(|name| (*name).to_string()).collect(),
        ..AuditConfig::default()
    }
}

#[test]
fn every_container_operation_is_documented() {
    let report = core_auditor(AuditConfig::default()).run();
    assert!(report.missing_types().is_empty(), "{report}");
    assert!(report.is_clean(), "{report}");
    assert!(report.checked() > 0);
}

#[test]
fn every_container_type_is_found() {
    let auditor = core_auditor(AuditConfig::default());
    for type_name in DEFAULT_TYPES {
        assert!(
            !auditor.operations(type_name).is_empty(),
            "{type_name} exposes no operations"
        );
    }
}

#[test]
fn inherited_operations_are_included() {
    let auditor = core_auditor(AuditConfig::default());
    let ops = auditor.operations("LockedDict");
    let names: Vec<_> = ops.iter().map(|op| op.name.as_str()).collect();

    for expected in ["get", "set", "delete", "merge", "len", "iter", "set_attr"] {
        assert!(names.contains(&expected), "missing {expected} in {names:?}");
    }
    let len = ops.iter().find(|op| op.name == "len").unwrap();
    assert_eq!(len.origin, Origin::Provided("ValueAdapter".to_string()));
}

#[test]
fn abstract_hooks_are_checked_when_requested() {
    let config = AuditConfig {
        skip_abstract: false,
        ..AuditConfig::default()
    };
    let auditor = core_auditor(config);
    let names: Vec<_> = auditor
        .operations("LockedSet")
        .into_iter()
        .map(|op| op.name)
        .collect();
    assert!(names.iter().any(|name| name == "slot"));
    assert!(names.iter().any(|name| name == "data"));
}

#[test]
fn error_and_surface_types_are_documented() {
    let config = only(&["AttributeError", "ShapeMismatch", "Shape", "Surface"]);
    let report = auditor_over(config, TYPES_SOURCES).run();
    assert!(report.is_clean(), "{report}");
    assert!(report.checked() > 0);
}

#[test]
fn audit_api_is_documented() {
    let config = only(&[
        "Auditor",
        "AuditConfig",
        "AuditReport",
        "ConfigError",
        "Operation",
    ]);
    let report = auditor_over(config, AUDIT_SOURCES).run();
    assert!(report.is_clean(), "{report}");
    let auditor = auditor_over(AuditConfig::default(), AUDIT_SOURCES);
    assert!(
        auditor
            .operations("Auditor")
            .iter()
            .any(|op| op.name == "add_path" && op.is_documented())
    );
}
