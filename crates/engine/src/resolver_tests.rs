// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn name(s: &str) -> ClusterName {
    ClusterName::new(s).unwrap()
}

#[test]
fn resolve_creates_root_once() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("nested").join("clusters");

    let (ws, existed) = resolve(&base, &name("demo")).unwrap();
    assert!(!existed);
    assert!(ws.root().is_dir());
    assert_eq!(ws.root(), base.join("demo"));

    let (again, existed) = resolve(&base, &name("demo")).unwrap();
    assert!(existed);
    assert_eq!(again.root(), ws.root());
}

#[test]
fn resolve_fails_when_base_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("file");
    std::fs::write(&base, "").unwrap();

    let err = resolve(&base, &name("demo")).unwrap_err();
    assert!(matches!(err, EngineError::Io { .. }));
}

#[test]
fn config_present_checks_folder() {
    let dir = tempfile::tempdir().unwrap();
    let (ws, _) = resolve(dir.path(), &name("demo")).unwrap();
    assert!(!config_present(&ws, AuxRepo::Deploy));

    std::fs::create_dir(ws.deploy_dir()).unwrap();
    assert!(config_present(&ws, AuxRepo::Deploy));
    assert!(!config_present(&ws, AuxRepo::Helm));
}

#[test]
fn fresh_workspace_gets_byte_identical_templates() {
    let dir = tempfile::tempdir().unwrap();
    let (ws, _) = resolve(dir.path(), &name("demo")).unwrap();

    let written = write_default_templates(&ws).unwrap();

    assert_eq!(written.len(), DEFAULT_TEMPLATES.len());
    for template in DEFAULT_TEMPLATES {
        let on_disk = std::fs::read(ws.path(template.relative_path)).unwrap();
        assert_eq!(on_disk, template.contents.as_bytes(), "{}", template.relative_path);
    }
}

#[test]
fn existing_templates_are_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let (ws, _) = resolve(dir.path(), &name("demo")).unwrap();
    std::fs::create_dir_all(ws.path("cluster")).unwrap();
    std::fs::write(ws.cluster_config(), "edited").unwrap();

    let written = write_default_templates(&ws).unwrap();

    assert_eq!(written.len(), DEFAULT_TEMPLATES.len() - 1);
    assert!(!written.contains(&ws.cluster_config()));
    assert_eq!(std::fs::read_to_string(ws.cluster_config()).unwrap(), "edited");
    assert!(ws.git_service_template().is_file());
    assert!(ws.registry_configmap().is_file());
}
