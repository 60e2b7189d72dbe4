//! Full pipeline tests: bundled template + built-in catalog + engine.

use std::path::Path;

use archgen_adapters::{
    InMemoryCatalog, LocalEmitter, MemoryEmitter,
    templates::{MicroserviceSpec, MicroserviceTemplate},
};
use archgen_core::application::GeneratorService;

fn engine_with(emitter: MemoryEmitter) -> GeneratorService {
    GeneratorService::new(Box::new(InMemoryCatalog::with_builtin()), Box::new(emitter))
}

#[test]
fn microservice_generates_a_complete_project() {
    let spec = MicroserviceSpec::new("user-service", "com.example.user", "User");
    let tree = MicroserviceTemplate::new(&spec).unwrap().into_tree();

    let emitter = MemoryEmitter::new();
    let mut engine = engine_with(emitter.clone());
    let report = engine.generate_tree(&tree);

    assert!(!report.has_failures(), "{:?}", report.failures());

    let expected = [
        "user-service/src/main/java/com/example/user/service/UserService.java",
        "user-service/src/main/java/com/example/user/service/DefaultUserService.java",
        "user-service/src/main/java/com/example/user/UserApp.java",
        "user-service/src/main/resources/application.properties",
        "user-service/build.gradle",
        "user-service/settings.gradle",
        "user-service/.gitignore",
    ];
    for path in expected {
        assert!(
            emitter.read_file(Path::new(path)).is_some(),
            "missing {path}, got {:?}",
            emitter.list_files()
        );
    }
    assert_eq!(report.emitted().len(), expected.len());
}

#[test]
fn generated_service_binds_the_default_contract() {
    let spec = MicroserviceSpec::new("user-service", "com.example.user", "User");
    let tree = MicroserviceTemplate::new(&spec).unwrap().into_tree();

    let emitter = MemoryEmitter::new();
    let mut engine = engine_with(emitter.clone());
    engine.generate_tree(&tree);

    let contract = emitter
        .read_file(Path::new(
            "user-service/src/main/java/com/example/user/service/UserService.java",
        ))
        .unwrap();
    assert!(contract.contains("package com.example.user.service;"));
    assert!(contract.contains("import archgen.sample.service.BaseService;"));
    assert!(contract.contains("public interface UserService extends BaseService<String> {"));

    let implementation = emitter
        .read_file(Path::new(
            "user-service/src/main/java/com/example/user/service/DefaultUserService.java",
        ))
        .unwrap();
    assert!(implementation.contains("@Service"));
    assert!(
        implementation.contains("public class DefaultUserService implements UserService {")
    );
    assert!(implementation.contains("public void save(String data) {"));
    assert!(implementation.contains("public String find(String id) {"));
    assert!(implementation.contains("public List<String> all() {"));
    assert!(implementation.contains("public long count() {"));
    // default method stays inherited
    assert!(!implementation.contains("isReady"));
}

#[test]
fn network_contract_resolves_both_positions() {
    let spec = MicroserviceSpec::new("net-service", "com.example.net", "Net").contract(
        "archgen.sample.net.ServiceNetworkComponent",
        vec!["java.lang.String".into(), "java.lang.Integer".into()],
    );
    let tree = MicroserviceTemplate::new(&spec).unwrap().into_tree();

    let emitter = MemoryEmitter::new();
    let mut engine = engine_with(emitter.clone());
    let report = engine.generate_tree(&tree);

    assert!(!report.has_failures(), "{:?}", report.failures());
    let contract = emitter
        .read_file(Path::new(
            "net-service/src/main/java/com/example/net/service/NetService.java",
        ))
        .unwrap();
    assert!(contract.contains(
        "public interface NetService extends ServiceNetworkComponent<String, Integer> {"
    ));

    let implementation = emitter
        .read_file(Path::new(
            "net-service/src/main/java/com/example/net/service/DefaultNetService.java",
        ))
        .unwrap();
    assert!(implementation.contains("public void send(String message) throws NetworkException {"));
    assert!(implementation.contains("public Integer receive() {"));
    assert!(implementation.contains("public void sendAll(List<? extends String> messages) {"));
}

#[test]
fn repeated_runs_write_each_file_once() {
    let spec = MicroserviceSpec::new("user-service", "com.example.user", "User");
    let tree = MicroserviceTemplate::new(&spec).unwrap().into_tree();

    let emitter = MemoryEmitter::new();
    let mut engine = engine_with(emitter.clone());
    engine.generate_tree(&tree);
    engine.generate_tree(&tree);

    for path in emitter.list_files() {
        assert_eq!(emitter.write_count(&path), 1, "{}", path.display());
    }
}

#[test]
fn local_emitter_writes_project_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let root_dir = dir.path().join("user-service");
    let spec = MicroserviceSpec::new(root_dir.to_str().unwrap(), "com.example.user", "User");
    let tree = MicroserviceTemplate::new(&spec).unwrap().into_tree();

    let emitter = LocalEmitter::new();
    let mut engine =
        GeneratorService::new(Box::new(InMemoryCatalog::with_builtin()), Box::new(emitter));
    let report = engine.generate_tree(&tree);

    assert!(!report.has_failures(), "{:?}", report.failures());
    assert!(root_dir.join("build.gradle").is_file());
    assert!(
        root_dir
            .join("src/main/java/com/example/user/service/UserService.java")
            .is_file()
    );

    emitter.clean(&root_dir).unwrap();
    assert!(!root_dir.exists());
}
