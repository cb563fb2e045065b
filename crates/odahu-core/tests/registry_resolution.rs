//! Integration tests for endpoint resolution through the public API.

use std::sync::Arc;

use odahu_core::{EndpointError, EndpointKey, EndpointRegistry, PathParams, SdkSettings};
use strum::IntoEnumIterator;

fn params_for(key: EndpointKey) -> PathParams {
    match key {
        EndpointKey::ModelDeploymentDefaultRoute => PathParams::new().with("id", "42"),
        _ => PathParams::new(),
    }
}

/// Every endpoint resolves to a path carrying the version and no placeholders.
#[test]
fn every_endpoint_resolves_without_placeholders() {
    let registry = EndpointRegistry::new("v1").expect("registry");

    for key in EndpointKey::iter() {
        let path = registry.resolve(key, &params_for(key)).expect("resolve");
        assert!(path.as_str().contains("/v1/"), "{key}: {path}");
        assert!(
            !path.as_str().contains('{') && !path.as_str().contains('}'),
            "{key} left a placeholder in {path}"
        );
    }
}

/// The full table, as exposed to HTTP consumers.
#[test]
fn v1_endpoint_table() {
    let registry = EndpointRegistry::default();
    let expected = [
        (EndpointKey::Configuration, "/api/v1/configuration"),
        (EndpointKey::Connection, "/api/v1/connection"),
        (EndpointKey::ModelTraining, "/api/v1/model/training"),
        (EndpointKey::ToolchainIntegration, "/api/v1/toolchain/integration"),
        (EndpointKey::ModelDeployment, "/api/v1/model/deployment"),
        (
            EndpointKey::ModelDeploymentDefaultRoute,
            "/api/v1/model/deployment/42/default-route",
        ),
        (EndpointKey::ModelRoute, "/api/v1/model/route"),
        (EndpointKey::ModelPackaging, "/api/v1/model/packaging"),
        (EndpointKey::PackagingIntegration, "/api/v1/packaging/integration"),
        (EndpointKey::InferenceService, "/api/v1/batch/service"),
        (EndpointKey::InferenceJob, "/api/v1/batch/job"),
        (EndpointKey::Feedback, "/api/v1/feedback"),
        (EndpointKey::UserInfo, "/api/v1/user/info"),
    ];

    for (key, path) in expected {
        assert_eq!(registry.resolve(key, &params_for(key)).unwrap(), path);
    }
}

/// Omitting the deployment id fails before any output is produced.
#[test]
fn default_route_requires_id() {
    let registry = EndpointRegistry::default();
    let result = registry.resolve(EndpointKey::ModelDeploymentDefaultRoute, &PathParams::new());

    assert!(matches!(
        result,
        Err(EndpointError::MissingParameter { endpoint: EndpointKey::ModelDeploymentDefaultRoute, ref name }) if name == "id"
    ));
}

/// Unknown names are rejected when looked up dynamically.
#[test]
fn unknown_endpoint_name_is_rejected() {
    let registry = EndpointRegistry::default();
    let err = registry
        .resolve_named("model-serving", &PathParams::new())
        .unwrap_err();
    assert!(matches!(err, EndpointError::UnknownEndpoint { .. }));
}

/// Resolution is a pure function of its inputs.
#[test]
fn resolution_is_deterministic() {
    let registry = EndpointRegistry::default();
    let params = PathParams::new().with("id", "wine-classifier");

    let first = registry.resolve(EndpointKey::ModelDeploymentDefaultRoute, &params);
    let second = registry.resolve(EndpointKey::ModelDeploymentDefaultRoute, &params);

    assert_eq!(first, second);
}

/// A shared registry resolves identically from many threads.
#[test]
fn concurrent_resolution_matches_sequential() {
    let registry = Arc::new(EndpointRegistry::default());
    let expected: Vec<_> = EndpointKey::iter()
        .map(|key| registry.resolve(key, &params_for(key)).unwrap())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    EndpointKey::iter()
                        .map(|key| registry.resolve(key, &params_for(key)).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

/// Settings flow through to the registry they build.
#[test]
fn settings_build_strict_registry() {
    let settings = SdkSettings {
        api_version: Some("v1alpha1".to_string()),
        strict_params: Some(true),
        ..SdkSettings::default()
    };
    let registry = settings.registry().unwrap();

    assert_eq!(
        registry.path(EndpointKey::Feedback).unwrap(),
        "/api/v1alpha1/feedback"
    );
    assert!(matches!(
        registry.resolve(EndpointKey::Feedback, &PathParams::new().with("id", "1")),
        Err(EndpointError::UnusedParameter { .. })
    ));
}
