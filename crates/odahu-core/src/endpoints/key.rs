//! The closed set of platform endpoints and their path templates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use super::{EndpointError, EndpointResult};

/// API version used when none is configured.
pub const API_VERSION: &str = "v1";

/// A logical platform resource exposed at a versioned URL path.
///
/// Names are kebab-case (`model-deployment-default-route`) for parsing,
/// display and serde.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EndpointKey {
    Configuration,
    Connection,
    ModelTraining,
    ToolchainIntegration,
    ModelDeployment,
    ModelDeploymentDefaultRoute,
    ModelRoute,
    ModelPackaging,
    PackagingIntegration,
    InferenceService,
    InferenceJob,
    Feedback,
    UserInfo,
}

impl EndpointKey {
    /// Raw path template for this endpoint.
    pub const fn template(self) -> &'static str {
        match self {
            Self::Configuration => "/api/{version}/configuration",
            Self::Connection => "/api/{version}/connection",
            Self::ModelTraining => "/api/{version}/model/training",
            Self::ToolchainIntegration => "/api/{version}/toolchain/integration",
            Self::ModelDeployment => "/api/{version}/model/deployment",
            Self::ModelDeploymentDefaultRoute => {
                "/api/{version}/model/deployment/{id}/default-route"
            }
            Self::ModelRoute => "/api/{version}/model/route",
            Self::ModelPackaging => "/api/{version}/model/packaging",
            Self::PackagingIntegration => "/api/{version}/packaging/integration",
            Self::InferenceService => "/api/{version}/batch/service",
            Self::InferenceJob => "/api/{version}/batch/job",
            Self::Feedback => "/api/{version}/feedback",
            Self::UserInfo => "/api/{version}/user/info",
        }
    }

    /// Kebab-case name of this endpoint.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up an endpoint by its kebab-case name.
    pub fn from_name(name: &str) -> EndpointResult<Self> {
        name.trim()
            .parse()
            .map_err(|_| EndpointError::UnknownEndpoint {
                name: name.to_string(),
            })
    }
}
