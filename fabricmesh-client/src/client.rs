//! The cluster client and its REST operations.

use fabricmesh_core::{JsonReader, JsonWriter};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http::HttpTransport;
use crate::models::{
    ContainerLogs, DeployedCodePackageInfo, NodeInfo, NodeName, PagedNodeInfoList,
    RestartDeployedCodePackageDescription,
};
use crate::serialization::application::{
    container_logs, deployed_code_package_info, restart_deployed_code_package_description,
};
use crate::serialization::node::{node_info, paged_node_info_list};

/// Decodes a response body as UTF-8.
///
/// The wire contract is UTF-8 JSON; a body that is not valid UTF-8 is a
/// malformed stream, not text to be repaired.
fn body_text(body: &[u8]) -> Result<&str> {
    std::str::from_utf8(body).map_err(|err| {
        ClientError::Serialization(fabricmesh_core::FabricMeshError::MalformedStream(format!(
            "response body is not valid UTF-8: {err}"
        )))
    })
}

/// Async client for the FabricMesh cluster-management REST API.
///
/// The client is cheap to share: all state lives behind the transport, so
/// callers typically wrap it in an `Arc` and clone the handle across tasks.
pub struct FabricMeshClient {
    transport: HttpTransport,
}

impl FabricMeshClient {
    /// Creates a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        tracing::info!(
            endpoints = config.endpoints().len(),
            api_version = config.api_version(),
            "creating cluster client"
        );
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    /// Gets one page of the cluster's node list.
    ///
    /// Pass the previous page's continuation token to fetch the next page;
    /// a page without a token is the last one.
    pub async fn get_node_info_list(
        &self,
        continuation_token: Option<&str>,
    ) -> Result<PagedNodeInfoList> {
        let mut query = Vec::new();
        if let Some(token) = continuation_token {
            query.push(("ContinuationToken", token));
        }
        let body = self.transport.get(&["Nodes"], &query).await?;
        let text = body_text(&body)?;
        let mut reader = JsonReader::new(text)?;
        Ok(paged_node_info_list::deserialize(&mut reader)?)
    }

    /// Gets the info of a single node by name.
    pub async fn get_node_info(&self, node_name: &NodeName) -> Result<NodeInfo> {
        let body = self
            .transport
            .get(&["Nodes", node_name.as_str()], &[])
            .await?;
        let text = body_text(&body)?;
        let mut reader = JsonReader::new(text)?;
        Ok(node_info::deserialize(&mut reader)?)
    }

    /// Gets the code packages deployed on a node for an application,
    /// optionally filtered by service manifest and code package name.
    pub async fn get_deployed_code_package_info_list(
        &self,
        node_name: &NodeName,
        application_id: &str,
        service_manifest_name: Option<&str>,
        code_package_name: Option<&str>,
    ) -> Result<Vec<DeployedCodePackageInfo>> {
        let mut query = Vec::new();
        if let Some(manifest) = service_manifest_name {
            query.push(("ServiceManifestName", manifest));
        }
        if let Some(package) = code_package_name {
            query.push(("CodePackageName", package));
        }
        let segments = [
            "Nodes",
            node_name.as_str(),
            "$",
            "GetApplications",
            application_id,
            "$",
            "GetCodePackages",
        ];
        let body = self.transport.get(&segments, &query).await?;
        let text = body_text(&body)?;
        let mut reader = JsonReader::new(text)?;
        let items = reader.read_list(deployed_code_package_info::deserialize)?;
        Ok(items.unwrap_or_default())
    }

    /// Restarts a code package deployed on a node.
    ///
    /// The description's instance id must match the running incarnation;
    /// the cluster rejects the restart otherwise.
    pub async fn restart_deployed_code_package(
        &self,
        node_name: &NodeName,
        application_id: &str,
        description: &RestartDeployedCodePackageDescription,
    ) -> Result<()> {
        let mut writer = JsonWriter::new();
        restart_deployed_code_package_description::serialize(&mut writer, description)?;
        let segments = [
            "Nodes",
            node_name.as_str(),
            "$",
            "GetApplications",
            application_id,
            "$",
            "GetCodePackages",
            "$",
            "Restart",
        ];
        self.transport
            .post(&segments, &[], Some(writer.into_string()))
            .await?;
        Ok(())
    }

    /// Gets the container logs of a code package deployed on a node.
    ///
    /// `tail` limits the result to the last N lines, or all lines when
    /// `"All"` (the service default) is passed.
    pub async fn get_container_logs_deployed_on_node(
        &self,
        node_name: &NodeName,
        application_id: &str,
        service_manifest_name: &str,
        code_package_name: &str,
        tail: Option<&str>,
    ) -> Result<ContainerLogs> {
        let mut query = vec![
            ("ServiceManifestName", service_manifest_name),
            ("CodePackageName", code_package_name),
        ];
        if let Some(tail) = tail {
            query.push(("Tail", tail));
        }
        let segments = [
            "Nodes",
            node_name.as_str(),
            "$",
            "GetApplications",
            application_id,
            "$",
            "GetCodePackages",
            "$",
            "ContainerLogs",
        ];
        let body = self.transport.get(&segments, &query).await?;
        let text = body_text(&body)?;
        let mut reader = JsonReader::new(text)?;
        Ok(container_logs::deserialize(&mut reader)?)
    }
}
