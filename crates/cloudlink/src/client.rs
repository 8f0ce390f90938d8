//! Cloudlink API client
//!
//! [`CloudlinkClient`] validates its configuration up front and exposes one
//! method per Cloudlink endpoint. Every method issues a single POST to
//! `/{cloud}/{method}` and yields the response envelope's `data` payload
//! verbatim; the payload shape is provider-specific and left untyped.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::{ClientConfig, RawConfig};
use crate::error::Result;
use crate::http;

/// Client for the Cloudlink service
///
/// # Example
///
/// ```ignore
/// use cloudlink::{CloudlinkClient, RawConfig, RawServerConfig};
/// use serde_json::json;
///
/// let client = CloudlinkClient::new(RawConfig {
///     cloud: Some("aws".to_string()),
///     server: Some(RawServerConfig {
///         host: Some("api.example.com".to_string()),
///         ..Default::default()
///     }),
///     auth: Some(json!({"token": "t"})),
/// })?;
///
/// let regions = client.list_regions().await?;
/// ```
#[derive(Debug)]
pub struct CloudlinkClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl CloudlinkClient {
    /// Validate the configuration and create a client
    pub fn new(raw: RawConfig) -> Result<Self> {
        let config = ClientConfig::validate(raw)?;
        Ok(Self {
            config,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client from the first config file found on disk
    ///
    /// See `cloudlink_config::find_config_file` for the search order.
    pub fn from_config_file() -> Result<Self> {
        let path = cloudlink_config::find_config_file()?;
        let raw = cloudlink_config::load_config(&path)?;
        Self::new(raw)
    }

    /// The validated configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one named remote operation.
    ///
    /// Private on purpose: the method-name table stays closed, which is what
    /// makes the unescaped path interpolation in the dispatcher safe.
    async fn invoke(&self, method: &str, params: Map<String, Value>) -> Result<Value> {
        http::dispatch(&self.http, &self.config, method, params).await
    }

    // -- Instances --

    /// Returns a list of instances (virtual machines)
    pub async fn list_instances(&self) -> Result<Value> {
        self.invoke("listInstances", Map::new()).await
    }

    /// Provision a new instance
    pub async fn add_instance(&self, request: &AddInstanceRequest) -> Result<Value> {
        self.invoke("addInstance", to_params(request)?).await
    }

    /// Terminate an instance
    pub async fn delete_instance(&self, instance_id: &str) -> Result<Value> {
        self.invoke("deleteInstance", id_params("instanceId", instance_id))
            .await
    }

    pub async fn get_instance(&self, instance_id: &str) -> Result<Value> {
        self.invoke("getInstance", id_params("instanceId", instance_id))
            .await
    }

    // -- Regions / sizes / distributions --

    pub async fn list_regions(&self) -> Result<Value> {
        self.invoke("listRegions", Map::new()).await
    }

    pub async fn list_sizes(&self) -> Result<Value> {
        self.invoke("listSizes", Map::new()).await
    }

    /// Returns the available OS distributions, optionally filtered
    pub async fn list_distributions(&self, filters: Map<String, Value>) -> Result<Value> {
        let mut params = Map::new();
        params.insert("filters".to_string(), Value::Object(filters));
        self.invoke("listDistributions", params).await
    }

    // -- Volumes --

    pub async fn list_volumes(&self) -> Result<Value> {
        self.invoke("listVolumes", Map::new()).await
    }

    pub async fn add_volume(&self, request: &AddVolumeRequest) -> Result<Value> {
        self.invoke("addVolume", to_params(request)?).await
    }

    pub async fn delete_volume(&self, volume_id: &str) -> Result<Value> {
        self.invoke("deleteVolume", id_params("volumeId", volume_id))
            .await
    }

    // -- SSH keys --

    pub async fn list_keys(&self) -> Result<Value> {
        self.invoke("listKeys", Map::new()).await
    }

    /// Register an SSH public key
    pub async fn add_key(&self, request: &AddKeyRequest) -> Result<Value> {
        self.invoke("addKey", to_params(request)?).await
    }

    pub async fn delete_key(&self, key_id: &str) -> Result<Value> {
        self.invoke("deleteKey", id_params("keyId", key_id)).await
    }

    pub async fn get_key(&self, key_id: &str) -> Result<Value> {
        self.invoke("getKey", id_params("keyId", key_id)).await
    }

    // -- VPCs --

    /// Returns the VPCs matching the query; an empty query lists everything
    pub async fn list_vpcs(&self, query: ResourceQuery) -> Result<Value> {
        self.invoke("listVpcs", to_params(&query)?).await
    }

    pub async fn add_vpc(&self, request: &AddVpcRequest) -> Result<Value> {
        self.invoke("addVpc", to_params(request)?).await
    }

    pub async fn delete_vpc(&self, vpc_id: &str) -> Result<Value> {
        self.invoke("deleteVpc", id_params("vpcId", vpc_id)).await
    }

    // -- Subnets --

    pub async fn list_sub_nets(&self) -> Result<Value> {
        self.invoke("listSubNets", Map::new()).await
    }

    pub async fn add_sub_net(&self, request: &AddSubNetRequest) -> Result<Value> {
        self.invoke("addSubNet", to_params(request)?).await
    }

    pub async fn delete_sub_net(&self, sub_net_id: &str) -> Result<Value> {
        self.invoke("deleteSubNet", id_params("subNetId", sub_net_id))
            .await
    }

    // -- Security groups --

    pub async fn list_security_groups(&self, query: ResourceQuery) -> Result<Value> {
        self.invoke("listSecurityGroups", to_params(&query)?).await
    }

    pub async fn add_security_group(&self, request: &AddSecurityGroupRequest) -> Result<Value> {
        self.invoke("addSecurityGroup", to_params(request)?).await
    }

    pub async fn delete_security_group(&self, group_id: &str) -> Result<Value> {
        self.invoke("deleteSecurityGroup", id_params("groupId", group_id))
            .await
    }

    // -- Internet gateways --

    pub async fn list_internet_gateways(&self, query: ResourceQuery) -> Result<Value> {
        self.invoke("listInternetGateways", to_params(&query)?)
            .await
    }

    /// Create an internet gateway attached to the given VPC
    pub async fn add_internet_gateway(&self, vpc_id: &str) -> Result<Value> {
        self.invoke("addInternetGateway", id_params("vpcId", vpc_id))
            .await
    }

    pub async fn delete_internet_gateway(&self, gateway_id: &str) -> Result<Value> {
        self.invoke("deleteInternetGateway", id_params("gatewayId", gateway_id))
            .await
    }

    // -- Route tables --

    pub async fn list_route_tables(&self, query: ResourceQuery) -> Result<Value> {
        self.invoke("listRouteTables", to_params(&query)?).await
    }

    pub async fn add_route_table(&self, vpc_id: &str) -> Result<Value> {
        self.invoke("addRouteTable", id_params("vpcId", vpc_id))
            .await
    }

    pub async fn delete_route_table(&self, route_table_id: &str) -> Result<Value> {
        self.invoke("deleteRouteTable", id_params("routeTableId", route_table_id))
            .await
    }
}

/// Serialize a request struct into the outgoing parameter map
fn to_params<T: Serialize>(request: &T) -> Result<Map<String, Value>> {
    let value = serde_json::to_value(request)?;
    // Request types are structs; they always serialize to objects
    Ok(value.as_object().cloned().unwrap_or_default())
}

fn id_params(key: &str, id: &str) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert(key.to_string(), Value::String(id.to_string()));
    params
}

// ============ Request Types ============

/// Filter arguments shared by the filtered list operations
///
/// Both fields default to empty and are always sent on the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceQuery {
    /// Provider-specific filter map
    pub filters: Map<String, Value>,
    /// Restrict the listing to these resource ids
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddInstanceRequest {
    pub region: String,
    pub image: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_keys: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddVolumeRequest {
    /// Volume size in GB
    pub size: u32,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddKeyRequest {
    pub name: String,
    pub public_key: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddVpcRequest {
    pub cidr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSubNetRequest {
    pub vpc_id: String,
    pub cidr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSecurityGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_query_default_is_empty() {
        let params = to_params(&ResourceQuery::default()).unwrap();
        assert_eq!(params.get("filters"), Some(&json!({})));
        assert_eq!(params.get("ids"), Some(&json!([])));
    }

    #[test]
    fn test_add_instance_request_wire_names() {
        let request = AddInstanceRequest {
            region: "us-east-1".to_string(),
            image: "ubuntu-24-04".to_string(),
            size: "t3.micro".to_string(),
            name: None,
            ssh_keys: Some(vec!["k1".to_string()]),
        };
        let params = to_params(&request).unwrap();
        assert_eq!(params.get("region"), Some(&json!("us-east-1")));
        assert_eq!(params.get("sshKeys"), Some(&json!(["k1"])));
        // Omitted optionals stay off the wire entirely
        assert!(!params.contains_key("name"));
    }

    #[test]
    fn test_add_key_request_wire_names() {
        let request = AddKeyRequest {
            name: "deploy".to_string(),
            public_key: "ssh-ed25519 AAAA".to_string(),
        };
        let params = to_params(&request).unwrap();
        assert_eq!(params.get("publicKey"), Some(&json!("ssh-ed25519 AAAA")));
    }

    #[test]
    fn test_id_params() {
        let params = id_params("vpcId", "vpc-123");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("vpcId"), Some(&json!("vpc-123")));
    }
}
