//! Cloudlink API client
//!
//! This crate talks to a Cloudlink service, a single JSON-over-HTTP backend
//! that abstracts multiple cloud providers (AWS, DigitalOcean, GCE) behind
//! one method catalog.
//!
//! Every operation is a POST to `/{cloud}/{method}` whose body carries the
//! method parameters plus the configured `auth` credentials. The service
//! answers with a `{status, data, error?}` envelope; `status: true` resolves
//! to `data`, anything else becomes a typed error.
//!
//! # Configuration
//!
//! A client needs a `cloud` (one of the supported providers), a `server`
//! endpoint and an opaque `auth` object. Configuration can be supplied
//! directly or discovered on disk via the `cloudlink-config` crate:
//!
//! ```ignore
//! use cloudlink::CloudlinkClient;
//!
//! let client = CloudlinkClient::from_config_file()?;
//! let instances = client.list_instances().await?;
//! ```
//!
//! # Errors
//!
//! [`CloudlinkError`] separates the failure kinds a caller may want to
//! branch on: invalid configuration, an explicit service-side failure
//! (`ApiError`), a transport-level failure (`Transport`), and a response
//! body that was not valid JSON (`MalformedResponse`).

pub mod client;
pub mod config;
pub mod error;
mod http;

pub use client::{
    AddInstanceRequest, AddKeyRequest, AddSecurityGroupRequest, AddSubNetRequest, AddVolumeRequest,
    AddVpcRequest, CloudlinkClient, ResourceQuery,
};
pub use config::{ClientConfig, CloudProvider, RawConfig, RawServerConfig, ServerConfig};
pub use error::{CloudlinkError, Result};
