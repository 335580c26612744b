// loquat-api: Async Rust client for the Loquat device management API

pub mod client;
pub mod command;
pub mod error;
pub mod model;
pub mod payload;
pub mod response;
pub mod transport;

pub use client::{DeviceClient, Transport};
pub use command::{Command, ResponseKind};
pub use error::Error;
pub use model::{AccessPoint, NetworkInfo, ScanResult};
pub use payload::{ApiKeyRequest, ConnectRequest, Payload};
pub use response::ResponseEnvelope;
pub use transport::TransportConfig;
