//! `msp` package.

use prost::Message;

/// An identity as carried in signature headers and endorsements.
#[derive(Clone, PartialEq, Message)]
pub struct SerializedIdentity {
    #[prost(string, tag = "1")]
    pub mspid: String,
    /// PEM-encoded X.509 certificate for the default MSP implementation
    #[prost(bytes = "vec", tag = "2")]
    pub id_bytes: Vec<u8>,
}
