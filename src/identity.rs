//! Serialized identities and the X.509 certificates they carry.
//!
//! Fabric's default MSP serializes an identity as the MSP id plus a PEM-encoded certificate.
//! The certificate is parsed for display only: no signature, chain or validity checks are made.

use num_bigint::BigUint;
use serde::Serialize;
use time::OffsetDateTime;
use x509_parser::certificate::X509Certificate;
use x509_parser::extensions::ParsedExtension;
use x509_parser::pem::parse_x509_pem;
use x509_parser::x509::{AttributeTypeAndValue, X509Name};

use crate::decode::Decode;
use crate::error::{FabricError, Result};
use crate::proto::msp as pb;
use crate::serde_utils::{decimal, hex_bytes};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub msp_id: String,
    /// `None` when the identity carries no id bytes at all
    pub certificate: Option<CertificateInfo>,
}

impl Decode for Identity {
    type Proto = pb::SerializedIdentity;
    const LAYER: &'static str = "SerializedIdentity";

    fn from_proto(proto: pb::SerializedIdentity) -> Result<Self> {
        let certificate = if proto.id_bytes.is_empty() {
            None
        } else {
            Some(CertificateInfo::from_pem(&proto.id_bytes)?)
        };
        tracing::debug!(msp_id = %proto.mspid, has_certificate = certificate.is_some(), "identity");
        Ok(Identity {
            msp_id: proto.mspid,
            certificate,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Dotted-decimal object identifier
    pub oid: String,
    pub critical: bool,
    #[serde(serialize_with = "hex_bytes")]
    pub value: Vec<u8>,
}

/// Flattened view of an X.509 certificate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateInfo {
    #[serde(serialize_with = "hex_bytes")]
    pub signature: Vec<u8>,
    pub signature_algorithm: String,
    pub public_key_algorithm: String,
    /// Raw subjectPublicKey bits (an uncompressed point for EC keys)
    #[serde(serialize_with = "hex_bytes")]
    pub public_key: Vec<u8>,
    /// 1-based, a v3 certificate reports 3
    pub version: u32,
    #[serde(serialize_with = "decimal")]
    pub serial_number: BigUint,
    /// RFC 2253 form, most specific part first (`CN=peer0,O=org1,C=US`)
    pub issuer: String,
    pub subject: String,
    #[serde(with = "time::serde::rfc3339")]
    pub not_before: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub not_after: OffsetDateTime,
    /// Bit 0 is digitalSignature, bit 8 is decipherOnly
    pub key_usage: u16,
    pub extensions: Vec<Extension>,
    pub basic_constraints_valid: bool,
    pub is_ca: bool,
    pub max_path_len: Option<u32>,
    #[serde(serialize_with = "hex_bytes")]
    pub subject_key_id: Vec<u8>,
    #[serde(serialize_with = "hex_bytes")]
    pub authority_key_id: Vec<u8>,
}

impl CertificateInfo {
    /// Parse the first PEM block found in `bytes` as an X.509 certificate.
    ///
    /// Text before the block is skipped. Missing PEM armour and an unparsable certificate are
    /// both reported as [`FabricError::MalformedCredential`].
    pub fn from_pem(bytes: &[u8]) -> Result<Self> {
        let (_, pem) = parse_x509_pem(bytes)
            .map_err(|e| FabricError::MalformedCredential(format!("no PEM block found: {}", e)))?;
        let cert = pem
            .parse_x509()
            .map_err(|e| FabricError::MalformedCredential(format!("invalid certificate: {}", e)))?;
        Self::from_x509(&cert)
    }

    fn from_x509(cert: &X509Certificate<'_>) -> Result<Self> {
        let key_usage = cert
            .key_usage()
            .map_err(|e| FabricError::MalformedCredential(format!("key usage: {}", e)))?
            .map(|ext| ext.value.flags)
            .unwrap_or(0);
        let basic_constraints = cert
            .basic_constraints()
            .map_err(|e| FabricError::MalformedCredential(format!("basic constraints: {}", e)))?
            .map(|ext| ext.value);

        let mut extensions = Vec::with_capacity(cert.extensions().len());
        let mut subject_key_id = Vec::new();
        let mut authority_key_id = Vec::new();
        for ext in cert.extensions() {
            match ext.parsed_extension() {
                ParsedExtension::SubjectKeyIdentifier(id) => subject_key_id = id.0.to_vec(),
                ParsedExtension::AuthorityKeyIdentifier(aki) => {
                    if let Some(id) = &aki.key_identifier {
                        authority_key_id = id.0.to_vec();
                    }
                }
                _ => {}
            }
            extensions.push(Extension {
                oid: ext.oid.to_id_string(),
                critical: ext.critical,
                value: ext.value.to_vec(),
            });
        }

        let signature_oid = cert.signature_algorithm.algorithm.to_id_string();
        let public_key_oid = cert.public_key().algorithm.algorithm.to_id_string();
        let info = CertificateInfo {
            signature: cert.signature_value.data.to_vec(),
            signature_algorithm: signature_algorithm_name(&signature_oid),
            public_key_algorithm: public_key_algorithm_name(&public_key_oid),
            public_key: cert.public_key().subject_public_key.data.to_vec(),
            version: cert.version().0 + 1,
            serial_number: BigUint::from_bytes_be(cert.raw_serial()),
            issuer: distinguished_name(cert.issuer()),
            subject: distinguished_name(cert.subject()),
            not_before: cert.validity().not_before.to_datetime(),
            not_after: cert.validity().not_after.to_datetime(),
            key_usage,
            extensions,
            basic_constraints_valid: basic_constraints.is_some(),
            is_ca: basic_constraints.is_some_and(|bc| bc.ca),
            max_path_len: basic_constraints.and_then(|bc| bc.path_len_constraint),
            subject_key_id,
            authority_key_id,
        };
        tracing::debug!(subject = %info.subject, issuer = %info.issuer, "certificate");
        Ok(info)
    }
}

/// Render a name the way Go's `pkix.Name.String` does: relative names in reverse encoding
/// order joined by `,`, multi-valued ones joined by `+`.
fn distinguished_name(name: &X509Name<'_>) -> String {
    let rdns: Vec<_> = name.iter_rdn().collect();
    rdns.iter()
        .rev()
        .map(|rdn| {
            rdn.iter()
                .map(attribute_to_string)
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn attribute_to_string(attr: &AttributeTypeAndValue<'_>) -> String {
    let oid = attr.attr_type().to_id_string();
    let short_name = match oid.as_str() {
        "2.5.4.3" => "CN",
        "2.5.4.5" => "SERIALNUMBER",
        "2.5.4.6" => "C",
        "2.5.4.7" => "L",
        "2.5.4.8" => "ST",
        "2.5.4.9" => "STREET",
        "2.5.4.10" => "O",
        "2.5.4.11" => "OU",
        "2.5.4.17" => "POSTALCODE",
        _ => oid.as_str(),
    };
    match attr.as_str() {
        Ok(value) => format!("{}={}", short_name, escape_dn_value(value)),
        // non-string values are written as hex
        Err(_) => format!("{}=#{}", short_name, hex::encode(attr.attr_value().data.as_ref())),
    }
}

/// RFC 4514 escaping of an attribute value.
fn escape_dn_value(value: &str) -> String {
    let last = value.chars().count().saturating_sub(1);
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        let escaped = match c {
            ',' | '+' | '"' | '\\' | '<' | '>' | ';' => true,
            ' ' => i == 0 || i == last,
            '#' => i == 0,
            _ => false,
        };
        if escaped {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn signature_algorithm_name(oid: &str) -> String {
    let name = match oid {
        "1.2.840.113549.1.1.5" => "SHA1-RSA",
        "1.2.840.113549.1.1.11" => "SHA256-RSA",
        "1.2.840.113549.1.1.12" => "SHA384-RSA",
        "1.2.840.113549.1.1.13" => "SHA512-RSA",
        "1.2.840.113549.1.1.10" => "RSAPSS",
        "1.2.840.10045.4.1" => "ECDSA-SHA1",
        "1.2.840.10045.4.3.2" => "ECDSA-SHA256",
        "1.2.840.10045.4.3.3" => "ECDSA-SHA384",
        "1.2.840.10045.4.3.4" => "ECDSA-SHA512",
        "1.3.101.112" => "Ed25519",
        _ => return oid.to_string(),
    };
    name.to_string()
}

fn public_key_algorithm_name(oid: &str) -> String {
    let name = match oid {
        "1.2.840.113549.1.1.1" => "RSA",
        "1.2.840.10040.4.1" => "DSA",
        "1.2.840.10045.2.1" => "ECDSA",
        "1.3.101.112" => "Ed25519",
        _ => return oid.to_string(),
    };
    name.to_string()
}
