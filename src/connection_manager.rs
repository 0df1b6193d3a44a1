use anyhow::{anyhow, Result};
use opcua::client::prelude::*;
use opcua::crypto::SecurityPolicy;
use opcua::types::{EndpointDescription, MessageSecurityMode, UAString};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ToolConfig;

/// Opens sessions against a server for comparing its address space with the table
pub struct ConnectionManager;

/// Resolved client settings for one connection
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub application_name: String,
    pub application_uri: String,
    pub security_policy: SecurityPolicy,
    pub security_mode: MessageSecurityMode,
    pub session_timeout: u32,
    pub auto_trust: bool,
    pub client_cert_path: Option<String>,
    pub client_key_path: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            application_name: "OPC UA NodeId Table".to_string(),
            application_uri: "urn:opcua-node-ids".to_string(),
            security_policy: SecurityPolicy::None,
            security_mode: MessageSecurityMode::None,
            session_timeout: 60000,
            auto_trust: true,
            client_cert_path: None,
            client_key_path: None,
        }
    }
}

impl ConnectionConfig {
    /// Build connection settings from the tool configuration.
    /// When a client certificate is configured, its application URI wins.
    pub fn from_tool_config(config: &ToolConfig) -> Result<Self> {
        let mut connection = Self {
            application_name: config.application_name.clone(),
            application_uri: config.application_uri.clone(),
            security_policy: config.policy()?,
            security_mode: config.mode()?,
            session_timeout: config.session_timeout,
            auto_trust: config.auto_trust,
            client_cert_path: config.client_cert_path.clone(),
            client_key_path: config.client_key_path.clone(),
        };

        if let Some(cert_path) = &connection.client_cert_path {
            match ConnectionManager::extract_application_uri_from_certificate(cert_path) {
                Ok(extracted_uri) => {
                    log::info!("Using application URI from certificate: {extracted_uri}");
                    connection.application_uri = extracted_uri;
                }
                Err(e) => {
                    log::warn!(
                        "Failed to extract application URI from certificate, using {}: {e}",
                        connection.application_uri
                    );
                }
            }
        }

        Ok(connection)
    }
}

impl ConnectionManager {
    /// Discover endpoints from an OPC UA server
    pub async fn discover_endpoints(
        server_url: &str,
        config: &ConnectionConfig,
    ) -> Result<Vec<EndpointDescription>> {
        let url = server_url.to_string();
        let config = config.clone();

        tokio::task::spawn_blocking(move || -> Result<Vec<EndpointDescription>> {
            let client = Self::build_discovery_client(&config)?;

            match client.get_server_endpoints_from_url(&url) {
                Ok(endpoints) => {
                    log::info!("Discovered {} endpoints from {url}", endpoints.len());
                    for (i, endpoint) in endpoints.iter().enumerate() {
                        log::debug!(
                            "  Endpoint {}: {} (Security: {} - {:?})",
                            i + 1,
                            endpoint.endpoint_url.as_ref(),
                            Self::policy_uri_to_name(endpoint.security_policy_uri.as_ref()),
                            endpoint.security_mode
                        );
                    }
                    Ok(endpoints)
                }
                Err(e) => {
                    log::error!("Failed to discover endpoints from {url}: {e}");
                    Err(anyhow!("Failed to discover endpoints: {}", e))
                }
            }
        })
        .await?
    }

    /// Connect to an OPC UA server by URL (discovers endpoints first)
    pub async fn connect_to_server(
        server_url: &str,
        config: &ConnectionConfig,
    ) -> Result<(Client, Arc<RwLock<Session>>)> {
        log::info!("Connecting to {server_url}");

        let endpoints = Self::discover_endpoints(server_url, config).await?;
        if endpoints.is_empty() {
            return Err(anyhow!("Server returned no endpoints"));
        }

        let endpoint = Self::find_matching_endpoint(
            &endpoints,
            config.security_policy,
            config.security_mode,
            server_url,
        )?;

        let config = config.clone();
        tokio::task::spawn_blocking(move || -> Result<(Client, Arc<RwLock<Session>>)> {
            let mut client = Self::build_client(&config)?;

            log::info!(
                "Selected endpoint: {} (Security: {} - {:?})",
                endpoint.endpoint_url.as_ref(),
                Self::policy_uri_to_name(endpoint.security_policy_uri.as_ref()),
                endpoint.security_mode
            );

            // Certificate problems surface as panics inside the opcua crate
            match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                client.connect_to_endpoint(endpoint, IdentityToken::Anonymous)
            })) {
                Ok(Ok(session)) => {
                    log::info!("Session established");
                    Ok((client, session))
                }
                Ok(Err(e)) => {
                    log::error!("Failed to connect to endpoint: {e}");
                    Err(anyhow!("Endpoint connection failed: {}", e))
                }
                Err(panic_info) => {
                    let panic_msg = Self::panic_message(panic_info.as_ref());
                    log::error!("Connection attempt panicked: {panic_msg}");
                    Err(anyhow!("Connection failed: {}", panic_msg))
                }
            }
        })
        .await?
    }

    /// Disconnect a session without blocking the runtime
    pub async fn disconnect(session: Arc<RwLock<Session>>) {
        let result = tokio::task::spawn_blocking(move || {
            session.write().disconnect();
        })
        .await;

        if let Err(e) = result {
            log::warn!("Error during session disconnect: {e}");
        }
    }

    fn build_client(config: &ConnectionConfig) -> Result<Client> {
        let mut client_builder = ClientBuilder::new()
            .application_name(&config.application_name)
            .application_uri(&config.application_uri)
            .session_retry_limit(1)
            .session_retry_interval(1000)
            .session_timeout(config.session_timeout)
            .pki_dir("pki")
            .verify_server_certs(false);

        if config.security_mode != MessageSecurityMode::None {
            if config.auto_trust {
                client_builder = client_builder.trust_server_certs(true);
            }

            if let (Some(cert_path), Some(key_path)) =
                (&config.client_cert_path, &config.client_key_path)
            {
                let (cert_file, key_file) = Self::own_keypair_paths(cert_path, key_path)?;

                client_builder = client_builder
                    .certificate_path(cert_file)
                    .private_key_path(key_file)
                    .create_sample_keypair(false);
            } else {
                log::debug!("No client certificate configured, using sample keypair");
                client_builder = client_builder.create_sample_keypair(true);
            }
        } else {
            client_builder = client_builder.trust_server_certs(true);
        }

        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| client_builder.client())) {
            Ok(Some(client)) => Ok(client),
            Ok(None) => Err(anyhow!("Failed to create client")),
            Err(panic_info) => {
                let panic_msg = Self::panic_message(panic_info.as_ref());
                log::error!("Client creation panicked: {panic_msg}");
                Err(anyhow!("Client creation failed: {}", panic_msg))
            }
        }
    }

    /// Build a client for discovery only (short session timeout)
    fn build_discovery_client(config: &ConnectionConfig) -> Result<Client> {
        ClientBuilder::new()
            .application_name(&config.application_name)
            .application_uri(&config.application_uri)
            .create_sample_keypair(true)
            .trust_server_certs(true)
            .session_retry_limit(1)
            .session_timeout(10000)
            .client()
            .ok_or_else(|| anyhow!("Failed to create discovery client"))
    }

    /// Find an endpoint with the requested security settings, keeping the URL the user gave
    fn find_matching_endpoint(
        endpoints: &[EndpointDescription],
        requested_policy: SecurityPolicy,
        requested_mode: MessageSecurityMode,
        original_url: &str,
    ) -> Result<EndpointDescription> {
        let requested_policy_uri = Self::security_policy_to_uri(requested_policy)?;

        let matching_endpoint = endpoints.iter().find(|endpoint| {
            endpoint.security_policy_uri.as_ref() == requested_policy_uri
                && endpoint.security_mode == requested_mode
        });

        match matching_endpoint {
            Some(endpoint) => {
                let mut selected = endpoint.clone();
                // Servers behind NAT often advertise a hostname the client cannot reach
                selected.endpoint_url = UAString::from(original_url);
                Ok(selected)
            }
            None => {
                let available: Vec<String> = endpoints
                    .iter()
                    .map(|ep| {
                        format!(
                            "  - {} (Security: {} - {:?})",
                            ep.endpoint_url.as_ref(),
                            Self::policy_uri_to_name(ep.security_policy_uri.as_ref()),
                            ep.security_mode
                        )
                    })
                    .collect();

                Err(anyhow!(
                    "No endpoint found matching security policy '{:?}' and mode '{:?}'.\n\nAvailable endpoints:\n{}",
                    requested_policy,
                    requested_mode,
                    available.join("\n")
                ))
            }
        }
    }

    fn security_policy_to_uri(policy: SecurityPolicy) -> Result<&'static str> {
        match policy {
            SecurityPolicy::None => Ok("http://opcfoundation.org/UA/SecurityPolicy#None"),
            SecurityPolicy::Basic128Rsa15 => {
                Ok("http://opcfoundation.org/UA/SecurityPolicy#Basic128Rsa15")
            }
            SecurityPolicy::Basic256 => Ok("http://opcfoundation.org/UA/SecurityPolicy#Basic256"),
            SecurityPolicy::Basic256Sha256 => {
                Ok("http://opcfoundation.org/UA/SecurityPolicy#Basic256Sha256")
            }
            SecurityPolicy::Aes128Sha256RsaOaep => {
                Ok("http://opcfoundation.org/UA/SecurityPolicy#Aes128_Sha256_RsaOaep")
            }
            SecurityPolicy::Aes256Sha256RsaPss => {
                Ok("http://opcfoundation.org/UA/SecurityPolicy#Aes256_Sha256_RsaPss")
            }
            SecurityPolicy::Unknown => Err(anyhow!("Unknown security policy not supported")),
        }
    }

    fn policy_uri_to_name(uri: &str) -> &str {
        match uri {
            "http://opcfoundation.org/UA/SecurityPolicy#None" => "None",
            "http://opcfoundation.org/UA/SecurityPolicy#Basic128Rsa15" => "Basic128Rsa15",
            "http://opcfoundation.org/UA/SecurityPolicy#Basic256" => "Basic256",
            "http://opcfoundation.org/UA/SecurityPolicy#Basic256Sha256" => "Basic256Sha256",
            "http://opcfoundation.org/UA/SecurityPolicy#Aes128_Sha256_RsaOaep" => {
                "Aes128Sha256RsaOaep"
            }
            "http://opcfoundation.org/UA/SecurityPolicy#Aes256_Sha256_RsaPss" => {
                "Aes256Sha256RsaPss"
            }
            _ => "Unknown",
        }
    }

    fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
        if let Some(s) = panic_info.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        }
    }

    fn read_certificate(cert_path: &str) -> Result<openssl::x509::X509> {
        let cert_data = std::fs::read(cert_path)
            .map_err(|e| anyhow!("Cannot read certificate file: {}", e))?;

        if cert_data.is_empty() {
            return Err(anyhow!("Certificate file is empty"));
        }

        if cert_data.starts_with(b"-----BEGIN CERTIFICATE-----") {
            openssl::x509::X509::from_pem(&cert_data)
                .map_err(|e| anyhow!("Failed to parse PEM certificate: {}", e))
        } else {
            openssl::x509::X509::from_der(&cert_data)
                .map_err(|e| anyhow!("Failed to parse DER certificate: {}", e))
        }
    }

    /// Absolute paths of the configured certificate and key.
    ///
    /// The client store joins these onto its pki directory, which an absolute
    /// path replaces, so the files loaded are the files validated here.
    fn own_keypair_paths(cert_path: &str, key_path: &str) -> Result<(PathBuf, PathBuf)> {
        if !Path::new(cert_path).exists() {
            return Err(anyhow!("Client certificate file not found: {}", cert_path));
        }
        if !Path::new(key_path).exists() {
            return Err(anyhow!("Client private key file not found: {}", key_path));
        }

        Self::validate_certificate_pair(cert_path, key_path)?;

        let cert_file = std::fs::canonicalize(cert_path)
            .map_err(|e| anyhow!("Cannot resolve {}: {}", cert_path, e))?;
        let key_file = std::fs::canonicalize(key_path)
            .map_err(|e| anyhow!("Cannot resolve {}: {}", key_path, e))?;
        Ok((cert_file, key_file))
    }

    /// Check that the private key belongs to the certificate before the client loads them
    fn validate_certificate_pair(cert_path: &str, key_path: &str) -> Result<()> {
        let cert = Self::read_certificate(cert_path)?;

        let key_data = std::fs::read(key_path)
            .map_err(|e| anyhow!("Cannot read private key file: {}", e))?;
        if key_data.is_empty() {
            return Err(anyhow!("Private key file is empty"));
        }

        let private_key = openssl::pkey::PKey::private_key_from_pem(&key_data).map_err(|e| {
            anyhow!("Failed to parse private key: {}. The key must be unencrypted PEM.", e)
        })?;

        let cert_key_public = cert
            .public_key()
            .and_then(|key| key.public_key_to_pem())
            .map_err(|e| anyhow!("Failed to extract public key from certificate: {}", e))?;
        let private_key_public = private_key
            .public_key_to_pem()
            .map_err(|e| anyhow!("Failed to extract public key from private key: {}", e))?;

        if private_key_public != cert_key_public {
            return Err(anyhow!("Private key does not match the certificate's public key"));
        }

        log::debug!("Certificate {cert_path} matches private key {key_path}");
        Ok(())
    }

    /// Read the application URI from the certificate's Subject Alternative Name
    fn extract_application_uri_from_certificate(cert_path: &str) -> Result<String> {
        let cert = Self::read_certificate(cert_path)?;

        if let Some(san_list) = cert.subject_alt_names() {
            for san in san_list {
                if let Some(uri) = san.uri() {
                    if uri.starts_with("urn:") {
                        return Ok(uri.to_string());
                    }
                }
            }
        }

        Err(anyhow!("No application URI found in certificate Subject Alternative Name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcua::types::ApplicationDescription;

    fn endpoint(url: &str, policy: SecurityPolicy, mode: MessageSecurityMode) -> EndpointDescription {
        EndpointDescription {
            endpoint_url: UAString::from(url),
            security_mode: mode,
            security_policy_uri: policy.to_uri().into(),
            server_certificate: opcua::types::ByteString::null(),
            user_identity_tokens: None,
            transport_profile_uri: UAString::null(),
            security_level: 0,
            server: ApplicationDescription::default(),
        }
    }

    #[test]
    fn test_find_matching_endpoint_keeps_requested_url() {
        let endpoints = vec![
            endpoint("opc.tcp://internal-host:4840", SecurityPolicy::None, MessageSecurityMode::None),
            endpoint(
                "opc.tcp://internal-host:4840",
                SecurityPolicy::Basic256Sha256,
                MessageSecurityMode::SignAndEncrypt,
            ),
        ];

        let selected = ConnectionManager::find_matching_endpoint(
            &endpoints,
            SecurityPolicy::Basic256Sha256,
            MessageSecurityMode::SignAndEncrypt,
            "opc.tcp://192.168.1.10:4840",
        )
        .unwrap();
        assert_eq!(selected.endpoint_url.as_ref(), "opc.tcp://192.168.1.10:4840");
        assert_eq!(selected.security_mode, MessageSecurityMode::SignAndEncrypt);
    }

    #[test]
    fn test_find_matching_endpoint_lists_alternatives() {
        let endpoints = vec![endpoint(
            "opc.tcp://host:4840",
            SecurityPolicy::None,
            MessageSecurityMode::None,
        )];

        let err = ConnectionManager::find_matching_endpoint(
            &endpoints,
            SecurityPolicy::Basic256Sha256,
            MessageSecurityMode::Sign,
            "opc.tcp://host:4840",
        )
        .unwrap_err();
        assert!(err.to_string().contains("opc.tcp://host:4840 (Security: None"));
    }

    #[test]
    fn test_from_tool_config() {
        let config = ToolConfig {
            security_policy: "Basic256Sha256".to_string(),
            security_mode: "Sign".to_string(),
            ..Default::default()
        };
        let connection = ConnectionConfig::from_tool_config(&config).unwrap();
        assert_eq!(connection.security_policy, SecurityPolicy::Basic256Sha256);
        assert_eq!(connection.security_mode, MessageSecurityMode::Sign);
        assert_eq!(connection.application_uri, "urn:opcua-node-ids");
    }

    fn write_keypair(dir: &Path, stem: &str) -> (PathBuf, PathBuf) {
        let key = openssl::pkey::PKey::from_rsa(openssl::rsa::Rsa::generate(2048).unwrap()).unwrap();

        let mut name = openssl::x509::X509NameBuilder::new().unwrap();
        name.append_entry_by_text("CN", "opcua-node-ids").unwrap();
        let name = name.build();

        let mut builder = openssl::x509::X509::builder().unwrap();
        builder.set_version(2).unwrap();
        builder.set_subject_name(&name).unwrap();
        builder.set_issuer_name(&name).unwrap();
        builder.set_pubkey(&key).unwrap();
        builder
            .set_not_before(&openssl::asn1::Asn1Time::days_from_now(0).unwrap())
            .unwrap();
        builder
            .set_not_after(&openssl::asn1::Asn1Time::days_from_now(1).unwrap())
            .unwrap();
        builder.sign(&key, openssl::hash::MessageDigest::sha256()).unwrap();
        let cert = builder.build();

        let cert_path = dir.join(format!("{stem}.der"));
        let key_path = dir.join(format!("{stem}.pem"));
        std::fs::write(&cert_path, cert.to_der().unwrap()).unwrap();
        std::fs::write(&key_path, key.private_key_to_pem_pkcs8().unwrap()).unwrap();
        (cert_path, key_path)
    }

    #[test]
    fn test_own_keypair_paths_point_at_configured_files() {
        let dir = tempfile::tempdir().unwrap();
        let (cert_path, key_path) = write_keypair(dir.path(), "client");

        let (cert_file, key_file) = ConnectionManager::own_keypair_paths(
            cert_path.to_str().unwrap(),
            key_path.to_str().unwrap(),
        )
        .unwrap();

        assert!(cert_file.is_absolute());
        assert_eq!(cert_file, std::fs::canonicalize(&cert_path).unwrap());
        assert_eq!(key_file, std::fs::canonicalize(&key_path).unwrap());

        // The client store resolves its own certificate by pushing onto the pki dir.
        let mut resolved = PathBuf::from("pki");
        resolved.push(&cert_file);
        assert_eq!(resolved, cert_file);
        assert!(resolved.exists());
    }

    #[test]
    fn test_own_keypair_paths_reject_foreign_key() {
        let dir = tempfile::tempdir().unwrap();
        let (cert_path, _) = write_keypair(dir.path(), "client");
        let (_, other_key) = write_keypair(dir.path(), "other");

        let err = ConnectionManager::own_keypair_paths(
            cert_path.to_str().unwrap(),
            other_key.to_str().unwrap(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_missing_certificate_is_an_error() {
        assert!(ConnectionManager::validate_certificate_pair(
            "./does-not-exist.der",
            "./does-not-exist.pem"
        )
        .is_err());
    }
}
