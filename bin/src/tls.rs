use std::path::Path;
use std::sync::Arc;

use rustls::ServerConfig;
use rustls_pki_types::pem::PemObject;
use rustls_pki_types::{CertificateDer, PrivateKeyDer};

use crate::errors::StartupError;

/// Builds the rustls configuration from a PEM certificate chain and key.
pub fn load_server_config(cert_path: &Path, key_path: &Path) -> Result<ServerConfig, StartupError> {
    let material_error = |path: &Path| {
        let path = path.to_path_buf();
        move |cause: rustls_pki_types::pem::Error| StartupError::TlsMaterial { path, cause }
    };

    let certs = CertificateDer::pem_file_iter(cert_path)
        .map_err(material_error(cert_path))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(material_error(cert_path))?;
    let key = PrivateKeyDer::from_pem_file(key_path).map_err(material_error(key_path))?;

    let config = ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_single_cert(certs, key)?;
    Ok(config)
}
