//! TLS — rustls ServerConfig building for encrypted syslog listeners.

use std::io;
use std::sync::Arc;

use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::server::WebPkiClientVerifier;
use rustls::{ServerConfig, SupportedProtocolVersion};
use thiserror::Error;

use crate::conf::tls::TlsVersion;
use crate::target::{PemSource, TlsSettings};

static TLS12_AND_UP: &[&SupportedProtocolVersion] =
    &[&rustls::version::TLS12, &rustls::version::TLS13];
static TLS13_ONLY: &[&SupportedProtocolVersion] = &[&rustls::version::TLS13];

#[derive(Debug, Error)]
pub enum TlsError {
    #[error("failed to read {what} from '{path}': {source}")]
    Io {
        what: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid PEM in {what}: {source}")]
    Pem {
        what: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("no certificate found in {0}")]
    NoCertificates(&'static str),

    #[error("no private key found in key material")]
    NoPrivateKey,

    #[error("a server certificate is required for a TLS listener")]
    MissingCertificate,

    #[error("a private key is required for a TLS listener")]
    MissingPrivateKey,

    #[error("rustls error: {0}")]
    Rustls(#[from] rustls::Error),

    #[error("client verifier error: {0}")]
    Verifier(#[from] rustls::server::VerifierBuilderError),
}

impl TlsSettings {
    /// Build a rustls ServerConfig. With a CA configured, client
    /// certificates are verified against it (mTLS).
    pub fn build_server_config(&self) -> Result<Arc<ServerConfig>, TlsError> {
        let cert_source = self.cert.as_ref().ok_or(TlsError::MissingCertificate)?;
        let key_source = self.key.as_ref().ok_or(TlsError::MissingPrivateKey)?;

        let certs = load_certs(cert_source, "certificate")?;
        let key = load_private_key(key_source)?;

        let builder = ServerConfig::builder_with_protocol_versions(self.protocol_versions());

        let config = match &self.ca {
            Some(ca_source) => {
                let mut root_store = rustls::RootCertStore::empty();
                for cert in load_certs(ca_source, "CA certificate")? {
                    root_store.add(cert)?;
                }

                let mut verifier = WebPkiClientVerifier::builder(Arc::new(root_store));
                if self.insecure_skip_verify {
                    tracing::warn!("insecure_skip_verify set: client certificates are optional");
                    verifier = verifier.allow_unauthenticated();
                }

                builder
                    .with_client_cert_verifier(verifier.build()?)
                    .with_single_cert(certs, key)?
            }
            None => builder.with_no_client_auth().with_single_cert(certs, key)?,
        };

        tracing::debug!(
            mtls = self.ca.is_some(),
            min_version = ?self.min_version,
            "built TLS server config"
        );
        Ok(Arc::new(config))
    }

    fn protocol_versions(&self) -> &'static [&'static SupportedProtocolVersion] {
        match self.min_version {
            Some(TlsVersion::Tls13) => TLS13_ONLY,
            Some(version @ (TlsVersion::Tls10 | TlsVersion::Tls11)) => {
                tracing::warn!(
                    "min_version {} is below what rustls supports, using TLS12",
                    version
                );
                TLS12_AND_UP
            }
            Some(TlsVersion::Tls12) | None => TLS12_AND_UP,
        }
    }
}

fn read_pem(source: &PemSource, what: &'static str) -> Result<Vec<u8>, TlsError> {
    match source {
        PemSource::Inline(pem) => Ok(pem.as_bytes().to_vec()),
        PemSource::File(path) => std::fs::read(path).map_err(|source| TlsError::Io {
            what,
            path: path.display().to_string(),
            source,
        }),
    }
}

fn load_certs(
    source: &PemSource,
    what: &'static str,
) -> Result<Vec<CertificateDer<'static>>, TlsError> {
    let pem = read_pem(source, what)?;
    let certs = rustls_pemfile::certs(&mut pem.as_slice())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| TlsError::Pem { what, source })?;
    if certs.is_empty() {
        return Err(TlsError::NoCertificates(what));
    }
    Ok(certs)
}

fn load_private_key(source: &PemSource) -> Result<PrivateKeyDer<'static>, TlsError> {
    let pem = read_pem(source, "private key")?;
    rustls_pemfile::private_key(&mut pem.as_slice())
        .map_err(|source| TlsError::Pem {
            what: "private key",
            source,
        })?
        .ok_or(TlsError::NoPrivateKey)
}
