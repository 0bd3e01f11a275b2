//! Self-signed certificate generation
//!
//! Each development domain gets its own self-signed certificate that is also
//! marked as a CA, so trusting it once covers the domain with no separate
//! root to manage.

use rcgen::{
    BasicConstraints, CertificateParams, DistinguishedName, DnType, ExtendedKeyUsagePurpose,
    IsCa, KeyPair, KeyUsagePurpose, SerialNumber,
};
use sha2::{Digest, Sha256};
use time::{Duration, OffsetDateTime};

/// Ten years.
pub const DEFAULT_VALIDITY_DAYS: u32 = 3650;

/// Subject fields other than the common name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectInfo {
    pub country: String,
    pub state: String,
    pub locality: String,
    pub organization: String,
    pub organizational_unit: String,
}

impl Default for SubjectInfo {
    fn default() -> Self {
        Self {
            country: "US".to_string(),
            state: "CA".to_string(),
            locality: "MV".to_string(),
            organization: "Docker Bootapp".to_string(),
            organizational_unit: "Development".to_string(),
        }
    }
}

/// PEM-encoded certificate and private key for one domain.
#[derive(Debug, Clone)]
pub struct CertificateMaterial {
    pub certificate_pem: String,
    pub private_key_pem: String,
}

impl CertificateMaterial {
    /// Certificate followed by key, for servers that take a single file.
    pub fn bundle(&self) -> String {
        let mut bundle = self.certificate_pem.clone();
        if !bundle.ends_with('\n') {
            bundle.push('\n');
        }
        bundle.push_str(&self.private_key_pem);
        bundle
    }
}

/// Generate a fresh key pair and a self-signed certificate for `domain`.
pub fn generate_self_signed(
    domain: &str,
    subject: &SubjectInfo,
    validity_days: u32,
) -> Result<CertificateMaterial, rcgen::Error> {
    let mut params = CertificateParams::new(vec![domain.to_string()])?;

    let mut dn = DistinguishedName::new();
    dn.push(DnType::CountryName, subject.country.as_str());
    dn.push(DnType::StateOrProvinceName, subject.state.as_str());
    dn.push(DnType::LocalityName, subject.locality.as_str());
    dn.push(DnType::OrganizationName, subject.organization.as_str());
    dn.push(DnType::OrganizationalUnitName, subject.organizational_unit.as_str());
    dn.push(DnType::CommonName, domain);
    params.distinguished_name = dn;

    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![
        KeyUsagePurpose::DigitalSignature,
        KeyUsagePurpose::KeyEncipherment,
        KeyUsagePurpose::KeyCertSign,
    ];
    params.extended_key_usages = vec![ExtendedKeyUsagePurpose::ServerAuth];

    let now = OffsetDateTime::now_utc();
    params.not_before = now;
    params.not_after = now + Duration::days(i64::from(validity_days));
    params.serial_number = Some(random_serial());

    let key_pair = KeyPair::generate()?;
    let cert = params.self_signed(&key_pair)?;

    Ok(CertificateMaterial {
        certificate_pem: cert.pem(),
        private_key_pem: key_pair.serialize_pem(),
    })
}

/// 128 random bits with the sign bit cleared, so the DER integer stays positive.
fn random_serial() -> SerialNumber {
    let mut bytes: [u8; 16] = rand::random();
    bytes[0] &= 0x7f;
    SerialNumber::from(bytes.to_vec())
}

/// SHA-256 over the DER bytes of the first PEM block, as colon-separated hex.
pub fn fingerprint_sha256(certificate_pem: &str) -> Option<String> {
    let block = pem::parse(certificate_pem).ok()?;
    let digest = Sha256::digest(block.contents());
    Some(
        digest
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(":"),
    )
}
