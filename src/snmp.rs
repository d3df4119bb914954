//! Meraki cloud SNMP polling
//!
//! The Meraki cloud exposes device telemetry over SNMPv3 at
//! `snmp.meraki.com:16100`. [`MerakiSnmp`] issues one GET per query; agent
//! and transport failures are logged and reported as "no value" rather than
//! returned as errors.

use std::fmt;

use async_snmp::{Auth, AuthProtocol, Client, Oid, PrivProtocol, Value};
use async_trait::async_trait;

use crate::error::{Result, SnmpError};

/// Meraki cloud SNMP endpoint
pub const SNMP_TARGET: &str = "snmp.meraki.com:16100";

/// Column of the device table holding LTE modem status, indexed by MAC
pub const MODEM_STATUS_OID: &str = "1.3.6.1.4.1.29671.1.1.4.1.14";

/// Returned by [`MerakiSnmp::modem_status`] when the device reports nothing
pub const NO_MODEM: &str = "No Modem";

/// SNMPv3 USM credentials for the Meraki cloud endpoint
#[derive(Clone)]
pub struct SnmpCredentials {
    pub user: String,
    pub auth_password: String,
    pub priv_password: String,
    pub auth_protocol: AuthProtocol,
    pub priv_protocol: PrivProtocol,
}

impl SnmpCredentials {
    /// Credentials using SHA-1 authentication and AES-128 privacy
    pub fn new(
        user: impl Into<String>,
        auth_password: impl Into<String>,
        priv_password: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            auth_password: auth_password.into(),
            priv_password: priv_password.into(),
            auth_protocol: AuthProtocol::Sha1,
            priv_protocol: PrivProtocol::Aes128,
        }
    }

    pub fn with_protocols(mut self, auth: AuthProtocol, privacy: PrivProtocol) -> Self {
        self.auth_protocol = auth;
        self.priv_protocol = privacy;
        self
    }

    fn usm(&self) -> Auth {
        Auth::usm(self.user.clone())
            .auth(self.auth_protocol, self.auth_password.clone())
            .privacy(self.priv_protocol, self.priv_password.clone())
            .into()
    }
}

impl fmt::Debug for SnmpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnmpCredentials")
            .field("user", &self.user)
            .field("auth_protocol", &self.auth_protocol)
            .field("priv_protocol", &self.priv_protocol)
            .finish_non_exhaustive()
    }
}

/// Why an SNMP GET produced no value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnmpFailure {
    /// The request never got a usable answer (network, timeout, auth, decode)
    Engine(String),
    /// The agent answered with an error status
    Status {
        status: String,
        index: u32,
        oid: Option<String>,
    },
}

impl fmt::Display for SnmpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnmpFailure::Engine(message) => f.write_str(message),
            SnmpFailure::Status { status, index, oid } => write!(
                f,
                "{} at {}",
                status,
                oid.clone().unwrap_or_else(|| if *index == 0 {
                    "?".to_string()
                } else {
                    format!("index {}", index)
                })
            ),
        }
    }
}

impl From<&async_snmp::Error> for SnmpFailure {
    fn from(err: &async_snmp::Error) -> Self {
        match err {
            async_snmp::Error::Snmp {
                status, index, oid, ..
            } => SnmpFailure::Status {
                status: status.to_string(),
                index: *index,
                oid: oid.as_ref().map(|oid| oid.to_string()),
            },
            other => SnmpFailure::Engine(other.to_string()),
        }
    }
}

/// A single-OID SNMP GET
#[async_trait]
pub trait SnmpBackend: Send + Sync {
    async fn get(&self, oid: &Oid) -> std::result::Result<Value, SnmpFailure>;
}

/// SNMPv3 backend that opens a fresh UDP client per query
#[derive(Debug, Clone)]
pub struct UsmBackend {
    target: String,
    credentials: SnmpCredentials,
}

impl UsmBackend {
    pub fn new(credentials: SnmpCredentials) -> Self {
        Self::with_target(credentials, SNMP_TARGET)
    }

    pub fn with_target(credentials: SnmpCredentials, target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            credentials,
        }
    }
}

#[async_trait]
impl SnmpBackend for UsmBackend {
    async fn get(&self, oid: &Oid) -> std::result::Result<Value, SnmpFailure> {
        let client = Client::builder(self.target.clone(), self.credentials.usm())
            .connect()
            .await
            .map_err(|err| SnmpFailure::from(&*err))?;

        client
            .get(oid)
            .await
            .map(|varbind| varbind.value)
            .map_err(|err| SnmpFailure::from(&*err))
    }
}

/// SNMP poller for the Meraki cloud
#[derive(Debug, Clone)]
pub struct MerakiSnmp<B = UsmBackend> {
    backend: B,
}

impl MerakiSnmp<UsmBackend> {
    /// Poller against `snmp.meraki.com:16100`
    pub fn new(credentials: SnmpCredentials) -> Self {
        Self::with_backend(UsmBackend::new(credentials))
    }
}

impl<B: SnmpBackend> MerakiSnmp<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// GET one OID and return the bound value.
    ///
    /// Returns `Ok(None)` when the request fails, the agent reports an error
    /// status, or the value is an SNMP exception (noSuchObject and friends).
    /// Only a malformed `oid` string is an error.
    pub async fn query(&self, oid: &str) -> Result<Option<Value>> {
        let parsed = Oid::parse(oid).map_err(|_| SnmpError::InvalidOid(oid.to_string()))?;

        match self.backend.get(&parsed).await {
            Ok(value) if value.is_exception() => {
                log::debug!("{} returned {}", oid, value);
                Ok(None)
            }
            Ok(value) => Ok(Some(value)),
            Err(failure) => {
                log::warn!("SNMP GET {} failed: {}", oid, failure);
                Ok(None)
            }
        }
    }

    /// LTE modem status for the device with this MAC, or [`NO_MODEM`] when
    /// there is no value or the value is empty (null, zero, empty string).
    pub async fn modem_status(&self, mac: &str) -> Result<String> {
        let oid = format!("{}.{}", MODEM_STATUS_OID, mac_to_decimal(mac)?);

        Ok(self
            .query(&oid)
            .await?
            .filter(|value| !is_blank(value))
            .map(|value| render_value(&value))
            .unwrap_or_else(|| NO_MODEM.to_string()))
    }
}

/// Convert a colon-hex MAC address to a dotted-decimal OID suffix.
///
/// `00:1A:2B:3C:4D:5E` becomes `0.26.43.60.77.94`.
pub fn mac_to_decimal(mac: &str) -> Result<String> {
    let octets = mac
        .split(':')
        .map(|octet| u8::from_str_radix(octet, 16).map(|value| value.to_string()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| SnmpError::InvalidMac(mac.to_string()))?;

    Ok(octets.join("."))
}

/// Null, zero and empty values
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Integer(n) => *n == 0,
        Value::Counter32(n) | Value::Gauge32(n) | Value::TimeTicks(n) => *n == 0,
        Value::Counter64(n) => *n == 0,
        Value::OctetString(bytes) | Value::Opaque(bytes) => bytes.is_empty(),
        _ => false,
    }
}

/// Render a value for display; octet strings print as text when they are UTF-8.
pub fn render_value(value: &Value) -> String {
    value
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;

    /// Backend returning a fixed answer and recording requested OIDs
    struct FixedBackend {
        answer: std::result::Result<Value, SnmpFailure>,
        requested: Mutex<Vec<String>>,
    }

    impl FixedBackend {
        fn new(answer: std::result::Result<Value, SnmpFailure>) -> Self {
            Self {
                answer,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SnmpBackend for FixedBackend {
        async fn get(&self, oid: &Oid) -> std::result::Result<Value, SnmpFailure> {
            self.requested.lock().unwrap().push(oid.to_string());
            self.answer.clone()
        }
    }

    fn text(value: &str) -> Value {
        Value::OctetString(value.as_bytes().to_vec().into())
    }

    #[test]
    fn test_mac_to_decimal() {
        assert_eq!(mac_to_decimal("00:1A:2B:3C:4D:5E").unwrap(), "0.26.43.60.77.94");
        assert_eq!(mac_to_decimal("ff:ff:00:01:0a:b0").unwrap(), "255.255.0.1.10.176");
    }

    #[test]
    fn test_mac_to_decimal_rejects_bad_octets() {
        for mac in ["00:1A:2B:3C:4D:ZZ", "001A2B3C4D5E", "00:1A::3C:4D:5E"] {
            let err = mac_to_decimal(mac).unwrap_err();
            assert!(matches!(err, Error::Snmp(SnmpError::InvalidMac(ref m)) if m == mac));
        }
    }

    #[tokio::test]
    async fn test_modem_status_queries_mac_indexed_oid() {
        let snmp = MerakiSnmp::with_backend(FixedBackend::new(Ok(text("Connected"))));

        let status = snmp.modem_status("00:1A:2B:3C:4D:5E").await.unwrap();

        assert_eq!(status, "Connected");
        let requested = snmp.backend.requested.lock().unwrap();
        assert_eq!(
            requested.as_slice(),
            ["1.3.6.1.4.1.29671.1.1.4.1.14.0.26.43.60.77.94"]
        );
    }

    #[tokio::test]
    async fn test_modem_status_sentinel_on_engine_error() {
        let snmp = MerakiSnmp::with_backend(FixedBackend::new(Err(SnmpFailure::Engine(
            "timeout".into(),
        ))));

        let status = snmp.modem_status("00:1A:2B:3C:4D:5E").await.unwrap();
        assert_eq!(status, NO_MODEM);
    }

    #[tokio::test]
    async fn test_modem_status_sentinel_on_no_such_instance() {
        let snmp = MerakiSnmp::with_backend(FixedBackend::new(Ok(Value::NoSuchInstance)));
        assert_eq!(snmp.modem_status("00:00:00:00:00:01").await.unwrap(), NO_MODEM);
    }

    #[tokio::test]
    async fn test_modem_status_sentinel_on_blank_values() {
        for value in [Value::Integer(0), Value::Gauge32(0), Value::Null, text("")] {
            let snmp = MerakiSnmp::with_backend(FixedBackend::new(Ok(value)));
            assert_eq!(snmp.modem_status("00:00:00:00:00:01").await.unwrap(), NO_MODEM);
        }

        let snmp = MerakiSnmp::with_backend(FixedBackend::new(Ok(Value::Integer(2))));
        assert_eq!(snmp.modem_status("00:00:00:00:00:01").await.unwrap(), "2");
    }

    #[tokio::test]
    async fn test_query_swallows_agent_error_status() {
        let snmp = MerakiSnmp::with_backend(FixedBackend::new(Err(SnmpFailure::Status {
            status: "noAccess".into(),
            index: 1,
            oid: Some("1.3.6.1".into()),
        })));

        assert!(snmp.query("1.3.6.1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_query_returns_bound_value() {
        let snmp = MerakiSnmp::with_backend(FixedBackend::new(Ok(Value::Integer(7))));
        let value = snmp.query("1.3.6.1.2.1.1.7.0").await.unwrap();
        assert_eq!(value, Some(Value::Integer(7)));
    }

    #[tokio::test]
    async fn test_query_rejects_malformed_oid() {
        let snmp = MerakiSnmp::with_backend(FixedBackend::new(Ok(Value::Null)));
        let err = snmp.query("not.an.oid").await.unwrap_err();
        assert!(matches!(err, Error::Snmp(SnmpError::InvalidOid(_))));
        assert!(snmp.backend.requested.lock().unwrap().is_empty());
    }

    #[test]
    fn test_failure_display() {
        let failure = SnmpFailure::Status {
            status: "genErr".into(),
            index: 0,
            oid: None,
        };
        assert_eq!(failure.to_string(), "genErr at ?");
    }

    #[test]
    fn test_credentials_debug_hides_passwords() {
        let creds = SnmpCredentials::new("poller", "auth-secret", "priv-secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("poller"));
        assert!(!debug.contains("secret"));
    }
}
