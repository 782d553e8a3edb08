use serde::Deserialize;

/// Envelope of every classic controller API reply.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub meta: Option<ApiMeta>,

    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMeta {
    #[serde(default)]
    pub rc: String,

    #[serde(default)]
    pub msg: Option<String>,
}

impl ApiMeta {
    pub fn is_ok(&self) -> bool {
        self.rc == "ok"
    }
}

/// A connected station (`stat/sta`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UnifiStation {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub hostname: String,

    #[serde(default)]
    pub ip: String,

    #[serde(default)]
    pub mac: String,
}

impl UnifiStation {
    /// User-assigned alias first, then the DHCP hostname.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.hostname
        } else {
            &self.name
        }
    }
}

/// A configured network (`rest/networkconf`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UnifiNetwork {
    #[serde(default)]
    pub name: String,

    /// Gateway address with prefix length, e.g. `192.168.1.1/24`
    #[serde(default)]
    pub ip_subnet: String,
}

impl UnifiNetwork {
    pub fn gateway_ip(&self) -> &str {
        self.ip_subnet.split('/').next().unwrap_or_default()
    }
}

/// An adopted network device (`stat/device`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UnifiDevice {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub ip: String,

    #[serde(default)]
    pub mac: String,
}
