/// Private reverse zones answered locally even when no record lives there.
pub const PRIVATE_REVERSE_ZONES: [&str; 4] = [
    "10.in-addr.arpa.",
    "168.192.in-addr.arpa.",
    "0.0.16.127.in-addr.arpa.",
    "0.0.168.192.in-addr.arpa.",
];

/// Suffixes this server is authoritative for.
///
/// Matching is case-insensitive and on label boundaries: `home.` covers
/// `home.` and `nas.home.` but not `myhome.`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthoritativeZones {
    suffixes: Vec<String>,
}

impl AuthoritativeZones {
    /// Builds the suffix set from domain names plus `PRIVATE_REVERSE_ZONES`.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = Vec::new();
        let all = domains
            .into_iter()
            .map(|d| canonical(d.as_ref()))
            .chain(PRIVATE_REVERSE_ZONES.iter().map(|z| canonical(z)));

        for suffix in all {
            if suffix != "." && !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }

        Self { suffixes }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = canonical(name);
        self.suffixes.iter().any(|suffix| {
            name == *suffix
                || (name.len() > suffix.len()
                    && name.ends_with(suffix.as_str())
                    && name.as_bytes()[name.len() - suffix.len() - 1] == b'.')
        })
    }
}

fn canonical(name: &str) -> String {
    format!("{}.", name.trim_end_matches('.').to_ascii_lowercase())
}
