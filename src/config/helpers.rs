use std::{collections::HashMap, time::Duration};

use serde::{Deserialize, Deserializer, Serializer, de};
use url::Url;

use crate::models::Network;

/// Custom deserializer for Duration from seconds
pub fn deserialize_duration_from_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    Ok(Duration::from_secs(secs))
}

/// Custom serializer for Duration to seconds
pub fn serialize_duration_to_seconds<S>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(duration.as_secs())
}

/// Custom deserializer for a map of network name to node URL.
///
/// Keys must name a known network, e.g. `bsc-testnet`.
pub fn deserialize_network_nodes<'de, D>(deserializer: D) -> Result<HashMap<Network, Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, String>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(name, url)| {
            let network = Network::from_name(&name);
            if network == Network::Unknown {
                return Err(de::Error::custom(format!("unknown network: {name}")));
            }
            let url = Url::parse(&url).map_err(de::Error::custom)?;
            Ok((network, url))
        })
        .collect()
}
