use serde::{Deserialize, Serialize};

/// Display name for a channel id that is not in the directory.
pub const UNKNOWN_CHANNEL: &str = "Unknown";

/// Identifier of a sales channel (e.g. `website`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A sales outlet sales are attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
}

impl Channel {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ChannelId::new(id),
            name: name.into(),
        }
    }
}

/// Static, externally configured set of channels (read-only to the domain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDirectory {
    channels: Vec<Channel>,
}

impl ChannelDirectory {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn get(&self, id: &ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &ChannelId) -> bool {
        self.get(id).is_some()
    }

    /// Display name for `id`, or [`UNKNOWN_CHANNEL`] for ids outside the directory.
    pub fn name_of(&self, id: &ChannelId) -> &str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or(UNKNOWN_CHANNEL)
    }
}

impl Default for ChannelDirectory {
    /// The storefront's outlets: own website plus two marketplaces.
    fn default() -> Self {
        Self::new(vec![
            Channel::new("website", "Website"),
            Channel::new("amazon", "Amazon"),
            Channel::new("ebay", "eBay"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directory_lists_three_outlets_in_order() {
        let dir = ChannelDirectory::default();
        let ids: Vec<&str> = dir.channels().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["website", "amazon", "ebay"]);
    }

    #[test]
    fn unknown_channel_degrades_to_placeholder_name() {
        let dir = ChannelDirectory::default();
        assert_eq!(dir.name_of(&ChannelId::from("ebay")), "eBay");
        assert_eq!(dir.name_of(&ChannelId::from("etsy")), UNKNOWN_CHANNEL);
        assert!(!dir.contains(&ChannelId::from("etsy")));
    }
}
