// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fuzzy matching of system messages to chat channels.
//!
//! A system message carries a free-text `channel_hint` rather than a channel
//! id. It belongs to every channel whose name contains the hint, or is
//! contained by it, ignoring case.

use neo_config::model::{MultiMatchPolicy, RoutingConfig};
use neo_core::model::{ChatChannel, SystemMessage};
use tracing::debug;

/// Case-insensitive substring test in either direction.
///
/// An empty hint is a substring of every name and therefore matches all
/// channels.
pub fn hint_matches(hint: &str, channel_name: &str) -> bool {
    let hint = hint.to_lowercase();
    let name = channel_name.to_lowercase();
    name.contains(&hint) || hint.contains(&name)
}

/// Decides which channels a system message is rendered in.
#[derive(Debug, Clone)]
pub struct ChannelMatcher {
    policy: MultiMatchPolicy,
    system_user_name: String,
}

impl ChannelMatcher {
    /// Create a matcher from the routing section of the configuration.
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            policy: config.multi_match,
            system_user_name: config.system_user_name.clone(),
        }
    }

    pub fn policy(&self) -> MultiMatchPolicy {
        self.policy
    }

    /// Author name given to system entries in a merged timeline.
    pub fn system_user_name(&self) -> &str {
        &self.system_user_name
    }

    /// Channels the hint is routed to, in channel order.
    ///
    /// Under [`MultiMatchPolicy::Broadcast`] every matching channel is
    /// returned. Under [`MultiMatchPolicy::Primary`] only the one whose name
    /// is most similar to the hint (Jaro-Winkler, first channel wins ties).
    pub fn matching_channels<'a>(&self, hint: &str, channels: &'a [ChatChannel]) -> Vec<&'a ChatChannel> {
        let mut matches: Vec<&ChatChannel> = channels
            .iter()
            .filter(|c| hint_matches(hint, &c.name))
            .collect();

        if self.policy == MultiMatchPolicy::Primary && matches.len() > 1 {
            let hint = hint.to_lowercase();
            let mut best = 0;
            let mut best_score = f64::MIN;
            for (i, channel) in matches.iter().enumerate() {
                let score = strsim::jaro_winkler(&hint, &channel.name.to_lowercase());
                if score > best_score {
                    best = i;
                    best_score = score;
                }
            }
            debug!(hint, channel = %matches[best].id, score = best_score, "primary channel chosen");
            matches = vec![matches[best]];
        }

        matches
    }

    /// System messages that render in `channel`, preserving input order.
    ///
    /// `channels` is the full channel list; it is only consulted under the
    /// primary policy, where a message may match `channel` and still lose to
    /// a closer one.
    pub fn system_messages_for<'a>(
        &self,
        channel: &ChatChannel,
        channels: &[ChatChannel],
        system: &'a [SystemMessage],
    ) -> Vec<&'a SystemMessage> {
        system
            .iter()
            .filter(|msg| match self.policy {
                MultiMatchPolicy::Broadcast => hint_matches(&msg.channel_hint, &channel.name),
                MultiMatchPolicy::Primary => self
                    .matching_channels(&msg.channel_hint, channels)
                    .first()
                    .is_some_and(|best| best.id == channel.id),
            })
            .collect()
    }
}

impl Default for ChannelMatcher {
    fn default() -> Self {
        Self::new(&RoutingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use neo_core::model::{NewSystemMessage, SystemMessageKind};

    use super::*;

    fn system(id: &str, hint: &str) -> SystemMessage {
        NewSystemMessage::new(hint, format!("event for {hint}"), SystemMessageKind::NewTask)
            .into_message(id.into(), chrono::Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap())
    }

    fn primary() -> ChannelMatcher {
        ChannelMatcher::new(&RoutingConfig {
            multi_match: MultiMatchPolicy::Primary,
            ..RoutingConfig::default()
        })
    }

    #[test]
    fn hint_contained_in_channel_name() {
        assert!(hint_matches("Fire", "Fire Safety"));
    }

    #[test]
    fn channel_name_contained_in_hint() {
        assert!(hint_matches("Fire Safety Checks", "Fire Safety"));
        assert!(hint_matches("Electrical", "Electric"));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(hint_matches("fire safety", "FIRE SAFETY"));
    }

    #[test]
    fn unrelated_names_do_not_match() {
        assert!(!hint_matches("Pool Pump", "Maintenance"));
    }

    #[test]
    fn broadcast_returns_every_match() {
        let channels = vec![
            ChatChannel::group("c1", "Fire Safety"),
            ChatChannel::group("c2", "Maintenance"),
            ChatChannel::group("c3", "Fire Drills"),
        ];
        let ids: Vec<&str> = ChannelMatcher::default()
            .matching_channels("Fire", &channels)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn primary_keeps_closest_channel() {
        let channels = vec![
            ChatChannel::group("c1", "Fire Safety Checks"),
            ChatChannel::group("c2", "Fire Safety"),
        ];
        let best = primary().matching_channels("Fire Safety", &channels);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].id.as_str(), "c2");
    }

    #[test]
    fn primary_breaks_ties_by_channel_order() {
        let channels = vec![
            ChatChannel::group("c1", "Pool"),
            ChatChannel::group("c2", "pool"),
        ];
        let best = primary().matching_channels("Pool", &channels);
        assert_eq!(best[0].id.as_str(), "c1");
    }

    #[test]
    fn system_messages_filtered_per_channel() {
        let channels = vec![
            ChatChannel::group("c1", "Fire Safety"),
            ChatChannel::group("c2", "Maintenance"),
        ];
        let system = vec![system("s1", "Fire"), system("s2", "Pool Pump")];
        let matcher = ChannelMatcher::default();
        let fire = matcher.system_messages_for(&channels[0], &channels, &system);
        assert_eq!(fire.len(), 1);
        assert_eq!(fire[0].id.as_str(), "s1");
        assert!(matcher.system_messages_for(&channels[1], &channels, &system).is_empty());
    }

    #[test]
    fn primary_routes_to_single_channel() {
        let channels = vec![
            ChatChannel::group("c1", "Fire Safety"),
            ChatChannel::group("c2", "Fire"),
        ];
        let system = vec![system("s1", "Fire")];
        let matcher = primary();
        assert!(matcher.system_messages_for(&channels[0], &channels, &system).is_empty());
        assert_eq!(matcher.system_messages_for(&channels[1], &channels, &system).len(), 1);
    }
}
