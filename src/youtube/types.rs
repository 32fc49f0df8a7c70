use serde::Deserialize;

// https://developers.google.com/youtube/v3/docs/channels/list
#[derive(Debug, Deserialize)]
pub(super) struct ChannelListResponse {
    // Omitted entirely when the id matches nothing
    #[serde(default)]
    pub(super) items: Vec<ChannelResource>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelResource {
    pub statistics: ChannelStatistics,
}

// https://developers.google.com/youtube/v3/docs/channels#statistics
// Counts are string-encoded 64-bit integers on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub subscriber_count: String,
    pub video_count: String,
    pub view_count: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_channel_list() {
        let body = r#"{
            "kind": "youtube#channelListResponse",
            "items": [
                {
                    "id": "UC123",
                    "statistics": {
                        "viewCount": "1000",
                        "subscriberCount": "100",
                        "hiddenSubscriberCount": false,
                        "videoCount": "10"
                    }
                }
            ]
        }"#;

        let listing: ChannelListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(
            listing.items[0].statistics,
            ChannelStatistics {
                subscriber_count: "100".to_string(),
                video_count: "10".to_string(),
                view_count: "1000".to_string(),
            }
        );
    }

    #[test]
    fn test_deserialize_no_items() {
        let body = r#"{"kind": "youtube#channelListResponse", "pageInfo": {"totalResults": 0}}"#;
        let listing: ChannelListResponse = serde_json::from_str(body).unwrap();
        assert!(listing.items.is_empty());
    }
}
