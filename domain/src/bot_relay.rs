//! Outbound event messages for the companion bot.
//!
//! Messages go out through the host bridge's one-way data channel. Delivery
//! is fire-and-forget: there is no acknowledgement, retry or timeout. In
//! standalone mode nothing is sent.

use crate::bridge::HostBridge;
use log::{debug, info, warn};
use serde::Serialize;
use shared::{BotEventKind, BotMessage};

/// Build the wire message for an event
pub fn build_message<T: Serialize>(
    event: BotEventKind,
    data: &T,
    user_id: Option<i64>,
    timestamp: i64,
) -> Result<BotMessage, serde_json::Error> {
    Ok(BotMessage {
        event,
        data: serde_json::to_value(data)?,
        user_id,
        timestamp,
    })
}

/// Send an event to the bot if a bridge is available
pub fn relay<T: Serialize>(
    bridge: Option<&dyn HostBridge>,
    event: BotEventKind,
    data: &T,
    user_id: Option<i64>,
    timestamp: i64,
) {
    let Some(bridge) = bridge else {
        debug!("No host bridge, dropping {} event", event.as_str());
        return;
    };

    let encoded = build_message(event, data, user_id, timestamp)
        .and_then(|message| serde_json::to_string(&message));
    match encoded {
        Ok(payload) => {
            bridge.send_data(&payload);
            info!("Sent {} event to bot", event.as_str());
        }
        Err(e) => warn!("Failed to encode {} event: {}", event.as_str(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingBridge;
    use serde_json::json;
    use shared::Transaction;

    fn sample_transaction() -> Transaction {
        Transaction {
            id: 1_710_925_200_000,
            amount: 50_000,
            description: "Salary".to_string(),
            category: "Work".to_string(),
            date: "2024-03-20".to_string(),
        }
    }

    #[test]
    fn test_relay_sends_full_payload() {
        let bridge = RecordingBridge::default();

        relay(
            Some(&bridge),
            BotEventKind::IncomeAdded,
            &sample_transaction(),
            Some(777),
            1_710_925_200_123,
        );

        assert_eq!(
            bridge.sent_json(),
            vec![json!({
                "event": "income_added",
                "data": {
                    "id": 1_710_925_200_000i64,
                    "amount": 50_000,
                    "description": "Salary",
                    "category": "Work",
                    "date": "2024-03-20",
                },
                "userId": 777,
                "timestamp": 1_710_925_200_123i64,
            })]
        );
    }

    #[test]
    fn test_relay_without_bridge_is_silent() {
        relay(None, BotEventKind::ExpenseAdded, &sample_transaction(), None, 0);
    }

    #[test]
    fn test_build_message_without_user() {
        let message = build_message(BotEventKind::ExpenseAdded, &sample_transaction(), None, 5).unwrap();
        assert_eq!(message.user_id, None);
        assert_eq!(message.data["amount"], json!(50_000));
    }
}
