use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Event;

/// Envelope for an event, pairing the payload with transport metadata.
///
/// This is the unit a caller hands to a dispatcher when the concrete event
/// type is not statically known.
///
/// Notes:
/// - `event_type` is the dispatch authority; the payload stays opaque until a
///   dispatcher matches the name.
/// - Envelopes are **transient**: nothing here is persisted, sequenced, or
///   replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    event_type: String,
    recorded_at: DateTime<Utc>,
    payload: E,
}

/// Envelope whose payload is raw JSON, for dispatch-by-name.
pub type RawEnvelope = EventEnvelope<serde_json::Value>;

impl<E> EventEnvelope<E> {
    pub fn new(
        event_id: Uuid,
        event_type: impl Into<String>,
        recorded_at: DateTime<Utc>,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            event_type: event_type.into(),
            recorded_at,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

impl<E> EventEnvelope<E>
where
    E: Event,
{
    /// Wrap a typed event, stamping fresh metadata.
    ///
    /// Uses UUIDv7 (time-ordered) for the event id. Prefer [`EventEnvelope::new`]
    /// in tests for determinism.
    pub fn wrap(payload: E) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            event_type: payload.event_type().to_string(),
            recorded_at: Utc::now(),
            payload,
        }
    }
}

impl<E> EventEnvelope<E>
where
    E: Serialize,
{
    /// Erase the payload type, keeping the metadata untouched.
    pub fn into_raw(self) -> Result<RawEnvelope, serde_json::Error> {
        Ok(EventEnvelope {
            event_id: self.event_id,
            event_type: self.event_type,
            recorded_at: self.recorded_at,
            payload: serde_json::to_value(self.payload)?,
        })
    }
}
