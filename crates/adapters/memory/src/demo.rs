//! Demo events for trying the dashboard without a host.
//!
//! | Event | Vendor | Payload highlights |
//! |-------|--------|--------------------|
//! | `demo-config` | `com.example.configuration` | nested settings object |
//! | `demo-lifecycle` | `com.example.lifecycle` | launch info, null field |
//! | `demo-track` | `com.example.analytics` | action name, context data |
//! | `demo-identity` | `com.example.identity` | id list |
//!
//! They arrive deliberately out of timestamp order.

use serde_json::json;

use bridgeview_domain::event::Event;
use bridgeview_domain::time::EpochMillis;

/// 2024-01-01T12:00:00Z.
const BASE: EpochMillis = 1_704_110_400_000;

/// A small, varied set of events.
#[must_use]
pub fn demo_events() -> Vec<Event> {
    vec![
        Event::builder()
            .id("demo-track")
            .sequence_number(3)
            .client_id("demo-client")
            .vendor_name("com.example.analytics")
            .event_type("track")
            .timestamp(BASE + 2_250)
            .field("action", json!("add_to_cart"))
            .field("contextdata", json!({"sku": "A-100", "qty": 2}))
            .field("state", json!("checkout"))
            .build(),
        Event::builder()
            .id("demo-config")
            .sequence_number(1)
            .client_id("demo-client")
            .vendor_name("com.example.configuration")
            .event_type("configuration")
            .timestamp(BASE)
            .field("settings", json!({"privacy": "optedin", "batch": 10}))
            .field("version", json!("3.1.0"))
            .build(),
        Event::builder()
            .id("demo-identity")
            .sequence_number(4)
            .client_id("demo-client")
            .vendor_name("com.example.identity")
            .event_type("identity")
            .timestamp(BASE + 3_007)
            .field("ids", json!(["ecid:123", "email:hash"]))
            .field("state", json!("authenticated"))
            .build(),
        Event::builder()
            .id("demo-lifecycle")
            .sequence_number(2)
            .client_id("demo-client")
            .vendor_name("com.example.lifecycle")
            .event_type("lifecycle")
            .timestamp(BASE + 1_120)
            .field("launches", json!(5))
            .field("crashed", json!(false))
            .field("previous_session", json!(null))
            .build(),
    ]
}
