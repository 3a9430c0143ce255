//! Incoming voice-platform request envelope.
//!
//! Mirrors the JSON the voice platform posts to the skill endpoint. Every
//! nested field is optional because devices and request kinds populate
//! different subsets of the envelope.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Slot name carrying the spoken movie title.
pub const MOVIE_NAME_SLOT: &str = "movieName";

/// Slot name carrying the spoken release date.
pub const RELEASE_DATE_SLOT: &str = "releaseDate";

/// The request envelope received from the voice platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillRequest {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: RequestBody,
}

/// Session block of the envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: HashMap<String, Value>,
}

/// Identifies the skill the request was routed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// Device context block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: Option<SystemContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemContext {
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub device: Option<Device>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub supported_interfaces: Option<SupportedInterfaces>,
}

/// Interfaces the invoking device declares. Kept as raw JSON because the
/// platform signals support by presence of a (possibly empty) object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportedInterfaces {
    #[serde(rename = "Display", default)]
    pub display: Option<Value>,
}

/// Kind of request inside the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    LaunchRequest,
    IntentRequest,
    SessionEndedRequest,
    #[serde(other)]
    Other,
}

/// The `request` block of the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<Intent>,
}

impl Default for RequestBody {
    fn default() -> Self {
        Self {
            kind: RequestKind::IntentRequest,
            request_id: None,
            locale: None,
            intent: None,
        }
    }
}

/// A resolved intent with its slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: HashMap<String, Slot>,
}

/// A single slot. `value` is absent when the user did not fill it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[cfg(test)]
impl SkillRequest {
    /// Creates an intent request with no slots and no device context.
    pub fn intent(name: impl Into<String>) -> Self {
        Self {
            request: RequestBody {
                intent: Some(Intent {
                    name: name.into(),
                    slots: HashMap::new(),
                }),
                ..RequestBody::default()
            },
            ..Self::default()
        }
    }

    /// Adds a filled slot.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if let Some(intent) = self.request.intent.as_mut() {
            intent.slots.insert(
                name.clone(),
                Slot {
                    name,
                    value: Some(value.into()),
                },
            );
        }
        self
    }

    /// Sets a session attribute as if the platform had echoed it back.
    pub fn with_session_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.session
            .get_or_insert_with(Session::default)
            .attributes
            .insert(key.into(), value);
        self
    }

    /// Marks the invoking device as display-capable.
    pub fn with_display(mut self) -> Self {
        self.context = Some(Context {
            system: Some(SystemContext {
                application: None,
                device: Some(Device {
                    device_id: None,
                    supported_interfaces: Some(SupportedInterfaces {
                        display: Some(Value::Object(Default::default())),
                    }),
                }),
            }),
        });
        self
    }
}

impl SkillRequest {
    /// Name of the resolved intent, if this is an intent request.
    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent.as_ref().map(|i| i.name.as_str())
    }

    /// Value of a named slot. An empty value counts as absent.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.request
            .intent
            .as_ref()
            .and_then(|i| i.slots.get(name))
            .and_then(|s| s.value.as_deref())
            .filter(|v| !v.is_empty())
    }

    /// Session attribute sent back by the platform.
    pub fn session_attribute(&self, key: &str) -> Option<&Value> {
        self.session.as_ref().and_then(|s| s.attributes.get(key))
    }

    /// Application id from the session block, falling back to the context block.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .or_else(|| {
                self.context
                    .as_ref()
                    .and_then(|c| c.system.as_ref())
                    .and_then(|s| s.application.as_ref())
            })
            .map(|a| a.application_id.as_str())
    }

    /// Whether the invoking device can render a visual display.
    ///
    /// Every level of `context.System.device.supportedInterfaces.Display`
    /// must be present, and the final value must be truthy.
    pub fn has_display(&self) -> bool {
        self.context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.device.as_ref())
            .and_then(|d| d.supported_interfaces.as_ref())
            .and_then(|i| i.display.as_ref())
            .is_some_and(is_truthy)
    }
}

/// The platform sends `null` for empty maps on some request kinds.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
