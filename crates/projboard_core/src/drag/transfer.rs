//! Transfer payload and drag event values.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Payload type for project ids.
pub const TEXT_PLAIN: &str = "text/plain";

/// Operations a drag source allows on its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectAllowed {
    None,
    Copy,
    CopyLink,
    CopyMove,
    Link,
    LinkMove,
    Move,
    All,
    #[default]
    Uninitialized,
}

impl EffectAllowed {
    /// Stable string id used by host toolkits.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::CopyLink => "copyLink",
            Self::CopyMove => "copyMove",
            Self::Link => "link",
            Self::LinkMove => "linkMove",
            Self::Move => "move",
            Self::All => "all",
            Self::Uninitialized => "uninitialized",
        }
    }

    pub fn parse(value: &str) -> Result<Self, EffectAllowedError> {
        match value.trim() {
            "none" => Ok(Self::None),
            "copy" => Ok(Self::Copy),
            "copyLink" => Ok(Self::CopyLink),
            "copyMove" => Ok(Self::CopyMove),
            "link" => Ok(Self::Link),
            "linkMove" => Ok(Self::LinkMove),
            "move" => Ok(Self::Move),
            "all" => Ok(Self::All),
            "uninitialized" => Ok(Self::Uninitialized),
            other => Err(EffectAllowedError::Unsupported(other.to_string())),
        }
    }

    /// Whether a move operation is permitted.
    pub fn allows_move(self) -> bool {
        matches!(
            self,
            Self::Move | Self::CopyMove | Self::LinkMove | Self::All | Self::Uninitialized
        )
    }
}

/// Effect parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectAllowedError {
    Unsupported(String),
}

impl Display for EffectAllowedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(value) => write!(f, "drag effect is unsupported: {value}"),
        }
    }
}

impl Error for EffectAllowedError {}

/// Typed key/value payload carried by one drag operation.
///
/// Types keep insertion order; `types()[0]` is what drop targets inspect
/// during drag-over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    items: Vec<(String, String)>,
    pub effect_allowed: EffectAllowed,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing an existing value in place.
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let data = data.into();
        match self.items.iter_mut().find(|(key, _)| key == format) {
            Some((_, value)) => *value = data,
            None => self.items.push((format.to_string(), data)),
        }
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(key, _)| key == format)
            .map(|(_, value)| value.as_str())
    }

    /// Declared payload types in insertion order.
    pub fn types(&self) -> Vec<&str> {
        self.items.iter().map(|(key, _)| key.as_str()).collect()
    }
}

/// One drag lifecycle event delivered to a source or target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragEvent {
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    /// Event with an empty transfer payload, as delivered on drag start.
    pub fn new() -> Self {
        Self {
            data_transfer: Some(DataTransfer::new()),
            default_prevented: false,
        }
    }

    /// Event carrying an existing payload, as delivered to drop targets.
    pub fn with_transfer(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    /// Event without any payload.
    pub fn without_transfer() -> Self {
        Self::default()
    }

    /// Marks the drag as accepted by the current target.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether the first declared payload type is `format`.
    pub fn first_type_is(&self, format: &str) -> bool {
        self.data_transfer
            .as_ref()
            .and_then(|transfer| transfer.types().first().copied())
            == Some(format)
    }
}

#[cfg(test)]
mod tests {
    use super::{DataTransfer, DragEvent, EffectAllowed, EffectAllowedError, TEXT_PLAIN};

    #[test]
    fn set_data_replaces_in_place_and_keeps_order() {
        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, "first");
        transfer.set_data("text/uri-list", "https://example.invalid");
        transfer.set_data(TEXT_PLAIN, "second");

        assert_eq!(transfer.types(), vec![TEXT_PLAIN, "text/uri-list"]);
        assert_eq!(transfer.get_data(TEXT_PLAIN), Some("second"));
        assert_eq!(transfer.get_data("text/html"), None);
    }

    #[test]
    fn first_type_is_checks_only_the_leading_type() {
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/html", "<b>x</b>");
        transfer.set_data(TEXT_PLAIN, "x");
        assert!(!DragEvent::with_transfer(transfer).first_type_is(TEXT_PLAIN));
        assert!(!DragEvent::without_transfer().first_type_is(TEXT_PLAIN));
    }

    #[test]
    fn effect_allowed_parses_host_strings() {
        assert_eq!(
            EffectAllowed::parse("move").expect("move parse"),
            EffectAllowed::Move
        );
        assert_eq!(
            EffectAllowed::parse("copyMove").expect("copyMove parse"),
            EffectAllowed::CopyMove
        );
        assert_eq!(
            EffectAllowed::parse("teleport").expect_err("unknown effect must fail"),
            EffectAllowedError::Unsupported("teleport".to_string())
        );
        assert!(EffectAllowed::Move.allows_move());
        assert!(!EffectAllowed::Copy.allows_move());
    }
}
