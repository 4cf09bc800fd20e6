//! Dependency gate for the part-replacement fields of a maintenance record.
//!
//! The policy half ([`gate_presentation`]) maps a selector value to a
//! [`GatePresentation`]; [`DependencyGate`] applies it to live controls.

use serde::Serialize;

use crate::config::GateConfig;
use crate::controls::FormControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOpacity {
    Full,
    Dimmed,
}

impl RowOpacity {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Full => "1",
            Self::Dimmed => "0.5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueReset {
    Keep,
    Clear,
    ClearAndNotify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldPresentation {
    pub disabled: bool,
    pub read_only: bool,
    pub row_opacity: RowOpacity,
    pub reset: ValueReset,
}

impl FieldPresentation {
    pub const EDITABLE: Self = Self {
        disabled: false,
        read_only: false,
        row_opacity: RowOpacity::Full,
        reset: ValueReset::Keep,
    };

    /// Reset runs first so a stale value is never left behind a locked field.
    pub fn apply_to<C: FormControl + ?Sized>(&self, control: &C) {
        match self.reset {
            ValueReset::Keep => {}
            ValueReset::Clear => control.clear_value(),
            ValueReset::ClearAndNotify => {
                control.clear_value();
                control.dispatch_change();
            }
        }
        control.set_disabled(self.disabled);
        control.set_read_only(self.read_only);
        control.set_row_opacity(self.row_opacity);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    Unlocked,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GatePresentation {
    pub decision: GateDecision,
    /// Search-backed part selector.
    pub reference: FieldPresentation,
    /// Free-text serial number.
    pub text: FieldPresentation,
}

impl GatePresentation {
    pub const UNLOCKED: Self = Self {
        decision: GateDecision::Unlocked,
        reference: FieldPresentation::EDITABLE,
        text: FieldPresentation::EDITABLE,
    };

    // The serial stays read-only rather than disabled; the part selector is
    // disabled outright.
    pub const LOCKED: Self = Self {
        decision: GateDecision::Locked,
        reference: FieldPresentation {
            disabled: true,
            read_only: false,
            row_opacity: RowOpacity::Dimmed,
            reset: ValueReset::ClearAndNotify,
        },
        text: FieldPresentation {
            disabled: false,
            read_only: true,
            row_opacity: RowOpacity::Dimmed,
            reset: ValueReset::Clear,
        },
    };
}

pub fn permits_part_entry<S: AsRef<str>>(value: &str, allowed_tokens: &[S]) -> bool {
    allowed_tokens.iter().any(|token| token.as_ref() == value)
}

/// `None` means the selector is not on the page, which locks the fields.
pub fn gate_presentation(value: Option<&str>, config: &GateConfig) -> GatePresentation {
    match value {
        Some(value) if permits_part_entry(value, &config.allowed_tokens) => {
            GatePresentation::UNLOCKED
        }
        _ => GatePresentation::LOCKED,
    }
}

#[derive(Debug)]
pub struct DependencyGate<C> {
    config: GateConfig,
    selector: Option<C>,
    reference: Option<C>,
    text: Option<C>,
}

impl<C: FormControl> DependencyGate<C> {
    pub fn new(
        config: GateConfig,
        selector: Option<C>,
        reference: Option<C>,
        text: Option<C>,
    ) -> Self {
        Self {
            config,
            selector,
            reference,
            text,
        }
    }

    pub fn selector(&self) -> Option<&C> {
        self.selector.as_ref()
    }

    pub fn has_selector(&self) -> bool {
        self.selector.is_some()
    }

    pub fn has_reference(&self) -> bool {
        self.reference.is_some()
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    /// Recomputes the presentation from the selector's current value and
    /// pushes it to both dependent controls.
    pub fn refresh(&self) -> GatePresentation {
        let value = self.selector.as_ref().map(FormControl::value);
        let presentation = gate_presentation(value.as_deref(), &self.config);
        tracing::debug!(
            selector = value.as_deref().unwrap_or("<absent>"),
            decision = ?presentation.decision,
            "dependency gate refreshed"
        );
        if let Some(reference) = self.reference.as_ref() {
            presentation.reference.apply_to(reference);
        }
        if let Some(text) = self.text.as_ref() {
            presentation.text.apply_to(text);
        }
        presentation
    }
}
