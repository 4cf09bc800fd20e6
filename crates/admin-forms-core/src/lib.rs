//! Form behaviors for the maintenance admin: the part-replacement gate and the
//! integer input mask, kept free of any browser dependency so they can be
//! driven from the wasm shell or from host tests alike.

pub mod attach;
pub mod config;
pub mod controls;
pub mod gate;
pub mod mask;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use attach::{
    AttachReport, AttachedBehaviors, GateBinding, MaskedField, attach_form_behaviors,
};
pub use config::{ConfigError, FormBehaviorConfig, GateConfig, MaskConfig};
pub use controls::{ControlLookup, FormControl};
pub use gate::{
    DependencyGate, FieldPresentation, GateDecision, GatePresentation, RowOpacity, ValueReset,
    gate_presentation, permits_part_entry,
};
pub use mask::{
    IntegerMask, MaskError, group_digits, mask_integer, parse_masked_integer, strip_to_digits,
};
