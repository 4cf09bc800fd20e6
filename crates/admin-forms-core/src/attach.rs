use serde::Serialize;

use crate::config::{ConfigError, FormBehaviorConfig};
use crate::controls::{ControlLookup, FormControl};
use crate::gate::{DependencyGate, GateDecision};
use crate::mask::IntegerMask;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GateBinding {
    pub selector: bool,
    pub reference: bool,
    pub text: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachReport {
    pub gate: GateBinding,
    pub initial_decision: GateDecision,
    pub masked_fields: Vec<String>,
    pub skipped_fields: Vec<String>,
    pub reformatted_on_attach: usize,
}

#[derive(Debug)]
pub struct MaskedField<C> {
    pub id: String,
    pub control: C,
}

/// Both behaviors bound to one page.
#[derive(Debug)]
pub struct AttachedBehaviors<C> {
    gate: DependencyGate<C>,
    mask: IntegerMask,
    masked: Vec<MaskedField<C>>,
    report: AttachReport,
}

impl<C: FormControl> AttachedBehaviors<C> {
    pub fn gate(&self) -> &DependencyGate<C> {
        &self.gate
    }

    pub fn masked_fields(&self) -> &[MaskedField<C>] {
        &self.masked
    }

    pub fn report(&self) -> &AttachReport {
        &self.report
    }

    pub fn on_selector_change(&self) -> GateDecision {
        self.gate.refresh().decision
    }

    /// Returns `None` when `id` is not a bound masked field.
    pub fn on_field_input(&self, id: &str) -> Option<bool> {
        self.masked
            .iter()
            .find(|field| field.id == id)
            .map(|field| self.mask.apply(&field.control))
    }

    pub fn remask_all(&self) -> usize {
        self.masked
            .iter()
            .filter(|field| self.mask.apply(&field.control))
            .count()
    }
}

/// Looks up every configured control, binds the mask to the fields that
/// exist and runs the gate once so it reflects the selector's initial value.
pub fn attach_form_behaviors<L: ControlLookup>(
    config: &FormBehaviorConfig,
    lookup: &L,
) -> Result<AttachedBehaviors<L::Control>, ConfigError> {
    config.validate()?;

    let gate = DependencyGate::new(
        config.gate.clone(),
        lookup.find(&config.gate.selector_id),
        lookup.find(&config.gate.reference_field_id),
        lookup.find(&config.gate.text_field_id),
    );
    let gate_binding = GateBinding {
        selector: gate.has_selector(),
        reference: gate.has_reference(),
        text: gate.has_text(),
    };
    let initial_decision = gate.refresh().decision;

    let mask = IntegerMask::new(config.mask.separator);
    let mut masked = Vec::with_capacity(config.mask.field_ids.len());
    let mut skipped_fields = Vec::new();
    let mut reformatted_on_attach = 0;
    for id in &config.mask.field_ids {
        let Some(control) = lookup.find(id) else {
            skipped_fields.push(id.clone());
            continue;
        };
        if mask.bind(&control) {
            reformatted_on_attach += 1;
        }
        masked.push(MaskedField {
            id: id.clone(),
            control,
        });
    }

    tracing::debug!(
        masked = masked.len(),
        skipped = skipped_fields.len(),
        selector = gate_binding.selector,
        "form behaviors attached"
    );

    let report = AttachReport {
        gate: gate_binding,
        initial_decision,
        masked_fields: masked.iter().map(|field| field.id.clone()).collect(),
        skipped_fields,
        reformatted_on_attach,
    };

    Ok(AttachedBehaviors {
        gate,
        mask,
        masked,
        report,
    })
}
