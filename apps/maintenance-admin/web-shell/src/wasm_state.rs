use admin_forms_core::{AttachReport, FormBehaviorConfig, GateDecision};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ShellPhase {
    Booting,
    WaitingForDom,
    Attached,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ShellDiagnostics {
    pub(crate) phase: ShellPhase,
    pub(crate) detail: String,
    pub(crate) last_error: Option<String>,
    pub(crate) config: FormBehaviorConfig,
    pub(crate) attach: Option<AttachReport>,
    pub(crate) last_decision: Option<GateDecision>,
    pub(crate) selector_changes: u64,
    pub(crate) field_inputs: u64,
    pub(crate) field_rewrites: u64,
    pub(crate) listener_failures: u64,
}

impl Default for ShellDiagnostics {
    fn default() -> Self {
        Self {
            phase: ShellPhase::Booting,
            detail: String::new(),
            last_error: None,
            config: FormBehaviorConfig::default(),
            attach: None,
            last_decision: None,
            selector_changes: 0,
            field_inputs: 0,
            field_rewrites: 0,
            listener_failures: 0,
        }
    }
}

impl ShellDiagnostics {
    pub(crate) fn set_phase(&mut self, phase: ShellPhase, detail: &str) {
        self.phase = phase;
        self.detail = detail.to_string();
        if phase != ShellPhase::Error {
            self.last_error = None;
        }
    }

    pub(crate) fn set_error(&mut self, message: &str) {
        self.phase = ShellPhase::Error;
        self.detail = "attach failed".to_string();
        self.last_error = Some(message.to_string());
    }

    pub(crate) fn record_attach(&mut self, report: AttachReport) {
        self.last_decision = Some(report.initial_decision);
        self.attach = Some(report);
    }

    /// Marks the shell attached, noting any listener that failed to register.
    pub(crate) fn finish_attach(&mut self) {
        let (masked, skipped) = self.attach.as_ref().map_or((0, 0), |report| {
            (report.masked_fields.len(), report.skipped_fields.len())
        });
        let mut detail = format!("{masked} masked field(s), {skipped} skipped");
        if self.listener_failures > 0 {
            detail.push_str(&format!(", {} listener(s) failed", self.listener_failures));
        }
        self.set_phase(ShellPhase::Attached, &detail);
    }

    pub(crate) fn record_selector_change(&mut self, decision: GateDecision) {
        self.selector_changes = self.selector_changes.saturating_add(1);
        self.last_decision = Some(decision);
    }

    pub(crate) fn record_field_input(&mut self, rewritten: bool) {
        self.field_inputs = self.field_inputs.saturating_add(1);
        if rewritten {
            self.field_rewrites = self.field_rewrites.saturating_add(1);
        }
    }

    pub(crate) fn record_listener_failure(&mut self) {
        self.listener_failures = self.listener_failures.saturating_add(1);
    }

    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            "{\"phase\":\"error\",\"detail\":\"diagnostics serialization failed\"}".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_forms_core::GateBinding;

    #[test]
    fn error_then_phase_change_clears_last_error() {
        let mut diagnostics = ShellDiagnostics::default();
        diagnostics.set_error("document is unavailable");
        assert_eq!(diagnostics.phase, ShellPhase::Error);
        assert_eq!(
            diagnostics.last_error.as_deref(),
            Some("document is unavailable")
        );

        diagnostics.set_phase(ShellPhase::Attached, "behaviors bound");
        assert!(diagnostics.last_error.is_none());
    }

    #[test]
    fn counters_track_inputs_and_rewrites_separately() {
        let mut diagnostics = ShellDiagnostics::default();
        diagnostics.record_field_input(true);
        diagnostics.record_field_input(false);
        diagnostics.record_selector_change(GateDecision::Unlocked);
        assert_eq!(diagnostics.field_inputs, 2);
        assert_eq!(diagnostics.field_rewrites, 1);
        assert_eq!(diagnostics.selector_changes, 1);
        assert_eq!(diagnostics.last_decision, Some(GateDecision::Unlocked));
    }

    fn sample_report() -> AttachReport {
        AttachReport {
            gate: GateBinding {
                selector: true,
                reference: true,
                text: true,
            },
            initial_decision: GateDecision::Locked,
            masked_fields: vec!["id_quantidade".to_string()],
            skipped_fields: vec!["id_vida_util_horas".to_string()],
            reformatted_on_attach: 1,
        }
    }

    #[test]
    fn selector_listener_failure_still_finishes_attached() {
        let mut diagnostics = ShellDiagnostics::default();
        diagnostics.record_attach(sample_report());
        diagnostics.record_listener_failure();
        diagnostics.finish_attach();

        assert_eq!(diagnostics.phase, ShellPhase::Attached);
        assert_eq!(diagnostics.listener_failures, 1);
        assert_eq!(diagnostics.last_decision, Some(GateDecision::Locked));
        assert_eq!(
            diagnostics.detail,
            "1 masked field(s), 1 skipped, 1 listener(s) failed"
        );
        let masked = diagnostics
            .attach
            .as_ref()
            .map(|report| report.masked_fields.clone());
        assert_eq!(masked, Some(vec!["id_quantidade".to_string()]));
    }

    #[test]
    fn clean_attach_detail_omits_listener_failures() {
        let mut diagnostics = ShellDiagnostics::default();
        diagnostics.record_attach(sample_report());
        diagnostics.finish_attach();
        assert_eq!(diagnostics.detail, "1 masked field(s), 1 skipped");
    }

    #[test]
    fn json_exposes_phase_and_config() {
        let mut diagnostics = ShellDiagnostics::default();
        diagnostics.set_phase(ShellPhase::WaitingForDom, "document still loading");
        let value: serde_json::Value =
            serde_json::from_str(&diagnostics.to_json()).expect("valid json");
        assert_eq!(value["phase"], "waiting_for_dom");
        assert_eq!(value["config"]["gate"]["selector_id"], "id_tipo_atividade");
        assert_eq!(value["config"]["mask"]["separator"], ".");
    }
}
