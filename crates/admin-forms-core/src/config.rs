use serde::Serialize;

pub const ACTIVITY_SELECTOR_ID: &str = "id_tipo_atividade";
pub const PART_REFERENCE_FIELD_ID: &str = "id_item_estoque_utilizado";
pub const SERIAL_NUMBER_FIELD_ID: &str = "id_novo_serial_number";
pub const FORM_ROW_CLASS: &str = "form-row";
pub const DEFAULT_GROUP_SEPARATOR: char = '.';

/// Activity tokens that allow a replacement part and serial to be recorded.
pub const PART_REPLACEMENT_TOKENS: [&str; 2] = ["TROCA", "SUBSTITUICAO"];

pub const ASSET_MASKED_FIELD_IDS: [&str; 4] = [
    "id_horas_totais",
    "id_total_arranques",
    "id_hora_motor_instalacao",
    "id_arranques_motor_instalacao",
];
pub const INVENTORY_MASKED_FIELD_IDS: [&str; 4] = [
    "id_quantidade",
    "id_minimo_seguranca",
    "id_vida_util_horas",
    "id_vida_util_arranques",
];
pub const MAINTENANCE_MASKED_FIELD_IDS: [&str; 1] = ["id_horimetro_na_execucao"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("gate needs at least one allowed selector token")]
    EmptyAllowedTokens,
    #[error("group separator {0:?} is a digit and would be stripped as data")]
    DigitSeparator(char),
    #[error("field id must not be empty ({0})")]
    EmptyFieldId(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateConfig {
    pub selector_id: String,
    pub reference_field_id: String,
    pub text_field_id: String,
    pub allowed_tokens: Vec<String>,
    pub row_class: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            selector_id: ACTIVITY_SELECTOR_ID.to_string(),
            reference_field_id: PART_REFERENCE_FIELD_ID.to_string(),
            text_field_id: SERIAL_NUMBER_FIELD_ID.to_string(),
            allowed_tokens: PART_REPLACEMENT_TOKENS
                .iter()
                .map(|token| token.to_string())
                .collect(),
            row_class: FORM_ROW_CLASS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskConfig {
    pub separator: char,
    pub field_ids: Vec<String>,
}

impl Default for MaskConfig {
    fn default() -> Self {
        let field_ids = ASSET_MASKED_FIELD_IDS
            .iter()
            .chain(INVENTORY_MASKED_FIELD_IDS.iter())
            .chain(MAINTENANCE_MASKED_FIELD_IDS.iter())
            .map(|id| id.to_string())
            .collect();
        Self {
            separator: DEFAULT_GROUP_SEPARATOR,
            field_ids,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormBehaviorConfig {
    pub gate: GateConfig,
    pub mask: MaskConfig,
}

impl FormBehaviorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gate.allowed_tokens.is_empty() {
            return Err(ConfigError::EmptyAllowedTokens);
        }
        if self.gate.selector_id.trim().is_empty() {
            return Err(ConfigError::EmptyFieldId("gate selector"));
        }
        if self.gate.reference_field_id.trim().is_empty() {
            return Err(ConfigError::EmptyFieldId("gate reference field"));
        }
        if self.gate.text_field_id.trim().is_empty() {
            return Err(ConfigError::EmptyFieldId("gate text field"));
        }
        if self.mask.separator.is_ascii_digit() {
            return Err(ConfigError::DigitSeparator(self.mask.separator));
        }
        if self.mask.field_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::EmptyFieldId("masked field"));
        }
        Ok(())
    }
}
