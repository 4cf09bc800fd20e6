pub(crate) const SELECTOR_CHANGE_EVENT: &str = "change";
pub(crate) const FIELD_INPUT_EVENT: &str = "input";
pub(crate) const DOM_READY_EVENT: &str = "DOMContentLoaded";
pub(crate) const ROW_OPACITY_PROPERTY: &str = "opacity";
pub(crate) const TEXT_INPUT_TYPE: &str = "text";
