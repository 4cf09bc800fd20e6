use admin_forms_core::config::{
    ACTIVITY_SELECTOR_ID, PART_REFERENCE_FIELD_ID, SERIAL_NUMBER_FIELD_ID,
};
use admin_forms_core::testing::{FakeControl, FakePage};
use admin_forms_core::{
    FormBehaviorConfig, FormControl, GateDecision, RowOpacity, attach_form_behaviors,
    parse_masked_integer,
};

fn maintenance_page(activity: &str) -> FakePage {
    let mut page = FakePage::new();
    page.insert(ACTIVITY_SELECTOR_ID, FakeControl::with_value(activity));
    page.insert(PART_REFERENCE_FIELD_ID, FakeControl::with_value("118"));
    page.insert(SERIAL_NUMBER_FIELD_ID, FakeControl::with_value("BR-44"));
    page.insert("id_horimetro_na_execucao", FakeControl::numeric("45210"));
    page
}

#[test]
fn editing_a_replacement_record_starts_unlocked() -> anyhow::Result<()> {
    let page = maintenance_page("SUBSTITUICAO");
    let attached = attach_form_behaviors(&FormBehaviorConfig::default(), &page)?;

    let reference = page
        .get(PART_REFERENCE_FIELD_ID)
        .ok_or_else(|| anyhow::anyhow!("reference control missing"))?;
    let serial = page
        .get(SERIAL_NUMBER_FIELD_ID)
        .ok_or_else(|| anyhow::anyhow!("serial control missing"))?;

    assert_eq!(attached.report().initial_decision, GateDecision::Unlocked);
    assert!(!reference.is_disabled());
    assert!(!serial.is_read_only());
    assert_eq!(reference.value(), "118");
    assert_eq!(serial.value(), "BR-44");
    assert_eq!(serial.row_opacity(), Some(RowOpacity::Full));
    Ok(())
}

#[test]
fn switching_to_inspection_clears_then_locks() -> anyhow::Result<()> {
    let page = maintenance_page("TROCA");
    let attached = attach_form_behaviors(&FormBehaviorConfig::default(), &page)?;

    let selector = page
        .get(ACTIVITY_SELECTOR_ID)
        .ok_or_else(|| anyhow::anyhow!("selector missing"))?;
    let reference = page
        .get(PART_REFERENCE_FIELD_ID)
        .ok_or_else(|| anyhow::anyhow!("reference control missing"))?;
    let serial = page
        .get(SERIAL_NUMBER_FIELD_ID)
        .ok_or_else(|| anyhow::anyhow!("serial control missing"))?;

    selector.type_text("INSPECAO");
    assert_eq!(attached.on_selector_change(), GateDecision::Locked);

    assert_eq!(reference.value(), "");
    assert!(reference.is_disabled());
    assert_eq!(reference.change_notifications(), 1);
    assert_eq!(serial.value(), "");
    assert!(serial.is_read_only());
    assert_eq!(reference.row_opacity(), Some(RowOpacity::Dimmed));
    assert_eq!(serial.row_opacity(), Some(RowOpacity::Dimmed));

    selector.type_text("TROCA");
    assert_eq!(attached.on_selector_change(), GateDecision::Unlocked);
    assert!(!reference.is_disabled());
    assert_eq!(reference.row_opacity(), Some(RowOpacity::Full));
    Ok(())
}

#[test]
fn typing_into_a_masked_field_keeps_grouping_consistent() -> anyhow::Result<()> {
    let page = maintenance_page("INSPECAO");
    let attached = attach_form_behaviors(&FormBehaviorConfig::default(), &page)?;
    let hours = page
        .get("id_horimetro_na_execucao")
        .ok_or_else(|| anyhow::anyhow!("hour meter missing"))?;

    assert_eq!(hours.input_type(), "text");
    assert_eq!(hours.value(), "45.210");

    hours.type_text("45.2107");
    assert_eq!(attached.on_field_input("id_horimetro_na_execucao"), Some(true));
    assert_eq!(hours.value(), "452.107");

    hours.type_text("452.1x07");
    attached.on_field_input("id_horimetro_na_execucao");
    assert_eq!(hours.value(), "452.107");
    assert_eq!(parse_masked_integer(&hours.value())?, 452_107);
    Ok(())
}

#[test]
fn remask_all_reformats_fields_changed_behind_the_mask() -> anyhow::Result<()> {
    let mut page = FakePage::new();
    let quantity = page.insert("id_quantidade", FakeControl::numeric(""));
    let minimum = page.insert("id_minimo_seguranca", FakeControl::numeric("10"));
    let attached = attach_form_behaviors(&FormBehaviorConfig::default(), &page)?;

    quantity.type_text("1500");
    minimum.type_text("20");
    assert_eq!(attached.remask_all(), 1);
    assert_eq!(quantity.value(), "1.500");
    assert_eq!(minimum.value(), "20");
    Ok(())
}

#[test]
fn attach_report_serializes_for_diagnostics() -> anyhow::Result<()> {
    let page = maintenance_page("AJUSTE");
    let attached = attach_form_behaviors(&FormBehaviorConfig::default(), &page)?;
    let json = serde_json::to_value(attached.report())?;

    assert_eq!(json["initial_decision"], "locked");
    assert_eq!(json["gate"]["selector"], true);
    assert_eq!(json["masked_fields"][0], "id_horimetro_na_execucao");
    assert_eq!(json["reformatted_on_attach"], 1);
    Ok(())
}
