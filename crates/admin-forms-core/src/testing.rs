//! In-memory controls for exercising the behaviors off the browser.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::controls::{ControlLookup, FormControl};
use crate::gate::RowOpacity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlOp {
    SetValue(String),
    Clear,
    Disabled(bool),
    ReadOnly(bool),
    RowOpacity(RowOpacity),
    DispatchChange,
    ForceTextInput,
}

#[derive(Debug)]
pub struct FakeControl {
    value: RefCell<String>,
    input_type: RefCell<String>,
    disabled: Cell<bool>,
    read_only: Cell<bool>,
    row_opacity: Cell<Option<RowOpacity>>,
    change_notifications: Cell<u32>,
    ops: RefCell<Vec<ControlOp>>,
}

impl Default for FakeControl {
    fn default() -> Self {
        Self::with_value("")
    }
}

impl FakeControl {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(value.to_string()),
            input_type: RefCell::new("text".to_string()),
            disabled: Cell::new(false),
            read_only: Cell::new(false),
            row_opacity: Cell::new(None),
            change_notifications: Cell::new(0),
            ops: RefCell::new(Vec::new()),
        }
    }

    pub fn numeric(value: &str) -> Self {
        let control = Self::with_value(value);
        control.input_type.replace("number".to_string());
        control
    }

    /// Simulates the user editing the field, without recording an op.
    pub fn type_text(&self, value: &str) {
        self.value.replace(value.to_string());
    }

    pub fn input_type(&self) -> String {
        self.input_type.borrow().clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.get()
    }

    pub fn row_opacity(&self) -> Option<RowOpacity> {
        self.row_opacity.get()
    }

    pub fn change_notifications(&self) -> u32 {
        self.change_notifications.get()
    }

    pub fn take_ops(&self) -> Vec<ControlOp> {
        std::mem::take(&mut *self.ops.borrow_mut())
    }

    fn record(&self, op: ControlOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl FormControl for FakeControl {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        self.value.replace(value.to_string());
        self.record(ControlOp::SetValue(value.to_string()));
    }

    fn clear_value(&self) {
        self.value.borrow_mut().clear();
        self.record(ControlOp::Clear);
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
        self.record(ControlOp::Disabled(disabled));
    }

    fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
        self.record(ControlOp::ReadOnly(read_only));
    }

    fn set_row_opacity(&self, opacity: RowOpacity) {
        self.row_opacity.set(Some(opacity));
        self.record(ControlOp::RowOpacity(opacity));
    }

    fn dispatch_change(&self) {
        self.change_notifications
            .set(self.change_notifications.get().saturating_add(1));
        self.record(ControlOp::DispatchChange);
    }

    fn force_text_input(&self) {
        self.input_type.replace("text".to_string());
        self.record(ControlOp::ForceTextInput);
    }
}

/// A page made of [`FakeControl`]s keyed by element id.
#[derive(Debug, Default)]
pub struct FakePage {
    controls: BTreeMap<String, Rc<FakeControl>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, control: FakeControl) -> Rc<FakeControl> {
        let control = Rc::new(control);
        self.controls.insert(id.to_string(), Rc::clone(&control));
        control
    }

    pub fn get(&self, id: &str) -> Option<Rc<FakeControl>> {
        self.controls.get(id).cloned()
    }
}

impl ControlLookup for FakePage {
    type Control = Rc<FakeControl>;

    fn find(&self, id: &str) -> Option<Self::Control> {
        self.get(id)
    }
}
