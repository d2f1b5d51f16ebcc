//! Reactive state channel.

use core::fmt;

use nami::{Binding, Signal};
use serde_json::Value;
use temporal_picker_core::{ChangeHandler, StateChannel, Subscription, SyncError};

/// Connects a picker to a reactive two-way [`Binding`], e.g. one field of a
/// form model.
///
/// Every change to the binding is forwarded to subscribers, including the
/// picker's own writes; pickers skip those echoes.
///
/// ```
/// use nami::Signal;
/// use serde_json::json;
/// use temporal_picker::{BindingChannel, TemporalPicker, YearPicker};
///
/// let field = nami::binding(json!(null));
/// let mut picker = YearPicker::new("founded").range(2000, 2030).mount(BindingChannel::new(&field));
///
/// picker.toggle(2024);
/// assert_eq!(field.get(), json!(2024));
///
/// field.set(json!(2027));
/// picker.sync_external();
/// assert!(picker.is_selected(2027));
/// ```
#[derive(Clone)]
pub struct BindingChannel {
    binding: Binding<Value>,
}

impl BindingChannel {
    /// Wraps a clone of `binding`.
    #[must_use]
    pub fn new(binding: &Binding<Value>) -> Self {
        Self {
            binding: binding.clone(),
        }
    }

    /// The wrapped binding.
    #[must_use]
    pub const fn binding(&self) -> &Binding<Value> {
        &self.binding
    }
}

impl fmt::Debug for BindingChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingChannel")
            .field("value", &self.binding.get())
            .finish()
    }
}

impl From<Binding<Value>> for BindingChannel {
    fn from(binding: Binding<Value>) -> Self {
        Self { binding }
    }
}

impl StateChannel for BindingChannel {
    fn read(&self) -> Result<Value, SyncError> {
        Ok(self.binding.get())
    }

    fn write(&self, value: Value) -> Result<(), SyncError> {
        self.binding.set(value);
        Ok(())
    }

    fn subscribe(&self, handler: ChangeHandler) -> Subscription {
        let guard = self
            .binding
            .watch(move |context| handler(context.into_value()));
        Subscription::new(guard)
    }
}
