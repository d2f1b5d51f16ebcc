//! The picker state machine.
//!
//! One machine owns one widget instance's selection and navigation state.
//! Every intent either applies completely or is a no-op, and every applied
//! mutation is followed by a write to the [`StateChannel`].

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    Mailbox, PickerConfig, PickerKind, PickerValue, RangeValue, Scalar, SelectionMode,
    StateChannel, Subscription, boundary, range,
    value::tidy_set,
    wire,
};

/// Direction of year navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One year back.
    Previous,
    /// One year forward.
    Next,
}

/// Mutable view model of a picker, owned by its [`PickerStateMachine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerUiState {
    is_open: bool,
    view_year: i32,
    hover: Option<Scalar>,
    value: PickerValue,
}

impl PickerUiState {
    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Navigation cursor, independent of the selection.
    #[must_use]
    pub const fn view_year(&self) -> i32 {
        self.view_year
    }

    /// Provisional range end under the pointer.
    #[must_use]
    pub const fn hover_preview(&self) -> Option<&Scalar> {
        self.hover.as_ref()
    }

    /// Current selection.
    #[must_use]
    pub const fn value(&self) -> &PickerValue {
        &self.value
    }
}

/// Selection and navigation state of one picker, synchronised with an
/// external owner through `C`.
pub struct PickerStateMachine<C> {
    config: PickerConfig,
    state: PickerUiState,
    channel: C,
    mailbox: Mailbox,
    _subscription: Subscription,
}

impl<C: StateChannel> PickerStateMachine<C> {
    /// Creates a machine seeded from the channel's current value and
    /// subscribed to its later changes.
    ///
    /// An unreadable channel seeds the empty value.
    pub fn mount(config: PickerConfig, channel: C) -> Self {
        let mailbox = Mailbox::default();
        let subscription = channel.subscribe(mailbox.handler());
        let external = channel.read().unwrap_or_else(|err| {
            warn!(kind = config.kind.as_str(), %err, "could not read picker state, starting empty");
            Value::Null
        });

        let state = PickerUiState {
            is_open: false,
            view_year: boundary::clamp_year(config.present_year, &config.bounds),
            hover: None,
            value: PickerValue::empty(config.mode),
        };
        let mut machine = Self {
            config,
            state,
            channel,
            mailbox,
            _subscription: subscription,
        };
        machine.initialize(&external);
        machine
    }

    /// Replaces the local value with `external`.
    ///
    /// The value is coerced into the mode's shape and cleared of disabled or
    /// out-of-bound members. In single mode the navigation cursor follows
    /// the value's year. Touches local state only.
    pub fn initialize(&mut self, external: &Value) {
        let mut value = wire::decode(external, &self.config);
        self.sanitize(&mut value);

        if let PickerValue::Single(Some(scalar)) = &value
            && let Some(year) = self.year_of(scalar)
        {
            self.state.view_year = boundary::clamp_year(year, &self.config.bounds);
        }
        self.state.value = value;
        self.state.hover = None;
    }

    /// Applies the newest externally changed value, if one arrived since the
    /// last call. Older queued values are discarded and echoes of our own
    /// writes are skipped. Returns whether the local value was replaced.
    pub fn sync_external(&mut self) -> bool {
        let Some(latest) = self.mailbox.take_latest() else {
            return false;
        };
        if latest == self.wire_value() {
            return false;
        }
        self.initialize(&latest);
        true
    }

    /// Selects or deselects `candidate`.
    ///
    /// Single mode replaces the value (or clears it when `candidate` is
    /// already selected) and closes the dropdown. Multiple mode flips
    /// membership. Range mode behaves like [`Self::select_in_range_mode`].
    pub fn toggle(&mut self, candidate: impl Into<Scalar>) -> bool {
        if !self.interactive() {
            return false;
        }
        let Some(candidate) = self.accept(candidate.into()) else {
            return false;
        };

        match &mut self.state.value {
            PickerValue::Single(current) => {
                *current = if current.as_ref() == Some(&candidate) {
                    None
                } else {
                    Some(candidate)
                };
                self.state.is_open = false;
            }
            PickerValue::Multiple(values) => {
                if let Some(index) = values.iter().position(|value| *value == candidate) {
                    values.remove(index);
                } else {
                    values.push(candidate);
                }
                tidy_set(values);
            }
            PickerValue::Range(_) => return self.apply_range(candidate),
        }
        self.commit();
        true
    }

    /// Feeds one click into the range selection.
    ///
    /// The dropdown closes once both ends are set. A failing write does not
    /// undo the local change.
    pub fn select_in_range_mode(&mut self, candidate: impl Into<Scalar>) -> bool {
        if !self.interactive() || self.config.mode != SelectionMode::Range {
            return false;
        }
        match self.accept(candidate.into()) {
            Some(candidate) => self.apply_range(candidate),
            None => false,
        }
    }

    /// Selects month `month` (1..=12) of the year under the cursor.
    ///
    /// Range pickers extend the range, multiple pickers toggle, single
    /// pickers replace the value and close.
    pub fn select_month(&mut self, month: u8) -> bool {
        let Some(candidate) = self.month_value(month) else {
            return false;
        };
        match self.config.mode {
            SelectionMode::Range => self.select_in_range_mode(candidate),
            SelectionMode::Multiple => self.toggle(candidate),
            SelectionMode::Single => {
                if !self.interactive() {
                    return false;
                }
                let Some(candidate) = self.accept(candidate) else {
                    return false;
                };
                self.state.value = PickerValue::Single(Some(candidate));
                self.commit();
                self.state.is_open = false;
                true
            }
        }
    }

    /// Empties the selection and closes the dropdown.
    pub fn clear(&mut self) -> bool {
        if !self.interactive() {
            return false;
        }
        self.state.value = PickerValue::empty(self.config.mode);
        self.state.hover = None;
        self.commit();
        self.state.is_open = false;
        true
    }

    /// Selects every listed option that is not disabled. Multiple mode only.
    pub fn select_all(&mut self) -> bool {
        if !self.interactive() || self.config.mode != SelectionMode::Multiple {
            return false;
        }
        let mut values: Vec<Scalar> = self
            .config
            .options()
            .iter()
            .map(|option| option.value.clone())
            .filter(|value| boundary::is_selectable(value, &self.config))
            .collect();
        tidy_set(&mut values);
        self.state.value = PickerValue::Multiple(values);
        self.commit();
        true
    }

    /// Empties the set. Multiple mode only.
    pub fn deselect_all(&mut self) -> bool {
        if !self.interactive() || self.config.mode != SelectionMode::Multiple {
            return false;
        }
        self.state.value = PickerValue::Multiple(Vec::new());
        self.commit();
        true
    }

    /// Moves the navigation cursor one year. A no-op past a year bound.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let bounds = &self.config.bounds;
        let next = match direction {
            Direction::Previous => self
                .state
                .view_year
                .checked_sub(1)
                .filter(|year| bounds.min_year.is_none_or(|min| *year >= min)),
            Direction::Next => self
                .state
                .view_year
                .checked_add(1)
                .filter(|year| bounds.max_year.is_none_or(|max| *year <= max)),
        };
        match next {
            Some(year) => {
                self.state.view_year = year;
                true
            }
            None => false,
        }
    }

    /// Updates the provisional range end. Only takes effect in range mode
    /// while the start is chosen and the end is not.
    pub fn set_hover_preview(&mut self, candidate: Option<Scalar>) -> bool {
        let pending = matches!(&self.state.value, PickerValue::Range(range) if range.is_pending());
        if !pending {
            return false;
        }
        let hover = candidate.and_then(|candidate| self.config.canonicalize(candidate));
        if hover == self.state.hover {
            return false;
        }
        self.state.hover = hover;
        true
    }

    /// Previews month `month` of the year under the cursor.
    pub fn hover_month(&mut self, month: u8) -> bool {
        let candidate = self.month_value(month);
        self.set_hover_preview(candidate)
    }

    /// Drops the preview when the pointer leaves the grid.
    pub fn leave_hover(&mut self) -> bool {
        self.state.hover.take().is_some()
    }

    /// Opens the dropdown. Disabled pickers stay closed.
    pub fn open(&mut self) -> bool {
        if self.config.disabled || self.state.is_open {
            return false;
        }
        self.state.is_open = true;
        true
    }

    /// Closes the dropdown.
    pub fn close(&mut self) -> bool {
        core::mem::replace(&mut self.state.is_open, false)
    }

    /// Flips the dropdown.
    pub fn toggle_open(&mut self) -> bool {
        if self.state.is_open { self.close() } else { self.open() }
    }

    /// Whether `candidate` is the value, a member, or a range end.
    #[must_use]
    pub fn is_selected(&self, candidate: impl Into<Scalar>) -> bool {
        let Some(candidate) = self.config.canonicalize(candidate.into()) else {
            return false;
        };
        match &self.state.value {
            PickerValue::Single(value) => value.as_ref() == Some(&candidate),
            PickerValue::Multiple(values) => values.contains(&candidate),
            PickerValue::Range(range) => {
                range.start() == Some(&candidate) || range.end() == Some(&candidate)
            }
        }
    }

    /// Whether `candidate` cannot be selected.
    #[must_use]
    pub fn is_disabled(&self, candidate: impl Into<Scalar>) -> bool {
        self.config
            .canonicalize(candidate.into())
            .is_none_or(|candidate| boundary::is_disabled(&candidate, &self.config))
    }

    /// Whether `candidate` lies strictly inside the range or hover preview.
    #[must_use]
    pub fn is_in_range(&self, candidate: impl Into<Scalar>) -> bool {
        let PickerValue::Range(range) = &self.state.value else {
            return false;
        };
        self.config
            .canonicalize(candidate.into())
            .is_some_and(|candidate| range::contains(range, self.state.hover.as_ref(), &candidate))
    }

    /// [`Self::is_selected`] for a month of the year under the cursor.
    #[must_use]
    pub fn is_month_selected(&self, month: u8) -> bool {
        self.month_value(month)
            .is_some_and(|value| self.is_selected(value))
    }

    /// [`Self::is_disabled`] for a month of the year under the cursor.
    #[must_use]
    pub fn is_month_disabled(&self, month: u8) -> bool {
        self.month_value(month)
            .is_none_or(|value| self.is_disabled(value))
    }

    /// [`Self::is_in_range`] for a month of the year under the cursor.
    #[must_use]
    pub fn is_month_in_range(&self, month: u8) -> bool {
        self.month_value(month)
            .is_some_and(|value| self.is_in_range(value))
    }

    /// Text for the closed trigger. Empty when nothing is selected.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.state.value {
            PickerValue::Single(None) => String::new(),
            PickerValue::Single(Some(value)) => self.label(value),
            PickerValue::Multiple(values) => values
                .iter()
                .map(|value| self.label(value))
                .collect::<Vec<_>>()
                .join(", "),
            PickerValue::Range(range) => match (range.start(), range.end()) {
                (Some(start), Some(end)) => format!("{start} → {end}"),
                (Some(start), None) => start.to_string(),
                _ => String::new(),
            },
        }
    }

    /// Full view model.
    #[must_use]
    pub const fn state(&self) -> &PickerUiState {
        &self.state
    }

    /// Current selection.
    #[must_use]
    pub const fn value(&self) -> &PickerValue {
        &self.state.value
    }

    /// Current selection in storage form.
    #[must_use]
    pub fn wire_value(&self) -> Value {
        wire::encode(&self.state.value, &self.config.range_keys)
    }

    /// Configuration the machine was mounted with.
    #[must_use]
    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The external state channel.
    #[must_use]
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    fn interactive(&self) -> bool {
        if !self.config.is_interactive() {
            debug!(kind = self.config.kind.as_str(), "ignoring intent on a disabled or read-only picker");
            return false;
        }
        true
    }

    fn accept(&self, candidate: Scalar) -> Option<Scalar> {
        let Some(canonical) = self.config.canonicalize(candidate.clone()) else {
            debug!(kind = self.config.kind.as_str(), %candidate, "ignoring candidate outside the domain");
            return None;
        };
        if boundary::is_disabled(&canonical, &self.config) {
            debug!(kind = self.config.kind.as_str(), %canonical, "ignoring disabled candidate");
            return None;
        }
        Some(canonical)
    }

    fn apply_range(&mut self, candidate: Scalar) -> bool {
        let PickerValue::Range(current) = &self.state.value else {
            return false;
        };
        let next = range::advance(current.clone(), candidate);
        let complete = next.is_complete();
        self.state.value = PickerValue::Range(next);
        self.state.hover = None;
        self.commit();
        if complete {
            self.state.is_open = false;
        }
        true
    }

    fn commit(&self) {
        if let Err(err) = self.channel.write(self.wire_value()) {
            warn!(kind = self.config.kind.as_str(), %err, "failed to write picker state, keeping local selection");
        }
    }

    fn sanitize(&self, value: &mut PickerValue) {
        let selectable = |scalar: &Scalar| boundary::is_selectable(scalar, &self.config);
        let before = value.members().count();
        match value {
            PickerValue::Single(scalar) => {
                if scalar.as_ref().is_some_and(|scalar| !selectable(scalar)) {
                    *scalar = None;
                }
            }
            PickerValue::Multiple(values) => {
                values.retain(|scalar| selectable(scalar));
                tidy_set(values);
            }
            PickerValue::Range(range) => {
                let start = range.start().filter(|scalar| selectable(*scalar)).cloned();
                let end = range.end().filter(|scalar| selectable(*scalar)).cloned();
                *range = RangeValue::new(start, end);
            }
        }
        let dropped = before - value.members().count();
        if dropped > 0 {
            debug!(kind = self.config.kind.as_str(), dropped, "dropped unselectable members from external state");
        }
    }

    fn label(&self, value: &Scalar) -> String {
        self.config
            .label_for(value)
            .map_or_else(|| value.to_string(), ToString::to_string)
    }

    fn month_value(&self, month: u8) -> Option<Scalar> {
        (1..=12)
            .contains(&month)
            .then(|| Scalar::Text(format!("{:04}-{month:02}", self.state.view_year)))
    }

    fn year_of(&self, scalar: &Scalar) -> Option<i32> {
        match self.config.kind {
            PickerKind::Year | PickerKind::Month | PickerKind::Week => scalar.year_component(),
            PickerKind::Weekday | PickerKind::DayOfMonth => None,
        }
    }
}

impl<C> core::fmt::Debug for PickerStateMachine<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PickerStateMachine")
            .field("kind", &self.config.kind)
            .field("mode", &self.config.mode)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
