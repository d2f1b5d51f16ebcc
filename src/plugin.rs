//! Registration of the pickers with a host UI runtime.
//!
//! The host may come up after this library. Registration is attempted on
//! each lifecycle signal and on a bounded number of timed retries, and ends
//! in either [`RegistrationStatus::Registered`] or
//! [`RegistrationError::Exhausted`].

use core::time::Duration;

use temporal_picker_core::PickerKind;
use tracing::{debug, info, warn};

/// Identifier the pickers are registered under.
pub const PLUGIN_ID: &str = "temporal-picker";

/// The set of pickers contributed to a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalPickerPlugin {
    kinds: Vec<PickerKind>,
}

impl TemporalPickerPlugin {
    /// A plugin contributing every picker kind.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kinds: vec![
                PickerKind::Year,
                PickerKind::Month,
                PickerKind::Week,
                PickerKind::Weekday,
                PickerKind::DayOfMonth,
            ],
        }
    }

    /// Registration identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        PLUGIN_ID
    }

    /// Picker kinds the plugin contributes.
    #[must_use]
    pub fn kinds(&self) -> &[PickerKind] {
        &self.kinds
    }
}

impl Default for TemporalPickerPlugin {
    fn default() -> Self {
        Self::new()
    }
}

/// A UI runtime that pickers register with.
pub trait Host {
    /// Whether the runtime can accept registrations yet.
    fn is_ready(&self) -> bool;

    /// Registers `plugin`.
    ///
    /// # Errors
    ///
    /// [`HostError::NotReady`] when the runtime is not up yet, which is
    /// retried, or [`HostError::Rejected`], which is final.
    fn register(&mut self, plugin: &TemporalPickerPlugin) -> Result<(), HostError>;
}

/// Errors reported by a [`Host`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The runtime is not initialized yet.
    #[error("host runtime is not ready")]
    NotReady,
    /// The runtime refused the plugin.
    #[error("host rejected the plugin: {0}")]
    Rejected(String),
}

/// Final registration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Every lifecycle signal and retry passed without a ready host.
    #[error("host never became ready after {attempts} registration attempts")]
    Exhausted {
        /// Attempts made.
        attempts: u32,
    },
    /// The host refused the plugin.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Host lifecycle events that trigger a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    /// This library finished loading.
    ScriptLoaded,
    /// The host runtime announced its initialization.
    HostInit,
    /// The document finished loading.
    DocumentReady,
    /// A timed retry fired.
    RetryTick,
}

impl LifecycleSignal {
    const fn bit(self) -> u8 {
        match self {
            Self::ScriptLoaded => 1,
            Self::HostInit => 1 << 1,
            Self::DocumentReady => 1 << 2,
            Self::RetryTick => 0,
        }
    }
}

const ALL_LIFECYCLE: u8 = 0b111;

/// Outcome of a registration step that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    /// The plugin is registered.
    Registered,
    /// Not registered yet; more signals or retries may follow.
    Pending,
}

/// Bounded readiness wait for one plugin.
#[derive(Debug)]
pub struct Registration {
    plugin: TemporalPickerPlugin,
    max_retries: u32,
    retry_interval: Duration,
    retries: u32,
    attempts: u32,
    seen: u8,
    outcome: Option<Result<(), RegistrationError>>,
}

impl Registration {
    /// Default number of timed retries.
    pub const DEFAULT_MAX_RETRIES: u32 = 10;
    /// Default delay between timed retries.
    pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(100);

    /// Starts waiting to register `plugin`.
    #[must_use]
    pub const fn new(plugin: TemporalPickerPlugin) -> Self {
        Self {
            plugin,
            max_retries: Self::DEFAULT_MAX_RETRIES,
            retry_interval: Self::DEFAULT_RETRY_INTERVAL,
            retries: 0,
            attempts: 0,
            seen: 0,
            outcome: None,
        }
    }

    /// Number of [`LifecycleSignal::RetryTick`]s honoured.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Delay the host should leave between retry ticks.
    #[must_use]
    pub const fn retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }

    /// See [`Self::retry_interval`].
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.retry_interval
    }

    /// Registration attempts made so far.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the host still wants retry ticks.
    #[must_use]
    pub const fn wants_retry(&self) -> bool {
        self.outcome.is_none() && self.retries < self.max_retries
    }

    /// Handles one signal.
    ///
    /// Once registered, further signals are no-ops that report
    /// [`RegistrationStatus::Registered`]. Retry ticks beyond the limit are
    /// ignored.
    ///
    /// # Errors
    ///
    /// [`RegistrationError::Exhausted`] once every lifecycle signal has been
    /// seen and every retry spent without success, and
    /// [`RegistrationError::Host`] when the host rejects the plugin. Both are
    /// final and reported again for later signals.
    pub fn on_signal<H: Host>(
        &mut self,
        host: &mut H,
        signal: LifecycleSignal,
    ) -> Result<RegistrationStatus, RegistrationError> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone().map(|()| RegistrationStatus::Registered);
        }

        if signal == LifecycleSignal::RetryTick {
            if self.retries >= self.max_retries {
                return self.settle_if_spent();
            }
            self.retries += 1;
        }
        self.seen |= signal.bit();

        self.attempts += 1;
        match self.attempt(host) {
            Ok(()) => {
                info!(plugin = PLUGIN_ID, attempts = self.attempts, ?signal, "registered with host");
                self.outcome = Some(Ok(()));
                Ok(RegistrationStatus::Registered)
            }
            Err(HostError::NotReady) => {
                debug!(plugin = PLUGIN_ID, attempts = self.attempts, ?signal, "host not ready");
                self.settle_if_spent()
            }
            Err(err) => {
                warn!(plugin = PLUGIN_ID, %err, "host rejected registration");
                let err = RegistrationError::Host(err);
                self.outcome = Some(Err(err.clone()));
                Err(err)
            }
        }
    }

    /// Feeds `signals` in order until registration settles.
    ///
    /// # Errors
    ///
    /// See [`Self::on_signal`].
    pub fn drive<H: Host>(
        &mut self,
        host: &mut H,
        signals: impl IntoIterator<Item = LifecycleSignal>,
    ) -> Result<RegistrationStatus, RegistrationError> {
        let mut status = RegistrationStatus::Pending;
        for signal in signals {
            status = self.on_signal(host, signal)?;
            if status == RegistrationStatus::Registered {
                break;
            }
        }
        Ok(status)
    }

    fn attempt<H: Host>(&self, host: &mut H) -> Result<(), HostError> {
        if !host.is_ready() {
            return Err(HostError::NotReady);
        }
        host.register(&self.plugin)
    }

    fn settle_if_spent(&mut self) -> Result<RegistrationStatus, RegistrationError> {
        if self.seen == ALL_LIFECYCLE && self.retries >= self.max_retries {
            warn!(plugin = PLUGIN_ID, attempts = self.attempts, "giving up on host registration");
            let err = RegistrationError::Exhausted {
                attempts: self.attempts,
            };
            self.outcome = Some(Err(err.clone()));
            return Err(err);
        }
        Ok(RegistrationStatus::Pending)
    }
}
