//! # temporal-picker-core
//!
//! UI-agnostic state for year, month, week, weekday and day-of-month
//! pickers: the selection state machine, the boundary policy that decides
//! what is selectable, and the range arithmetic behind two-click ranges.
//!
//! ## Data flow
//!
//! ```text
//! external owner ──read──▶ PickerStateMachine::mount / initialize
//!        ▲                        │
//!        │                 intent (toggle, select, navigate, hover)
//!        │                        │
//!        │               boundary + range validate & compute
//!        │                        │
//!        └──────write──── local value committed
//! ```
//!
//! External changes are queued by the channel subscription and applied with
//! [`PickerStateMachine::sync_external`].
//!
//! ## Quick start
//!
//! ```
//! use serde_json::json;
//! use temporal_picker_core::{MemoryChannel, PickerConfig, PickerKind, PickerOption, PickerStateMachine};
//!
//! let config = PickerConfig::builder(PickerKind::DayOfMonth)
//!     .multiple()
//!     .options((1..=31).map(|day| PickerOption::new(day, day.to_string())))
//!     .disabled_values([13])
//!     .build();
//! let record = MemoryChannel::new(json!([]));
//! let mut picker = PickerStateMachine::mount(config, record.clone());
//!
//! picker.toggle(13);
//! picker.toggle(14);
//! assert!(!picker.is_selected(13));
//! assert_eq!(picker.display_text(), "14");
//! assert_eq!(record.get(), json!([14]));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `scalar` | Scalar values and canonicalization |
//! | `value` | Mode-shaped selection values |
//! | `config` | Immutable configuration and builder |
//! | `boundary` | Selectability predicate |
//! | `range` | Range ordering, preview and interval tests |
//! | `wire` | Storage format |
//! | `sync` | External state channel |
//! | `machine` | The picker state machine |
//! | `error` | Error types |

extern crate alloc;

pub mod boundary;
mod config;
mod error;
mod machine;
pub mod range;
mod scalar;
mod sync;
mod value;
pub mod wire;

pub use config::{Bounds, Domain, PickerConfig, PickerConfigBuilder, PickerKind, PickerOption, RangeKeys};
pub use error::{ConfigError, SyncError};
pub use machine::{Direction, PickerStateMachine, PickerUiState};
pub use scalar::{Scalar, ValueKind};
pub use sync::{ChangeHandler, Mailbox, MemoryChannel, StateChannel, Subscription};
pub use value::{PickerValue, RangeValue, SelectionMode};
