//! Inline date/time and countdown pickers for alert dialogs.
//!
//! This crate adds two attachment points to an alert dialog body: a
//! date/time picker (date, time, or combined mode) and a countdown-duration
//! picker. The picker is embedded inline in the alert's content area at a
//! fixed height, and user-driven value changes are forwarded synchronously
//! to a caller-supplied callback.
//!
//! # Usage
//!
//! Augment an [`alert::AlertArgs`] through [`alert::AlertPickersExt`] and
//! render it as the dialog content of
//! `tessera_components::dialog::dialog_provider`:
//!
//! ```no_run
//! # use tessera_ui::tessera;
//! # #[tessera]
//! # fn component() {
//! use tessera_alert_pickers::{
//!     alert::{AlertArgs, AlertPickersExt, alert},
//!     picker_host::DateTimeMode,
//! };
//! use tessera_ui::CallbackWith;
//!
//! alert(
//!     &AlertArgs::default()
//!         .title("Remind me at")
//!         .add_date_picker(
//!             DateTimeMode::DateAndTime,
//!             None,
//!             None,
//!             None,
//!             Some(CallbackWith::new(|value| {
//!                 tracing::debug!(?value, "picked");
//!             })),
//!         ),
//! );
//! # }
//! # component();
//! ```
//!
//! The picker hosts are ordinary components and can also be used on their
//! own; see [`picker_host`].
#![deny(missing_docs, clippy::unwrap_used)]

pub mod alert;
pub mod date_time;
pub mod picker_host;
