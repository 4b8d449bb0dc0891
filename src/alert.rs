//! Alert dialog with an embeddable content region, plus picker attachment
//! points.
//!
//! ## Usage
//!
//! Build [`AlertArgs`], optionally augment it through [`AlertPickersExt`],
//! and render [`alert`] inside the `dialog_content` of
//! `tessera_components::dialog::dialog_provider`.

use std::time::Duration;

use derive_setters::Setters;
use tessera_ui::{CallbackWith, DimensionValue, Dp, Modifier, RenderSlot, tessera, use_context};

use tessera_components::{
    alignment::{CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    spacer::{SpacerArgs, spacer},
    text::{TextArgs, text},
    theme::MaterialTheme,
};

use crate::{
    date_time::PickerDateTime,
    picker_host::{
        CountdownPickerHostArgs, DatePickerHostArgs, DateTimeMode, countdown_picker_host,
        date_picker_host,
    },
};

/// Vertical extent reserved for an embedded picker region.
///
/// Both picker families embed at the same height on purpose, so alerts keep
/// a consistent silhouette regardless of which picker they carry.
pub const PICKER_REGION_HEIGHT: Dp = Dp(217.0);

const ALERT_MIN_WIDTH: Dp = Dp(280.0);
const ALERT_MAX_WIDTH: Dp = Dp(560.0);
const SECTION_GAP: Dp = Dp(16.0);
const ACTION_GAP: Dp = Dp(8.0);

/// Arguments for the [`alert`] component.
#[derive(Clone, PartialEq, Default, Setters)]
pub struct AlertArgs {
    /// Optional headline text.
    #[setters(strip_option, into)]
    pub title: Option<String>,
    /// Optional supporting message text.
    #[setters(strip_option, into)]
    pub message: Option<String>,
    /// The button used to confirm the proposed action.
    #[setters(skip)]
    pub confirm_button: Option<RenderSlot>,
    /// The button used to dismiss the proposed action.
    #[setters(skip)]
    pub dismiss_button: Option<RenderSlot>,
    /// Custom content embedded in the alert's content area.
    #[setters(skip)]
    pub content: Option<RenderSlot>,
    /// Vertical extent reserved for the embedded content.
    #[setters(skip)]
    pub content_height: Option<Dp>,
}

impl AlertArgs {
    /// Sets the confirm button content.
    pub fn confirm_button<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.confirm_button = Some(RenderSlot::new(f));
        self
    }

    /// Sets the confirm button content using a shared render slot.
    pub fn confirm_button_shared(mut self, f: impl Into<RenderSlot>) -> Self {
        self.confirm_button = Some(f.into());
        self
    }

    /// Sets the dismiss button content.
    pub fn dismiss_button<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.dismiss_button = Some(RenderSlot::new(f));
        self
    }

    /// Sets the dismiss button content using a shared render slot.
    pub fn dismiss_button_shared(mut self, f: impl Into<RenderSlot>) -> Self {
        self.dismiss_button = Some(f.into());
        self
    }

    /// Embeds custom content into the alert's content area at the given
    /// height.
    pub fn set_content<F>(mut self, content: F, height: Dp) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.content = Some(RenderSlot::new(content));
        self.content_height = Some(height);
        self
    }
}

/// Picker attachment points for [`AlertArgs`].
///
/// Each method instantiates a picker host and embeds it into the alert's
/// content area at [`PICKER_REGION_HEIGHT`].
pub trait AlertPickersExt {
    /// Embeds a date/time picker.
    ///
    /// The date defaults to the current moment; bounds are optional and
    /// passed through to the picker unvalidated. `action` is invoked with
    /// the new value on every user-driven change.
    fn add_date_picker(
        self,
        mode: DateTimeMode,
        date: Option<PickerDateTime>,
        minimum_date: Option<PickerDateTime>,
        maximum_date: Option<PickerDateTime>,
        action: Option<CallbackWith<PickerDateTime>>,
    ) -> Self;

    /// Embeds a countdown picker.
    ///
    /// The duration defaults to zero, the minute interval to 1. `action` is
    /// invoked with the new duration on every user-driven change.
    fn add_countdown_picker(
        self,
        countdown_duration: Option<Duration>,
        minute_interval: Option<u32>,
        action: Option<CallbackWith<Duration>>,
    ) -> Self;
}

impl AlertPickersExt for AlertArgs {
    fn add_date_picker(
        self,
        mode: DateTimeMode,
        date: Option<PickerDateTime>,
        minimum_date: Option<PickerDateTime>,
        maximum_date: Option<PickerDateTime>,
        action: Option<CallbackWith<PickerDateTime>>,
    ) -> Self {
        self.set_content(
            move || {
                let mut args = DatePickerHostArgs::default().mode(mode);
                args.initial_date = date;
                args.minimum_date = minimum_date;
                args.maximum_date = maximum_date;
                args.on_change = action.clone();
                date_picker_host(&args);
            },
            PICKER_REGION_HEIGHT,
        )
    }

    fn add_countdown_picker(
        self,
        countdown_duration: Option<Duration>,
        minute_interval: Option<u32>,
        action: Option<CallbackWith<Duration>>,
    ) -> Self {
        self.set_content(
            move || {
                let mut args = CountdownPickerHostArgs::default();
                args.countdown_duration = countdown_duration;
                args.minute_interval = minute_interval;
                args.on_change = action.clone();
                countdown_picker_host(&args);
            },
            PICKER_REGION_HEIGHT,
        )
    }
}

/// # alert
///
/// Render an alert dialog body: headline, message, optional embedded content
/// region, and a trailing action row.
///
/// ## Usage
///
/// Use inside `dialog_provider` when presenting a modal alert, optionally
/// augmented with a picker through [`AlertPickersExt`].
///
/// ## Parameters
///
/// - `args` — alert text, buttons, and embedded content; see [`AlertArgs`].
///
/// ## Examples
///
/// ```no_run
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_alert_pickers::{
///     alert::{AlertArgs, AlertPickersExt, alert},
///     picker_host::DateTimeMode,
/// };
///
/// alert(
///     &AlertArgs::default()
///         .title("Pick a date")
///         .add_date_picker(DateTimeMode::Date, None, None, None, None),
/// );
/// # }
/// # component();
/// ```
#[tessera]
pub fn alert(args: &AlertArgs) {
    let args = args.clone();
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let title = args.title.clone();
    let message = args.message.clone();
    let content = args.content.clone();
    let content_height = args.content_height;
    let confirm_button = args.confirm_button.clone();
    let dismiss_button = args.dismiss_button.clone();

    column(
        ColumnArgs::default()
            .modifier(Modifier::new().constrain(
                Some(DimensionValue::Wrap {
                    min: Some(ALERT_MIN_WIDTH.into()),
                    max: Some(ALERT_MAX_WIDTH.into()),
                }),
                Some(DimensionValue::WRAP),
            ))
            .cross_axis_alignment(CrossAxisAlignment::Start),
        move |scope| {
            if let Some(title) = title.clone() {
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text(title.clone())
                            .size(Dp(24.0))
                            .color(scheme.on_surface),
                    );
                });
                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(SECTION_GAP))));
            }

            if let Some(message) = message.clone() {
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text(message.clone())
                            .size(Dp(14.0))
                            .color(scheme.on_surface_variant),
                    );
                });
                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(SECTION_GAP))));
            }

            if let Some(content) = content.clone() {
                // The content region always gets its reserved height, even
                // when that differs from the picker's natural extent.
                let height = content_height.unwrap_or(PICKER_REGION_HEIGHT);
                scope.child(move || {
                    let content = content.clone();
                    Modifier::new()
                        .fill_max_width()
                        .height(height)
                        .run(move || content.render());
                });
            }

            if confirm_button.is_some() || dismiss_button.is_some() {
                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(SECTION_GAP))));
                let confirm_button = confirm_button.clone();
                let dismiss_button = dismiss_button.clone();
                scope.child(move || {
                    let confirm_button = confirm_button.clone();
                    let dismiss_button = dismiss_button.clone();
                    row(
                        RowArgs::default()
                            .modifier(Modifier::new().fill_max_width())
                            .main_axis_alignment(MainAxisAlignment::End)
                            .cross_axis_alignment(CrossAxisAlignment::Center),
                        move |row_scope| {
                            let has_confirm = confirm_button.is_some();
                            let has_dismiss = dismiss_button.is_some();

                            if let Some(dismiss) = dismiss_button.clone() {
                                row_scope.child(move || dismiss.render());
                            }
                            if has_confirm && has_dismiss {
                                row_scope.child(|| {
                                    spacer(&SpacerArgs::new(Modifier::new().width(ACTION_GAP)))
                                });
                            }
                            if let Some(confirm) = confirm_button.clone() {
                                row_scope.child(move || confirm.render());
                            }
                        },
                    );
                });
            }
        },
    );
}
