//! Picker host components — own one picker widget and bridge its value
//! changes to a caller-supplied callback.
//!
//! ## Usage
//!
//! Use [`date_picker_host`] or [`countdown_picker_host`] directly, or embed
//! them in an alert through [`crate::alert::AlertPickersExt`].

use std::time::{Duration, Instant};

use derive_setters::Setters;
use tessera_ui::{
    Callback, CallbackWith, DimensionValue, Dp, Modifier, State, remember, tessera, use_context,
    with_frame_nanos,
};

use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};

use crate::date_time::{CountdownValue, PickerDateTime, normalize_minute_interval};

const VALUE_CELL_WIDTH: Dp = Dp(72.0);
const VALUE_CELL_HEIGHT: Dp = Dp(56.0);
const VALUE_CELL_RADIUS: Dp = Dp(12.0);
const STEP_BUTTON_SIZE: Dp = Dp(28.0);
const UNIT_COLUMN_GAP: Dp = Dp(12.0);
const LABEL_GAP: Dp = Dp(6.0);

/// Duration of the eased transition a programmatic [`PickerHostState::set_date`]
/// plays on the displayed value.
const SET_DATE_ANIM_TIME: Duration = Duration::from_millis(200);

/// Mode parameter for the date/time picker family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateTimeMode {
    /// Calendar date only.
    Date,
    /// Wall-clock time only.
    Time,
    /// Calendar date and wall-clock time.
    #[default]
    DateAndTime,
}

/// Behavior of a picker host, covering both picker families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    /// Calendar date only.
    Date,
    /// Wall-clock time only.
    Time,
    /// Calendar date and wall-clock time.
    DateAndTime,
    /// Elapsed-duration countdown.
    Countdown,
}

impl From<DateTimeMode> for PickerMode {
    fn from(mode: DateTimeMode) -> Self {
        match mode {
            DateTimeMode::Date => PickerMode::Date,
            DateTimeMode::Time => PickerMode::Time,
            DateTimeMode::DateAndTime => PickerMode::DateAndTime,
        }
    }
}

/// The selection callback held by a picker host.
///
/// A host stores at most one callback, and its kind always matches the
/// host's mode: date/time hosts hold `DateTime`, countdown hosts hold
/// `Countdown`. The constructors are the only way to install one, so the
/// pairing cannot be violated.
#[derive(Clone, PartialEq)]
pub enum SelectionCallback {
    /// Invoked with the new absolute date/time value.
    DateTime(CallbackWith<PickerDateTime>),
    /// Invoked with the new elapsed-duration value.
    Countdown(CallbackWith<Duration>),
}

#[derive(Clone, Copy, PartialEq)]
enum PickerValue {
    DateTime(PickerDateTime),
    Countdown(CountdownValue),
}

/// Owns one picker widget's displayed value, bounds, and selection callback.
///
/// User-driven interaction goes through [`select_date`](Self::select_date) /
/// [`select_countdown`](Self::select_countdown), which invoke the callback
/// synchronously. The programmatic [`set_date`](Self::set_date) mutator never
/// does.
pub struct PickerHostState {
    mode: PickerMode,
    value: PickerValue,
    minimum_date: Option<PickerDateTime>,
    maximum_date: Option<PickerDateTime>,
    minute_interval: u32,
    callback: Option<SelectionCallback>,
    transition: Option<Instant>,
}

impl PickerHostState {
    /// Creates a date/time picker host.
    ///
    /// The initial date defaults to the current moment. Bounds are stored as
    /// given; ordering between them is not checked, the widget clamps
    /// user-committed selections into the bound range.
    pub fn date_time(
        mode: DateTimeMode,
        date: Option<PickerDateTime>,
        minimum_date: Option<PickerDateTime>,
        maximum_date: Option<PickerDateTime>,
        action: Option<CallbackWith<PickerDateTime>>,
    ) -> Self {
        Self {
            mode: mode.into(),
            value: PickerValue::DateTime(date.unwrap_or_else(PickerDateTime::now)),
            minimum_date,
            maximum_date,
            minute_interval: 1,
            callback: action.map(SelectionCallback::DateTime),
            transition: None,
        }
    }

    /// Creates a countdown picker host.
    ///
    /// The duration defaults to zero and is displayed at whole-minute
    /// resolution, truncating any seconds remainder. The minute interval
    /// defaults to 1.
    pub fn countdown(
        countdown_duration: Option<Duration>,
        minute_interval: Option<u32>,
        action: Option<CallbackWith<Duration>>,
    ) -> Self {
        let duration = countdown_duration.unwrap_or(Duration::ZERO);
        Self {
            mode: PickerMode::Countdown,
            value: PickerValue::Countdown(CountdownValue::from_duration(duration)),
            minimum_date: None,
            maximum_date: None,
            minute_interval: normalize_minute_interval(minute_interval.unwrap_or(1)),
            callback: action.map(SelectionCallback::Countdown),
            transition: None,
        }
    }

    /// Restores a picker host from persisted UI state.
    ///
    /// Picker hosts are always constructed programmatically; this path is
    /// intentionally unsupported and aborts immediately.
    pub fn from_persisted_state(_state: &[u8]) -> Self {
        unimplemented!("restoring a picker host from persisted state is not supported")
    }

    /// Returns the host's mode.
    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    /// Returns the displayed date/time value of a date/time host.
    pub fn date_value(&self) -> Option<PickerDateTime> {
        match self.value {
            PickerValue::DateTime(value) => Some(value),
            PickerValue::Countdown(_) => None,
        }
    }

    /// Returns the displayed countdown value of a countdown host.
    pub fn countdown_value(&self) -> Option<CountdownValue> {
        match self.value {
            PickerValue::Countdown(value) => Some(value),
            PickerValue::DateTime(_) => None,
        }
    }

    /// Returns the minimum bound, if any.
    pub fn minimum_date(&self) -> Option<PickerDateTime> {
        self.minimum_date
    }

    /// Returns the maximum bound, if any.
    pub fn maximum_date(&self) -> Option<PickerDateTime> {
        self.maximum_date
    }

    /// Returns the minute-interval granularity of the countdown wheel.
    pub fn minute_interval(&self) -> u32 {
        self.minute_interval
    }

    /// Returns the stored selection callback, if any.
    pub fn selection_callback(&self) -> Option<&SelectionCallback> {
        self.callback.as_ref()
    }

    /// Updates the displayed value with a short transition animation.
    ///
    /// This never invokes the selection callback: the callback fires for
    /// user-driven interaction only. On a countdown host the value kinds do
    /// not match and the call is ignored.
    pub fn set_date(&mut self, date: PickerDateTime) {
        if let PickerValue::DateTime(_) = self.value {
            self.value = PickerValue::DateTime(self.clamped(date));
            self.transition = Some(Instant::now());
        }
    }

    /// Commits a user-driven date/time selection and notifies the callback.
    ///
    /// The selection is clamped into the bound range first, matching how the
    /// widget snaps out-of-range spins back. Ignored on countdown hosts.
    pub fn select_date(&mut self, date: PickerDateTime) {
        if let Some((action, value)) = self.commit_date(date) {
            action.call(value);
        }
    }

    /// Commits a user-driven countdown selection and notifies the callback.
    ///
    /// Ignored on date/time hosts.
    pub fn select_countdown(&mut self, value: CountdownValue) {
        if let Some((action, duration)) = self.commit_countdown(value) {
            action.call(duration);
        }
    }

    /// Commits a user-driven date/time selection and hands back the callback
    /// to dispatch with the committed value.
    ///
    /// The widget glue commits while holding the state borrow and dispatches
    /// after the borrow ends, so callbacks may re-enter the host state.
    /// Ignored on countdown hosts.
    pub fn commit_date(
        &mut self,
        date: PickerDateTime,
    ) -> Option<(CallbackWith<PickerDateTime>, PickerDateTime)> {
        if !matches!(self.value, PickerValue::DateTime(_)) {
            return None;
        }
        let value = self.clamped(date);
        self.value = PickerValue::DateTime(value);
        match &self.callback {
            Some(SelectionCallback::DateTime(action)) => Some((action.clone(), value)),
            _ => None,
        }
    }

    /// Commits a user-driven countdown selection and hands back the callback
    /// to dispatch with the committed duration.
    ///
    /// Ignored on date/time hosts.
    pub fn commit_countdown(
        &mut self,
        value: CountdownValue,
    ) -> Option<(CallbackWith<Duration>, Duration)> {
        if !matches!(self.value, PickerValue::Countdown(_)) {
            return None;
        }
        self.value = PickerValue::Countdown(value);
        match &self.callback {
            Some(SelectionCallback::Countdown(action)) => {
                Some((action.clone(), value.to_duration()))
            }
            _ => None,
        }
    }

    fn clamped(&self, date: PickerDateTime) -> PickerDateTime {
        let mut value = date;
        if let Some(minimum) = self.minimum_date {
            value = value.max(minimum);
        }
        if let Some(maximum) = self.maximum_date {
            value = value.min(maximum);
        }
        value
    }
}

impl Drop for PickerHostState {
    fn drop(&mut self) {
        tracing::debug!(mode = ?self.mode, "picker host released");
    }
}

/// Configuration options for [`date_picker_host`].
///
/// Initial-state fields are applied only when the component owns the state.
#[derive(Clone, PartialEq, Setters)]
pub struct DatePickerHostArgs {
    /// Optional modifier chain applied to the picker.
    pub modifier: Modifier,
    /// Picker mode for the internal state.
    pub mode: DateTimeMode,
    /// Initial selected date/time; defaults to the current moment.
    #[setters(strip_option)]
    pub initial_date: Option<PickerDateTime>,
    /// Minimum selectable bound.
    #[setters(strip_option)]
    pub minimum_date: Option<PickerDateTime>,
    /// Maximum selectable bound.
    #[setters(strip_option)]
    pub maximum_date: Option<PickerDateTime>,
    /// Callback invoked with the new value on user-driven changes.
    #[setters(skip)]
    pub on_change: Option<CallbackWith<PickerDateTime>>,
    /// Optional external host state.
    ///
    /// When this is `None`, `date_picker_host` creates and owns an internal
    /// state.
    #[setters(skip)]
    pub state: Option<State<PickerHostState>>,
}

impl Default for DatePickerHostArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            mode: DateTimeMode::default(),
            initial_date: None,
            minimum_date: None,
            maximum_date: None,
            on_change: None,
            state: None,
        }
    }
}

impl DatePickerHostArgs {
    /// Sets the value-change callback.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(PickerDateTime) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the value-change callback using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<PickerDateTime>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Sets an external picker host state.
    pub fn state(mut self, state: State<PickerHostState>) -> Self {
        self.state = Some(state);
        self
    }
}

/// Configuration options for [`countdown_picker_host`].
///
/// Initial-state fields are applied only when the component owns the state.
#[derive(Clone, PartialEq, Setters)]
pub struct CountdownPickerHostArgs {
    /// Optional modifier chain applied to the picker.
    pub modifier: Modifier,
    /// Initial countdown duration; defaults to zero.
    #[setters(strip_option)]
    pub countdown_duration: Option<Duration>,
    /// Minute-interval granularity of the minutes wheel; defaults to 1.
    #[setters(strip_option)]
    pub minute_interval: Option<u32>,
    /// Callback invoked with the new duration on user-driven changes.
    #[setters(skip)]
    pub on_change: Option<CallbackWith<Duration>>,
    /// Optional external host state.
    ///
    /// When this is `None`, `countdown_picker_host` creates and owns an
    /// internal state.
    #[setters(skip)]
    pub state: Option<State<PickerHostState>>,
}

impl Default for CountdownPickerHostArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            countdown_duration: None,
            minute_interval: None,
            on_change: None,
            state: None,
        }
    }
}

impl CountdownPickerHostArgs {
    /// Sets the value-change callback.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(Duration) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the value-change callback using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<Duration>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Sets an external picker host state.
    pub fn state(mut self, state: State<PickerHostState>) -> Self {
        self.state = Some(state);
        self
    }
}

/// # date_picker_host
///
/// Render a date, time, or date-and-time picker that reports user-driven
/// value changes through a callback.
///
/// ## Usage
///
/// Use standalone, or embed in an alert through
/// [`crate::alert::AlertPickersExt::add_date_picker`].
///
/// ## Parameters
///
/// - `args` — picker mode, initial value, bounds, and callback; see
///   [`DatePickerHostArgs`].
#[tessera]
pub fn date_picker_host(args: &DatePickerHostArgs) {
    let mut args: DatePickerHostArgs = args.clone();
    let mode = args.mode;
    let initial_date = args.initial_date;
    let minimum_date = args.minimum_date;
    let maximum_date = args.maximum_date;
    let on_change = args.on_change.clone();

    let state = args.state.unwrap_or_else(|| {
        remember(move || {
            PickerHostState::date_time(mode, initial_date, minimum_date, maximum_date, on_change)
        })
    });
    args.state = Some(state);
    date_picker_host_node(&args);
}

#[tessera]
fn date_picker_host_node(args: &DatePickerHostArgs) {
    let state = args
        .state
        .expect("date_picker_host_node requires state to be set");
    let modifier = args.modifier.clone();
    let (mode, value) = state.with(|s| (s.mode(), s.date_value()));
    let Some(value) = value else {
        return;
    };
    let alpha = transition_alpha(state);

    row(
        RowArgs::default()
            .modifier(modifier)
            .main_axis_alignment(MainAxisAlignment::Center)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let mut first = true;
            let mut unit = |label: &'static str, display: String, delta_apply: StepFn| {
                if !first {
                    scope.child(|| {
                        spacer(&SpacerArgs::new(Modifier::new().width(UNIT_COLUMN_GAP)))
                    });
                }
                first = false;
                scope.child(move || {
                    value_wheel_column(
                        label,
                        display.clone(),
                        alpha,
                        Callback::new(make_date_step(state, delta_apply, 1)),
                        Callback::new(make_date_step(state, delta_apply, -1)),
                    );
                });
            };

            if matches!(mode, PickerMode::Date) {
                unit("Year", value.year().to_string(), PickerDateTime::step_year);
            }
            if matches!(mode, PickerMode::Date | PickerMode::DateAndTime) {
                unit(
                    "Month",
                    month_short_name(value.month()).to_string(),
                    PickerDateTime::step_month,
                );
                unit(
                    "Day",
                    format_two_digit(value.day()),
                    PickerDateTime::step_day,
                );
            }
            if matches!(mode, PickerMode::Time | PickerMode::DateAndTime) {
                unit(
                    "Hour",
                    format_two_digit(value.hour()),
                    PickerDateTime::step_hour,
                );
                unit(
                    "Minute",
                    format_two_digit(value.minute()),
                    PickerDateTime::step_minute,
                );
            }
        },
    );
}

/// # countdown_picker_host
///
/// Render a countdown-duration picker that reports user-driven value changes
/// through a callback.
///
/// ## Usage
///
/// Use standalone, or embed in an alert through
/// [`crate::alert::AlertPickersExt::add_countdown_picker`].
///
/// ## Parameters
///
/// - `args` — initial duration, minute interval, and callback; see
///   [`CountdownPickerHostArgs`].
#[tessera]
pub fn countdown_picker_host(args: &CountdownPickerHostArgs) {
    let mut args: CountdownPickerHostArgs = args.clone();
    let countdown_duration = args.countdown_duration;
    let minute_interval = args.minute_interval;
    let on_change = args.on_change.clone();

    let state = args.state.unwrap_or_else(|| {
        remember(move || PickerHostState::countdown(countdown_duration, minute_interval, on_change))
    });
    args.state = Some(state);
    countdown_picker_host_node(&args);
}

#[tessera]
fn countdown_picker_host_node(args: &CountdownPickerHostArgs) {
    let state = args
        .state
        .expect("countdown_picker_host_node requires state to be set");
    let modifier = args.modifier.clone();
    let Some(value) = state.with(|s| s.countdown_value()) else {
        return;
    };
    let alpha = transition_alpha(state);

    row(
        RowArgs::default()
            .modifier(modifier)
            .main_axis_alignment(MainAxisAlignment::Center)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(move || {
                value_wheel_column(
                    "hours",
                    format_two_digit(value.hours()),
                    alpha,
                    Callback::new(make_countdown_hour_step(state, 1)),
                    Callback::new(make_countdown_hour_step(state, -1)),
                );
            });
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().width(UNIT_COLUMN_GAP))));
            scope.child(move || {
                value_wheel_column(
                    "min",
                    format_two_digit(value.minutes()),
                    alpha,
                    Callback::new(make_countdown_minute_step(state, 1)),
                    Callback::new(make_countdown_minute_step(state, -1)),
                );
            });
        },
    );
}

type StepFn = fn(&PickerDateTime, i32) -> PickerDateTime;

fn make_date_step(
    state: State<PickerHostState>,
    apply: StepFn,
    delta: i32,
) -> impl Fn() + Send + Sync + 'static {
    move || {
        // Dispatch after the state borrow ends so callbacks may re-enter it.
        let pending = state.with_mut(|s| {
            let value = s.date_value()?;
            s.commit_date(apply(&value, delta))
        });
        if let Some((action, value)) = pending {
            action.call(value);
        }
    }
}

fn make_countdown_hour_step(
    state: State<PickerHostState>,
    delta: i32,
) -> impl Fn() + Send + Sync + 'static {
    move || {
        let pending = state.with_mut(|s| {
            let value = s.countdown_value()?;
            s.commit_countdown(value.step_hours(delta))
        });
        if let Some((action, duration)) = pending {
            action.call(duration);
        }
    }
}

fn make_countdown_minute_step(
    state: State<PickerHostState>,
    delta: i32,
) -> impl Fn() + Send + Sync + 'static {
    move || {
        let pending = state.with_mut(|s| {
            let value = s.countdown_value()?;
            let interval = s.minute_interval();
            s.commit_countdown(value.step_minutes(delta, interval))
        });
        if let Some((action, duration)) = pending {
            action.call(duration);
        }
    }
}

/// Eased opacity for the displayed value while a programmatic set animates.
fn transition_alpha(state: State<PickerHostState>) -> f32 {
    let transition = state.with(|s| s.transition);
    let Some(started) = transition else {
        return 1.0;
    };
    let elapsed = started.elapsed();
    if elapsed >= SET_DATE_ANIM_TIME {
        return 1.0;
    }
    // Keep redrawing until the transition finishes, then retire it.
    with_frame_nanos(move |_| {
        state.with_mut(|s| {
            if s.transition.is_some_and(|t| t.elapsed() >= SET_DATE_ANIM_TIME) {
                s.transition = None;
            }
        });
    });
    easing(elapsed.as_secs_f32() / SET_DATE_ANIM_TIME.as_secs_f32())
}

fn value_wheel_column(
    label: &'static str,
    value: String,
    alpha: f32,
    on_increment: Callback,
    on_decrement: Callback,
) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    column(
        ColumnArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let on_increment = on_increment.clone();
            scope.child(move || {
                let on_increment = on_increment.clone();
                step_button("+", move || on_increment.call());
            });
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(LABEL_GAP))));
            let value_text = value.clone();
            scope.child(move || {
                value_cell(value_text.clone(), alpha);
            });
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(LABEL_GAP))));
            let on_decrement = on_decrement.clone();
            scope.child(move || {
                let on_decrement = on_decrement.clone();
                step_button("-", move || on_decrement.call());
            });
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(LABEL_GAP))));
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(label)
                        .size(typography.label_small.font_size)
                        .color(scheme.on_surface_variant),
                );
            });
        },
    );
}

fn value_cell(value: String, alpha: f32) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .width(VALUE_CELL_WIDTH)
                    .height(VALUE_CELL_HEIGHT),
            )
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_high,
            })
            .shape(Shape::rounded_rectangle(VALUE_CELL_RADIUS))
            .content_alignment(Alignment::Center),
        move || {
            let value = value.clone();
            text(
                &TextArgs::default()
                    .text(value)
                    .size(typography.headline_small.font_size)
                    .color(scheme.on_surface.with_alpha(alpha)),
            );
        },
    ));
}

fn step_button(label: &'static str, on_click: impl Fn() + Send + Sync + 'static) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(STEP_BUTTON_SIZE, STEP_BUTTON_SIZE))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_low,
            })
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .on_click(on_click),
        move || {
            text(
                &TextArgs::default()
                    .text(label)
                    .size(typography.body_medium.font_size)
                    .color(scheme.on_surface),
            );
        },
    ));
}

fn format_two_digit(value: u8) -> String {
    format!("{value:02}")
}

fn month_short_name(month: u8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

/// Cubic ease-in-out mapping from linear progress in [0, 1].
fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    fn date(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> PickerDateTime {
        PickerDateTime::new(year, month, day, hour, minute).unwrap()
    }

    #[test]
    fn test_default_initial_value_is_now() {
        let before = PickerDateTime::now();
        let host = PickerHostState::date_time(DateTimeMode::DateAndTime, None, None, None, None);
        let after = PickerDateTime::now();
        let value = host.date_value().unwrap();
        assert!(before <= value && value <= after);
    }

    #[test]
    fn test_callback_kind_matches_mode() {
        for mode in [
            DateTimeMode::Date,
            DateTimeMode::Time,
            DateTimeMode::DateAndTime,
        ] {
            let host = PickerHostState::date_time(
                mode,
                None,
                None,
                None,
                Some(CallbackWith::new(|_: PickerDateTime| {})),
            );
            assert_eq!(host.mode(), mode.into());
            assert!(matches!(
                host.selection_callback(),
                Some(SelectionCallback::DateTime(_))
            ));
        }

        let host = PickerHostState::countdown(None, None, Some(CallbackWith::new(|_| {})));
        assert_eq!(host.mode(), PickerMode::Countdown);
        assert!(matches!(
            host.selection_callback(),
            Some(SelectionCallback::Countdown(_))
        ));
    }

    #[test]
    fn test_callback_is_optional() {
        let host = PickerHostState::date_time(DateTimeMode::Date, None, None, None, None);
        assert!(host.selection_callback().is_none());

        let host = PickerHostState::countdown(None, None, None);
        assert!(host.selection_callback().is_none());
    }

    #[test]
    fn test_set_date_updates_display_without_callback() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_callback = fired.clone();
        let mut host = PickerHostState::date_time(
            DateTimeMode::DateAndTime,
            Some(date(2024, 6, 1, 12, 0)),
            None,
            None,
            Some(CallbackWith::new(move |_: PickerDateTime| {
                fired_in_callback.fetch_add(1, Ordering::SeqCst);
            })),
        );

        host.set_date(date(2025, 1, 2, 3, 4));

        assert_eq!(host.date_value(), Some(date(2025, 1, 2, 3, 4)));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(host.transition.is_some());
    }

    #[test]
    fn test_user_selection_fires_callback_once_with_current_value() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_in_callback = received.clone();
        let mut host = PickerHostState::date_time(
            DateTimeMode::DateAndTime,
            Some(date(2024, 6, 1, 12, 0)),
            None,
            None,
            Some(CallbackWith::new(move |value: PickerDateTime| {
                received_in_callback.lock().unwrap().push(value);
            })),
        );

        let current = host.date_value().unwrap();
        host.select_date(current.step_minute(1));

        let received = received.lock().unwrap();
        assert_eq!(received.as_slice(), &[date(2024, 6, 1, 12, 1)]);
        assert_eq!(host.date_value(), Some(date(2024, 6, 1, 12, 1)));
    }

    #[test]
    fn test_commit_hands_back_callback_instead_of_dispatching() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_callback = fired.clone();
        let mut host = PickerHostState::date_time(
            DateTimeMode::DateAndTime,
            Some(date(2024, 6, 1, 12, 0)),
            None,
            None,
            Some(CallbackWith::new(move |_: PickerDateTime| {
                fired_in_callback.fetch_add(1, Ordering::SeqCst);
            })),
        );

        let pending = host.commit_date(date(2024, 6, 1, 12, 30));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        let (action, value) = pending.unwrap();
        assert_eq!(value, date(2024, 6, 1, 12, 30));
        // The mutable borrow has ended; the committed value is visible to a
        // re-entrant read before the callback is dispatched.
        assert_eq!(host.date_value(), Some(value));

        action.call(value);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_commit_without_callback_updates_value_only() {
        let mut host = PickerHostState::date_time(
            DateTimeMode::Date,
            Some(date(2024, 6, 1, 0, 0)),
            None,
            None,
            None,
        );
        assert!(host.commit_date(date(2024, 6, 2, 0, 0)).is_none());
        assert_eq!(host.date_value(), Some(date(2024, 6, 2, 0, 0)));
    }

    #[test]
    fn test_countdown_commit_hands_back_callback_instead_of_dispatching() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_callback = fired.clone();
        let mut host = PickerHostState::countdown(
            Some(Duration::from_secs(600)),
            None,
            Some(CallbackWith::new(move |_| {
                fired_in_callback.fetch_add(1, Ordering::SeqCst);
            })),
        );

        let pending = host.commit_countdown(CountdownValue::new(0, 25));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        let (action, duration) = pending.unwrap();
        assert_eq!(duration, Duration::from_secs(25 * 60));
        assert_eq!(host.countdown_value(), Some(CountdownValue::new(0, 25)));

        action.call(duration);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_user_selection_without_callback_is_noop() {
        let mut host = PickerHostState::date_time(
            DateTimeMode::Date,
            Some(date(2024, 6, 1, 0, 0)),
            None,
            None,
            None,
        );
        host.select_date(date(2024, 6, 2, 0, 0));
        assert_eq!(host.date_value(), Some(date(2024, 6, 2, 0, 0)));
    }

    #[test]
    fn test_user_selection_clamps_to_bounds() {
        let minimum = date(2024, 6, 1, 0, 0);
        let maximum = date(2024, 6, 30, 23, 59);
        let mut host = PickerHostState::date_time(
            DateTimeMode::Date,
            Some(date(2024, 6, 15, 0, 0)),
            Some(minimum),
            Some(maximum),
            None,
        );

        host.select_date(date(2024, 7, 10, 0, 0));
        assert_eq!(host.date_value(), Some(maximum));

        host.select_date(date(2024, 5, 1, 0, 0));
        assert_eq!(host.date_value(), Some(minimum));
    }

    #[test]
    fn test_out_of_order_bounds_are_stored_verbatim() {
        let minimum = date(2024, 12, 31, 0, 0);
        let maximum = date(2024, 1, 1, 0, 0);
        let host = PickerHostState::date_time(
            DateTimeMode::Date,
            None,
            Some(minimum),
            Some(maximum),
            None,
        );
        assert_eq!(host.minimum_date(), Some(minimum));
        assert_eq!(host.maximum_date(), Some(maximum));
    }

    #[test]
    fn test_countdown_duration_truncates_seconds() {
        let host =
            PickerHostState::countdown(Some(Duration::from_secs(3_661)), None, None);
        let value = host.countdown_value().unwrap();
        assert_eq!(value.hours(), 1);
        assert_eq!(value.minutes(), 1);
    }

    #[test]
    fn test_countdown_defaults_to_zero() {
        let host = PickerHostState::countdown(None, None, None);
        assert_eq!(host.countdown_value(), Some(CountdownValue::new(0, 0)));
        assert_eq!(host.minute_interval(), 1);
    }

    #[test]
    fn test_countdown_minute_interval_is_normalized() {
        let host = PickerHostState::countdown(None, Some(0), None);
        assert_eq!(host.minute_interval(), 1);

        let host = PickerHostState::countdown(None, Some(15), None);
        assert_eq!(host.minute_interval(), 15);
    }

    #[test]
    fn test_countdown_selection_fires_callback_with_duration() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_in_callback = received.clone();
        let mut host = PickerHostState::countdown(
            Some(Duration::from_secs(3_661)),
            None,
            Some(CallbackWith::new(move |duration| {
                received_in_callback.lock().unwrap().push(duration);
            })),
        );

        let current = host.countdown_value().unwrap();
        host.select_countdown(current.step_minutes(1, 1));

        let received = received.lock().unwrap();
        assert_eq!(received.as_slice(), &[Duration::from_secs(3_720)]);
    }

    #[test]
    fn test_set_date_is_ignored_on_countdown_host() {
        let mut host = PickerHostState::countdown(Some(Duration::from_secs(600)), None, None);
        host.set_date(date(2024, 6, 1, 12, 0));
        assert_eq!(host.date_value(), None);
        assert_eq!(host.countdown_value(), Some(CountdownValue::new(0, 10)));
    }

    #[test]
    fn test_cross_kind_selection_is_ignored() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_callback = fired.clone();
        let mut host = PickerHostState::date_time(
            DateTimeMode::Date,
            Some(date(2024, 6, 1, 0, 0)),
            None,
            None,
            Some(CallbackWith::new(move |_: PickerDateTime| {
                fired_in_callback.fetch_add(1, Ordering::SeqCst);
            })),
        );

        host.select_countdown(CountdownValue::new(1, 30));

        assert_eq!(host.date_value(), Some(date(2024, 6, 1, 0, 0)));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    #[should_panic(expected = "not supported")]
    fn test_persisted_state_construction_is_unsupported() {
        let _ = PickerHostState::from_persisted_state(&[]);
    }
}
