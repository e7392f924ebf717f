//! Humidity threshold trigger — fires when ambient humidity exceeds a
//! configured threshold.
//!
//! The host's sequencing runtime drives one instance sequentially:
//! [`validate`](HumidityThresholdTrigger::validate) before the sequence may
//! run, [`should_trigger`](HumidityThresholdTrigger::should_trigger) between
//! sequence items, [`execute`](HumidityThresholdTrigger::execute) when the
//! predicate holds. All anomalies surface as soft validation issues, never
//! as errors.

use chrono::{DateTime, Utc};

use dewguard_domain::id::TriggerId;
use dewguard_domain::issue::{Issue, IssueLog};
use dewguard_domain::metadata::TriggerMetadata;
use dewguard_domain::settings::TriggerSettings;
use dewguard_domain::switch::SwitchHandle;
use dewguard_domain::switch_list::SwitchList;

use crate::ports::{NotificationSink, SwitchSource, WeatherSource};

/// Outcome of one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    /// Whether the issue list came out empty.
    pub passed: bool,
    /// Whether the issue list differs from the previous pass; the host
    /// re-renders its issue display only when this is set.
    pub issues_changed: bool,
}

/// Conditional trigger that compares ambient humidity against a threshold
/// and targets a switch device selected from an external list.
pub struct HumidityThresholdTrigger<W, S, N> {
    weather: W,
    switches: S,
    notifier: N,
    id: TriggerId,
    metadata: TriggerMetadata,
    settings: TriggerSettings,
    switch_list: SwitchList,
    selected: Option<SwitchHandle>,
    current_humidity: f64,
    triggered: bool,
    issue_log: IssueLog,
    last_validated: Option<DateTime<Utc>>,
}

impl<W, S, N> HumidityThresholdTrigger<W, S, N>
where
    W: WeatherSource,
    S: SwitchSource,
    N: NotificationSink,
{
    /// Create a trigger with default settings, wired to the given sources.
    pub fn new(weather: W, switches: S, notifier: N) -> Self {
        Self {
            weather,
            switches,
            notifier,
            id: TriggerId::new(),
            metadata: TriggerMetadata::default(),
            settings: TriggerSettings::default(),
            switch_list: SwitchList::placeholder(),
            selected: None,
            current_humidity: 0.0,
            triggered: false,
            issue_log: IssueLog::default(),
            last_validated: None,
        }
    }

    /// Replace the settings wholesale, e.g. when the host restores a
    /// persisted sequence. Runtime caches are untouched; the host is
    /// expected to re-validate afterwards.
    #[must_use]
    pub fn with_settings(mut self, settings: TriggerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Recompute connectivity and configuration issues against the current
    /// external state. The issue list is rebuilt from scratch on every
    /// call; the returned flags say whether it is empty and whether it
    /// changed since the previous pass.
    #[tracing::instrument(skip(self), fields(trigger_id = %self.id))]
    pub fn validate(&mut self) -> Validation {
        let mut issues = Vec::new();

        // Weather: a fresh humidity reading also refreshes the derived
        // trigger state. A reading of exactly 0 is treated as invalid
        // sensor data, matching the source devices' reporting convention.
        // The positive range test also rejects NaN readings.
        let weather = self.weather.info();
        if !weather.connected {
            issues.push(Issue::WeatherNotConnected);
        } else if weather.humidity > 0.0 && weather.humidity <= 100.0 {
            self.current_humidity = weather.humidity;
            self.triggered = self.above_threshold();
        } else {
            issues.push(Issue::NoHumidityData);
        }

        // Switches: keep the active list in sync with the source,
        // falling back to the synthetic placeholder list on disconnect so
        // the host always has something to render.
        let hub = self.switches.info();
        if !hub.connected {
            if !self.switch_list.is_placeholder() {
                self.switch_list = SwitchList::placeholder();
            }
            issues.push(Issue::SwitchNotConnected);
        } else if hub.writable_switches.is_empty() {
            self.selected = None;
            issues.push(Issue::NoWritableSwitch);
        } else {
            if self.switch_list.is_placeholder() {
                self.switch_list = SwitchList::live(hub.writable_switches);
            }
            self.selected = self.switch_list.get(self.settings.switch_index()).cloned();
        }

        // Reselect after any list swap so the selected handle and the
        // configured index stay consistent.
        if let Some(handle) = self.switch_list.get(self.settings.switch_index()) {
            if self.selected.as_ref().map(|s| s.id) != Some(handle.id) {
                self.selected = Some(handle.clone());
            }
        }

        match &self.selected {
            None => issues.push(Issue::NoSwitchSelected),
            Some(handle) if !handle.accepts(self.settings.desired_value()) => {
                issues.push(Issue::InvalidSwitchValue {
                    minimum: handle.minimum,
                    maximum: handle.maximum,
                    step_size: handle.step_size,
                });
            }
            Some(_) => {}
        }

        let issues_changed = self.issue_log.replace(issues);
        if issues_changed {
            tracing::debug!(issues = ?self.issue_log.messages(), "validation issues changed");
        }
        self.last_validated = Some(Utc::now());

        Validation {
            passed: self.issue_log.is_empty(),
            issues_changed,
        }
    }

    /// Whether the trigger should fire, based on the humidity observed at
    /// the last validation pass. No hysteresis: as long as the reading
    /// stays above the threshold, every poll re-triggers.
    pub fn should_trigger(&mut self) -> bool {
        self.triggered = self.above_threshold();
        self.triggered
    }

    /// Perform the trigger action: emit a success notification. There is
    /// no blocking work, so cancellation is a no-op.
    #[tracing::instrument(skip(self), fields(trigger_id = %self.id))]
    pub async fn execute(&self) {
        let message = format!(
            "Humidity {}% is above the threshold of {}%",
            self.current_humidity,
            self.settings.humidity_threshold()
        );
        tracing::info!(humidity = self.current_humidity, "humidity trigger fired");
        self.notifier.show_success(&message);
    }

    /// Store a new desired value (clamped, quantized). Returns whether the
    /// stored value changed.
    pub fn set_desired_value(&mut self, value: f64) -> bool {
        self.settings.set_desired_value(value)
    }

    /// Store a new humidity threshold (clamped). Returns whether the
    /// stored value changed.
    pub fn set_humidity_threshold(&mut self, threshold: i32) -> bool {
        self.settings.set_humidity_threshold(threshold)
    }

    /// Store a new switch index; negative indices are rejected. Returns
    /// whether the stored value changed.
    pub fn set_switch_index(&mut self, index: i32) -> bool {
        self.settings.set_switch_index(index)
    }

    /// Select a switch by handle, recomputing its index within the current
    /// list (`-1` when it is not a member). Returns whether the selection
    /// or the index changed.
    pub fn set_selected_switch(&mut self, handle: SwitchHandle) -> bool {
        let index_changed = self
            .settings
            .sync_switch_index(self.switch_list.position_of(handle.id));
        let handle_changed = self.selected.as_ref() != Some(&handle);
        self.selected = Some(handle);
        index_changed || handle_changed
    }

    /// Produce a new instance wired to the same sources, copying display
    /// metadata and settings. Runtime caches (humidity, issue log, switch
    /// list, selection) start fresh; the clone must be re-validated before
    /// first use.
    #[must_use]
    pub fn duplicate(&self) -> Self
    where
        W: Clone,
        S: Clone,
        N: Clone,
    {
        Self {
            weather: self.weather.clone(),
            switches: self.switches.clone(),
            notifier: self.notifier.clone(),
            id: TriggerId::new(),
            metadata: self.metadata.clone(),
            settings: self.settings.clone(),
            switch_list: SwitchList::placeholder(),
            selected: None,
            current_humidity: 0.0,
            triggered: false,
            issue_log: IssueLog::default(),
            last_validated: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> TriggerId {
        self.id
    }

    #[must_use]
    pub fn metadata(&self) -> &TriggerMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn settings(&self) -> &TriggerSettings {
        &self.settings
    }

    /// Issues from the last validation pass, in report order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        self.issue_log.issues()
    }

    /// The active switch list the host renders for selection.
    #[must_use]
    pub fn switch_list(&self) -> &SwitchList {
        &self.switch_list
    }

    #[must_use]
    pub fn selected_switch(&self) -> Option<&SwitchHandle> {
        self.selected.as_ref()
    }

    /// Humidity observed at the last successful weather query.
    #[must_use]
    pub fn current_humidity(&self) -> f64 {
        self.current_humidity
    }

    #[must_use]
    pub fn last_validated(&self) -> Option<DateTime<Utc>> {
        self.last_validated
    }

    fn above_threshold(&self) -> bool {
        self.current_humidity > f64::from(self.settings.humidity_threshold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{SwitchSourceInfo, WeatherInfo};
    use std::sync::{Arc, Mutex};

    // ── Stub weather source ────────────────────────────────────────

    struct StubWeather {
        info: Mutex<WeatherInfo>,
    }

    impl StubWeather {
        fn connected(humidity: f64) -> Arc<Self> {
            Arc::new(Self {
                info: Mutex::new(WeatherInfo {
                    connected: true,
                    humidity,
                }),
            })
        }

        fn disconnected() -> Arc<Self> {
            Arc::new(Self {
                info: Mutex::new(WeatherInfo::disconnected()),
            })
        }

        fn set(&self, info: WeatherInfo) {
            *self.info.lock().unwrap() = info;
        }
    }

    impl WeatherSource for StubWeather {
        fn info(&self) -> WeatherInfo {
            *self.info.lock().unwrap()
        }
    }

    // ── Stub switch source ─────────────────────────────────────────

    struct StubSwitchHub {
        info: Mutex<SwitchSourceInfo>,
    }

    impl StubSwitchHub {
        fn connected(switches: Vec<SwitchHandle>) -> Arc<Self> {
            Arc::new(Self {
                info: Mutex::new(SwitchSourceInfo {
                    connected: true,
                    writable_switches: switches,
                }),
            })
        }

        fn disconnected() -> Arc<Self> {
            Arc::new(Self {
                info: Mutex::new(SwitchSourceInfo::disconnected()),
            })
        }

        fn set(&self, info: SwitchSourceInfo) {
            *self.info.lock().unwrap() = info;
        }
    }

    impl SwitchSource for StubSwitchHub {
        fn info(&self) -> SwitchSourceInfo {
            self.info.lock().unwrap().clone()
        }
    }

    // ── Spy notifier ───────────────────────────────────────────────

    #[derive(Default)]
    struct SpyNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl NotificationSink for SpyNotifier {
        fn show_success(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    // ── Helpers ────────────────────────────────────────────────────

    fn heater(name: &str, minimum: f64, maximum: f64) -> SwitchHandle {
        SwitchHandle::builder()
            .name(name)
            .minimum(minimum)
            .maximum(maximum)
            .step_size(5.0)
            .build()
            .unwrap()
    }

    fn five_switches() -> Vec<SwitchHandle> {
        (1..=5).map(|n| heater(&format!("Heater {n}"), 0.0, 100.0)).collect()
    }

    type StubTrigger =
        HumidityThresholdTrigger<Arc<StubWeather>, Arc<StubSwitchHub>, Arc<SpyNotifier>>;

    fn make_trigger(weather: &Arc<StubWeather>, hub: &Arc<StubSwitchHub>) -> StubTrigger {
        HumidityThresholdTrigger::new(
            Arc::clone(weather),
            Arc::clone(hub),
            Arc::new(SpyNotifier::default()),
        )
    }

    fn messages(trigger: &StubTrigger) -> Vec<String> {
        trigger.issues().iter().map(ToString::to_string).collect()
    }

    // ── Validation ─────────────────────────────────────────────────

    #[test]
    fn should_fail_validation_when_weather_is_disconnected() {
        let weather = StubWeather::disconnected();
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        let outcome = trigger.validate();

        assert!(!outcome.passed);
        assert_eq!(messages(&trigger)[0], "Weather Not Connected");
    }

    #[test]
    fn should_report_no_humidity_data_when_reading_is_zero() {
        let weather = StubWeather::connected(0.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        let outcome = trigger.validate();

        assert!(!outcome.passed);
        assert!(trigger.issues().contains(&Issue::NoHumidityData));
    }

    #[test]
    fn should_report_no_humidity_data_when_reading_exceeds_hundred() {
        let weather = StubWeather::connected(101.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        let _ = trigger.validate();

        assert!(trigger.issues().contains(&Issue::NoHumidityData));
    }

    #[test]
    fn should_report_no_humidity_data_when_reading_is_nan() {
        let weather = StubWeather::connected(f64::NAN);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        let _ = trigger.validate();

        assert!(trigger.issues().contains(&Issue::NoHumidityData));
        assert_eq!(trigger.current_humidity(), 0.0);
    }

    #[test]
    fn should_accept_humidity_of_exactly_one_hundred() {
        let weather = StubWeather::connected(100.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        let outcome = trigger.validate();

        assert!(outcome.passed);
        assert_eq!(trigger.current_humidity(), 100.0);
    }

    #[test]
    fn should_pass_validation_when_everything_is_connected_and_in_range() {
        let weather = StubWeather::connected(60.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        let outcome = trigger.validate();

        assert!(outcome.passed);
        assert!(trigger.issues().is_empty());
        assert!(trigger.last_validated().is_some());
    }

    #[test]
    fn should_report_issues_in_weather_then_switch_order() {
        let weather = StubWeather::disconnected();
        let hub = StubSwitchHub::disconnected();
        let mut trigger = make_trigger(&weather, &hub);

        let _ = trigger.validate();

        assert_eq!(
            messages(&trigger),
            vec!["Weather Not Connected", "Switch Not Connected"]
        );
    }

    #[test]
    fn should_swap_to_placeholder_list_when_switch_source_disconnects() {
        let weather = StubWeather::connected(40.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);
        let _ = trigger.validate();
        assert!(!trigger.switch_list().is_placeholder());

        hub.set(SwitchSourceInfo::disconnected());
        let _ = trigger.validate();

        assert!(trigger.switch_list().is_placeholder());
        assert_eq!(trigger.switch_list().len(), 20);
        assert!(trigger.issues().contains(&Issue::SwitchNotConnected));
    }

    #[test]
    fn should_select_placeholder_switch_while_disconnected() {
        let weather = StubWeather::connected(40.0);
        let hub = StubSwitchHub::disconnected();
        let mut trigger = make_trigger(&weather, &hub);

        let _ = trigger.validate();

        // Index 0 resolves against the placeholder list, so the host still
        // has a selection to render.
        assert_eq!(
            trigger.selected_switch().map(|s| s.name.as_str()),
            Some("Switch 1")
        );
    }

    #[test]
    fn should_adopt_real_list_and_reselect_by_index_on_reconnect() {
        let weather = StubWeather::connected(40.0);
        let hub = StubSwitchHub::disconnected();
        let mut trigger = make_trigger(&weather, &hub);
        assert!(trigger.set_switch_index(2));
        let _ = trigger.validate();

        hub.set(SwitchSourceInfo {
            connected: true,
            writable_switches: five_switches(),
        });
        let outcome = trigger.validate();

        assert!(outcome.passed);
        assert!(!trigger.switch_list().is_placeholder());
        assert_eq!(trigger.switch_list().len(), 5);
        assert_eq!(
            trigger.selected_switch().map(|s| s.name.as_str()),
            Some("Heater 3")
        );
        assert!(!trigger.issues().contains(&Issue::NoWritableSwitch));
    }

    #[test]
    fn should_report_no_writable_switch_when_connected_list_is_empty() {
        let weather = StubWeather::connected(40.0);
        let hub = StubSwitchHub::connected(Vec::new());
        let mut trigger = make_trigger(&weather, &hub);

        let outcome = trigger.validate();

        assert!(!outcome.passed);
        assert!(trigger.issues().contains(&Issue::NoWritableSwitch));
        // The placeholder list is kept so the host still has entries.
        assert!(trigger.switch_list().is_placeholder());
    }

    #[test]
    fn should_clear_selection_when_configured_index_is_out_of_range() {
        let weather = StubWeather::connected(40.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);
        assert!(trigger.set_switch_index(17));

        let outcome = trigger.validate();

        assert!(!outcome.passed);
        assert!(trigger.selected_switch().is_none());
        assert!(trigger.issues().contains(&Issue::NoSwitchSelected));
    }

    #[test]
    fn should_report_invalid_switch_value_with_range_and_step() {
        let weather = StubWeather::connected(40.0);
        let hub = StubSwitchHub::connected(vec![heater("Small Heater", 0.0, 50.0)]);
        let mut trigger = make_trigger(&weather, &hub);
        assert!(trigger.set_desired_value(75.0));

        let outcome = trigger.validate();

        assert!(!outcome.passed);
        assert_eq!(
            messages(&trigger),
            vec!["Invalid Switch Value - valid range is 0 to 50 with a step size of 5"]
        );
    }

    #[test]
    fn should_not_resignal_change_when_external_state_is_unchanged() {
        let weather = StubWeather::disconnected();
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        let first = trigger.validate();
        let issues_after_first = messages(&trigger);
        let second = trigger.validate();

        assert!(first.issues_changed);
        assert!(!second.issues_changed);
        assert_eq!(messages(&trigger), issues_after_first);
    }

    #[test]
    fn should_signal_change_when_issues_clear_after_reconnect() {
        let weather = StubWeather::disconnected();
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);
        let _ = trigger.validate();

        weather.set(WeatherInfo {
            connected: true,
            humidity: 42.0,
        });
        let outcome = trigger.validate();

        assert!(outcome.passed);
        assert!(outcome.issues_changed);
        assert!(trigger.issues().is_empty());
    }

    // ── Trigger predicate ──────────────────────────────────────────

    #[test]
    fn should_trigger_when_humidity_exceeds_threshold() {
        let weather = StubWeather::connected(60.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        let _ = trigger.validate();

        assert!(trigger.should_trigger());
    }

    #[test]
    fn should_not_trigger_when_humidity_equals_threshold() {
        let weather = StubWeather::connected(50.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        let _ = trigger.validate();

        assert!(!trigger.should_trigger());
    }

    #[test]
    fn should_retrigger_on_every_poll_without_hysteresis() {
        let weather = StubWeather::connected(51.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);
        let _ = trigger.validate();

        assert!(trigger.should_trigger());
        assert!(trigger.should_trigger());
        assert!(trigger.should_trigger());
    }

    #[test]
    fn should_not_trigger_before_any_validation() {
        let weather = StubWeather::connected(90.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        // No validate yet: no humidity has been observed.
        assert!(!trigger.should_trigger());
    }

    #[test]
    fn should_use_latest_observed_humidity_after_revalidation() {
        let weather = StubWeather::connected(60.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);
        let _ = trigger.validate();
        assert!(trigger.should_trigger());

        weather.set(WeatherInfo {
            connected: true,
            humidity: 30.0,
        });
        let _ = trigger.validate();

        assert!(!trigger.should_trigger());
    }

    // ── Configuration setters ──────────────────────────────────────

    #[test]
    fn should_delegate_clamped_setters_to_settings() {
        let weather = StubWeather::connected(40.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);

        assert!(trigger.set_desired_value(97.0));
        assert_eq!(trigger.settings().desired_value(), 95.0);
        assert!(trigger.set_humidity_threshold(150));
        assert_eq!(trigger.settings().humidity_threshold(), 100);
        assert!(!trigger.set_switch_index(-1));
        assert_eq!(trigger.settings().switch_index(), 0);
    }

    #[test]
    fn should_recompute_index_when_selecting_switch_by_handle() {
        let weather = StubWeather::connected(40.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);
        let _ = trigger.validate();

        let handle = trigger.switch_list().handles()[3].clone();
        assert!(trigger.set_selected_switch(handle.clone()));

        assert_eq!(trigger.settings().switch_index(), 3);
        assert_eq!(trigger.selected_switch(), Some(&handle));
    }

    #[test]
    fn should_store_minus_one_when_selected_handle_is_not_in_list() {
        let weather = StubWeather::connected(40.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);
        let _ = trigger.validate();

        let foreign = heater("Foreign", 0.0, 10.0);
        assert!(trigger.set_selected_switch(foreign.clone()));

        assert_eq!(trigger.settings().switch_index(), -1);
        assert_eq!(trigger.selected_switch(), Some(&foreign));
    }

    // ── Execution ──────────────────────────────────────────────────

    #[tokio::test]
    async fn should_emit_success_notification_on_execute() {
        let weather = StubWeather::connected(60.0);
        let hub = StubSwitchHub::connected(five_switches());
        let notifier = Arc::new(SpyNotifier::default());
        let mut trigger = HumidityThresholdTrigger::new(
            Arc::clone(&weather),
            Arc::clone(&hub),
            Arc::clone(&notifier),
        );
        let _ = trigger.validate();

        trigger.execute().await;

        let sent = notifier.messages.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], "Humidity 60% is above the threshold of 50%");
    }

    // ── Duplication ────────────────────────────────────────────────

    #[test]
    fn should_copy_settings_and_reset_caches_on_duplicate() {
        let weather = StubWeather::connected(60.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);
        assert!(trigger.set_desired_value(25.0));
        assert!(trigger.set_humidity_threshold(70));
        assert!(trigger.set_switch_index(1));
        let _ = trigger.validate();

        let copy = trigger.duplicate();

        assert_ne!(copy.id(), trigger.id());
        assert_eq!(copy.settings(), trigger.settings());
        assert_eq!(copy.metadata(), trigger.metadata());
        assert_eq!(copy.current_humidity(), 0.0);
        assert!(copy.issues().is_empty());
        assert!(copy.switch_list().is_placeholder());
        assert!(copy.selected_switch().is_none());
        assert!(copy.last_validated().is_none());
    }

    #[test]
    fn should_revalidate_duplicate_against_shared_sources() {
        let weather = StubWeather::connected(80.0);
        let hub = StubSwitchHub::connected(five_switches());
        let mut trigger = make_trigger(&weather, &hub);
        let _ = trigger.validate();

        let mut copy = trigger.duplicate();
        let outcome = copy.validate();

        assert!(outcome.passed);
        assert!(copy.should_trigger());
    }
}
