use log::debug;
use thiserror::Error;

use crate::config::COUNT_UP_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target is empty")]
    Empty,
    #[error("target has no leading digits")]
    NotANumber,
    #[error("target is negative")]
    Negative,
    #[error("target does not fit in a u32")]
    OutOfRange,
}

/// Reads the integer prefix of `raw`.
///
/// Leading whitespace and a single sign are accepted, trailing text after the
/// digits is ignored, so `"12abc"` is 12 and `"3.7"` is 3. Only decimal is
/// read: `"0x10"` is 0, not 16 as a radix-sniffing parser would give. Callers
/// treat any error as a target of 0.
pub fn parse_target(raw: &str) -> Result<u32, TargetError> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return Err(TargetError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Err(TargetError::NotANumber);
    }
    let digits = &unsigned[..digits_len];

    if negative {
        // "-0" and "-000" are still zero
        return if digits.bytes().all(|b| b == b'0') {
            Ok(0)
        } else {
            Err(TargetError::Negative)
        };
    }

    digits.parse::<u32>().map_err(|_| TargetError::OutOfRange)
}

/// Milliseconds between ticks, or `None` when there is nothing to count.
///
/// Targets above the duration floor to 0ms and get clamped by the browser,
/// so large counters take longer than the nominal duration.
pub fn tick_interval_ms(target: u32) -> Option<u32> {
    if target == 0 {
        None
    } else {
        Some(COUNT_UP_DURATION_MS / target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    target: u32,
    current: u32,
}

impl CounterState {
    pub fn new(target: u32) -> Self {
        Self { target, current: 0 }
    }

    /// Advances by one and returns the new value. Returns `None` once the
    /// counter is resting, leaving it untouched.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_resting() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_resting(&self) -> bool {
        self.current >= self.target
    }

    pub fn display(&self) -> String {
        display_count(self.current)
    }
}

pub fn display_count(count: u32) -> String {
    format!("{}+", count)
}

/// One counter's cycle together with the timer handle driving it.
///
/// `H` is whatever the host hands back when scheduling a repeating tick;
/// dropping it must cancel the tick. At most one handle is alive at a time.
pub struct CountUp<H> {
    raw_target: Option<String>,
    state: CounterState,
    ticker: Option<H>,
}

impl<H> Default for CountUp<H> {
    fn default() -> Self {
        Self {
            raw_target: None,
            state: CounterState::new(0),
            ticker: None,
        }
    }
}

impl<H> CountUp<H> {
    /// Starts a new cycle for `raw`, cancelling the previous one first.
    ///
    /// `schedule` receives the tick interval in milliseconds and is only
    /// called when there is something to count. Returns false, leaving the
    /// running cycle alone, when `raw` is the target already in effect.
    pub fn retarget(&mut self, raw: &str, schedule: impl FnOnce(u32) -> H) -> bool {
        if self.raw_target.as_deref() == Some(raw) {
            return false;
        }
        self.ticker.take();
        self.raw_target = Some(raw.to_owned());

        let target = match parse_target(raw) {
            Ok(target) => target,
            Err(err) => {
                debug!("counter resting at 0: {} ({:?})", err, raw);
                0
            }
        };
        self.state = CounterState::new(target);

        if let Some(interval_ms) = tick_interval_ms(target) {
            self.ticker = Some(schedule(interval_ms));
        }
        true
    }

    pub fn tick(&mut self) -> Option<u32> {
        self.state.tick()
    }

    /// Drops the handle once the cycle is at rest. Returns true if a handle
    /// was released by this call.
    pub fn release_if_resting(&mut self) -> bool {
        self.state.is_resting() && self.ticker.take().is_some()
    }

    /// Cancels any live tick and forgets the target, so the next
    /// `retarget` always starts over.
    pub fn teardown(&mut self) {
        self.ticker.take();
        self.raw_target = None;
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn current(&self) -> u32 {
        self.state.current()
    }

    pub fn target(&self) -> u32 {
        self.state.target()
    }

    pub fn display(&self) -> String {
        self.state.display()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn run_to_rest(state: &mut CounterState) -> Vec<u32> {
        let mut seen = vec![state.current()];
        while let Some(value) = state.tick() {
            seen.push(value);
        }
        seen
    }

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_target("1200"), Ok(1200));
        assert_eq!(parse_target("50"), Ok(50));
        assert_eq!(parse_target("0"), Ok(0));
        assert_eq!(parse_target("+7"), Ok(7));
    }

    #[test]
    fn parses_integer_prefix() {
        assert_eq!(parse_target("  365"), Ok(365));
        assert_eq!(parse_target("12abc"), Ok(12));
        assert_eq!(parse_target("3.7"), Ok(3));
        assert_eq!(parse_target("007"), Ok(7));
        assert_eq!(parse_target("0x10"), Ok(0));
    }

    #[test]
    fn rejects_unusable_targets() {
        assert_eq!(parse_target(""), Err(TargetError::Empty));
        assert_eq!(parse_target("   "), Err(TargetError::Empty));
        assert_eq!(parse_target("abc"), Err(TargetError::NotANumber));
        assert_eq!(parse_target("-"), Err(TargetError::NotANumber));
        assert_eq!(parse_target(".5"), Err(TargetError::NotANumber));
        assert_eq!(parse_target("-5"), Err(TargetError::Negative));
        assert_eq!(parse_target("99999999999"), Err(TargetError::OutOfRange));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(parse_target("-0"), Ok(0));
        assert_eq!(parse_target("-000"), Ok(0));
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert_eq!(parse_target("⚡12"), Err(TargetError::NotANumber));
        assert_eq!(parse_target("12⚡"), Ok(12));
    }

    #[test]
    fn interval_spreads_duration_over_target() {
        assert_eq!(tick_interval_ms(0), None);
        assert_eq!(tick_interval_ms(5), Some(200));
        assert_eq!(tick_interval_ms(50), Some(20));
        assert_eq!(tick_interval_ms(365), Some(2));
        assert_eq!(tick_interval_ms(1000), Some(1));
        assert_eq!(tick_interval_ms(1200), Some(0));
    }

    #[test]
    fn counts_through_every_value_once() {
        for target in [1, 5, 50, 365, 1200] {
            let mut state = CounterState::new(target);
            let seen = run_to_rest(&mut state);
            let expected: Vec<u32> = (0..=target).collect();
            assert_eq!(seen, expected);
            assert_eq!(state.current(), target);
            assert!(state.is_resting());
        }
    }

    #[test]
    fn five_displays_each_step() {
        let mut state = CounterState::new(5);
        let mut shown = vec![state.display()];
        while state.tick().is_some() {
            shown.push(state.display());
        }
        assert_eq!(shown, ["0+", "1+", "2+", "3+", "4+", "5+"]);
    }

    #[test]
    fn resting_counter_never_moves() {
        let mut state = CounterState::new(3);
        run_to_rest(&mut state);
        for _ in 0..10 {
            assert_eq!(state.tick(), None);
        }
        assert_eq!(state.display(), "3+");
    }

    #[test]
    fn zero_target_starts_at_rest() {
        let mut state = CounterState::new(0);
        assert!(state.is_resting());
        assert_eq!(state.tick(), None);
        assert_eq!(state.display(), "0+");
    }

    #[test]
    fn happy_members_final_text() {
        let target = parse_target("1200").unwrap_or_default();
        let mut state = CounterState::new(target);
        run_to_rest(&mut state);
        assert_eq!(state.display(), "1200+");
    }

    #[derive(Debug, PartialEq, Eq)]
    enum TickerEvent {
        Scheduled(usize, u32),
        Dropped(usize),
    }

    type Events = Rc<RefCell<Vec<TickerEvent>>>;

    struct FakeTicker {
        id: usize,
        events: Events,
    }

    impl Drop for FakeTicker {
        fn drop(&mut self) {
            self.events.borrow_mut().push(TickerEvent::Dropped(self.id));
        }
    }

    fn scheduler(events: &Events) -> impl FnOnce(u32) -> FakeTicker {
        let events = events.clone();
        move |interval_ms| {
            let id = events
                .borrow()
                .iter()
                .filter(|event| matches!(event, TickerEvent::Scheduled(..)))
                .count();
            events.borrow_mut().push(TickerEvent::Scheduled(id, interval_ms));
            FakeTicker { id, events }
        }
    }

    fn tick_to_rest(count_up: &mut CountUp<FakeTicker>) -> Vec<u32> {
        let mut seen = vec![count_up.current()];
        while let Some(value) = count_up.tick() {
            seen.push(value);
        }
        seen
    }

    #[test]
    fn teardown_cancels_live_ticker() {
        let events = Events::default();
        let mut count_up = CountUp::default();
        assert!(count_up.retarget("5", scheduler(&events)));
        count_up.tick();
        count_up.tick();

        count_up.teardown();
        assert!(!count_up.is_ticking());
        assert_eq!(
            *events.borrow(),
            [TickerEvent::Scheduled(0, 200), TickerEvent::Dropped(0)]
        );
    }

    #[test]
    fn new_target_cancels_old_ticker_before_scheduling() {
        let events = Events::default();
        let mut count_up = CountUp::default();
        count_up.retarget("5", scheduler(&events));
        count_up.tick();
        count_up.tick();

        assert!(count_up.retarget("7", scheduler(&events)));
        assert_eq!(
            *events.borrow(),
            [
                TickerEvent::Scheduled(0, 200),
                TickerEvent::Dropped(0),
                TickerEvent::Scheduled(1, 142),
            ]
        );
        assert_eq!(tick_to_rest(&mut count_up), (0..=7).collect::<Vec<_>>());
    }

    #[test]
    fn new_target_after_rest_replays_from_zero() {
        let events = Events::default();
        let mut count_up = CountUp::default();
        count_up.retarget("4", scheduler(&events));
        tick_to_rest(&mut count_up);
        assert!(count_up.release_if_resting());

        count_up.retarget("2", scheduler(&events));
        assert_eq!(count_up.display(), "0+");
        assert!(count_up.is_ticking());
        assert_eq!(tick_to_rest(&mut count_up), [0, 1, 2]);
    }

    #[test]
    fn same_target_keeps_running_cycle() {
        let events = Events::default();
        let mut count_up = CountUp::default();
        count_up.retarget("50", scheduler(&events));
        count_up.tick();

        assert!(!count_up.retarget("50", scheduler(&events)));
        assert_eq!(count_up.current(), 1);
        assert_eq!(*events.borrow(), [TickerEvent::Scheduled(0, 20)]);
    }

    #[test]
    fn same_target_at_rest_does_not_restart() {
        let events = Events::default();
        let mut count_up = CountUp::default();
        count_up.retarget("3", scheduler(&events));
        tick_to_rest(&mut count_up);
        count_up.release_if_resting();

        assert!(!count_up.retarget("3", scheduler(&events)));
        assert_eq!(count_up.display(), "3+");
        assert!(!count_up.is_ticking());
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn unusable_targets_never_schedule() {
        for raw in ["0", "", "abc", "-3", "0x10"] {
            let events = Events::default();
            let mut count_up = CountUp::default();
            assert!(count_up.retarget(raw, scheduler(&events)));
            assert!(!count_up.is_ticking());
            assert_eq!(count_up.tick(), None);
            assert_eq!(count_up.display(), "0+");
            assert!(events.borrow().is_empty());
        }
    }

    #[test]
    fn releases_ticker_only_at_rest() {
        let events = Events::default();
        let mut count_up = CountUp::default();
        count_up.retarget("2", scheduler(&events));

        count_up.tick();
        assert!(!count_up.release_if_resting());
        assert!(count_up.is_ticking());

        count_up.tick();
        assert!(count_up.release_if_resting());
        assert!(!count_up.is_ticking());
        assert!(!count_up.release_if_resting());
        assert_eq!(events.borrow().last(), Some(&TickerEvent::Dropped(0)));
    }

    #[test]
    fn remount_after_teardown_starts_over() {
        let events = Events::default();
        let mut count_up = CountUp::default();
        count_up.retarget("3", scheduler(&events));
        count_up.tick();
        count_up.teardown();

        assert!(count_up.retarget("3", scheduler(&events)));
        assert_eq!(count_up.current(), 0);
        assert!(count_up.is_ticking());
    }
}
