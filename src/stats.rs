use std::time::Duration;

pub const REVEAL_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub caption: &'static str,
    pub suffix: &'static str,
    pub target: u32,
}

pub const STATS: [Stat; 3] = [
    Stat {
        label: "Projects Analyzed",
        caption: "Data-driven insights delivered",
        suffix: "+",
        target: 25,
    },
    Stat {
        label: "Data Points Visualized",
        caption: "Charts and dashboards created",
        suffix: "K+",
        target: 10,
    },
    Stat {
        label: "Insights Delivered",
        caption: "Actionable recommendations",
        suffix: "+",
        target: 50,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatAnimation {
    pub duration: Duration,
    pub steps: u32,
    pub targets: [u32; 3],
}

impl Default for StatAnimation {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            steps: 60,
            targets: STATS.map(|s| s.target),
        }
    }
}

impl StatAnimation {
    /// Time between ticks, truncated to whole milliseconds like a browser timer.
    pub fn interval(&self) -> Duration {
        let millis = self.duration.as_millis() / u128::from(self.steps.max(1));
        Duration::from_millis(millis as u64)
    }

    /// `floor(target * step / steps)`, pinned to `target` from the last step on.
    pub fn value_at(&self, target: u32, step: u32) -> u32 {
        if step >= self.steps {
            return target;
        }
        (u64::from(target) * u64::from(step) / u64::from(self.steps)) as u32
    }
}

/// The three displayed counters and the step they were last computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatCounters {
    step: u32,
    values: [u32; 3],
    finished: bool,
}

impl StatCounters {
    pub fn values(&self) -> [u32; 3] {
        self.values
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one step. Returns `true` once the final step has landed, at
    /// which point the timer driving the ticks should be cleared.
    pub fn tick(&mut self, animation: &StatAnimation) -> bool {
        if self.finished {
            return true;
        }
        self.step += 1;
        if self.step >= animation.steps {
            self.values = animation.targets;
            self.finished = true;
        } else {
            let step = self.step;
            self.values = animation.targets.map(|t| animation.value_at(t, step));
        }
        self.finished
    }
}

/// Latches the first sufficiently visible intersection of the stats section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only for the observation that first reveals the section.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}
