//! Scroll position model.

/// Which property of a [`PositionRange`] an accepted write changed.
///
/// `Value` doubles as the generic "position changed" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeChange {
    Minimum,
    Maximum,
    Value,
    SmallChange,
    LargeChange,
}

/// Position of a scrollbar expressed in scroll units, as a native peer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollBarInfo {
    pub position: i32,
    pub range: i32,
    pub page_size: i32,
    pub thumb_size: i32,
}

impl ScrollBarInfo {
    pub const fn new(position: i32, range: i32, page_size: i32) -> Self {
        Self {
            position,
            range,
            page_size,
            thumb_size: page_size,
        }
    }
}

/// `minimum..=maximum` range with a current value and step sizes.
///
/// Invalid writes are rejected and logged, never clamped. Read-only ranges
/// ignore every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRange {
    minimum: i32,
    maximum: i32,
    value: i32,
    small_change: i32,
    large_change: i32,
    read_only: bool,
}

impl Default for PositionRange {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            value: 0,
            small_change: 1,
            large_change: 10,
            read_only: false,
        }
    }
}

impl PositionRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frozen copy that ignores writes.
    pub fn to_read_only(&self) -> Self {
        Self {
            read_only: true,
            ..self.clone()
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Effective small step, never larger than the large step.
    pub fn small_change(&self) -> i32 {
        self.small_change.min(self.large_change())
    }

    /// Effective large step, never larger than the whole range.
    pub fn large_change(&self) -> i32 {
        let span = self.maximum.saturating_sub(self.minimum).saturating_add(1);
        self.large_change.min(span)
    }

    pub fn set_minimum(&mut self, minimum: i32) -> Option<RangeChange> {
        if self.read_only || minimum == self.minimum {
            return None;
        }
        if self.maximum < minimum {
            self.maximum = minimum;
        }
        if minimum > self.value {
            self.value = minimum;
        }
        self.minimum = minimum;
        Some(RangeChange::Minimum)
    }

    pub fn set_maximum(&mut self, maximum: i32) -> Option<RangeChange> {
        if self.read_only || maximum == self.maximum {
            return None;
        }
        if self.minimum > maximum {
            self.minimum = maximum;
        }
        if maximum < self.value {
            self.value = maximum;
        }
        self.maximum = maximum;
        Some(RangeChange::Maximum)
    }

    pub fn set_value(&mut self, value: i32) -> Option<RangeChange> {
        if self.read_only {
            return None;
        }
        if value < self.minimum || value > self.maximum {
            log::warn!(
                "invalid bound: value {value} outside {}..={}",
                self.minimum,
                self.maximum
            );
            return None;
        }
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(RangeChange::Value)
    }

    pub fn set_small_change(&mut self, small_change: i32) -> Option<RangeChange> {
        if self.read_only {
            return None;
        }
        if small_change < 0 {
            log::warn!("invalid bound: small change {small_change} is negative");
            return None;
        }
        self.small_change = small_change;
        Some(RangeChange::SmallChange)
    }

    pub fn set_large_change(&mut self, large_change: i32) -> Option<RangeChange> {
        if self.read_only {
            return None;
        }
        if large_change < 0 {
            log::warn!("invalid bound: large change {large_change} is negative");
            return None;
        }
        self.large_change = large_change;
        Some(RangeChange::LargeChange)
    }

    /// Convert to scroll units: every step of `small_change` is one unit.
    pub fn to_snapshot(&self) -> ScrollBarInfo {
        let small = self.small_change();
        ScrollBarInfo::new(
            self.value.saturating_sub(self.minimum).saturating_mul(small),
            self.maximum.saturating_sub(self.minimum).saturating_mul(small),
            self.large_change().saturating_mul(small),
        )
    }

    /// Rebuild the range from a scroll-unit snapshot with unit steps.
    /// Returns false when the range is read-only.
    pub fn assign(&mut self, info: ScrollBarInfo) -> bool {
        if self.read_only {
            return false;
        }
        let maximum = info.range.max(0);
        self.minimum = 0;
        self.maximum = maximum;
        self.small_change = 1;
        self.large_change = info.page_size.max(0);
        self.value = info.position.clamp(0, maximum);
        true
    }
}
