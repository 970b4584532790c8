use chrono::NaiveDate;

use crate::utils::date::shift_month;

/// Pending move of keyboard focus to the filter input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FocusRequest {
    #[default]
    Idle,
    /// Requested during the current frame
    Scheduled,
    /// Ready to be consumed by the input this frame
    Due,
}

/// State for the calendar popover: Closed or Open, nothing else.
#[derive(Debug, Default)]
pub struct PopoverState {
    is_open: bool,
    /// The month currently being viewed (may differ from any selected date)
    viewing_month: Option<NaiveDate>,
    focus: FocusRequest,
}

impl PopoverState {
    /// Open on `month` unless already open, and schedule input focus.
    pub fn open(&mut self, month: NaiveDate) {
        if !self.is_open {
            self.is_open = true;
            self.viewing_month = Some(month);
        }
        self.focus = FocusRequest::Scheduled;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.viewing_month = None;
        self.focus = FocusRequest::Idle;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn viewing_month(&self) -> Option<NaiveDate> {
        self.viewing_month
    }

    pub fn set_viewing_month(&mut self, month: NaiveDate) {
        if self.is_open {
            self.viewing_month = Some(month);
        }
    }

    pub fn shift_viewing_month(&mut self, delta: i32) {
        if let Some(month) = self.viewing_month {
            self.set_viewing_month(shift_month(month, delta));
        }
    }

    /// Called once at the start of every frame. A focus request made during
    /// the previous frame becomes due now.
    pub fn begin_frame(&mut self) {
        if self.focus == FocusRequest::Scheduled {
            self.focus = FocusRequest::Due;
        }
    }

    pub fn focus_scheduled(&self) -> bool {
        self.focus != FocusRequest::Idle
    }

    /// Consume a due focus request.
    pub fn take_due_focus(&mut self) -> bool {
        if self.focus == FocusRequest::Due {
            self.focus = FocusRequest::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_open_close_cycle() {
        let mut popover = PopoverState::default();
        assert!(!popover.is_open());

        popover.open(march());
        assert!(popover.is_open());
        assert_eq!(popover.viewing_month(), Some(march()));

        popover.close();
        assert!(!popover.is_open());
        assert_eq!(popover.viewing_month(), None);
    }

    #[test]
    fn test_focus_is_deferred_one_frame() {
        let mut popover = PopoverState::default();
        popover.open(march());
        assert!(!popover.take_due_focus());

        popover.begin_frame();
        assert!(popover.take_due_focus());
        assert!(!popover.take_due_focus());
    }

    #[test]
    fn test_reopen_keeps_viewing_month() {
        let mut popover = PopoverState::default();
        popover.open(march());
        popover.shift_viewing_month(2);
        popover.open(march());
        assert_eq!(
            popover.viewing_month(),
            NaiveDate::from_ymd_opt(2025, 5, 14)
        );
    }

    #[test]
    fn test_navigation_ignored_when_closed() {
        let mut popover = PopoverState::default();
        popover.set_viewing_month(march());
        assert_eq!(popover.viewing_month(), None);
    }
}
