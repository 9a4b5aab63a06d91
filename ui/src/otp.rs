// One-time-password entry state and resend countdown

pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpKey {
    Backspace,
    ArrowLeft,
    ArrowRight,
}

impl OtpKey {
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Backspace" => Some(OtpKey::Backspace),
            "ArrowLeft" => Some(OtpKey::ArrowLeft),
            "ArrowRight" => Some(OtpKey::ArrowRight),
            _ => None,
        }
    }
}

/// Digit slots behind the segmented code input.
///
/// Input methods return `Some(code)` the moment every slot becomes filled.
/// That happens once per fill: the buffer has to lose a digit before it can
/// complete again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpBuffer {
    slots: Vec<Option<char>>,
    active: usize,
    completed: bool,
}

impl Default for OtpBuffer {
    fn default() -> Self {
        Self::new(OTP_LENGTH)
    }
}

impl OtpBuffer {
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length.max(1)],
            active: 0,
            completed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn digit(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn value(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn is_filled(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Handles the raw text of an input event on slot `index`.
    pub fn input(&mut self, index: usize, raw: &str) -> Option<String> {
        if index >= self.len() {
            return None;
        }

        let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
        match digits.as_slice() {
            [] => self.slots[index] = None,
            [digit] => {
                self.slots[index] = Some(*digit);
                if index + 1 < self.len() {
                    self.active = index + 1;
                }
            }
            _ => return self.paste(raw),
        }

        self.check_complete()
    }

    /// Replaces the whole buffer with the first digits found in `raw`.
    pub fn paste(&mut self, raw: &str) -> Option<String> {
        let digits: Vec<char> = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.len())
            .collect();
        if digits.is_empty() {
            return None;
        }

        let filled = digits.len();
        self.slots = (0..self.len()).map(|i| digits.get(i).copied()).collect();
        self.active = filled.min(self.len() - 1);

        self.check_complete()
    }

    pub fn key(&mut self, index: usize, key: OtpKey) {
        if index >= self.len() {
            return;
        }

        match key {
            OtpKey::Backspace => {
                if self.slots[index].is_none() && index > 0 {
                    self.active = index - 1;
                } else {
                    self.slots[index] = None;
                    self.active = index;
                }
            }
            OtpKey::ArrowLeft if index > 0 => self.active = index - 1,
            OtpKey::ArrowRight if index + 1 < self.len() => self.active = index + 1,
            _ => {}
        }

        self.check_complete();
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.len() {
            self.active = index;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new(self.len());
    }

    fn check_complete(&mut self) -> Option<String> {
        if !self.is_filled() {
            self.completed = false;
            return None;
        }
        if self.completed {
            return None;
        }
        self.completed = true;
        Some(self.value())
    }
}

/// Seconds left before "Resend Code" becomes available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            total: seconds,
            remaining: seconds,
        }
    }

    /// One second passes. Returns true on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.total;
    }

    pub fn label(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_typing_advances_and_completes_once() {
        let mut otp = OtpBuffer::default();
        let mut completions = Vec::new();

        for (i, c) in "123456".chars().enumerate() {
            if let Some(code) = otp.input(i, &c.to_string()) {
                completions.push(code);
            }
        }

        assert_eq!(completions, vec!["123456".to_string()]);
        assert_eq!(otp.active_index(), 5);

        // Retyping the last digit does not fire again
        assert_eq!(otp.input(5, "6"), None);
    }

    #[test]
    fn test_non_digits_are_dropped() {
        let mut otp = OtpBuffer::default();
        assert_eq!(otp.input(0, "a"), None);
        assert_eq!(otp.digit(0), None);
        assert_eq!(otp.active_index(), 0);
    }

    #[test]
    fn test_paste_keeps_first_digits() {
        let mut otp = OtpBuffer::default();
        assert_eq!(otp.paste("12-34 56 789"), Some("123456".to_string()));
        assert_eq!(otp.active_index(), 5);

        let mut otp = OtpBuffer::default();
        assert_eq!(otp.input(2, "9a8"), None);
        assert_eq!(otp.value(), "98");
        assert_eq!(otp.digit(0), Some('9'));
        assert_eq!(otp.active_index(), 2);

        assert_eq!(otp.paste("no digits"), None);
        assert_eq!(otp.value(), "98");
    }

    #[test]
    fn test_backspace_clears_then_moves_back() {
        let mut otp = OtpBuffer::default();
        otp.paste("123");
        assert_eq!(otp.active_index(), 3);

        otp.key(3, OtpKey::Backspace);
        assert_eq!(otp.active_index(), 2);
        assert_eq!(otp.value(), "123");

        otp.key(2, OtpKey::Backspace);
        assert_eq!(otp.value(), "12");
        assert_eq!(otp.active_index(), 2);
    }

    #[test]
    fn test_completion_rearms_after_edit() {
        let mut otp = OtpBuffer::default();
        assert!(otp.paste("654321").is_some());

        otp.key(5, OtpKey::Backspace);
        assert!(!otp.is_filled());
        assert_eq!(otp.input(5, "0"), Some("654320".to_string()));
    }

    #[test]
    fn test_arrow_keys_stay_in_bounds() {
        let mut otp = OtpBuffer::default();
        otp.key(0, OtpKey::ArrowLeft);
        assert_eq!(otp.active_index(), 0);
        otp.key(0, OtpKey::ArrowRight);
        assert_eq!(otp.active_index(), 1);
        otp.key(5, OtpKey::ArrowRight);
        assert_eq!(otp.active_index(), 1);
    }

    #[test]
    fn test_countdown_label_and_resend() {
        let mut countdown = Countdown::new(300);
        assert_eq!(countdown.label(), "5:00");
        assert!(!countdown.can_resend());

        countdown.tick();
        assert_eq!(countdown.label(), "4:59");

        let mut short = Countdown::new(2);
        assert!(!short.tick());
        assert!(short.tick());
        assert!(short.can_resend());
        assert!(!short.tick());

        short.reset();
        assert_eq!(short.remaining(), 2);
        assert_eq!(short.label(), "0:02");
    }
}
