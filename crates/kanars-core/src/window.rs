// Recent-symbol window
// Fixed-capacity FIFO of the last classified symbols, with an idle deadline
// checked from the scan tick.

use std::time::{Duration, Instant};

use log::trace;

use crate::symbol::Symbol;

/// The window always holds exactly this many slots.
pub const WINDOW_CAPACITY: usize = 3;

/// Ordered buffer of the most recent `Letter`/`Kana` symbols.
///
/// Slots are stored oldest to newest; slots without history hold
/// `Symbol::Other`, which no table entry ever matches. A non-empty window
/// always carries a deadline; once it passes, the scan tick clears the
/// window so a stale prefix cannot complete a much later keystroke.
#[derive(Debug, Clone)]
pub struct RecentWindow {
    slots: [Symbol; WINDOW_CAPACITY],
    deadline: Option<Instant>,
    timeout: Duration,
}

impl RecentWindow {
    pub fn new(timeout: Duration) -> Self {
        Self {
            slots: [Symbol::Other; WINDOW_CAPACITY],
            deadline: None,
            timeout,
        }
    }

    /// Append `symbol`, evicting the oldest slot, and extend the deadline.
    pub fn push(&mut self, symbol: Symbol, at: Instant) {
        self.slots.rotate_left(1);
        self.slots[WINDOW_CAPACITY - 1] = symbol;
        self.deadline = Some(at + self.timeout);
    }

    /// Clear all slots and invalidate the deadline. Idempotent.
    pub fn reset(&mut self) {
        if self.deadline.is_some() {
            trace!("window reset");
        }
        self.slots = [Symbol::Other; WINDOW_CAPACITY];
        self.deadline = None;
    }

    /// Symbol at `offset` positions back from the newest (0 = newest,
    /// 1 = middle, 2 = oldest). Out-of-range offsets read as `Other`.
    pub fn peek(&self, offset: usize) -> Symbol {
        if offset >= WINDOW_CAPACITY {
            return Symbol::Other;
        }
        self.slots[WINDOW_CAPACITY - 1 - offset]
    }

    pub fn is_empty(&self) -> bool {
        self.deadline.is_none()
    }

    /// Timeout monitor hook: called once per scan tick. Returns true when
    /// the window was cleared because the deadline passed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                trace!("window idle past deadline");
                self.reset();
                true
            }
            _ => false,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(5000);

    #[test]
    fn test_push_evicts_oldest() {
        let mut window = RecentWindow::new(TIMEOUT);
        let t = Instant::now();
        window.push(Symbol::Letter('k'), t);
        window.push(Symbol::Letter('y'), t);
        window.push(Symbol::Kana('あ'), t);
        window.push(Symbol::Letter('s'), t);

        assert_eq!(window.peek(0), Symbol::Letter('s'));
        assert_eq!(window.peek(1), Symbol::Kana('あ'));
        assert_eq!(window.peek(2), Symbol::Letter('y'));
    }

    #[test]
    fn test_unfilled_slots_read_as_other() {
        let mut window = RecentWindow::new(TIMEOUT);
        window.push(Symbol::Letter('k'), Instant::now());
        assert_eq!(window.peek(0), Symbol::Letter('k'));
        assert_eq!(window.peek(1), Symbol::Other);
        assert_eq!(window.peek(2), Symbol::Other);
        assert_eq!(window.peek(7), Symbol::Other);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut window = RecentWindow::new(TIMEOUT);
        window.push(Symbol::Letter('k'), Instant::now());
        window.reset();
        assert!(window.is_empty());
        window.reset();
        window.reset();
        assert!(window.is_empty());
        assert_eq!(window.peek(0), Symbol::Other);
    }

    #[test]
    fn test_expire_after_deadline() {
        let mut window = RecentWindow::new(TIMEOUT);
        let t = Instant::now();
        window.push(Symbol::Letter('k'), t);

        assert!(!window.expire(t + Duration::from_millis(4999)));
        assert!(!window.is_empty());

        assert!(window.expire(t + Duration::from_millis(5000)));
        assert!(window.is_empty());
    }

    #[test]
    fn test_expire_on_empty_window_is_noop() {
        let mut window = RecentWindow::new(TIMEOUT);
        assert!(!window.expire(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_push_extends_deadline() {
        let mut window = RecentWindow::new(TIMEOUT);
        let t = Instant::now();
        window.push(Symbol::Letter('k'), t);
        window.push(Symbol::Letter('y'), t + Duration::from_millis(3000));

        // First deadline would have been t+5000; the second push moved it.
        assert!(!window.expire(t + Duration::from_millis(6000)));
        assert!(window.expire(t + Duration::from_millis(8000)));
    }
}
