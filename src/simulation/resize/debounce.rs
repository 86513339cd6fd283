/// Trailing-edge debounce driven by explicit timestamps
///
/// Every `signal` pushes the deadline out by `wait_ms`; `poll` fires once
/// the quiet period has elapsed and then disarms.
pub struct Debouncer {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(wait_ms: f64) -> Self {
        Self { wait_ms, deadline: None }
    }

    pub fn signal(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_quiet_period() {
        let mut d = Debouncer::new(200.0);
        d.signal(0.0);
        d.signal(150.0);
        assert!(!d.poll(300.0));
        assert!(d.poll(350.0));
        assert!(!d.poll(400.0));
    }

    #[test]
    fn cancel_disarms() {
        let mut d = Debouncer::new(200.0);
        d.signal(0.0);
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.poll(1000.0));
    }
}
