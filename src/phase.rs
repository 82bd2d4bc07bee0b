//! Screen-level game phase
//!
//! Ready (title screen) → Playing → Ended (game over) → Ready.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Playing,
    Ended,
}

pub trait PhaseController {
    fn phase(&self) -> Phase;
    fn start(&mut self);
    fn end(&mut self);
    fn restart(&mut self);
}

#[derive(Debug, Clone)]
pub struct PhaseMachine {
    phase: Phase,
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self {
            phase: Phase::Ready,
        }
    }
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    fn transition(&mut self, from: Phase, to: Phase) {
        if self.phase == from {
            log::info!("Phase {:?} -> {:?}", from, to);
            self.phase = to;
        } else {
            log::warn!(
                "Ignoring phase change to {:?}: expected {:?}, in {:?}",
                to,
                from,
                self.phase
            );
        }
    }
}

impl PhaseController for PhaseMachine {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn start(&mut self) {
        self.transition(Phase::Ready, Phase::Playing);
    }

    fn end(&mut self) {
        self.transition(Phase::Playing, Phase::Ended);
    }

    fn restart(&mut self) {
        self.transition(Phase::Ended, Phase::Ready);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut phase = PhaseMachine::new();
        assert_eq!(phase.phase(), Phase::Ready);
        phase.start();
        assert_eq!(phase.phase(), Phase::Playing);
        phase.end();
        assert_eq!(phase.phase(), Phase::Ended);
        phase.restart();
        assert_eq!(phase.phase(), Phase::Ready);
    }

    #[test]
    fn test_out_of_order_transitions_are_ignored() {
        let mut phase = PhaseMachine::new();
        phase.end();
        assert_eq!(phase.phase(), Phase::Ready);
        phase.start();
        phase.restart();
        assert_eq!(phase.phase(), Phase::Playing);
    }
}
