use super::{DeliveryStrategy, Environment, FailureSignal, NativeTagKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Active(DeliveryStrategy),
    /// Every strategy has been tried. Only manual links remain.
    Failed,
}

/// Per-session bookkeeping, reset whenever a document is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerAttemptState {
    pub strategy_index: usize,
    pub last_error: Option<String>,
}

/// What a failure signal did to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same strategy, alternate native tag.
    Retry { strategy: DeliveryStrategy, tag: NativeTagKind },
    Advanced { from: DeliveryStrategy, to: DeliveryStrategy },
    Exhausted { from: DeliveryStrategy },
    /// Signal arrived after the selector had already failed.
    Ignored,
}

/// Forward-only walk through [`DeliveryStrategy::ORDER`].
#[derive(Debug, Clone)]
pub struct StrategySelector {
    state: SelectorState,
    native_tag: NativeTagKind,
    native_retry_used: bool,
    visited: Vec<DeliveryStrategy>,
    attempt: ViewerAttemptState,
}

impl StrategySelector {
    pub fn new(env: &Environment) -> Self {
        let initial = if env.is_restrictive() {
            DeliveryStrategy::Download
        } else {
            DeliveryStrategy::Inline
        };

        Self {
            state: SelectorState::Active(initial),
            native_tag: NativeTagKind::Object,
            native_retry_used: false,
            visited: vec![initial],
            attempt: ViewerAttemptState {
                strategy_index: initial.index(),
                last_error: None,
            },
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn current(&self) -> Option<DeliveryStrategy> {
        match self.state {
            SelectorState::Active(strategy) => Some(strategy),
            SelectorState::Failed => None,
        }
    }

    pub fn native_tag(&self) -> NativeTagKind {
        self.native_tag
    }

    pub fn is_failed(&self) -> bool {
        self.state == SelectorState::Failed
    }

    /// Strategies entered so far, in order.
    pub fn visited(&self) -> &[DeliveryStrategy] {
        &self.visited
    }

    pub fn attempt(&self) -> &ViewerAttemptState {
        &self.attempt
    }

    pub fn fail(&mut self, signal: FailureSignal) -> Transition {
        let SelectorState::Active(strategy) = self.state else {
            return Transition::Ignored;
        };

        self.attempt.last_error = Some(signal.to_string());

        // One substitution of the native tag kind before giving up on it.
        if strategy == DeliveryStrategy::NativeTag
            && matches!(signal, FailureSignal::ElementError(_))
            && !self.native_retry_used
        {
            self.native_retry_used = true;
            self.native_tag = NativeTagKind::Embed;
            return Transition::Retry { strategy, tag: self.native_tag };
        }

        match strategy.next() {
            Some(next) => {
                self.state = SelectorState::Active(next);
                self.visited.push(next);
                self.attempt.strategy_index = next.index();
                Transition::Advanced { from: strategy, to: next }
            }
            None => {
                self.state = SelectorState::Failed;
                self.attempt.strategy_index = DeliveryStrategy::ORDER.len();
                Transition::Exhausted { from: strategy }
            }
        }
    }
}
