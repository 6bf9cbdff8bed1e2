/// Which residual links an augmenting path may use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Augmentation {
    /// Only forward edges are searched and flow is never retracted.
    ///
    /// This under-reports on networks where an early shortest path blocks two later ones, so it is
    /// only exact for networks that never need flow cancellation.
    ForwardOnly,
    /// Reverse links are searched too, letting later paths retract flow from earlier ones.
    #[default]
    Cancelling,
}

impl Augmentation {
    pub fn allows_reverse(self) -> bool {
        matches!(self, Augmentation::Cancelling)
    }
}

/// Settings for the augmenting-path solver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub augmentation: Augmentation,
    /// Upper bound on the number of augmenting paths; `None` means unbounded.
    pub max_augmentations: Option<usize>,
}

impl SolverConfig {
    pub fn forward_only() -> Self {
        Self {
            augmentation: Augmentation::ForwardOnly,
            ..Self::default()
        }
    }

    pub fn with_augmentation(mut self, augmentation: Augmentation) -> Self {
        self.augmentation = augmentation;
        self
    }

    pub fn with_max_augmentations(mut self, max: usize) -> Self {
        self.max_augmentations = Some(max);
        self
    }
}
