//! Best-epoch tracking for checkpoint selection

use crate::epoch::EpochEvaluation;

/// Outcome of observing one epoch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// UAS accuracy strictly exceeded every earlier epoch
    pub improved: bool,
    /// Best UAS accuracy after this epoch
    pub best_uas: f64,
    /// Best word F1 after this epoch
    pub best_f1: f64,
}

/// Tracks the best epoch seen so far by UAS accuracy
///
/// A checkpoint is due whenever the UAS accuracy strictly improves on the
/// best value so far, which starts at zero. Word F1 is tracked alongside for
/// reporting only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelSelector {
    best_uas: f64,
    best_f1: f64,
    best_epoch: Option<usize>,
}

impl ModelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record epoch `epoch` and report whether it should be checkpointed
    pub fn observe(&mut self, epoch: usize, evaluation: &EpochEvaluation) -> Selection {
        let improved = evaluation.uas_accuracy > self.best_uas;
        if improved {
            self.best_epoch = Some(epoch);
            tracing::info!(
                epoch,
                uas = evaluation.uas_accuracy,
                previous = self.best_uas,
                "UAS improved"
            );
        }

        self.best_uas = self.best_uas.max(evaluation.uas_accuracy);
        self.best_f1 = self.best_f1.max(evaluation.word_f1_score);

        Selection {
            improved,
            best_uas: self.best_uas,
            best_f1: self.best_f1,
        }
    }

    pub fn best_uas(&self) -> f64 {
        self.best_uas
    }

    pub fn best_f1(&self) -> f64 {
        self.best_f1
    }

    /// Epoch that last improved UAS, if any has
    pub fn best_epoch(&self) -> Option<usize> {
        self.best_epoch
    }
}
