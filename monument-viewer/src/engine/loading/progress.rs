use bevy::prelude::*;

/// Progress of the current monument load.
///
/// Each load owns a generation; a resolution arriving for a superseded
/// generation is discarded, so a torn-down or replaced load can never update
/// viewer state. Within one generation the percentage never decreases.
#[derive(Resource, Default)]
pub struct LoadProgress {
    generation: u64,
    percent: f32,
    stages: Vec<(String, i32)>,
}

impl LoadProgress {
    /// Start a new load, superseding any outstanding one. Returns the new
    /// generation token.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.percent = 0.0;
        self.stages.clear();
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Record a named stage and advance the percentage. Stale generations
    /// are ignored; the percentage is monotonic within a generation.
    pub fn mark_stage(&mut self, generation: u64, name: &str, percent: f32) {
        if !self.is_current(generation) {
            return;
        }
        self.percent = self.percent.max(percent.clamp(0.0, 100.0));
        self.stages.push((name.to_string(), percent as i32));
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn stages(&self) -> &[(String, i32)] {
        &self.stages
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_monotonic_within_a_generation() {
        let mut progress = LoadProgress::default();
        let generation = progress.begin();

        progress.mark_stage(generation, "Request issued", 10.0);
        progress.mark_stage(generation, "Scene resolved", 80.0);
        // A lower stage value must not move the bar backwards
        progress.mark_stage(generation, "Late straggler", 40.0);
        assert_eq!(progress.percent(), 80.0);

        progress.mark_stage(generation, "Scene spawned", 100.0);
        assert!(progress.is_complete());
    }

    #[test]
    fn stale_generation_updates_are_discarded() {
        let mut progress = LoadProgress::default();
        let first = progress.begin();
        progress.mark_stage(first, "Request issued", 10.0);

        // A second load supersedes the first before it resolves
        let second = progress.begin();
        assert_eq!(progress.percent(), 0.0);

        // The first load's resolution arrives late and must change nothing
        progress.mark_stage(first, "Scene resolved", 100.0);
        assert_eq!(progress.percent(), 0.0);
        assert!(!progress.is_complete());
        assert!(progress.is_current(second));
        assert!(progress.stages().is_empty());
    }

    #[test]
    fn percent_is_clamped_to_valid_range() {
        let mut progress = LoadProgress::default();
        let generation = progress.begin();
        progress.mark_stage(generation, "Overshoot", 250.0);
        assert_eq!(progress.percent(), 100.0);
    }
}
