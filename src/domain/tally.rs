use super::models::{Attendance, EventStats, PlayerTag, SeasonSummary, SetStats};

const TOP_PLACEMENT: u32 = 8;

/// Running totals of one season summary
#[derive(Debug, Default)]
pub struct SeasonTally {
    tournaments_attended: u32,
    top8s: u32,
    placements_sum: u64,
    placements_counted: u32,
    set_wins: u32,
    set_losses: u32,
    best_win_streak: u32,
}

impl SeasonTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an event the player attended. Absent players are ignored.
    pub fn record_attendance(&mut self, attendance: Attendance) {
        if !attendance.attended {
            return;
        }
        self.tournaments_attended += 1;

        if let Some(placement) = attendance.placement {
            self.placements_sum += u64::from(placement);
            self.placements_counted += 1;
            if placement <= TOP_PLACEMENT {
                self.top8s += 1;
            }
        }
    }

    /// Fold one event. Set fields only count when all three are known.
    pub fn record_event(&mut self, stats: &EventStats) {
        self.record_attendance(Attendance {
            attended: stats.attended,
            placement: stats.placement,
        });
        if !stats.attended {
            return;
        }
        if let (Some(set_wins), Some(set_losses), Some(best_win_streak)) =
            (stats.set_wins, stats.set_losses, stats.best_win_streak)
        {
            self.record_sets(SetStats {
                set_wins,
                set_losses,
                best_win_streak,
            });
        }
    }

    pub fn record_sets(&mut self, stats: SetStats) {
        self.set_wins += stats.set_wins;
        self.set_losses += stats.set_losses;
        self.best_win_streak = self.best_win_streak.max(stats.best_win_streak);
    }

    pub fn finish(self, year: i32, player_tag: PlayerTag) -> SeasonSummary {
        let avg_placement = (self.placements_counted > 0)
            .then(|| self.placements_sum as f64 / f64::from(self.placements_counted));
        let decided = self.set_wins + self.set_losses;
        let winrate = (decided > 0).then(|| f64::from(self.set_wins) / f64::from(decided));

        SeasonSummary {
            year,
            player_tag,
            tournaments_attended: self.tournaments_attended,
            top8s: self.top8s,
            avg_placement,
            placements_counted: self.placements_counted,
            winrate,
            set_wins: self.set_wins,
            set_losses: self.set_losses,
            best_win_streak: self.best_win_streak,
        }
    }
}
