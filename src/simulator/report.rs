//! Simulation report generation.

use serde::Serialize;

/// Outcome of a single headless run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub frames: u64,
    pub score: u64,
    pub coins: u64,
    pub jumps: u64,
    pub coins_spawned: u64,
    pub bombs_spawned: u64,
    pub final_speed: f64,
    /// True if the run hit the frame limit instead of a bomb.
    pub timed_out: bool,
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub max_frames_per_run: u64,

    pub avg_frames: f64,
    pub avg_score: f64,
    pub avg_coins: f64,
    pub avg_final_speed: f64,
    /// Share of spawned coins that were collected.
    pub coin_pickup_rate: f64,
    /// Share of spawned objects that were coins.
    pub coin_spawn_share: f64,

    pub best_score: u64,
    pub best_run: Option<usize>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a report from completed runs.
    pub fn from_runs(runs: Vec<RunStats>, max_frames_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let avg = |f: &dyn Fn(&RunStats) -> f64| -> f64 {
            if runs.is_empty() {
                0.0
            } else {
                runs.iter().map(f).sum::<f64>() / runs.len() as f64
            }
        };
        let avg_frames = avg(&|r| r.frames as f64);
        let avg_score = avg(&|r| r.score as f64);
        let avg_coins = avg(&|r| r.coins as f64);
        let avg_final_speed = avg(&|r| r.final_speed);

        let coins_spawned: u64 = runs.iter().map(|r| r.coins_spawned).sum();
        let bombs_spawned: u64 = runs.iter().map(|r| r.bombs_spawned).sum();
        let coins_collected: u64 = runs.iter().map(|r| r.coins).sum();
        let coin_pickup_rate = ratio(coins_collected, coins_spawned);
        let coin_spawn_share = ratio(coins_spawned, coins_spawned + bombs_spawned);

        let best_run = runs
            .iter()
            .enumerate()
            .max_by_key(|(_, r)| r.score)
            .map(|(i, _)| i);
        let best_score = best_run.map(|i| runs[i].score).unwrap_or(0);

        Self {
            num_runs,
            runs_timed_out,
            max_frames_per_run,
            avg_frames,
            avg_score,
            avg_coins,
            avg_final_speed,
            coin_pickup_rate,
            coin_spawn_share,
            best_score,
            best_run,
            run_stats: runs,
        }
    }

    /// Generate a formatted text summary.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} survived to the {}-frame limit\n\n",
            self.num_runs, self.runs_timed_out, self.max_frames_per_run
        ));

        report.push_str("── SURVIVAL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Frames:          {:.0} ({:.1}s)\n",
            self.avg_frames,
            self.avg_frames * 0.016
        ));
        report.push_str(&format!(
            "  Avg Final Speed:     {:.2}\n\n",
            self.avg_final_speed
        ));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.0}\n", self.avg_score));
        report.push_str(&format!("  Avg Coins:           {:.1}\n", self.avg_coins));
        report.push_str(&format!(
            "  Coin Pickup Rate:    {:.1}%\n",
            self.coin_pickup_rate * 100.0
        ));
        report.push_str(&format!(
            "  Coin Spawn Share:    {:.1}%\n",
            self.coin_spawn_share * 100.0
        ));
        match self.best_run {
            Some(i) => report.push_str(&format!(
                "  Best Score:          {} (run {})\n",
                self.best_score,
                i + 1
            )),
            None => report.push_str("  Best Score:          -\n"),
        }

        report
    }

    /// Serialize the full report as pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
