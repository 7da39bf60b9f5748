use serde::Serialize;

use crate::core::aggregate::DailyTotals;
use crate::core::pace::WeightAnalysis;
use crate::core::streak::StreakSummary;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub key: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: String,
}

/// Everything achievements are judged on.
pub struct AchievementInputs<'a> {
    pub streaks: &'a StreakSummary,
    pub days: &'a [DailyTotals],
    pub protein_target_g: f64,
    pub weight: Option<&'a WeightAnalysis>,
    pub workouts: u32,
}

/// Fraction of days on which protein met the target for this to unlock.
const PROTEIN_DAYS_RATIO: f64 = 0.8;

pub fn unlocked(inputs: &AchievementInputs<'_>) -> Vec<Achievement> {
    let mut out = Vec::new();
    let longest = inputs.streaks.longest_streak;

    if longest >= 30 {
        out.push(Achievement {
            key: "streak_30",
            icon: "🏆",
            title: "Monthly Master",
            desc: format!("Logged {} days in a row", longest),
        });
    } else if longest >= 7 {
        out.push(Achievement {
            key: "streak_7",
            icon: "🔥",
            title: "Week Warrior",
            desc: format!("Logged {} days in a row", longest),
        });
    }

    let total = inputs.streaks.total_days_logged;
    if total >= 100 {
        out.push(Achievement {
            key: "days_100",
            icon: "💯",
            title: "Century Club",
            desc: format!("{} days logged", total),
        });
    } else if total >= 30 {
        out.push(Achievement {
            key: "days_30",
            icon: "📅",
            title: "Dedicated Tracker",
            desc: format!("{} days logged", total),
        });
    }

    if !inputs.days.is_empty() && inputs.protein_target_g > 0.0 {
        let hit = inputs
            .days
            .iter()
            .filter(|d| d.protein_g >= inputs.protein_target_g)
            .count();
        let ratio = hit as f64 / inputs.days.len() as f64;
        if ratio >= PROTEIN_DAYS_RATIO {
            out.push(Achievement {
                key: "protein_pro",
                icon: "💪",
                title: "Protein Pro",
                desc: format!("Hit the protein target on {:.0}% of days", ratio * 100.0),
            });
        }
    }

    if let Some(w) = inputs.weight.filter(|w| w.total_change <= -5.0) {
        out.push(Achievement {
            key: "weight_5kg",
            icon: "⚖️",
            title: "Five Down",
            desc: format!("Lost {:.1} kg", -w.total_change),
        });
    }

    if inputs.workouts >= 20 {
        out.push(Achievement {
            key: "workouts_20",
            icon: "🏋️",
            title: "Gym Regular",
            desc: format!("{} workouts completed", inputs.workouts),
        });
    }

    out
}
