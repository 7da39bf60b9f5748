use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::achievements::{self, Achievement, AchievementInputs};
use crate::core::aggregate::{self, DailyTotals, OverallStats};
use crate::core::breakdown::{
    self, BestWorstDays, CalorieBudget, DayOfWeekStat, DistributionBucket, MacroAnalysis,
    MealTiming, TopFoods, WeekdayInsights,
};
use crate::core::compare::{self, ComparativeSummary};
use crate::core::macros::{self, EffectiveTargets, MacroRecommendation};
use crate::core::pace::{self, WeightAnalysis, WeightPace, WeightVolatility};
use crate::core::reports::{self, PeriodReport, REPORT_LIMIT, ReportPeriod};
use crate::core::score::{self, ConsistencyScore, NutritionScore};
use crate::core::source::EntrySource;
use crate::core::streak::{self, StreakSummary};
use crate::error::AnalyticsError;
use crate::models::PeriodWindow;
use crate::models::config::Targets;

const TOP_FOODS_LIMIT: usize = 10;
const WEEK_DAYS: u32 = 7;

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyProgress {
    pub workouts: u32,
    pub workouts_goal: u32,
    pub runs: u32,
    pub runs_goal: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightSection {
    pub analysis: Option<WeightAnalysis>,
    pub pace: WeightPace,
    pub volatility: Option<WeightVolatility>,
    pub target_weight: Option<f64>,
    pub weeks_to_target: Option<f64>,
}

/// Everything the dashboard shows for one window.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub window: PeriodWindow,
    pub today: NaiveDate,
    pub daily_data: Vec<DailyTotals>,
    pub overall: Option<OverallStats>,
    pub streaks: StreakSummary,
    pub weekly_summary: ComparativeSummary,
    pub weekly_progress: WeeklyProgress,
    pub weight: WeightSection,
    pub macro_analysis: Option<MacroAnalysis>,
    pub targets: EffectiveTargets,
    pub recommendation: Option<MacroRecommendation>,
    pub consistency: Option<ConsistencyScore>,
    pub nutrition: Option<NutritionScore>,
    pub calorie_budget: Option<CalorieBudget>,
    pub calorie_distribution: Vec<DistributionBucket>,
    pub day_of_week: Vec<DayOfWeekStat>,
    pub weekday_insights: Option<WeekdayInsights>,
    pub best_worst_days: Option<BestWorstDays>,
    pub meal_timing: Option<MealTiming>,
    pub top_foods: TopFoods,
    pub weekly_reports: Vec<PeriodReport>,
    pub monthly_reports: Vec<PeriodReport>,
    pub achievements: Vec<Achievement>,
    pub rejected_entries: usize,
}

/// Days that could have been logged: the window length, or the logged span for `All`.
pub fn expected_days(window: &PeriodWindow, days: &[DailyTotals]) -> i64 {
    if let Some(len) = window.len_days() {
        return len;
    }
    match (days.first(), days.last()) {
        (Some(first), Some(last)) => (last.date - first.date).num_days() + 1,
        _ => 0,
    }
}

/// Streaks look at every logged date, independent of `window`.
pub fn streaks(source: &impl EntrySource, today: NaiveDate) -> Result<StreakSummary> {
    let all = PeriodWindow::All;
    let logs = source.fetch_daily_logs(&all)?;
    let agg = aggregate::aggregate_daily(&logs, &all);
    Ok(streak::compute_streaks(&agg.logged_dates(), today))
}

/// The last seven days against the seven before them.
pub fn weekly_summary(source: &impl EntrySource, today: NaiveDate) -> Result<ComparativeSummary> {
    let this_week = PeriodWindow::last_days(today, WEEK_DAYS)?;
    let last_week = this_week
        .preceding()?
        .ok_or_else(|| AnalyticsError::Precondition("bounded window has no predecessor".into()))?;
    compare::compare_windows(source, &this_week, &last_week)
}

#[tracing::instrument(skip(source, window, targets), fields(window = %window))]
pub fn compute(
    source: &impl EntrySource,
    window: &PeriodWindow,
    today: NaiveDate,
    targets: &Targets,
) -> Result<AnalyticsReport> {
    let logs = source.fetch_daily_logs(window)?;
    let agg = aggregate::aggregate_daily(&logs, window);
    let days = &agg.days;

    let profile = source.fetch_profile()?;
    let weights = source.fetch_weight_entries(window)?;
    let sessions = source.fetch_session_counts(window)?;

    let streaks = streaks(source, today)?;
    let weekly_summary = weekly_summary(source, today)?;
    let weekly_progress = WeeklyProgress {
        workouts: weekly_summary.this_period.workouts,
        workouts_goal: targets.weekly_workouts,
        runs: weekly_summary.this_period.runs,
        runs_goal: targets.weekly_runs,
    };

    let analysis = pace::weight_analysis(&weights)?;
    let weight_pace = pace::weight_pace(&weights)?;
    let volatility = pace::weight_volatility(&weights)?;
    let weeks_to_target = match (
        targets.target_weight_kg,
        weight_pace.current_weight,
        weight_pace.weekly_rate,
    ) {
        (Some(target), Some(current), Some(rate)) => pace::weeks_to_target(current, rate, target),
        _ => None,
    };

    let body_weight = profile
        .current_weight_kg
        .or_else(|| weights.last().map(|w| w.weight_kg));

    let recommendation = match macros::recommend(&profile) {
        Ok(r) => Some(r),
        Err(AnalyticsError::IncompleteProfile { .. }) => None,
        Err(e) => return Err(e.into()),
    };
    let effective = macros::effective_targets(&profile, targets)?;

    let expected = expected_days(window, days);

    let achievements = achievements::unlocked(&AchievementInputs {
        streaks: &streaks,
        days,
        protein_target_g: effective.protein_g,
        weight: analysis.as_ref(),
        workouts: sessions.workouts,
    });

    tracing::debug!(
        days = days.len(),
        rejected = agg.rejected.len(),
        achievements = achievements.len(),
        "analytics computed"
    );

    Ok(AnalyticsReport {
        window: *window,
        today,
        daily_data: days.clone(),
        overall: aggregate::overall_stats(days),
        streaks,
        weekly_summary,
        weekly_progress,
        weight: WeightSection {
            analysis,
            pace: weight_pace,
            volatility,
            target_weight: targets.target_weight_kg,
            weeks_to_target,
        },
        macro_analysis: breakdown::macro_analysis(days, body_weight),
        consistency: score::consistency_score(days),
        nutrition: score::nutrition_score(days, expected, &effective),
        calorie_budget: breakdown::calorie_budget(days, effective.calories),
        targets: effective,
        recommendation,
        calorie_distribution: breakdown::calorie_distribution(days),
        day_of_week: breakdown::day_of_week_stats(days),
        weekday_insights: breakdown::weekday_insights(days),
        best_worst_days: breakdown::best_worst_days(days),
        meal_timing: breakdown::meal_timing(&agg.entries),
        top_foods: breakdown::top_foods(&agg.entries, TOP_FOODS_LIMIT),
        weekly_reports: reports::period_reports(days, ReportPeriod::Weekly, REPORT_LIMIT),
        monthly_reports: reports::period_reports(days, ReportPeriod::Monthly, REPORT_LIMIT),
        achievements,
        rejected_entries: agg.rejected.len(),
    })
}
