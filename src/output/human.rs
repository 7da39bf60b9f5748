use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::aggregate::DailyTotals;
use crate::core::analytics::AnalyticsReport;
use crate::core::compare::ComparativeSummary;
use crate::core::macros::{EffectiveTargets, MacroRecommendation};
use crate::core::pace::{PaceAssessment, WeightPace};
use crate::core::score::{ConsistencyScore, Grade, NutritionScore};
use crate::core::streak::StreakSummary;
use crate::core::units;
use crate::models::config::Units;

fn table(header: Vec<&str>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL).set_header(header);
    t
}

fn signed(v: f64) -> String {
    let s = format!("{:+.1}", v);
    if v > 0.0 {
        s.green().to_string()
    } else if v < 0.0 {
        s.red().to_string()
    } else {
        s
    }
}

fn percent(p: Option<f64>) -> String {
    match p {
        Some(p) => format!("{:+.1}%", p),
        None => "n/a".to_string(),
    }
}

/// One row per day with calories and macros.
pub fn format_daily(days: &[DailyTotals]) -> String {
    if days.is_empty() {
        return "No food logged in this period.".to_string();
    }
    let mut t = table(vec!["Date", "Calories", "Protein", "Carbs", "Fat", "Entries"]);
    for d in days {
        t.add_row(vec![
            d.date.to_string(),
            format!("{:.0}", d.calories),
            format!("{:.1} g", d.protein_g),
            format!("{:.1} g", d.carbs_g),
            format!("{:.1} g", d.fat_g),
            d.entry_count.to_string(),
        ]);
    }
    t.to_string()
}

pub fn format_streaks(s: &StreakSummary) -> String {
    let current = if s.current_streak > 0 {
        format!("{} day(s)", s.current_streak).green().bold().to_string()
    } else {
        "0 days".yellow().to_string()
    };
    let mut out = format!(
        "Current streak: {}\nLongest streak: {} day(s)\nDays logged:    {}",
        current, s.longest_streak, s.total_days_logged
    );
    if let Some(rate) = s.consistency_rate {
        out.push_str(&format!("\nConsistency:    {:.1}%", rate));
    }
    out
}

pub fn format_comparison(c: &ComparativeSummary) -> String {
    let mut t = table(vec!["Metric", "This period", "Last period", "Change", "%"]);
    t.add_row(vec![
        "Avg calories".to_string(),
        format!("{:.0}", c.this_period.avg_calories),
        format!("{:.0}", c.last_period.avg_calories),
        signed(c.comparison.calories_diff),
        percent(c.comparison.calories_percent),
    ]);
    t.add_row(vec![
        "Avg protein".to_string(),
        format!("{:.1} g", c.this_period.avg_protein),
        format!("{:.1} g", c.last_period.avg_protein),
        signed(c.comparison.protein_diff),
        percent(c.comparison.protein_percent),
    ]);
    for (label, this, last, diff) in [
        ("Workouts", c.this_period.workouts, c.last_period.workouts, c.comparison.workouts_diff),
        ("Runs", c.this_period.runs, c.last_period.runs, c.comparison.runs_diff),
        (
            "Days logged",
            c.this_period.days_logged,
            c.last_period.days_logged,
            c.comparison.days_logged_diff,
        ),
    ] {
        t.add_row(vec![
            label.to_string(),
            this.to_string(),
            last.to_string(),
            signed(diff as f64),
            String::new(),
        ]);
    }
    t.to_string()
}

fn assessment(a: PaceAssessment) -> String {
    match a {
        PaceAssessment::Slow => a.to_string().yellow().to_string(),
        PaceAssessment::Healthy => a.to_string().green().to_string(),
        PaceAssessment::Aggressive => a.to_string().red().to_string(),
    }
}

pub fn format_pace(p: &WeightPace, user_units: &Units) -> String {
    let unit = units::display_unit(user_units);
    let (Some(start), Some(current)) = (p.start_weight, p.current_weight) else {
        return "No weight entries in this period.".to_string();
    };
    let (start, _) = units::to_display(start, user_units);
    let (current, _) = units::to_display(current, user_units);
    let mut out = format!("Weight: {:.1} -> {:.1} {}", start, current, unit);
    if let Some(days) = p.days {
        out.push_str(&format!(" over {} day(s)", days));
    }

    let Some(rate) = p.weekly_rate else {
        out.push_str("\nNot enough entries to compute a pace.");
        return out;
    };
    let rate = units::to_display_rate(rate, user_units);
    out.push_str(&format!("\nPace: {} {}/week", signed(rate), unit));
    if let Some(a) = p.pace_assessment {
        out.push_str(&format!(" ({})", assessment(a)));
    }
    if let Some(deficit) = p.estimated_daily_deficit {
        out.push_str(&format!("\nEstimated daily balance: {:+.0} kcal", deficit));
    }
    if let Some(proj) = &p.projections {
        let mut t = table(vec!["Horizon", "Projected"]);
        for (label, kg) in [
            ("4 weeks", proj.weeks_4),
            ("8 weeks", proj.weeks_8),
            ("12 weeks", proj.weeks_12),
        ] {
            let (v, _) = units::to_display(kg, user_units);
            t.add_row(vec![label.to_string(), format!("{:.1} {}", v, unit)]);
        }
        out.push('\n');
        out.push_str(&t.to_string());
    }
    out
}

pub fn format_recommendation(r: &MacroRecommendation) -> String {
    let mut out = format!(
        "Goal: {} ({})\nBMR: {:.0} kcal | TDEE: {:.0} kcal\n",
        r.goal.to_string().bold(),
        r.description,
        r.bmr,
        r.tdee
    );
    let mut t = table(vec!["Calories", "Protein", "Carbs", "Fat"]);
    t.add_row(vec![
        format!("{:.0} kcal", r.calories),
        format!("{:.0} g", r.protein_g),
        format!("{:.0} g", r.carbs_g),
        format!("{:.0} g", r.fat_g),
    ]);
    out.push_str(&t.to_string());
    if r.floor_applied {
        out.push_str(&format!(
            "\n{}",
            "Calories raised to the minimum safe intake.".yellow()
        ));
    }
    out
}

pub fn format_targets(t: &EffectiveTargets) -> String {
    let source = if t.is_auto { "recommended" } else { "manual" };
    format!(
        "Targets ({}): {:.0} kcal, {:.0} g protein, {:.0} g carbs, {:.0} g fat",
        source, t.calories, t.protein_g, t.carbs_g, t.fat_g
    )
}

fn grade(g: Grade) -> String {
    match g {
        Grade::A | Grade::B => g.to_string().green().bold().to_string(),
        Grade::C => g.to_string().yellow().bold().to_string(),
        Grade::D | Grade::F => g.to_string().red().bold().to_string(),
    }
}

pub fn format_scores(consistency: Option<&ConsistencyScore>, nutrition: Option<&NutritionScore>) -> String {
    let mut out = String::new();
    match consistency {
        Some(c) => out.push_str(&format!(
            "Consistency: {:.0}/100 ({}), CV {:.1}%, mean {:.0} kcal\n",
            c.score, c.rating, c.cv, c.mean_calories
        )),
        None => out.push_str("Consistency: not enough logged days\n"),
    }
    match nutrition {
        Some(n) => {
            out.push_str(&format!("Nutrition:   {:.0}/100 grade {}\n", n.total, grade(n.grade)));
            let mut t = table(vec!["Component", "Score", "Status"]);
            for c in &n.breakdown {
                t.add_row(vec![
                    c.name.to_string(),
                    format!("{:.1}/{:.0}", c.score, c.max),
                    c.status.to_string(),
                ]);
            }
            out.push_str(&t.to_string());
        }
        None => out.push_str("Nutrition:   nothing logged"),
    }
    out
}

/// Condensed dashboard.
pub fn format_analytics(r: &AnalyticsReport, user_units: &Units) -> String {
    let mut out = format!("{}\n\n", format!("=== HealthLens: {} ===", r.window).bold());

    match &r.overall {
        Some(o) => out.push_str(&format!(
            "Logged {} day(s): avg {:.0} kcal, {:.1} g protein, {:.1} g carbs, {:.1} g fat\n",
            o.total_days_logged,
            o.avg_daily_calories,
            o.avg_daily_protein,
            o.avg_daily_carbs,
            o.avg_daily_fat
        )),
        None => out.push_str("No food logged in this period.\n"),
    }
    out.push_str(&format_targets(&r.targets));
    out.push_str("\n\n");
    out.push_str(&format_streaks(&r.streaks));
    out.push_str(&format!(
        "\nThis week: {}/{} workouts, {}/{} runs\n\n",
        r.weekly_progress.workouts,
        r.weekly_progress.workouts_goal,
        r.weekly_progress.runs,
        r.weekly_progress.runs_goal
    ));

    out.push_str("Last 7 days vs previous 7:\n");
    out.push_str(&format_comparison(&r.weekly_summary));
    out.push_str("\n\n");

    out.push_str(&format_pace(&r.weight.pace, user_units));
    if let Some(weeks) = r.weight.weeks_to_target {
        out.push_str(&format!("\nTarget weight in about {:.1} week(s)", weeks));
    }
    out.push_str("\n\n");

    out.push_str(&format_scores(r.consistency.as_ref(), r.nutrition.as_ref()));

    if let Some(b) = &r.calorie_budget {
        out.push_str(&format!(
            "\n\nCalorie budget: {} day(s) under, {} over ({:.0}% under)",
            b.days_under, b.days_over, b.under_percent
        ));
    }
    if !r.top_foods.by_frequency.is_empty() {
        let names: Vec<String> = r
            .top_foods
            .by_frequency
            .iter()
            .take(5)
            .map(|f| format!("{}({})", f.name, f.count))
            .collect();
        out.push_str(&format!("\nTop foods: {}", names.join(", ")));
    }
    if !r.achievements.is_empty() {
        out.push_str("\n\nAchievements:");
        for a in &r.achievements {
            out.push_str(&format!("\n  {} {} - {}", a.icon, a.title.bold(), a.desc));
        }
    }
    if r.rejected_entries > 0 {
        out.push_str(&format!(
            "\n\n{}",
            format!("{} entr(ies) skipped: invalid date or values", r.rejected_entries).yellow()
        ));
    }
    out
}
