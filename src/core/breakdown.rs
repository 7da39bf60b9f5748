//! Per-window breakdowns of food data: macro split, calorie budget and
//! distribution, weekday patterns, record days, meal timing and top foods.

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::Serialize;
use std::collections::HashMap;

use crate::core::aggregate::{DailyTotals, ValidEntry};
use crate::core::macros::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroAnalysis {
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
    pub protein_per_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieBudget {
    pub target: f64,
    pub days_under: u32,
    pub days_over: u32,
    pub under_percent: f64,
    pub avg_over_amount: Option<f64>,
    pub avg_under_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBucket {
    pub key: &'static str,
    pub label: &'static str,
    pub count: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOfWeekStat {
    pub day: String,
    pub avg_calories: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedCalories {
    pub name: String,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayInsights {
    pub lowest_day: NamedCalories,
    pub highest_day: NamedCalories,
    pub weekday_avg: Option<f64>,
    pub weekend_avg: Option<f64>,
    /// `weekend_avg - weekday_avg`, when both exist.
    pub weekend_difference: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestWorstDays {
    pub lowest_calorie_day: DayRecord,
    pub highest_calorie_day: DayRecord,
    pub highest_protein_day: DayRecord,
}

/// Share of calories eaten in each part of the day, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealTiming {
    pub morning: f64,
    pub midday: f64,
    pub afternoon: f64,
    pub evening: f64,
    pub night: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodStat {
    pub name: String,
    pub count: u32,
    pub total_calories: f64,
    pub total_protein: f64,
    pub avg_calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopFoods {
    pub by_frequency: Vec<FoodStat>,
    pub by_calories: Vec<FoodStat>,
    pub by_protein: Vec<FoodStat>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Macro calorie split and protein per kg body weight.
pub fn macro_analysis(days: &[DailyTotals], body_weight_kg: Option<f64>) -> Option<MacroAnalysis> {
    let n = days.len() as f64;
    let protein: f64 = days.iter().map(|d| d.protein_g).sum();
    let carbs: f64 = days.iter().map(|d| d.carbs_g).sum();
    let fat: f64 = days.iter().map(|d| d.fat_g).sum();

    let protein_kcal = protein * KCAL_PER_G_PROTEIN;
    let carbs_kcal = carbs * KCAL_PER_G_CARBS;
    let fat_kcal = fat * KCAL_PER_G_FAT;
    let total_kcal = protein_kcal + carbs_kcal + fat_kcal;
    if days.is_empty() || total_kcal <= 0.0 {
        return None;
    }

    let avg_protein = protein / n;
    Some(MacroAnalysis {
        protein_percent: protein_kcal / total_kcal * 100.0,
        carbs_percent: carbs_kcal / total_kcal * 100.0,
        fat_percent: fat_kcal / total_kcal * 100.0,
        avg_protein,
        avg_carbs: carbs / n,
        avg_fat: fat / n,
        protein_per_kg: body_weight_kg
            .filter(|w| *w > 0.0)
            .map(|w| avg_protein / w),
    })
}

/// Days at or under the calorie target vs days over it.
pub fn calorie_budget(days: &[DailyTotals], target: f64) -> Option<CalorieBudget> {
    if days.is_empty() {
        return None;
    }
    let (under, over): (Vec<&DailyTotals>, Vec<&DailyTotals>) =
        days.iter().partition(|d| d.calories <= target);
    let over_amounts: Vec<f64> = over.iter().map(|d| d.calories - target).collect();
    let under_amounts: Vec<f64> = under.iter().map(|d| target - d.calories).collect();

    Some(CalorieBudget {
        target,
        days_under: under.len() as u32,
        days_over: over.len() as u32,
        under_percent: under.len() as f64 / days.len() as f64 * 100.0,
        avg_over_amount: mean(&over_amounts),
        avg_under_amount: mean(&under_amounts),
    })
}

const DISTRIBUTION: [(&str, &str, f64); 5] = [
    ("very_low", "< 1500 kcal", 1500.0),
    ("low", "1500-2000 kcal", 2000.0),
    ("moderate", "2000-2500 kcal", 2500.0),
    ("high", "2500-3000 kcal", 3000.0),
    ("very_high", "3000+ kcal", f64::INFINITY),
];

/// Count of days per calorie band. Empty when nothing was logged.
pub fn calorie_distribution(days: &[DailyTotals]) -> Vec<DistributionBucket> {
    if days.is_empty() {
        return Vec::new();
    }
    let mut counts = [0u32; DISTRIBUTION.len()];
    for day in days {
        let idx = DISTRIBUTION
            .iter()
            .position(|(_, _, upper)| day.calories < *upper)
            .unwrap_or(DISTRIBUTION.len() - 1);
        counts[idx] += 1;
    }
    DISTRIBUTION
        .iter()
        .zip(counts)
        .map(|(&(key, label, _), count)| DistributionBucket {
            key,
            label,
            count,
            percent: count as f64 / days.len() as f64 * 100.0,
        })
        .collect()
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Average calories per weekday, Monday first, weekdays without data omitted.
pub fn day_of_week_stats(days: &[DailyTotals]) -> Vec<DayOfWeekStat> {
    let mut buckets: [(f64, u32); 7] = [(0.0, 0); 7];
    for day in days {
        let idx = day.date.weekday().num_days_from_monday() as usize;
        buckets[idx].0 += day.calories;
        buckets[idx].1 += 1;
    }
    buckets
        .iter()
        .enumerate()
        .filter(|(_, (_, count))| *count > 0)
        .filter_map(|(idx, (sum, count))| {
            let weekday = Weekday::try_from(idx as u8).ok()?;
            Some(DayOfWeekStat {
                day: weekday_name(weekday).to_string(),
                avg_calories: sum / *count as f64,
                count: *count,
            })
        })
        .collect()
}

/// Lowest/highest weekday by average calories and the weekend effect.
pub fn weekday_insights(days: &[DailyTotals]) -> Option<WeekdayInsights> {
    let stats = day_of_week_stats(days);
    let lowest = stats
        .iter()
        .fold(None::<&DayOfWeekStat>, |acc, s| match acc {
            Some(a) if a.avg_calories <= s.avg_calories => Some(a),
            _ => Some(s),
        })?;
    let highest = stats
        .iter()
        .fold(None::<&DayOfWeekStat>, |acc, s| match acc {
            Some(a) if a.avg_calories >= s.avg_calories => Some(a),
            _ => Some(s),
        })?;

    let (weekend, weekday): (Vec<&DailyTotals>, Vec<&DailyTotals>) = days
        .iter()
        .partition(|d| matches!(d.date.weekday(), Weekday::Sat | Weekday::Sun));
    let weekend_avg = mean(&weekend.iter().map(|d| d.calories).collect::<Vec<_>>());
    let weekday_avg = mean(&weekday.iter().map(|d| d.calories).collect::<Vec<_>>());

    Some(WeekdayInsights {
        lowest_day: NamedCalories {
            name: lowest.day.clone(),
            calories: lowest.avg_calories,
        },
        highest_day: NamedCalories {
            name: highest.day.clone(),
            calories: highest.avg_calories,
        },
        weekday_avg,
        weekend_avg,
        weekend_difference: weekend_avg.zip(weekday_avg).map(|(we, wd)| we - wd),
    })
}

fn record(day: &DailyTotals) -> DayRecord {
    DayRecord {
        date: day.date,
        calories: day.calories,
        protein_g: day.protein_g,
    }
}

/// Record days; on ties the earliest date wins.
pub fn best_worst_days(days: &[DailyTotals]) -> Option<BestWorstDays> {
    let first = days.first()?;
    let mut lowest = first;
    let mut highest = first;
    let mut most_protein = first;
    for day in &days[1..] {
        if day.calories < lowest.calories {
            lowest = day;
        }
        if day.calories > highest.calories {
            highest = day;
        }
        if day.protein_g > most_protein.protein_g {
            most_protein = day;
        }
    }
    Some(BestWorstDays {
        lowest_calorie_day: record(lowest),
        highest_calorie_day: record(highest),
        highest_protein_day: record(most_protein),
    })
}

/// Calorie share per part of day over entries that carry a time.
pub fn meal_timing(entries: &[ValidEntry]) -> Option<MealTiming> {
    let mut slots = [0.0f64; 5];
    for e in entries {
        let Some(time) = e.time else { continue };
        let idx = match time.hour() {
            5..=10 => 0,
            11..=14 => 1,
            15..=17 => 2,
            18..=21 => 3,
            _ => 4,
        };
        slots[idx] += e.entry.calories;
    }
    let total: f64 = slots.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let pct = |v: f64| v / total * 100.0;
    Some(MealTiming {
        morning: pct(slots[0]),
        midday: pct(slots[1]),
        afternoon: pct(slots[2]),
        evening: pct(slots[3]),
        night: pct(slots[4]),
    })
}

/// Most eaten foods by frequency, calories and protein, `limit` of each.
pub fn top_foods(entries: &[ValidEntry], limit: usize) -> TopFoods {
    let mut by_key: HashMap<String, FoodStat> = HashMap::new();
    for e in entries {
        let name = e.entry.name.trim();
        if name.is_empty() {
            continue;
        }
        let stat = by_key
            .entry(name.to_lowercase())
            .or_insert_with(|| FoodStat {
                name: name.to_string(),
                count: 0,
                total_calories: 0.0,
                total_protein: 0.0,
                avg_calories: 0.0,
            });
        stat.count += 1;
        stat.total_calories += e.entry.calories;
        stat.total_protein += e.entry.protein_g;
    }

    let mut foods: Vec<FoodStat> = by_key
        .into_values()
        .map(|mut f| {
            f.avg_calories = f.total_calories / f.count as f64;
            f
        })
        .collect();
    foods.sort_by(|a, b| a.name.cmp(&b.name));

    let ranked = |key: fn(&FoodStat) -> f64| {
        let mut v = foods.clone();
        v.sort_by(|a, b| key(b).total_cmp(&key(a)));
        v.truncate(limit);
        v
    };

    TopFoods {
        by_frequency: ranked(|f| f.count as f64),
        by_calories: ranked(|f| f.total_calories),
        by_protein: ranked(|f| f.total_protein),
    }
}
