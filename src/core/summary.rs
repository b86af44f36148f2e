//! Summary statistics over a weekly trend matrix

use std::collections::BTreeSet;

use crate::core::types::{MoodFrequency, Summary, TrendMatrix};

pub(crate) fn summarize(matrix: &TrendMatrix) -> Summary {
    let mut logged_days = BTreeSet::new();
    for row in matrix.rows() {
        for (day, slot) in row.slots.iter().enumerate() {
            if slot.is_some() {
                logged_days.insert(day);
            }
        }
    }

    let frequencies: Vec<MoodFrequency> = matrix
        .rows()
        .iter()
        .map(|row| MoodFrequency {
            mood: row.mood.clone(),
            count: row.logged_count(),
        })
        .collect();

    Summary {
        logged_days: logged_days.len(),
        top_mood: top_mood(&frequencies),
        consistency: consistency(&frequencies),
        frequencies,
    }
}

/// Most frequent mood; ties go to the earlier catalog entry
fn top_mood(frequencies: &[MoodFrequency]) -> Option<String> {
    let mut best: Option<&MoodFrequency> = None;
    for f in frequencies.iter().filter(|f| f.count > 0) {
        if best.is_none_or(|b| f.count > b.count) {
            best = Some(f);
        }
    }
    best.map(|f| f.mood.clone())
}

/// 100 minus the mean absolute deviation of the non-zero counts, as a
/// percentage of all logged slots. Summed in catalog order.
fn consistency(frequencies: &[MoodFrequency]) -> u32 {
    let counts: Vec<f64> = frequencies
        .iter()
        .filter(|f| f.count > 0)
        .map(|f| f.count as f64)
        .collect();
    let total: f64 = counts.iter().sum();
    if total == 0.0 {
        return 0;
    }

    let avg = total / counts.len() as f64;
    let variation: f64 = counts.iter().map(|c| (c - avg).abs()).sum();
    let penalty = ((variation / total) * 100.0).floor();
    (100.0 - penalty).max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{MoodCatalog, MoodSpec};

    fn catalog(labels: &[&str]) -> MoodCatalog {
        let specs: Vec<MoodSpec> = labels
            .iter()
            .map(|l| MoodSpec {
                label: l.to_string(),
                color: "#000000".to_string(),
            })
            .collect();
        MoodCatalog::from_specs(&specs).unwrap()
    }

    fn freq(pairs: &[(&str, usize)]) -> Vec<MoodFrequency> {
        pairs
            .iter()
            .map(|(m, c)| MoodFrequency {
                mood: m.to_string(),
                count: *c,
            })
            .collect()
    }

    #[test]
    fn all_null_matrix_summarizes_to_defaults() {
        let m = TrendMatrix::empty(&catalog(&["joy", "sad"]));
        let s = summarize(&m);
        assert_eq!(s.logged_days, 0);
        assert_eq!(s.top_mood, None);
        assert_eq!(s.consistency, 0);
        assert!(s.frequencies.iter().all(|f| f.count == 0));
    }

    #[test]
    fn scenario_joy_twice_sad_once() {
        let mut m = TrendMatrix::empty(&catalog(&["joy", "sad", "angry"]));
        m.set("joy", 0, 3);
        m.set("sad", 0, 2);
        m.set("joy", 2, 3);
        let s = summarize(&m);
        assert_eq!(s.logged_days, 2);
        assert_eq!(s.top_mood.as_deref(), Some("joy"));
        assert_eq!(s.consistency, 67);
        assert_eq!(s.frequencies, freq(&[("joy", 2), ("sad", 1), ("angry", 0)]));
    }

    #[test]
    fn tie_goes_to_catalog_order() {
        let mut m = TrendMatrix::empty(&catalog(&["joy", "sad", "calm"]));
        m.set("sad", 0, 2);
        m.set("sad", 1, 2);
        m.set("joy", 3, 3);
        m.set("joy", 4, 3);
        assert_eq!(summarize(&m).top_mood.as_deref(), Some("joy"));

        let mut m = TrendMatrix::empty(&catalog(&["sad", "joy", "calm"]));
        m.set("joy", 0, 2);
        m.set("joy", 1, 2);
        m.set("sad", 3, 3);
        m.set("sad", 4, 3);
        assert_eq!(summarize(&m).top_mood.as_deref(), Some("sad"));
    }

    #[test]
    fn single_mood_is_fully_consistent() {
        assert_eq!(consistency(&freq(&[("joy", 5)])), 100);
        assert_eq!(consistency(&freq(&[("joy", 0), ("calm", 1)])), 100);
    }

    #[test]
    fn even_spread_is_fully_consistent_too() {
        // Spread is measured against the mean of logged moods only.
        assert_eq!(consistency(&freq(&[("joy", 2), ("sad", 2)])), 100);
    }

    #[test]
    fn uneven_spread_is_penalized() {
        // total 7, avg 7/3, variation |5-a|+|1-a|+|1-a| = 16/3, 16/21 = 76.19%
        assert_eq!(consistency(&freq(&[("joy", 5), ("sad", 1), ("calm", 1)])), 24);
    }

    #[test]
    fn consistency_stays_within_bounds() {
        let shapes: [&[(&str, usize)]; 5] = [
            &[("a", 1)],
            &[("a", 7), ("b", 1)],
            &[("a", 1), ("b", 1), ("c", 1), ("d", 1), ("e", 1), ("f", 1), ("g", 1)],
            &[("a", 7), ("b", 1), ("c", 1), ("d", 1), ("e", 1), ("f", 1), ("g", 1)],
            &[("a", 3), ("b", 0), ("c", 2)],
        ];
        for shape in shapes {
            let c = consistency(&freq(shape));
            assert!(c <= 100, "{shape:?} -> {c}");
        }
    }

    #[test]
    fn logged_days_counts_distinct_day_indices() {
        let mut m = TrendMatrix::empty(&catalog(&["joy", "sad"]));
        m.set("joy", 6, 2);
        m.set("sad", 6, 1);
        m.set("sad", 5, 1);
        assert_eq!(summarize(&m).logged_days, 2);
    }
}
