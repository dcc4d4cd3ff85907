//! Engine scenarios and properties over random block sequences.

use acal_schedule::{ActivityCode, Block, BlockConsumptionEngine, BlockSequence};
use acal_time::{AcademicYear, Calendar, Date, HolidayCalendar, WeekendsOnly};
use approx::assert_relative_eq;
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn block_strategy() -> impl Strategy<Value = Block> {
    let codes = prop::sample::select(vec![
        ActivityCode::Theory,
        ActivityCode::Practice,
        ActivityCode::InterimAssessment,
        ActivityCode::FinalAssessment,
        ActivityCode::Vacation,
    ]);
    // Week counts in tenths between 0.2 and 20.0
    (codes, 2u32..=200).prop_map(|(code, tenths)| Block::new(code, tenths as f64 / 10.0).unwrap())
}

fn sequence_strategy() -> impl Strategy<Value = BlockSequence> {
    prop::collection::vec(block_strategy(), 1..12).prop_map(|b| BlockSequence::new(b).unwrap())
}

#[test]
fn scenario_theory_then_vacation() {
    let year = AcademicYear::new(2025, 2026).unwrap();
    let seq = BlockSequence::new(vec![
        Block::new(ActivityCode::Theory, 2.0).unwrap(),
        Block::new(ActivityCode::Vacation, 1.0).unwrap(),
    ])
    .unwrap();
    let out = BlockConsumptionEngine::new(&WeekendsOnly, year.end_date())
        .consume(year.start_date(), &seq);

    let spans: Vec<_> = out
        .periods
        .iter()
        .map(|p| (p.code, p.start_date, p.end_date))
        .collect();
    assert_eq!(
        spans,
        vec![
            (ActivityCode::Theory, date(2025, 9, 1), date(2025, 9, 12)),
            (ActivityCode::Vacation, date(2025, 9, 15), date(2025, 9, 19)),
        ]
    );
    assert_relative_eq!(out.periods[0].weeks, 2.0);
}

#[test]
fn scenario_unity_day_inside_block() {
    let cal = HolidayCalendar::russia();
    // Theory begins Mon 2025-10-27; Nov 3 and 4 are days off
    let seq = BlockSequence::new(vec![Block::new(ActivityCode::Theory, 2.0).unwrap()]).unwrap();
    let out = BlockConsumptionEngine::new(&cal, date(2026, 8, 31)).consume(date(2025, 10, 27), &seq);

    let period = &out.periods[0];
    assert_eq!(period.day_count(), 10);
    assert_eq!(period.end_date, date(2025, 11, 11));
    assert!(period.assigned_days.iter().all(|&d| cal.is_working_day(d)));
}

#[test]
fn scenario_demand_exceeds_horizon() {
    let year = AcademicYear::new(2025, 2026).unwrap();
    let seq = BlockSequence::new(vec![
        Block::new(ActivityCode::Theory, 40.0).unwrap(),
        Block::new(ActivityCode::Practice, 20.0).unwrap(),
        Block::new(ActivityCode::Vacation, 4.0).unwrap(),
    ])
    .unwrap();
    let out = BlockConsumptionEngine::new(&WeekendsOnly, year.end_date())
        .consume(year.start_date(), &seq);

    let exhaustion = out.exhaustion.expect("sequence should not fit");
    assert_eq!(exhaustion.requested, 320);
    assert_eq!(exhaustion.assigned, 261);
    assert_eq!(exhaustion.blocks_unscheduled, 1);
    let last = out.periods.last().unwrap();
    assert!(last.partial);
    assert_eq!(last.day_count(), 61);
    assert_eq!(last.end_date, date(2026, 8, 31));
}

proptest! {
    #[test]
    fn quota_order_and_working_days(seq in sequence_strategy(), skip in 0i32..7) {
        let cal = HolidayCalendar::russia();
        let years = AcademicYear::parse_list("2025/2026 2026/2027").unwrap();
        let start = years[0].start_date() + skip;
        let out = BlockConsumptionEngine::new(&cal, years[1].end_date()).consume(start, &seq);

        prop_assert!(out.periods.len() <= seq.len());
        for (period, block) in out.periods.iter().zip(seq.iter()) {
            prop_assert_eq!(period.code, block.code());
            if !period.partial {
                prop_assert_eq!(period.day_count(), block.working_days_needed());
            }
            prop_assert!(period.assigned_days.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(period.assigned_days.iter().all(|&d| cal.is_working_day(d)));
        }
        for pair in out.periods.windows(2) {
            prop_assert!(pair[0].end_date < pair[1].start_date);
            prop_assert!(!pair[0].partial);
        }
        if out.exhaustion.is_none() {
            prop_assert_eq!(out.periods.len(), seq.len());
        }
    }

    #[test]
    fn consumption_is_deterministic(seq in sequence_strategy()) {
        let cal = HolidayCalendar::russia();
        let engine = BlockConsumptionEngine::new(&cal, date(2027, 8, 31));
        let a = engine.consume(date(2025, 9, 1), &seq);
        let b = engine.consume(date(2025, 9, 1), &seq);
        prop_assert_eq!(a, b);
    }
}
