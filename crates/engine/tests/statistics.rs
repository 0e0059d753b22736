use chrono::NaiveDate;

use engine::{CostMode, FillState, Garage, Insight, MaintenanceKind, OilGrade, compute_efficiency};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn garage_with_vehicle() -> (Garage, Uuid) {
    let mut garage = Garage::new();
    let vehicle_id = garage.new_vehicle("Duke", 0.0).unwrap();
    (garage, vehicle_id)
}

fn add_fill(
    garage: &mut Garage,
    vehicle_id: Uuid,
    day: NaiveDate,
    odometer: f64,
    volume: f64,
    price: f64,
    vendor: Option<&str>,
    state: FillState,
) {
    garage
        .add_fuel_record(vehicle_id, day, odometer, volume, price, vendor, None, state)
        .unwrap();
}

#[test]
fn empty_and_singleton_logs_yield_zero_stats() {
    let (mut garage, vehicle_id) = garage_with_vehicle();
    let today = date(2026, 7, 15);

    let snapshot = garage.statistics(vehicle_id, CostMode::Total, today).unwrap();
    assert_eq!(snapshot.average_efficiency, 0.0);
    assert!(snapshot.efficiency_history.is_empty());

    add_fill(
        &mut garage,
        vehicle_id,
        today,
        100.0,
        8.0,
        120.0,
        None,
        FillState::Full,
    );
    let snapshot = garage.statistics(vehicle_id, CostMode::Total, today).unwrap();
    assert_eq!(snapshot.average_efficiency, 0.0);
    assert!(snapshot.efficiency_history.is_empty());
    assert_eq!(snapshot.fuel_entry_count, 1);
}

#[test]
fn partial_fill_is_bridged_not_counted() {
    let (mut garage, vehicle_id) = garage_with_vehicle();
    let today = date(2026, 7, 15);

    add_fill(&mut garage, vehicle_id, today, 0.0, 6.0, 110.0, None, FillState::Full);
    add_fill(&mut garage, vehicle_id, today, 100.0, 5.0, 110.0, None, FillState::Partial);
    add_fill(&mut garage, vehicle_id, today, 200.0, 8.0, 110.0, None, FillState::Full);

    let snapshot = garage.statistics(vehicle_id, CostMode::Total, today).unwrap();
    assert_eq!(snapshot.efficiency_history, vec![25.0]);
    assert_eq!(snapshot.average_efficiency, 25.0);
    // The partial fill still counts toward lifetime fuel spend.
    assert_eq!(snapshot.total_fuel_cost, (6.0 + 5.0 + 8.0) * 110.0);
}

#[test]
fn shuffled_input_matches_sorted_input() {
    let entries = [
        (300.0, 7.0, FillState::Full),
        (0.0, 6.0, FillState::Full),
        (450.0, 6.5, FillState::Partial),
        (150.0, 5.0, FillState::Full),
        (600.0, 8.0, FillState::Full),
    ];

    let build = |order: &[usize]| {
        let (mut garage, vehicle_id) = garage_with_vehicle();
        for &i in order {
            let (odometer, volume, state) = entries[i];
            add_fill(
                &mut garage,
                vehicle_id,
                date(2026, 7, 1),
                odometer,
                volume,
                100.0,
                None,
                state,
            );
        }
        let vehicle = garage.vehicle(vehicle_id).unwrap();
        compute_efficiency(&vehicle.fuel_log)
    };

    let sorted = build(&[1, 3, 0, 2, 4]);
    let shuffled = build(&[4, 0, 2, 1, 3]);

    assert_eq!(sorted.history, shuffled.history);
    assert_eq!(sorted.average, shuffled.average);
    assert_eq!(sorted.best, shuffled.best);
    assert_eq!(sorted.worst, shuffled.worst);
    assert_eq!(sorted.total_fuel_cost, shuffled.total_fuel_cost);
}

#[test]
fn best_and_worst_bound_the_history_and_average() {
    let (mut garage, vehicle_id) = garage_with_vehicle();
    let today = date(2026, 7, 15);

    for (odometer, volume) in [(0.0, 5.0), (130.0, 4.0), (300.0, 6.5), (420.0, 4.2)] {
        add_fill(
            &mut garage,
            vehicle_id,
            today,
            odometer,
            volume,
            105.0,
            None,
            FillState::Full,
        );
    }

    let snapshot = garage.statistics(vehicle_id, CostMode::Total, today).unwrap();
    assert!(!snapshot.efficiency_history.is_empty());
    for value in &snapshot.efficiency_history {
        assert!(snapshot.worst_efficiency <= *value);
        assert!(*value <= snapshot.best_efficiency);
    }
    assert!(snapshot.worst_efficiency <= snapshot.average_efficiency);
    assert!(snapshot.average_efficiency <= snapshot.best_efficiency);
}

#[test]
fn cost_per_distance_falls_back_to_lifetime_average() {
    let (mut garage, vehicle_id) = garage_with_vehicle();
    let today = date(2026, 7, 15);

    // A single eligible fill: no efficiency average. Distance accrues to 500
    // through the maintenance log; lifetime fuel spend is 1000.
    add_fill(
        &mut garage,
        vehicle_id,
        today,
        100.0,
        10.0,
        100.0,
        None,
        FillState::Full,
    );
    garage
        .add_maintenance_record(
            vehicle_id,
            today,
            500.0,
            "Inspection".to_string(),
            MaintenanceKind::Service,
            0.0,
            0.0,
        )
        .unwrap();

    let snapshot = garage.statistics(vehicle_id, CostMode::Fuel, today).unwrap();
    assert_eq!(snapshot.average_efficiency, 0.0);
    assert_eq!(snapshot.distance_total, 500.0);
    assert_eq!(snapshot.cost_per_distance, 2.0);
}

#[test]
fn monthly_spend_respects_month_boundaries() {
    let (mut garage, vehicle_id) = garage_with_vehicle();
    let today = date(2026, 7, 15);

    // Last day of the previous month: excluded.
    add_fill(
        &mut garage,
        vehicle_id,
        date(2026, 6, 30),
        100.0,
        5.0,
        100.0,
        None,
        FillState::Full,
    );
    // First day of the current month: included.
    add_fill(
        &mut garage,
        vehicle_id,
        date(2026, 7, 1),
        200.0,
        5.0,
        100.0,
        None,
        FillState::Full,
    );
    garage
        .add_oil_record(
            vehicle_id,
            date(2026, 7, 3),
            250.0,
            "Motul".to_string(),
            OilGrade::FullSynthetic,
            1.2,
            900.0,
        )
        .unwrap();
    garage
        .add_maintenance_record(
            vehicle_id,
            date(2026, 6, 30),
            260.0,
            "Brake pads".to_string(),
            MaintenanceKind::Parts,
            400.0,
            100.0,
        )
        .unwrap();

    let snapshot = garage.statistics(vehicle_id, CostMode::Total, today).unwrap();
    assert_eq!(snapshot.monthly_fuel_spend, 500.0);
    assert_eq!(snapshot.monthly_oil_spend, 900.0);
    assert_eq!(snapshot.monthly_maintenance_spend, 0.0);
    assert_eq!(snapshot.monthly_spend(), 1400.0);
    // Lifetime totals ignore the bucketing.
    assert_eq!(snapshot.total_spent(), 1000.0 + 900.0 + 500.0);
}

#[test]
fn vendor_ranking_tie_breaks_deterministically() {
    let (mut garage, vehicle_id) = garage_with_vehicle();
    let today = date(2026, 7, 15);

    // Two vendors with identical 25.0 effective efficiency; Esso closes the
    // earlier interval so it is encountered first.
    add_fill(&mut garage, vehicle_id, today, 0.0, 5.0, 100.0, None, FillState::Full);
    add_fill(&mut garage, vehicle_id, today, 100.0, 4.0, 100.0, Some("Esso"), FillState::Full);
    add_fill(&mut garage, vehicle_id, today, 200.0, 4.0, 100.0, Some("Shell"), FillState::Full);

    let snapshot = garage.statistics(vehicle_id, CostMode::Total, today).unwrap();
    assert_eq!(
        snapshot.best_vendor().map(|v| v.vendor.as_str()),
        Some("Esso")
    );
    assert_eq!(
        snapshot.worst_vendor().map(|v| v.vendor.as_str()),
        Some("Esso")
    );
}

#[test]
fn oil_due_insight_triggers_exactly_at_window() {
    let today = date(2026, 7, 15);

    let remaining_for = |fuel_odometer: f64| {
        let (mut garage, vehicle_id) = garage_with_vehicle();
        garage
            .add_oil_record(
                vehicle_id,
                today,
                0.0,
                "Motul".to_string(),
                OilGrade::Mineral,
                1.0,
                600.0,
            )
            .unwrap();
        add_fill(
            &mut garage,
            vehicle_id,
            today,
            fuel_odometer,
            5.0,
            100.0,
            None,
            FillState::Full,
        );
        garage.insights(vehicle_id, CostMode::Total, today).unwrap()
    };

    // Next change at 1000; odometer 800 leaves exactly 200 remaining.
    let at_boundary = remaining_for(800.0);
    assert!(at_boundary.iter().any(|insight| matches!(
        insight,
        Insight::OilChangeDue { remaining, .. } if *remaining == 200.0
    )));

    // 201 remaining: no oil insight at all.
    let outside = remaining_for(799.0);
    assert!(!outside.iter().any(|insight| matches!(
        insight,
        Insight::OilChangeDue { .. } | Insight::OilChangeOverdue { .. }
    )));
}

#[test]
fn snapshot_serializes_for_presentation() {
    let (mut garage, vehicle_id) = garage_with_vehicle();
    let today = date(2026, 7, 15);

    add_fill(
        &mut garage,
        vehicle_id,
        today,
        150.0,
        5.0,
        100.0,
        Some("Shell"),
        FillState::Full,
    );

    let snapshot = garage.statistics(vehicle_id, CostMode::Total, today).unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["current_odometer"], 150.0);
    assert_eq!(json["fuel_entry_count"], 1);
    assert_eq!(json["last_fill"]["vendor"], "Shell");
}
