//! Unit tests for summary line formatting.

use fittrack::{ReportLine, Running, Swimming, Workout};

#[test]
fn test_report_line_fields() {
    let workout = Workout::Running(Running {
        action_count: 15000,
        duration_hours: 1.0,
        weight_kg: 75.0,
    });

    let line = ReportLine::from_workout(&workout);

    assert_eq!(line.workout_label, "Running");
    assert_eq!(line.duration_hours, 1.0);
    assert_eq!(line.distance_km, 9.75);
    assert_eq!(line.mean_speed_kmh, 9.75);
    assert!((line.calories_kcal - 797.805).abs() < 1e-9);
}

#[test]
fn test_running_report_template() {
    let workout = Workout::Running(Running {
        action_count: 15000,
        duration_hours: 1.0,
        weight_kg: 75.0,
    });

    assert_eq!(
        ReportLine::from_workout(&workout).to_string(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; \
         Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
         Потрачено ккал: 797.805."
    );
}

#[test]
fn test_trailing_zeros_render_three_decimals() {
    // 336.0 kcal must render as "336.000", not "336".
    let workout = Workout::Swimming(Swimming {
        action_count: 720,
        duration_hours: 1.0,
        weight_kg: 80.0,
        pool_length_m: 25.0,
        pool_lap_count: 40,
    });

    let line = ReportLine::from_workout(&workout).to_string();

    assert!(line.ends_with("Потрачено ккал: 336.000."));
    assert!(line.contains("Ср. скорость: 1.000 км/ч"));
}
