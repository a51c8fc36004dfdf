//! End-to-end test: sensor packages through dispatch to rendered reports.

use fittrack::{ReportLine, Workout, WorkoutError};

#[test]
fn test_fixed_package_list_renders_expected_reports() {
    let packages: &[(&str, &[f64])] = &[
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    let lines: Vec<String> = packages
        .iter()
        .map(|(code, data)| {
            let workout = Workout::from_package(code, data).unwrap();
            ReportLine::from_workout(&workout).to_string()
        })
        .collect();

    assert_eq!(
        lines,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
             Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
             Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; \
             Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
             Потрачено ккал: 797.805.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; \
             Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; \
             Потрачено ккал: 349.252.",
        ]
    );
}

#[test]
fn test_unknown_package_aborts_the_batch() {
    let packages: &[(&str, &[f64])] = &[
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("XYZ", &[1.0, 2.0, 3.0]),
    ];

    let result: Result<Vec<Workout>, WorkoutError> = packages
        .iter()
        .map(|(code, data)| Workout::from_package(code, data))
        .collect();

    let err = result.unwrap_err();
    assert!(matches!(err, WorkoutError::UnknownWorkoutType(_)));
}
