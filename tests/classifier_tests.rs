// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use formfactor::classifier::{Category, Rule};
use formfactor::signals::{BatteryStatus, PointerSignals, StaticSignals};
use formfactor::{classify, classify_with_report, Classification, DeviceClassifier};

fn phone() -> StaticSignals {
    StaticSignals::new(375, 667)
        .with_touch_points(5)
        .with_pointer(PointerSignals::touch())
        .with_cpu_cores(6)
}

fn workstation() -> StaticSignals {
    StaticSignals::new(2560, 1440)
        .with_pointer(PointerSignals::mouse())
        .with_battery(BatteryStatus::plugged_in_full())
        .with_cpu_cores(8)
}

// ==================== Reference scenarios ====================

#[tokio::test]
async fn test_phone_without_battery_api() {
    let report = classify_with_report(&phone()).await;

    // touch 3 + narrow viewport 3 + coarse pointer 1 + cores 1
    assert_eq!(report.scores.mobile, 8);
    // touch 1 + aspect 1
    assert_eq!(report.scores.laptop, 2);
    // battery fallback 1
    assert_eq!(report.scores.desktop, 1);
    assert_eq!(report.classification, Classification::Mobile);
}

#[tokio::test]
async fn test_workstation_with_idle_battery() {
    let report = classify_with_report(&workstation()).await;

    assert_eq!(report.scores.desktop, 6);
    assert_eq!(report.scores.laptop, 2);
    assert_eq!(report.scores.mobile, 0);
    assert_eq!(report.classification, Classification::Desktop);
}

#[tokio::test]
async fn test_rejected_battery_read_only_adds_fallback() {
    let rejected = workstation().with_failing_battery("NotAllowedError");
    let unsupported = StaticSignals {
        battery: formfactor::signals::BatteryOutcome::Unsupported,
        ..workstation()
    };

    let rejected = classify_with_report(&rejected).await;
    let unsupported = classify_with_report(&unsupported).await;

    assert!(rejected.indicators.desktop.contains(&Rule::BatteryReadFailed));
    assert!(!rejected.indicators.desktop.contains(&Rule::BatteryUnsupported));
    assert!(!rejected.indicators.desktop.contains(&Rule::BatteryIdleFull));
    assert_eq!(rejected.scores, unsupported.scores);
    // width 1 + height 1 + pointer 1 + fallback 1 + cores 1
    assert_eq!(rejected.scores.desktop, 5);
    assert_eq!(rejected.classification, Classification::Desktop);
}

// ==================== Battery block ====================

#[tokio::test]
async fn test_battery_unsupported_adds_exactly_one_desktop_point() {
    let mut desktop_awards = classify_with_report(&StaticSignals::new(1366, 768).with_cpu_cores(7))
        .await
        .trail
        .into_iter()
        .filter(|i| i.category == Category::Desktop);

    let indicator = desktop_awards.next().unwrap();
    assert_eq!(indicator.rule, Rule::BatteryUnsupported);
    assert_eq!(indicator.points, 1);
    assert!(desktop_awards.next().is_none());
}

#[tokio::test]
async fn test_draining_laptop() {
    let signals = StaticSignals::new(1440, 900)
        .with_pointer(PointerSignals::mouse())
        .with_battery(BatteryStatus::discharging(0.63, 14_400.0))
        .with_cpu_cores(8);

    let report = classify_with_report(&signals).await;
    // viewport 1 + not full 4 + charging time 2 + discharging time 2 + aspect 1
    assert_eq!(report.scores.laptop, 10);
    assert_eq!(report.scores.desktop, 2);
    assert_eq!(report.classification, Classification::Laptop);
}

#[tokio::test]
async fn test_touch_laptop_on_charger() {
    let signals = StaticSignals::new(1280, 800)
        .with_touch_points(10)
        .with_pointer(PointerSignals {
            coarse: true,
            fine: true,
            hover: true,
        })
        .with_battery(BatteryStatus::charging(0.4, 3000.0))
        .with_cpu_cores(4);

    let report = classify_with_report(&signals).await;
    assert_eq!(report.classification, Classification::Laptop);
    assert!(report.indicators.laptop.contains(&Rule::CoarseHoverPointer));
    assert!(report.indicators.laptop.contains(&Rule::BatteryCharging));
}

// ==================== Decision ====================

#[tokio::test]
async fn test_weak_signals_are_unknown() {
    // viewport 1 + cores 1 + aspect 1 laptop, battery 1 desktop, cores 1 mobile
    let signals = StaticSignals::new(1024, 768);
    assert_eq!(classify(&signals).await, Classification::Unknown);
}

#[tokio::test]
async fn test_tie_above_threshold_prefers_mobile() {
    // mobile: touch 3 + coarse pointer 1 + aspect 1
    // desktop: width 1 + height 1 + battery fallback 1 + cores 1 + aspect 1
    let signals = StaticSignals::new(3440, 1440)
        .with_touch_points(1)
        .with_pointer(PointerSignals::touch())
        .with_cpu_cores(8);

    let report = classify_with_report(&signals).await;
    assert_eq!(report.scores.mobile, 5);
    assert_eq!(report.scores.desktop, 5);
    assert_eq!(report.classification, Classification::Mobile);
}

#[tokio::test]
async fn test_classifier_struct_matches_free_function() {
    let classifier = DeviceClassifier::new(workstation());
    assert_eq!(
        classifier.classify().await,
        classify(classifier.provider()).await
    );
}

#[tokio::test]
async fn test_trait_object_provider() {
    let providers: Vec<Box<dyn formfactor::SignalProvider>> =
        vec![Box::new(phone()), Box::new(workstation())];

    let mut labels = Vec::new();
    for provider in &providers {
        labels.push(classify(provider.as_ref()).await);
    }
    assert_eq!(labels, vec![Classification::Mobile, Classification::Desktop]);
}

#[tokio::test]
async fn test_concurrent_classifications_are_independent() {
    let mobile_task = tokio::spawn(async { classify(&phone()).await });
    let desktop_task = tokio::spawn(async { classify(&workstation()).await });

    assert_eq!(mobile_task.await.unwrap(), Classification::Mobile);
    assert_eq!(desktop_task.await.unwrap(), Classification::Desktop);
}

#[tokio::test]
async fn test_environment_is_diagnostic_only() {
    let plain = classify_with_report(&phone()).await;
    let tagged =
        classify_with_report(&phone().with_environment("Win32", "Mozilla/5.0 (Windows NT 10.0)"))
            .await;

    assert_eq!(plain.scores, tagged.scores);
    assert_eq!(plain.classification, tagged.classification);
    assert_eq!(tagged.signals.platform, "Win32");
}
