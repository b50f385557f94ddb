//! Published tier descriptors.

use stackcost_sdk::models::Category;
use stackcost_sdk::tiers::{competitor_auth_rate, pricing_info, services};

#[test]
fn every_listed_service_has_info() {
    let ids = services();
    assert_eq!(ids.len(), 5);
    for id in &ids {
        let info = pricing_info(id).unwrap();
        assert_eq!(&info.service, id);
    }
}

#[test]
fn unknown_services_are_none() {
    assert!(pricing_info("supabase-queues").is_none());
    assert!(pricing_info("firebase-database").is_none());
    assert!(pricing_info("").is_none());
}

#[test]
fn realtime_tiers() {
    let info = pricing_info("supabase-realtime").unwrap();
    assert_eq!(info.category, Category::Realtime);
    assert_eq!(info.max_size.as_deref(), Some("3MB"));
    assert_eq!(info.tiers[0].name, "concurrent");
    assert_eq!(info.tiers[0].included, 500.0);
    assert_eq!(info.tiers[0].overage, 0.01);
    assert_eq!(info.tiers[1].name, "messages");
    assert_eq!(info.tiers[1].included, 5_000_000.0);
    assert_eq!(info.tiers[1].overage, 0.0000025);
}

#[test]
fn database_has_base_fee() {
    let info = pricing_info("supabase-database").unwrap();
    assert_eq!(info.base_fee, Some(25.0));
    assert_eq!(info.tiers.len(), 3);
    assert_eq!(info.tiers[0].included, 8.0);
}

#[test]
fn auth_is_unmetered() {
    let info = pricing_info("supabase-auth").unwrap();
    assert!(info.tiers.is_empty());
    assert_eq!(info.base_fee, None);

    let rate = competitor_auth_rate();
    assert_eq!(rate.included, 50_000.0);
    assert_eq!(rate.overage, 0.0055);
}

#[test]
fn serializes_camel_case_and_round_trips() {
    let info = pricing_info("supabase-realtime").unwrap();
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["maxSize"], "3MB");
    assert_eq!(json["category"], "realtime");
    assert!(json["baseFee"].is_null());

    let back: stackcost_sdk::tiers::ServiceTiers = serde_json::from_value(json).unwrap();
    assert_eq!(back, info);
}
