use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use nftsentry::adapter::outbound::bitscrunch::dto::{
    RawNft, RawRisk, UNKNOWN_COLLECTION, UNNAMED_NFT,
};
use nftsentry::application::portfolio::PortfolioAnalyzer;
use nftsentry::domain::risk::{RiskFactor, RiskKind, Severity};

const WALLET_RESPONSE: &str = r#"[
    {
        "id": "ape-1",
        "name": "Ape #1",
        "image_url": "https://img.example.com/1.png",
        "collection_name": "Apes",
        "token_id": "1",
        "contract_address": "0xape",
        "owner": "0xwallet",
        "current_price": 12.5,
        "price_history": [
            {"timestamp": 1704067200000, "price": 12.0},
            {"timestamp": 1704153600000, "price": 13.0}
        ],
        "risk_analysis": [
            {"type": "COPYRIGHT", "severity": "HIGH", "description": "matches known artwork", "detected_at": "2024-01-02T00:00:00Z"}
        ]
    },
    {
        "token_id": "77",
        "contract_address": "0xpunk",
        "owner": "0xwallet",
        "risk_analysis": [
            {"type": "phishing", "severity": "extreme"}
        ]
    }
]"#;

#[test]
fn wallet_response_maps_to_domain() {
    let raw: Vec<RawNft> = serde_json::from_str(WALLET_RESPONSE).expect("parse wallet response");
    let nfts: Vec<_> = raw.into_iter().map(RawNft::into_nft).collect();

    let ape = &nfts[0];
    assert_eq!(ape.id.as_str(), "ape-1");
    assert_eq!(ape.image, "https://img.example.com/1.png");
    assert_eq!(ape.value.current, dec!(12.5));
    assert_eq!(
        ape.value.historical[0].date,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(ape.risk_factors[0].kind(), RiskKind::Copyright);
    assert_eq!(ape.health_score, 70);

    let punk = &nfts[1];
    assert_eq!(punk.id.as_str(), "0xpunk-77");
    assert_eq!(punk.name, UNNAMED_NFT);
    assert_eq!(punk.collection, UNKNOWN_COLLECTION);
    assert_eq!(punk.risk_factors[0].kind(), RiskKind::SuspiciousActivity);
    assert_eq!(punk.risk_factors[0].severity(), Severity::Medium);
    assert_eq!(
        punk.risk_factors[0].detected_at(),
        DateTime::<Utc>::UNIX_EPOCH
    );
    assert_eq!(punk.health_score, 85);
}

#[test]
fn mapped_wallet_feeds_portfolio_analysis() {
    let raw: Vec<RawNft> = serde_json::from_str(WALLET_RESPONSE).expect("parse wallet response");
    let nfts: Vec<_> = raw.into_iter().map(RawNft::into_nft).collect();
    let health = PortfolioAnalyzer::default().analyze(&nfts).expect("valid portfolio");

    assert_eq!(health.total_value, dec!(12.5));
    assert_eq!(health.top_performers[0].id.as_str(), "0xpunk-77");
    assert_eq!(health.risk_distribution.low, 50.0);
    assert_eq!(health.risk_distribution.medium, 50.0);
}

#[test]
fn analyze_response_maps_risk_factors() {
    let raw: Vec<RawRisk> = serde_json::from_str(
        r#"[
            {"type": "wash_trading", "severity": "low", "description": "self trades", "detected_at": 0},
            {"type": "Duplicate", "severity": "Medium"}
        ]"#,
    )
    .expect("parse analyze response");
    let factors: Vec<RiskFactor> = raw.into_iter().map(RiskFactor::from).collect();

    assert_eq!(factors[0].kind(), RiskKind::WashTrading);
    assert_eq!(factors[0].severity(), Severity::Low);
    assert_eq!(factors[0].description(), "self trades");
    assert_eq!(factors[1].kind(), RiskKind::Duplicate);
    assert_eq!(factors[1].description(), "");
}
