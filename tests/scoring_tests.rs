use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use nftsentry::application::scoring::{
    price_stability_score, risk_score, volatility, HealthScorer, HealthWeights, ScoringMode,
};
use nftsentry::domain::error::DomainError;
use nftsentry::domain::nft::{Nft, PricePoint};
use nftsentry::domain::risk::{RiskFactor, RiskKind, Severity};
use nftsentry::port::outbound::liquidity::FixedLiquidity;

fn factor(severity: Severity) -> RiskFactor {
    RiskFactor::new(
        RiskKind::SuspiciousActivity,
        severity,
        "flagged",
        DateTime::<Utc>::UNIX_EPOCH,
    )
}

fn history(prices: &[Decimal]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            PricePoint::new(
                DateTime::<Utc>::UNIX_EPOCH + Duration::days(i as i64),
                *price,
            )
        })
        .collect()
}

#[test]
fn risk_score_penalties_by_severity() {
    assert_eq!(risk_score(&[]), 100);
    assert_eq!(risk_score(&[factor(Severity::Low)]), 95);
    assert_eq!(
        risk_score(&[factor(Severity::Medium), factor(Severity::Medium)]),
        70
    );
    assert_eq!(risk_score(&vec![factor(Severity::High); 4]), 0);
}

#[test]
fn risk_score_ignores_factor_order() {
    let a = [factor(Severity::High), factor(Severity::Low)];
    let b = [factor(Severity::Low), factor(Severity::High)];
    assert_eq!(risk_score(&a), risk_score(&b));
    assert_eq!(risk_score(&a), 65);
}

#[test]
fn constant_prices_are_fully_stable() {
    let prices = history(&[dec!(100), dec!(100), dec!(100)]);
    assert_eq!(volatility(&prices), Some(0.0));
    assert_eq!(price_stability_score(&prices), 100);
}

#[test]
fn short_history_is_neutral() {
    assert_eq!(price_stability_score(&[]), 50);
    assert_eq!(price_stability_score(&history(&[dec!(3)])), 50);
}

#[test]
fn volatile_prices_lose_stability() {
    // mean 2, population sd 1, cv 0.5
    let prices = history(&[dec!(1), dec!(3)]);
    assert_eq!(price_stability_score(&prices), 50);

    let wild = history(&[dec!(0.1), dec!(10), dec!(0.1), dec!(10)]);
    assert_eq!(price_stability_score(&wild), 2);
}

#[test]
fn blended_score_mixes_components() {
    let nft = Nft::new("stable", "A", dec!(1)).with_history(history(&[
        dec!(100),
        dec!(100),
        dec!(100),
    ]));
    // 0.4 * 100 + 0.3 * 100 + 0.3 * 70
    assert_eq!(HealthScorer::default().score(&nft).unwrap(), 91);
}

#[test]
fn risk_only_mode_ignores_history() {
    let nft = Nft::new("risky", "A", dec!(1))
        .with_risk_factors(vec![factor(Severity::High)])
        .with_history(history(&[dec!(1), dec!(3)]));
    let scorer = HealthScorer::new(ScoringMode::RiskOnly, HealthWeights::default());
    assert_eq!(scorer.score(&nft).unwrap(), 70);
}

#[test]
fn custom_liquidity_signal_feeds_blend() {
    let nft = Nft::new("liquid", "A", dec!(1));
    let scorer = HealthScorer::default().with_liquidity(FixedLiquidity(100));
    // 0.4 * 100 + 0.3 * 50 + 0.3 * 100
    assert_eq!(scorer.score(&nft).unwrap(), 85);

    let by_value = HealthScorer::default().with_liquidity(|nft: &Nft| -> u8 {
        if nft.value.current > dec!(0) {
            0
        } else {
            100
        }
    });
    // 0.4 * 100 + 0.3 * 50 + 0
    assert_eq!(by_value.score(&nft).unwrap(), 55);
}

#[test]
fn apply_replaces_supplied_scores() {
    let nfts = vec![
        Nft::new("a", "A", dec!(1)).with_health_score(3),
        Nft::new("b", "B", dec!(1)).with_risk_factors(vec![factor(Severity::Medium)]),
    ];
    let scored = HealthScorer::risk_only().apply(nfts).unwrap();
    assert_eq!(scored[0].health_score, 100);
    assert_eq!(scored[1].health_score, 85);
}

#[test]
fn negative_history_is_rejected_before_scoring() {
    let nft = Nft::new("dip", "A", dec!(1)).with_history(history(&[dec!(-5), dec!(1)]));
    let err = HealthScorer::default().score(&nft).unwrap_err();
    assert_eq!(
        err,
        DomainError::NegativePrice {
            nft_id: "dip".into(),
            price: dec!(-5),
        }
    );
    assert_eq!(volatility(&nft.value.historical), None);
    assert_eq!(price_stability_score(&nft.value.historical), 50);
}

#[test]
fn scoring_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HealthScorer>();
    assert_send_sync::<nftsentry::application::PortfolioAnalyzer>();
}
