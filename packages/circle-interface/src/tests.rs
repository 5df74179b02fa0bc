use std::{collections::BTreeMap, str::FromStr};

use cosmwasm_std::{Decimal256, Uint128};
use serde_json::json;

use crate::{
    decimal_from_f64, AmountError, Distribution, DistributionType, EpochSnapshot, FixedGifts,
    RawAmount,
};

#[test]
fn test_raw_amount_from_number() {
    let amount: RawAmount = serde_json::from_value(json!(1_000_000)).unwrap();
    assert_eq!(amount, RawAmount::new(1_000_000));
}

#[test]
fn test_raw_amount_from_strings() {
    let decimal: RawAmount = serde_json::from_value(json!("250000")).unwrap();
    let hex: RawAmount = serde_json::from_value(json!("0x3d090")).unwrap();

    assert_eq!(decimal, RawAmount::new(250_000));
    assert_eq!(hex, RawAmount::new(250_000));
}

#[test]
fn test_raw_amount_from_big_number_objects() {
    let serialized: RawAmount =
        serde_json::from_value(json!({ "type": "BigNumber", "hex": "0x0de0b6b3a7640000" }))
            .unwrap();
    let in_memory: RawAmount =
        serde_json::from_value(json!({ "_hex": "0x0f4240", "_isBigNumber": true })).unwrap();

    assert_eq!(serialized, RawAmount::new(1_000_000_000_000_000_000));
    assert_eq!(in_memory, RawAmount::new(1_000_000));
}

#[test]
fn test_raw_amount_beyond_u64() {
    let amount: RawAmount =
        serde_json::from_value(json!("340282366920938463463374607431768211455")).unwrap();
    assert_eq!(amount.0, Uint128::MAX);

    assert_eq!(
        RawAmount::from_str("340282366920938463463374607431768211456"),
        Err(AmountError::Overflow {
            value: "340282366920938463463374607431768211456".to_string()
        })
    );
}

#[test]
fn test_raw_amount_rejects_bad_input() {
    assert_eq!(RawAmount::from_str(""), Err(AmountError::Empty {}));
    assert_eq!(RawAmount::from_str("0x"), Err(AmountError::Empty {}));
    assert_eq!(
        RawAmount::from_str("-5"),
        Err(AmountError::Negative {
            value: "-5".to_string()
        })
    );
    assert_eq!(
        RawAmount::from_str("1.5"),
        Err(AmountError::InvalidAmount {
            value: "1.5".to_string()
        })
    );

    assert!(serde_json::from_value::<RawAmount>(json!(-1)).is_err());
    assert!(serde_json::from_value::<RawAmount>(json!(2.5)).is_err());
    assert!(serde_json::from_value::<RawAmount>(json!({ "type": "BigNumber" })).is_err());
    assert!(serde_json::from_value::<RawAmount>(json!(true)).is_err());
}

#[test]
fn test_raw_amount_serializes_as_string() {
    let value = serde_json::to_value(RawAmount::new(42)).unwrap();
    assert_eq!(value, json!("42"));
}

#[test]
fn test_raw_amount_ordering() {
    let mut amounts = vec![
        RawAmount::new(u128::MAX),
        RawAmount::zero(),
        "0x10".parse::<RawAmount>().unwrap(),
        RawAmount::new(2),
    ];
    amounts.sort();
    amounts.dedup();

    assert_eq!(
        amounts,
        vec![
            RawAmount::zero(),
            RawAmount::new(2),
            RawAmount::new(16),
            RawAmount::new(u128::MAX),
        ]
    );
    assert_eq!(amounts.iter().max(), Some(&RawAmount::new(u128::MAX)));
}

#[test]
fn test_decimal_from_f64() {
    assert_eq!(decimal_from_f64(1.5).unwrap(), Decimal256::from_str("1.5").unwrap());
    assert_eq!(decimal_from_f64(0.0).unwrap(), Decimal256::zero());
    assert_eq!(
        decimal_from_f64(1.0123).unwrap(),
        Decimal256::from_str("1.0123").unwrap()
    );
    assert!(matches!(
        decimal_from_f64(-0.5),
        Err(AmountError::Negative { .. })
    ));
    assert!(decimal_from_f64(f64::NAN).is_err());
}

#[test]
fn test_distribution_type_codes() {
    let types: Vec<DistributionType> = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(
        types,
        vec![
            DistributionType::Gift,
            DistributionType::Fixed,
            DistributionType::Combined
        ]
    );
    assert_eq!(
        serde_json::to_value(DistributionType::Combined).unwrap(),
        json!(3)
    );
    assert!(serde_json::from_value::<DistributionType>(json!(4)).is_err());

    assert!(DistributionType::Combined.is_gift_circle());
    assert!(DistributionType::Combined.is_fixed());
    assert!(!DistributionType::Gift.is_fixed());
    assert!(!DistributionType::Fixed.is_gift_circle());
}

#[test]
fn test_fixed_gifts_lookup_ignores_case() {
    let gifts: FixedGifts = serde_json::from_value(json!({
        "0xAbCdEf0000000000000000000000000000000001": "1000000",
        "0x0000000000000000000000000000000000000002": { "type": "BigNumber", "hex": "0x01" },
    }))
    .unwrap();

    assert_eq!(gifts.len(), 2);
    assert_eq!(
        gifts.get("0xabcdef0000000000000000000000000000000001"),
        Some(RawAmount::new(1_000_000))
    );
    assert_eq!(
        gifts.get("0xABCDEF0000000000000000000000000000000001"),
        Some(RawAmount::new(1_000_000))
    );
    assert_eq!(
        gifts.get("0x0000000000000000000000000000000000000002"),
        Some(RawAmount::new(1))
    );
    assert_eq!(gifts.get("0x0000000000000000000000000000000000000003"), None);
}

#[test]
fn test_fixed_gifts_reject_case_variant_addresses() {
    let err = serde_json::from_value::<FixedGifts>(json!({ "0xABC": "5", "0xabc": "7" }))
        .unwrap_err();
    assert!(err.to_string().contains("Address appears more than once: 0xabc"));

    let mut gifts = BTreeMap::new();
    gifts.insert("0xABC".to_string(), RawAmount::new(5));
    gifts.insert(" 0xabc".to_string(), RawAmount::new(7));
    assert_eq!(
        FixedGifts::try_from(gifts).unwrap_err(),
        AmountError::DuplicateAddress {
            address: "0xabc".to_string()
        }
    );
}

#[test]
fn test_distribution_record() {
    let distribution: Distribution = serde_json::from_value(json!({
        "id": 7,
        "distribution_type": 3,
        "vault": { "id": 2, "symbol": "USDC", "decimals": 6 },
        "pricePerShare": 1.05,
        "distribution_json": {
            "fixedGifts": { "0x01": "500000" },
            "merkleRoot": "0xdeadbeef"
        },
        "claims": [
            { "profile_id": 11, "new_amount": "750000" },
            { "profile_id": 12, "new_amount": 0 }
        ]
    }))
    .unwrap();

    assert_eq!(distribution.distribution_type, DistributionType::Combined);
    assert_eq!(distribution.decimals(), Some(6));
    assert_eq!(
        distribution.price_per_share,
        Some(Decimal256::from_str("1.05").unwrap())
    );
    assert_eq!(
        distribution.fixed_gifts().unwrap().get("0x01"),
        Some(RawAmount::new(500_000))
    );
    assert_eq!(distribution.claim_for(Some(11)), Some(RawAmount::new(750_000)));
    assert_eq!(distribution.claim_for(Some(12)), Some(RawAmount::zero()));
    assert_eq!(distribution.claim_for(Some(13)), None);
    assert_eq!(distribution.claim_for(None), None);
}

#[test]
fn test_distribution_record_missing_optionals() {
    let distribution: Distribution = serde_json::from_value(json!({
        "distribution_type": 1,
        "vault": { "symbol": "DAI" },
        "pricePerShare": null,
        "distribution_json": {}
    }))
    .unwrap();

    assert_eq!(distribution.decimals(), None);
    assert_eq!(distribution.price_per_share, None);
    assert_eq!(distribution.fixed_gifts(), None);
    assert!(distribution.claims.is_empty());
}

#[test]
fn test_price_per_share_rejects_negative() {
    let result = serde_json::from_value::<Distribution>(json!({
        "distribution_type": 1,
        "pricePerShare": "-1.5"
    }));
    assert!(result.is_err());
}

#[test]
fn test_epoch_snapshot() {
    let snapshot: EpochSnapshot = serde_json::from_value(json!({
        "epoch": {
            "id": 1,
            "number": 4,
            "start_date": "2022-05-01T00:00:00Z",
            "end_date": "2022-05-15T00:00:00Z",
            "ended": true,
            "token_gifts": null,
            "circle": {
                "id": 9,
                "token_name": "GIVE",
                "users": [{ "role": 1 }],
                "organization": { "vaults": [{ "id": 2, "symbol": "USDC", "decimals": 6 }] }
            },
            "distributions": []
        },
        "circle_users": [
            {
                "id": 100,
                "name": "alice",
                "address": "0x01",
                "role": 1,
                "fixed_payment_amount": "12.5",
                "profile": { "id": 11, "avatar": null }
            }
        ]
    }))
    .unwrap();

    let epoch = snapshot.epoch.unwrap();
    assert!(epoch.token_gifts().is_empty());

    let circle = epoch.circle.unwrap();
    assert!(circle.users[0].is_admin());
    assert_eq!(circle.vault(2).unwrap().display_symbol(), "USDC");
    assert!(circle.vault(3).is_none());

    let alice = &snapshot.circle_users[0];
    assert_eq!(alice.role, Some(1));
    assert_eq!(alice.profile_id(), Some(11));
    assert_eq!(
        alice.fixed_payment_amount,
        Some(Decimal256::from_str("12.5").unwrap())
    );
}
