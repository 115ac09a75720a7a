use evcoid::charset::CHARSET;
use evcoid::{compute_check_digit, normalize, verify, ContractId, Error};

/// Deterministic spread of 14-character payloads over the whole charset.
fn payloads() -> Vec<String> {
    (0..200usize)
        .map(|seed| {
            (0..14usize)
                .map(|i| {
                    let n = (seed * 7 + i * 13 + seed * i * 5) % CHARSET.len();
                    char::from(CHARSET[n])
                })
                .collect()
        })
        .collect()
}

#[test]
fn round_trip_verifies() {
    for payload in payloads() {
        let digit = compute_check_digit(&payload);
        assert!(digit.is_ok(), "{payload}");
        let Ok(digit) = digit else {
            continue;
        };
        let full = format!("{payload}{digit}");
        assert_eq!(verify(&full), Ok(true), "{full}");
    }
}

#[test]
fn normalization_is_idempotent() {
    for raw in ["de-83d-uien83-qgzd", "DE-8AA-CA2B3C4D5-L", "x-y", "ÄB-c"] {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn verify_agrees_with_normalized_form() {
    for raw in [
        "de-83d-uien83-qgzd",
        "De83Duien83qgZd",
        "DE-8AA-CA2B3C4D5-L",
        "de-8aa-ca2b3c4d5-m",
        "de-8aa-ca2b3c4d5",
    ] {
        assert_eq!(verify(raw).ok(), verify(&normalize(raw)).ok(), "{raw}");
    }
}

#[test]
fn length_boundaries() {
    let base = "DE83DUIEN83QGZDAB";
    for len in [13usize, 16] {
        let id = &base[..len];
        assert!(compute_check_digit(id).is_err(), "compute {len}");
        assert!(verify(id).is_err(), "verify {len}");
    }
    assert!(compute_check_digit(&base[..14]).is_ok());
    assert!(compute_check_digit(&base[..15]).is_ok());
    assert!(verify(&base[..14]).is_err());
    assert!(verify(&base[..15]).is_ok());
}

#[test]
fn separators_do_not_count_towards_length() {
    assert_eq!(compute_check_digit("-DE-83D-UIEN83-QGZ-"), Ok('D'));
    assert!(matches!(
        compute_check_digit("DE-83D-UIEN83-QG"),
        Err(Error::InvalidLength { len: 13, .. })
    ));
}

#[test]
fn deterministic() {
    let first = compute_check_digit("DE8AACA2B3C4D5");
    for _ in 0..10 {
        assert_eq!(compute_check_digit("DE8AACA2B3C4D5"), first);
    }
}

#[test]
fn published_scenarios() {
    assert_eq!(compute_check_digit("DE83DUIEN83QGZ"), Ok('D'));
    assert_eq!(verify("DE83DUIEN83QGZD"), Ok(true));
    assert_eq!(verify("de-83d-uien83-qgzd"), Ok(true));
    assert_eq!(verify("DE-8AA-CA2B3C4D5-L"), Ok(true));
    assert!(compute_check_digit("DE83DUIEN83QG").is_err());
    assert!(verify("DE83DUIEN83QGZXX").is_err());
}

#[test]
fn contract_id_round_trip_through_display() {
    for payload in payloads().into_iter().take(20) {
        let id = ContractId::from_payload(&payload);
        assert!(id.is_ok(), "{payload}");
        let Ok(id) = id else {
            continue;
        };
        assert_eq!(ContractId::parse(&id.hyphenated()).as_ref(), Ok(&id));
        assert_eq!(id.to_string().parse::<ContractId>().as_ref(), Ok(&id));
    }
}
