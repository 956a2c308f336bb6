use crate::common;
use node_credentials::{
    AuthenticatedCredential, Credential, CredentialError, CredentialErrorKind, CredentialManager,
    ManagerConfig, OperatorType, SecretKey,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn manager_with(key: &[u8]) -> CredentialManager {
    CredentialManager::new(SecretKey::new(key.to_vec()).unwrap())
}

#[test]
fn create_truncates_to_whole_seconds() {
    let manager = super::manager();
    let t = UNIX_EPOCH + Duration::from_millis(1_700_000_000_999);
    let auth = manager
        .create(t, &common::test_node_id(), OperatorType::Solo)
        .unwrap();
    assert_eq!(auth.timestamp(), 1_700_000_000);
}

#[test]
fn create_before_epoch_yields_negative_timestamp() {
    let manager = super::manager();
    let t = UNIX_EPOCH - Duration::from_secs(10);
    let auth = manager
        .create(t, &common::test_node_id(), OperatorType::Solo)
        .unwrap();
    assert_eq!(auth.timestamp(), -10);
    manager.verify(&auth).unwrap();
}

#[test]
fn create_preserves_inputs() {
    let manager = super::manager();
    let now = SystemTime::now();
    let auth = manager
        .create(now, &common::test_node_id(), OperatorType::RocketPool)
        .unwrap();

    assert_eq!(auth.node_id(), common::test_node_id().as_slice());
    assert_eq!(auth.operator_type(), OperatorType::RocketPool);
    assert_eq!(auth.timestamp(), node_credentials::unix_seconds(now));
    assert_eq!(auth.mac().len(), node_credentials::MAC_SIZE);
}

#[test]
fn create_rejects_19_and_21_byte_ids() {
    let manager = super::manager();
    for id in [vec![0u8; 19], vec![0u8; 21]] {
        let err = manager
            .create(SystemTime::now(), &id, OperatorType::Solo)
            .unwrap_err();
        assert_eq!(err.kind(), CredentialErrorKind::InvalidInput);
        assert!(err.to_string().contains("20"));
    }
}

#[test]
fn same_input_same_key_same_mac() {
    let a = super::manager();
    let b = super::manager();
    let x = a
        .create_at(42, &common::test_node_id(), OperatorType::Solo)
        .unwrap();
    let y = b
        .create_at(42, &common::test_node_id(), OperatorType::Solo)
        .unwrap();
    assert_eq!(x, y);
}

#[test]
fn mac_depends_on_every_field() {
    let manager = super::manager();
    let base = manager
        .create_at(42, &common::test_node_id(), OperatorType::Solo)
        .unwrap();

    let mut other_id = common::test_node_id();
    other_id[19] ^= 1;
    let variants = [
        manager.create_at(43, &common::test_node_id(), OperatorType::Solo),
        manager.create_at(42, &common::test_node_id(), OperatorType::RocketPool),
        manager.create_at(42, &other_id, OperatorType::Solo),
    ];
    for variant in variants {
        assert_ne!(variant.unwrap().mac(), base.mac());
    }
}

#[test]
fn verify_rejects_flipped_mac_bit() {
    let manager = super::manager();
    let auth = manager
        .create_at(7, &common::test_node_id(), OperatorType::Solo)
        .unwrap();
    let (credential, mut mac) = auth.into_parts();
    mac[0] ^= 0x80;

    let err = manager
        .verify(&AuthenticatedCredential::from_parts(credential, mac))
        .unwrap_err();
    assert!(matches!(err, CredentialError::MacMismatch));
}

#[test]
fn verify_rejects_truncated_and_empty_mac() {
    let manager = super::manager();
    let auth = manager
        .create_at(7, &common::test_node_id(), OperatorType::Solo)
        .unwrap();

    for len in [0, 16, 31] {
        let short = AuthenticatedCredential::from_parts(
            auth.credential().clone(),
            auth.mac()[..len].to_vec(),
        );
        assert!(manager.verify(&short).unwrap_err().is_authentication_failure());
    }
}

#[test]
fn verify_rejects_changed_operator_type() {
    let manager = super::manager();
    let auth = manager
        .create_at(7, &common::test_node_id(), OperatorType::Solo)
        .unwrap();
    let swapped = AuthenticatedCredential::from_parts(
        Credential::new(common::test_node_id(), OperatorType::RocketPool, 7),
        auth.mac().to_vec(),
    );
    assert!(manager.verify(&swapped).is_err());
}

#[test]
fn verify_under_different_key_fails() {
    let issuer = super::manager();
    let auth = issuer
        .create_at(7, &common::test_node_id(), OperatorType::Solo)
        .unwrap();

    let mut near_key = common::test_key_bytes();
    near_key[31] ^= 1;
    for key in [near_key, vec![0x20], b"another deployment".to_vec()] {
        assert!(manager_with(&key).verify(&auth).is_err());
    }
}

#[test]
fn any_nonempty_key_length_works() {
    for key in [vec![1u8], vec![2u8; 64], vec![3u8; 200]] {
        let manager = manager_with(&key);
        let auth = manager
            .create_at(1, &common::test_node_id(), OperatorType::Solo)
            .unwrap();
        manager.verify(&auth).unwrap();
    }
}

#[test]
fn empty_key_is_rejected_at_construction() {
    let err = SecretKey::new(Vec::new()).unwrap_err();
    assert_eq!(err.kind(), CredentialErrorKind::InvalidInput);
}

#[test]
fn with_config_small_pool_behaves_identically() {
    let key = SecretKey::new(common::test_key_bytes()).unwrap();
    let small = CredentialManager::with_config(key, &ManagerConfig::default().with_pool_capacity(1));
    let default = super::manager();

    let a = small
        .create_at(1_700_000_000, &common::test_node_id(), OperatorType::Solo)
        .unwrap();
    let b = default
        .create_at(1_700_000_000, &common::test_node_id(), OperatorType::Solo)
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(small.pool().capacity(), 1);
}

#[test]
fn compute_mac_matches_created_mac() {
    let manager = super::manager();
    let auth = manager
        .create_at(99, &common::test_node_id(), OperatorType::RocketPool)
        .unwrap();
    assert_eq!(manager.compute_mac(auth.credential()).unwrap(), auth.mac());
}
