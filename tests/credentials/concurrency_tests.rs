use crate::common;
use node_credentials::{
    AuthenticatedCredential, CredentialManager, ManagerConfig, OperatorType, SecretKey,
};
use std::sync::Arc;
use std::sync::atomic::Ordering;

const THREADS: usize = 8;
const PER_THREAD: i64 = 200;

fn node_id_for(thread: usize) -> Vec<u8> {
    let mut id = common::test_node_id();
    id[0] = u8::try_from(thread).unwrap();
    id
}

#[test]
fn parallel_create_and_verify_share_one_manager() {
    let manager = super::manager();

    std::thread::scope(|s| {
        for thread in 0..THREADS {
            let manager = &manager;
            s.spawn(move || {
                let id = node_id_for(thread);
                for ts in 0..PER_THREAD {
                    let auth = manager.create_at(ts, &id, OperatorType::Solo).unwrap();
                    manager.verify(&auth).unwrap();
                }
            });
        }
    });

    let total = (THREADS as u64) * (PER_THREAD as u64);
    assert_eq!(manager.stats().created.load(Ordering::Relaxed), total);
    assert_eq!(manager.stats().verified_ok.load(Ordering::Relaxed), total);
    assert_eq!(manager.stats().verified_fail.load(Ordering::Relaxed), 0);
    assert!(manager.pool().idle() <= manager.pool().capacity());
}

#[test]
fn parallel_results_match_sequential() {
    let manager = super::manager();
    let sequential: Vec<AuthenticatedCredential> = (0..THREADS)
        .map(|t| {
            manager
                .create_at(1_700_000_000, &node_id_for(t), OperatorType::RocketPool)
                .unwrap()
        })
        .collect();

    let parallel: Vec<AuthenticatedCredential> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let manager = &manager;
                s.spawn(move || {
                    manager
                        .create_at(1_700_000_000, &node_id_for(t), OperatorType::RocketPool)
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, sequential);
}

#[test]
fn tiny_pool_under_contention_stays_correct() {
    let key = SecretKey::new(common::test_key_bytes()).unwrap();
    let manager = Arc::new(CredentialManager::with_config(
        key,
        &ManagerConfig::default().with_pool_capacity(1),
    ));
    let good = manager
        .create_at(5, &common::test_node_id(), OperatorType::Solo)
        .unwrap();
    let bad = AuthenticatedCredential::from_parts(good.credential().clone(), vec![1u8; 32]);

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let manager = Arc::clone(&manager);
            let good = good.clone();
            let bad = bad.clone();
            std::thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    assert!(manager.verify(&good).is_ok());
                    assert!(manager.verify(&bad).is_err());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let pool = manager.pool();
    assert_eq!(pool.capacity(), 1);
    assert!(pool.idle() <= 1);
    assert_eq!(
        pool.hits() + pool.misses(),
        1 + 2 * (THREADS as u64) * (PER_THREAD as u64)
    );
}
