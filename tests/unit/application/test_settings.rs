use robinhood_client::application::config::{ConfigurationManager, Settings};
use robinhood_client::application::rate_limiter::RateLimiter;
use robinhood_client::error::AppError;
use std::thread;

#[test]
fn test_get_token_before_set_fails() {
    let settings = ConfigurationManager::new();
    match settings.get_token() {
        Err(AppError::TokenMissing) => (),
        other => panic!("Expected TokenMissing, got {other:?}"),
    }
}

#[test]
fn test_set_then_get_token() {
    let settings = ConfigurationManager::new();
    settings.set_token("a1b2c3d4e5");
    assert_eq!(settings.get_token().unwrap(), "a1b2c3d4e5");
    assert!(settings.has_token());
}

#[test]
fn test_set_token_overwrites() {
    let settings = ConfigurationManager::new();
    settings.set_token("old");
    settings.set_token(String::from("new"));
    assert_eq!(settings.get_token().unwrap(), "new");
}

#[test]
fn test_default_rate_limit_is_500ms() {
    let settings = ConfigurationManager::new();
    assert_eq!(settings.get_rate_limit(), 500);
}

#[test]
fn test_set_then_get_rate_limit() {
    let settings = ConfigurationManager::new();
    settings.set_rate_limit(2000);
    assert_eq!(settings.get_rate_limit(), 2000);
    settings.set_rate_limit(0);
    assert_eq!(settings.get_rate_limit(), 0);
}

#[test]
fn test_global_is_same_instance() {
    let first = ConfigurationManager::global();
    let second = ConfigurationManager::global();
    assert!(std::ptr::eq(first, second));
    assert!(first.same_instance(second));

    first.set_token("global-token");
    assert_eq!(second.get_token().unwrap(), "global-token");
}

#[test]
fn test_clones_share_settings() {
    let settings = ConfigurationManager::new();
    let handle = settings.clone();
    assert!(settings.same_instance(&handle));

    handle.set_token("shared");
    handle.set_rate_limit(800);
    assert_eq!(settings.get_token().unwrap(), "shared");
    assert_eq!(settings.get_rate_limit(), 800);
}

#[test]
fn test_independent_managers_do_not_share() {
    let a = ConfigurationManager::new();
    let b = ConfigurationManager::new();
    assert!(!a.same_instance(&b));

    a.set_token("only-a");
    assert!(matches!(b.get_token(), Err(AppError::TokenMissing)));
}

#[test]
fn test_with_settings_and_snapshot() {
    let settings = ConfigurationManager::with_settings(Settings {
        auth_token: Some("seed".to_string()),
        rate_limit_ms: 100,
    });
    let snapshot = settings.snapshot();
    settings.set_rate_limit(300);

    assert_eq!(snapshot.auth_token.as_deref(), Some("seed"));
    assert_eq!(snapshot.rate_limit_ms, 100);
    assert_eq!(settings.get_rate_limit(), 300);
}

#[test]
fn test_concurrent_writers() {
    let settings = ConfigurationManager::new();

    let handles: Vec<_> = (1..=8u64)
        .map(|i| {
            let settings = settings.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    settings.set_rate_limit(i * 100);
                    settings.set_token(format!("token-{i}"));
                    let _ = settings.get_token();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let delay = settings.get_rate_limit();
    assert!(delay % 100 == 0 && (100..=800).contains(&delay));
    assert!(settings.get_token().unwrap().starts_with("token-"));
}

#[test]
fn test_limiter_built_from_settings_delay() {
    let settings = ConfigurationManager::new();
    settings.set_rate_limit(0);

    let mut limiter = RateLimiter::new(settings.rate_limit_delay());
    tokio_test::block_on(async {
        for _ in 0..10 {
            limiter.wait().await;
        }
    });
    assert!(limiter.check());
}
