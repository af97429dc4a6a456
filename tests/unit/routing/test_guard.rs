// Unit tests for the route guard

use credential_gate::config::RouteConfig;
use credential_gate::core::models::RouteDecision;
use credential_gate::routing::RouteGuard;

fn redirect_home() -> RouteDecision {
    RouteDecision::RedirectTo("/".to_string())
}

#[test]
fn test_decision_table() {
    let guard = RouteGuard::default();

    assert_eq!(guard.decide(true, "/login"), redirect_home());
    assert_eq!(guard.decide(true, "/signup"), redirect_home());
    assert_eq!(guard.decide(false, "/login"), RouteDecision::Allow);
    assert_eq!(guard.decide(true, "/dashboard"), RouteDecision::Allow);
    assert_eq!(guard.decide(false, "/dashboard"), RouteDecision::Allow);
}

#[test]
fn test_default_paths() {
    let guard = RouteGuard::default();
    assert_eq!(guard.login_path(), "/login");
    assert_eq!(guard.signup_path(), "/signup");
}

#[test]
fn test_from_config() {
    let guard = RouteGuard::from_config(&RouteConfig {
        login_path: "/sign-in".to_string(),
        signup_path: "/join".to_string(),
    });

    assert_eq!(guard.decide(true, "/sign-in"), redirect_home());
    assert_eq!(guard.decide(true, "/join"), redirect_home());
    assert_eq!(guard.decide(true, "/login"), RouteDecision::Allow);
}

#[test]
fn test_decisions_do_not_depend_on_history() {
    let guard = RouteGuard::default();

    assert_eq!(guard.decide(true, "/login"), redirect_home());
    assert_eq!(guard.decide(false, "/login"), RouteDecision::Allow);
    assert_eq!(guard.decide(true, "/login"), redirect_home());
}
