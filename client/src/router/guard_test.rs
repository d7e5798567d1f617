use super::*;
use crate::state::session::MemoryTokenStore;

const PRIVATE_PATHS: [&str; 5] = ["/", "/profile", "/achievements", "/requests", "/notifications"];

// =============================================================
// decide: the four rule combinations
// =============================================================

#[test]
fn private_path_without_token_redirects_to_auth() {
    for path in PRIVATE_PATHS {
        assert_eq!(decide(path, false), NavigationDecision::Redirect("/auth"), "path {path}");
    }
}

#[test]
fn public_path_with_token_redirects_to_profile() {
    for path in PUBLIC_PATHS {
        assert_eq!(decide(path, true), NavigationDecision::Redirect("/profile"), "path {path}");
    }
}

#[test]
fn private_path_with_token_is_allowed() {
    for path in PRIVATE_PATHS {
        assert_eq!(decide(path, true), NavigationDecision::Allow, "path {path}");
    }
}

#[test]
fn public_path_without_token_is_allowed() {
    for path in PUBLIC_PATHS {
        assert_eq!(decide(path, false), NavigationDecision::Allow, "path {path}");
    }
}

// =============================================================
// decide: concrete scenarios
// =============================================================

#[test]
fn profile_without_token_goes_to_auth() {
    assert_eq!(decide("/profile", false), NavigationDecision::Redirect("/auth"));
}

#[test]
fn auth_with_token_goes_to_profile() {
    assert_eq!(decide("/auth", true), NavigationDecision::Redirect("/profile"));
}

#[test]
fn register_without_token_proceeds() {
    assert_eq!(decide("/register", false), NavigationDecision::Allow);
}

#[test]
fn achievements_with_token_proceeds() {
    assert_eq!(decide("/achievements", true), NavigationDecision::Allow);
}

// =============================================================
// decide: edge cases
// =============================================================

#[test]
fn unknown_paths_are_private() {
    assert_eq!(decide("/nope", false), NavigationDecision::Redirect("/auth"));
    assert_eq!(decide("/nope", true), NavigationDecision::Allow);
}

#[test]
fn public_match_is_exact() {
    assert!(!is_public("/auth/"));
    assert!(!is_public("/AUTH"));
    assert!(!is_public("/register/extra"));
    assert!(!is_public(""));
    assert_eq!(decide("/auth/", false), NavigationDecision::Redirect("/auth"));
}

#[test]
fn decide_is_idempotent() {
    for path in PRIVATE_PATHS.iter().chain(PUBLIC_PATHS.iter()) {
        for has_token in [false, true] {
            assert_eq!(decide(path, has_token), decide(path, has_token));
        }
    }
}

#[test]
fn redirect_targets_are_fixed_points() {
    for path in PRIVATE_PATHS.iter().chain(PUBLIC_PATHS.iter()) {
        for has_token in [false, true] {
            if let NavigationDecision::Redirect(target) = decide(path, has_token) {
                assert_eq!(
                    decide(target, has_token),
                    NavigationDecision::Allow,
                    "redirect from {path} to {target} would loop"
                );
            }
        }
    }
}

// =============================================================
// evaluate with an injected store
// =============================================================

#[test]
fn evaluate_reads_presence_from_store() {
    let request = NavigationRequest::new("/requests", Some("/profile".to_owned()));
    assert_eq!(evaluate(&request, &MemoryTokenStore::new()), NavigationDecision::Redirect("/auth"));
    assert_eq!(evaluate(&request, &MemoryTokenStore::with_token("t")), NavigationDecision::Allow);
}

#[test]
fn evaluate_treats_empty_token_as_signed_out() {
    let request = NavigationRequest::new("/auth", None);
    assert_eq!(evaluate(&request, &MemoryTokenStore::with_token("")), NavigationDecision::Allow);
}

#[test]
fn evaluate_follows_store_changes_between_requests() {
    let store = MemoryTokenStore::new();
    let to_register = NavigationRequest::new("/register", None);
    assert_eq!(evaluate(&to_register, &store), NavigationDecision::Allow);

    store.store_token("issued");
    assert_eq!(evaluate(&to_register, &store), NavigationDecision::Redirect("/profile"));

    store.clear_token();
    let to_profile = NavigationRequest::new("/profile", Some("/register".to_owned()));
    assert_eq!(evaluate(&to_profile, &store), NavigationDecision::Redirect("/auth"));
}

#[test]
fn evaluate_does_not_modify_store() {
    let store = MemoryTokenStore::with_token("keep");
    let _ = evaluate(&NavigationRequest::new("/auth", None), &store);
    assert_eq!(store.token().as_deref(), Some("keep"));
}
