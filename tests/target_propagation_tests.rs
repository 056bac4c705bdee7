//! Tests for bound-target propagation and renames
//!
//! Editing a host updates every tab bound to it. Session-like tabs follow the
//! host's display name; management views keep their own title.

use par_deck::config::{BoundTarget, TargetId};
use par_deck::{NewTab, TabKind, TabManager};

fn host(id: &str, name: &str) -> BoundTarget {
    BoundTarget::with_id(TargetId::new(id), format!("{id}.internal")).name(name)
}

#[test]
fn test_all_bound_kinds_follow_rename() {
    let mut mgr = TabManager::default();
    let target = host("web", "Web");
    let term = mgr.create(NewTab::new(TabKind::Terminal).target(target.clone()));
    let files = mgr.create(NewTab::new(TabKind::FileBrowser).target(target.clone()));
    let stats = mgr.create(NewTab::new(TabKind::RemoteStats).target(target.clone()));

    assert_eq!(mgr.update_bound_target(host("web", "Frontend")), 3);

    for id in [term, files, stats] {
        let tab = mgr.get_tab(id).unwrap();
        assert_eq!(tab.title(), "Frontend");
        assert_eq!(tab.bound_target().unwrap().name.as_deref(), Some("Frontend"));
        assert_eq!(tab.revision(), 1);
    }
}

#[test]
fn test_session_manager_keeps_its_title() {
    let mut mgr = TabManager::default();
    let sessions =
        mgr.create(NewTab::new(TabKind::SessionManager).target(host("db", "Database")));
    assert_eq!(mgr.get_tab(sessions).unwrap().title(), "Sessions");

    mgr.update_bound_target(host("db", "Primary DB"));
    let tab = mgr.get_tab(sessions).unwrap();
    assert_eq!(tab.title(), "Sessions");
    assert_eq!(tab.bound_target().unwrap().name.as_deref(), Some("Primary DB"));
}

#[test]
fn test_propagated_titles_stay_unique() {
    let mut mgr = TabManager::default();
    mgr.create(NewTab::new(TabKind::Terminal).title("Prod"));
    let bound = mgr.create(NewTab::new(TabKind::Terminal).target(host("api", "API")));

    mgr.update_bound_target(host("api", "Prod"));
    assert_eq!(mgr.get_tab(bound).unwrap().title(), "Prod (2)");
}

#[test]
fn test_other_targets_are_untouched() {
    let mut mgr = TabManager::default();
    let a = mgr.create(NewTab::new(TabKind::Terminal).target(host("a", "A")));
    let b = mgr.create(NewTab::new(TabKind::Terminal).target(host("b", "B")));

    mgr.update_bound_target(host("a", "Alpha"));
    assert_eq!(mgr.get_tab(a).unwrap().title(), "Alpha");
    assert_eq!(mgr.get_tab(b).unwrap().title(), "B");
    assert_eq!(mgr.get_tab(b).unwrap().revision(), 0);
}

#[test]
fn test_blank_rename_restores_target_title() {
    let mut mgr = TabManager::default();
    let term = mgr.create(NewTab::new(TabKind::Terminal).target(host("ci", "CI")));

    assert!(mgr.rename(term, "scratch"));
    assert_eq!(mgr.get_tab(term).unwrap().title(), "scratch");
    assert!(mgr.rename(term, ""));
    assert_eq!(mgr.get_tab(term).unwrap().title(), "CI");
    assert_eq!(mgr.get_tab(term).unwrap().revision(), 2);
}
