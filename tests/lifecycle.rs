use returndesk::items::services::group_by_month;
use returndesk::items::{NewReturnItem, ReturnItem};
use returndesk::users::{NewUser, User};
use returndesk::{AppState, Session};
use time::macros::date;
use time::Date;

fn draft(title: &str, date: Date) -> NewReturnItem {
    NewReturnItem {
        title: title.to_string(),
        description: String::new(),
        image_url: String::new(),
        date,
    }
}

#[test]
fn register_upload_trash_and_empty_leaves_a_clean_dashboard() {
    let state = AppState::in_memory();
    let store = state.store.as_ref();

    let user = User::register(
        store,
        NewUser {
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            name: "A".to_string(),
        },
    )
    .expect("register");

    let mut session = Session::load(store);
    session
        .login(store, user.clone())
        .expect("login after registration");

    let item = ReturnItem::create(store, user.id, draft("T1", date!(2024 - 03 - 05)))
        .expect("upload proof");

    // The dashboard shows the item under "March 2024", window 1.
    let groups = group_by_month(ReturnItem::list_active(store, user.id).expect("active"));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label(), "March 2024");
    assert_eq!(groups[0].weeks.len(), 1);
    assert_eq!(groups[0].weeks[0].label(), "Week 1");
    assert_eq!(groups[0].weeks[0].items[0].id, item.id);

    // Deleting moves it to the trash.
    ReturnItem::soft_delete(store, user.id, item.id).expect("soft delete");
    assert!(ReturnItem::list_active(store, user.id).expect("active").is_empty());
    assert_eq!(ReturnItem::list_trashed(store, user.id).expect("trash").len(), 1);

    // Emptying the trash removes it permanently.
    ReturnItem::empty_trash(store, user.id).expect("empty trash");
    assert!(ReturnItem::list(store, user.id).expect("all").is_empty());
    let groups = group_by_month(ReturnItem::list_active(store, user.id).expect("active"));
    assert!(groups.is_empty());
}

#[test]
fn items_a_week_apart_land_in_different_windows_of_one_month() {
    let state = AppState::in_memory();
    let store = state.store.as_ref();

    let user = User::register(
        store,
        NewUser {
            email: "b@x.com".to_string(),
            password: "p".to_string(),
            name: "B".to_string(),
        },
    )
    .expect("register");

    ReturnItem::create(store, user.id, draft("early", date!(2024 - 03 - 03))).expect("create");
    ReturnItem::create(store, user.id, draft("later", date!(2024 - 03 - 10))).expect("create");

    let groups = group_by_month(ReturnItem::list_active(store, user.id).expect("active"));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label(), "March 2024");

    let labels: Vec<_> = groups[0].weeks.iter().map(|w| w.label()).collect();
    assert_eq!(labels, vec!["Week 1", "Week 2"]);
    assert_eq!(groups[0].weeks[0].items[0].title, "early");
    assert_eq!(groups[0].weeks[1].items[0].title, "later");
}

#[test]
fn profile_update_carries_into_session_and_next_login() {
    let state = AppState::in_memory();
    let store = state.store.as_ref();

    let mut user = User::register(
        store,
        NewUser {
            email: "c@x.com".to_string(),
            password: "old".to_string(),
            name: "C".to_string(),
        },
    )
    .expect("register");

    let mut session = Session::load(store);
    session.login(store, user.clone()).expect("login");

    user.password = "new".to_string();
    user.name = "C, renamed".to_string();
    User::update_profile(store, &user).expect("update profile");
    session.login(store, user.clone()).expect("refresh session copy");

    assert_eq!(Session::load(store).current(), Some(&user));
    assert!(User::authenticate(store, "c@x.com", "old").is_err());
    let again = User::authenticate(store, "c@x.com", "new").expect("new credentials");
    assert_eq!(again.name, "C, renamed");
}
