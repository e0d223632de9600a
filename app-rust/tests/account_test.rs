use cognipath::{
    config::{Config, ConfigOverrides},
    dashboard::ROUTINE_PREVIEW,
    session::ProfileUpdate,
    store::{JsonStore, ROUTINES_KEY},
    Category, Routine, RoutineItem, Scholar, ScholarError,
};

fn scholar() -> Scholar {
    Scholar::new(JsonStore::in_memory(), None)
}

#[test]
fn login_creates_a_default_profile() {
    let scholar = scholar();
    let session = scholar.session();
    assert_eq!(session.current().unwrap(), None);

    let user = session.login("  Ada Lovelace ", "ada@example.com").unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.grade.as_deref(), Some("Student"));
    assert_eq!(
        user.bio.as_deref(),
        Some("Ready to achieve academic excellence.")
    );
    assert_eq!(user.goal, None);
    assert!(user.avatar.ends_with("seed=Ada%20Lovelace"));
    assert!(user.id.parse::<i64>().is_ok());

    assert_eq!(session.current().unwrap(), Some(user));
}

#[test]
fn login_requires_name_and_email() {
    let session = scholar().session();

    assert!(matches!(
        session.login("", "a@b.c"),
        Err(ScholarError::InvalidInput(_))
    ));
    assert!(matches!(
        session.login("Ada", "not-an-email"),
        Err(ScholarError::InvalidInput(_))
    ));
    assert_eq!(session.current().unwrap(), None);
}

#[test]
fn profile_updates_keep_the_email() {
    let session = scholar().session();
    assert!(matches!(
        session.update_profile(ProfileUpdate::default()),
        Err(ScholarError::NotLoggedIn)
    ));

    session.login("Ada", "ada@example.com").unwrap();
    let user = session
        .update_profile(ProfileUpdate {
            name: Some("Ada King".to_string()),
            grade: Some("Grade 12".to_string()),
            goal: Some("Top the boards".to_string()),
            bio: Some(String::new()),
        })
        .unwrap();

    assert_eq!(user.name, "Ada King");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.grade.as_deref(), Some("Grade 12"));
    assert_eq!(user.goal.as_deref(), Some("Top the boards"));
    assert_eq!(user.bio, None);
    assert_eq!(session.require().unwrap(), user);

    assert!(matches!(
        session.update_profile(ProfileUpdate {
            name: Some(" ".to_string()),
            ..Default::default()
        }),
        Err(ScholarError::InvalidInput(_))
    ));
}

#[test]
fn logout_forgets_the_user() {
    let session = scholar().session();
    session.login("Ada", "ada@example.com").unwrap();

    session.logout().unwrap();

    assert_eq!(session.current().unwrap(), None);
    assert!(matches!(session.require(), Err(ScholarError::NotLoggedIn)));
}

#[test]
fn reviews_are_prepended_and_validated() {
    let scholar = scholar();
    let user = scholar.session().login("Ada", "ada@example.com").unwrap();
    let board = scholar.reviews();
    assert_eq!(board.average_rating().unwrap(), None);

    board.submit(&user, 4, "Helpful tutor").unwrap();
    let latest = board.submit(&user, 5, "Loved the planner").unwrap();
    assert_eq!(latest.user_name, "Ada");
    assert_eq!(latest.user_avatar, user.avatar);

    let reviews = board.list().unwrap();
    let comments: Vec<&str> = reviews.iter().map(|r| r.comment.as_str()).collect();
    assert_eq!(comments, ["Loved the planner", "Helpful tutor"]);
    assert_eq!(board.average_rating().unwrap(), Some(4.5));

    assert!(matches!(
        board.submit(&user, 5, "   "),
        Err(ScholarError::InvalidInput(_))
    ));
    assert!(matches!(
        board.submit(&user, 0, "zero"),
        Err(ScholarError::InvalidInput(_))
    ));
    assert_eq!(board.list().unwrap().len(), 2);
}

#[test]
fn dashboard_needs_a_user_and_previews_the_routine() {
    let scholar = scholar();
    assert!(matches!(scholar.dashboard(), Err(ScholarError::NotLoggedIn)));

    scholar.session().login("Grace Hopper", "grace@example.com").unwrap();
    let dashboard = scholar.dashboard().unwrap();
    assert!(dashboard.greeting.contains("Grace"));
    assert!(dashboard.today.is_empty());

    let item = |activity: &str| RoutineItem {
        time: "09:00 AM".to_string(),
        activity: activity.to_string(),
        category: Category::Academic,
        completed: false,
    };
    let routines = vec![
        Routine {
            id: "old".to_string(),
            date: "1/1/2025".to_string(),
            items: vec![item("old")],
        },
        Routine {
            id: "new".to_string(),
            date: "1/2/2025".to_string(),
            items: ["a", "b", "c", "d"].into_iter().map(item).collect(),
        },
    ];
    scholar.store().save(ROUTINES_KEY, &routines).unwrap();

    let dashboard = scholar.dashboard().unwrap();
    assert_eq!(dashboard.today.len(), ROUTINE_PREVIEW);
    assert_eq!(dashboard.today[0].activity, "a");
}

#[tokio::test]
async fn file_backed_data_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = || {
        Config::resolve(
            ConfigOverrides {
                data_dir: Some(dir.path().to_path_buf()),
                ..Default::default()
            },
            |_: &str| None,
        )
    };

    let first = Scholar::from_config(&config());
    first.session().login("Ada", "ada@example.com").unwrap();
    assert!(dir.path().join("scholar_user.json").exists());

    let second = Scholar::from_config(&config());
    assert_eq!(second.session().require().unwrap().name, "Ada");
    assert!(matches!(second.model(), Err(ScholarError::Config(_))));
    assert!(matches!(
        second.routines().generate("anything").await,
        Err(ScholarError::Config(_))
    ));
}
