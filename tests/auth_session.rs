use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use classroom::models::UserType;
use classroom::{Database, Error, Session};

fn temp_db(prefix: &str) -> (Database, PathBuf) {
    let dir = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let db = Database::open(dir.join("classroom.db")).expect("open db");
    (db, dir)
}

#[test]
fn created_user_can_sign_in() {
    let (db, dir) = temp_db("auth-sign-in");
    let id = db.add_user("alice", "pw1", UserType::User).unwrap().expect("new user");

    let mut session = Session::new();
    assert!(db.authenticate(&mut session, "alice", "pw1").unwrap());
    assert_eq!(session.user_id(), Some(id));
    assert_eq!(session.username(), Some("alice"));
    assert_eq!(session.user_type(), Some(UserType::User));

    assert!(!db.authenticate(&mut session, "alice", "wrong").unwrap());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn failed_login_keeps_previous_identity() {
    let (db, dir) = temp_db("auth-keep");
    let alice = db.add_user("alice", "pw1", UserType::User).unwrap().unwrap();

    let mut session = Session::new();
    assert!(!db.authenticate(&mut session, "nobody", "pw").unwrap());
    assert!(!session.is_authenticated());

    assert!(db.authenticate(&mut session, "alice", "pw1").unwrap());
    assert!(!db.authenticate(&mut session, "alice", "PW1").unwrap());
    assert!(!db.authenticate(&mut session, "ghost", "pw1").unwrap());
    assert_eq!(session.user_id(), Some(alice));
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn user_exists_tracks_creation_and_duplicates_are_refused() {
    let (db, dir) = temp_db("auth-exists");
    assert!(!db.user_exists("bob").unwrap());
    assert!(db.add_user("bob", "secret", UserType::Admin).unwrap().is_some());
    assert!(db.user_exists("bob").unwrap());

    assert_eq!(db.add_user("bob", "other", UserType::User).unwrap(), None);
    let bobs: Vec<_> = db.list_users().unwrap().into_iter().filter(|u| u.username == "bob").collect();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].password, "secret");
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn seeding_is_idempotent() {
    let (db, dir) = temp_db("auth-seed");
    db.seed_default_users().unwrap();
    db.seed_default_users().unwrap();

    let users = db.list_users().unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["admin", "user", "user2"]);
    assert_eq!(users[0].user_type, UserType::Admin);

    let mut session = Session::new();
    assert!(db.authenticate(&mut session, "admin", "admin123").unwrap());
    assert!(session.is_admin());
    assert!(db.authenticate(&mut session, "user", "user123").unwrap());
    assert!(!session.is_admin());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn own_grades_need_a_signed_in_user() {
    let (db, dir) = temp_db("auth-grades");
    let session = Session::new();
    assert!(matches!(db.grades_for_current_user(&session), Err(Error::NotAuthenticated)));
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn own_grades_are_scoped_to_the_session() {
    let (db, dir) = temp_db("auth-scoped");
    let alice = db.add_user("alice", "pw1", UserType::User).unwrap().unwrap();
    let bob = db.add_user("bob", "pw2", UserType::User).unwrap().unwrap();
    db.add_grade(alice, 1, 91.0).unwrap();
    db.add_grade(bob, 1, 55.0).unwrap();
    db.add_grade(alice, 2, 78.5).unwrap();

    let mut session = Session::new();
    db.authenticate(&mut session, "alice", "pw1").unwrap();
    let mine: Vec<f64> = db.grades_for_current_user(&session).unwrap().iter().map(|g| g.grade).collect();
    assert_eq!(mine, vec![91.0, 78.5]);

    session.clear();
    assert!(matches!(db.grades_for_current_user(&session), Err(Error::NotAuthenticated)));
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn reopening_keeps_data() {
    let (db, dir) = temp_db("auth-reopen");
    db.add_user("carol", "pw", UserType::User).unwrap();
    let again = Database::open(db.path()).unwrap();
    assert!(again.user_exists("carol").unwrap());
    let _ = std::fs::remove_dir_all(dir);
}
