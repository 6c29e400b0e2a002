//! End-to-end navigation through the application's route table

use waypoint_core::{
    build_router, AppShell, Error, History, Location, MemoryHistory, NavigationType, Renderer,
    View,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("waypoint_core=debug")
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct Recorder {
    log: Vec<String>,
}

impl Renderer<View> for Recorder {
    fn mount(&mut self, view: &View, location: &Location) {
        self.log.push(format!("{view} {location}"));
    }

    fn unmount(&mut self) {
        self.log.push("-".to_string());
    }
}

#[test]
fn test_every_entry_resolves_to_itself() {
    let router = build_router(MemoryHistory::new()).unwrap();
    for entry in router.routes() {
        assert_eq!(router.resolve(&entry.path).unwrap(), entry);
    }
}

#[test]
fn test_navigate_updates_address_without_reload() {
    init_tracing();
    let mut router = build_router(MemoryHistory::new()).unwrap();
    router.start().unwrap();

    let nav = router.navigate("/users").unwrap();
    assert_eq!(nav.kind, NavigationType::Push);
    assert_eq!(*nav.to.view, View::UserList);

    // Same history stack, one more entry: no reload, address is /users
    assert_eq!(router.history().location().path, "/users");
    assert_eq!(router.history().len(), 2);
    assert_eq!(router.href("/users"), "/users");
}

#[test]
fn test_unknown_path_is_not_found() {
    init_tracing();
    let mut router = build_router(MemoryHistory::new()).unwrap();
    router.start().unwrap();

    assert_eq!(
        router.navigate("/unknown").unwrap_err(),
        Error::RouteNotFound { path: "/unknown".to_string() }
    );
    assert_eq!(*router.current().unwrap().view, View::UserForm);
}

#[test]
fn test_table_fixed_after_build() {
    let mut router = build_router(MemoryHistory::new()).unwrap();
    let before: Vec<_> = router.routes().cloned().collect();

    router.start().unwrap();
    router.navigate("/users").unwrap();
    let _ = router.navigate("/elsewhere");
    router.back().unwrap();

    let after: Vec<_> = router.routes().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_shell_session() {
    init_tracing();
    let router = build_router(MemoryHistory::new()).unwrap();
    let mut shell = AppShell::new(router, Recorder::default());

    shell.mount().unwrap();
    shell.navigate("/users").unwrap();
    shell.navigate("/users").unwrap();
    assert!(shell.navigate("/nope").is_err());
    shell.back().unwrap();
    shell.replace("/users#bottom").unwrap();

    let recorder = shell.unmount();
    assert_eq!(
        recorder.log,
        vec!["UserForm /", "UserList /users", "UserForm /", "UserList /users#bottom", "-"]
    );
}
