//! End-to-end shell scenarios: raw lines in, registry state out.

use std::sync::{Arc, RwLock};

use tradepost_foundation::ErrorKind;
use tradepost_runtime::commands::{SET_TRADE_PERM_PERMISSION, standard_commands};
use tradepost_runtime::{CommandRegistry, Session, ShopRegistry};

fn shell(names: &[&str]) -> (Session, CommandRegistry) {
    let mut shops = ShopRegistry::new();
    for name in names {
        shops.add(*name);
    }
    let session = Session::new("alice", Arc::new(RwLock::new(shops)))
        .with_permission(SET_TRADE_PERM_PERMISSION);
    let commands = standard_commands(&session);
    (session, commands)
}

fn trade_permission(session: &Session, shop: &str) -> Option<String> {
    let registry = session.registry();
    let registry = registry.read().unwrap();
    registry
        .find_by_name(shop)
        .and_then(|s| s.trade_permission().map(str::to_string))
}

#[test]
fn set_query_remove_lifecycle() {
    let (session, commands) = shell(&["Bakery"]);
    let input = session.command_input();

    commands
        .dispatch(&input, "settradeperm bakery trade.bakery")
        .unwrap();
    assert_eq!(
        trade_permission(&session, "bakery").as_deref(),
        Some("trade.bakery")
    );

    // Queries leave the state alone.
    commands.dispatch(&input, "settradeperm bakery ?").unwrap();
    assert_eq!(
        trade_permission(&session, "bakery").as_deref(),
        Some("trade.bakery")
    );

    commands.dispatch(&input, "settradeperm bakery -").unwrap();
    assert_eq!(trade_permission(&session, "bakery"), None);
}

#[test]
fn command_and_shop_names_are_typed_loosely() {
    let (session, commands) = shell(&["Iron Forge"]);
    let input = session.command_input();

    commands
        .dispatch(&input, "Set_Trade_Perm iron-forge trade.forge")
        .unwrap();
    assert_eq!(
        trade_permission(&session, "Iron Forge").as_deref(),
        Some("trade.forge")
    );
}

#[test]
fn targeting_makes_the_shop_argument_elective() {
    let (session, commands) = shell(&["Bakery", "Forge"]);

    commands
        .dispatch(&session.command_input(), "target forge")
        .unwrap();
    // One token: the target supplies the shop, the token becomes the perm.
    commands
        .dispatch(&session.command_input(), "settradeperm trade.forge")
        .unwrap();
    assert_eq!(
        trade_permission(&session, "forge").as_deref(),
        Some("trade.forge")
    );
    assert_eq!(trade_permission(&session, "bakery"), None);

    // An explicit shop still beats the target.
    commands
        .dispatch(&session.command_input(), "settradeperm bakery trade.bakery")
        .unwrap();
    assert_eq!(
        trade_permission(&session, "bakery").as_deref(),
        Some("trade.bakery")
    );
}

#[test]
fn dispatch_failure_modes() {
    let (session, commands) = shell(&["Bakery"]);
    let input = session.command_input();

    let err = commands.dispatch(&input, "frobnicate").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)));

    let err = commands.dispatch(&input, "settradeperm").unwrap_err();
    assert!(err.to_string().contains("shop"));

    let err = commands
        .dispatch(&input, "settradeperm bakery perm extra")
        .unwrap_err();
    assert!(err.to_string().contains("extra"));

    // Failures leave the registry untouched.
    assert_eq!(trade_permission(&session, "bakery"), None);
}

#[test]
fn permission_is_checked_per_sender() {
    let mut shops = ShopRegistry::new();
    shops.add("Bakery");
    let shops = Arc::new(RwLock::new(shops));

    let admin = Session::new("admin", Arc::clone(&shops))
        .with_permission(SET_TRADE_PERM_PERMISSION);
    let guest = Session::new("guest", shops);
    let commands = standard_commands(&admin);

    let err = commands
        .dispatch(&guest.command_input(), "settradeperm bakery ?")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoPermission { .. }));

    commands
        .dispatch(&admin.command_input(), "settradeperm bakery ?")
        .unwrap();
}

#[test]
fn completion_reflects_live_registry_state() {
    let (session, commands) = shell(&["Bakery"]);
    let input = session.command_input();

    assert_eq!(commands.complete(&input, "settradeperm "), vec!["Bakery"]);

    session.registry().write().unwrap().add("Barn");
    assert_eq!(
        commands.complete(&input, "settradeperm ba"),
        vec!["Bakery", "Barn"]
    );
}

#[test]
fn completion_covers_every_layer_of_the_line() {
    let (session, commands) = shell(&["Bakery"]);
    let input = session.command_input();

    // Command names first.
    assert_eq!(commands.complete(&input, "se"), vec!["settradeperm"]);
    // Then the shop slot.
    assert_eq!(commands.complete(&input, "settradeperm Bak"), vec!["Bakery"]);
    // Then the perm slot literals.
    assert_eq!(
        commands.complete(&input, "settradeperm bakery "),
        vec!["?", "-"]
    );
    // Nothing past the end of the schema.
    assert!(commands
        .complete(&input, "settradeperm bakery perm ")
        .is_empty());
}
