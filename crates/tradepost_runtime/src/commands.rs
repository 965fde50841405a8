//! The built-in command set.

use tradepost_command::{
    Command, CommandContext, FirstOfArgument, LiteralArgument, OptionalArgument, StringArgument,
};
use tradepost_foundation::{Error, ObjectId, Result};

use crate::arguments::{ShopArgument, target_shop_fallback};
use crate::dispatcher::CommandRegistry;
use crate::session::Session;

/// Permission node required by `settradeperm`.
pub const SET_TRADE_PERM_PERMISSION: &str = "tradepost.settradeperm";

fn require_shop(ctx: &CommandContext) -> Result<ObjectId> {
    ctx.require_object("shop")
}

/// Builds the `settradeperm` command.
///
/// `settradeperm <shop> [?|-|<perm>]`: with `?` or nothing, reports the
/// shop's current trade permission; with `-`, removes it; with anything
/// else, sets it to the given node. The shop may be named explicitly or
/// stand in from the sender's current target.
#[must_use]
pub fn set_trade_perm_command(session: &Session) -> Command {
    let registry = session.registry();
    let executor_registry = session.registry();
    Command::new("settradeperm")
        .with_description("Query, set, or remove a shop's trade permission")
        .with_permission(SET_TRADE_PERM_PERMISSION)
        .add_argument(target_shop_fallback(ShopArgument::new("shop", registry)))
        .add_argument(OptionalArgument::new(
            FirstOfArgument::new("permarg")
                .or(LiteralArgument::new("?"))
                .or(LiteralArgument::new("-"))
                .or(StringArgument::new("perm")),
        ))
        .executor(move |_input, ctx| {
            let shop_id = require_shop(ctx)?;
            let mut registry = executor_registry
                .write()
                .unwrap_or_else(|e| e.into_inner());
            let shop = registry
                .get_mut(shop_id)
                .ok_or_else(|| Error::internal(format!("shop {shop_id} vanished")))?;

            if ctx.has("-") {
                shop.set_trade_permission(None);
                println!("Removed the trade permission of '{}'.", shop.name());
            } else if let Some(perm) = ctx.get_str("perm") {
                shop.set_trade_permission(Some(perm.to_string()));
                println!("Set the trade permission of '{}' to '{perm}'.", shop.name());
            } else {
                // `?` or no argument at all: report the current state.
                match shop.trade_permission() {
                    Some(perm) => {
                        println!("'{}' requires the permission '{perm}'.", shop.name());
                    }
                    None => println!("'{}' has no trade permission set.", shop.name()),
                }
            }
            Ok(())
        })
}

/// Builds the `list` command, which prints every registered shop.
#[must_use]
pub fn list_command(session: &Session) -> Command {
    let registry = session.registry();
    Command::new("list")
        .with_alias("ls")
        .with_description("List all registered shops")
        .executor(move |_input, _ctx| {
            let registry = registry.read().unwrap_or_else(|e| e.into_inner());
            if registry.is_empty() {
                println!("No shops registered.");
                return Ok(());
            }
            for shop in &*registry {
                match shop.trade_permission() {
                    Some(perm) => println!("  {} {} (perm: {perm})", shop.id(), shop.name()),
                    None => println!("  {} {}", shop.id(), shop.name()),
                }
            }
            Ok(())
        })
}

/// Builds the `target` command, which sets or clears the session target.
#[must_use]
pub fn target_command(session: &Session) -> Command {
    let registry = session.registry();
    let lookup = session.registry();
    let slot = session.target_slot();
    Command::new("target")
        .with_description("Target a shop, or clear the target")
        .add_argument(OptionalArgument::new(ShopArgument::new("shop", registry)))
        .executor(move |_input, ctx| {
            let mut slot = slot.write().unwrap_or_else(|e| e.into_inner());
            if let Some(id) = ctx.get_object("shop") {
                *slot = Some(id);
                let registry = lookup.read().unwrap_or_else(|e| e.into_inner());
                let name = registry.get(id).map_or("?", |shop| shop.name());
                println!("Now targeting '{name}'.");
            } else {
                *slot = None;
                println!("Target cleared.");
            }
            Ok(())
        })
}

/// Builds the `help` command from the given (name, description) pairs.
#[must_use]
pub fn help_command(entries: Vec<(String, String)>) -> Command {
    Command::new("help")
        .with_description("Show this command overview")
        .executor(move |_input, _ctx| {
            for (name, description) in &entries {
                println!("  {name:<14} {description}");
            }
            Ok(())
        })
}

/// Builds the full standard command set for a session.
#[must_use]
pub fn standard_commands(session: &Session) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(set_trade_perm_command(session));
    registry.register(list_command(session));
    registry.register(target_command(session));

    let mut entries: Vec<(String, String)> = registry
        .iter()
        .map(|c| (c.name().to_string(), c.description().to_string()))
        .collect();
    let help = help_command(Vec::new());
    entries.push((help.name().to_string(), help.description().to_string()));
    registry.register(help_command(entries));
    registry
}
