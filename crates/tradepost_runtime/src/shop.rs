//! The shop registry: the domain state the command set operates on.

use tradepost_command::text;
use tradepost_foundation::ObjectId;

/// A player-owned trading shop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shop {
    id: ObjectId,
    name: String,
    trade_permission: Option<String>,
}

impl Shop {
    /// The shop's stable identifier.
    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    /// The shop's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The permission node required to trade with this shop, if any.
    #[must_use]
    pub fn trade_permission(&self) -> Option<&str> {
        self.trade_permission.as_deref()
    }

    /// Sets the trade permission. `None` clears it.
    pub fn set_trade_permission(&mut self, permission: Option<String>) {
        self.trade_permission = permission;
    }
}

/// All registered shops, looked up by id or by name.
///
/// Name lookup uses the same case- and separator-insensitive matching the
/// command engine uses for literals, so the name a player types does not
/// have to reproduce the registered casing.
#[derive(Debug, Default)]
pub struct ShopRegistry {
    next_id: u64,
    shops: Vec<Shop>,
}

impl ShopRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 1,
            shops: Vec::new(),
        }
    }

    /// Registers a new shop and returns its id.
    pub fn add(&mut self, name: impl Into<String>) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        self.shops.push(Shop {
            id,
            name: name.into(),
            trade_permission: None,
        });
        id
    }

    /// Looks a shop up by id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&Shop> {
        self.shops.iter().find(|shop| shop.id() == id)
    }

    /// Looks a shop up by id, mutably.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Shop> {
        self.shops.iter_mut().find(|shop| shop.id() == id)
    }

    /// Looks a shop up by name, ignoring case and separator style.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Shop> {
        self.shops
            .iter()
            .find(|shop| text::matches_identifier(name, shop.name()))
    }

    /// Iterates all shops in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Shop> {
        self.shops.iter()
    }

    /// The number of registered shops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    /// Returns true if no shops are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShopRegistry {
    type Item = &'a Shop;
    type IntoIter = std::slice::Iter<'a, Shop>;

    fn into_iter(self) -> Self::IntoIter {
        self.shops.iter()
    }
}
