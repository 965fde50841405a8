//! Domain arguments over the shop registry.

use std::sync::{Arc, RwLock};

use tradepost_command::{
    ArgsReader, CommandArgument, CommandContext, CommandInput, FallbackArgument, ParseError, text,
};
use tradepost_foundation::Value;

use crate::shop::{Shop, ShopRegistry};

/// Predicate restricting which shops an argument accepts and suggests.
pub type ShopFilter = Arc<dyn Fn(&Shop) -> bool>;

/// Resolves a token to a registered shop and binds its id.
///
/// Matching uses the registry's case- and separator-insensitive name lookup,
/// and completion suggests the names of every shop passing the filter.
pub struct ShopArgument {
    name: String,
    registry: Arc<RwLock<ShopRegistry>>,
    filter: ShopFilter,
}

impl ShopArgument {
    /// Creates a shop argument accepting every registered shop.
    #[must_use]
    pub fn new(name: impl Into<String>, registry: Arc<RwLock<ShopRegistry>>) -> Self {
        Self {
            name: name.into(),
            registry,
            filter: Arc::new(|_| true),
        }
    }

    /// Restricts the accepted shops to those passing `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(&Shop) -> bool + 'static) -> Self {
        self.filter = Arc::new(filter);
        self
    }
}

impl CommandArgument for ShopArgument {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(
        &self,
        _input: &CommandInput,
        ctx: &mut CommandContext,
        reader: &mut ArgsReader<'_>,
    ) -> Result<(), ParseError> {
        let raw = reader.next().map_err(|_| self.missing_argument())?;
        let registry = self.registry.read().unwrap_or_else(|e| e.into_inner());
        match registry.find_by_name(raw).filter(|shop| (self.filter)(shop)) {
            Some(shop) => {
                ctx.put(&self.name, Value::ObjectRef(shop.id()));
                Ok(())
            }
            None => Err(self.invalid_argument(raw)),
        }
    }

    fn complete(
        &self,
        _input: &CommandInput,
        _ctx: &CommandContext,
        reader: &ArgsReader<'_>,
    ) -> Vec<String> {
        let partial = reader.peek().unwrap_or("");
        let registry = self.registry.read().unwrap_or_else(|e| e.into_inner());
        registry
            .iter()
            .filter(|shop| (self.filter)(shop))
            .filter(|shop| text::completes_to(partial, shop.name()))
            .map(|shop| shop.name().to_string())
            .collect()
    }
}

/// Wraps a shop argument so the sender's targeted shop stands in when no
/// shop is named explicitly (or the named one does not resolve).
///
/// The target only applies if it refers to a registered shop passing the
/// argument's filter; otherwise the explicit argument's failure surfaces.
#[must_use]
pub fn target_shop_fallback(primary: ShopArgument) -> FallbackArgument {
    let registry = Arc::clone(&primary.registry);
    let filter = Arc::clone(&primary.filter);
    FallbackArgument::new(primary, move |input: &CommandInput, _ctx| {
        let id = input.target().and_then(Value::as_object)?;
        let registry = registry.read().unwrap_or_else(|e| e.into_inner());
        registry
            .get(id)
            .filter(|shop| filter(shop))
            .map(|shop| Value::ObjectRef(shop.id()))
    })
}
