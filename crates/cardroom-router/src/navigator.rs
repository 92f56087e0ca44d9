//! Binds a [`Resolver`] to a `gloo` history.

use std::fmt;
use std::rc::Rc;

use gloo_history::{History, HistoryListener};

use crate::error::NavigationError;
use crate::location::Location;
use crate::pattern::Params;
use crate::resolver::{Resolution, Resolver};

/// Drives the resolver from history changes.
///
/// Navigation calls only touch the history; the resulting location change
/// comes back through the history listener and is resolved there, so
/// programmatic and browser-initiated navigation take the same path.
pub struct Navigator<H, C> {
    resolver: Rc<Resolver<C>>,
    history: H,
    _listener: HistoryListener,
}

fn current_href<H: History>(history: &H) -> String {
    Location::from(&history.location()).to_string()
}

impl<H, C> Navigator<H, C>
where
    H: History + 'static,
    C: 'static,
{
    /// Starts listening and resolves the history's current location.
    pub fn new(resolver: Rc<Resolver<C>>, history: H) -> Self {
        let listener = {
            let resolver = Rc::clone(&resolver);
            let source = history.clone();
            history.listen(move || {
                resolver.resolve_href(&current_href(&source));
            })
        };
        resolver.resolve_href(&current_href(&history));

        Self {
            resolver,
            history,
            _listener: listener,
        }
    }

    pub fn resolver(&self) -> &Rc<Resolver<C>> {
        &self.resolver
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn current(&self) -> Option<Resolution<C>> {
        self.resolver.current()
    }

    /// Pushes a route-relative href (may carry a query or fragment).
    pub fn push(&self, href: &str) {
        self.history.push(self.resolver.base().join(href));
    }

    pub fn replace(&self, href: &str) {
        self.history.replace(self.resolver.base().join(href));
    }

    pub fn push_named(&self, name: &str, params: &Params) -> Result<(), NavigationError> {
        let href = self.resolver.href_for(name, params)?;
        self.history.push(href);
        Ok(())
    }

    pub fn replace_named(&self, name: &str, params: &Params) -> Result<(), NavigationError> {
        let href = self.resolver.href_for(name, params)?;
        self.history.replace(href);
        Ok(())
    }

    pub fn back(&self) {
        self.history.back();
    }

    pub fn forward(&self) {
        self.history.forward();
    }
}

impl<H, C> fmt::Debug for Navigator<H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
