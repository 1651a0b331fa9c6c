//! Binding registry and rebind pass

/// Event types the site reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
    Input,
}

/// Interactive elements bindings attach to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A navigation anchor, identified by its href
    NavLink(String),
    /// The registration form
    Form,
    /// A form field, identified by its id
    Field(String),
    ThemeToggle,
    MenuToggle,
}

/// Handle for one registered binding, disposable via `EventRegistry::remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingId(u64);

#[derive(Debug)]
struct Binding<C> {
    id: BindingId,
    target: Target,
    event: EventKind,
    concern: C,
}

/// Registered bindings, in insertion order.
///
/// The registry itself happily accepts duplicates, exactly what a stale
/// anonymous-handler design would accumulate. Deduplication is the
/// `Rebinder`'s job.
#[derive(Debug)]
pub struct EventRegistry<C> {
    bindings: Vec<Binding<C>>,
    next_id: u64,
}

impl<C: Clone> EventRegistry<C> {
    pub fn new() -> EventRegistry<C> {
        EventRegistry {
            bindings: Vec::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, target: Target, event: EventKind, concern: C) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;

        self.bindings.push(Binding {
            id,
            target,
            event,
            concern,
        });

        id
    }

    /// Remove a binding by handle. Removing an already-removed handle is a
    /// no-op.
    pub fn remove(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        self.bindings.len() < before
    }

    /// Concerns bound for an event on a target, one entry per live binding.
    pub fn dispatch(&self, target: &Target, event: EventKind) -> Vec<C> {
        self.bindings
            .iter()
            .filter(|b| b.event == event && &b.target == target)
            .map(|b| b.concern.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<C: Clone> Default for EventRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the handles from the previous binding pass and disposes them before
/// installing the next set, making rebinding idempotent for any number of
/// passes.
#[derive(Debug, Default)]
pub struct Rebinder {
    bound: Vec<BindingId>,
}

impl Rebinder {
    pub fn new() -> Rebinder {
        Rebinder::default()
    }

    pub fn rebind<C: Clone>(
        &mut self,
        registry: &mut EventRegistry<C>,
        bindings: impl IntoIterator<Item = (Target, EventKind, C)>,
    ) {
        for id in self.bound.drain(..) {
            registry.remove(id);
        }

        for (target, event, concern) in bindings {
            self.bound.push(registry.add(target, event, concern));
        }

        tracing::debug!(bindings = self.bound.len(), "Events rebound");
    }
}
