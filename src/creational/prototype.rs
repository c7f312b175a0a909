//! Prototype via delegated lookup. A derived object starts empty and
//! resolves field reads through a held reference to the source object.
//! Nothing is copied at attach time: the source's nested values stay the
//! exact same instances no matter which handle reaches them.

use std::rc::{Rc, Weak};

use crate::console::Console;

/// Reference-type value held by the source. What matters for the
/// illustration is its identity, not its content.
#[derive(Debug)]
pub struct Component {
    pub label: String,
}

/// Holds a non-owning pointer back at the object that owns it.
#[derive(Debug)]
pub struct Companion {
    source: Weak<Source>,
}

impl Companion {
    /// The back reference, if the source is still alive.
    pub fn source(&self) -> Option<Rc<Source>> {
        self.source.upgrade()
    }
}

/// The populated object other objects delegate their lookups to.
#[derive(Debug)]
pub struct Source {
    pub primitive: i64,
    pub component: Rc<Component>,
    pub companion: Rc<Companion>,
}

impl Source {
    /// Builds the source together with its back-referencing companion. The
    /// companion holds a `Weak` so the pair does not keep itself alive.
    pub fn with_back_reference(primitive: i64, component: Component) -> Rc<Self> {
        Rc::new_cyclic(|source| Source {
            primitive,
            component: Rc::new(component),
            companion: Rc::new(Companion {
                source: source.clone(),
            }),
        })
    }
}

/// An initially empty object whose reads fall through to a delegate.
///
/// Reads check own storage first, then the delegate. Writes land in own
/// storage only, shadowing the delegate without modifying it.
#[derive(Debug)]
pub struct Derived {
    primitive: Option<i64>,
    component: Option<Rc<Component>>,
    companion: Option<Rc<Companion>>,
    delegate: Rc<Source>,
}

impl Derived {
    pub fn delegating_to(delegate: &Rc<Source>) -> Self {
        Self {
            primitive: None,
            component: None,
            companion: None,
            delegate: Rc::clone(delegate),
        }
    }

    pub fn primitive(&self) -> i64 {
        self.primitive.unwrap_or(self.delegate.primitive)
    }

    pub fn component(&self) -> Rc<Component> {
        self.component
            .clone()
            .unwrap_or_else(|| Rc::clone(&self.delegate.component))
    }

    pub fn companion(&self) -> Rc<Companion> {
        self.companion
            .clone()
            .unwrap_or_else(|| Rc::clone(&self.delegate.companion))
    }

    pub fn set_primitive(&mut self, value: i64) {
        self.primitive = Some(value);
    }

    pub fn set_component(&mut self, component: Component) {
        self.component = Some(Rc::new(component));
    }
}

// =============================================================================
// Demo
// =============================================================================

/// Attaches an empty derived object to a populated source and reports, per
/// field, whether the lookup resolves to the very same instance.
pub fn demo(out: &mut dyn Console) {
    let source = Source::with_back_reference(
        245,
        Component {
            label: "created-at".to_string(),
        },
    );
    let derived = Derived::delegating_to(&source);

    out.line(&format!("{derived:?}"));

    if source.primitive == derived.primitive() {
        out.line("Primitive field value is visible through the derived object. Yay!");
    } else {
        out.line("Primitive field value did not carry over. Booo!");
    }

    if Rc::ptr_eq(&source.component, &derived.component()) {
        out.line("Nested component is shared by delegation, not duplicated. Yay!");
    } else {
        out.line("Nested component was duplicated. Booo!");
    }

    if Rc::ptr_eq(&source.companion, &derived.companion()) {
        out.line("Companion with back reference is shared by delegation, not duplicated. Yay!");
    } else {
        out.line("Companion with back reference was duplicated. Booo!");
    }

    match derived.companion().source() {
        Some(owner) if Rc::ptr_eq(&owner, &source) => {
            out.line("Companion's back reference still points at the source object. Yay!");
        }
        _ => out.line("Companion's back reference lost the source object. Booo!"),
    }
}
