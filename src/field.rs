//! Type-checked per-instance fields
//!
//! An [`ArticleField<T>`] is a named storage slot shared by many owners. Each
//! owner gets its own value, keyed by the owner's [`InstanceKey`].
//!
//! Assignment comes in two flavours:
//!
//! - [`ArticleField::set`] accepts anything `Into<T>`, so a newtype that
//!   converts into `T` is accepted the way a subclass would be.
//! - [`ArticleField::try_set`] accepts any value and checks its type at
//!   runtime, failing with [`ArticleError::TypeMismatch`] instead of coercing.
//!
//! A stored value lives as long as its owner's key. Once the key is dropped
//! the value is unreachable and is released the next time the field is
//! written to or [`len`](ArticleField::len) is called.
//!
//! # Example
//!
//! ```
//! use articlekit::{ArticleError, ArticleField, FieldOwner, InstanceKey};
//!
//! struct Page {
//!     key: InstanceKey,
//! }
//!
//! impl FieldOwner for Page {
//!     fn instance_key(&self) -> &InstanceKey {
//!         &self.key
//!     }
//! }
//!
//! let words: ArticleField<i64> = ArticleField::new("words");
//! let page = Page {
//!     key: InstanceKey::new(),
//! };
//!
//! assert!(matches!(
//!     words.get(&page),
//!     Err(ArticleError::MissingAttribute { .. })
//! ));
//! words.set(&page, 300);
//! assert_eq!(words.get(&page).unwrap(), 300);
//! assert!(words.try_set(&page, "three hundred").is_err());
//!
//! drop(page);
//! assert_eq!(words.len(), 0);
//! ```

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::{ArticleError, Result};

static TYPE_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:[a-z_][a-z0-9_]*::)+").expect("valid type path regex"));

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(0);

/// Process-wide identity of one field owner
///
/// Every key gets a fresh number from a single process-wide counter, so no
/// two keys share an id. Keys are not `Clone`; a copy of an owner creates its
/// own key.
#[derive(Debug)]
pub struct InstanceKey {
    id: u64,
    alive: Arc<()>,
}

impl InstanceKey {
    /// Create a key distinct from every other key in the process
    pub fn new() -> Self {
        Self {
            id: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            alive: Arc::new(()),
        }
    }

    /// Number identifying this key
    pub fn id(&self) -> u64 {
        self.id
    }

    fn liveness(&self) -> Weak<()> {
        Arc::downgrade(&self.alive)
    }
}

impl Default for InstanceKey {
    fn default() -> Self {
        Self::new()
    }
}

/// An instance that can hold values in an [`ArticleField`]
pub trait FieldOwner {
    /// Identity of this instance
    fn instance_key(&self) -> &InstanceKey;
}

struct Entry<T> {
    alive: Weak<()>,
    value: T,
}

impl<T> Entry<T> {
    fn is_live(&self) -> bool {
        self.alive.strong_count() > 0
    }
}

/// Named, type-checked storage slot with one value per owner
pub struct ArticleField<T> {
    name: &'static str,
    values: Mutex<HashMap<u64, Entry<T>>>,
}

impl<T> ArticleField<T>
where
    T: Any + Clone,
{
    /// Create an empty field called `name`
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: Mutex::new(HashMap::new()),
        }
    }

    /// Field name used in error messages
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Short name of the declared value type
    pub fn field_type(&self) -> String {
        short_type_name(type_name::<T>())
    }

    /// Store `value` for `owner`
    pub fn set<O: FieldOwner + ?Sized>(&self, owner: &O, value: impl Into<T>) {
        self.store(owner.instance_key(), value.into());
    }

    /// Store `value` for `owner` after checking at runtime that it is a `T`
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::TypeMismatch`] naming the field, the expected
    /// type and the received type when `V` is not `T`. Nothing is stored.
    pub fn try_set<O, V>(&self, owner: &O, value: V) -> Result<()>
    where
        O: FieldOwner + ?Sized,
        V: Any,
    {
        let boxed: Box<dyn Any> = Box::new(value);
        match boxed.downcast::<T>() {
            Ok(value) => {
                self.store(owner.instance_key(), *value);
                Ok(())
            }
            Err(_) => {
                let err = ArticleError::TypeMismatch {
                    attribute: self.name,
                    expected: self.field_type(),
                    actual: short_type_name(type_name::<V>()),
                };
                debug!(field = self.name, error = %err, "rejected field assignment");
                Err(err)
            }
        }
    }

    /// Value stored for `owner`
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::MissingAttribute`] when nothing was stored for
    /// this owner yet.
    pub fn get<O: FieldOwner + ?Sized>(&self, owner: &O) -> Result<T> {
        self.lock()
            .get(&owner.instance_key().id())
            .map(|entry| entry.value.clone())
            .ok_or_else(|| ArticleError::MissingAttribute {
                owner: short_type_name(type_name::<O>()),
                attribute: self.name,
            })
    }

    /// True when a value is stored for `owner`
    pub fn is_set<O: FieldOwner + ?Sized>(&self, owner: &O) -> bool {
        self.lock().contains_key(&owner.instance_key().id())
    }

    /// Remove and return the value stored for `owner`
    pub fn clear<O: FieldOwner + ?Sized>(&self, owner: &O) -> Option<T> {
        self.lock()
            .remove(&owner.instance_key().id())
            .map(|entry| entry.value)
    }

    /// Number of live owners holding a value, releasing dropped owners' values
    pub fn len(&self) -> usize {
        let mut values = self.lock();
        release_dropped(self.name, &mut values);
        values.len()
    }

    /// True when no live owner holds a value
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn store(&self, key: &InstanceKey, value: T) {
        let mut values = self.lock();
        release_dropped(self.name, &mut values);
        values.insert(
            key.id(),
            Entry {
                alive: key.liveness(),
                value,
            },
        );
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, Entry<T>>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn release_dropped<T>(field: &'static str, values: &mut HashMap<u64, Entry<T>>) {
    let before = values.len();
    values.retain(|_, entry| entry.is_live());
    let released = before - values.len();
    if released > 0 {
        trace!(field, released, "released values of dropped owners");
    }
}

impl<T> fmt::Debug for ArticleField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ArticleField {} with field_type={}>",
            self.name,
            short_type_name(type_name::<T>())
        )
    }
}

/// Strip module paths from a type name: `alloc::string::String` → `String`
fn short_type_name(full: &str) -> String {
    TYPE_PATH_RE.replace_all(full, "").into_owned()
}
